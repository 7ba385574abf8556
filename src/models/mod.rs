// Module exports for models

pub mod countdown;
pub mod occurrence;
pub mod status;
