// Service module exports

pub mod catalog;
pub mod clock;
pub mod format;
pub mod schedule;
pub mod session;
pub mod settings;
pub mod ticker;
