// Workshop Countdown Library
// Exports all modules for testing and reuse

pub mod models;
pub mod services;
pub mod utils;

pub use models::countdown::CountdownSnapshot;
pub use models::occurrence::Occurrence;
pub use models::status::{AnnotatedOccurrence, OccurrenceStatus};
pub use services::schedule::{
    annotate, classify, compute_countdown, evaluate, select_next_occurrence, NextOccurrence,
    ScheduleView, Scheduler,
};
