mod error_handling;
mod schedule_service;

pub use error_handling::ScheduleError;
pub use schedule_service::{PageRequest, ScheduleService, ScheduleSubList};
