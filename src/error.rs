use thiserror::Error;

/// Failure kinds surfaced by the timetable engine.
///
/// Configuration errors are never retried internally; an interval the
/// allocator cannot fill is normal control flow, not an error.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("day window is inverted or empty: start {start}:00, end {end}:00")]
    InvalidDayWindow { start: u32, end: u32 },

    #[error("{kind} duration must be positive, got {minutes} minutes")]
    InvalidDuration { kind: &'static str, minutes: u32 },

    #[error("lunch window {start}:00-{end}:00 is malformed or outside the teaching day")]
    InvalidLunchWindow { start: u32, end: u32 },

    #[error("no valid slots could be built from the configured day window")]
    NoValidSlots,
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
