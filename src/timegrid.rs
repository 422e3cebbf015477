use log::debug;

use crate::data::{LunchWindow, Minute, SessionKind, TimeInterval};
use crate::error::{Result, ScheduleError};

/// Filler span emitted when a gap is too short for a lecture or a lab,
/// clipped to whatever room actually remains before the next boundary.
const BREAK_MINUTES: Minute = 10;

/// Partitions one day's [start, end) window into typed intervals.
///
/// The sequence is the same for every day of the week; only the
/// allocator's choices vary. The cursor strictly advances on every
/// iteration (all durations are validated positive), so the walk
/// terminates for any accepted configuration.
pub fn build(
    start_hour: u32,
    end_hour: u32,
    lec_duration: Minute,
    lab_duration: Minute,
    lunch: Option<LunchWindow>,
) -> Result<Vec<TimeInterval>> {
    if start_hour >= end_hour {
        return Err(ScheduleError::InvalidDayWindow {
            start: start_hour,
            end: end_hour,
        });
    }
    if lec_duration == 0 {
        return Err(ScheduleError::InvalidDuration {
            kind: "lecture",
            minutes: lec_duration,
        });
    }
    if lab_duration == 0 {
        return Err(ScheduleError::InvalidDuration {
            kind: "lab",
            minutes: lab_duration,
        });
    }

    let day_start = start_hour * 60;
    let day_end = end_hour * 60;
    let lunch = resolve_lunch(lunch, day_start, day_end)?;

    let mut intervals = Vec::new();
    let mut cursor = day_start;
    while cursor < day_end {
        if let Some((lunch_start, lunch_end)) = lunch {
            if cursor >= lunch_start && cursor < lunch_end {
                intervals.push(TimeInterval::new(SessionKind::Lunch, cursor, lunch_end));
                cursor = lunch_end;
                continue;
            }
        }

        // Teaching intervals may not run into the lunch window.
        let limit = match lunch {
            Some((lunch_start, _)) if cursor < lunch_start => lunch_start,
            _ => day_end,
        };

        let mut emitted = false;
        if cursor + lec_duration <= limit {
            intervals.push(TimeInterval::new(
                SessionKind::Lecture,
                cursor,
                cursor + lec_duration,
            ));
            cursor += lec_duration;
            emitted = true;
        }
        if cursor + lab_duration <= limit {
            intervals.push(TimeInterval::new(
                SessionKind::Lab,
                cursor,
                cursor + lab_duration,
            ));
            cursor += lab_duration;
            emitted = true;
        }
        if !emitted {
            // Gap too short for any session; cover it with an explicit
            // break rather than skipping time silently.
            let break_end = limit.min(cursor + BREAK_MINUTES);
            intervals.push(TimeInterval::new(SessionKind::Break, cursor, break_end));
            cursor = break_end;
        }
    }

    debug!(
        "Built {} intervals for {:02}:00-{:02}:00",
        intervals.len(),
        start_hour,
        end_hour
    );
    Ok(intervals)
}

/// An explicit lunch window must sit fully inside the day and be
/// non-empty. The implicit default applies only where it fits; a day
/// that ends before noon simply has no lunch interval.
fn resolve_lunch(
    lunch: Option<LunchWindow>,
    day_start: Minute,
    day_end: Minute,
) -> Result<Option<(Minute, Minute)>> {
    match lunch {
        Some(w) => {
            let (start, end) = (w.start_hour * 60, w.end_hour * 60);
            if start >= end || start < day_start || end > day_end {
                return Err(ScheduleError::InvalidLunchWindow {
                    start: w.start_hour,
                    end: w.end_hour,
                });
            }
            Ok(Some((start, end)))
        }
        None => {
            let w = LunchWindow::default();
            let (start, end) = (w.start_hour * 60, w.end_hour * 60);
            if start >= day_start && end <= day_end {
                Ok(Some((start, end)))
            } else {
                Ok(None)
            }
        }
    }
}
