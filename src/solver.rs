use itertools::Itertools;
use log::{info, trace};
use rand::Rng;
use std::time::Instant;

use crate::allocator;
use crate::data::{DivisionGrid, SessionKind, Timetable, TimetableRequest};
use crate::error::{Result, ScheduleError};
use crate::timegrid;
use crate::tracker::ResourceState;

/// Generates one timetable per division from the request configuration.
///
/// The whole run is synchronous and owns all of its state; calling it
/// again with the same seeded RNG reproduces the same grid. A caller
/// wanting a different random outcome simply calls again.
pub fn generate<R: Rng>(req: &TimetableRequest, rng: &mut R) -> Result<Timetable> {
    let start_time = Instant::now();

    let intervals = timegrid::build(
        req.start_hour,
        req.end_hour,
        req.lec_duration,
        req.lab_duration,
        req.lunch,
    )?;
    if intervals.is_empty() {
        return Err(ScheduleError::NoValidSlots);
    }

    info!(
        "Generating timetable for {} division(s): {} day(s) x {} interval(s), {} theory and {} lab subject(s), {} batch(es)",
        req.divisions,
        req.days.len(),
        intervals.len(),
        req.subjects.len(),
        req.labs.len(),
        req.batches.len()
    );

    let mut timetable = Timetable::new();
    for division in 1..=req.divisions {
        // Divisions do not share resources, so each gets fresh state.
        let mut state = ResourceState::new();
        let mut grid = DivisionGrid::new();

        for day in &req.days {
            state.reset_for_day();
            for interval in &intervals {
                state.reset_for_interval();
                let cell = allocator::fill_cell(req, &mut state, rng, day, interval);
                trace!(
                    "division {} {} {}: {} assignment(s)",
                    division,
                    day,
                    interval.label(),
                    cell.len()
                );
                grid.entry(interval.label())
                    .or_default()
                    .insert(day.clone(), cell);
            }
        }

        let conflicting = conflicts(&grid);
        debug_assert!(
            conflicting.is_empty(),
            "generated grid has resource conflicts: {conflicting:?}"
        );
        timetable.insert(format!("Division-{division}"), grid);
    }

    info!("Timetable generated in {:.2?}", start_time.elapsed());
    Ok(timetable)
}

/// Re-derives resource conflicts from a finished grid: a room used by
/// two assignments in one cell, or a teacher carrying two different
/// subjects in one cell. Per-batch lab sessions of the one placed
/// subject legitimately share that subject's teacher.
///
/// The allocator's bookkeeping makes this unreachable; it doubles as
/// the test oracle for the conflict-freedom invariant.
pub fn conflicts(grid: &DivisionGrid) -> Vec<String> {
    let mut found = Vec::new();
    for (label, days) in grid {
        for (day, cell) in days {
            let teaching: Vec<_> = cell
                .iter()
                .filter(|a| matches!(a.kind, SessionKind::Lecture | SessionKind::Lab))
                .collect();

            let by_room = teaching
                .iter()
                .filter_map(|a| a.room.as_deref().map(|room| (room, &a.subject)))
                .into_group_map();
            for (room, uses) in by_room {
                if uses.len() > 1 {
                    found.push(format!(
                        "{day} {label}: room {room} booked {} times",
                        uses.len()
                    ));
                }
            }

            let by_teacher = teaching
                .iter()
                .filter_map(|a| a.teacher.as_deref().zip(a.subject.as_deref()))
                .unique()
                .into_group_map();
            for (teacher, subjects) in by_teacher {
                if subjects.len() > 1 {
                    found.push(format!(
                        "{day} {label}: teacher {teacher} assigned to {}",
                        subjects.iter().join(", ")
                    ));
                }
            }
        }
    }
    found
}
