use log::trace;
use rand::Rng;
use rand::prelude::IndexedRandom;

use crate::data::{Assignment, SessionKind, Subject, TimeInterval, TimetableRequest};
use crate::tracker::ResourceState;

/// Produces the assignments for one (day, interval) cell and commits
/// them to the resource state.
///
/// Candidates are filtered for eligibility first and then drawn from
/// uniformly, so every path through here is single-pass: no retry loop,
/// no iteration ceiling. An empty result for a teaching interval is a
/// valid outcome, not an error.
pub fn fill_cell<R: Rng>(
    req: &TimetableRequest,
    state: &mut ResourceState,
    rng: &mut R,
    day: &str,
    interval: &TimeInterval,
) -> Vec<Assignment> {
    match interval.kind {
        SessionKind::Lecture => allocate_lecture(req, state, rng, day, interval),
        SessionKind::Lab => allocate_lab(req, state, rng, day, interval),
        kind => vec![Assignment::placeholder(kind, interval.label())],
    }
}

/// Draws one theory subject under its daily cap with a free teacher,
/// plus one free theory room. The single resulting assignment covers
/// every batch of the division.
fn allocate_lecture<R: Rng>(
    req: &TimetableRequest,
    state: &mut ResourceState,
    rng: &mut R,
    day: &str,
    interval: &TimeInterval,
) -> Vec<Assignment> {
    let candidates: Vec<&Subject> = req
        .subjects
        .iter()
        .filter(|s| state.lecture_ok(day, &s.name) && state.is_teacher_free(&s.teacher))
        .collect();
    let Some(subject) = candidates.choose(rng) else {
        trace!("no eligible theory subject for {} {}", day, interval.label());
        return Vec::new();
    };

    let free_rooms: Vec<u32> = (1..=req.theory_rooms)
        .filter(|index| state.is_room_free(&theory_room(*index)))
        .collect();
    let Some(index) = free_rooms.choose(rng) else {
        trace!("no free theory room for {} {}", day, interval.label());
        return Vec::new();
    };

    let room = theory_room(*index);
    state.occupy(&subject.teacher, &room);
    state.record_lecture(day, &subject.name);
    vec![Assignment::lecture(
        subject,
        room,
        req.batches.clone(),
        interval.label(),
    )]
}

/// Scans lab subjects in configuration order; the first one under its
/// daily cap that places at least one batch claims the whole interval.
/// Each placed batch gets its own room; batches at their weekly quota
/// are skipped. If nothing places, the interval is repurposed as
/// lecture time.
fn allocate_lab<R: Rng>(
    req: &TimetableRequest,
    state: &mut ResourceState,
    rng: &mut R,
    day: &str,
    interval: &TimeInterval,
) -> Vec<Assignment> {
    if req.lab_rooms > 0 {
        for subject in &req.labs {
            if !state.daily_lab_ok(&subject.name) {
                continue;
            }
            let mut placed = Vec::new();
            for (batch_index, batch) in req.batches.iter().enumerate() {
                if !state.weekly_lab_ok(batch, &subject.name, subject.weekly_frequency) {
                    continue;
                }
                let room = lab_room(batch_index as u32 % req.lab_rooms + 1);
                // When batches outnumber lab rooms the index wraps onto
                // an occupied room; skip the batch for this interval
                // instead of double-booking. Its weekly quota is
                // untouched, so it catches up in a later lab slot.
                if !state.is_room_free(&room) {
                    continue;
                }
                state.occupy(&subject.teacher, &room);
                state.record_lab(batch, &subject.name);
                placed.push(Assignment::lab(subject, room, batch.clone(), interval.label()));
            }
            if !placed.is_empty() {
                state.record_lab_interval(&subject.name);
                return placed;
            }
        }
    }

    // Every lab quota is exhausted (or there are no lab rooms); unused
    // lab capacity becomes lecture time rather than dead air.
    allocate_lecture(req, state, rng, day, interval)
}

fn theory_room(index: u32) -> String {
    format!("A1-{index}")
}

fn lab_room(index: u32) -> String {
    format!("A2-{index}")
}
