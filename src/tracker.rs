use std::collections::{HashMap, HashSet};

// Fixed policy caps, intentionally not configurable.
/// A theory subject appears at most this many times per day.
pub const MAX_DAILY_LECTURES: u32 = 2;
/// A lab subject occupies at most this many intervals per day.
pub const MAX_DAILY_LABS: u32 = 2;

/// Per-generation-run resource bookkeeping.
///
/// Occupancy is scoped to the current interval; lab counters are scoped
/// per day and per week; lecture counters per day. All reads are pure
/// and all writes monotonic within their reset scope. Nothing here
/// blocks or fails: callers check before committing.
#[derive(Debug, Default)]
pub struct ResourceState {
    occupied_teachers: HashSet<String>,
    occupied_rooms: HashSet<String>,
    /// subject -> intervals carrying it today
    daily_lab_count: HashMap<String, u32>,
    /// batch -> subject -> sessions this week
    weekly_lab_count: HashMap<String, HashMap<String, u32>>,
    /// day -> subject -> lectures that day
    daily_lecture_count: HashMap<String, HashMap<String, u32>>,
}

impl ResourceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_teacher_free(&self, teacher: &str) -> bool {
        !self.occupied_teachers.contains(teacher)
    }

    pub fn is_room_free(&self, room: &str) -> bool {
        !self.occupied_rooms.contains(room)
    }

    pub fn occupy(&mut self, teacher: &str, room: &str) {
        self.occupied_teachers.insert(teacher.to_owned());
        self.occupied_rooms.insert(room.to_owned());
    }

    /// Occupancy does not carry across intervals.
    pub fn reset_for_interval(&mut self) {
        self.occupied_teachers.clear();
        self.occupied_rooms.clear();
    }

    /// Daily counters start fresh each day; weekly counters persist for
    /// the whole run, which is what enforces `weekly_frequency`.
    pub fn reset_for_day(&mut self) {
        self.daily_lab_count.clear();
        self.reset_for_interval();
    }

    pub fn daily_lab_ok(&self, subject: &str) -> bool {
        self.daily_lab_count.get(subject).copied().unwrap_or(0) < MAX_DAILY_LABS
    }

    pub fn weekly_lab_ok(&self, batch: &str, subject: &str, weekly_frequency: u32) -> bool {
        let count = self
            .weekly_lab_count
            .get(batch)
            .and_then(|per_subject| per_subject.get(subject))
            .copied()
            .unwrap_or(0);
        count < weekly_frequency
    }

    /// One more lab session for this batch this week.
    pub fn record_lab(&mut self, batch: &str, subject: &str) {
        *self
            .weekly_lab_count
            .entry(batch.to_owned())
            .or_default()
            .entry(subject.to_owned())
            .or_insert(0) += 1;
    }

    /// One more interval carrying this lab subject today. Called once
    /// per interval, not once per batch.
    pub fn record_lab_interval(&mut self, subject: &str) {
        *self.daily_lab_count.entry(subject.to_owned()).or_insert(0) += 1;
    }

    pub fn lecture_ok(&self, day: &str, subject: &str) -> bool {
        let count = self
            .daily_lecture_count
            .get(day)
            .and_then(|per_subject| per_subject.get(subject))
            .copied()
            .unwrap_or(0);
        count < MAX_DAILY_LECTURES
    }

    pub fn record_lecture(&mut self, day: &str, subject: &str) {
        *self
            .daily_lecture_count
            .entry(day.to_owned())
            .or_default()
            .entry(subject.to_owned())
            .or_insert(0) += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupancy_is_interval_scoped() {
        let mut state = ResourceState::new();
        assert!(state.is_teacher_free("Teacher1"));
        assert!(state.is_room_free("A1-1"));

        state.occupy("Teacher1", "A1-1");
        assert!(!state.is_teacher_free("Teacher1"));
        assert!(!state.is_room_free("A1-1"));
        assert!(state.is_room_free("A1-2"));

        state.reset_for_interval();
        assert!(state.is_teacher_free("Teacher1"));
        assert!(state.is_room_free("A1-1"));
    }

    #[test]
    fn lecture_cap_is_per_day_per_subject() {
        let mut state = ResourceState::new();
        assert!(state.lecture_ok("Monday", "DBMS"));
        state.record_lecture("Monday", "DBMS");
        assert!(state.lecture_ok("Monday", "DBMS"));
        state.record_lecture("Monday", "DBMS");
        assert!(!state.lecture_ok("Monday", "DBMS"));
        // other days and subjects are unaffected
        assert!(state.lecture_ok("Tuesday", "DBMS"));
        assert!(state.lecture_ok("Monday", "TOC"));
    }

    #[test]
    fn daily_lab_count_resets_weekly_count_persists() {
        let mut state = ResourceState::new();
        state.record_lab("K4", "DBMSL");
        state.record_lab_interval("DBMSL");
        state.record_lab_interval("DBMSL");
        assert!(!state.daily_lab_ok("DBMSL"));
        assert!(state.weekly_lab_ok("K4", "DBMSL", 2));

        state.reset_for_day();
        assert!(state.daily_lab_ok("DBMSL"));
        // the weekly counter survived the day boundary
        state.record_lab("K4", "DBMSL");
        assert!(!state.weekly_lab_ok("K4", "DBMSL", 2));
        assert!(state.weekly_lab_ok("L4", "DBMSL", 2));
    }
}
