use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Type aliases for clarity
pub type Minute = u32;
pub type DayName = String;
pub type IntervalLabel = String;
/// day name -> assignments allocated for that cell
pub type DayGrid = BTreeMap<DayName, Vec<Assignment>>;
/// interval label ("HH:MM-HH:MM") -> per-day assignments
pub type DivisionGrid = BTreeMap<IntervalLabel, DayGrid>;
/// "Division-N" -> that division's grid
pub type Timetable = BTreeMap<String, DivisionGrid>;

/// Kind of session a time interval (and the assignment filling it) carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionKind {
    Lecture,
    Lab,
    Break,
    Lunch,
}

/// A theory subject taught by a single designated teacher.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub name: String,
    pub teacher: String,
}

/// A lab subject; `weekly_frequency` caps how many times it may be
/// scheduled for any one batch within a week.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabSubject {
    pub name: String,
    pub teacher: String,
    pub weekly_frequency: u32,
}

/// Lunch window in whole hours. Defaults to 12:00-13:00.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LunchWindow {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Default for LunchWindow {
    fn default() -> Self {
        Self {
            start_hour: 12,
            end_hour: 13,
        }
    }
}

/// The complete input for one timetable generation request.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableRequest {
    #[serde(default = "default_divisions")]
    pub divisions: u32,
    pub batches: Vec<String>,
    pub theory_rooms: u32,
    pub lab_rooms: u32,
    pub subjects: Vec<Subject>,
    pub labs: Vec<LabSubject>,
    pub days: Vec<DayName>,
    pub start_hour: u32,
    pub end_hour: u32,
    /// Lecture length in minutes.
    pub lec_duration: Minute,
    /// Lab length in minutes.
    pub lab_duration: Minute,
    /// Absent means the default 12-13 window, applied only if it fits the day.
    #[serde(default)]
    pub lunch: Option<LunchWindow>,
}

fn default_divisions() -> u32 {
    1
}

/// One typed span of the daily grid, in minutes from midnight.
/// Half-open: includes `start_minute`, excludes `end_minute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInterval {
    pub kind: SessionKind,
    pub start_minute: Minute,
    pub end_minute: Minute,
}

impl TimeInterval {
    pub fn new(kind: SessionKind, start_minute: Minute, end_minute: Minute) -> Self {
        Self {
            kind,
            start_minute,
            end_minute,
        }
    }

    /// Human-readable label, e.g. "09:00-10:00". Zero-padded so that
    /// lexicographic order equals chronological order.
    pub fn label(&self) -> IntervalLabel {
        format!(
            "{}-{}",
            fmt_minute(self.start_minute),
            fmt_minute(self.end_minute)
        )
    }
}

fn fmt_minute(m: Minute) -> String {
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// The atomic unit placed into the schedule.
///
/// Lectures carry every batch of the division; labs carry exactly one.
/// Break and lunch placeholders carry no subject, teacher, room or batches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub kind: SessionKind,
    pub subject: Option<String>,
    pub teacher: Option<String>,
    pub room: Option<String>,
    pub batches: Vec<String>,
    pub time: IntervalLabel,
}

impl Assignment {
    pub fn lecture(
        subject: &Subject,
        room: String,
        batches: Vec<String>,
        time: IntervalLabel,
    ) -> Self {
        Self {
            kind: SessionKind::Lecture,
            subject: Some(subject.name.clone()),
            teacher: Some(subject.teacher.clone()),
            room: Some(room),
            batches,
            time,
        }
    }

    pub fn lab(subject: &LabSubject, room: String, batch: String, time: IntervalLabel) -> Self {
        Self {
            kind: SessionKind::Lab,
            subject: Some(subject.name.clone()),
            teacher: Some(subject.teacher.clone()),
            room: Some(room),
            batches: vec![batch],
            time,
        }
    }

    pub fn placeholder(kind: SessionKind, time: IntervalLabel) -> Self {
        Self {
            kind,
            subject: None,
            teacher: None,
            room: None,
            batches: Vec::new(),
            time,
        }
    }
}
