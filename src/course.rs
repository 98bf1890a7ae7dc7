use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Teaching days of the timetable grid. Weekend days are outside the
/// schedulable window and have no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "mon" => Some(Weekday::Mon),
            "tue" => Some(Weekday::Tue),
            "wed" => Some(Weekday::Wed),
            "thu" => Some(Weekday::Thu),
            "fri" => Some(Weekday::Fri),
            _ => None,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduled class. Serialized field names are the stored format:
/// `id`, `name`, `classroom`, `day`, `startTime`, `duration`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub classroom: String,
    pub day: Weekday,
    /// Start label in `HH:MM` form. Kept as entered; a label that does not
    /// match a grid mark leaves the course without a placement.
    pub start_time: String,
    #[serde(rename = "duration")]
    pub duration_minutes: i64,
}

impl Course {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        classroom: impl Into<String>,
        day: Weekday,
        start_time: impl Into<String>,
        duration_minutes: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            classroom: classroom.into(),
            day,
            start_time: start_time.into(),
            duration_minutes,
        }
    }

    pub fn start_mark(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.start_time, "%H:%M").ok()
    }
}

/// Form payload for a new course; the timetable assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub name: String,
    pub classroom: String,
    pub day: Weekday,
    pub start_time: String,
    #[serde(rename = "duration")]
    pub duration_minutes: i64,
}

impl CourseDraft {
    pub fn new(
        name: impl Into<String>,
        classroom: impl Into<String>,
        day: Weekday,
        start_time: impl Into<String>,
        duration_minutes: i64,
    ) -> Self {
        Self {
            name: name.into(),
            classroom: classroom.into(),
            day,
            start_time: start_time.into(),
            duration_minutes,
        }
    }

    pub(crate) fn into_course(self, id: i64) -> Course {
        Course {
            id,
            name: self.name,
            classroom: self.classroom,
            day: self.day,
            start_time: self.start_time,
            duration_minutes: self.duration_minutes,
        }
    }
}
