use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

/// The fixed ordered sequence of slot marks spanning one teaching day.
///
/// A mark is both a display row label and the unit of placement granularity;
/// the reference window runs 09:00–16:30 at 30-minute intervals (16 marks).
#[derive(Debug, Clone, PartialEq)]
pub struct SlotGrid {
    marks: Vec<NaiveTime>,
    interval_minutes: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotGridConfig {
    window_start: NaiveTime,
    window_end: NaiveTime,
    interval_minutes: i64,
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self::with_window(
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(16, 30, 0).unwrap(),
            30,
        )
    }
}

impl SlotGrid {
    pub fn with_window(window_start: NaiveTime, window_end: NaiveTime, interval_minutes: i64) -> Self {
        if interval_minutes <= 0 {
            panic!("SlotGrid requires a positive interval");
        }
        if window_end < window_start {
            panic!("SlotGrid window end must not precede its start");
        }

        let span = window_end.signed_duration_since(window_start).num_minutes();
        let marks = (0..=span / interval_minutes)
            .map(|step| window_start + Duration::minutes(step * interval_minutes))
            .collect();

        Self {
            marks,
            interval_minutes,
        }
    }

    pub fn from_config(config: &SlotGridConfig) -> Self {
        Self::with_window(
            config.window_start,
            config.window_end,
            config.interval_minutes,
        )
    }

    pub fn to_config(&self) -> SlotGridConfig {
        SlotGridConfig::from(self)
    }

    pub fn marks(&self) -> &[NaiveTime] {
        &self.marks
    }

    pub fn interval_minutes(&self) -> i64 {
        self.interval_minutes
    }

    pub fn labels(&self) -> Vec<String> {
        self.marks.iter().map(|mark| mark_label(*mark)).collect()
    }

    /// Index of the mark whose rendered label equals `label` exactly.
    /// `"9:00"` does not match `"09:00"`.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.marks.iter().position(|mark| mark_label(*mark) == label)
    }
}

/// Render a mark as its zero-padded `HH:MM` label.
pub fn mark_label(mark: NaiveTime) -> String {
    mark.format("%H:%M").to_string()
}

impl SlotGridConfig {
    pub fn new(window_start: NaiveTime, window_end: NaiveTime, interval_minutes: i64) -> Self {
        if interval_minutes <= 0 {
            panic!("SlotGridConfig requires a positive interval");
        }
        if window_end < window_start {
            panic!("SlotGridConfig window end must not precede its start");
        }

        Self {
            window_start,
            window_end,
            interval_minutes,
        }
    }

    pub fn window_start(&self) -> NaiveTime {
        self.window_start
    }

    pub fn window_end(&self) -> NaiveTime {
        self.window_end
    }

    pub fn interval_minutes(&self) -> i64 {
        self.interval_minutes
    }
}

impl Default for SlotGridConfig {
    fn default() -> Self {
        SlotGridConfig::from(&SlotGrid::default())
    }
}

impl From<&SlotGrid> for SlotGridConfig {
    fn from(grid: &SlotGrid) -> Self {
        let first = *grid
            .marks
            .first()
            .expect("slot grid holds at least one mark");
        let last = *grid
            .marks
            .last()
            .expect("slot grid holds at least one mark");
        Self {
            window_start: first,
            window_end: last,
            interval_minutes: grid.interval_minutes,
        }
    }
}
