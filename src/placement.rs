use crate::grid::SlotGrid;
use chrono::{NaiveTime, Timelike};

/// Marks a course occupies on the grid, in grid order.
///
/// The run starts at the mark whose label equals `start_time` and covers
/// `ceil(duration / interval)` marks, truncated at the end of the grid.
/// A label with no matching mark yields an empty run, as does a
/// non-positive duration; neither is an error.
pub fn slots_occupied(start_time: &str, duration_minutes: i64, grid: &SlotGrid) -> Vec<NaiveTime> {
    let Some(start_index) = grid.position(start_time) else {
        return Vec::new();
    };

    let interval = grid.interval_minutes();
    let slot_count = (((duration_minutes + interval - 1) / interval).max(0)) as usize;
    let end_index = start_index.saturating_add(slot_count).min(grid.marks().len());

    grid.marks()[start_index..end_index].to_vec()
}

/// End-of-course label from minutes-of-day arithmetic.
///
/// Hours are not wrapped at 24, so a course reaching past midnight renders
/// labels like `25:00`.
pub fn end_time(start: NaiveTime, duration_minutes: i64) -> String {
    let total_minutes = i64::from(start.hour()) * 60 + i64::from(start.minute()) + duration_minutes;
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}
