use chrono::NaiveTime;
use timetable_tool::{SlotGrid, SlotGridConfig};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn default_grid_has_sixteen_half_hour_marks() {
    let grid = SlotGrid::default();
    assert_eq!(grid.marks().len(), 16);
    assert_eq!(grid.marks().first(), Some(&t(9, 0)));
    assert_eq!(grid.marks().last(), Some(&t(16, 30)));
    assert_eq!(grid.interval_minutes(), 30);
}

#[test]
fn labels_are_zero_padded() {
    let grid = SlotGrid::default();
    let labels = grid.labels();
    assert_eq!(labels[0], "09:00");
    assert_eq!(labels[1], "09:30");
    assert_eq!(labels[15], "16:30");
}

#[test]
fn position_matches_exact_labels_only() {
    let grid = SlotGrid::default();
    assert_eq!(grid.position("09:00"), Some(0));
    assert_eq!(grid.position("16:30"), Some(15));
    assert_eq!(grid.position("9:00"), None);
    assert_eq!(grid.position("08:30"), None);
    assert_eq!(grid.position(""), None);
}

#[test]
fn custom_window_generates_expected_marks() {
    let grid = SlotGrid::with_window(t(8, 0), t(10, 0), 60);
    assert_eq!(grid.marks(), &[t(8, 0), t(9, 0), t(10, 0)]);
}

#[test]
fn window_not_divisible_by_interval_stops_short() {
    let grid = SlotGrid::with_window(t(9, 0), t(10, 10), 30);
    assert_eq!(grid.marks(), &[t(9, 0), t(9, 30), t(10, 0)]);
}

#[test]
fn single_mark_window() {
    let grid = SlotGrid::with_window(t(12, 0), t(12, 0), 30);
    assert_eq!(grid.marks(), &[t(12, 0)]);
}

#[test]
fn config_round_trip() {
    let grid = SlotGrid::with_window(t(10, 0), t(12, 30), 30);
    let config = grid.to_config();
    assert_eq!(SlotGrid::from_config(&config), grid);
}

#[test]
fn config_serde_round_trip() {
    let config = SlotGridConfig::new(t(9, 0), t(16, 30), 30);
    let json = serde_json::to_string(&config).unwrap();
    let parsed: SlotGridConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn default_config_matches_default_grid() {
    assert_eq!(SlotGridConfig::default(), SlotGrid::default().to_config());
}

#[test]
#[should_panic(expected = "positive interval")]
fn zero_interval_is_rejected() {
    SlotGrid::with_window(t(9, 0), t(10, 0), 0);
}

#[test]
#[should_panic(expected = "must not precede")]
fn inverted_window_is_rejected() {
    SlotGrid::with_window(t(10, 0), t(9, 0), 30);
}
