use timetable_tool::{
    Course, CourseDraft, PersistenceError, SlotGridConfig, Timetable, Weekday,
    load_timetable_from_csv, load_timetable_from_json, save_timetable_to_csv,
    save_timetable_to_json,
};
use chrono::NaiveTime;
use tempfile::NamedTempFile;

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn build_sample_timetable() -> Timetable {
    let mut timetable = Timetable::new();
    timetable.add_course(CourseDraft::new("Algorithms", "101", Weekday::Mon, "09:00", 90));
    timetable.add_course(CourseDraft::new("Databases", "B2", Weekday::Thu, "13:30", 60));
    timetable.add_course(CourseDraft::new(
        "Evening Seminar",
        "Aud 1",
        Weekday::Fri,
        "16:00",
        90,
    ));
    timetable
}

#[test]
fn json_round_trip_preserves_courses_and_order() {
    let timetable = build_sample_timetable();
    let file = NamedTempFile::new().unwrap();

    save_timetable_to_json(&timetable, file.path()).unwrap();
    let loaded = load_timetable_from_json(file.path()).unwrap();

    assert_eq!(loaded.courses(), timetable.courses());
    assert_eq!(loaded.grid_config(), timetable.grid_config());
    assert!(!loaded.grid_is_custom());
}

#[test]
fn json_round_trip_preserves_empty_collection() {
    let timetable = Timetable::new();
    let file = NamedTempFile::new().unwrap();

    save_timetable_to_json(&timetable, file.path()).unwrap();
    let loaded = load_timetable_from_json(file.path()).unwrap();

    assert!(loaded.courses().is_empty());
}

#[test]
fn json_round_trip_preserves_custom_grid() {
    let mut timetable = build_sample_timetable();
    timetable.set_grid_from_config(&SlotGridConfig::new(t(8, 0), t(18, 0), 30));
    let file = NamedTempFile::new().unwrap();

    save_timetable_to_json(&timetable, file.path()).unwrap();
    let loaded = load_timetable_from_json(file.path()).unwrap();

    assert!(loaded.grid_is_custom());
    assert_eq!(loaded.grid().marks().len(), 21);
}

#[test]
fn json_uses_the_stored_field_names() {
    let timetable = build_sample_timetable();
    let file = NamedTempFile::new().unwrap();

    save_timetable_to_json(&timetable, file.path()).unwrap();
    let text = std::fs::read_to_string(file.path()).unwrap();

    assert!(text.contains("\"startTime\""));
    assert!(text.contains("\"duration\""));
    assert!(text.contains("\"classroom\""));
    assert!(!text.contains("\"duration_minutes\""));
}

#[test]
fn csv_round_trip_preserves_courses() {
    let timetable = build_sample_timetable();
    let file = NamedTempFile::new().unwrap();

    save_timetable_to_csv(&timetable, file.path()).unwrap();
    let loaded = load_timetable_from_csv(file.path()).unwrap();

    assert_eq!(loaded.courses(), timetable.courses());
    assert_eq!(loaded.grid_config(), timetable.grid_config());
}

#[test]
fn csv_with_only_the_grid_row_loads_as_empty() {
    let timetable = Timetable::new();
    let file = NamedTempFile::new().unwrap();

    save_timetable_to_csv(&timetable, file.path()).unwrap();
    let loaded = load_timetable_from_csv(file.path()).unwrap();

    assert!(loaded.courses().is_empty());
    assert_eq!(loaded.grid_config(), timetable.grid_config());
}

#[test]
fn json_load_rejects_duplicate_ids() {
    let snapshot = serde_json::json!({
        "courses": [
            Course::new(1, "Algorithms", "101", Weekday::Mon, "09:00", 60),
            Course::new(1, "Databases", "102", Weekday::Tue, "10:00", 60),
        ]
    });

    let file = NamedTempFile::new().unwrap();
    serde_json::to_writer_pretty(file.as_file(), &snapshot).unwrap();

    let result = load_timetable_from_json(file.path());
    match result {
        Ok(_) => panic!("expected duplicate ids to be rejected"),
        Err(PersistenceError::InvalidData(msg)) => assert!(
            msg.contains("duplicate course id"),
            "unexpected message: {msg}"
        ),
        Err(other) => panic!("expected InvalidData error, got {other:?}"),
    }
}

#[test]
fn json_load_rejects_non_positive_duration() {
    let snapshot = serde_json::json!({
        "courses": [Course::new(1, "Algorithms", "101", Weekday::Mon, "09:00", 0)]
    });

    let file = NamedTempFile::new().unwrap();
    serde_json::to_writer_pretty(file.as_file(), &snapshot).unwrap();

    let result = load_timetable_from_json(file.path());
    match result {
        Ok(_) => panic!("expected non-positive duration to be rejected"),
        Err(PersistenceError::InvalidData(msg)) => assert!(
            msg.contains("non-positive duration"),
            "unexpected message: {msg}"
        ),
        Err(other) => panic!("expected InvalidData error, got {other:?}"),
    }
}

#[test]
fn json_load_rejects_malformed_documents() {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "{ not json").unwrap();

    let result = load_timetable_from_json(file.path());
    assert!(matches!(result, Err(PersistenceError::Serialization(_))));
}

#[test]
fn json_load_rejects_invalid_grid_window() {
    let snapshot = serde_json::json!({
        "grid": {
            "window_start": "09:00:00",
            "window_end": "16:30:00",
            "interval_minutes": 0
        },
        "courses": []
    });

    let file = NamedTempFile::new().unwrap();
    serde_json::to_writer_pretty(file.as_file(), &snapshot).unwrap();

    let result = load_timetable_from_json(file.path());
    match result {
        Ok(_) => panic!("expected invalid grid interval to be rejected"),
        Err(PersistenceError::InvalidData(msg)) => assert!(
            msg.contains("grid interval"),
            "unexpected message: {msg}"
        ),
        Err(other) => panic!("expected InvalidData error, got {other:?}"),
    }
}

#[test]
fn missing_grid_config_loads_the_default_window() {
    let snapshot = serde_json::json!({
        "courses": [Course::new(1, "Algorithms", "101", Weekday::Mon, "09:00", 90)]
    });

    let file = NamedTempFile::new().unwrap();
    serde_json::to_writer_pretty(file.as_file(), &snapshot).unwrap();

    let loaded = load_timetable_from_json(file.path()).unwrap();
    assert_eq!(loaded.grid_config(), SlotGridConfig::default());
    assert!(!loaded.grid_is_custom());
}

#[test]
fn csv_save_rejects_non_positive_duration() {
    let mut timetable = Timetable::new();
    timetable
        .insert_course(Course::new(1, "Broken", "101", Weekday::Mon, "09:00", -30))
        .unwrap();

    let file = NamedTempFile::new().unwrap();
    let result = save_timetable_to_csv(&timetable, file.path());
    match result {
        Ok(_) => panic!("expected non-positive duration to be rejected"),
        Err(PersistenceError::InvalidData(msg)) => assert!(
            msg.contains("non-positive duration"),
            "unexpected message: {msg}"
        ),
        Err(other) => panic!("expected InvalidData error, got {other:?}"),
    }
}

#[test]
fn csv_load_rejects_unknown_days() {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(
        file.path(),
        "id,name,classroom,day,start_time,duration_minutes,grid_json,grid_is_custom\n\
         1,Algorithms,101,sat,09:00,90,,\n",
    )
    .unwrap();

    let result = load_timetable_from_csv(file.path());
    match result {
        Ok(_) => panic!("expected unknown day to be rejected"),
        Err(PersistenceError::InvalidData(msg)) => {
            assert!(msg.contains("invalid day"), "unexpected message: {msg}")
        }
        Err(other) => panic!("expected InvalidData error, got {other:?}"),
    }
}
