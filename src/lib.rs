pub mod course;
pub(crate) mod course_validation;
pub mod grid;
pub mod persistence;
pub mod placement;
pub mod planner;
pub mod projection;
pub mod timetable;

pub use course::{Course, CourseDraft, Weekday};
pub use course_validation::CourseValidationError;
pub use grid::{SlotGrid, SlotGridConfig, mark_label};
#[cfg(feature = "sqlite")]
pub use persistence::sqlite::SqliteTimetableStore;
pub use persistence::{
    JsonTimetableStore, PersistenceError, TimetableStore, load_timetable_from_csv,
    load_timetable_from_json, save_timetable_to_csv, save_timetable_to_json, validate_courses,
};
pub use placement::{end_time, slots_occupied};
pub use planner::Planner;
pub use projection::{CellCourse, CourseRow, cell_key, course_list, grid_cells};
pub use timetable::{Timetable, TimetableSummary};
