use crate::course::Course;
use crate::course_validation;
use crate::grid::{SlotGrid, SlotGridConfig};
use crate::timetable::Timetable;
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PersistenceError {
    Serialization(SerdeJsonError),
    Io(io::Error),
    #[cfg(feature = "sqlite")]
    Sqlite(rusqlite::Error),
    Csv(csv::Error),
    InvalidData(String),
    NotFound,
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Serialization(err) => write!(f, "serialization error: {err}"),
            PersistenceError::Io(err) => write!(f, "io error: {err}"),
            #[cfg(feature = "sqlite")]
            PersistenceError::Sqlite(err) => write!(f, "sqlite error: {err}"),
            PersistenceError::Csv(err) => write!(f, "csv error: {err}"),
            PersistenceError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
            PersistenceError::NotFound => write!(f, "no timetable stored"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<SerdeJsonError> for PersistenceError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<io::Error> for PersistenceError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for PersistenceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<csv::Error> for PersistenceError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// The durable store seam: one value holding the whole timetable.
pub trait TimetableStore {
    fn save_timetable(&self, timetable: &Timetable) -> PersistenceResult<()>;
    fn load_timetable(&self) -> PersistenceResult<Option<Timetable>>;
}

pub fn validate_courses(courses: &[Course]) -> PersistenceResult<()> {
    course_validation::validate_course_collection(courses)
        .map_err(|err| PersistenceError::InvalidData(err.to_string()))
}

/// Build a grid from stored configuration, rejecting windows a grid cannot
/// be constructed from.
pub(crate) fn grid_from_config(config: &SlotGridConfig) -> PersistenceResult<SlotGrid> {
    if config.interval_minutes() <= 0 {
        return Err(PersistenceError::InvalidData(format!(
            "invalid grid interval {} minutes",
            config.interval_minutes()
        )));
    }
    if config.window_end() < config.window_start() {
        return Err(PersistenceError::InvalidData(
            "grid window end precedes its start".into(),
        ));
    }
    Ok(SlotGrid::from_config(config))
}

pub mod file;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use file::{
    JsonTimetableStore, load_timetable_from_csv, load_timetable_from_json, save_timetable_to_csv,
    save_timetable_to_json,
};
