use super::{PersistenceError, PersistenceResult, TimetableStore};
use crate::course::{Course, Weekday};
use crate::grid::{SlotGrid, SlotGridConfig};
use crate::timetable::Timetable;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize)]
struct TimetableSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    grid: Option<SlotGridConfig>,
    #[serde(default)]
    grid_is_custom: bool,
    courses: Vec<Course>,
}

impl TimetableSnapshot {
    fn from_timetable(timetable: &Timetable) -> PersistenceResult<Self> {
        super::validate_courses(timetable.courses())?;
        Ok(Self {
            grid: Some(timetable.grid_config()),
            grid_is_custom: timetable.grid_is_custom(),
            courses: timetable.courses().to_vec(),
        })
    }

    fn into_timetable(self) -> PersistenceResult<Timetable> {
        super::validate_courses(&self.courses)?;
        let grid = match &self.grid {
            Some(config) => super::grid_from_config(config)?,
            None => SlotGrid::default(),
        };

        let mut timetable = Timetable::from_parts(grid, self.grid_is_custom);
        for course in self.courses {
            timetable
                .insert_course(course)
                .map_err(|err| PersistenceError::InvalidData(err.to_string()))?;
        }
        Ok(timetable)
    }
}

pub fn save_timetable_to_json<P: AsRef<Path>>(
    timetable: &Timetable,
    path: P,
) -> PersistenceResult<()> {
    let snapshot = TimetableSnapshot::from_timetable(timetable)?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &snapshot)?;
    Ok(())
}

pub fn load_timetable_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<Timetable> {
    let file = File::open(path)?;
    let snapshot: TimetableSnapshot = serde_json::from_reader(file)?;
    snapshot.into_timetable()
}

/// File-backed store: one JSON document plays the role of the single
/// durable key. A missing file is the no-prior-value case, not an error.
pub struct JsonTimetableStore {
    path: PathBuf,
}

impl JsonTimetableStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TimetableStore for JsonTimetableStore {
    fn save_timetable(&self, timetable: &Timetable) -> PersistenceResult<()> {
        save_timetable_to_json(timetable, &self.path)
    }

    fn load_timetable(&self) -> PersistenceResult<Option<Timetable>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let snapshot: TimetableSnapshot = serde_json::from_reader(file)?;
        Ok(Some(snapshot.into_timetable()?))
    }
}

#[derive(Default, Serialize, Deserialize)]
struct CourseCsvRecord {
    id: i64,
    name: String,
    classroom: String,
    day: String,
    start_time: String,
    duration_minutes: i64,
    #[serde(default)]
    grid_json: String,
    #[serde(default)]
    grid_is_custom: String,
}

impl From<&Course> for CourseCsvRecord {
    fn from(course: &Course) -> Self {
        let mut record = CourseCsvRecord::default();
        record.id = course.id;
        record.name = course.name.clone();
        record.classroom = course.classroom.clone();
        record.day = course.day.as_str().to_string();
        record.start_time = course.start_time.clone();
        record.duration_minutes = course.duration_minutes;
        record
    }
}

impl CourseCsvRecord {
    fn grid_row(timetable: &Timetable) -> PersistenceResult<Self> {
        let grid_json = serde_json::to_string(&timetable.grid_config())?;
        let mut record = CourseCsvRecord::default();
        record.name = "__grid__".to_string();
        record.grid_json = grid_json;
        record.grid_is_custom = timetable.grid_is_custom().to_string();
        Ok(record)
    }

    fn is_grid_row(&self) -> bool {
        !self.grid_json.trim().is_empty()
    }

    fn into_course(self) -> PersistenceResult<Course> {
        if self.is_grid_row() {
            return Err(PersistenceError::InvalidData(
                "grid row cannot be converted to course".into(),
            ));
        }
        let day = Weekday::from_str(self.day.trim()).ok_or_else(|| {
            PersistenceError::InvalidData(format!("invalid day '{}'", self.day))
        })?;
        Ok(Course::new(
            self.id,
            self.name,
            self.classroom,
            day,
            self.start_time,
            self.duration_minutes,
        ))
    }
}

pub fn save_timetable_to_csv<P: AsRef<Path>>(
    timetable: &Timetable,
    path: P,
) -> PersistenceResult<()> {
    super::validate_courses(timetable.courses())?;
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    writer.serialize(CourseCsvRecord::grid_row(timetable)?)?;
    for course in timetable.courses() {
        writer.serialize(CourseCsvRecord::from(course))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn load_timetable_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<Timetable> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut courses = Vec::new();
    let mut grid_config: Option<SlotGridConfig> = None;
    let mut grid_is_custom = false;
    for record in reader.deserialize::<CourseCsvRecord>() {
        let record = record?;
        if record.is_grid_row() {
            if grid_config.is_some() {
                return Err(PersistenceError::InvalidData(
                    "CSV file contained multiple grid rows".into(),
                ));
            }
            grid_config = Some(serde_json::from_str(&record.grid_json).map_err(|err| {
                PersistenceError::InvalidData(format!("invalid grid json: {err}"))
            })?);
            if !record.grid_is_custom.trim().is_empty() {
                grid_is_custom = record
                    .grid_is_custom
                    .trim()
                    .parse::<bool>()
                    .unwrap_or(false);
            }
            continue;
        }
        courses.push(record.into_course()?);
    }

    let snapshot = TimetableSnapshot {
        grid_is_custom: grid_is_custom && grid_config.is_some(),
        grid: grid_config,
        courses,
    };
    snapshot.into_timetable()
}
