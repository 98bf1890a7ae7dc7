use super::{PersistenceError, PersistenceResult, TimetableStore};
use crate::course::Course;
use crate::grid::SlotGridConfig;
use crate::timetable::Timetable;
use rusqlite::{Connection, OptionalExtension, params};
use std::sync::Mutex;

pub struct SqliteTimetableStore {
    connection: Mutex<Connection>,
}

impl SqliteTimetableStore {
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> PersistenceResult<Self> {
        let connection = Connection::open(path)?;
        Self::initialize_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn initialize_schema(connection: &Connection) -> PersistenceResult<()> {
        let ddl = r#"
            CREATE TABLE IF NOT EXISTS timetable_grid (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                grid_json TEXT NOT NULL,
                grid_is_custom INTEGER NOT NULL DEFAULT 0
            );
            CREATE TABLE IF NOT EXISTS courses (
                position INTEGER PRIMARY KEY,
                course_json TEXT NOT NULL
            );
        "#;
        connection.execute_batch(ddl)?;
        Ok(())
    }

    fn save_grid(
        &self,
        tx: &rusqlite::Transaction,
        timetable: &Timetable,
    ) -> PersistenceResult<()> {
        let json = serde_json::to_string(&timetable.grid_config())?;
        tx.execute("DELETE FROM timetable_grid", [])?;
        tx.execute(
            "INSERT INTO timetable_grid (id, grid_json, grid_is_custom) VALUES (1, ?1, ?2)",
            params![json, timetable.grid_is_custom()],
        )?;
        Ok(())
    }

    fn save_courses(
        &self,
        tx: &rusqlite::Transaction,
        timetable: &Timetable,
    ) -> PersistenceResult<()> {
        tx.execute("DELETE FROM courses", [])?;
        let mut stmt = tx.prepare("INSERT INTO courses (position, course_json) VALUES (?1, ?2)")?;
        // Position preserves insertion order; ids stay free for lookup only.
        for (position, course) in timetable.courses().iter().enumerate() {
            let json = serde_json::to_string(course)?;
            stmt.execute(params![position as i64, json])?;
        }
        Ok(())
    }
}

impl TimetableStore for SqliteTimetableStore {
    fn save_timetable(&self, timetable: &Timetable) -> PersistenceResult<()> {
        super::validate_courses(timetable.courses())?;
        let mut conn = self.connection.lock().expect("sqlite mutex poisoned");
        let tx = conn.transaction()?;
        self.save_grid(&tx, timetable)?;
        self.save_courses(&tx, timetable)?;
        tx.commit()?;
        Ok(())
    }

    fn load_timetable(&self) -> PersistenceResult<Option<Timetable>> {
        let conn = self.connection.lock().expect("sqlite mutex poisoned");

        let mut stmt =
            conn.prepare("SELECT grid_json, grid_is_custom FROM timetable_grid WHERE id = 1")?;
        let grid_row: Option<(String, bool)> = stmt
            .query_row([], |row| Ok((row.get(0)?, row.get(1)?)))
            .optional()?;

        let Some((grid_json, grid_is_custom)) = grid_row else {
            return Ok(None);
        };

        let config: SlotGridConfig = serde_json::from_str(&grid_json)?;
        let grid = super::grid_from_config(&config)?;

        let mut stmt = conn.prepare("SELECT course_json FROM courses ORDER BY position ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut courses = Vec::new();
        for json in rows {
            let json = json?;
            let course: Course = serde_json::from_str(&json)?;
            courses.push(course);
        }

        super::validate_courses(&courses)?;

        let mut timetable = Timetable::from_parts(grid, grid_is_custom);
        for course in courses {
            timetable
                .insert_course(course)
                .map_err(|err| PersistenceError::InvalidData(err.to_string()))?;
        }

        Ok(Some(timetable))
    }
}
