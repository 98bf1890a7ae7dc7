use crate::course::{Course, CourseDraft};
use crate::course_validation::CourseValidationError;
use crate::grid::{SlotGrid, SlotGridConfig};
use crate::placement;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableSummary {
    pub course_count: usize,
    pub placed_count: usize,
    pub unplaced: Vec<i64>,
}

impl TimetableSummary {
    pub fn to_status_line(&self) -> String {
        let mut parts = Vec::new();
        parts.push(format!("courses={}", self.course_count));
        parts.push(format!("placed={}", self.placed_count));
        if !self.unplaced.is_empty() {
            let ids = self
                .unplaced
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            parts.push(format!("unplaced={}", ids));
        }
        parts.join(", ")
    }
}

/// Owns the course collection for a session. All mutation goes through this
/// type; the collection keeps insertion order and ids come from a strictly
/// monotonic counter.
pub struct Timetable {
    courses: Vec<Course>,
    grid: SlotGrid,
    grid_is_custom: bool,
    next_id: i64,
}

impl Timetable {
    pub(crate) fn from_parts(grid: SlotGrid, grid_is_custom: bool) -> Self {
        Self {
            courses: Vec::new(),
            grid,
            grid_is_custom,
            next_id: 1,
        }
    }

    pub fn new() -> Self {
        Self::from_parts(SlotGrid::default(), false)
    }

    pub fn with_grid(grid: SlotGrid) -> Self {
        Self::from_parts(grid, true)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn find_course(&self, course_id: i64) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == course_id)
    }

    pub fn add_course(&mut self, draft: CourseDraft) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        self.courses.push(draft.into_course(id));
        id
    }

    /// Append an existing record, e.g. one read back from storage.
    pub fn insert_course(&mut self, course: Course) -> Result<(), CourseValidationError> {
        if self.courses.iter().any(|existing| existing.id == course.id) {
            return Err(CourseValidationError::new(format!(
                "duplicate course id {}",
                course.id
            )));
        }
        // Resume the id sequence past imported records.
        self.next_id = self.next_id.max(course.id + 1);
        self.courses.push(course);
        Ok(())
    }

    pub fn remove_course(&mut self, course_id: i64) -> bool {
        let before = self.courses.len();
        self.courses.retain(|course| course.id != course_id);
        self.courses.len() != before
    }

    pub fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    pub fn grid_is_custom(&self) -> bool {
        self.grid_is_custom
    }

    pub fn grid_config(&self) -> SlotGridConfig {
        self.grid.to_config()
    }

    pub fn set_grid(&mut self, grid: SlotGrid) {
        self.grid = grid;
        self.grid_is_custom = true;
    }

    pub fn set_grid_from_config(&mut self, config: &SlotGridConfig) {
        self.set_grid(SlotGrid::from_config(config));
    }

    pub fn reset_grid_to_default(&mut self) {
        self.grid = SlotGrid::default();
        self.grid_is_custom = false;
    }

    pub fn placement(&self, course: &Course) -> Vec<NaiveTime> {
        placement::slots_occupied(&course.start_time, course.duration_minutes, &self.grid)
    }

    pub fn summary(&self) -> TimetableSummary {
        let mut unplaced = Vec::new();
        for course in &self.courses {
            if self.placement(course).is_empty() {
                unplaced.push(course.id);
            }
        }
        TimetableSummary {
            course_count: self.courses.len(),
            placed_count: self.courses.len() - unplaced.len(),
            unplaced,
        }
    }
}
