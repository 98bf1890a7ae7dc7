use crate::course::Weekday;
use crate::grid::mark_label;
use crate::placement;
use crate::timetable::Timetable;
use chrono::NaiveTime;
use serde::Serialize;
use std::collections::BTreeMap;

/// One row of the list view, in collection order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRow {
    pub id: i64,
    pub name: String,
    pub classroom: String,
    pub day: Weekday,
    pub start_time: String,
    pub end_time: String,
}

/// What a grid cell shows for one occupying course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellCourse {
    pub id: i64,
    pub name: String,
    pub classroom: String,
}

pub fn cell_key(day: Weekday, mark: NaiveTime) -> String {
    format!("{}-{}", day, mark_label(mark))
}

pub fn course_list(timetable: &Timetable) -> Vec<CourseRow> {
    timetable
        .courses()
        .iter()
        .map(|course| CourseRow {
            id: course.id,
            name: course.name.clone(),
            classroom: course.classroom.clone(),
            day: course.day,
            start_time: course.start_time.clone(),
            end_time: course
                .start_mark()
                .map(|start| placement::end_time(start, course.duration_minutes))
                .unwrap_or_default(),
        })
        .collect()
}

/// Occupied cells keyed `{day}-{label}`. Cells nothing occupies are absent;
/// a course whose start label is off the grid contributes none.
pub fn grid_cells(timetable: &Timetable) -> BTreeMap<String, Vec<CellCourse>> {
    let mut cells: BTreeMap<String, Vec<CellCourse>> = BTreeMap::new();
    for course in timetable.courses() {
        for mark in timetable.placement(course) {
            cells
                .entry(cell_key(course.day, mark))
                .or_default()
                .push(CellCourse {
                    id: course.id,
                    name: course.name.clone(),
                    classroom: course.classroom.clone(),
                });
        }
    }
    cells
}
