use crate::course::Course;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone)]
pub struct CourseValidationError {
    message: String,
}

impl CourseValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CourseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CourseValidationError {}

pub fn validate_course(course: &Course) -> Result<(), CourseValidationError> {
    if course.duration_minutes <= 0 {
        return Err(CourseValidationError::new(format!(
            "course {} has non-positive duration {} minutes",
            course.id, course.duration_minutes
        )));
    }
    Ok(())
}

pub fn validate_course_collection(courses: &[Course]) -> Result<(), CourseValidationError> {
    let mut seen_ids = HashSet::with_capacity(courses.len());
    for course in courses {
        if !seen_ids.insert(course.id) {
            return Err(CourseValidationError::new(format!(
                "duplicate course id {}",
                course.id
            )));
        }
        validate_course(course)?;
    }
    Ok(())
}
