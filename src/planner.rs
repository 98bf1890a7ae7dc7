use crate::course::{Course, CourseDraft};
use crate::persistence::{PersistenceResult, TimetableStore};
use crate::timetable::{Timetable, TimetableSummary};

/// One editing session: the owned timetable plus its durable store. Every
/// successful mutation is written back before the call returns, so a
/// subsequent read always observes the persisted state.
pub struct Planner {
    timetable: Timetable,
    store: Box<dyn TimetableStore>,
}

impl Planner {
    pub fn open(store: Box<dyn TimetableStore>) -> PersistenceResult<Self> {
        let timetable = store.load_timetable()?.unwrap_or_else(Timetable::new);
        Ok(Self { timetable, store })
    }

    pub fn add_course(&mut self, draft: CourseDraft) -> PersistenceResult<i64> {
        let id = self.timetable.add_course(draft);
        self.store.save_timetable(&self.timetable)?;
        Ok(id)
    }

    /// Remove by id. Whether the user confirmed the deletion is the calling
    /// layer's concern; an unknown id is a no-op and writes nothing.
    pub fn remove_course(&mut self, course_id: i64) -> PersistenceResult<bool> {
        if !self.timetable.remove_course(course_id) {
            return Ok(false);
        }
        self.store.save_timetable(&self.timetable)?;
        Ok(true)
    }

    pub fn courses(&self) -> &[Course] {
        self.timetable.courses()
    }

    pub fn find_course(&self, course_id: i64) -> Option<&Course> {
        self.timetable.find_course(course_id)
    }

    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }

    pub fn summary(&self) -> TimetableSummary {
        self.timetable.summary()
    }
}
