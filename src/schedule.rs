use log::debug;

use crate::course::*;
use crate::error::{Error, Result};
use crate::schedule_index::{self, ScheduleIndex};

/// A student's weekly selection. Courses are kept in the order they were added,
/// which also decides their grid colour.
#[derive(Clone, Debug, Default)]
pub struct Schedule {
    courses: Vec<Course>,
}

impl Schedule {
    pub fn new() -> Self {
        Schedule::default()
    }

    /// Adds a course unless it is already present or clashes with one that is.
    /// TBA courses never clash.
    pub fn add(&mut self, course: Course) -> Result<()> {
        if self.contains(course.get_id()) {
            return Err(Error::DuplicateCourse(course.get_id().clone()));
        }

        let timings = course.get_timings();

        for other in &self.courses {
            for taken in other.get_timings() {
                if let Some(slot) = timings.iter().find(|slot| slot.overlaps(&taken)) {
                    let hour = slot.start_hour.max(taken.start_hour);

                    return Err(Error::Conflict {
                        course: course.get_number().clone(),
                        other: other.get_number().clone(),
                        day: slot.day.get_name().to_string(),
                        hour,
                    });
                }
            }
        }

        debug!("Added {} to schedule", course.get_number());
        self.courses.push(course);

        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Option<Course> {
        let position = self.courses.iter().position(|c| c.get_id() == id)?;
        Some(self.courses.remove(position))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.courses.iter().any(|c| c.get_id() == id)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn total_credits(&self) -> f64 {
        self.courses.iter().map(|c| c.get_credits()).sum()
    }

    pub fn index(&self) -> ScheduleIndex<'_> {
        schedule_index::index(&self.courses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, number: &str, time: &str) -> Course {
        Course::new(id, number, number, "Staff", 3.0, "GEN").with_time(time)
    }

    #[test]
    fn accepts_non_overlapping_courses() {
        let mut schedule = Schedule::new();

        schedule.add(course("1", "MA201", "M56R2-ED201[GF]")).unwrap();
        schedule.add(course("2", "CS101", "M7,W34")).unwrap();
        schedule.add(course("3", "GE100", "TBA")).unwrap();

        assert_eq!(schedule.courses().len(), 3);
        assert_eq!(schedule.total_credits(), 9.0);
        assert!(schedule.index().conflicts().is_empty());
    }

    #[test]
    fn rejects_overlap() {
        let mut schedule = Schedule::new();
        schedule.add(course("1", "MA201", "M56R2-ED201[GF]")).unwrap();

        let err = schedule.add(course("2", "PH110", "Monday 13:00-15:00")).unwrap_err();

        match err {
            Error::Conflict {
                course,
                other,
                day,
                hour,
            } => {
                assert_eq!(course, "PH110");
                assert_eq!(other, "MA201");
                assert_eq!(day, "Monday");
                assert_eq!(hour, 13);
            }
            other => panic!("unexpected error {:?}", other),
        }

        assert_eq!(schedule.courses().len(), 1);
    }

    #[test]
    fn rejects_duplicates_and_removes() {
        let mut schedule = Schedule::new();
        schedule.add(course("1", "MA201", "M5")).unwrap();

        assert!(matches!(
            schedule.add(course("1", "MA201", "F9")),
            Err(Error::DuplicateCourse(_))
        ));

        let removed = schedule.remove("1").unwrap();
        assert_eq!(removed.get_number(), "MA201");
        assert!(schedule.remove("1").is_none());
        assert!(!schedule.contains("1"));

        schedule.add(course("2", "CS101", "M5")).unwrap();
    }
}
