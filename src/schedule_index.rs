use crate::course::*;

/// Number of colours the grid cycles through
pub const PALETTE_SIZE: usize = 8;

const DAYS_PER_WEEK: usize = 7;
const HOURS_PER_DAY: usize = 24;

/// A course placed on the grid, with the colour it is drawn in
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexedCourse<'a> {
    pub course: &'a Course,
    pub color_index: usize,
    position: usize,
}

/// Day x hour lookup of the courses occupying each one-hour cell
#[derive(Clone, Debug)]
pub struct ScheduleIndex<'a> {
    buckets: Vec<Vec<Vec<IndexedCourse<'a>>>>,
}

impl<'a> ScheduleIndex<'a> {
    fn new() -> Self {
        let day_buckets: Vec<Vec<IndexedCourse<'a>>> = vec![Vec::new(); HOURS_PER_DAY];

        ScheduleIndex {
            buckets: vec![day_buckets; DAYS_PER_WEEK],
        }
    }

    /// Out of range days or hours are just empty cells
    pub fn courses_at(&self, day: usize, hour: usize) -> &[IndexedCourse<'a>] {
        self.buckets
            .get(day)
            .and_then(|hours| hours.get(hour))
            .map(|cell| cell.as_slice())
            .unwrap_or(&[])
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.buckets
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cells holding two or more different courses, Monday first then by hour
    pub fn conflicts(&self) -> Vec<(usize, usize)> {
        let mut conflicts = Vec::new();

        for (day, hours) in self.buckets.iter().enumerate() {
            for (hour, cell) in hours.iter().enumerate() {
                if cell.len() > 1 {
                    conflicts.push((day, hour));
                }
            }
        }

        conflicts
    }
}

pub fn index(courses: &[Course]) -> ScheduleIndex<'_> {
    index_with_palette(courses, PALETTE_SIZE)
}

/// Rebuilt from scratch on every call
pub fn index_with_palette(courses: &[Course], palette_size: usize) -> ScheduleIndex<'_> {
    let palette_size = palette_size.max(1);
    let mut schedule = ScheduleIndex::new();

    for (position, course) in courses.iter().enumerate() {
        let entry = IndexedCourse {
            course,
            color_index: position % palette_size,
            position,
        };

        for timing in course.get_timings() {
            let day = timing.day.to_index();

            for hour in timing.hours() {
                let cell = match schedule.buckets[day].get_mut(hour as usize) {
                    Some(cell) => cell,
                    None => continue,
                };

                // Once per course per cell, even if the time field repeats itself
                if cell.last().map(|x| x.position) != Some(position) {
                    cell.push(entry);
                }
            }
        }
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, time: &str) -> Course {
        Course::new(id, id, id, "Staff", 3.0, "GEN").with_time(time)
    }

    #[test]
    fn empty_input_has_empty_cells() {
        let schedule = index(&[]);

        for day in 0..7 {
            for hour in 0..24 {
                assert!(schedule.courses_at(day, hour).is_empty());
            }
        }

        assert!(schedule.is_empty());
        assert!(schedule.conflicts().is_empty());
    }

    #[test]
    fn out_of_range_lookups_are_empty() {
        let courses = vec![course("A", "M1")];
        let schedule = index(&courses);

        assert!(schedule.courses_at(7, 8).is_empty());
        assert!(schedule.courses_at(0, 24).is_empty());
        assert!(schedule.courses_at(usize::MAX, usize::MAX).is_empty());
    }

    #[test]
    fn courses_fill_every_hour_they_span() {
        let courses = vec![
            course("A", "M56R2-ED201[GF]"),
            course("B", "Wednesday 9:00-12:00"),
            course("C", "TBA"),
        ];
        let schedule = index(&courses);

        assert_eq!(schedule.courses_at(0, 12)[0].course.get_id(), "A");
        assert_eq!(schedule.courses_at(0, 13)[0].course.get_id(), "A");
        assert_eq!(schedule.courses_at(3, 9)[0].course.get_id(), "A");
        assert!(schedule.courses_at(0, 14).is_empty());

        for hour in 9..12 {
            assert_eq!(schedule.courses_at(2, hour)[0].course.get_id(), "B");
        }
        assert!(schedule.courses_at(2, 12).is_empty());

        assert_eq!(schedule.len(), 6);
    }

    #[test]
    fn colors_follow_input_position() {
        let courses: Vec<Course> = (0..10)
            .map(|i| course(&format!("C{}", i), &format!("F{}", i % 9 + 1)))
            .collect();
        let schedule = index(&courses);

        assert_eq!(schedule.courses_at(4, 8)[0].color_index, 0);
        assert_eq!(schedule.courses_at(4, 16)[0].color_index, 8 % PALETTE_SIZE);

        // Tenth course wraps onto period 1 with the first
        let cell = schedule.courses_at(4, 8);
        assert_eq!(cell.len(), 2);
        assert_eq!(cell[1].color_index, 9 % PALETTE_SIZE);

        let small = index_with_palette(&courses, 0);
        assert!(small.courses_at(4, 8).iter().all(|c| c.color_index == 0));
    }

    #[test]
    fn overlaps_are_reported_as_conflicts() {
        let courses = vec![course("A", "M12"), course("B", "M2,M2"), course("C", "T1")];
        let schedule = index(&courses);

        assert_eq!(schedule.courses_at(0, 9).len(), 2);
        assert_eq!(schedule.conflicts(), vec![(0, 9)]);
    }
}
