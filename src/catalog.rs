use ::serde::*;

use crate::course::*;

/// Filters for browsing a catalog. Unset fields match everything.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseQuery {
    pub year: Option<String>,
    pub semester: Option<String>,
    pub department: Option<String>,
    pub teacher: Option<String>,
    /// Case-insensitive, matched against name, number and id
    pub keyword: Option<String>,
}

impl CourseQuery {
    pub fn matches(&self, course: &Course) -> bool {
        let exact = |wanted: &Option<String>, value: &String| match wanted {
            Some(wanted) => wanted.trim().eq_ignore_ascii_case(value.trim()),
            None => true,
        };

        if !exact(&self.year, course.get_year())
            || !exact(&self.semester, course.get_semester())
            || !exact(&self.department, course.get_department())
        {
            return false;
        }

        if let Some(teacher) = &self.teacher {
            if !contains_ignore_case(course.get_teacher(), teacher) {
                return false;
            }
        }

        match &self.keyword {
            Some(keyword) => {
                contains_ignore_case(course.get_name(), keyword)
                    || contains_ignore_case(course.get_number(), keyword)
                    || contains_ignore_case(course.get_id(), keyword)
            }
            None => true,
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_lowercase()
        .contains(needle.trim().to_lowercase().as_str())
}

/// Matching courses in catalog order
pub fn search<'a>(courses: &'a [Course], query: &CourseQuery) -> Vec<&'a Course> {
    courses.iter().filter(|course| query.matches(course)).collect()
}

/// Distinct (year, semester) pairs offered by the catalog, oldest first
pub fn semesters(courses: &[Course]) -> Vec<(String, String)> {
    let mut terms: Vec<(String, String)> = courses
        .iter()
        .map(|course| (course.get_year().clone(), course.get_semester().clone()))
        .collect();

    terms.sort();
    terms.dedup();

    terms
}

pub fn find_by_id<'a>(courses: &'a [Course], id: &str) -> Option<&'a Course> {
    courses.iter().find(|course| course.get_id() == id)
}
