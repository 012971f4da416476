use ::serde::*;
use log::debug;

use crate::time_code::{self, TimeSlot};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

pub const ALL_DAYS: [Day; 7] = [
    Day::Monday,
    Day::Tuesday,
    Day::Wednesday,
    Day::Thursday,
    Day::Friday,
    Day::Saturday,
    Day::Sunday,
];

impl Day {
    pub fn new_from_char(c: char) -> Option<Self> {
        match c {
            'M' => Some(Day::Monday),
            'T' => Some(Day::Tuesday),
            'W' => Some(Day::Wednesday),
            'R' => Some(Day::Thursday),
            'F' => Some(Day::Friday),
            'S' => Some(Day::Saturday),
            'U' => Some(Day::Sunday),
            _ => None,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Day::Monday => 'M',
            Day::Tuesday => 'T',
            Day::Wednesday => 'W',
            Day::Thursday => 'R',
            Day::Friday => 'F',
            Day::Saturday => 'S',
            Day::Sunday => 'U',
        }
    }

    pub fn to_index(&self) -> usize {
        match self {
            Day::Monday => 0,
            Day::Tuesday => 1,
            Day::Wednesday => 2,
            Day::Thursday => 3,
            Day::Friday => 4,
            Day::Saturday => 5,
            Day::Sunday => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        ALL_DAYS.get(index).copied()
    }

    pub fn get_name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Matches a day name by case-insensitive prefix ("mon", "Thurs", "SUNDAY").
    /// At least two letters are required since "T" and "S" are ambiguous.
    pub fn from_name_prefix(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();

        if name.len() < 2 {
            return None;
        }

        ALL_DAYS
            .iter()
            .find(|day| day.get_name().to_lowercase().starts_with(&name))
            .copied()
    }
}

/// Optional structured side-data attached to a course record
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseDetails {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub prerequisites: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    id: String,
    number: String,
    name: String,
    teacher: String,
    credits: f64,
    department: String,
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    year: String,
    #[serde(default)]
    semester: String,
    #[serde(default)]
    details: Option<String>,
}

impl Course {
    pub fn new(
        id: &str,
        number: &str,
        name: &str,
        teacher: &str,
        credits: f64,
        department: &str,
    ) -> Self {
        Course {
            id: id.to_string(),
            number: number.to_string(),
            name: name.to_string(),
            teacher: teacher.to_string(),
            credits,
            department: department.to_string(),
            time: None,
            year: String::new(),
            semester: String::new(),
            details: None,
        }
    }

    pub fn with_time(mut self, time: &str) -> Self {
        self.time = Some(time.to_string());
        self
    }

    pub fn with_term(mut self, year: &str, semester: &str) -> Self {
        self.year = year.to_string();
        self.semester = semester.to_string();
        self
    }

    pub fn with_details(mut self, details: &str) -> Self {
        self.details = Some(details.to_string());
        self
    }

    pub fn get_id(&self) -> &String {
        &self.id
    }

    pub fn get_number(&self) -> &String {
        &self.number
    }

    pub fn get_name(&self) -> &String {
        &self.name
    }

    pub fn get_teacher(&self) -> &String {
        &self.teacher
    }

    pub fn get_credits(&self) -> f64 {
        self.credits
    }

    pub fn get_department(&self) -> &String {
        &self.department
    }

    pub fn get_time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    pub fn get_year(&self) -> &String {
        &self.year
    }

    pub fn get_semester(&self) -> &String {
        &self.semester
    }

    pub fn get_timings(&self) -> Vec<TimeSlot> {
        time_code::parse(self.get_time())
    }

    /// Classroom codes named in the time field, joined for display
    pub fn get_classroom(&self) -> String {
        time_code::parse_classrooms(self.get_time()).join(", ")
    }

    /// Broken side-data is treated as absent so the primary fields still render
    pub fn get_details(&self) -> Option<CourseDetails> {
        let raw = self.details.as_deref()?.trim();

        if raw.is_empty() {
            return None;
        }

        match serde_json::from_str::<CourseDetails>(raw) {
            Ok(details) => Some(details),
            Err(e) => {
                debug!("Ignoring malformed details for course {}: {}", self.id, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_letters_map_to_indices() {
        for (i, c) in "MTWRFSU".chars().enumerate() {
            let day = Day::new_from_char(c).unwrap();
            assert_eq!(day.to_index(), i);
            assert_eq!(day.to_char(), c);
            assert_eq!(Day::from_index(i), Some(day));
        }

        assert_eq!(Day::new_from_char('X'), None);
        assert_eq!(Day::from_index(7), None);
    }

    #[test]
    fn day_name_prefixes() {
        assert_eq!(Day::from_name_prefix("mon"), Some(Day::Monday));
        assert_eq!(Day::from_name_prefix("THURSDAY"), Some(Day::Thursday));
        assert_eq!(Day::from_name_prefix("Tu"), Some(Day::Tuesday));
        assert_eq!(Day::from_name_prefix("Su"), Some(Day::Sunday));
        assert_eq!(Day::from_name_prefix("T"), None);
        assert_eq!(Day::from_name_prefix("Mondays"), None);
        assert_eq!(Day::from_name_prefix("xyz"), None);
    }

    #[test]
    fn details_parse_or_fall_back() {
        let course = Course::new("1", "CS101", "Intro", "Lin", 3.0, "CS")
            .with_details(r#"{"description": "Basics", "notes": "Lab on Fridays"}"#);

        let details = course.get_details().unwrap();
        assert_eq!(details.description.as_deref(), Some("Basics"));
        assert_eq!(details.prerequisites, None);

        let broken = course.clone().with_details("{not json");
        assert_eq!(broken.get_details(), None);
        assert_eq!(broken.get_name(), "Intro");

        let empty = course.with_details("   ");
        assert_eq!(empty.get_details(), None);
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let json = r#"{
            "id": "42",
            "number": "MA201",
            "name": "Linear Algebra",
            "teacher": "Chen",
            "credits": 3,
            "department": "MATH"
        }"#;

        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.get_time(), None);
        assert!(course.get_timings().is_empty());
        assert_eq!(course.get_classroom(), "");
        assert_eq!(course.get_credits(), 3.0);
    }
}
