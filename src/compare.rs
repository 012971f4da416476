use ::serde::*;
use std::fmt;

use crate::course::*;

/// Fields shown in the side-by-side view, in display order. Department and
/// term are shared context and never compared.
pub const COMPARE_FIELDS: [CompareField; 5] = [
    CompareField::Name,
    CompareField::Teacher,
    CompareField::Credits,
    CompareField::Time,
    CompareField::Classroom,
];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CompareField {
    Name,
    Teacher,
    Credits,
    Time,
    Classroom,
}

impl fmt::Display for CompareField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompareField::Name => "name",
            CompareField::Teacher => "teacher",
            CompareField::Credits => "credits",
            CompareField::Time => "time",
            CompareField::Classroom => "classroom",
        };
        f.pad(name)
    }
}

#[derive(Clone, Debug)]
enum FieldValue {
    Text(String),
    Number(f64),
}

/// A value always equals itself, NaN credits included
impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a == b,
            (FieldValue::Number(a), FieldValue::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            _ => false,
        }
    }
}

impl FieldValue {
    fn to_display(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Number(n) => format!("{}", n),
        }
    }
}

impl CompareField {
    fn value_of(&self, course: &Course) -> FieldValue {
        match self {
            CompareField::Name => FieldValue::Text(course.get_name().clone()),
            CompareField::Teacher => FieldValue::Text(course.get_teacher().clone()),
            CompareField::Credits => FieldValue::Number(course.get_credits()),
            CompareField::Time => FieldValue::Text(course.get_time().unwrap_or("").to_string()),
            CompareField::Classroom => FieldValue::Text(course.get_classroom()),
        }
    }

    /// Numbers compare numerically, text case-sensitively
    pub fn differs(&self, a: &Course, b: &Course) -> bool {
        self.value_of(a) != self.value_of(b)
    }

    pub fn row(&self, a: &Course, b: &Course) -> ComparisonRow {
        ComparisonRow {
            field: *self,
            value_a: self.value_of(a).to_display(),
            value_b: self.value_of(b).to_display(),
            is_different: self.differs(a, b),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub field: CompareField,
    pub value_a: String,
    pub value_b: String,
    pub is_different: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub rows: Vec<ComparisonRow>,
}

/// Two courses and the rows on which they differ
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonResult<'a> {
    pub a: &'a Course,
    pub b: &'a Course,
    pub differences: Vec<ComparisonRow>,
}

/// Compares the first two courses. Extra courses are ignored; fewer than two
/// gives None.
pub fn compare(courses: &[Course]) -> Option<ComparisonResult<'_>> {
    let (a, b) = match courses {
        [a, b, ..] => (a, b),
        _ => return None,
    };

    let differences = COMPARE_FIELDS
        .iter()
        .filter(|field| field.differs(a, b))
        .map(|field| field.row(a, b))
        .collect();

    Some(ComparisonResult { a, b, differences })
}

pub fn diff_fields(a: &Course, b: &Course) -> Vec<CompareField> {
    COMPARE_FIELDS
        .iter()
        .filter(|field| field.differs(a, b))
        .copied()
        .collect()
}

/// One row per compared field, differing or not
pub fn format_for_display(a: &Course, b: &Course) -> ComparisonTable {
    ComparisonTable {
        rows: COMPARE_FIELDS.iter().map(|field| field.row(a, b)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn algebra() -> Course {
        Course::new("1", "MA201", "Linear Algebra", "Chen", 3.0, "MATH")
            .with_time("M56R2-ED201[GF]")
            .with_term("2024", "1")
    }

    fn calculus() -> Course {
        Course::new("2", "MA101", "Calculus", "Chen", 4.0, "MATH")
            .with_time("W34-SC101[3F]")
            .with_term("2024", "1")
    }

    #[test]
    fn needs_two_courses() {
        assert!(compare(&[]).is_none());
        assert!(compare(&[algebra()]).is_none());
    }

    #[test]
    fn compares_first_two_only() {
        let other = Course::new("3", "CS101", "Programming", "Wu", 2.0, "CS");
        let courses = vec![algebra(), calculus(), other];

        let result = compare(&courses).unwrap();
        assert_eq!(result.a.get_id(), "1");
        assert_eq!(result.b.get_id(), "2");

        let fields: Vec<CompareField> = result.differences.iter().map(|r| r.field).collect();
        assert_eq!(
            fields,
            vec![
                CompareField::Name,
                CompareField::Credits,
                CompareField::Time,
                CompareField::Classroom
            ]
        );
        assert!(result.differences.iter().all(|r| r.value_a != r.value_b));
    }

    #[test]
    fn identical_courses_have_no_diff() {
        assert!(diff_fields(&algebra(), &algebra()).is_empty());
    }

    #[test]
    fn context_fields_are_not_compared() {
        let a = algebra();
        let b = Course::new("9", "MA201", "Linear Algebra", "Chen", 3.0, "PHYS")
            .with_time("M56R2-ED201[GF]")
            .with_term("2025", "2");

        assert!(diff_fields(&a, &b).is_empty());
    }

    #[test]
    fn credits_compare_numerically_and_text_case_sensitively() {
        let a = Course::new("1", "X", "Algebra", "chen", 3.0, "MATH");
        let b = Course::new("2", "X", "Algebra", "Chen", 3.00, "MATH");

        assert_eq!(diff_fields(&a, &b), vec![CompareField::Teacher]);
    }

    #[test]
    fn unreadable_credits_still_equal_themselves() {
        let a = Course::new("1", "X", "Algebra", "Chen", f64::NAN, "MATH");
        let b = Course::new("2", "X", "Algebra", "Chen", 3.0, "MATH");

        assert!(diff_fields(&a, &a).is_empty());
        assert!(format_for_display(&a, &a).rows.iter().all(|r| !r.is_different));
        assert_eq!(diff_fields(&a, &b), vec![CompareField::Credits]);
    }

    #[test]
    fn display_table_has_every_field() {
        let table = format_for_display(&algebra(), &calculus());

        assert_eq!(table.rows.len(), 5);
        assert_eq!(
            table.rows.iter().map(|r| r.field).collect::<Vec<_>>(),
            COMPARE_FIELDS.to_vec()
        );

        let teacher = &table.rows[1];
        assert!(!teacher.is_different);
        assert_eq!(teacher.value_a, "Chen");

        let credits = &table.rows[2];
        assert!(credits.is_different);
        assert_eq!((credits.value_a.as_str(), credits.value_b.as_str()), ("3", "4"));

        let classroom = &table.rows[4];
        assert_eq!(classroom.value_a, "ED201");
        assert_eq!(classroom.value_b, "SC101");
    }
}
