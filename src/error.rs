use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid course json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid course csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid config: {0}")]
    Config(#[from] ron::error::SpannedError),

    #[error("unknown course file format: {0}")]
    UnknownFormat(String),

    #[error("{course} conflicts with {other} on {day} at {hour}:00")]
    Conflict {
        course: String,
        other: String,
        day: String,
        hour: u32,
    },

    #[error("course {0} is already in the schedule")]
    DuplicateCourse(String),

    #[error("no course with id {0}")]
    CourseNotFound(String),
}
