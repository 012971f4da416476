use crate::course::*;
use crate::error::{Error, Result};
use log::info;
use std::fs::OpenOptions;
use std::io::Read;
use std::path::Path;

/// Loads already-structured course records. The format follows the file
/// extension: `.json` is an array of courses, `.csv` has one course per row
/// with a header naming the fields.
pub fn load_courses(path: &Path) -> Result<Vec<Course>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut file = OpenOptions::new().read(true).open(path)?;

    let mut data = String::new();
    file.read_to_string(&mut data)?;

    let courses = match extension.as_str() {
        "json" => courses_from_json(&data)?,
        "csv" => courses_from_csv(&data)?,
        _ => return Err(Error::UnknownFormat(path.display().to_string())),
    };

    info!("Loaded {} courses from {}", courses.len(), path.display());

    Ok(courses)
}

pub fn courses_from_json(data: &str) -> Result<Vec<Course>> {
    Ok(serde_json::from_str(data)?)
}

pub fn courses_from_csv(data: &str) -> Result<Vec<Course>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let mut courses = Vec::new();

    for record in reader.deserialize() {
        courses.push(record?);
    }

    Ok(courses)
}
