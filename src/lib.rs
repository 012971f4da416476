//! Course catalog scheduling core: decoding course time codes, placing
//! courses on a weekly grid and comparing two courses side by side.

pub mod catalog;
pub mod compare;
pub mod config;
pub mod course;
pub mod database;
pub mod display;
pub mod error;
pub mod locations;
pub mod schedule;
pub mod schedule_index;
pub mod time_code;

pub use compare::{compare, diff_fields, format_for_display, ComparisonResult, ComparisonRow};
pub use course::{Course, CourseDetails, Day};
pub use error::{Error, Result};
pub use locations::{building_of, BuildingTable, Locale};
pub use schedule::Schedule;
pub use schedule_index::{index, IndexedCourse, ScheduleIndex};
pub use time_code::{parse, TimeSlot};
