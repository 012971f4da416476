// ----------------------------------------------------------------------------
// Decoding of the course time field into weekly time slots.
//
// Two grammars share the same field:
//   verbose  "Monday 9:00-11:00"
//   compact  "M56R2-ED201[GF]"  (day letter followed by period digits)
// Multi-session courses separate their sessions with commas. Anything that
// matches neither grammar is dropped, never reported as an error.
// ----------------------------------------------------------------------------

use ::serde::*;
use chrono::{NaiveTime, Timelike};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::course::Day;
use crate::locations::{BuildingTable, Locale};

/// Period 1 starts at 08:00
pub const PERIOD_HOUR_OFFSET: u32 = 7;

const VERBOSE_REGEX: &str = r"^\s*([A-Za-z]+)\s+(\d{1,2}):(\d{2})\s*-\s*(\d{1,2}):(\d{2})";
const COMPACT_REGEX: &str = r"^\s*((?:[MTWRFSU][1-9]+)+)";
const COMPACT_GROUP_REGEX: &str = r"([MTWRFSU])([1-9]+)";

lazy_static! {
    static ref VERBOSE: Regex = Regex::new(VERBOSE_REGEX).unwrap();
    static ref COMPACT: Regex = Regex::new(COMPACT_REGEX).unwrap();
    static ref COMPACT_GROUP: Regex = Regex::new(COMPACT_GROUP_REGEX).unwrap();
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub day: Day,
    pub start_hour: u32,
    /// Exclusive
    pub end_hour: u32,
    /// Academic period, only for slots decoded from the compact grammar
    pub period: Option<u32>,
    /// Stated start and end, only for slots decoded from the verbose grammar
    pub clock: Option<(NaiveTime, NaiveTime)>,
    pub classroom: Option<String>,
    pub building: Option<String>,
}

impl TimeSlot {
    pub fn from_period(day: Day, period: u32) -> Self {
        let start_hour = PERIOD_HOUR_OFFSET + period;

        TimeSlot {
            day,
            start_hour,
            end_hour: start_hour + 1,
            period: Some(period),
            clock: None,
            classroom: None,
            building: None,
        }
    }

    pub fn from_hours(day: Day, start_hour: u32, end_hour: u32) -> Self {
        TimeSlot {
            day,
            start_hour,
            end_hour,
            period: None,
            clock: None,
            classroom: None,
            building: None,
        }
    }

    /// Covers every hour the range touches; 10:50 still occupies the 10 o'clock
    /// hour. None when the range is empty or backwards.
    pub fn from_clock(day: Day, start: NaiveTime, end: NaiveTime) -> Option<Self> {
        let start_hour = start.hour();
        let mut end_hour = end.hour();

        if end.minute() > 0 {
            end_hour += 1;
        }

        if end_hour <= start_hour || end <= start {
            return None;
        }

        let mut slot = TimeSlot::from_hours(day, start_hour, end_hour);
        slot.clock = Some((start, end));
        Some(slot)
    }

    pub fn hours(&self) -> std::ops::Range<u32> {
        self.start_hour..self.end_hour
    }

    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.day == other.day && self.start_hour < other.end_hour && other.start_hour < self.end_hour
    }

    /// Copy of the slot with the building name filled in for the given locale
    pub fn localized(&self, locale: Locale, buildings: &BuildingTable) -> TimeSlot {
        let mut slot = self.clone();
        slot.building = slot
            .classroom
            .as_deref()
            .and_then(|code| buildings.building_of(code, locale));
        slot
    }
}

/// One session's worth of time code, before it is expanded into slots
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TimeCode {
    Verbose {
        day: Day,
        start: NaiveTime,
        end: NaiveTime,
    },
    Compact(Vec<(Day, Vec<u32>)>),
}

impl TimeCode {
    /// Tries the verbose grammar, then the compact one. Returns the match and
    /// whatever text followed it.
    pub fn match_segment(segment: &str) -> Option<(TimeCode, &str)> {
        TimeCode::match_verbose(segment).or_else(|| TimeCode::match_compact(segment))
    }

    fn match_verbose(segment: &str) -> Option<(TimeCode, &str)> {
        let caps = VERBOSE.captures(segment)?;

        let day = Day::from_name_prefix(&caps[1])?;
        let start = clock_time(&caps[2], &caps[3])?;
        let end = clock_time(&caps[4], &caps[5])?;

        TimeSlot::from_clock(day, start, end)?;

        let rest = &segment[caps.get(0)?.end()..];

        Some((TimeCode::Verbose { day, start, end }, rest))
    }

    /// Codes must open the segment, but further runs separated by whitespace
    /// ("M56 R2-ED201") are read too. A run after the '-' is a classroom.
    fn match_compact(segment: &str) -> Option<(TimeCode, &str)> {
        let mut groups: Vec<(Day, Vec<u32>)> = Vec::new();
        let mut rest = segment;

        while let Some(codes) = COMPACT.captures(rest).and_then(|caps| caps.get(1)) {
            groups.extend(COMPACT_GROUP.captures_iter(codes.as_str()).filter_map(|caps| {
                let day = caps[1].chars().next().and_then(Day::new_from_char)?;
                let periods = caps[2].chars().filter_map(|c| c.to_digit(10)).collect();
                Some((day, periods))
            }));

            rest = &rest[codes.end()..];
        }

        if groups.is_empty() {
            return None;
        }

        Some((TimeCode::Compact(groups), rest))
    }

    pub fn into_slots(self, classroom: Option<String>) -> Vec<TimeSlot> {
        let mut slots: Vec<TimeSlot> = match self {
            TimeCode::Verbose { day, start, end } => {
                TimeSlot::from_clock(day, start, end).into_iter().collect()
            }
            TimeCode::Compact(groups) => groups
                .into_iter()
                .flat_map(|(day, periods)| {
                    periods
                        .into_iter()
                        .map(move |period| TimeSlot::from_period(day, period))
                })
                .collect(),
        };

        for slot in slots.iter_mut() {
            slot.classroom = classroom.clone();
        }

        slots
    }
}

fn clock_time(hour: &str, minute: &str) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(hour.parse().ok()?, minute.parse().ok()?, 0)
}

/// Reads "-ED201[GF]" as classroom "ED201"; the bracketed note is dropped
fn classroom_from_suffix(rest: &str) -> Option<String> {
    let trimmed = rest.trim();

    if trimmed.is_empty() {
        return None;
    }

    let rest = match trimmed.strip_prefix('-') {
        Some(rest) => rest,
        None => {
            debug!("Ignoring trailing text {:?} after time code", trimmed);
            return None;
        }
    };
    let room = rest.split('[').next().unwrap_or("").trim();

    if room.is_empty() {
        None
    } else {
        Some(room.to_string())
    }
}

/// Decodes a raw time field into slots, in the order they appear.
/// Empty or unrecognised input gives an empty list, which callers show as TBA.
pub fn parse(raw: Option<&str>) -> Vec<TimeSlot> {
    let raw = match raw {
        Some(raw) => raw,
        None => return Vec::new(),
    };

    let mut slots = Vec::new();

    for segment in raw.split(',') {
        if segment.trim().is_empty() {
            continue;
        }

        match TimeCode::match_segment(segment) {
            Some((code, rest)) => slots.extend(code.into_slots(classroom_from_suffix(rest))),
            None => debug!("Unrecognised time code segment {:?}", segment),
        }
    }

    slots
}

/// Distinct classroom codes of a raw time field, in encounter order
pub fn parse_classrooms(raw: Option<&str>) -> Vec<String> {
    let mut classrooms: Vec<String> = Vec::new();

    for slot in parse(raw) {
        if let Some(room) = slot.classroom {
            if !classrooms.contains(&room) {
                classrooms.push(room);
            }
        }
    }

    classrooms
}
