// Display strings for time slots and the weekly text grid. Parsing never
// merges anything; consecutive periods are joined here ("Mon 5-6").

use crate::course::*;
use crate::locations::{BuildingTable, Locale};
use crate::schedule_index::ScheduleIndex;
use crate::time_code::TimeSlot;
use unicode_width::UnicodeWidthStr;

const CLOCK_FMT: &str = "%H:%M";

#[derive(Debug, PartialEq)]
enum Run<'s> {
    Periods {
        day: Day,
        first: u32,
        last: u32,
        classroom: Option<&'s str>,
    },
    Clock(&'s TimeSlot),
}

impl<'s> Run<'s> {
    fn start(slot: &'s TimeSlot) -> Self {
        match slot.period {
            Some(period) => Run::Periods {
                day: slot.day,
                first: period,
                last: period,
                classroom: slot.classroom.as_deref(),
            },
            None => Run::Clock(slot),
        }
    }

    /// Extends a period run with the next period on the same day and room
    fn absorb(&mut self, slot: &TimeSlot) -> bool {
        match (self, slot.period) {
            (
                Run::Periods {
                    day,
                    last,
                    classroom,
                    ..
                },
                Some(period),
            ) if *day == slot.day && period == *last + 1 && *classroom == slot.classroom.as_deref() => {
                *last = period;
                true
            }
            _ => false,
        }
    }

    fn render(&self, locale: Locale, buildings: &BuildingTable) -> String {
        let (day, range, classroom) = match self {
            Run::Periods {
                day,
                first,
                last,
                classroom,
            } => {
                let range = if first == last {
                    format!("{}", first)
                } else {
                    format!("{}-{}", first, last)
                };
                (*day, range, *classroom)
            }
            Run::Clock(slot) => {
                let range = match slot.clock {
                    Some((start, end)) => {
                        format!("{}-{}", start.format(CLOCK_FMT), end.format(CLOCK_FMT))
                    }
                    None => format!("{:02}:00-{:02}:00", slot.start_hour, slot.end_hour),
                };
                (slot.day, range, slot.classroom.as_deref())
            }
        };

        let mut text = format!("{} {}", locale.day_label(day), range);

        if let Some(room) = classroom {
            text = format!("{} {}", text, room);

            if let Some(building) = buildings.building_of(room, locale) {
                text = format!("{} ({})", text, building);
            }
        }

        text
    }
}

/// One display string per merged run of slots, or the TBA label when there
/// are none
pub fn format_slots(slots: &[TimeSlot], locale: Locale, buildings: &BuildingTable) -> Vec<String> {
    if slots.is_empty() {
        return vec![locale.unscheduled_label().to_string()];
    }

    let mut runs: Vec<Run> = Vec::new();

    for slot in slots {
        let merged = match runs.last_mut() {
            Some(run) => run.absorb(slot),
            None => false,
        };

        if !merged {
            runs.push(Run::start(slot));
        }
    }

    runs.iter().map(|run| run.render(locale, buildings)).collect()
}

pub fn format_course_time(course: &Course, locale: Locale, buildings: &BuildingTable) -> String {
    format_slots(&course.get_timings(), locale, buildings).join(", ")
}

/// Hours down the side, Monday..Sunday across. Cells holding more than one
/// course are marked with '*'.
pub fn render_grid(
    schedule: &ScheduleIndex,
    locale: Locale,
    hours: std::ops::Range<usize>,
) -> String {
    let mut rows: Vec<Vec<String>> = Vec::new();

    let mut header = vec![String::new()];
    header.extend(ALL_DAYS.iter().map(|day| locale.day_label(*day).to_string()));
    rows.push(header);

    for hour in hours {
        let mut row = vec![format!("{:02}:00", hour)];

        for day in ALL_DAYS.iter() {
            let cell = schedule.courses_at(day.to_index(), hour);
            let numbers = cell
                .iter()
                .map(|entry| entry.course.get_number().as_str())
                .collect::<Vec<&str>>()
                .join("/");

            if cell.len() > 1 {
                row.push(format!("*{}", numbers));
            } else {
                row.push(numbers);
            }
        }

        rows.push(row);
    }

    let width = rows
        .iter()
        .flatten()
        .map(|cell| cell.width())
        .max()
        .unwrap_or(0)
        .max(5);

    let mut grid = String::new();

    for row in rows {
        let line = row
            .iter()
            .map(|cell| {
                let pad = width - cell.width();
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect::<Vec<String>>()
            .join(" | ");

        grid.push_str(line.trim_end());
        grid.push('\n');
    }

    grid
}
