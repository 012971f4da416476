use clap::{Parser, Subcommand};
use log::{error, info, warn};
use std::path::PathBuf;
use std::process::exit;

use course_scheduler::catalog::{self, CourseQuery};
use course_scheduler::config::{Config, CONFIG_ENV_VAR, DEFAULT_CONFIG_NAME};
use course_scheduler::database::load_courses;
use course_scheduler::display::{format_course_time, format_slots, render_grid};
use course_scheduler::schedule_index::index_with_palette;
use course_scheduler::*;

#[derive(Debug, Parser)]
#[command(name = "course-scheduler", about = "Browse a course catalog and lay out weekly schedules")]
struct Cli {
    /// RON config file
    #[arg(long, env = CONFIG_ENV_VAR, default_value = DEFAULT_CONFIG_NAME)]
    config: PathBuf,

    /// Display locale, overrides the config ("en" or "zh-TW")
    #[arg(long)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode a raw time field
    Parse {
        #[arg(value_name = "TIME")]
        time: String,
    },
    /// Print the weekly grid for the given courses
    Grid {
        /// Course file (.json or .csv)
        file: PathBuf,
        /// Only these course ids; all courses when omitted
        #[arg(long = "id")]
        ids: Vec<String>,
    },
    /// Compare two courses field by field
    Compare {
        file: PathBuf,
        first: String,
        second: String,
    },
    /// Search the catalog
    Search {
        file: PathBuf,
        #[arg(long)]
        keyword: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        teacher: Option<String>,
        #[arg(long)]
        year: Option<String>,
        #[arg(long)]
        semester: Option<String>,
    },
    /// List the semesters in a catalog
    Semesters { file: PathBuf },
}

fn select_courses(courses: &[Course], ids: &[String]) -> Result<Vec<Course>> {
    if ids.is_empty() {
        return Ok(courses.to_vec());
    }

    ids.iter()
        .map(|id| {
            catalog::find_by_id(courses, id)
                .cloned()
                .ok_or_else(|| Error::CourseNotFound(id.clone()))
        })
        .collect()
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let locale = match &cli.locale {
        Some(tag) => Locale::new_from_tag(tag),
        None => config.get_locale(),
    };
    let buildings = config.get_building_table();

    match cli.command {
        Command::Parse { time } => {
            let slots = parse(Some(time.as_str()));

            for slot in &slots {
                println!(
                    "{} {:02}:00-{:02}:00 {}",
                    locale.day_label(slot.day),
                    slot.start_hour,
                    slot.end_hour,
                    slot.classroom.as_deref().unwrap_or("")
                );
            }

            println!("{}", format_slots(&slots, locale, &buildings).join(", "));
        }
        Command::Grid { file, ids } => {
            let courses = select_courses(&load_courses(&file)?, &ids)?;
            let schedule = index_with_palette(&courses, config.palette_size);

            print!("{}", render_grid(&schedule, locale, config.get_hours()));

            for course in &courses {
                println!(
                    "{} {}: {}",
                    course.get_number(),
                    course.get_name(),
                    format_course_time(course, locale, &buildings)
                );
            }

            let conflicts = schedule.conflicts();
            if !conflicts.is_empty() {
                warn!("{} conflicting hour(s) in schedule", conflicts.len());
            }
        }
        Command::Compare {
            file,
            first,
            second,
        } => {
            let courses = select_courses(&load_courses(&file)?, &[first, second])?;

            if let Some(result) = compare(&courses) {
                for row in format_for_display(result.a, result.b).rows {
                    let marker = if row.is_different { "*" } else { " " };
                    println!("{} {:<10} {:<30} {}", marker, row.field, row.value_a, row.value_b);
                }
                info!("{} field(s) differ", result.differences.len());
            }
        }
        Command::Search {
            file,
            keyword,
            department,
            teacher,
            year,
            semester,
        } => {
            let courses = load_courses(&file)?;
            let query = CourseQuery {
                year,
                semester,
                department,
                teacher,
                keyword,
            };

            for course in catalog::search(&courses, &query) {
                println!(
                    "{:<8} {:<10} {:<30} {:<15} {}",
                    course.get_id(),
                    course.get_number(),
                    course.get_name(),
                    course.get_teacher(),
                    format_course_time(course, locale, &buildings)
                );
            }
        }
        Command::Semesters { file } => {
            for (year, semester) in catalog::semesters(&load_courses(&file)?) {
                println!("{}-{}", year, semester);
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{}", e);
        exit(1);
    }
}
