//! Settings read from a RON file, e.g.
//!
//! ```ron
//! (
//!     locale: "zh-TW",
//!     palette_size: 6,
//!     first_hour: 8,
//!     last_hour: 18,
//!     buildings: {
//!         "PE": (en: "Sports Center", zh: "運動中心"),
//!     },
//! )
//! ```

use ::serde::*;
use log::info;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::locations::{BuildingNames, BuildingTable, Locale};
use crate::schedule_index::PALETTE_SIZE;

pub const DEFAULT_CONFIG_NAME: &str = "./course_scheduler.ron";
pub const CONFIG_ENV_VAR: &str = "COURSE_SCHEDULER_CONFIG";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Locale tag, "en" or "zh-TW"
    pub locale: String,
    pub palette_size: usize,
    /// First hour row of the grid
    pub first_hour: usize,
    /// Grid stops before this hour
    pub last_hour: usize,
    /// Extra or replacement classroom prefixes
    pub buildings: HashMap<String, BuildingNames>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            locale: "en".to_string(),
            palette_size: PALETTE_SIZE,
            // Periods 1-9 run 08:00 to 17:00
            first_hour: 8,
            last_hour: 17,
            buildings: HashMap::new(),
        }
    }
}

impl Config {
    /// Defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let data = fs::read_to_string(path)?;
        Config::from_ron(&data)
    }

    pub fn from_ron(data: &str) -> Result<Config> {
        Ok(ron::from_str(data)?)
    }

    pub fn get_locale(&self) -> Locale {
        Locale::new_from_tag(&self.locale)
    }

    pub fn get_building_table(&self) -> BuildingTable {
        BuildingTable::with_overrides(&self.buildings)
    }

    pub fn get_hours(&self) -> std::ops::Range<usize> {
        let last = self.last_hour.min(24);
        self.first_hour.min(last)..last
    }
}
