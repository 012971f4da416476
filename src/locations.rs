use ::serde::*;
use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::course::Day;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    English,
    TraditionalChinese,
}

impl Locale {
    /// Unknown tags fall back to English
    pub fn new_from_tag(tag: &str) -> Locale {
        match tag.trim().to_lowercase().as_str() {
            "zh" | "zh-tw" | "zh_tw" | "zh-hant" => Locale::TraditionalChinese,
            _ => Locale::English,
        }
    }

    pub fn to_tag(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::TraditionalChinese => "zh-TW",
        }
    }

    pub fn day_label(&self, day: Day) -> &'static str {
        let labels = match self {
            Locale::English => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            Locale::TraditionalChinese => ["週一", "週二", "週三", "週四", "週五", "週六", "週日"],
        };

        labels[day.to_index()]
    }

    pub fn unscheduled_label(&self) -> &'static str {
        match self {
            Locale::English => "TBA",
            Locale::TraditionalChinese => "未定",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BuildingNames {
    pub en: String,
    pub zh: String,
}

impl BuildingNames {
    pub fn new(en: &str, zh: &str) -> Self {
        BuildingNames {
            en: en.to_string(),
            zh: zh.to_string(),
        }
    }

    pub fn get(&self, locale: Locale) -> &String {
        match locale {
            Locale::English => &self.en,
            Locale::TraditionalChinese => &self.zh,
        }
    }
}

lazy_static! {
    static ref DEFAULT_BUILDINGS: HashMap<String, BuildingNames> = {
        let mut m = HashMap::new();
        m.insert("ED".to_string(), BuildingNames::new("Education Building", "教育大樓"));
        m.insert("SC".to_string(), BuildingNames::new("Science Building", "科學館"));
        m.insert("LI".to_string(), BuildingNames::new("Library", "圖書館"));
        m.insert("EN".to_string(), BuildingNames::new("Engineering Building", "工程館"));
        m.insert("MA".to_string(), BuildingNames::new("Management Building", "管理學院"));
        m.insert("AD".to_string(), BuildingNames::new("Administration Building", "行政大樓"));
        m.insert("HS".to_string(), BuildingNames::new("Humanities Building", "人文館"));
        m.insert("GY".to_string(), BuildingNames::new("Gymnasium", "體育館"));
        m
    };
}

/// Classroom code prefix to building names
#[derive(Clone, Debug, PartialEq)]
pub struct BuildingTable {
    buildings: HashMap<String, BuildingNames>,
}

impl Default for BuildingTable {
    fn default() -> Self {
        BuildingTable {
            buildings: DEFAULT_BUILDINGS.clone(),
        }
    }
}

impl BuildingTable {
    pub fn empty() -> Self {
        BuildingTable {
            buildings: HashMap::new(),
        }
    }

    /// Built-in table with `overrides` added on top
    pub fn with_overrides(overrides: &HashMap<String, BuildingNames>) -> Self {
        let mut table = BuildingTable::default();

        for (prefix, names) in overrides {
            table.insert(prefix, names.clone());
        }

        table
    }

    pub fn insert(&mut self, prefix: &str, names: BuildingNames) {
        self.buildings.insert(prefix.trim().to_uppercase(), names);
    }

    /// "ED201" -> "Education Building"; codes without a known prefix give None
    pub fn building_of(&self, classroom: &str, locale: Locale) -> Option<String> {
        let prefix = classroom_prefix(classroom)?;

        self.buildings
            .get(&prefix)
            .map(|names| names.get(locale).clone())
    }
}

fn classroom_prefix(classroom: &str) -> Option<String> {
    let prefix: String = classroom
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();

    if prefix.is_empty() {
        None
    } else {
        Some(prefix.to_uppercase())
    }
}

/// Lookup against the built-in table
pub fn building_of(classroom: &str, locale: Locale) -> Option<String> {
    BuildingTable::default().building_of(classroom, locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_tags() {
        assert_eq!(Locale::new_from_tag("zh-TW"), Locale::TraditionalChinese);
        assert_eq!(Locale::new_from_tag(" ZH "), Locale::TraditionalChinese);
        assert_eq!(Locale::new_from_tag("en-US"), Locale::English);
        assert_eq!(Locale::new_from_tag("fr"), Locale::English);
    }

    #[test]
    fn day_labels_per_locale() {
        assert_eq!(Locale::English.day_label(Day::Thursday), "Thu");
        assert_eq!(Locale::TraditionalChinese.day_label(Day::Sunday), "週日");
    }

    #[test]
    fn building_lookup_by_prefix() {
        assert_eq!(
            building_of("ED201", Locale::English),
            Some("Education Building".to_string())
        );
        assert_eq!(
            building_of("sc101", Locale::TraditionalChinese),
            Some("科學館".to_string())
        );
        assert_eq!(building_of("ZZ100", Locale::English), None);
        assert_eq!(building_of("101", Locale::English), None);
        assert_eq!(building_of("", Locale::English), None);
    }

    #[test]
    fn overrides_replace_and_extend() {
        let mut overrides = HashMap::new();
        overrides.insert("ed".to_string(), BuildingNames::new("New Education Hall", "新教育館"));
        overrides.insert("ZZ".to_string(), BuildingNames::new("Annex", "附館"));

        let table = BuildingTable::with_overrides(&overrides);

        assert_eq!(
            table.building_of("ED201", Locale::English),
            Some("New Education Hall".to_string())
        );
        assert_eq!(table.building_of("ZZ1", Locale::TraditionalChinese), Some("附館".to_string()));
        assert_eq!(table.building_of("LI305", Locale::English), Some("Library".to_string()));
        assert_eq!(BuildingTable::empty().building_of("ED201", Locale::English), None);
    }
}
