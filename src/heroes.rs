use crate::error::AppError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Table shipped with the repo; used when no hero_names.json exists on disk.
const BUILTIN_TABLE: &str = include_str!("../data/hero_names.json");

/// Section headings on the patch page that look like hero names but aren't.
const NON_HERO_SECTIONS: &[&str] = &["物品", "综合物品"];

/// Maps localized hero display names to stable lowercase-hyphenated ids.
///
/// The table is a data input, not a constant: it must be updated by hand
/// when new heroes ship, so it lives in hero_names.json next to the rest
/// of the data files.
#[derive(Debug, Clone)]
pub struct HeroTable {
    names: HashMap<String, String>,
}

impl HeroTable {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            // No table on disk yet, fall back to the shipped copy
            Err(_) => BUILTIN_TABLE.to_string(),
        };

        let names: HashMap<String, String> =
            serde_json::from_str(&content).map_err(|e| AppError::json(path, e))?;

        Ok(HeroTable { names })
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        HeroTable {
            names: pairs
                .into_iter()
                .map(|(name, id)| (name.into(), id.into()))
                .collect(),
        }
    }

    pub fn hero_id(&self, display_name: &str) -> Option<&str> {
        self.names.get(display_name).map(String::as_str)
    }

    pub fn is_non_hero_section(display_name: &str) -> bool {
        NON_HERO_SECTIONS.contains(&display_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
