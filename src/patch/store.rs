use super::PatchRecord;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk collection of every patch record ever extracted. Read fully
/// into memory, merged, and written back in one shot at the end of a run;
/// concurrent runs are not protected against each other.
#[derive(Debug, Serialize, Deserialize)]
pub struct PatchStore {
    pub patches: Vec<PatchRecord>,
    #[serde(skip)]
    path: PathBuf,
}

impl PatchStore {
    /// Loads the store, or starts an empty one if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let mut store: PatchStore =
                    serde_json::from_str(&content).map_err(|e| AppError::json(path, e))?;
                store.path = path.to_path_buf();
                Ok(store)
            }
            Err(_) => Ok(PatchStore {
                patches: Vec::new(),
                path: path.to_path_buf(),
            }),
        }
    }

    /// Appends every record not already present, then re-sorts by date
    /// descending. Returns how many records were actually added; zero is
    /// a normal outcome for a re-run over the same month.
    pub fn merge_new(&mut self, new_patches: &[PatchRecord]) -> usize {
        let mut added = 0;

        for patch in new_patches {
            let duplicate = self
                .patches
                .iter()
                .any(|existing| existing.dedup_key() == patch.dedup_key());
            if !duplicate {
                self.patches.push(patch.clone());
                added += 1;
            }
        }

        // ISO dates sort correctly as strings; stable sort keeps ties in
        // their existing order
        self.patches.sort_by(|a, b| b.date.cmp(&a.date));

        added
    }

    pub fn save(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
        }

        let json =
            serde_json::to_string_pretty(self).map_err(|e| AppError::json(&self.path, e))?;
        fs::write(&self.path, json).map_err(|e| AppError::io(&self.path, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::PatchType;
    use std::env;

    fn record(date: &str, hero: &str, content: &str) -> PatchRecord {
        PatchRecord {
            date: date.to_string(),
            hero: vec![hero.to_string()],
            content: content.to_string(),
            patch_type: PatchType::Buff,
        }
    }

    fn temp_store_path(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!(
            "hero_trends_store_{}_{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir.join("patch_notes.json")
    }

    #[test]
    fn missing_file_loads_as_empty_store() {
        let path = temp_store_path("missing");
        let store = PatchStore::load(&path).unwrap();
        assert!(store.patches.is_empty());
    }

    #[test]
    fn merging_the_same_batch_twice_adds_nothing_new() {
        let path = temp_store_path("idempotent");
        let batch = vec![
            record("2025-05-30", "ana", "a"),
            record("2025-05-16", "genji", "b"),
        ];

        let mut store = PatchStore::load(&path).unwrap();
        assert_eq!(store.merge_new(&batch), 2);
        store.save().unwrap();

        let mut reloaded = PatchStore::load(&path).unwrap();
        assert_eq!(reloaded.merge_new(&batch), 0);
        assert_eq!(reloaded.patches.len(), 2);
    }

    #[test]
    fn same_key_different_content_is_not_a_duplicate() {
        let mut store = PatchStore::load(&temp_store_path("content")).unwrap();
        store.merge_new(&[record("2025-05-30", "ana", "a")]);
        let added = store.merge_new(&[record("2025-05-30", "ana", "b")]);
        assert_eq!(added, 1);
    }

    #[test]
    fn patches_are_sorted_newest_first() {
        let mut store = PatchStore::load(&temp_store_path("sorted")).unwrap();
        store.merge_new(&[
            record("2025-04-01", "ana", "a"),
            record("2025-05-30", "genji", "b"),
            record("2025-05-16", "mei", "c"),
        ]);

        let dates: Vec<&str> = store.patches.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-05-30", "2025-05-16", "2025-04-01"]);
    }

    #[test]
    fn store_round_trips_through_disk() {
        let path = temp_store_path("roundtrip");
        let mut store = PatchStore::load(&path).unwrap();
        store.merge_new(&[record("2025-05-30", "ana", "伤害提高")]);
        store.save().unwrap();

        let reloaded = PatchStore::load(&path).unwrap();
        assert_eq!(reloaded.patches, store.patches);
    }
}
