use super::merge::{authoritative_date, daily_files};
use super::models::RawDailyFile;
use crate::error::AppError;
use std::fs;
use std::path::{Path, PathBuf};

/// Renames every per-day file whose filename disagrees with the
/// server-reported date inside it, so storage stays self-consistent.
/// Already-matching files are left alone; running twice is a no-op the
/// second time. Returns the (old, new) pairs that were renamed.
pub fn fix_daily_filenames(daily_dir: &Path) -> Result<Vec<(PathBuf, PathBuf)>, AppError> {
    let mut renamed = Vec::new();

    for path in daily_files(daily_dir)? {
        let content = fs::read_to_string(&path).map_err(|e| AppError::io(&path, e))?;
        let raw: RawDailyFile =
            serde_json::from_str(&content).map_err(|e| AppError::json(&path, e))?;
        let date = authoritative_date(&raw, &path)?;

        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
        if stem == date {
            continue;
        }

        let new_path = daily_dir.join(format!("{}.json", date));
        fs::rename(&path, &new_path).map_err(|e| AppError::io(&path, e))?;
        renamed.push((path, new_path));
    }

    Ok(renamed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::merge::tests::{daily_fixture, temp_daily_dir};

    #[test]
    fn drifted_filename_is_renamed_to_internal_date() {
        let dir = temp_daily_dir("fix_drift");
        fs::write(dir.join("2025-05-01.json"), daily_fixture("2025-05-02", "ana", 51.7)).unwrap();

        let renamed = fix_daily_filenames(&dir).unwrap();
        assert_eq!(renamed.len(), 1);
        assert!(!dir.join("2025-05-01.json").exists());
        assert!(dir.join("2025-05-02.json").exists());
    }

    #[test]
    fn consistent_filename_is_untouched() {
        let dir = temp_daily_dir("fix_ok");
        fs::write(dir.join("2025-05-02.json"), daily_fixture("2025-05-02", "ana", 51.7)).unwrap();

        assert!(fix_daily_filenames(&dir).unwrap().is_empty());
        assert!(dir.join("2025-05-02.json").exists());
    }

    #[test]
    fn second_run_is_a_no_op() {
        let dir = temp_daily_dir("fix_idempotent");
        fs::write(dir.join("wrong-name.json"), daily_fixture("2025-05-02", "ana", 51.7)).unwrap();

        assert_eq!(fix_daily_filenames(&dir).unwrap().len(), 1);
        assert!(fix_daily_filenames(&dir).unwrap().is_empty());
    }
}
