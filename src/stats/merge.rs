use super::models::{CompactHeroStat, MergedEntry, RawDailyFile};
use crate::error::AppError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// All `*.json` files in the daily directory, in filename order so runs
/// are reproducible. This is a batch precondition: a missing directory is
/// an error, not an empty result.
pub fn daily_files(daily_dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let entries = fs::read_dir(daily_dir).map_err(|e| AppError::io(daily_dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| AppError::io(daily_dir, e))?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Parses one per-day dump into its merged-output entry, keyed by the
/// server-reported date from the payload itself. Filenames drift from
/// their contents upstream, so they are never trusted as dates.
pub fn load_daily_file(path: &Path) -> Result<(String, MergedEntry), AppError> {
    let content = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    let raw: RawDailyFile =
        serde_json::from_str(&content).map_err(|e| AppError::json(path, e))?;

    let date = authoritative_date(&raw, path)?;
    let stats = raw
        .data
        .data
        .into_iter()
        .map(CompactHeroStat::from)
        .collect();

    Ok((
        date,
        MergedEntry {
            s: raw.season,
            h: stats,
        },
    ))
}

pub fn authoritative_date(raw: &RawDailyFile, path: &Path) -> Result<String, AppError> {
    raw.data
        .data
        .first()
        .map(|row| row.ds.clone())
        .ok_or_else(|| AppError::EmptyDailyFile(path.display().to_string()))
}

pub fn write_merged(
    merged: &BTreeMap<String, MergedEntry>,
    out_path: &Path,
) -> Result<(), AppError> {
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(merged).map_err(|e| AppError::json(out_path, e))?;
    fs::write(out_path, json).map_err(|e| AppError::io(out_path, e))?;
    Ok(())
}

/// Full merge over a directory. Any single file failing to read or parse
/// fails the whole run; partial merges would silently lose days.
pub fn merge_daily_dir(daily_dir: &Path) -> Result<BTreeMap<String, MergedEntry>, AppError> {
    let mut merged = BTreeMap::new();
    for path in daily_files(daily_dir)? {
        let (date, entry) = load_daily_file(&path)?;
        merged.insert(date, entry);
    }
    Ok(merged)
}
