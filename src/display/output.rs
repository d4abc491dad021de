use crate::patch::PatchRecord;
use crate::stats::models::MergedEntry;
use colored::*;
use std::collections::BTreeMap;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct PatchRow {
    date: String,
    hero: String,
    #[tabled(rename = "type")]
    patch_type: String,
    content: String,
}

#[derive(Tabled)]
struct MergeRow {
    date: String,
    season: String,
    heroes: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_warn(message: &str) {
    println!("{} {}", "⚠️".yellow(), message);
}

pub fn display_patch_summary(patches: &[PatchRecord]) {
    if patches.is_empty() {
        return;
    }

    println!("\n{}", "🩹 Aggregated patch records".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let rows: Vec<PatchRow> = patches
        .iter()
        .map(|patch| {
            let type_label = match patch.patch_type {
                crate::patch::PatchType::Buff => "buff".green().to_string(),
                crate::patch::PatchType::Nerf => "nerf".red().to_string(),
                crate::patch::PatchType::Update => "update".yellow().to_string(),
            };
            PatchRow {
                date: patch.date.clone(),
                hero: patch.hero.join(","),
                patch_type: type_label,
                content: first_line(&patch.content, 40),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_merge_summary(merged: &BTreeMap<String, MergedEntry>) {
    if merged.is_empty() {
        return;
    }

    println!("\n{}", "📊 Merged daily data".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let rows: Vec<MergeRow> = merged
        .iter()
        .map(|(date, entry)| MergeRow {
            date: date.clone(),
            season: entry.s.clone(),
            heroes: entry.h.len().to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

fn first_line(content: &str, max_chars: usize) -> String {
    let line = content.lines().next().unwrap_or("");
    let truncated: String = line.chars().take(max_chars).collect();
    if truncated.chars().count() < line.chars().count() {
        format!("{}…", truncated)
    } else {
        truncated
    }
}
