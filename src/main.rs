mod config;
mod display;
mod error;
mod fetch;
mod heroes;
mod html;
mod patch;
mod stats;

use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use config::Config;
use display::output::{
    display_error, display_info, display_merge_summary, display_patch_summary, display_success,
    display_warn,
};
use error::AppError;
use heroes::HeroTable;
use indicatif::ProgressBar;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hero_trends")]
#[command(about = "Scrapes hero balance patches and merges daily stat dumps for the dashboard", long_about = None)]
struct Args {
    /// Data directory (overrides HERO_TRENDS_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a month's patch-notes page and merge new patches into the store
    FetchPatches {
        /// Year of the page to fetch (default: current year)
        #[arg(long)]
        year: Option<i32>,

        /// Month of the page to fetch (default: current month)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Parse a local HTML file instead of fetching the page
        #[arg(long)]
        html_file: Option<PathBuf>,

        /// Save the fetched page to this path before parsing
        #[arg(long)]
        dump_html: Option<PathBuf>,
    },

    /// Merge all per-day raw stat files into the compact merged file
    MergeDaily,

    /// Rename per-day files whose filename disagrees with their internal date
    FixDates,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut config = Config::from_env()?;
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }

    match args.command {
        Command::FetchPatches {
            year,
            month,
            html_file,
            dump_html,
        } => fetch_patches(&config, year, month, html_file, dump_html),
        Command::MergeDaily => merge_daily(&config),
        Command::FixDates => fix_dates(&config),
    }
}

fn fetch_patches(
    config: &Config,
    year: Option<i32>,
    month: Option<u32>,
    html_file: Option<PathBuf>,
    dump_html: Option<PathBuf>,
) -> Result<(), AppError> {
    let today = Local::now();
    let year = year.unwrap_or_else(|| today.year());
    let month = month.unwrap_or_else(|| today.month());

    let page = match html_file {
        Some(path) => {
            display_info(&format!("Parsing local page {}", path.display()));
            fs::read_to_string(&path).map_err(|e| AppError::io(&path, e))?
        }
        None => {
            display_info(&format!("Fetching patch notes for {}/{:02}", year, month));
            match fetch::client::fetch_patch_notes_page(&config.patch_notes_base_url, year, month)?
            {
                Some(page) => page,
                None => {
                    display_info(&format!(
                        "No patch notes published for {}/{:02} yet",
                        year, month
                    ));
                    return Ok(());
                }
            }
        }
    };

    if let Some(dump_path) = dump_html {
        fs::write(&dump_path, &page).map_err(|e| AppError::io(&dump_path, e))?;
        display_info(&format!("Saved raw page to {}", dump_path.display()));
    }

    let hero_table = HeroTable::load(&config.hero_table_path())?;
    display_info(&format!("Hero table: {} names", hero_table.len()));

    let raw_patches = patch::extract::extract_patches(&page, &hero_table);
    if raw_patches.is_empty() {
        display_warn("No patches extracted from page");
        return Ok(());
    }
    display_success(&format!("Extracted {} patch lines", raw_patches.len()));

    let aggregated = patch::aggregate::aggregate_patches(raw_patches);
    display_success(&format!(
        "{} aggregated records after (date, hero) grouping",
        aggregated.len()
    ));
    display_patch_summary(&aggregated);

    let store_path = config.patch_store_path();
    let mut store = patch::store::PatchStore::load(&store_path)?;
    let added = store.merge_new(&aggregated);
    store.save()?;

    if added == 0 {
        display_info("No new patches (all already in the store)");
    } else {
        display_success(&format!(
            "Added {} new patches to {}",
            added,
            store_path.display()
        ));
    }

    Ok(())
}

fn merge_daily(config: &Config) -> Result<(), AppError> {
    let daily_dir = config.daily_dir();
    let files = stats::merge::daily_files(&daily_dir)?;
    display_info(&format!(
        "Merging {} daily files from {}",
        files.len(),
        daily_dir.display()
    ));

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_message("Merging daily stats");

    let mut merged = BTreeMap::new();
    for path in &files {
        let (date, entry) = stats::merge::load_daily_file(path)?;
        merged.insert(date, entry);
        pb.inc(1);
    }
    pb.finish_with_message("✓ Daily files merged");

    let out_path = config.merged_data_path();
    stats::merge::write_merged(&merged, &out_path)?;

    display_merge_summary(&merged);
    display_success(&format!(
        "Wrote {} days to {}",
        merged.len(),
        out_path.display()
    ));

    Ok(())
}

fn fix_dates(config: &Config) -> Result<(), AppError> {
    let daily_dir = config.daily_dir();
    let renamed = stats::fix_dates::fix_daily_filenames(&daily_dir)?;

    for (old, new) in &renamed {
        display_info(&format!(
            "Renamed {} to {}",
            old.display(),
            new.display()
        ));
    }

    if renamed.is_empty() {
        display_success("All daily filenames already match their internal dates");
    } else {
        display_success(&format!("Renamed {} files", renamed.len()));
    }

    Ok(())
}
