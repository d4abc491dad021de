use super::classify::classify;
use super::PatchRecord;
use crate::display::output::display_warn;
use crate::heroes::HeroTable;
use crate::html;
use chrono::NaiveDate;
use regex::Regex;

const PATCH_BLOCK: &str = "PatchNotes-patch";
const PATCH_TITLE: &str = "PatchNotes-patchTitle";
const HERO_SECTION: &str = "PatchNotesHeroUpdate";
const HERO_NAME: &str = "PatchNotesHeroUpdate-name";
const HERO_UPDATES: &str = "PatchNotesHeroUpdate-generalUpdates";

/// Extracts one classified PatchRecord per bullet line of every hero
/// section on a monthly patch-notes page. Malformed blocks are skipped
/// individually; this never fails a run.
pub fn extract_patches(page: &str, heroes: &HeroTable) -> Vec<PatchRecord> {
    // Title format: 《守望先锋》补丁说明——2025年5月30日
    let date_re = Regex::new(r"(\d{4})年(\d{1,2})月(\d{1,2})日").expect("valid date pattern");

    let blocks = html::sections_with_class(page, PATCH_BLOCK);
    if blocks.is_empty() {
        display_warn("No patch blocks found on page; markup may have changed");
        return Vec::new();
    }

    let mut patches = Vec::new();

    for block in blocks {
        let title = match html::first_with_class(block, PATCH_TITLE) {
            Some(section) => html::element_text(section),
            None => {
                display_warn("Patch block without a title, skipping");
                continue;
            }
        };

        let date = match extract_date(&date_re, &title) {
            Some(date) => date,
            None => {
                display_warn(&format!("No date found in patch title '{}'", title));
                continue;
            }
        };

        for hero_section in html::sections_with_class(block, HERO_SECTION) {
            let name = match html::first_with_class(hero_section, HERO_NAME) {
                Some(section) => html::element_text(section),
                None => continue,
            };

            if HeroTable::is_non_hero_section(&name) {
                continue;
            }

            let hero_id = match heroes.hero_id(&name) {
                Some(id) => id.to_string(),
                None => {
                    display_warn(&format!("Unknown hero name '{}', skipping section", name));
                    continue;
                }
            };

            let updates = match html::first_with_class(hero_section, HERO_UPDATES) {
                Some(section) => section,
                None => continue,
            };

            for content in html::list_items(updates) {
                let patch_type = classify(&content);
                patches.push(PatchRecord {
                    date: date.clone(),
                    hero: vec![hero_id.clone()],
                    content,
                    patch_type,
                });
            }
        }
    }

    patches
}

/// Pulls the first `YYYY年M月D日` out of a title and normalizes it to
/// ISO form, rejecting impossible calendar dates.
fn extract_date(re: &Regex, title: &str) -> Option<String> {
    let caps = re.captures(title)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)?;
    Some(format!("{:04}-{:02}-{:02}", year, month, day))
}
