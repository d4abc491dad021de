use serde::{Deserialize, Serialize};

/// Per-day raw dump as fetched from the stats endpoint. The payload nests
/// the actual rows two levels down.
#[derive(Debug, Deserialize)]
pub struct RawDailyFile {
    pub season: String,
    pub data: RawDailyData,
}

#[derive(Debug, Deserialize)]
pub struct RawDailyData {
    pub data: Vec<HeroStatRow>,
}

/// One hero's numbers for one day. `ds` is the server-reported date and is
/// the authoritative one; the filename may disagree (see fix_dates).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HeroStatRow {
    pub hero_id: String,
    pub hero_type: String,
    pub selection_ratio: f64,
    pub win_ratio: f64,
    pub kda: f64,
    pub ds: String,
}

/// Short-field projection of HeroStatRow. Pure rename for payload size;
/// values are untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompactHeroStat {
    pub i: String,
    pub t: String,
    pub s: f64,
    pub w: f64,
    pub k: f64,
    pub d: String,
}

impl From<HeroStatRow> for CompactHeroStat {
    fn from(row: HeroStatRow) -> Self {
        CompactHeroStat {
            i: row.hero_id,
            t: row.hero_type,
            s: row.selection_ratio,
            w: row.win_ratio,
            k: row.kda,
            d: row.ds,
        }
    }
}

impl From<CompactHeroStat> for HeroStatRow {
    fn from(stat: CompactHeroStat) -> Self {
        HeroStatRow {
            hero_id: stat.i,
            hero_type: stat.t,
            selection_ratio: stat.s,
            win_ratio: stat.w,
            kda: stat.k,
            ds: stat.d,
        }
    }
}

/// One date's entry in the merged output file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedEntry {
    pub s: String,
    pub h: Vec<CompactHeroStat>,
}
