pub mod aggregate;
pub mod classify;
pub mod extract;
pub mod store;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchType {
    Buff,
    Nerf,
    Update,
}

impl std::fmt::Display for PatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatchType::Buff => write!(f, "buff"),
            PatchType::Nerf => write!(f, "nerf"),
            PatchType::Update => write!(f, "update"),
        }
    }
}

/// One documented balance change for one hero, dated to its publication day.
///
/// `hero` is a list for historical reasons (stored data uses `"*"` for
/// game-wide notes); extraction only ever emits a single id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchRecord {
    pub date: String,
    pub hero: Vec<String>,
    pub content: String,
    #[serde(rename = "patchType")]
    pub patch_type: PatchType,
}

impl PatchRecord {
    /// Duplicate-suppression key used by the persisted store.
    pub fn dedup_key(&self) -> (String, String, String) {
        (
            self.date.clone(),
            self.hero.join(","),
            self.content.clone(),
        )
    }
}
