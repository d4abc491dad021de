use super::{PatchRecord, PatchType};
use std::collections::HashMap;

/// Folds raw per-bullet records into one record per (date, hero), in
/// first-occurrence order. Contents are newline-joined in encounter order
/// and the group's types collapse to a single dominant type.
pub fn aggregate_patches(patches: Vec<PatchRecord>) -> Vec<PatchRecord> {
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for patch in patches {
        let hero_id = match patch.hero.first() {
            Some(id) => id.clone(),
            None => continue,
        };
        let key = (patch.date.clone(), hero_id);

        match index.get(&key) {
            Some(&slot) => groups[slot].fold(patch),
            None => {
                index.insert(key, groups.len());
                groups.push(Group::new(patch));
            }
        }
    }

    groups.into_iter().map(Group::into_record).collect()
}

struct Group {
    date: String,
    hero: Vec<String>,
    contents: Vec<String>,
    types: Vec<PatchType>,
}

impl Group {
    fn new(patch: PatchRecord) -> Self {
        Group {
            date: patch.date,
            hero: patch.hero,
            contents: vec![patch.content],
            types: vec![patch.patch_type],
        }
    }

    fn fold(&mut self, patch: PatchRecord) {
        self.contents.push(patch.content);
        if !self.types.contains(&patch.patch_type) {
            self.types.push(patch.patch_type);
        }
    }

    fn into_record(self) -> PatchRecord {
        let patch_type = dominant_type(&self.types);
        PatchRecord {
            date: self.date,
            hero: self.hero,
            content: self.contents.join("\n"),
            patch_type,
        }
    }
}

/// Mixed buff-and-nerf groups, and groups with neither, read as plain
/// updates; otherwise whichever of buff/nerf is present wins.
fn dominant_type(types: &[PatchType]) -> PatchType {
    let has_buff = types.contains(&PatchType::Buff);
    let has_nerf = types.contains(&PatchType::Nerf);

    match (has_buff, has_nerf) {
        (true, true) | (false, false) => PatchType::Update,
        (true, false) => PatchType::Buff,
        (false, true) => PatchType::Nerf,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, hero: &str, content: &str, patch_type: PatchType) -> PatchRecord {
        PatchRecord {
            date: date.to_string(),
            hero: vec![hero.to_string()],
            content: content.to_string(),
            patch_type,
        }
    }

    #[test]
    fn buff_and_nerf_resolve_to_update() {
        let merged = aggregate_patches(vec![
            record("2025-05-30", "ana", "伤害提高", PatchType::Buff),
            record("2025-05-30", "ana", "治疗量降低", PatchType::Nerf),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].patch_type, PatchType::Update);
        assert_eq!(merged[0].content, "伤害提高\n治疗量降低");
    }

    #[test]
    fn uniform_buffs_stay_buff() {
        let merged = aggregate_patches(vec![
            record("2025-05-30", "ana", "a", PatchType::Buff),
            record("2025-05-30", "ana", "b", PatchType::Buff),
        ]);
        assert_eq!(merged[0].patch_type, PatchType::Buff);
    }

    #[test]
    fn updates_only_stay_update() {
        let merged = aggregate_patches(vec![
            record("2025-05-30", "ana", "a", PatchType::Update),
            record("2025-05-30", "ana", "b", PatchType::Update),
        ]);
        assert_eq!(merged[0].patch_type, PatchType::Update);
    }

    #[test]
    fn buff_with_update_keeps_the_buff() {
        let merged = aggregate_patches(vec![
            record("2025-05-30", "ana", "a", PatchType::Update),
            record("2025-05-30", "ana", "b", PatchType::Buff),
        ]);
        assert_eq!(merged[0].patch_type, PatchType::Buff);
    }

    #[test]
    fn groups_keep_first_occurrence_order() {
        let merged = aggregate_patches(vec![
            record("2025-05-30", "genji", "a", PatchType::Buff),
            record("2025-05-30", "ana", "b", PatchType::Nerf),
            record("2025-05-30", "genji", "c", PatchType::Buff),
            record("2025-05-16", "genji", "d", PatchType::Update),
        ]);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].hero[0], "genji");
        assert_eq!(merged[0].content, "a\nc");
        assert_eq!(merged[1].hero[0], "ana");
        assert_eq!(merged[2].date, "2025-05-16");
    }

    #[test]
    fn different_dates_never_merge() {
        let merged = aggregate_patches(vec![
            record("2025-05-30", "ana", "a", PatchType::Buff),
            record("2025-05-16", "ana", "b", PatchType::Buff),
        ]);
        assert_eq!(merged.len(), 2);
    }
}
