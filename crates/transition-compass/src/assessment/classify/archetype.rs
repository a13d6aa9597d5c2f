use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::super::domain::{Archetype, BilingualText};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeProfile {
    pub name: BilingualText,
    pub description: BilingualText,
}

/// Static behavior tag → archetype lookup plus the narrative for each archetype.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeTable {
    #[serde(default)]
    tags: BTreeMap<String, Archetype>,
    #[serde(default)]
    profiles: BTreeMap<Archetype, ArchetypeProfile>,
}

impl ArchetypeTable {
    pub fn new(
        tags: BTreeMap<String, Archetype>,
        profiles: BTreeMap<Archetype, ArchetypeProfile>,
    ) -> Self {
        Self { tags, profiles }
    }

    pub fn archetype_for(&self, tag: &str) -> Option<Archetype> {
        self.tags.get(tag).copied()
    }

    pub fn profile(&self, archetype: Archetype) -> Option<&ArchetypeProfile> {
        self.profiles.get(&archetype)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchetypeInference {
    pub archetype: Archetype,
    pub tallies: BTreeMap<Archetype, u32>,
}

impl ArchetypeInference {
    pub fn votes(&self) -> u32 {
        self.tallies.get(&self.archetype).copied().unwrap_or(0)
    }
}

/// Returned when no tag votes, and kept on any tie it takes part in.
pub const DEFAULT_ARCHETYPE: Archetype = Archetype::Sustaining;

/// Majority vote over the archetypes the tags map to.
///
/// Unknown tags do not vote. Archetypes are walked in `Archetype::tie_break_order()`
/// (sustaining, startup, turnaround, accelerated growth, realignment) and a later one takes
/// the lead only with a strictly greater tally.
pub fn infer_archetype(tags: &[&str], table: &ArchetypeTable) -> ArchetypeInference {
    let mut tallies: BTreeMap<Archetype, u32> = Archetype::ordered()
        .into_iter()
        .map(|archetype| (archetype, 0))
        .collect();

    for archetype in tags.iter().filter_map(|tag| table.archetype_for(tag)) {
        *tallies.entry(archetype).or_insert(0) += 1;
    }

    let mut leader = DEFAULT_ARCHETYPE;
    let mut leading_votes = 0;
    for archetype in Archetype::tie_break_order() {
        let votes = tallies.get(&archetype).copied().unwrap_or(0);
        if votes > leading_votes {
            leader = archetype;
            leading_votes = votes;
        }
    }

    ArchetypeInference {
        archetype: leader,
        tallies,
    }
}
