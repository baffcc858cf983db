//! Assembles the output document for the two selected eliminations.

use crate::core::identity::{build_name_map, find_player, map_platform, resolve_name};
use crate::domain::model::{Elimination, KillSummary, MatchRecord, SummaryDocument};
use std::collections::HashMap;

const FALLBACK_NAME: &str = "Unknown";

fn platform_of(id: &str, record: &MatchRecord) -> Option<String> {
    // A missing roster entry propagates as an absent platform.
    map_platform(find_player(id, &record.players).and_then(|p| p.platform.as_deref()))
}

fn section(
    elimination: &Elimination,
    record: &MatchRecord,
    names: &HashMap<String, String>,
) -> KillSummary {
    KillSummary {
        distance: elimination.distance_m,
        killer: resolve_name(&elimination.killer_id, names, FALLBACK_NAME),
        killer_platform: platform_of(&elimination.killer_id, record),
        victim: resolve_name(&elimination.victim_id, names, FALLBACK_NAME),
        victim_platform: platform_of(&elimination.victim_id, record),
        weapon: elimination.weapon.clone(),
        rarity: elimination.rarity.clone(),
    }
}

/// Resolves names and platforms for the furthest and final eliminations
/// and assembles the two-section document. Assumes upstream guarantees
/// (non-empty killer/victim ids) already hold.
pub fn build_summary(
    record: &MatchRecord,
    furthest: &Elimination,
    final_kill: &Elimination,
) -> SummaryDocument {
    let names = build_name_map(&record.players);

    SummaryDocument {
        furthest: section(furthest, record, &names),
        final_kill: section(final_kill, record, &names),
    }
}
