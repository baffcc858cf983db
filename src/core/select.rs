//! Picks the two notable eliminations out of the merged set.

use crate::domain::model::Elimination;

const MIN_FINAL_DISTANCE_M: f64 = 0.1;

/// The elimination with the greatest distance. Ties go to the earliest
/// record in feed order. None only for an empty set, which callers treat
/// as "no summary to produce".
pub fn furthest(merged: &[Elimination]) -> Option<&Elimination> {
    let mut best: Option<&Elimination> = None;

    for candidate in merged {
        match best {
            // Strict comparison keeps the first maximal record on ties.
            Some(current) if candidate.distance_m <= current.distance_m => {}
            _ => best = Some(candidate),
        }
    }

    best
}

/// A "real" kill: distinct, present participants at a non-trivial range.
/// Excludes self-inflicted deaths and zero-distance storm/fall artifacts.
fn is_real_kill(elimination: &Elimination) -> bool {
    !elimination.killer_id.is_empty()
        && !elimination.victim_id.is_empty()
        && elimination.killer_id != elimination.victim_id
        && elimination.distance_m >= MIN_FINAL_DISTANCE_M
}

/// The match-ending elimination: the last real kill in feed order, or the
/// very last record when nothing qualifies. None only for an empty set.
pub fn final_kill(merged: &[Elimination]) -> Option<&Elimination> {
    merged
        .iter()
        .rev()
        .find(|e| is_real_kill(e))
        .or_else(|| merged.last())
}
