//! Merges the raw kill feed into classified elimination records.

use crate::core::tags::{classify_rarity, classify_weapon};
use crate::domain::model::{Elimination, KillFeedEntry};

/// Centimeters → meters, rounded to two decimals. Rounding rule is
/// half-away-from-zero (`f64::round` tie semantics).
fn distance_meters(distance_cm: Option<f64>) -> f64 {
    (distance_cm.unwrap_or(0.0) / 100.0 * 100.0).round() / 100.0
}

/// Joins each usable kill-feed entry with its classified weapon/rarity
/// and normalized distance, preserving feed order. Entries without a
/// killer or victim identifier are dropped, never converted to records.
/// An empty result is a legitimate terminal state, not an error.
pub fn merge_kill_feed(feed: &[KillFeedEntry]) -> Vec<Elimination> {
    let mut merged = Vec::with_capacity(feed.len());

    for (feed_index, entry) in feed.iter().enumerate() {
        let killer_id = entry.killer_id.as_deref().unwrap_or("");
        let victim_id = entry.victim_id.as_deref().unwrap_or("");
        if killer_id.is_empty() || victim_id.is_empty() {
            tracing::debug!(feed_index, "dropping kill-feed entry without killer or victim");
            continue;
        }

        merged.push(Elimination {
            feed_index,
            killer_id: killer_id.to_string(),
            victim_id: victim_id.to_string(),
            distance_m: distance_meters(entry.distance_cm),
            weapon: classify_weapon(&entry.death_tags),
            rarity: classify_rarity(&entry.death_tags),
        });
    }

    merged
}
