use serde::{Deserialize, Serialize};

/// One roster entry as supplied by the external replay decoder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerData {
    pub player_id: String,
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub custom_name_override: Option<String>,
    #[serde(default)]
    pub streamer_mode_name: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
}

/// One raw kill-feed event. Killer/victim may be absent in partial
/// captures; such entries are dropped during merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KillFeedEntry {
    #[serde(default)]
    pub killer_id: Option<String>,
    #[serde(default)]
    pub victim_id: Option<String>,
    #[serde(default)]
    pub distance_cm: Option<f64>,
    #[serde(default)]
    pub death_tags: Vec<String>,
}

/// A fully decoded match record, the pipeline's sole input. Feed order
/// of `kill_feed` is significant and preserved throughout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(default)]
    pub players: Vec<PlayerData>,
    #[serde(default)]
    pub kill_feed: Vec<KillFeedEntry>,
}

/// A merged elimination: one valid kill-feed entry joined with its
/// classified weapon/rarity and normalized distance. Built once by the
/// merge step and never mutated.
#[derive(Debug, Clone)]
pub struct Elimination {
    pub feed_index: usize,
    pub killer_id: String,
    pub victim_id: String,
    pub distance_m: f64,
    pub weapon: String,
    pub rarity: String,
}

/// One resolved section of the output document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KillSummary {
    pub distance: f64,
    pub killer: String,
    pub killer_platform: Option<String>,
    pub victim: String,
    pub victim_platform: Option<String>,
    pub weapon: String,
    pub rarity: String,
}

/// The success-case output: the longest-range kill and the match-ending
/// kill. Serialized shape matches the external JSON contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryDocument {
    pub furthest: KillSummary,
    #[serde(rename = "final")]
    pub final_kill: KillSummary,
}
