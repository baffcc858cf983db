//! Player identity resolution: display names and platform labels.

use crate::domain::model::PlayerData;
use std::collections::HashMap;

/// Builds the id → display name lookup for a roster. Display name is the
/// first non-empty of custom override, raw name, streamer-mode alias, and
/// the identifier itself. Duplicate identifiers: last entry wins.
pub fn build_name_map(players: &[PlayerData]) -> HashMap<String, String> {
    let mut map = HashMap::new();

    for player in players {
        if player.player_id.is_empty() {
            continue;
        }

        let display = [
            player.custom_name_override.as_deref(),
            player.player_name.as_deref(),
            player.streamer_mode_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|name| !name.is_empty())
        .unwrap_or(&player.player_id);

        map.insert(player.player_id.clone(), display.to_string());
    }

    map
}

/// Resolves an identifier to its display name; an unmapped id resolves
/// to itself, an empty id to the fallback label.
pub fn resolve_name(id: &str, names: &HashMap<String, String>, fallback: &str) -> String {
    if id.is_empty() {
        return fallback.to_string();
    }

    names.get(id).cloned().unwrap_or_else(|| id.to_string())
}

/// Maps a platform code to its display label. Unknown codes pass through
/// unchanged; an absent code propagates as None.
pub fn map_platform(code: Option<&str>) -> Option<String> {
    let code = code?;
    let label = match code {
        "WIN" => "PC",
        "XBL" => "Xbox One",
        "XSX" => "Xbox Series X/S",
        "PSN" => "PlayStation",
        "SWT" => "Nintendo Switch",
        "MAC" => "Mac",
        "IOS" => "iOS",
        "AND" => "Android",
        other => other,
    };
    Some(label.to_string())
}

/// First roster entry with the given identifier; an empty id finds nothing.
pub fn find_player<'a>(id: &str, players: &'a [PlayerData]) -> Option<&'a PlayerData> {
    if id.is_empty() {
        return None;
    }

    players.iter().find(|p| p.player_id == id)
}
