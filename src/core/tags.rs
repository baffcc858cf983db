//! Death-cause tag classification.
//!
//! Both lookups are substring scans over the tag set, not exact matches:
//! real tags carry prefixes like `Gameplay.Damage.` around the parts we
//! care about.

/// Ordered weapon rule table, most specific pattern first. Order is
/// load-bearing: the suppressed-SMG pattern must be tried before the
/// generic SMG pattern it contains.
const WEAPON_RULES: [(&str, &str); 7] = [
    ("weapon.ranged.sniper.heavy", "Heavy Sniper"),
    ("weapon.ranged.sniper.bolt", "Bolt-Action Sniper"),
    ("weapon.ranged.sniper.hunting", "Hunting Rifle"),
    ("weapon.ranged.shotgun.pump", "Pump Shotgun"),
    ("item.weapon.ranged.smg.suppressed", "Suppressed SMG"),
    ("weapon.ranged.smg", "SMG"),
    ("weapon.ranged.assault.standard", "Assault Rifle"),
];

const RARITY_PREFIX: &str = "rarity.";

/// Maps a tag set to a weapon label, first matching rule wins. Tags are
/// matched case-insensitively; no match yields "Unknown".
pub fn classify_weapon(tags: &[String]) -> String {
    for (pattern, label) in WEAPON_RULES {
        if tags
            .iter()
            .any(|tag| tag.to_ascii_lowercase().contains(pattern))
        {
            return label.to_string();
        }
    }

    "Unknown".to_string()
}

/// Maps a tag set to a rarity label. The first tag starting with
/// `rarity.` (case-insensitive) decides; later rarity tags are ignored.
/// The suffix substitution itself is case-sensitive: an unrecognized
/// suffix passes through unchanged.
pub fn classify_rarity(tags: &[String]) -> String {
    for tag in tags {
        // Checked slice: tags are untrusted and may split a multibyte
        // character at the prefix boundary.
        let prefix_matches = tag
            .get(..RARITY_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(RARITY_PREFIX));
        if prefix_matches {
            let suffix = &tag[RARITY_PREFIX.len()..];
            let label = match suffix {
                "Common" => "Common",
                "Uncommon" => "Uncommon",
                "Rare" => "Rare",
                "VeryRare" => "Epic",
                "SuperRare" => "Legendary",
                "UltraRare" => "Legendary",
                other => other,
            };
            return label.to_string();
        }
    }

    "Unknown".to_string()
}
