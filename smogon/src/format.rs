//! Format identifiers: default tiers, seasonal normalization and ladders

use pkstrat_dex::{Generation, Species, to_id};

/// Tier markers that never correspond to a playable format
const UNTIERED: &[&str] = &["illegal", "unreleased"];

/// Ladder families whose trailing series/season token is dropped
const BATTLE_STADIUM: &[&str] = &["battlestadiumsingles", "battlestadiumdoubles"];

/// Default format for a species: `gen<N>` followed by the format its tier
/// is played in.
///
/// Borderline tiers are played in the tier above (`UUBL` -> `ou`).
/// Returns `None` when the species does not exist in the generation or has
/// no playable tier.
pub fn resolve_default_format(generation: &dyn Generation, species: &Species) -> Option<String> {
    if !species.exists {
        return None;
    }

    let tier = to_id(species.tier.as_deref()?);
    if tier.is_empty() || UNTIERED.contains(&tier.as_str()) {
        return None;
    }

    Some(format!("gen{}{}", generation.num(), tier_format(&tier)))
}

/// Format id for a tier id
fn tier_format(tier: &str) -> &str {
    match tier {
        "ag" => "anythinggoes",
        "uber" => "ubers",
        "uubl" => "ou",
        "rubl" => "uu",
        "nubl" => "ru",
        "publ" => "nu",
        "zubl" => "pu",
        _ => tier,
    }
}

/// [`resolve_default_format`] for a species looked up by name
pub fn default_format_for(generation: &dyn Generation, name: &str) -> Option<String> {
    resolve_default_format(generation, generation.species(name)?)
}

/// Collapse a seasonal format to the ladder its sets are authored for.
///
/// `gen7vgc2019moonseries` -> `gen7vgc2019`,
/// `gen8battlestadiumsinglesseries10` -> `gen8battlestadiumsingles`.
/// Anything else, including an already-base format, is returned as is.
pub fn normalize_base_format(format: &str) -> &str {
    let Some((prefix_len, rest)) = split_generation(format) else {
        return format;
    };

    if let Some(year) = rest.strip_prefix("vgc") {
        let is_year = year.len() >= 4 && year.as_bytes()[..4].iter().all(u8::is_ascii_digit);
        return if is_year {
            &format[..prefix_len + "vgc".len() + 4]
        } else {
            format
        };
    }

    BATTLE_STADIUM
        .iter()
        .find(|family| rest.starts_with(*family))
        .map(|family| &format[..prefix_len + family.len()])
        .unwrap_or(format)
}

/// Singles tiers of a generation, lowest usage first
pub fn ladder(generation: u8) -> Vec<String> {
    let tiers: &[&str] = match generation {
        1..=3 => &["nu", "uu", "ou", "ubers"],
        4 => &["lc", "nu", "uu", "ou", "ubers"],
        5 => &["lc", "nu", "ru", "uu", "ou", "ubers"],
        6 => &["lc", "pu", "nu", "ru", "uu", "ou", "ubers"],
        _ => &["lc", "zu", "pu", "nu", "ru", "uu", "ou", "ubers"],
    };

    tiers
        .iter()
        .map(|tier| format!("gen{}{}", generation, tier))
        .collect()
}

/// Split `gen<N>` off a format, returning its length and the remainder
fn split_generation(format: &str) -> Option<(usize, &str)> {
    let after = format.strip_prefix("gen")?;
    let digits = after.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    Some(("gen".len() + digits, &after[digits..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkstrat_dex::{Dex, FormeKind};

    fn dex(num: u8) -> Dex {
        Dex::new(
            num,
            [
                Species::new("Snorlax").with_tier("OU"),
                Species::new("Dragonair").with_tier("NU"),
                Species::new("Vanilluxe").with_tier("(PU)"),
                Species::new("Pikachu-Starter")
                    .forme_of("Pikachu", FormeKind::Starter)
                    .with_tier("Illegal"),
                Species::new("Missingno"),
            ],
        )
    }

    fn default_format(num: u8, name: &str) -> Option<String> {
        let generation = dex(num);
        let species = generation.species(name)?;
        resolve_default_format(&generation, species)
    }

    #[test]
    fn test_default_format() {
        assert_eq!(default_format(2, "Snorlax").as_deref(), Some("gen2ou"));
        assert_eq!(default_format(1, "Dragonair").as_deref(), Some("gen1nu"));
        assert_eq!(default_format(6, "Vanilluxe").as_deref(), Some("gen6pu"));
    }

    #[test]
    fn test_default_format_uses_format_ids() {
        let generation = Dex::new(
            9,
            [
                Species::new("Mewtwo").with_tier("Uber"),
                Species::new("Zacian").with_tier("(Uber)"),
                Species::new("Koraidon").with_tier("AG"),
                Species::new("Azelf").with_tier("UUBL"),
                Species::new("Crawdaunt").with_tier("PUBL"),
            ],
        );
        let format = |name: &str| default_format_for(&generation, name);

        assert_eq!(format("Mewtwo").as_deref(), Some("gen9ubers"));
        assert_eq!(format("Zacian").as_deref(), Some("gen9ubers"));
        assert_eq!(format("Koraidon").as_deref(), Some("gen9anythinggoes"));
        assert_eq!(format("Azelf").as_deref(), Some("gen9ou"));
        assert_eq!(format("Crawdaunt").as_deref(), Some("gen9nu"));
        assert!(ladder(9).contains(&"gen9ubers".to_string()));
    }

    #[test]
    fn test_default_format_by_name() {
        let generation = dex(2);
        assert_eq!(default_format_for(&generation, "snorlax").as_deref(), Some("gen2ou"));
        assert_eq!(default_format_for(&generation, "Fakemon"), None);
    }

    #[test]
    fn test_default_format_without_playable_tier() {
        assert_eq!(default_format(7, "Pikachu-Starter"), None);
        assert_eq!(default_format(1, "Missingno"), None);

        let generation = dex(4);
        let mut gone = Species::new("Snorlax").with_tier("OU");
        gone.exists = false;
        assert_eq!(resolve_default_format(&generation, &gone), None);
    }

    #[test]
    fn test_normalize_base_format() {
        assert_eq!(normalize_base_format("gen2ou"), "gen2ou");
        assert_eq!(normalize_base_format("gen7vgc2019moonseries"), "gen7vgc2019");
        assert_eq!(normalize_base_format("gen7vgc2019ultraseries"), "gen7vgc2019");
        assert_eq!(
            normalize_base_format("gen8battlestadiumsinglesseries10"),
            "gen8battlestadiumsingles"
        );
        assert_eq!(normalize_base_format("gen8vgc2020"), "gen8vgc2020");
        assert_eq!(normalize_base_format("gen8vgc2021"), "gen8vgc2021");
        assert_eq!(normalize_base_format("gen8vgc2021battleseries10"), "gen8vgc2021");
        assert_eq!(normalize_base_format("gen8vgc2021fooseries"), "gen8vgc2021");
    }

    #[test]
    fn test_normalize_base_format_is_idempotent() {
        for format in [
            "gen7vgc2019moonseries",
            "gen8battlestadiumdoublesseries13",
            "gen9ou",
            "gen8vgc2021series10",
        ] {
            let base = normalize_base_format(format);
            assert_eq!(normalize_base_format(base), base);
        }
    }

    #[test]
    fn test_normalize_leaves_unrecognized_alone() {
        assert_eq!(normalize_base_format("gen8vgcfoo"), "gen8vgcfoo");
        assert_eq!(normalize_base_format("vgc2019moonseries"), "vgc2019moonseries");
        assert_eq!(normalize_base_format("genvgc2019"), "genvgc2019");
        assert_eq!(normalize_base_format(""), "");
    }

    #[test]
    fn test_ladder_is_ascending() {
        assert_eq!(ladder(2), vec!["gen2nu", "gen2uu", "gen2ou", "gen2ubers"]);

        let gen8 = ladder(8);
        assert_eq!(gen8.first().map(String::as_str), Some("gen8lc"));
        assert_eq!(gen8.last().map(String::as_str), Some("gen8ubers"));
        let uu = gen8.iter().position(|f| f == "gen8uu").unwrap();
        let ou = gen8.iter().position(|f| f == "gen8ou").unwrap();
        assert!(uu < ou);
    }
}
