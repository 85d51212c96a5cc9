//! Authored movesets and the concrete sets derived from them

use pkstrat_dex::{Species, StatsTable, Type};
use serde::{Deserialize, Serialize};

/// A field that is either a single value or an ordered list of alternatives.
///
/// The first alternative is the representative choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// The value itself, or the first alternative
    pub fn first(&self) -> Option<&T> {
        match self {
            OneOrMany::One(value) => Some(value),
            OneOrMany::Many(values) => values.first(),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(value) => std::slice::from_ref(value),
            OneOrMany::Many(values) => values,
        }
    }
}

/// A moveset as authored, where most fields may list alternatives
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moveset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Move slots; a slot with alternatives lists them in order of preference
    #[serde(default)]
    pub moves: Vec<OneOrMany<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<OneOrMany<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<OneOrMany<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nature: Option<OneOrMany<String>>,

    /// A single level or a level range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<OneOrMany<u8>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evs: Option<OneOrMany<StatsTable>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ivs: Option<OneOrMany<StatsTable>>,

    #[serde(default, rename = "teratypes", skip_serializing_if = "Option::is_none")]
    pub tera_types: Option<OneOrMany<String>>,
}

/// One concrete (if partial) set: a single value per attribute
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub species: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<String>,

    #[serde(default)]
    pub moves: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nature: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evs: Option<StatsTable>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ivs: Option<StatsTable>,

    #[serde(default)]
    pub gigantamax: bool,

    /// Hidden Power type, when it is set directly rather than through IVs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp_type: Option<Type>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tera_type: Option<String>,
}

/// Pick the representative move for every slot
pub fn resolve_moveset(moveset: &Moveset) -> Vec<String> {
    moveset
        .moves
        .iter()
        .filter_map(|slot| slot.first().cloned())
        .collect()
}

/// Collapse an authored moveset into one concrete set.
///
/// Alternatives resolve to their first entry and a level range to its lower
/// bound. A `specific_name` naming a Gigantamax forme marks the set as
/// Gigantamax and becomes its species.
pub fn to_concrete_set(
    species: &Species,
    moveset: &Moveset,
    name: Option<&str>,
    specific_name: Option<&str>,
) -> ResolvedSet {
    let gigantamax = specific_name.is_some_and(|n| n.ends_with("-Gmax"));
    let species_name = match specific_name {
        Some(specific) if gigantamax => specific.to_string(),
        _ => species.name.clone(),
    };

    ResolvedSet {
        name: name.map(str::to_string),
        species: species_name,
        item: pick(&moveset.item),
        ability: pick(&moveset.ability),
        moves: resolve_moveset(moveset),
        level: moveset
            .level
            .as_ref()
            .and_then(|level| level.as_slice().iter().min().copied()),
        nature: pick(&moveset.nature),
        evs: pick(&moveset.evs),
        ivs: pick(&moveset.ivs),
        gigantamax,
        hp_type: None,
        tera_type: pick(&moveset.tera_types),
    }
}

fn pick<T: Clone>(field: &Option<OneOrMany<T>>) -> Option<T> {
    field.as_ref().and_then(OneOrMany::first).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkstrat_dex::{FormeKind, StatId};
    use serde_json::json;

    fn moveset(value: serde_json::Value) -> Moveset {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_one_or_many_first() {
        assert_eq!(OneOrMany::One(5).first(), Some(&5));
        assert_eq!(OneOrMany::Many(vec![50, 55]).first(), Some(&50));
        assert_eq!(OneOrMany::<u8>::Many(vec![]).first(), None);
    }

    #[test]
    fn test_resolve_moveset() {
        let ms = moveset(json!({
            "moves": ["Psychic", ["Hidden Power Fire", "Hidden Power Ice"], [], "Recover"]
        }));
        assert_eq!(
            resolve_moveset(&ms),
            vec!["Psychic", "Hidden Power Fire", "Recover"]
        );
    }

    #[test]
    fn test_to_concrete_set_single_values() {
        let alakazam = Species::new("Alakazam");
        let ms = moveset(json!({
            "moves": ["Psychic", "Focus Blast", "Shadow Ball", ["Hidden Power Fire", "Hidden Power Ice"]],
            "ability": "Magic Guard",
            "item": "Life Orb",
            "nature": "Timid",
            "evs": {"spa": 252, "spd": 4, "spe": 252}
        }));

        let set = to_concrete_set(&alakazam, &ms, Some("Name"), None);
        assert_eq!(
            set,
            ResolvedSet {
                name: Some("Name".to_string()),
                species: "Alakazam".to_string(),
                item: Some("Life Orb".to_string()),
                ability: Some("Magic Guard".to_string()),
                moves: vec![
                    "Psychic".to_string(),
                    "Focus Blast".to_string(),
                    "Shadow Ball".to_string(),
                    "Hidden Power Fire".to_string(),
                ],
                level: None,
                nature: Some("Timid".to_string()),
                evs: Some(
                    StatsTable::new()
                        .with(StatId::Spa, 252)
                        .with(StatId::Spd, 4)
                        .with(StatId::Spe, 252)
                ),
                ivs: None,
                gigantamax: false,
                hp_type: None,
                tera_type: None,
            }
        );
    }

    #[test]
    fn test_to_concrete_set_alternatives_and_gigantamax() {
        let venusaur = Species::new("Venusaur-Gmax").forme_of("Venusaur", FormeKind::Gigantamax);
        let ms = moveset(json!({
            "moves": ["Growth", "Giga Drain", "Weather Ball", ["Sludge Bomb", "Solar Beam"]],
            "level": [50, 55],
            "ability": ["Overgrow", "Chlorophyll"],
            "item": ["Choice Specs", "Leftovers"],
            "nature": ["Modest", "Bold"],
            "evs": [{"spa": 252, "spd": 4, "spe": 252}, {"hp": 4, "def": 252, "spd": 252}],
            "ivs": [{"atk": 0}, {"spd": 0}]
        }));

        let set = to_concrete_set(&venusaur, &ms, None, Some("Venusaur-Gmax"));
        assert_eq!(set.name, None);
        assert_eq!(set.species, "Venusaur-Gmax");
        assert!(set.gigantamax);
        assert_eq!(set.item.as_deref(), Some("Choice Specs"));
        assert_eq!(set.ability.as_deref(), Some("Overgrow"));
        assert_eq!(set.nature.as_deref(), Some("Modest"));
        assert_eq!(set.level, Some(50));
        assert_eq!(set.moves[3], "Sludge Bomb");
        assert_eq!(set.evs.unwrap().hp, None);
        assert_eq!(set.ivs, Some(StatsTable::new().with(StatId::Atk, 0)));
    }

    #[test]
    fn test_level_range_takes_lower_bound() {
        let species = Species::new("Incineroar");
        let ms = moveset(json!({"moves": [], "level": [55, 50]}));
        assert_eq!(to_concrete_set(&species, &ms, None, None).level, Some(50));

        let ms = moveset(json!({"moves": [], "level": 5}));
        assert_eq!(to_concrete_set(&species, &ms, None, None).level, Some(5));
    }

    #[test]
    fn test_non_gigantamax_specific_name_keeps_species() {
        let species = Species::new("Gastrodon-East").forme_of("Gastrodon", FormeKind::Alternate);
        let set = to_concrete_set(&species, &Moveset::default(), None, Some("Gastrodon-East"));
        assert!(!set.gigantamax);
        assert_eq!(set.species, "Gastrodon-East");
    }

    #[test]
    fn test_resolved_set_serializes_camel_case() {
        let set = ResolvedSet {
            species: "Alakazam".to_string(),
            hp_type: Some(Type::Fire),
            tera_type: Some("Fairy".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(
            value,
            json!({
                "species": "Alakazam",
                "moves": [],
                "gigantamax": false,
                "hpType": "Fire",
                "teraType": "Fairy"
            })
        );
    }
}
