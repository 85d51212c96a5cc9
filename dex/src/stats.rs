//! Stat names and partial stat spreads (EVs, IVs)

use serde::{Deserialize, Serialize};

/// One of the six permanent stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatId {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

impl StatId {
    pub const ALL: [StatId; 6] = [
        StatId::Hp,
        StatId::Atk,
        StatId::Def,
        StatId::Spa,
        StatId::Spd,
        StatId::Spe,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "hp" => Some(StatId::Hp),
            "atk" => Some(StatId::Atk),
            "def" => Some(StatId::Def),
            "spa" => Some(StatId::Spa),
            "spd" => Some(StatId::Spd),
            "spe" => Some(StatId::Spe),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatId::Hp => "hp",
            StatId::Atk => "atk",
            StatId::Def => "def",
            StatId::Spa => "spa",
            StatId::Spd => "spd",
            StatId::Spe => "spe",
        }
    }
}

/// A partial stat spread; unset stats fall back to whatever default the
/// consumer applies (0 for EVs, 31 for IVs)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atk: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub def: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spa: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spd: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spe: Option<u8>,
}

impl StatsTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value for a stat, if set
    pub fn get(&self, stat: StatId) -> Option<u8> {
        match stat {
            StatId::Hp => self.hp,
            StatId::Atk => self.atk,
            StatId::Def => self.def,
            StatId::Spa => self.spa,
            StatId::Spd => self.spd,
            StatId::Spe => self.spe,
        }
    }

    /// Get the value for a stat, or `default` when unset
    pub fn get_or(&self, stat: StatId, default: u8) -> u8 {
        self.get(stat).unwrap_or(default)
    }

    /// Set or clear a stat
    pub fn set(&mut self, stat: StatId, value: Option<u8>) {
        let slot = match stat {
            StatId::Hp => &mut self.hp,
            StatId::Atk => &mut self.atk,
            StatId::Def => &mut self.def,
            StatId::Spa => &mut self.spa,
            StatId::Spd => &mut self.spd,
            StatId::Spe => &mut self.spe,
        };
        *slot = value;
    }

    /// Builder-style setter
    pub fn with(mut self, stat: StatId, value: u8) -> Self {
        self.set(stat, Some(value));
        self
    }

    /// Check if no stat is set
    pub fn is_empty(&self) -> bool {
        StatId::ALL.iter().all(|s| self.get(*s).is_none())
    }

    /// Iterate over the stats that are set, in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (StatId, u8)> + '_ {
        StatId::ALL
            .iter()
            .filter_map(|s| self.get(*s).map(|v| (*s, v)))
    }
}
