//! Species records

use serde::{Deserialize, Serialize};

use crate::id::to_id;

/// What kind of forme a species entry is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormeKind {
    /// The species itself, no forme
    #[default]
    Base,
    Mega,
    Primal,
    /// Alola/Galar/Hisui/Paldea variants
    Regional,
    Gigantamax,
    /// Battle Bond Greninja
    Ash,
    /// Any other mechanically distinct forme (Keldeo-Resolute, Gastrodon-East, ...)
    Alternate,
    Totem,
    /// Seasonal, ornamental and cosplay variants (Sawsbuck-Summer, Sinistea-Antique, Pikachu-Libre)
    Cosmetic,
    /// Disguise-revealed and similar in-battle reveals (Mimikyu-Busted)
    Revealed,
    /// Let's Go partner formes, tracked as their own entities
    Starter,
}

impl FormeKind {
    /// Formes the strategy corpus never tracks apart from their base species
    pub fn is_cosmetic(&self) -> bool {
        matches!(
            self,
            FormeKind::Totem | FormeKind::Cosmetic | FormeKind::Revealed
        )
    }
}

/// One species (or forme) as known to a generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    /// Display name including forme, e.g. "Venusaur-Mega"
    pub name: String,

    /// Root species, e.g. "Venusaur"; `None` for base formes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_species: Option<String>,

    #[serde(default)]
    pub forme_kind: FormeKind,

    /// Competitive tier, e.g. "OU" or "(PU)"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,

    /// Whether the species exists in this generation
    #[serde(default = "default_exists")]
    pub exists: bool,

    /// Out-of-battle forme of a forme that only appears mid-battle,
    /// e.g. "Darmanitan-Galar" for "Darmanitan-Galar-Zen"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battle_only: Option<String>,
}

fn default_exists() -> bool {
    true
}

impl Species {
    /// Create a base species with no tier
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_species: None,
            forme_kind: FormeKind::Base,
            tier: None,
            exists: true,
            battle_only: None,
        }
    }

    /// Mark this species as a forme of `base`
    pub fn forme_of(mut self, base: impl Into<String>, kind: FormeKind) -> Self {
        self.base_species = Some(base.into());
        self.forme_kind = kind;
        self
    }

    /// Mark this species as a mid-battle transformation of `outside`
    pub fn battle_only_of(mut self, outside: impl Into<String>) -> Self {
        self.battle_only = Some(outside.into());
        self
    }

    pub fn with_tier(mut self, tier: impl Into<String>) -> Self {
        self.tier = Some(tier.into());
        self
    }

    /// Lookup id of the display name
    pub fn id(&self) -> String {
        to_id(&self.name)
    }

    /// Root species name, falling back to the species' own name
    pub fn base_species(&self) -> &str {
        self.base_species.as_deref().unwrap_or(&self.name)
    }
}
