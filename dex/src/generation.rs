//! Generation lookup tables

use std::collections::HashMap;

use anyhow::{Context, Result};

use crate::id::to_id;
use crate::species::Species;

/// Read-only metadata for one game generation.
///
/// Implement this over whatever data source is available; [`Dex`] is a
/// simple in-memory implementation.
pub trait Generation: Send + Sync {
    /// Generation number (1-9)
    fn num(&self) -> u8;

    /// Look up a species by display name or id
    fn species(&self, name: &str) -> Option<&Species>;
}

/// In-memory species table for a single generation
#[derive(Debug, Clone)]
pub struct Dex {
    num: u8,
    species: HashMap<String, Species>,
}

impl Dex {
    /// Build a table from species records
    pub fn new(num: u8, species: impl IntoIterator<Item = Species>) -> Self {
        Self {
            num,
            species: species.into_iter().map(|s| (s.id(), s)).collect(),
        }
    }

    /// Load a table from a JSON array of species records
    pub fn from_json(num: u8, json: &str) -> Result<Self> {
        let species: Vec<Species> = serde_json::from_str(json)
            .with_context(|| format!("Failed to parse gen {} species table", num))?;
        Ok(Self::new(num, species))
    }

    /// Load a table from an already-parsed JSON array
    pub fn from_value(num: u8, value: serde_json::Value) -> Result<Self> {
        let species: Vec<Species> = serde_json::from_value(value)
            .with_context(|| format!("Invalid gen {} species table", num))?;
        Ok(Self::new(num, species))
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

impl Generation for Dex {
    fn num(&self) -> u8 {
        self.num
    }

    fn species(&self, name: &str) -> Option<&Species> {
        self.species.get(&to_id(name))
    }
}
