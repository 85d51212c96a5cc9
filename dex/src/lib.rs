//! Generation metadata for competitive strategy lookups.
//!
//! This crate provides the read-only species tables that the strategy fetch
//! cache consults: whether a species exists in a generation, which base
//! species a forme belongs to, what kind of forme it is, and which tier it
//! sits in.
//!
//! # Overview
//!
//! ```text
//! pkstrat-dex (species metadata) ← THIS CRATE
//!        │
//!        ▼
//! pkstrat-smogon (fetch cache, format resolution, set normalization)
//! ```
//!
//! # Main Types
//!
//! - [`Generation`] - Lookup trait implemented by any metadata source
//! - [`Dex`] - In-memory [`Generation`] loaded from a JSON species table
//! - [`Species`] / [`FormeKind`] - Species records and forme categories
//! - [`Type`] - Pokemon types
//! - [`StatId`] / [`StatsTable`] - Stat names and partial stat spreads
//!
//! # Example Usage
//!
//! ```ignore
//! use pkstrat_dex::{Dex, Generation};
//!
//! let gen2 = Dex::from_json(2, &std::fs::read_to_string("gen2.json")?)?;
//! let snorlax = gen2.species("Snorlax").unwrap();
//! assert_eq!(snorlax.tier.as_deref(), Some("OU"));
//! ```

mod generation;
mod id;
mod species;
mod stats;
mod types;

pub use generation::{Dex, Generation};
pub use id::to_id;
pub use species::{FormeKind, Species};
pub use stats::{StatId, StatsTable};
pub use types::Type;
