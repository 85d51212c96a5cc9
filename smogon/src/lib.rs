//! Fetch cache for competitive strategy data.
//!
//! Retrieves analyses, movesets and usage statistics for a species from a
//! content store addressed as `<base_url>/<kind>/<format>.json`, normalizes
//! the authored movesets into concrete sets and memoizes every result per
//! generation, species and format.
//!
//! # Overview
//!
//! ```text
//! pkstrat-dex (species metadata)
//!        │
//!        ▼
//! pkstrat-smogon (fetch cache, format resolution, set normalization) ← THIS CRATE
//!        │
//!        ▼
//! Transport (HttpTransport, or anything implementing the trait)
//! ```
//!
//! # Main Types
//!
//! - [`Smogon`] - The fetch cache and its query operations
//! - [`SmogonConfig`] - Content store location and strictness
//! - [`Transport`] / [`HttpTransport`] - How documents are fetched
//! - [`Analysis`] / [`ResolvedSet`] / [`UsageStats`] - Query results
//!
//! # Example Usage
//!
//! ```ignore
//! use pkstrat_dex::Dex;
//! use pkstrat_smogon::{HttpTransport, Smogon};
//!
//! let gen2 = Dex::from_json(2, &std::fs::read_to_string("gen2.json")?)?;
//! let smogon = Smogon::new(HttpTransport::new(), false);
//!
//! for set in smogon.sets(&gen2, "Snorlax", Some("gen2ou")).await? {
//!     println!("{}: {:?}", set.name.unwrap_or_default(), set.moves);
//! }
//! ```

mod cache;
mod data;
mod error;
mod format;
mod hidden_power;
mod name;
mod set;
mod transport;


use std::collections::HashMap;

use futures_util::future::try_join_all;
use pkstrat_dex::{Generation, Species};
use serde::de::DeserializeOwned;
use serde_json::Value;

use cache::{Cache, CacheKey};
use data::RawAnalysis;

pub use data::{Analysis, AnalysisSet, CreditTeam, Credits, Member, Usage, UsageStats};
pub use error::{Error, Result, TransportError};
pub use format::{default_format_for, ladder, normalize_base_format, resolve_default_format};
pub use hidden_power::{Regime, requested_type, resolve_hidden_power};
pub use name::display_name;
pub use set::{Moveset, OneOrMany, ResolvedSet, resolve_moveset, to_concrete_set};
pub use transport::{HttpTransport, Payload, Transport};

/// Where the public content store lives
pub const DEFAULT_BASE_URL: &str = "https://data.pkmn.cc";

#[derive(Debug, Clone)]
pub struct SmogonConfig {
    /// Content store root, without a trailing slash
    pub base_url: String,
    /// Report unknown formats as errors and never fetch speculatively
    pub strict: bool,
}

impl Default for SmogonConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            strict: false,
        }
    }
}

/// Kind of document in the content store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DataKind {
    Analyses,
    Sets,
    Stats,
}

impl DataKind {
    fn as_str(&self) -> &'static str {
        match self {
            DataKind::Analyses => "analyses",
            DataKind::Sets => "sets",
            DataKind::Stats => "stats",
        }
    }

    /// Format whose document holds the data for `format`
    fn document<'a>(&self, format: &'a str) -> &'a str {
        match self {
            // Analyses and sets are written once per base ladder
            DataKind::Analyses | DataKind::Sets => normalize_base_format(format),
            DataKind::Stats => format,
        }
    }
}

/// Caching client for analyses, sets and usage statistics.
///
/// Every result is cached per `(generation, species, format)` for the
/// lifetime of the instance and never refetched.
///
/// In strict mode an unknown format is an error, and queries without a
/// format only report what earlier queries already fetched. In permissive
/// mode an unknown format reads as "no data", and queries without a format
/// sweep the generation's whole ladder.
pub struct Smogon<T: Transport> {
    transport: T,
    config: SmogonConfig,
    analyses: Cache<Vec<Analysis>>,
    sets: Cache<Vec<ResolvedSet>>,
    stats: Cache<Option<UsageStats>>,
}

impl<T: Transport> Smogon<T> {
    pub fn new(transport: T, strict: bool) -> Self {
        Self::with_config(
            transport,
            SmogonConfig {
                strict,
                ..SmogonConfig::default()
            },
        )
    }

    pub fn with_config(transport: T, config: SmogonConfig) -> Self {
        Self {
            transport,
            config,
            analyses: Cache::new(),
            sets: Cache::new(),
            stats: Cache::new(),
        }
    }

    pub fn config(&self) -> &SmogonConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Written analyses for a species.
    ///
    /// With a `format`, returns the analyses for exactly that format.
    /// Without one, returns the analyses of every format on the ladder, then
    /// of any other format already cached for the species.
    pub async fn analyses(
        &self,
        generation: &dyn Generation,
        species: &str,
        format: Option<&str>,
    ) -> Result<Vec<Analysis>> {
        let Some(species) = known_species(generation, species) else {
            return Ok(Vec::new());
        };

        match format {
            Some(format) => self.analyses_in(generation, species, format).await,
            None if self.config.strict => {
                Ok(cached_concat(&self.analyses, generation.num(), &species.id()))
            }
            None => {
                let formats = formats_for(&self.analyses, generation.num(), &species.id());
                let results = try_join_all(
                    formats
                        .iter()
                        .map(|format| self.analyses_in(generation, species, format)),
                )
                .await?;
                Ok(results.into_iter().flatten().collect())
            }
        }
    }

    /// Concrete sets for a species; `format` behaves as in [`Smogon::analyses`]
    pub async fn sets(
        &self,
        generation: &dyn Generation,
        species: &str,
        format: Option<&str>,
    ) -> Result<Vec<ResolvedSet>> {
        let Some(species) = known_species(generation, species) else {
            return Ok(Vec::new());
        };

        match format {
            Some(format) => self.sets_in(generation, species, format).await,
            None if self.config.strict => {
                Ok(cached_concat(&self.sets, generation.num(), &species.id()))
            }
            None => {
                let formats = formats_for(&self.sets, generation.num(), &species.id());
                let results = try_join_all(
                    formats
                        .iter()
                        .map(|format| self.sets_in(generation, species, format)),
                )
                .await?;
                Ok(results.into_iter().flatten().collect())
            }
        }
    }

    /// Usage statistics for a species.
    ///
    /// Without a `format` the species' default format is used. An unknown
    /// format is always an error.
    pub async fn stats(
        &self,
        generation: &dyn Generation,
        species: &str,
        format: Option<&str>,
    ) -> Result<Option<UsageStats>> {
        let Some(species) = known_species(generation, species) else {
            return Ok(None);
        };
        let format = match format {
            Some(format) => format.to_string(),
            None => match resolve_default_format(generation, species) {
                Some(format) => format,
                None => return Ok(None),
            },
        };

        let key = CacheKey::new(generation.num(), species.id(), format.as_str());
        if let Some(cached) = self.stats.get(&key) {
            return Ok(cached);
        }

        let (url, entry) = self
            .fetch_entry(DataKind::Stats, generation, species, &format)
            .await?;
        let stats = entry.map(|entry| decode(&url, entry)).transpose()?;
        Ok(self.stats.insert(key, stats))
    }

    async fn analyses_in(
        &self,
        generation: &dyn Generation,
        species: &Species,
        format: &str,
    ) -> Result<Vec<Analysis>> {
        self.cached_list(
            &self.analyses,
            DataKind::Analyses,
            generation,
            species,
            format,
            |url, entry| {
                let raw: RawAnalysis = decode(url, entry)?;
                Ok(vec![analysis(generation, species, format, url, raw)?])
            },
        )
        .await
    }

    async fn sets_in(
        &self,
        generation: &dyn Generation,
        species: &Species,
        format: &str,
    ) -> Result<Vec<ResolvedSet>> {
        self.cached_list(
            &self.sets,
            DataKind::Sets,
            generation,
            species,
            format,
            |url, entry| {
                movesets(url, entry)?
                    .iter()
                    .map(|moveset| concrete_set(generation, species, moveset))
                    .collect()
            },
        )
        .await
    }

    /// Cached list for one format, fetching and normalizing on a miss.
    ///
    /// Nothing is cached when fetching or normalizing fails, except that an
    /// unknown format in permissive mode is cached as empty.
    async fn cached_list<V: Clone>(
        &self,
        cache: &Cache<Vec<V>>,
        kind: DataKind,
        generation: &dyn Generation,
        species: &Species,
        format: &str,
        normalize: impl FnOnce(&str, Value) -> Result<Vec<V>>,
    ) -> Result<Vec<V>> {
        let key = CacheKey::new(generation.num(), species.id(), format);
        if let Some(cached) = cache.get(&key) {
            return Ok(cached);
        }

        let values = match self.fetch_entry(kind, generation, species, format).await {
            Ok((url, Some(entry))) => normalize(&url, entry)?,
            Ok((_, None)) => Vec::new(),
            Err(Error::UnknownFormat { format }) if !self.config.strict => {
                tracing::debug!(
                    kind = kind.as_str(),
                    format = %format,
                    species = %species.name,
                    "Unknown format, treating as empty"
                );
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        Ok(cache.insert(key, values))
    }

    /// Fetch the document for `format` and take the species' entry from it
    async fn fetch_entry(
        &self,
        kind: DataKind,
        generation: &dyn Generation,
        species: &Species,
        format: &str,
    ) -> Result<(String, Option<Value>)> {
        let url = format!(
            "{}/{}/{}.json",
            self.config.base_url.trim_end_matches('/'),
            kind.as_str(),
            kind.document(format)
        );
        tracing::debug!(url = %url, format = %format, species = %species.name, "Cache miss, fetching");

        let response = self
            .transport
            .fetch(&url)
            .await
            .map_err(|e| transport_error(e, format))?;
        let document = response
            .json()
            .await
            .map_err(|e| transport_error(e, format))?;

        let mut entries: HashMap<String, Value> = decode(&url, document)?;
        let entry = [true, false]
            .into_iter()
            .find_map(|specific| entries.remove(&display_name(generation, species, specific)));
        Ok((url, entry))
    }
}

/// A species the generation knows and that exists in it.
///
/// Battle-only formes resolve to the forme they are brought into battle as,
/// which is the one sets are written for.
fn known_species<'a>(generation: &'a dyn Generation, name: &str) -> Option<&'a Species> {
    let species = generation.species(name).filter(|species| species.exists)?;
    let outside = species
        .battle_only
        .as_deref()
        .and_then(|outside| generation.species(outside))
        .filter(|outside| outside.exists);
    Some(outside.unwrap_or(species))
}

fn transport_error(error: TransportError, format: &str) -> Error {
    match error {
        TransportError::NotFound { .. } => Error::UnknownFormat {
            format: format.to_string(),
        },
        error => Error::Transport(error),
    }
}

fn decode<D: DeserializeOwned>(url: &str, value: Value) -> Result<D> {
    serde_json::from_value(value).map_err(|source| Error::MalformedPayload {
        url: url.to_string(),
        source,
    })
}

/// Ladder formats in order, then any other cached format for the species
fn formats_for<V: Clone>(cache: &Cache<V>, generation: u8, species: &str) -> Vec<String> {
    let mut formats = ladder(generation);
    let extra: Vec<String> = cache
        .formats(generation, species)
        .into_iter()
        .filter(|format| !formats.contains(format))
        .collect();
    formats.extend(extra);
    formats
}

fn cached_concat<V: Clone>(cache: &Cache<Vec<V>>, generation: u8, species: &str) -> Vec<V> {
    formats_for(cache, generation, species)
        .iter()
        .filter_map(|format| cache.get(&CacheKey::new(generation, species, format.as_str())))
        .flatten()
        .collect()
}

/// Sets keyed by name, in authored order
fn movesets(url: &str, value: Value) -> Result<Vec<Moveset>> {
    let named: serde_json::Map<String, Value> = decode(url, value)?;
    named
        .into_iter()
        .map(|(name, value)| {
            let mut moveset: Moveset = decode(url, value)?;
            moveset.name = Some(name);
            Ok(moveset)
        })
        .collect()
}

fn concrete_set(
    generation: &dyn Generation,
    species: &Species,
    moveset: &Moveset,
) -> Result<ResolvedSet> {
    let specific = display_name(generation, species, true);
    let set = to_concrete_set(species, moveset, moveset.name.as_deref(), Some(&specific));
    resolve_hidden_power(generation, set)
}

fn analysis(
    generation: &dyn Generation,
    species: &Species,
    format: &str,
    url: &str,
    raw: RawAnalysis,
) -> Result<Analysis> {
    let sets = movesets(url, Value::Object(raw.sets))?
        .into_iter()
        .map(|moveset| {
            let set = concrete_set(generation, species, &moveset)?;
            Ok(AnalysisSet {
                name: moveset.name.clone().unwrap_or_default(),
                description: moveset.description.clone(),
                moveset,
                set,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Analysis {
        format: format.to_string(),
        overview: raw.overview,
        comments: raw.comments,
        sets,
        credits: raw.credits,
    })
}
