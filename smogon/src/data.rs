//! Analyses and usage statistics
//!
//! These types represent the JSON documents served by the content store.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::set::{Moveset, ResolvedSet};

/// A written analysis of one species in one format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Format the analysis was requested for
    pub format: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,

    #[serde(default)]
    pub sets: Vec<AnalysisSet>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<Credits>,
}

/// A set inside an analysis, both as written and as resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSet {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The moveset with all its alternatives
    pub moveset: Moveset,

    /// Representative set derived from `moveset`
    pub set: ResolvedSet,
}

/// Analysis as stored in `analyses/<format>.json`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawAnalysis {
    #[serde(default)]
    pub overview: Option<String>,

    #[serde(default)]
    pub comments: Option<String>,

    /// Sets keyed by name, in authored order
    #[serde(default)]
    pub sets: serde_json::Map<String, serde_json::Value>,

    #[serde(default)]
    pub credits: Option<Credits>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credits {
    #[serde(default)]
    pub teams: Vec<CreditTeam>,

    #[serde(default)]
    pub written_by: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditTeam {
    pub name: String,

    #[serde(default)]
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub user_id: u64,
    pub username: String,
}

/// Usage statistics for one species in one format.
///
/// Every map goes from a name to the fraction of teams using it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead: Option<Usage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,

    /// Raw number of teams the species appeared on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viability: Option<Vec<u32>>,

    #[serde(default)]
    pub abilities: HashMap<String, f64>,

    #[serde(default)]
    pub items: HashMap<String, f64>,

    #[serde(default)]
    pub moves: HashMap<String, f64>,

    #[serde(default)]
    pub spreads: HashMap<String, f64>,

    #[serde(default)]
    pub teammates: HashMap<String, f64>,

    /// Checks and counters: name -> [score, KO/switch fraction, deviation]
    #[serde(default)]
    pub counters: HashMap<String, Vec<f64>>,

    #[serde(default)]
    pub tera_types: HashMap<String, f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub raw: f64,

    #[serde(default)]
    pub real: Option<f64>,

    #[serde(default)]
    pub weighted: Option<f64>,
}
