//! Hidden Power type vs. IV resolution
//!
//! A set carrying `Hidden Power <Type>` needs IVs (or, from Gen 7 on, an
//! explicit type) that actually produce that type. How the type is derived
//! differs by generation:
//!
//! - Gens 1-2 read it from the Attack and Defense DVs.
//! - Gens 3-6 read it from the parity of all six IVs. Sets that miss get the
//!   conventional IVs for the type.
//! - Gen 7+ can set it directly through Hyper Training, at level 100.

use pkstrat_dex::{Generation, StatId, StatsTable, Type};

use crate::error::{Error, Result};
use crate::set::ResolvedSet;

/// Hidden Power types, indexed by the value the IV formulas produce
const HIDDEN_POWER_TYPES: [Type; 16] = [
    Type::Fighting,
    Type::Flying,
    Type::Poison,
    Type::Ground,
    Type::Rock,
    Type::Bug,
    Type::Ghost,
    Type::Steel,
    Type::Fire,
    Type::Water,
    Type::Grass,
    Type::Electric,
    Type::Psychic,
    Type::Ice,
    Type::Dragon,
    Type::Dark,
];

/// Bit order of the parity formula (hp is the lowest bit)
const PARITY_ORDER: [StatId; 6] = [
    StatId::Hp,
    StatId::Atk,
    StatId::Def,
    StatId::Spe,
    StatId::Spa,
    StatId::Spd,
];

const MAX_IV: u8 = 31;

/// How a generation derives Hidden Power's type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// DV based (Gens 1-2)
    Legacy,
    /// IV parity based (Gens 3-6)
    Modern,
    /// Type set directly (Gen 7+)
    Explicit,
}

impl Regime {
    pub fn for_generation(generation: u8) -> Self {
        match generation {
            0..=2 => Regime::Legacy,
            3..=6 => Regime::Modern,
            _ => Regime::Explicit,
        }
    }
}

/// The type asked for by a `Hidden Power <Type>` move in `moves`, if any
pub fn requested_type(moves: &[String]) -> Result<Option<Type>> {
    for name in moves {
        let Some(suffix) = name.strip_prefix("Hidden Power ") else {
            continue;
        };

        let type_name = suffix.trim_matches(|c: char| c == '[' || c == ']' || c == ' ');
        let requested = Type::parse(type_name)
            .filter(|t| type_index(*t).is_some())
            .ok_or_else(|| Error::HiddenPower {
                move_name: name.clone(),
            })?;
        return Ok(Some(requested));
    }

    Ok(None)
}

/// Make a set's IVs (or explicit type) agree with its Hidden Power move
pub fn resolve_hidden_power(generation: &dyn Generation, mut set: ResolvedSet) -> Result<ResolvedSet> {
    let Some(requested) = requested_type(&set.moves)? else {
        return Ok(set);
    };

    let mut regime = Regime::for_generation(generation.num());
    // Hyper Training needs level 100
    if regime == Regime::Explicit && set.level.is_some_and(|level| level < 100) {
        regime = Regime::Modern;
    }

    let ivs = set.ivs.take().unwrap_or_default();
    let ivs = match regime {
        Regime::Legacy => legacy_ivs(requested, ivs),
        Regime::Modern => modern_ivs(requested, ivs),
        Regime::Explicit => {
            if modern_type(&ivs) != requested {
                set.hp_type = Some(requested);
            }
            ivs
        }
    };

    tracing::trace!(
        generation = generation.num(),
        regime = ?regime,
        hp_type = %requested,
        ivs = ?ivs,
        "Resolved Hidden Power"
    );

    set.ivs = (!ivs.is_empty()).then_some(ivs);
    Ok(set)
}

fn type_index(t: Type) -> Option<u8> {
    HIDDEN_POWER_TYPES
        .iter()
        .position(|candidate| *candidate == t)
        .map(|index| index as u8)
}

/// Canonical DVs for the type: the highest Attack/Defense DVs with the right
/// low bits, and the HP DV those imply. Every touched stat is overwritten.
fn legacy_ivs(requested: Type, mut ivs: StatsTable) -> StatsTable {
    let Some(index) = type_index(requested) else {
        return ivs;
    };

    let atk = 12 + index / 4;
    let def = 12 + index % 4;
    let spe = ivs.get_or(StatId::Spe, MAX_IV) / 2;
    let spc = ivs.get_or(StatId::Spa, MAX_IV) / 2;
    let hp = ((atk & 1) << 3) | ((def & 1) << 2) | ((spe & 1) << 1) | (spc & 1);

    for (stat, dv) in [(StatId::Hp, hp), (StatId::Atk, atk), (StatId::Def, def)] {
        let iv = dv * 2 + 1;
        ivs.set(stat, (iv != MAX_IV).then_some(iv));
    }
    ivs
}

/// Keep the IVs if they already give the type. Otherwise lay them over the
/// type's canonical IVs, and fall back to the canonical IVs alone when the
/// given ones still break the parity.
fn modern_ivs(requested: Type, ivs: StatsTable) -> StatsTable {
    if modern_type(&ivs) == requested {
        return ivs;
    }

    let canonical = canonical_ivs(requested);
    let mut merged = canonical.clone();
    for (stat, iv) in ivs.iter() {
        merged.set(stat, Some(iv));
    }

    if modern_type(&merged) == requested {
        merged
    } else {
        canonical
    }
}

/// Conventional IVs for each Hidden Power type: the fewest stats lowered to 30
fn canonical_ivs(requested: Type) -> StatsTable {
    let even: &[StatId] = match requested {
        Type::Bug => &[StatId::Atk, StatId::Def, StatId::Spd],
        Type::Dragon => &[StatId::Atk],
        Type::Electric => &[StatId::Spa],
        Type::Fighting => &[StatId::Def, StatId::Spa, StatId::Spd, StatId::Spe],
        Type::Fire => &[StatId::Atk, StatId::Spa, StatId::Spe],
        Type::Flying => &[StatId::Hp, StatId::Atk, StatId::Def, StatId::Spa, StatId::Spd],
        Type::Ghost => &[StatId::Def, StatId::Spd],
        Type::Grass => &[StatId::Atk, StatId::Spa],
        Type::Ground => &[StatId::Spa, StatId::Spd],
        Type::Ice => &[StatId::Atk, StatId::Def],
        Type::Poison => &[StatId::Def, StatId::Spa, StatId::Spd],
        Type::Psychic => &[StatId::Atk, StatId::Spe],
        Type::Rock => &[StatId::Def, StatId::Spd, StatId::Spe],
        Type::Steel => &[StatId::Spd],
        Type::Water => &[StatId::Atk, StatId::Def, StatId::Spa],
        _ => &[],
    };

    even.iter()
        .fold(StatsTable::new(), |ivs, stat| ivs.with(*stat, MAX_IV - 1))
}

/// Type implied by IV parities, unset IVs counting as 31
fn modern_type(ivs: &StatsTable) -> Type {
    type_for_mask(parity_mask(ivs))
}

fn parity_mask(ivs: &StatsTable) -> u8 {
    PARITY_ORDER
        .iter()
        .enumerate()
        .fold(0, |mask, (bit, stat)| {
            mask | ((ivs.get_or(*stat, MAX_IV) & 1) << bit)
        })
}

fn type_for_mask(mask: u8) -> Type {
    HIDDEN_POWER_TYPES[usize::from(mask) * 15 / 63]
}
