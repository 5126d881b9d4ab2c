// src/specs/fields.rs
//! Field vocabulary of the startlist table and the projection validator.
//!
//! The vocabulary is closed: `Field` has one variant per output column, and its
//! `Ord` is the canonical column order. Callers name fields as strings; they are
//! checked here before any HTML is touched.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, ScrapeError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    RiderName,
    RiderUrl,
    TeamName,
    TeamUrl,
    Nationality,
    RiderNumber,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::RiderName,
        Field::RiderUrl,
        Field::TeamName,
        Field::TeamUrl,
        Field::Nationality,
        Field::RiderNumber,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::RiderName => "rider_name",
            Field::RiderUrl => "rider_url",
            Field::TeamName => "team_name",
            Field::TeamUrl => "team_url",
            Field::Nationality => "nationality",
            Field::RiderNumber => "rider_number",
        }
    }

    /// Columns read from a rider's own list item (as opposed to the team header
    /// or the printed number).
    pub fn is_rider_level(self) -> bool {
        matches!(self, Field::RiderName | Field::RiderUrl | Field::Nationality)
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| s!(s))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effective projection: deduplicated, iterated in canonical order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSet(BTreeSet<Field>);

impl FieldSet {
    pub fn all() -> Self {
        Self(Field::ALL.into_iter().collect())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Names in canonical order, e.g. for a header row.
    pub fn names(&self) -> Vec<String> {
        self.iter().map(|f| s!(f.as_str())).collect()
    }

    pub fn wants_rider_level(&self) -> bool {
        self.iter().any(Field::is_rider_level)
    }
}

impl FromIterator<Field> for FieldSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Turn caller-supplied names into the effective field set.
///
/// - empty `requested` → every `supported` field
/// - any name outside `supported` → `UnsupportedField` listing all offenders once,
///   in the order they were first given
/// - duplicates collapse; order follows `Field`'s canonical order, not the caller's
pub fn validate_fields<S: AsRef<str>>(requested: &[S], supported: &[Field]) -> Result<FieldSet> {
    if requested.is_empty() {
        return Ok(supported.iter().copied().collect());
    }

    let mut picked = BTreeSet::new();
    let mut bad: Vec<String> = Vec::new();
    for name in requested {
        let name = name.as_ref().trim();
        match name.parse::<Field>() {
            Ok(f) if supported.contains(&f) => {
                picked.insert(f);
            }
            _ => {
                if !bad.iter().any(|b| b == name) {
                    bad.push(s!(name));
                }
            }
        }
    }

    if !bad.is_empty() {
        loge!("Rejected field request: {}", bad.join(", "));
        return Err(ScrapeError::UnsupportedField(bad));
    }
    Ok(FieldSet(picked))
}
