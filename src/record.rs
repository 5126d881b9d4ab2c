// src/record.rs
//
// Output rows of one extraction call.
//
// - RiderSource: everything known about one rider once the page has been read.
//                Layout-specific extractors fill it; fields they can't know stay None.
// - RiderRecord: the projection of a RiderSource onto the caller's FieldSet.
//                Built once, never patched column by column.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::specs::fields::{Field, FieldSet};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(u32),
    Text(String),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<u32> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RiderSource {
    pub rider_name: Option<String>,
    pub rider_url: Option<String>,
    pub team_name: Option<String>,
    pub team_url: Option<String>,
    pub nationality: Option<String>,
    pub rider_number: Option<u32>,
}

impl RiderSource {
    fn value(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::RiderName => self.rider_name.clone().map(FieldValue::Text),
            Field::RiderUrl => self.rider_url.clone().map(FieldValue::Text),
            Field::TeamName => self.team_name.clone().map(FieldValue::Text),
            Field::TeamUrl => self.team_url.clone().map(FieldValue::Text),
            Field::Nationality => self.nationality.clone().map(FieldValue::Text),
            Field::RiderNumber => self.rider_number.map(FieldValue::Number),
        }
    }
}

/// One rider. Keys are exactly the FieldSet it was projected with; values may be null.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RiderRecord(BTreeMap<Field, Option<FieldValue>>);

impl RiderRecord {
    pub fn project(fields: &FieldSet, src: &RiderSource) -> Self {
        Self(fields.iter().map(|f| (f, src.value(f))).collect())
    }

    /// Value of `field`; `None` when null or not projected.
    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.0.get(&field).and_then(Option::as_ref)
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    pub fn number(&self, field: Field) -> Option<u32> {
        self.get(field).and_then(FieldValue::as_number)
    }

    /// Whether `field` is a key of this record (null or not).
    pub fn has(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Cells in canonical field order; null → empty cell.
    pub fn to_row(&self) -> Vec<String> {
        self.0
            .values()
            .map(|v| v.as_ref().map(|v| v.to_string()).unwrap_or_default())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> RiderSource {
        RiderSource {
            rider_name: Some(s!("VAN AERT Wout")),
            rider_url: Some(s!("rider/wout-van-aert")),
            team_name: Some(s!("Jumbo-Visma")),
            team_url: Some(s!("team/jumbo-visma-2021")),
            nationality: Some(s!("BE")),
            rider_number: Some(21),
        }
    }

    #[test]
    fn projection_keeps_only_requested_keys() {
        let fs: FieldSet = [Field::RiderNumber, Field::RiderName].into_iter().collect();
        let rec = RiderRecord::project(&fs, &source());
        assert_eq!(rec.fields().collect::<Vec<_>>(), vec![Field::RiderName, Field::RiderNumber]);
        assert_eq!(rec.text(Field::RiderName), Some("VAN AERT Wout"));
        assert_eq!(rec.number(Field::RiderNumber), Some(21));
        assert!(!rec.has(Field::TeamName));
    }

    #[test]
    fn unknown_values_stay_as_null_keys() {
        let src = RiderSource { rider_name: Some(s!("X")), ..Default::default() };
        let rec = RiderRecord::project(&FieldSet::all(), &src);
        assert_eq!(rec.len(), 6);
        assert!(rec.has(Field::Nationality));
        assert_eq!(rec.get(Field::Nationality), None);
        assert_eq!(rec.to_row(), vec!["X", "", "", "", "", ""]);
    }

    #[test]
    fn serializes_in_canonical_order_with_nulls() {
        let fs: FieldSet = [Field::RiderNumber, Field::TeamName, Field::RiderName].into_iter().collect();
        let src = RiderSource { rider_name: Some(s!("A")), rider_number: Some(3), ..Default::default() };
        let json = serde_json::to_string(&RiderRecord::project(&fs, &src)).unwrap();
        assert_eq!(json, r#"{"rider_name":"A","team_name":null,"rider_number":3}"#);
    }
}
