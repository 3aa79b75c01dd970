//! Flat key/value records handed to report templates.
//!
//! A record is a derived, transient view of one or more entities. Keys are kept
//! sorted so that projecting the same data twice serializes identically.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Scalar value stored in a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Decimal(Decimal),
    Text(String),
    Date(NaiveDate),
}

impl FieldValue {
    /// Empty text counts as absent; every other value is present.
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.is_empty())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

/// Mapping from field name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, FieldValue>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value unless it is empty text.
    pub fn put(&mut self, key: &str, value: impl Into<FieldValue>) {
        let value = value.into();
        if !value.is_empty() {
            self.0.insert(key.to_string(), value);
        }
    }

    /// Insert a value only when the source is present and non-empty.
    pub fn put_opt<V: Into<FieldValue>>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.put(key, value);
        }
    }

    /// Copy every entry of `other` into `self`, overwriting existing keys.
    pub fn merge(&mut self, other: &Record) {
        for (k, v) in &other.0 {
            self.0.insert(k.clone(), v.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_empty_values_are_skipped() {
        let mut record = Record::new();
        record.put_opt::<&str>("description", None);
        record.put("notes", "");
        record.put_opt("reference", Some(String::new()));
        record.put("hideDiscount", false);
        record.put("qty", Decimal::ZERO);

        assert!(!record.contains_key("description"));
        assert!(!record.contains_key("notes"));
        assert!(!record.contains_key("reference"));
        assert_eq!(record.get("hideDiscount"), Some(&FieldValue::Bool(false)));
        assert_eq!(record.get("qty"), Some(&FieldValue::Decimal(Decimal::ZERO)));
    }

    #[test]
    fn merge_overwrites_existing_keys() {
        let mut base = Record::new();
        base.put("id", 1_i64);
        base.put("name", "line");

        let mut other = Record::new();
        other.put("name", "order");
        other.put("inAti", true);

        base.merge(&other);
        assert_eq!(base.len(), 3);
        assert_eq!(base.get("name").and_then(FieldValue::as_text), Some("order"));
    }

    #[test]
    fn serializes_as_sorted_flat_object() {
        let mut record = Record::new();
        record.put("zeta", 3_i64);
        record.put("alpha", Decimal::new(1050, 2));
        record.put("date", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"alpha":"10.50","date":"2024-03-01","zeta":3}"#
        );
    }
}
