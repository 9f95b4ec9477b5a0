// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;
use std::ops::Index;

use chrono::NaiveDate;

/// A decoded field value.
///
/// Every field is decoded as [`Value::Text`]. The other variants are only
/// produced by enrichment.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Value {
    Text(String),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
    /// A lenient conversion that found nothing usable.
    Null,
}

impl Value {
    /// Returns the text if this is a [`Value::Text`].
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Date(d) => write!(f, "{d}"),
            Self::Null => Ok(()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Option<NaiveDate>> for Value {
    fn from(d: Option<NaiveDate>) -> Self {
        d.map_or(Self::Null, Self::Date)
    }
}

/// A parsed line as a mapping from field name to value.
///
/// Keys are unique and kept in insertion order, which is the layout's column
/// order followed by any derived keys.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Record {
    fields: Vec<(&'static str, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Returns the value of the field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find_map(|(key, value)| (*key == name).then_some(value))
    }

    /// Returns the field's text, or `None` if absent or not text.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    pub fn get_date(&self, name: &str) -> Option<NaiveDate> {
        self.get(name).and_then(Value::as_date)
    }

    /// Returns the field's text only if it is present and not empty.
    pub fn non_empty_str(&self, name: &str) -> Option<&str> {
        self.get_str(name).filter(|s| !s.is_empty())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Inserts the value, replacing and returning the previous value if the
    /// key is already present. A replaced key keeps its position.
    pub fn insert(&mut self, name: &'static str, value: Value) -> Option<Value> {
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, old)) => Some(std::mem::replace(old, value)),
            None => {
                self.fields.push((name, value));
                None
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> + '_ {
        self.fields.iter().map(|(key, value)| (*key, value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(key, _)| *key)
    }
}

impl Index<&str> for Record {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if the field is not present.
    fn index(&self, name: &str) -> &Value {
        match self.get(name) {
            Some(value) => value,
            None => panic!("record has no field \"{name}\""),
        }
    }
}

impl IntoIterator for Record {
    type Item = (&'static str, Value);
    type IntoIter = std::vec::IntoIter<(&'static str, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl FromIterator<(&'static str, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (&'static str, Value)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let mut record = Record::new();
        assert_eq!(record.insert("id", "SUNOL".into()), None);
        assert_eq!(record.insert("lat", Value::Float(37.6)), None);
        assert_eq!(
            record.insert("id", "00AK".into()),
            Some(Value::Text("SUNOL".to_string()))
        );

        assert_eq!(record.len(), 2);
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["id", "lat"]);
        assert_eq!(record.get_str("id"), Some("00AK"));
    }

    #[test]
    fn typed_getters_ignore_other_variants() {
        let record: Record = [
            ("control_tower", Value::from("Y")),
            ("has_control_tower", Value::from(true)),
            ("activated", Value::from(None::<NaiveDate>)),
        ]
        .into_iter()
        .collect();

        assert_eq!(record.get_bool("has_control_tower"), Some(true));
        assert_eq!(record.get_bool("control_tower"), None);
        assert_eq!(record.get_str("has_control_tower"), None);
        assert!(record["activated"].is_null());
        assert_eq!(record.get_date("activated"), None);
    }

    #[test]
    fn non_empty_str_skips_blank_fields() {
        let record: Record = [("latitude", Value::from("")), ("id", Value::from("LWC"))]
            .into_iter()
            .collect();

        assert_eq!(record.non_empty_str("latitude"), None);
        assert_eq!(record.non_empty_str("missing"), None);
        assert_eq!(record.non_empty_str("id"), Some("LWC"));
    }

    #[test]
    #[should_panic(expected = "record has no field \"lat\"")]
    fn index_panics_on_missing_field() {
        let record = Record::new();
        let _ = &record["lat"];
    }

    #[test]
    fn displays_values() {
        let date = NaiveDate::from_ymd_opt(2013, 10, 17).expect("date should be valid");
        assert_eq!(Value::from("KLWC").to_string(), "KLWC");
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::Date(date).to_string(), "2013-10-17");
        assert_eq!(Value::Null.to_string(), "");
    }
}
