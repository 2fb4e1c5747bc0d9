//! Access Requests
//!
//! The argument shapes an accessor accepts, as a tagged union: read
//! one key, read a list of keys, write one pair, or write a map of
//! pairs. Unsupported shapes are unrepresentable by construction.

use std::collections::HashMap;

use domlens_dom::Value;

/// One accessor invocation
#[derive(Debug, Clone, PartialEq)]
pub enum AccessRequest {
    /// Read one key; the outcome carries the value directly
    GetOne(String),
    /// Read every listed key; the outcome maps keys to values in list order
    GetMany(Vec<String>),
    /// Write one key/value pair
    SetOne(String, Value),
    /// Write every pair, in order
    SetMany(Vec<(String, Value)>),
}

impl AccessRequest {
    /// Read one key
    pub fn get(key: impl Into<String>) -> Self {
        Self::GetOne(key.into())
    }

    /// Read a list of keys
    pub fn get_many<S, I>(keys: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        Self::GetMany(keys.into_iter().map(Into::into).collect())
    }

    /// Write one key/value pair
    pub fn set(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::SetOne(key.into(), value.into())
    }

    /// Write a map of key/value pairs
    pub fn set_many<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::SetMany(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Result of one dispatched request
#[derive(Debug, Clone, PartialEq)]
pub enum AccessOutcome {
    /// GetOne result; `None` when the key has no value
    One(Option<Value>),
    /// GetMany result
    Many(KeyedValues),
    /// Writes produce no value
    Done,
}

impl AccessOutcome {
    /// The single value, for a GetOne outcome
    pub fn into_one(self) -> Option<Value> {
        match self {
            Self::One(value) => value,
            _ => None,
        }
    }

    /// The keyed values, for a GetMany outcome
    pub fn into_many(self) -> Option<KeyedValues> {
        match self {
            Self::Many(values) => Some(values),
            _ => None,
        }
    }
}

/// Insertion-ordered key → value map returned by GetMany
///
/// Keys appear in the order they were requested; a key that had no
/// value is present with `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyedValues {
    entries: Vec<(String, Option<Value>)>,
    by_key: HashMap<String, usize>,
}

impl KeyedValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, replacing in place if the key repeats
    pub fn insert(&mut self, key: impl Into<String>, value: Option<Value>) {
        let key = key.into();
        if let Some(&index) = self.by_key.get(&key) {
            self.entries[index].1 = value;
        } else {
            let index = self.entries.len();
            self.by_key.insert(key.clone(), index);
            self.entries.push((key, value));
        }
    }

    /// Value for a key; `None` for an absent key or a valueless entry
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.by_key
            .get(key)
            .and_then(|&i| self.entries[i].1.as_ref())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Keys in request order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in request order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
