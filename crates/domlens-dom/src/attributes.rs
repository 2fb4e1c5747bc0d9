//! Element Attributes
//!
//! Ordered attribute collection with O(1) name lookup.

use std::collections::HashMap;

/// Named node map (attribute collection)
///
/// Keeps document order so snapshot reads are deterministic.
#[derive(Debug, Clone, Default)]
pub struct NamedNodeMap {
    attributes: Vec<Attr>,
    by_name: HashMap<String, usize>,
}

/// Single attribute
#[derive(Debug, Clone)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl NamedNodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get number of attributes
    pub fn length(&self) -> usize {
        self.attributes.len()
    }

    /// Get attribute by index
    pub fn item(&self, index: usize) -> Option<&Attr> {
        self.attributes.get(index)
    }

    /// Get attribute value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(name)
            .and_then(|&i| self.attributes.get(i))
            .map(|a| a.value.as_str())
    }

    /// Set attribute by name/value, replacing any existing entry in place
    pub fn set(&mut self, name: &str, value: &str) {
        if let Some(&index) = self.by_name.get(name) {
            self.attributes[index].value = value.to_string();
        } else {
            let index = self.attributes.len();
            self.by_name.insert(name.to_string(), index);
            self.attributes.push(Attr::new(name, value));
        }
    }

    /// Remove attribute by name
    pub fn remove(&mut self, name: &str) -> Option<Attr> {
        if let Some(&index) = self.by_name.get(name) {
            self.by_name.remove(name);
            // Fix up indices for entries after the removed one
            for (_, idx) in self.by_name.iter_mut() {
                if *idx > index {
                    *idx -= 1;
                }
            }
            Some(self.attributes.remove(index))
        } else {
            None
        }
    }

    /// Check if attribute exists
    pub fn has(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Get attribute names in document order
    pub fn names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name.as_str()).collect()
    }

    /// Iterate over attributes in document order
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attributes.iter()
    }
}
