//! Element
//!
//! A single element: tag name, attributes, typed properties, inline
//! style, and cascade results. Also exposes the dataset view over
//! data-* attributes (DOMStringMap semantics: camelCase keys on the
//! script side, data-kebab-case attribute names underneath).

use std::collections::HashMap;

use crate::{NamedNodeMap, StyleDeclarations, Value};

/// An element owned by the caller for the duration of accessor calls
#[derive(Debug, Clone, Default)]
pub struct Element {
    tag_name: String,
    attributes: NamedNodeMap,
    properties: HashMap<String, Value>,
    inline_style: StyleDeclarations,
    cascaded: StyleDeclarations,
    pseudo_cascaded: HashMap<String, StyleDeclarations>,
}

impl Element {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Default::default()
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    // --- attributes ---

    /// Get an attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// Set an attribute
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        tracing::trace!(tag = %self.tag_name, name, value, "set attribute");
        self.attributes.set(name, value);
    }

    /// Remove an attribute
    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    pub fn attributes(&self) -> &NamedNodeMap {
        &self.attributes
    }

    // --- properties ---

    /// Get a script-side property; the value keeps the type it was
    /// written with.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Set a script-side property
    pub fn set_property(&mut self, name: &str, value: Value) {
        self.properties.insert(name.to_string(), value);
    }

    // --- style ---

    /// Inline style declarations
    pub fn inline_style(&self) -> &StyleDeclarations {
        &self.inline_style
    }

    /// Set one inline style declaration (kebab-case property name)
    pub fn set_inline_style(&mut self, property: &str, value: &str) {
        self.inline_style.set(property, value);
        // Mirror into the style attribute so attribute reads stay coherent
        self.attributes.set("style", &self.inline_style.css_text());
    }

    /// Record a cascade result for this element or one of its
    /// pseudo-elements, as a style resolver would after matching rules.
    pub fn apply_cascaded(&mut self, pseudo: Option<&str>, property: &str, value: &str) {
        match pseudo {
            None => self.cascaded.set(property, value),
            Some(p) => self
                .pseudo_cascaded
                .entry(normalize_pseudo(p))
                .or_default()
                .set(property, value),
        }
    }

    /// Computed style for a property (kebab-case).
    ///
    /// Base element: inline declarations win over the cascade result.
    /// Pseudo-element: its cascade block only; pseudo-elements carry no
    /// inline style.
    pub fn computed_style(&self, property: &str, pseudo: Option<&str>) -> Option<&str> {
        match pseudo {
            None => self
                .inline_style
                .get(property)
                .or_else(|| self.cascaded.get(property)),
            Some(p) => self
                .pseudo_cascaded
                .get(&normalize_pseudo(p))
                .and_then(|block| block.get(property)),
        }
    }

    // --- dataset ---

    /// Read a dataset entry by camelCase key
    pub fn dataset_get(&self, key: &str) -> Option<&str> {
        self.attributes.get(&dataset_attr_name(key))
    }

    /// Write a dataset entry by camelCase key
    pub fn dataset_set(&mut self, key: &str, value: &str) {
        let name = dataset_attr_name(key);
        tracing::trace!(tag = %self.tag_name, %name, value, "set dataset entry");
        self.attributes.set(&name, value);
    }

    /// All dataset keys in camelCase, in attribute order
    pub fn dataset_keys(&self) -> Vec<String> {
        self.attributes
            .iter()
            .filter_map(|a| a.name.strip_prefix("data-"))
            .map(camelize)
            .collect()
    }
}

/// Attribute name backing a camelCase dataset key
fn dataset_attr_name(key: &str) -> String {
    let mut name = String::with_capacity(key.len() + 8);
    name.push_str("data-");
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            name.push('-');
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }
    name
}

fn camelize(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = false;
    for c in s.chars() {
        if c == '-' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Strip leading colons so "after", ":after" and "::after" all select
/// the same pseudo-element block.
fn normalize_pseudo(pseudo: &str) -> String {
    pseudo.trim_start_matches(':').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_round_trip() {
        let mut el = Element::new("div");
        el.set_attribute("id", "main");

        assert_eq!(el.attribute("id"), Some("main"));
        assert_eq!(el.attribute("class"), None);
    }

    #[test]
    fn test_property_keeps_type() {
        let mut el = Element::new("input");
        el.set_property("tabIndex", Value::from(3i64));

        assert_eq!(el.property("tabIndex"), Some(&Value::Num(3.0)));
    }

    #[test]
    fn test_inline_style_mirrors_attribute() {
        let mut el = Element::new("div");
        el.set_inline_style("color", "red");

        assert_eq!(el.inline_style().get("color"), Some("red"));
        assert_eq!(el.attribute("style"), Some("color: red;"));
    }

    #[test]
    fn test_computed_prefers_inline_over_cascade() {
        let mut el = Element::new("div");
        el.apply_cascaded(None, "color", "blue");
        assert_eq!(el.computed_style("color", None), Some("blue"));

        el.set_inline_style("color", "red");
        assert_eq!(el.computed_style("color", None), Some("red"));
    }

    #[test]
    fn test_pseudo_element_block_is_separate() {
        let mut el = Element::new("div");
        el.apply_cascaded(Some("::after"), "width", "16px");
        el.set_inline_style("width", "100px");

        assert_eq!(el.computed_style("width", Some("after")), Some("16px"));
        assert_eq!(el.computed_style("width", None), Some("100px"));
    }

    #[test]
    fn test_dataset_view_over_attributes() {
        let mut el = Element::new("div");
        el.dataset_set("userId", "123");

        assert_eq!(el.attribute("data-user-id"), Some("123"));
        assert_eq!(el.dataset_get("userId"), Some("123"));

        el.set_attribute("data-first-name", "Ada");
        assert_eq!(el.dataset_get("firstName"), Some("Ada"));
        assert_eq!(el.dataset_keys(), vec!["userId", "firstName"]);
    }
}
