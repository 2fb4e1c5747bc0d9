//! Style Declarations
//!
//! Ordered (property, value) declaration block. Properties are stored
//! under their kebab-case CSS names.

/// One declaration block: inline style or the cascade result for one
/// (element, pseudo-element) pair.
#[derive(Debug, Clone, Default)]
pub struct StyleDeclarations {
    declarations: Vec<(String, String)>,
}

impl StyleDeclarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a declaration value by kebab-case property name
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(prop, _)| prop == property)
            .map(|(_, value)| value.as_str())
    }

    /// Set a declaration, updating in place if the property is present.
    ///
    /// Setting an empty value removes the declaration, matching
    /// CSSStyleDeclaration behavior.
    pub fn set(&mut self, property: &str, value: &str) {
        if let Some(pos) = self.declarations.iter().position(|(prop, _)| prop == property) {
            if value.is_empty() {
                self.declarations.remove(pos);
            } else {
                self.declarations[pos].1 = value.to_string();
            }
        } else if !value.is_empty() {
            self.declarations.push((property.to_string(), value.to_string()));
        }
    }

    /// Remove a declaration by property name
    pub fn remove(&mut self, property: &str) -> Option<String> {
        let pos = self.declarations.iter().position(|(prop, _)| prop == property)?;
        Some(self.declarations.remove(pos).1)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Iterate declarations in source order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(prop, value)| (prop.as_str(), value.as_str()))
    }

    /// Serialize to a `style` attribute string
    pub fn css_text(&self) -> String {
        self.declarations
            .iter()
            .map(|(prop, value)| format!("{prop}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
