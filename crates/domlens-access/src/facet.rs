//! Facet Domains
//!
//! The four get/set primitive pairs the dispatcher routes to:
//! attributes, properties, styles, dataset.

use domlens_dom::{Element, Value};

use crate::case::{to_camel, to_kebab};
use crate::error::AccessError;

/// One element facet: a get/set pair over a specific kind of element
/// state. Implementations translate keys to the facet's native form;
/// the dispatcher stays key-agnostic.
pub trait Facet {
    /// Read the current value of `key`
    fn get(&self, element: &Element, key: &str) -> Option<Value>;

    /// Write `value` to `key`
    fn set(&self, element: &mut Element, key: &str, value: Value) -> Result<(), AccessError>;
}

/// Attribute facet: raw attribute names, string values
pub struct AttributeFacet;

impl Facet for AttributeFacet {
    fn get(&self, element: &Element, key: &str) -> Option<Value> {
        element.attribute(key).map(Value::from)
    }

    fn set(&self, element: &mut Element, key: &str, value: Value) -> Result<(), AccessError> {
        element.set_attribute(key, &value.as_css_string());
        Ok(())
    }
}

/// Property facet: script-side properties, values keep their type
pub struct PropertyFacet;

impl Facet for PropertyFacet {
    fn get(&self, element: &Element, key: &str) -> Option<Value> {
        element.property(key).cloned()
    }

    fn set(&self, element: &mut Element, key: &str, value: Value) -> Result<(), AccessError> {
        element.set_property(key, value);
        Ok(())
    }
}

/// Style facet
///
/// A key may carry a pseudo-element suffix after a colon
/// (`"width:after"` reads the computed width of `::after`). The suffix
/// selects reads only; writes strip it and always target the inline
/// style, since pseudo-elements are not writable. The key part is
/// normalized to its kebab-case CSS name, so `"backgroundColor"` and
/// `"background-color"` address the same property.
pub struct StyleFacet;

impl StyleFacet {
    fn split_key(key: &str) -> (String, Option<&str>) {
        match key.split_once(':') {
            Some((prop, pseudo)) if !pseudo.is_empty() => (to_kebab(prop), Some(pseudo)),
            Some((prop, _)) => (to_kebab(prop), None),
            None => (to_kebab(key), None),
        }
    }
}

impl Facet for StyleFacet {
    fn get(&self, element: &Element, key: &str) -> Option<Value> {
        let (property, pseudo) = Self::split_key(key);
        element.computed_style(&property, pseudo).map(Value::from)
    }

    fn set(&self, element: &mut Element, key: &str, value: Value) -> Result<(), AccessError> {
        let (property, _) = Self::split_key(key);
        element.set_inline_style(&property, &value.as_css_string());
        Ok(())
    }
}

/// Dataset facet
///
/// Keys are normalized to camelCase (`"user-name"` and `"userName"`
/// address the same entry, stored as the `data-user-name` attribute).
/// Object values are serialized to JSON before storage; a
/// serialization failure is reported and the write is not applied.
pub struct DatasetFacet;

impl Facet for DatasetFacet {
    fn get(&self, element: &Element, key: &str) -> Option<Value> {
        element.dataset_get(&to_camel(key)).map(Value::from)
    }

    fn set(&self, element: &mut Element, key: &str, value: Value) -> Result<(), AccessError> {
        let key = to_camel(key);
        let text = match value {
            Value::Json(v) if v.is_object() => {
                serde_json::to_string(&v).map_err(|source| AccessError::Serialize {
                    key: key.clone(),
                    source,
                })?
            }
            other => other.as_css_string(),
        };
        element.dataset_set(&key, &text);
        Ok(())
    }
}
