//! domlens DOM - Element model
//!
//! In-memory element representation: attributes, typed properties,
//! inline and cascaded styles, and a dataset view over data-* attributes.

mod attributes;
mod element;
mod style;
mod value;

pub use attributes::{Attr, NamedNodeMap};
pub use element::Element;
pub use style::StyleDeclarations;
pub use value::Value;
