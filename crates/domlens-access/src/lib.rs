//! domlens Access - Unified element facet accessors
//!
//! One request type, one dispatcher, four facets. Reads and writes on
//! an element's attributes, properties, styles, and dataset all go
//! through the same tagged-request dispatch.

pub mod case;
mod dispatch;
mod error;
mod facet;
mod request;

pub use dispatch::dispatch;
pub use error::AccessError;
pub use facet::{AttributeFacet, DatasetFacet, Facet, PropertyFacet, StyleFacet};
pub use request::{AccessOutcome, AccessRequest, KeyedValues};

use domlens_dom::Element;

/// Access the element's attributes
pub fn attr(element: &mut Element, request: AccessRequest) -> Result<AccessOutcome, AccessError> {
    dispatch(&AttributeFacet, element, request)
}

/// Access the element's script-side properties
pub fn prop(element: &mut Element, request: AccessRequest) -> Result<AccessOutcome, AccessError> {
    dispatch(&PropertyFacet, element, request)
}

/// Access the element's styles: computed on read, inline on write
pub fn style(element: &mut Element, request: AccessRequest) -> Result<AccessOutcome, AccessError> {
    dispatch(&StyleFacet, element, request)
}

/// Access the element's dataset
pub fn data(element: &mut Element, request: AccessRequest) -> Result<AccessOutcome, AccessError> {
    dispatch(&DatasetFacet, element, request)
}
