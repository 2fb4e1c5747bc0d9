//! Request Dispatch
//!
//! Routes a tagged request to a facet's get/set primitives. Shared by
//! all four facet domains; nothing here knows which facet it serves.

use domlens_dom::Element;

use crate::error::AccessError;
use crate::facet::Facet;
use crate::request::{AccessOutcome, AccessRequest, KeyedValues};

/// Perform one request against an element through the given facet.
///
/// GetOne invokes `get` once and returns the value directly; GetMany
/// invokes `get` per key and returns the values keyed in request
/// order; SetOne/SetMany invoke `set` once per pair. A failing `set`
/// inside SetMany stops the sequence; pairs already written stay
/// applied.
pub fn dispatch<F: Facet>(
    facet: &F,
    element: &mut Element,
    request: AccessRequest,
) -> Result<AccessOutcome, AccessError> {
    tracing::trace!(?request, "dispatch");

    match request {
        AccessRequest::GetOne(key) => Ok(AccessOutcome::One(facet.get(element, &key))),
        AccessRequest::GetMany(keys) => {
            let mut values = KeyedValues::new();
            for key in keys {
                let value = facet.get(element, &key);
                values.insert(key, value);
            }
            Ok(AccessOutcome::Many(values))
        }
        AccessRequest::SetOne(key, value) => {
            facet.set(element, &key, value)?;
            Ok(AccessOutcome::Done)
        }
        AccessRequest::SetMany(pairs) => {
            for (key, value) in pairs {
                facet.set(element, &key, value)?;
            }
            Ok(AccessOutcome::Done)
        }
    }
}
