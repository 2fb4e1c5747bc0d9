//! Accessor errors

/// Accessor error
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    /// A dataset object value could not be serialized to JSON.
    ///
    /// The write is not applied; the previous entry, if any, is kept.
    #[error("cannot serialize dataset value for key `{key}`")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
