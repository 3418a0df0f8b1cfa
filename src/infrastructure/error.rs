// Codec error types
use thiserror::Error;

/// Errors raised while converting between the typed model and JSON.
///
/// Unrecognized panel types and query shapes are not errors; the codec
/// reports them as absent values instead.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Invalid JSON syntax, a field of the wrong JSON type, or a structural
    /// violation such as a Y-axes array without exactly two entries.
    #[error("failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {what}: {source}")]
    Encode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl CodecError {
    pub fn decode(what: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { what, source }
    }

    pub fn encode(what: &'static str, source: serde_json::Error) -> Self {
        Self::Encode { what, source }
    }
}
