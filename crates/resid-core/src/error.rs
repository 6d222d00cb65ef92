//! Errors raised by the narrow entry points that can fail.
//!
//! Classification itself never fails: an unrecognised source is reported as a
//! descriptor with issues, not as an error.

use thiserror::Error;

use crate::kind::ResourceKind;

/// Longest prefix of a source shown in error messages.
const PREVIEW_CHARS: usize = 40;

#[derive(Debug, Error)]
pub enum ResidError {
    /// A specific kind was demanded and the strict check failed.
    #[error("source '{preview}' is not supported as {kind}")]
    UnsupportedSource { preview: String, kind: ResourceKind },

    /// A URL transformation got a string it cannot split into valid parts.
    #[error("'{0}' is not a valid url")]
    InvalidUrl(String),
}

impl ResidError {
    pub(crate) fn unsupported(source: &str, kind: ResourceKind) -> Self {
        ResidError::UnsupportedSource {
            preview: source.chars().take(PREVIEW_CHARS).collect(),
            kind,
        }
    }
}
