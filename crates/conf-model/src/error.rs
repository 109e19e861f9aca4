//! Error types for conf-model

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning raw text into a flat mapping.
///
/// Models never propagate these: [`crate::RawModel`] records them as
/// diagnostics and falls back to an empty mapping.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Expected a JSON object at the top level, found {found}")]
    NotAnObject { found: &'static str },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
