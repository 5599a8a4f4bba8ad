// ---------------------------------------------------------------------------
// AssetLoadError: the one runtime failure class of the showcase
// ---------------------------------------------------------------------------

use std::fmt;

use crate::assets::ModelSlot;

/// A model or texture that could not be fetched or decoded.
///
/// Failures are logged and the dependent visual never appears; nothing is
/// retried.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetLoadError {
    /// A glTF scene for a model slot failed to load.
    Model {
        slot: ModelSlot,
        path: String,
        reason: String,
    },
    /// A backdrop or particle texture failed to load.
    Texture { path: String, reason: String },
}

impl AssetLoadError {
    pub fn path(&self) -> &str {
        match self {
            AssetLoadError::Model { path, .. } | AssetLoadError::Texture { path, .. } => path,
        }
    }
}

impl fmt::Display for AssetLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetLoadError::Model { slot, path, reason } => {
                write!(f, "Failed to load {slot} model from {path}: {reason}")
            }
            AssetLoadError::Texture { path, reason } => {
                write!(f, "Failed to load texture {path}: {reason}")
            }
        }
    }
}

impl std::error::Error for AssetLoadError {}
