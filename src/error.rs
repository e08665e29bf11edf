//! Asset loading errors.
//!
//! All variants are fatal at startup: the game cannot run without its
//! background, fallback sprite, or animation directories. `main` logs the
//! error and exits with code 1.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading assets at startup.
#[derive(Debug, Error)]
pub enum AssetError {
    /// A required file or directory does not exist.
    #[error("asset not found: {0}")]
    NotFound(PathBuf),

    /// A directory scan failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raylib refused to load an image file as a texture.
    #[error("failed to load texture {path}: {reason}")]
    Texture { path: PathBuf, reason: String },
}
