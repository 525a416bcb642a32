// SPDX-License-Identifier: MIT
//
// Errors surfaced by the tonekit command line.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid name {0:?}: must match ^[a-zA-Z_][a-zA-Z0-9_]*$")]
    InvalidName(String),

    #[error("invalid hex color {0:?}: expected exactly six hex digits")]
    InvalidHex(String),

    #[error(transparent)]
    Color(#[from] tonekit_scheme::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    /// Process exit code: 2 for bad input, 1 for everything else.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidName(_) | Self::InvalidHex(_) | Self::Color(_) => 2,
            Self::Write { .. } | Self::Io(_) | Self::Json(_) => 1,
        }
    }
}
