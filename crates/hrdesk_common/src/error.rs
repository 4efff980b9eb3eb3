//! Error types for HR Desk.
//!
//! Missing policies, employees and templates are not errors; they resolve to
//! fixed fallback replies. These variants cover real failures only.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HrDeskError {
    #[error("Failed to read config {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Cannot determine home directory")]
    NoHome,
}

pub type Result<T> = std::result::Result<T, HrDeskError>;
