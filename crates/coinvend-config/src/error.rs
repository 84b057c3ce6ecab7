//! # Config Error Types
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Config Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │   File          │  │   Content       │  │   Machine Setup         │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Io             │  │  Parse          │  │  Core (VendingError)    │ │
//! │  │  NoConfigPath   │  │  Serialize      │  │                         │ │
//! │  │                 │  │  Invalid        │  │  Logging                │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use coinvend_core::VendingError;
use thiserror::Error;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read or write config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The file parsed but describes an impossible machine.
    #[error("Invalid machine configuration: {0}")]
    Invalid(String),

    #[error("No config path available")]
    NoConfigPath,

    /// The core rejected a step while seeding the machine.
    #[error("Machine setup failed: {0}")]
    Core(#[from] VendingError),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
