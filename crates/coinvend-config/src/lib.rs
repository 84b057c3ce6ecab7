//! # coinvend-config: Machine Configuration
//!
//! Loads `machine.toml`, applies environment overrides, installs logging,
//! and builds a ready-to-trade [`coinvend_core::VendingMachine`].
//!
//! ## Start-up Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Host Start-up                                     │
//! │                                                                         │
//! │  1. MachineConfig::load(path) ──► defaults ◄ file ◄ env                │
//! │  2. init_tracing(&config.logging)                                      │
//! │  3. config.build_machine() ──► denominations, float, planogram         │
//! │  4. Host drives the machine from hardware events                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ```rust,no_run
//! use coinvend_config::{init_tracing, MachineConfig};
//!
//! let config = MachineConfig::load(None).unwrap();
//! init_tracing(&config.logging).unwrap();
//! let machine = config.build_machine().unwrap();
//! ```

pub mod config;
pub mod error;
pub mod logging;

pub use config::{BankConfig, FloatEntry, LoggingConfig, MachineConfig, SlotConfig};
pub use error::{ConfigError, ConfigResult};
pub use logging::init_tracing;
