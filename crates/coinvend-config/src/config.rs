//! # Machine Configuration
//!
//! Start-up configuration for one vending machine.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     COINVEND_DENOMINATIONS=5,10,25                                     │
//! │     COINVEND_LOG=debug                                                 │
//! │     COINVEND_LOG_JSON=true                                             │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/coinvend/machine.toml (Linux)                            │
//! │     ~/Library/Application Support/com.coinvend.coinvend/ (macOS)       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Standard denominations, empty bank, empty slots                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # machine.toml
//! [bank]
//! denominations = [1, 2, 5, 10, 20, 50, 100, 200]
//!
//! [[bank.float]]
//! denomination = 10
//! count = 20
//!
//! [[slots]]
//! location = 0
//! product_id = 1
//! name = "Coke"
//! price = 120
//! quantity = 5
//!
//! [logging]
//! filter = "info,coinvend_core=debug"
//! json = false
//! ```

use std::collections::BTreeSet;
use std::path::PathBuf;

use coinvend_core::validation::{validate_denominations, validate_product_name};
use coinvend_core::{Money, VendingError, VendingMachine, DEFAULT_DENOMINATIONS, SLOT_COUNT};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};

// =============================================================================
// Bank Configuration
// =============================================================================

/// Coins the machine accepts and the float it starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankConfig {
    /// Accepted coin values in smallest currency units.
    #[serde(default = "default_denominations")]
    pub denominations: Vec<u32>,

    /// Coins loaded into the bank before the first customer.
    #[serde(default)]
    pub float: Vec<FloatEntry>,
}

fn default_denominations() -> Vec<u32> {
    DEFAULT_DENOMINATIONS.to_vec()
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            denominations: default_denominations(),
            float: Vec::new(),
        }
    }
}

/// A stack of coins of one denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatEntry {
    pub denomination: u32,
    pub count: u32,
}

// =============================================================================
// Slot Configuration
// =============================================================================

/// One planogram entry: which product goes where, and how many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfig {
    pub location: usize,
    pub product_id: u32,
    pub name: String,
    /// Price in smallest currency units.
    pub price: u64,
    pub quantity: u32,
}

// =============================================================================
// Logging Configuration
// =============================================================================

/// Tracing subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    "info,coinvend_core=debug".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

// =============================================================================
// Main Machine Configuration
// =============================================================================

/// Complete machine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Coin bank settings.
    #[serde(default)]
    pub bank: BankConfig,

    /// Initial planogram.
    #[serde(default)]
    pub slots: Vec<SlotConfig>,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MachineConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (machine.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Same as [`MachineConfig::load`], reading overrides from `lookup`
    /// instead of the process environment.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading machine config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides_from(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load machine config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(ConfigError::NoConfigPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Machine config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_denominations(&self.bank.denominations).map_err(VendingError::from)?;

        for entry in &self.bank.float {
            if !self.bank.denominations.contains(&entry.denomination) {
                return Err(ConfigError::Invalid(format!(
                    "float denomination {} is not an accepted coin",
                    entry.denomination
                )));
            }
        }

        let mut locations = BTreeSet::new();
        for slot in &self.slots {
            if slot.location >= SLOT_COUNT {
                return Err(ConfigError::Invalid(format!(
                    "slot location {} is out of range (0-{})",
                    slot.location,
                    SLOT_COUNT - 1
                )));
            }
            if !locations.insert(slot.location) {
                return Err(ConfigError::Invalid(format!(
                    "slot location {} is configured twice",
                    slot.location
                )));
            }
            if slot.quantity == 0 {
                return Err(ConfigError::Invalid(format!(
                    "slot {} quantity must be greater than 0",
                    slot.location
                )));
            }
            validate_product_name(&slot.name).map_err(VendingError::from)?;
        }

        Ok(())
    }

    /// Applies overrides from any key lookup (the process environment in
    /// production).
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("COINVEND_DENOMINATIONS") {
            let parsed: Result<Vec<u32>, _> =
                raw.split(',').map(|s| s.trim().parse::<u32>()).collect();
            match parsed {
                Ok(denominations) => {
                    debug!(?denominations, "Overriding denominations from environment");
                    self.bank.denominations = denominations;
                }
                Err(_) => warn!(value = %raw, "Ignoring malformed COINVEND_DENOMINATIONS"),
            }
        }

        if let Some(filter) = lookup("COINVEND_LOG") {
            self.logging.filter = filter;
        }

        if let Some(json) = lookup("COINVEND_LOG_JSON") {
            match json.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.logging.json = true,
                "0" | "false" | "no" => self.logging.json = false,
                _ => warn!(value = %json, "Unknown COINVEND_LOG_JSON value"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "coinvend", "coinvend")
            .map(|dirs| dirs.config_dir().join("machine.toml"))
    }

    // =========================================================================
    // Machine Setup
    // =========================================================================

    /// Builds a machine with the configured coins, float, and planogram.
    ///
    /// ## Example
    /// ```rust
    /// use coinvend_config::MachineConfig;
    ///
    /// let config = MachineConfig::from_toml_str(r#"
    ///     [[slots]]
    ///     location = 2
    ///     product_id = 1
    ///     name = "Coke"
    ///     price = 120
    ///     quantity = 5
    /// "#).unwrap();
    ///
    /// let machine = config.build_machine().unwrap();
    /// assert_eq!(machine.slot(2).unwrap().product().unwrap().quantity(), 5);
    /// ```
    pub fn build_machine(&self) -> ConfigResult<VendingMachine> {
        self.validate()?;

        let mut machine = VendingMachine::with_denominations(&self.bank.denominations)?;

        for entry in &self.bank.float {
            machine.add_coins_to_bank(entry.denomination, entry.count)?;
        }

        for slot in &self.slots {
            machine.add_product(
                slot.location,
                slot.product_id,
                &slot.name,
                Money::from_units(slot.price),
                slot.quantity,
            )?;
        }

        info!(
            denominations = self.bank.denominations.len(),
            float = machine.bank().total().units(),
            stocked_slots = self.slots.len(),
            "Vending machine ready"
        );
        Ok(machine)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
