//! Configuration system for the core model.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline constants (reset PC, memory sizes, idle threshold).
//! 2. **Structures:** Hierarchical config for general, monitor and memory settings.
//! 3. **Loading:** JSON parsing from a string or file, with validation.
//!
//! Every field has a default, so `{}` is a valid configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::constants::DEFAULT_IDLE_THRESHOLD;
use crate::common::{SimError, SimResult};

/// Default configuration constants.
mod defaults {
    /// Program counter value while reset is asserted.
    pub const RESET_PC: u32 = 0;

    /// Number of cycles reset is held before release.
    pub const RESET_CYCLES: u32 = 1;

    /// Cycle guard for a run. Matches the length of the reference stimulus loop.
    pub const MAX_CYCLES: u64 = 200;

    /// Instruction store capacity in words.
    pub const IMEM_WORDS: usize = 256;

    /// Data store capacity in words.
    pub const DMEM_WORDS: usize = 256;

    /// Data words shown per cycle in traces.
    pub const DUMP_WORDS: usize = 20;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.monitor.idle_threshold, 5);
/// assert_eq!(config.general.max_cycles, 200);
///
/// let config = Config::from_json(r#"{ "monitor": { "idle_threshold": 3 } }"#).unwrap();
/// assert_eq!(config.monitor.idle_threshold, 3);
/// assert_eq!(config.memory.imem_words, 256);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Termination monitor settings.
    #[serde(default)]
    pub monitor: MonitorConfig,
    /// Instruction and data store sizes.
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Json`] on malformed JSON and
    /// [`SimError::InvalidConfig`] on values the core cannot run with.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks the values that have hard lower bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> SimResult<()> {
        if self.monitor.idle_threshold == 0 {
            return Err(SimError::InvalidConfig(
                "monitor.idle_threshold must be at least 1".into(),
            ));
        }
        if self.memory.imem_words == 0 {
            return Err(SimError::InvalidConfig(
                "memory.imem_words must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log every cycle (PC, bundle disassembly, registers, data words) at debug level.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Program counter value while reset is asserted.
    #[serde(default = "GeneralConfig::default_reset_pc")]
    pub reset_pc: u32,

    /// Cycles reset is held before release in [`crate::sim::Simulator::run`].
    #[serde(default = "GeneralConfig::default_reset_cycles")]
    pub reset_cycles: u32,

    /// Maximum number of running cycles before a run is abandoned.
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,
}

impl GeneralConfig {
    const fn default_reset_pc() -> u32 {
        defaults::RESET_PC
    }

    const fn default_reset_cycles() -> u32 {
        defaults::RESET_CYCLES
    }

    const fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            reset_pc: defaults::RESET_PC,
            reset_cycles: defaults::RESET_CYCLES,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Termination monitor settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Consecutive fully idle bundles that end a run.
    #[serde(default = "MonitorConfig::default_idle_threshold")]
    pub idle_threshold: u32,
}

impl MonitorConfig {
    const fn default_idle_threshold() -> u32 {
        DEFAULT_IDLE_THRESHOLD
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            idle_threshold: DEFAULT_IDLE_THRESHOLD,
        }
    }
}

/// Instruction and data store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Instruction store capacity in words.
    #[serde(default = "MemoryConfig::default_imem_words")]
    pub imem_words: usize,

    /// Data store capacity in words.
    #[serde(default = "MemoryConfig::default_dmem_words")]
    pub dmem_words: usize,

    /// Data words shown per cycle in traces.
    #[serde(default = "MemoryConfig::default_dump_words")]
    pub dump_words: usize,
}

impl MemoryConfig {
    const fn default_imem_words() -> usize {
        defaults::IMEM_WORDS
    }

    const fn default_dmem_words() -> usize {
        defaults::DMEM_WORDS
    }

    const fn default_dump_words() -> usize {
        defaults::DUMP_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            imem_words: defaults::IMEM_WORDS,
            dmem_words: defaults::DMEM_WORDS,
            dump_words: defaults::DUMP_WORDS,
        }
    }
}
