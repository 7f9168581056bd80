//! Configuration system for the datapath simulator.
//!
//! This module defines all configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline hardware constants (register count, data-memory size).
//! 2. **Structures:** Hierarchical config for general options, the core, and initial state.
//! 3. **Validation:** Checks that the register file, memory and seeds are consistent.
//!
//! Configuration is supplied as JSON; every section and field is optional, so
//! `{}` yields `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::ConfigError;
use crate::common::MemoryError;
use crate::common::constants::{ARCH_REG_COUNT, DWORD_BYTES, INDEXED_MEMORY_DWORDS};

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants;

    /// Number of general-purpose registers.
    pub const NUM_REGS: usize = constants::DEFAULT_NUM_REGS;

    /// Data-memory capacity in bytes (1 KiB).
    pub const DATA_MEMORY_BYTES: usize = constants::DEFAULT_DATA_MEMORY_BYTES;

    /// Initial program counter.
    pub const START_PC: u64 = 0;
}

/// Root configuration structure for the simulator.
///
/// # Examples
///
/// ```
/// use rvdp_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_cycles": 1000 },
///     "core": { "data_memory_bytes": 4096 },
///     "init": {
///         "registers": [ { "index": 2, "value": 4088 } ],
///         "memory": [ { "addr": 0, "value": -1 } ]
///     }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_cycles, Some(1000));
/// assert_eq!(config.core.num_regs, 32);
/// assert_eq!(config.core.data_memory_bytes, 4096);
/// assert_eq!(config.init.registers[0].value, 4088);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Register-file and data-memory sizing
    #[serde(default)]
    pub core: CoreConfig,
    /// Initial register and memory contents
    #[serde(default)]
    pub init: InitConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown value types,
    /// or a validation error (see [`Config::validate`]).
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Seeds doubleword `i` at address `8 * i` with the value `i`, for the
    /// first 16 doublewords of data memory.
    #[must_use]
    pub fn with_indexed_memory(mut self) -> Self {
        self.init.memory.extend((0..INDEXED_MEMORY_DWORDS).map(|i| MemorySeed {
            addr: (i * DWORD_BYTES) as u64,
            value: i as i64,
        }));
        self
    }

    /// Checks the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::TooFewRegisters`] if `core.num_regs` is below 32.
    /// * [`ConfigError::DataMemoryTooSmall`] if data memory cannot hold one doubleword.
    /// * [`ConfigError::RegisterSeedOutOfRange`] for a register seed beyond the register file.
    /// * [`ConfigError::MemorySeedOutOfRange`] for a memory or byte seed beyond data memory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let num_regs = self.core.num_regs;
        if num_regs < ARCH_REG_COUNT {
            return Err(ConfigError::TooFewRegisters {
                num_regs,
                min: ARCH_REG_COUNT,
            });
        }

        let capacity = self.core.data_memory_bytes;
        if capacity < DWORD_BYTES {
            return Err(ConfigError::DataMemoryTooSmall { bytes: capacity });
        }

        if let Some(seed) = self.init.registers.iter().find(|s| s.index >= num_regs) {
            return Err(ConfigError::RegisterSeedOutOfRange {
                index: seed.index,
                num_regs,
            });
        }

        let fits = |addr: u64, width: usize| {
            usize::try_from(addr)
                .ok()
                .and_then(|a| a.checked_add(width))
                .is_some_and(|end| end <= capacity)
        };
        let out_of_range = |addr: u64, width: usize| {
            ConfigError::MemorySeedOutOfRange(MemoryError::OutOfBounds {
                addr,
                width,
                capacity,
            })
        };
        if let Some(seed) = self.init.memory.iter().find(|s| !fits(s.addr, DWORD_BYTES)) {
            return Err(out_of_range(seed.addr, DWORD_BYTES));
        }
        if let Some(seed) = self.init.bytes.iter().find(|s| !fits(s.addr, 1)) {
            return Err(out_of_range(seed.addr, 1));
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Log every retired instruction at `trace` level
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u64,

    /// Stop a run after this many cycles even if the core has not halted
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u64 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
            max_cycles: None,
        }
    }
}

/// Register-file and data-memory sizing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoreConfig {
    /// Number of general-purpose registers (at least 32)
    #[serde(default = "CoreConfig::default_num_regs")]
    pub num_regs: usize,

    /// Data-memory capacity in bytes
    #[serde(default = "CoreConfig::default_data_memory_bytes")]
    pub data_memory_bytes: usize,
}

impl CoreConfig {
    /// Returns the default register count.
    const fn default_num_regs() -> usize {
        defaults::NUM_REGS
    }

    /// Returns the default data-memory capacity.
    const fn default_data_memory_bytes() -> usize {
        defaults::DATA_MEMORY_BYTES
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            num_regs: defaults::NUM_REGS,
            data_memory_bytes: defaults::DATA_MEMORY_BYTES,
        }
    }
}

/// Initial architectural state applied once before the first cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InitConfig {
    /// Register seeds; seeds of `x0` are ignored
    #[serde(default)]
    pub registers: Vec<RegisterSeed>,

    /// Doubleword memory seeds, stored little-endian
    #[serde(default)]
    pub memory: Vec<MemorySeed>,

    /// Single-byte memory seeds, applied after `memory`
    #[serde(default)]
    pub bytes: Vec<ByteSeed>,
}

/// Initial value of one register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RegisterSeed {
    /// Register index.
    pub index: usize,
    /// Initial value.
    pub value: i64,
}

/// Initial value of one data-memory doubleword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MemorySeed {
    /// Byte address of the doubleword.
    pub addr: u64,
    /// Initial value.
    pub value: i64,
}

/// Initial value of one data-memory byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ByteSeed {
    /// Byte address.
    pub addr: u64,
    /// Initial value.
    pub value: u8,
}
