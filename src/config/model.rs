// src/config/model.rs

use serde::Deserialize;

use crate::types::Delimiter;

/// Default number of machines when neither the CLI nor the config names one.
pub const DEFAULT_MACHINES: i64 = 3;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [schedule]
/// machines = 3
///
/// [input]
/// delimiter = ","
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    /// `[schedule]` section.
    #[serde(default)]
    pub schedule: ScheduleSection,

    /// `[input]` section.
    #[serde(default)]
    pub input: InputSection,
}

/// `[schedule]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleSection {
    /// Number of identical machines. Signed so that `0` and negative values
    /// reach validation and are reported as invalid machine counts.
    #[serde(default = "default_machines")]
    pub machines: i64,
}

fn default_machines() -> i64 {
    DEFAULT_MACHINES
}

impl Default for ScheduleSection {
    fn default() -> Self {
        Self {
            machines: default_machines(),
        }
    }
}

/// `[input]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputSection {
    /// Separator between the two ids of an edge-list line; `","` by default.
    #[serde(default)]
    pub delimiter: Delimiter,
}

/// Validated configuration.
///
/// Only constructible through `ConfigFile::try_from(RawConfigFile)` (see
/// `config::validate`), so holding one means `machines >= 1` and the
/// delimiter is usable.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    schedule: ScheduleSection,
    input: InputSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(schedule: ScheduleSection, input: InputSection) -> Self {
        Self { schedule, input }
    }

    pub fn machines(&self) -> i64 {
        self.schedule.machines
    }

    pub fn delimiter(&self) -> Delimiter {
        self.input.delimiter
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(ScheduleSection::default(), InputSection::default())
    }
}
