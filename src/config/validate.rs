// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{HuschedError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::HuschedError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.schedule, raw.input))
    }
}

/// Run every check on an unvalidated config.
pub fn validate_config(cfg: &RawConfigFile) -> Result<()> {
    validate_raw_config(cfg)
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_schedule(cfg)?;
    validate_input(cfg)?;
    Ok(())
}

fn validate_schedule(cfg: &RawConfigFile) -> Result<()> {
    if cfg.schedule.machines < 1 {
        return Err(HuschedError::InvalidMachineCount(cfg.schedule.machines));
    }
    Ok(())
}

fn validate_input(cfg: &RawConfigFile) -> Result<()> {
    // The delimiter string itself is checked during deserialization; here we
    // only reject characters that can be part of a task id.
    if !cfg.input.delimiter.is_valid() {
        return Err(HuschedError::ConfigError(format!(
            "[input].delimiter {} cannot separate integer task ids",
            cfg.input.delimiter
        )));
    }
    Ok(())
}
