// src/config/loader.rs

use std::path::{Path, PathBuf};

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    load_from_path_with_fs(&RealFileSystem, path)
}

/// Same as [`load_from_path`], reading through the given filesystem.
pub fn load_from_path_with_fs(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let contents = fs.read_to_string(path.as_ref())?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and validate it.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks that `machines >= 1` and that the delimiter can split integers.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Config used when no `--config` is given: `Husched.toml` in the current
/// directory if it exists, built-in defaults otherwise.
pub fn load_default(fs: &dyn FileSystem) -> Result<ConfigFile> {
    let path = default_config_path();
    if fs.is_file(&path) {
        let raw = load_from_path_with_fs(fs, &path)?;
        ConfigFile::try_from(raw)
    } else {
        Ok(ConfigFile::default())
    }
}

/// Default config location: `Husched.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Husched.toml")
}
