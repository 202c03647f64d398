//! Configuration module
//!
//! Resolves where the catalog lives from command-line flags, the
//! environment and defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Where the catalog is kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Storage {
    /// `<dir>/healthcareServices.json`
    Directory(PathBuf),
    /// In memory, discarded on exit
    Ephemeral,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub storage: Storage,
}

impl Config {
    /// Builds the configuration from parsed flags
    ///
    /// Without `--data-dir` (or `TARIFF_DATA_DIR`) the catalog lives in a
    /// `tariff` directory under the platform data directory
    /// (`~/.local/share` on Linux).
    pub fn resolve(data_dir: Option<PathBuf>, ephemeral: bool) -> Result<Self> {
        let storage = if ephemeral {
            Storage::Ephemeral
        } else {
            match data_dir {
                Some(dir) => Storage::Directory(dir),
                None => Storage::Directory(default_data_dir()?),
            }
        };
        Ok(Self { storage })
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if let Storage::Directory(dir) = &self.storage {
            if dir.as_os_str().is_empty() {
                anyhow::bail!("data directory cannot be empty");
            }
            if dir.is_file() {
                anyhow::bail!("data directory {} is a file", dir.display());
            }
        }
        Ok(())
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir()
        .context("No data directory for this platform; pass --data-dir or set TARIFF_DATA_DIR")?;
    Ok(base.join("tariff"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ephemeral_wins_over_data_dir() {
        let config = Config::resolve(Some(PathBuf::from("/tmp/x")), true).unwrap();
        assert_eq!(config.storage, Storage::Ephemeral);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_data_dir_under_platform_data_dir() {
        let config = Config::resolve(None, false);
        match dirs::data_dir() {
            Some(base) => {
                let config = config.unwrap();
                assert_eq!(config.storage, Storage::Directory(base.join("tariff")));
            }
            None => assert!(config.is_err()),
        }
    }

    #[test]
    fn test_explicit_data_dir() {
        let config = Config::resolve(Some(PathBuf::from("/tmp/tariff")), false).unwrap();
        assert_eq!(config.storage, Storage::Directory(PathBuf::from("/tmp/tariff")));
    }

    #[test]
    fn test_config_validation() {
        let config = Config {
            storage: Storage::Directory(PathBuf::new()),
        };
        assert!(config.validate().is_err());

        let file = tempfile::NamedTempFile::new().unwrap();
        let config = Config {
            storage: Storage::Directory(file.path().to_path_buf()),
        };
        assert!(config.validate().is_err());

        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            storage: Storage::Directory(dir.path().to_path_buf()),
        };
        assert!(config.validate().is_ok());
    }
}
