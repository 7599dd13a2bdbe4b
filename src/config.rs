//! Frame buffer configuration
//!
//! Example `hermes_frame.toml`:
//!
//! ```toml
//! capacity = 8200
//! storage_path = "/dev/shm/hermes_frame.dat"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::protocol::{DEFAULT_CAPACITY, HEADER_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameConfig {
    /// Total buffer size termasuk header
    pub capacity: usize,
    /// Jika di-set, shared buffer di-mmap dari file ini
    pub storage_path: Option<PathBuf>,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            storage_path: None,
        }
    }
}

impl FrameConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Capacity harus menyisakan minimal 1 byte payload, dan payload
    /// terbesar harus bisa dinyatakan oleh length field i32.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity <= HEADER_SIZE {
            return Err(ConfigError::CapacityTooSmall {
                capacity: self.capacity,
                header: HEADER_SIZE,
            });
        }
        if self.capacity - HEADER_SIZE > i32::MAX as usize {
            return Err(ConfigError::CapacityTooLarge {
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Payload terbesar untuk capacity ini
    #[inline]
    pub fn max_payload(&self) -> usize {
        self.capacity.saturating_sub(HEADER_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FrameConfig::default();
        assert_eq!(config.capacity, 8200);
        assert_eq!(config.max_payload(), 8192);
        assert!(config.storage_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let config = FrameConfig::from_toml_str(
            r#"
            capacity = 1024
            storage_path = "frame.dat"
            "#,
        )
        .unwrap();
        assert_eq!(config.capacity, 1024);
        assert_eq!(config.storage_path, Some(PathBuf::from("frame.dat")));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(FrameConfig::from_toml_str("").unwrap(), FrameConfig::default());
    }

    #[test]
    fn test_capacity_too_small() {
        let err = FrameConfig::from_toml_str("capacity = 8").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::CapacityTooSmall { capacity: 8, .. }
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = FrameConfig::from_toml_str("capacty = 100").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = FrameConfig::load("/nonexistent/hermes_frame.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
