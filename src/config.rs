use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{MineError, Result};
use crate::normalize::DEFAULT_PAGE_CHUNK_CHARS;
use crate::rules::DEFAULT_CTX_CHARS;
use crate::score::{MAX_CONFIDENCE, MIN_CONFIDENCE};

pub const DEFAULT_MIN_CONF: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MineConfig {
    /// Threshold for the high-confidence tier.
    pub min_conf: u8,
    /// Context characters either side of a match for window-based rules.
    pub ctx_chars: usize,
    /// Retain the undeduplicated tier. When false only its size is reported.
    pub keep_raw: bool,
    /// Pseudo-page size for converter output without form feeds.
    pub page_chunk_chars: usize,
}

impl Default for MineConfig {
    fn default() -> Self {
        Self {
            min_conf: DEFAULT_MIN_CONF,
            ctx_chars: DEFAULT_CTX_CHARS,
            keep_raw: true,
            page_chunk_chars: DEFAULT_PAGE_CHUNK_CHARS,
        }
    }
}

impl MineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: MineConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&self.min_conf) {
            return Err(MineError::InvalidConfig(format!(
                "min_conf must be within {}..={}, got {}",
                MIN_CONFIDENCE, MAX_CONFIDENCE, self.min_conf
            )));
        }
        if self.ctx_chars == 0 {
            return Err(MineError::InvalidConfig("ctx_chars must be positive".to_string()));
        }
        if self.page_chunk_chars == 0 {
            return Err(MineError::InvalidConfig(
                "page_chunk_chars must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MineConfig::default();
        assert_eq!(config.min_conf, 4);
        assert_eq!(config.ctx_chars, 140);
        assert!(config.keep_raw);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = MineConfig::from_toml_str("min_conf = 3\n").unwrap();
        assert_eq!(config.min_conf, 3);
        assert_eq!(config.ctx_chars, 140);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            MineConfig::from_toml_str("min_conf = 9"),
            Err(MineError::InvalidConfig(_))
        ));
        assert!(matches!(
            MineConfig::from_toml_str("ctx_chars = 0"),
            Err(MineError::InvalidConfig(_))
        ));
        assert!(matches!(
            MineConfig::from_toml_str("ctx_chars = \"wide\""),
            Err(MineError::Config(_))
        ));
    }
}
