//! Combat configuration loader.

use std::path::Path;

use combat_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`CombatConfig::default`].
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        let config: CombatConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.hand_size == 0 {
            anyhow::bail!("{}: hand_size must be at least 1", path.display());
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn partial_config_uses_defaults() {
        let file = write_config("seed = 42\n");

        let config = ConfigLoader::load(file.path()).unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.hand_size, CombatConfig::DEFAULT_HAND_SIZE);
    }

    #[test]
    fn zero_hand_size_is_rejected() {
        let file = write_config("hand_size = 0\n");

        assert!(ConfigLoader::load(file.path()).is_err());
    }
}
