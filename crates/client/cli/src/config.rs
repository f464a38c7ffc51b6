//! CLI runtime configuration.
use std::env;
use std::path::PathBuf;

/// Settings read from the process environment.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub enemy: Option<String>,
    pub seed: Option<u64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            enemy: None,
            seed: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `COMBAT_DATA_DIR` - Directory holding the data files (default: `data`)
    /// - `COMBAT_ENEMY` - Enemy id from `enemies.ron` (default: first entry)
    /// - `COMBAT_SEED` - Random seed, overrides `config.toml`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("COMBAT_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config.enemy = env::var("COMBAT_ENEMY").ok().filter(|id| !id.is_empty());
        config.seed = read_env::<u64>("COMBAT_SEED");

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
