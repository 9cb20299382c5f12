//! Environment-driven configuration for the terminal client.
use std::env;
use std::path::PathBuf;

use maester_api::ApiConfig;

/// Terminal client configuration.
///
/// Environment variables:
/// - `MAESTER_BASE_URL` - remote API base URL (default: the public endpoint)
/// - `MAESTER_PAGE_SIZE` - records per remote page (default: 5, floor: 1)
/// - `MAESTER_LOG_FILE` - log destination (default: `maester.log` in the temp dir)
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub api: ApiConfig,
    pub log_file: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            log_file: env::temp_dir().join("maester.log"),
        }
    }
}

impl CliConfig {
    /// Construct configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(base_url) = read_env::<String>("MAESTER_BASE_URL") {
            config.api.base_url = base_url;
        }
        if let Some(page_size) = read_env::<u32>("MAESTER_PAGE_SIZE") {
            config.api.page_size = page_size.max(1);
        }
        if let Some(log_file) = read_env::<PathBuf>("MAESTER_LOG_FILE") {
            config.log_file = log_file;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
