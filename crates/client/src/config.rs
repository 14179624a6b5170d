//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use runtime::RuntimeConfig;

/// Configuration required to bootstrap the runtime and terminal frontend.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub runtime: RuntimeConfig,
    /// TOML file overriding the shipped economic constants
    pub game_config_path: Option<PathBuf>,
    /// RON file replacing the shipped catalog
    pub catalog_path: Option<PathBuf>,
    /// Gemini API key; headlines fall back to canned text without one
    pub api_key: Option<String>,
    pub session_id: Option<String>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GAME_CONFIG_PATH` - Economic constants TOML (default: shipped)
    /// - `CATALOG_PATH` - Tier and upgrade catalog RON (default: shipped)
    /// - `API_KEY` - Gemini API key for headlines (default: none)
    /// - `GAME_SESSION_ID` - Session identifier for log files (default: auto-generated)
    ///
    /// Runtime variables are documented on [`RuntimeConfig::from_env`].
    pub fn from_env() -> Self {
        Self {
            runtime: RuntimeConfig::from_env(),
            game_config_path: env::var_os("GAME_CONFIG_PATH").map(PathBuf::from),
            catalog_path: env::var_os("CATALOG_PATH").map(PathBuf::from),
            api_key: env::var("API_KEY").ok().filter(|key| !key.is_empty()),
            session_id: env::var("GAME_SESSION_ID").ok(),
        }
    }
}
