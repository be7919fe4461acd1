use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::chain::DEFAULT_SPRITE_BASE_URL;
use crate::paths;

pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_MAX_RETRIES: u32 = 2;

const CONFIG_FILE_PATH: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DexConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_sprite_base_url")]
    pub sprite_base_url: String,
    #[serde(default)]
    pub http_proxy: String,
    #[serde(default)]
    pub https_proxy: String,
    /// Retries for transient HTTP failures; 0 disables the retry middleware.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_sprite_base_url() -> String {
    DEFAULT_SPRITE_BASE_URL.to_string()
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            sprite_base_url: default_sprite_base_url(),
            http_proxy: String::new(),
            https_proxy: String::new(),
            max_retries: DEFAULT_MAX_RETRIES,
            data_dir: None,
        }
    }
}

impl DexConfig {
    /// Defaults, then `~/.dex/config.json`, else `./config.toml`, then
    /// environment overrides.
    pub fn load() -> Self {
        let mut config = Self::from_files(&paths::config_json_path(), Path::new(CONFIG_FILE_PATH))
            .unwrap_or_default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    fn from_files(json_path: &Path, toml_path: &Path) -> Option<Self> {
        if json_path.exists() {
            if let Ok(content) = std::fs::read_to_string(json_path) {
                if let Ok(file_config) = serde_json::from_str::<DexConfig>(&content) {
                    return Some(file_config);
                }
            }
        }

        if toml_path.exists() {
            if let Ok(content) = std::fs::read_to_string(toml_path) {
                if let Ok(file_config) = toml::from_str::<DexConfig>(&content) {
                    return Some(file_config);
                }
            }
        }

        None
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(api_base) = var("DEX_API_BASE") {
            self.api_base = api_base;
        }
        if let Some(sprite_base) = var("DEX_SPRITE_BASE") {
            self.sprite_base_url = sprite_base;
        }
        if let Some(http_proxy) = var("HTTP_PROXY") {
            self.http_proxy = http_proxy;
        }
        if let Some(https_proxy) = var("HTTPS_PROXY") {
            self.https_proxy = https_proxy;
        }
        if let Some(retries) = var("DEX_MAX_RETRIES").and_then(|v| v.trim().parse().ok()) {
            self.max_retries = retries;
        }
        if let Some(data_dir) = var("DEX_DATA_DIR") {
            self.data_dir = Some(PathBuf::from(data_dir));
        }
    }

    pub fn api_base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(paths::data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn toml_file_fills_missing_fields_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("config.toml");
        std::fs::write(&toml_path, "api_base = \"http://localhost:9000/api/v2/\"\nmax_retries = 0\n")
            .unwrap();

        let config = DexConfig::from_files(&dir.path().join("missing.json"), &toml_path).unwrap();

        assert_eq!(config.api_base(), "http://localhost:9000/api/v2");
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.sprite_base_url, DEFAULT_SPRITE_BASE_URL);
    }

    #[test]
    fn json_file_wins_over_toml() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("config.json");
        let toml_path = dir.path().join("config.toml");
        std::fs::write(&json_path, r#"{ "api_base": "http://json.test" }"#).unwrap();
        std::fs::write(&toml_path, "api_base = \"http://toml.test\"\n").unwrap();

        let config = DexConfig::from_files(&json_path, &toml_path).unwrap();
        assert_eq!(config.api_base, "http://json.test");
    }

    #[test]
    fn unreadable_files_yield_none() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("config.toml");
        std::fs::write(&toml_path, "max_retries = \"many\"").unwrap();

        assert!(DexConfig::from_files(&dir.path().join("none.json"), &toml_path).is_none());
    }

    #[test]
    fn env_overrides_file_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("DEX_API_BASE", "http://env.test"),
            ("DEX_MAX_RETRIES", " 5 "),
            ("DEX_DATA_DIR", "/tmp/dex-data"),
        ]);
        let mut config = DexConfig::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api_base, "http://env.test");
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/dex-data"));
        assert!(config.http_proxy.is_empty());
    }

    #[test]
    fn invalid_retry_override_is_ignored() {
        let mut config = DexConfig::default();
        config.apply_env(|key| (key == "DEX_MAX_RETRIES").then(|| "lots".to_string()));
        assert_eq!(config.max_retries, DEFAULT_MAX_RETRIES);
    }
}
