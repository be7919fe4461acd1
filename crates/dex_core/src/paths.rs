use std::path::PathBuf;

/// Dex configuration directory (`~/.dex`)
pub fn dex_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir)
        .join(".dex")
}

pub fn config_json_path() -> PathBuf {
    dex_dir().join("config.json")
}

/// Default directory for the key-value files backing the favorites store
pub fn data_dir() -> PathBuf {
    dex_dir().join("data")
}
