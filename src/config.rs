use crate::error::{HealthError, Result};
use crate::types::config::AppConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "repohealth.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".repohealth/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/repohealth/config.toml";

/// Loads global, repo and local config in that order, later files winning
/// key by key. Without a repo file only the global layer applies; without
/// any file the defaults do.
pub fn load_config(root: &Path) -> Result<AppConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub fn load_config_with_global(root: &Path, global_path: Option<&Path>) -> Result<AppConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if repo_path.exists() {
        merge_file_if_exists(&mut merged, &repo_path)?;
        merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;
    }

    let cfg: AppConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| HealthError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| HealthError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
