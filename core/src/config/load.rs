use std::path::{Path, PathBuf};

use super::types::AppConfig;

pub const ENV_API_URL: &str = "TASKBOARD_API_URL";
pub const ENV_API_KEY: &str = "TASKBOARD_API_KEY";

/// Get the default taskboard data directory: ~/.taskboard
pub fn get_taskboard_data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".taskboard"))
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    load(None)
}

/// Resolve the config file and apply environment overrides.
///
/// Priority: `explicit` path, then ~/.taskboard/config.toml, then
/// ./config.toml, then built-in defaults.
pub fn load(explicit: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut cfg = match explicit {
        Some(raw) => {
            let expanded = shellexpand::tilde(raw).to_string();
            let path = Path::new(&expanded);
            if !path.exists() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            load_from_path(path)?
        }
        None => {
            let home_config = get_taskboard_data_dir()
                .map(|d| d.join("config.toml"))
                .ok()
                .filter(|p| p.exists());
            let local_config = Path::new("config.toml");

            if let Some(path) = home_config {
                load_from_path(&path)?
            } else if local_config.exists() {
                load_from_path(local_config)?
            } else {
                AppConfig::default()
            }
        }
    };

    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok());
    Ok(cfg)
}

pub fn load_from_path(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)?;
    let cfg = toml::from_str::<AppConfig>(&s)
        .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))?;
    Ok(cfg)
}

pub fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
        cfg.api.base_url = v;
    }
    if let Some(v) = lookup(ENV_API_KEY).filter(|v| !v.trim().is_empty()) {
        cfg.api.api_key = v;
    }
}
