use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::kind::ResourceKind;

/// Global configuration loaded from `~/.config/resid/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidConfig {
    /// Only accept strictly supported matches (no heuristic fallback).
    pub strict: bool,
    /// Optional kind list in priority order; if missing, the built-in order is used.
    #[serde(default)]
    pub kinds: Option<Vec<ResourceKind>>,
    /// Extra hostnames whose URLs count as locally available (beyond loopback).
    #[serde(default)]
    pub local_hosts: Vec<String>,
}

impl Default for ResidConfig {
    fn default() -> Self {
        Self {
            strict: true,
            kinds: None,
            local_hosts: Vec::new(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("resid")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ResidConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ResidConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<ResidConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let cfg: ResidConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ResidConfig::default();
        assert!(cfg.strict);
        assert!(cfg.kinds.is_none());
        assert!(cfg.local_hosts.is_empty());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ResidConfig {
            strict: false,
            kinds: Some(vec![ResourceKind::WebUrl, ResourceKind::FilePath]),
            local_hosts: vec!["nas.lan".to_string()],
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ResidConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            strict = false
            kinds = ["local_file_url", "file_path", "web_url"]
        "#;
        let cfg: ResidConfig = toml::from_str(toml).unwrap();
        assert!(!cfg.strict);
        assert_eq!(
            cfg.kinds,
            Some(vec![
                ResourceKind::LocalFileUrl,
                ResourceKind::FilePath,
                ResourceKind::WebUrl
            ])
        );
        assert!(cfg.local_hosts.is_empty());
    }

    #[test]
    fn config_toml_rejects_unknown_kind() {
        let toml = r#"
            strict = true
            kinds = ["webpage"]
        "#;
        assert!(toml::from_str::<ResidConfig>(toml).is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "strict = false\nlocal_hosts = [\"intranet\"]\n").unwrap();
        let cfg = load_from(&path).unwrap();
        assert!(!cfg.strict);
        assert_eq!(cfg.local_hosts, vec!["intranet".to_string()]);

        let missing = dir.path().join("missing.toml");
        let err = load_from(&missing).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }
}
