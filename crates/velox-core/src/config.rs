use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides for the autodetected site url (optional `[site_url]` section).
///
/// Values are absolute urls without a trailing slash, e.g. `http://localhost/veloxphp`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteUrlConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsecure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure: Option<String>,
}

/// Application settings loaded from `~/.config/velox/settings.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VeloxConfig {
    /// Used in the page title.
    pub sitename: String,
    /// When false, generated links go through `index.php/`.
    pub clean_urls: bool,
    /// Name of the active theme.
    pub theme: String,
    /// The lang attribute of the html tag.
    pub language: String,
    pub timezone: String,
    /// Show errors from the application and modules.
    pub development: bool,
    /// Write errors to the application error log.
    pub error_logging: bool,
    /// Enabled modules, in invocation order.
    pub modules: Vec<String>,
    /// Key allowing cron to be triggered over http. Cron is cli-only when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_key: Option<String>,
    /// Optional overrides when autodetection of the site url gets it wrong.
    pub site_url: SiteUrlConfig,
}

impl Default for VeloxConfig {
    fn default() -> Self {
        Self {
            sitename: "Velox PHP Framework".to_string(),
            clean_urls: true,
            theme: "velox".to_string(),
            language: "en".to_string(),
            timezone: "Europe/Stockholm".to_string(),
            development: true,
            error_logging: true,
            modules: Vec::new(),
            cron_key: None,
            site_url: SiteUrlConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("velox")?;
    Ok(xdg_dirs.place_config_file("settings.toml")?)
}

/// Load settings from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VeloxConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = VeloxConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default settings at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load settings from an explicit file.
pub fn load_from(path: &Path) -> Result<VeloxConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read settings {}", path.display()))?;
    let cfg: VeloxConfig =
        toml::from_str(&data).with_context(|| format!("parse settings {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded settings");
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = VeloxConfig::default();
        assert!(cfg.clean_urls);
        assert_eq!(cfg.theme, "velox");
        assert_eq!(cfg.language, "en");
        assert!(cfg.modules.is_empty());
        assert!(cfg.cron_key.is_none());
        assert_eq!(cfg.site_url, SiteUrlConfig::default());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = VeloxConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: VeloxConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.sitename, cfg.sitename);
        assert_eq!(parsed.clean_urls, cfg.clean_urls);
        assert_eq!(parsed.theme, cfg.theme);
        assert_eq!(parsed.site_url, cfg.site_url);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let cfg: VeloxConfig = toml::from_str(r#"sitename = "My Custom App""#).unwrap();
        assert_eq!(cfg.sitename, "My Custom App");
        assert!(cfg.clean_urls);
        assert_eq!(cfg.theme, "velox");
        assert!(cfg.site_url.unsecure.is_none());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            sitename = "My Custom App"
            clean_urls = false
            theme = "my-theme"
            modules = ["Sass", "GoogleAnalytics", "Admin"]
            cron_key = "s3cret"

            [site_url]
            unsecure = "http://localhost/veloxphp"
            secure = "https://localhost:1234/veloxsecurephp"
        "#;
        let cfg: VeloxConfig = toml::from_str(toml).unwrap();
        assert!(!cfg.clean_urls);
        assert_eq!(cfg.theme, "my-theme");
        assert_eq!(cfg.modules, vec!["Sass", "GoogleAnalytics", "Admin"]);
        assert_eq!(cfg.cron_key.as_deref(), Some("s3cret"));
        assert_eq!(
            cfg.site_url.unsecure.as_deref(),
            Some("http://localhost/veloxphp")
        );
        assert_eq!(
            cfg.site_url.secure.as_deref(),
            Some("https://localhost:1234/veloxsecurephp")
        );
    }

    #[test]
    fn load_from_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "clean_urls = \"nope\"").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("settings.toml"));
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "theme = \"my-theme\"\nclean_urls = false\n").unwrap();
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.theme, "my-theme");
        assert!(!cfg.clean_urls);
    }
}
