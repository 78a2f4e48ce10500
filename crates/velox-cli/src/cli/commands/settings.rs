//! `velox settings` – print the page and front-end settings.

use anyhow::Result;
use serde_json::{json, Value};
use velox_core::config::VeloxConfig;
use velox_core::url::SiteConfiguration;

pub fn run_settings(cfg: &VeloxConfig, site: &SiteConfiguration) -> Result<()> {
    let json = serde_json::to_string_pretty(&settings_document(cfg, site)?)?;
    println!("{json}");
    Ok(())
}

/// Page-level settings plus the `Velox.Settings.Framework` object.
pub(crate) fn settings_document(cfg: &VeloxConfig, site: &SiteConfiguration) -> Result<Value> {
    Ok(json!({
        "sitename": cfg.sitename,
        "language": cfg.language,
        "timezone": cfg.timezone,
        "framework": serde_json::to_value(site.framework_settings())?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_document_carries_page_settings() {
        let cfg = VeloxConfig {
            sitename: "My Custom App".to_string(),
            language: "sv".to_string(),
            ..VeloxConfig::default()
        };
        let site = SiteConfiguration::default().with_clean_urls(false);
        let doc = settings_document(&cfg, &site).unwrap();
        assert_eq!(doc["sitename"], "My Custom App");
        assert_eq!(doc["language"], "sv");
        assert_eq!(doc["timezone"], "Europe/Stockholm");
        assert_eq!(doc["framework"]["httpBasePath"], "/index.php/");
        assert_eq!(doc["framework"]["httpRootPath"], "/");
    }
}
