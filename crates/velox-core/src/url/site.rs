//! Per-request site snapshot consumed by the url generator.

use serde::Serialize;

use super::base::{BasePaths, FRONT_CONTROLLER};
use super::Scheme;
use crate::config::VeloxConfig;

/// What the transport reports about the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInfo {
    /// Host as sent by the client, including a port if one was given.
    pub host: String,
    pub secure: bool,
    /// Directory holding the front controller, e.g. `/veloxphp`.
    pub base_dir: String,
    /// Requested application path, e.g. `blog/2024/hello`.
    pub path: String,
}

impl Default for RequestInfo {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            secure: false,
            base_dir: "/".to_string(),
            path: String::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("invalid site_url {url:?}")]
    InvalidSiteUrl {
        url: String,
        #[source]
        source: ::url::ParseError,
    },
    #[error("site_url {url:?} must use http or https, not {scheme}")]
    UnsupportedScheme { url: String, scheme: String },
    #[error("site_url {url:?} has no host")]
    MissingHost { url: String },
}

/// Immutable view of the site settings for one request.
///
/// Built by value; the `with_*` methods return a new snapshot so a
/// configuration already handed to a generator never changes under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfiguration {
    roots: BasePaths,
    links: BasePaths,
    clean_urls: bool,
    current_path: Vec<String>,
    secure: bool,
    theme_path: String,
}

impl Default for SiteConfiguration {
    /// An unconfigured site: `localhost`, served from `/`.
    fn default() -> Self {
        Self::new(BasePaths::default())
    }
}

impl SiteConfiguration {
    pub fn new(roots: BasePaths) -> Self {
        Self {
            links: roots.clone(),
            roots,
            clean_urls: true,
            current_path: Vec::new(),
            secure: false,
            theme_path: String::new(),
        }
    }

    /// Resolve the snapshot for a request from the loaded settings.
    ///
    /// A scheme with a `site_url` override takes its origin and path from the
    /// override; otherwise it is autodetected from the request host and the
    /// front controller directory.
    pub fn bootstrap(
        cfg: &VeloxConfig,
        request: &RequestInfo,
        theme_path: impl Into<String>,
    ) -> Result<Self, SiteError> {
        let base_dir = normalize_dir(&request.base_dir);
        let (http_base, http_full) = match cfg.site_url.unsecure.as_deref() {
            Some(url) => split_site_url(url)?,
            None => autodetect(Scheme::Http, &request.host, &base_dir),
        };
        let (https_base, https_full) = match cfg.site_url.secure.as_deref() {
            Some(url) => split_site_url(url)?,
            None => autodetect(Scheme::Https, &request.host, &base_dir),
        };

        let site = Self::new(BasePaths::new(http_base, http_full, https_base, https_full))
            .with_clean_urls(cfg.clean_urls)
            .with_secure(request.secure)
            .with_current_path(&request.path)
            .with_theme_path(theme_path);

        tracing::debug!(
            http = site.roots.get(Scheme::Http, true),
            https = site.roots.get(Scheme::Https, true),
            clean_urls = site.clean_urls,
            "site configuration resolved"
        );
        Ok(site)
    }

    /// Recomputes the link bases for the new clean urls mode.
    pub fn with_clean_urls(mut self, clean_urls: bool) -> Self {
        self.clean_urls = clean_urls;
        self.links = if clean_urls {
            self.roots.clone()
        } else {
            self.roots.with_suffix(FRONT_CONTROLLER)
        };
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Splits `path` on `/`, dropping empty segments.
    pub fn with_current_path(mut self, path: &str) -> Self {
        self.current_path = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        self
    }

    pub fn with_theme_path(mut self, theme_path: impl Into<String>) -> Self {
        self.theme_path = theme_path.into();
        self
    }

    /// Base for a link to the site root. Never carries the front controller.
    pub fn root(&self, scheme: Scheme, absolute: bool) -> &str {
        self.roots.get(scheme, absolute)
    }

    /// Base that a link path is appended to.
    pub fn link_base(&self, scheme: Scheme, absolute: bool) -> &str {
        self.links.get(scheme, absolute)
    }

    pub fn clean_urls(&self) -> bool {
        self.clean_urls
    }

    pub fn is_secure_connection(&self) -> bool {
        self.secure
    }

    pub fn current_path_segments(&self) -> &[String] {
        &self.current_path
    }

    pub fn theme_path(&self) -> &str {
        &self.theme_path
    }

    /// Settings object handed to the front-end url helper.
    ///
    /// The helper appends paths straight onto `*BasePath`/`*FullPath`, so those
    /// carry the link bases (with `index.php/` when clean urls are off). The
    /// front page bases go out as `*RootPath`/`*RootFullPath`.
    pub fn framework_settings(&self) -> FrameworkSettings<'_> {
        FrameworkSettings {
            http_base_path: self.links.get(Scheme::Http, false),
            http_full_path: self.links.get(Scheme::Http, true),
            https_base_path: self.links.get(Scheme::Https, false),
            https_full_path: self.links.get(Scheme::Https, true),
            http_root_path: self.roots.get(Scheme::Http, false),
            http_root_full_path: self.roots.get(Scheme::Http, true),
            https_root_path: self.roots.get(Scheme::Https, false),
            https_root_full_path: self.roots.get(Scheme::Https, true),
            clean_urls: self.clean_urls,
            theme_path: &self.theme_path,
            current_path: self.current_path.join("/"),
        }
    }
}

/// Serialized as `Velox.Settings.Framework` for client-side url generation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkSettings<'a> {
    pub http_base_path: &'a str,
    pub http_full_path: &'a str,
    pub https_base_path: &'a str,
    pub https_full_path: &'a str,
    pub http_root_path: &'a str,
    pub http_root_full_path: &'a str,
    pub https_root_path: &'a str,
    pub https_root_full_path: &'a str,
    pub clean_urls: bool,
    pub theme_path: &'a str,
    pub current_path: String,
}

/// `/`, `/veloxphp/`, `/a/b/`: leading and trailing slash, nothing doubled.
fn normalize_dir(dir: &str) -> String {
    let trimmed = dir.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

fn autodetect(scheme: Scheme, host: &str, base_dir: &str) -> (String, String) {
    (base_dir.to_string(), format!("{scheme}://{host}{base_dir}"))
}

/// `https://localhost:1234/veloxsecurephp` -> (`/veloxsecurephp/`, `https://localhost:1234/veloxsecurephp/`)
fn split_site_url(raw: &str) -> Result<(String, String), SiteError> {
    let parsed = ::url::Url::parse(raw).map_err(|source| SiteError::InvalidSiteUrl {
        url: raw.to_string(),
        source,
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SiteError::UnsupportedScheme {
            url: raw.to_string(),
            scheme: parsed.scheme().to_string(),
        });
    }
    if parsed.host_str().is_none() {
        return Err(SiteError::MissingHost {
            url: raw.to_string(),
        });
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        tracing::warn!(url = raw, "ignoring query/fragment in site_url");
    }

    let base = normalize_dir(parsed.path());
    let full = format!("{}{}", parsed.origin().ascii_serialization(), base);
    Ok((base, full))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteUrlConfig;

    #[test]
    fn normalize_dir_variants() {
        assert_eq!(normalize_dir(""), "/");
        assert_eq!(normalize_dir("/"), "/");
        assert_eq!(normalize_dir("veloxphp"), "/veloxphp/");
        assert_eq!(normalize_dir("/veloxphp/"), "/veloxphp/");
        assert_eq!(normalize_dir("/a/b"), "/a/b/");
    }

    #[test]
    fn split_site_url_keeps_non_default_port() {
        let (base, full) = split_site_url("https://localhost:1234/veloxsecurephp").unwrap();
        assert_eq!(base, "/veloxsecurephp/");
        assert_eq!(full, "https://localhost:1234/veloxsecurephp/");
    }

    #[test]
    fn split_site_url_drops_default_port_and_tolerates_trailing_slash() {
        let (base, full) = split_site_url("http://localhost:80/veloxphp/").unwrap();
        assert_eq!(base, "/veloxphp/");
        assert_eq!(full, "http://localhost/veloxphp/");
    }

    #[test]
    fn split_site_url_rejects_bad_values() {
        assert!(matches!(
            split_site_url("not a url"),
            Err(SiteError::InvalidSiteUrl { .. })
        ));
        assert!(matches!(
            split_site_url("ftp://localhost/veloxphp"),
            Err(SiteError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn bootstrap_with_overrides() {
        let cfg = VeloxConfig {
            site_url: SiteUrlConfig {
                unsecure: Some("http://localhost/veloxphp".to_string()),
                secure: Some("https://localhost:1234/veloxsecurephp".to_string()),
            },
            ..VeloxConfig::default()
        };
        let site = SiteConfiguration::bootstrap(&cfg, &RequestInfo::default(), "").unwrap();
        assert_eq!(site.root(Scheme::Http, false), "/veloxphp/");
        assert_eq!(site.root(Scheme::Http, true), "http://localhost/veloxphp/");
        assert_eq!(site.root(Scheme::Https, false), "/veloxsecurephp/");
        assert_eq!(
            site.root(Scheme::Https, true),
            "https://localhost:1234/veloxsecurephp/"
        );
    }

    #[test]
    fn bootstrap_autodetects_missing_scheme() {
        let cfg = VeloxConfig {
            site_url: SiteUrlConfig {
                unsecure: Some("http://example.com/app".to_string()),
                secure: None,
            },
            ..VeloxConfig::default()
        };
        let request = RequestInfo {
            host: "example.com:8443".to_string(),
            secure: true,
            base_dir: "/app".to_string(),
            path: "blog//post/".to_string(),
        };
        let site = SiteConfiguration::bootstrap(&cfg, &request, "framework/themes/velox").unwrap();
        assert_eq!(site.root(Scheme::Https, false), "/app/");
        assert_eq!(site.root(Scheme::Https, true), "https://example.com:8443/app/");
        assert!(site.is_secure_connection());
        assert_eq!(site.current_path_segments(), ["blog", "post"]);
        assert_eq!(site.theme_path(), "framework/themes/velox");
    }

    #[test]
    fn bootstrap_propagates_invalid_override() {
        let cfg = VeloxConfig {
            site_url: SiteUrlConfig {
                unsecure: None,
                secure: Some("::".to_string()),
            },
            ..VeloxConfig::default()
        };
        let err = SiteConfiguration::bootstrap(&cfg, &RequestInfo::default(), "").unwrap_err();
        assert!(err.to_string().contains("::"));
    }

    #[test]
    fn toggling_clean_urls_recomputes_link_bases_only() {
        let site = SiteConfiguration::default().with_clean_urls(false);
        assert_eq!(site.root(Scheme::Http, false), "/");
        assert_eq!(site.link_base(Scheme::Http, false), "/index.php/");
        assert_eq!(
            site.link_base(Scheme::Https, true),
            "https://localhost/index.php/"
        );

        let site = site.with_clean_urls(true);
        assert_eq!(site.link_base(Scheme::Http, false), "/");
    }

    #[test]
    fn framework_settings_json_keys() {
        let site = SiteConfiguration::default()
            .with_theme_path("framework/themes/velox")
            .with_current_path("a/b");
        let json = serde_json::to_value(site.framework_settings()).unwrap();
        assert_eq!(json["httpBasePath"], "/");
        assert_eq!(json["httpFullPath"], "http://localhost/");
        assert_eq!(json["httpsBasePath"], "/");
        assert_eq!(json["httpsFullPath"], "https://localhost/");
        assert_eq!(json["cleanUrls"], true);
        assert_eq!(json["themePath"], "framework/themes/velox");
        assert_eq!(json["currentPath"], "a/b");
        assert_eq!(json["httpRootPath"], "/");
        assert_eq!(json["httpsRootFullPath"], "https://localhost/");
    }

    #[test]
    fn framework_settings_follow_clean_urls_off() {
        let site = SiteConfiguration::new(BasePaths::new(
            "/veloxphp/",
            "http://localhost/veloxphp/",
            "/veloxsecurephp/",
            "https://localhost:1234/veloxsecurephp/",
        ))
        .with_clean_urls(false);
        let json = serde_json::to_value(site.framework_settings()).unwrap();

        // The front-end helper builds links as `base + path`.
        let client_link = |key: &str| format!("{}veloxphp/front", json[key].as_str().unwrap());
        let urls = crate::url::UrlGenerator::new(&site);
        let options = crate::url::GenerationOptions::new();
        assert_eq!(
            client_link("httpBasePath"),
            urls.generate(Some("veloxphp/front"), &options)
        );
        assert_eq!(
            client_link("httpsFullPath"),
            urls.generate(
                Some("veloxphp/front"),
                &options.clone().absolute(true).scheme(Scheme::Https)
            )
        );
        assert_eq!(
            client_link("httpBasePath"),
            "/veloxphp/index.php/veloxphp/front"
        );
        assert_eq!(json["httpRootPath"], "/veloxphp/");
        assert_eq!(json["httpsRootFullPath"], "https://localhost:1234/veloxsecurephp/");
        assert_eq!(json["cleanUrls"], false);
    }
}
