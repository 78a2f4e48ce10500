//! Fixed (scheme, absolute) table of base strings.

use super::Scheme;

/// Base used when nothing is configured for a slot.
pub const ROOT: &str = "/";

/// Segment spliced in after the base when clean urls are off.
pub const FRONT_CONTROLLER: &str = "index.php/";

/// One base string per scheme, each in a relative (`BasePath`) and an
/// absolute (`FullPath`) variant. Every entry ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePaths {
    http_base: String,
    http_full: String,
    https_base: String,
    https_full: String,
}

impl BasePaths {
    /// Empty entries fall back to [`ROOT`].
    pub fn new(
        http_base: impl Into<String>,
        http_full: impl Into<String>,
        https_base: impl Into<String>,
        https_full: impl Into<String>,
    ) -> Self {
        Self {
            http_base: or_root(http_base.into()),
            http_full: or_root(http_full.into()),
            https_base: or_root(https_base.into()),
            https_full: or_root(https_full.into()),
        }
    }

    /// Bases for a site served from `/` on `host` under both schemes.
    pub fn for_host(host: &str) -> Self {
        Self::new(
            ROOT,
            format!("http://{host}/"),
            ROOT,
            format!("https://{host}/"),
        )
    }

    pub fn get(&self, scheme: Scheme, absolute: bool) -> &str {
        match (scheme, absolute) {
            (Scheme::Http, false) => &self.http_base,
            (Scheme::Http, true) => &self.http_full,
            (Scheme::Https, false) => &self.https_base,
            (Scheme::Https, true) => &self.https_full,
        }
    }

    /// Same table with `segment` appended to every entry.
    pub(crate) fn with_suffix(&self, segment: &str) -> Self {
        Self {
            http_base: format!("{}{segment}", self.http_base),
            http_full: format!("{}{segment}", self.http_full),
            https_base: format!("{}{segment}", self.https_base),
            https_full: format!("{}{segment}", self.https_full),
        }
    }
}

impl Default for BasePaths {
    fn default() -> Self {
        Self::for_host("localhost")
    }
}

fn or_root(s: String) -> String {
    if s.is_empty() {
        ROOT.to_string()
    } else {
        s
    }
}
