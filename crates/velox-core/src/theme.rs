//! Active theme lookup.
//!
//! Application themes shadow framework themes of the same name.

use std::path::Path;

pub const APPLICATION_THEMES: &str = "application/themes";
pub const FRAMEWORK_THEMES: &str = "framework/themes";

/// Path of `theme` relative to `app_root`, in url form (`/` separated).
pub fn resolve_theme_path(app_root: &Path, theme: &str) -> String {
    let application = format!("{APPLICATION_THEMES}/{theme}");
    if app_root.join(&application).is_dir() {
        tracing::debug!(theme, "using application theme");
        return application;
    }
    format!("{FRAMEWORK_THEMES}/{theme}")
}
