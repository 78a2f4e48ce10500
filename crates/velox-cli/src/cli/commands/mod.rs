//! CLI command handlers, one per file.

mod cron;
mod current;
mod current_path;
mod settings;
mod theme_url;
mod url;

pub use cron::run_cron;
pub use current::run_current;
pub use current_path::run_current_path;
pub use settings::run_settings;
pub use theme_url::run_theme_url;
pub use url::run_url;
