pub mod config;
pub mod logging;

pub mod cron;
pub mod module;
pub mod theme;
pub mod url;
