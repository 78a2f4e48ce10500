//! CLI for the Velox framework.

mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use velox_core::config::{self, VeloxConfig};
use velox_core::theme;
use velox_core::url::{GenerationOptions, RequestInfo, Scheme, SiteConfiguration};

use commands::{
    run_cron, run_current, run_current_path, run_settings, run_theme_url, run_url,
};

/// Top-level CLI for the Velox framework.
#[derive(Debug, Parser)]
#[command(name = "velox")]
#[command(about = "Velox: settings, links and cron for a Velox site", long_about = None)]
pub struct Cli {
    /// Settings file (default: ~/.config/velox/settings.toml).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub request: RequestArgs,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Describes the request links are generated for.
#[derive(Debug, Args)]
pub struct RequestArgs {
    /// Request host, with port if not the default.
    #[arg(long, global = true, default_value = "localhost")]
    pub host: String,
    /// Treat the request as arriving over https.
    #[arg(long, global = true)]
    pub secure: bool,
    /// Directory of the front controller under the web root.
    #[arg(long, global = true, default_value = "/")]
    pub base_dir: String,
    /// Requested application path.
    #[arg(long, global = true, default_value = "")]
    pub request_path: String,
    /// Application root used to locate themes (default: current directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub app_root: Option<PathBuf>,
}

impl RequestArgs {
    fn request_info(&self) -> RequestInfo {
        RequestInfo {
            host: self.host.clone(),
            secure: self.secure,
            base_dir: self.base_dir.clone(),
            path: self.request_path.clone(),
        }
    }
}

/// Options shared by the link-generating commands.
#[derive(Debug, Args)]
pub struct LinkArgs {
    /// Generate an absolute url (scheme and host).
    #[arg(long)]
    pub absolute: bool,
    /// Fragment to append, without the `#`.
    #[arg(long)]
    pub fragment: Option<String>,
    /// `http` or `https` (default: follows --secure).
    #[arg(long)]
    pub scheme: Option<Scheme>,
}

impl LinkArgs {
    fn options(&self) -> GenerationOptions {
        GenerationOptions {
            absolute: self.absolute,
            fragment: self.fragment.clone(),
            scheme: self.scheme,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the url for an application path (front page when omitted).
    Url {
        path: Option<String>,
        #[command(flatten)]
        link: LinkArgs,
    },

    /// Print the url for a path inside the active theme.
    ThemeUrl {
        path: Option<String>,
        #[command(flatten)]
        link: LinkArgs,
    },

    /// Print the url of the current request path (absolute unless --relative).
    Current {
        #[arg(long)]
        relative: bool,
        #[arg(long)]
        fragment: Option<String>,
        #[arg(long)]
        scheme: Option<Scheme>,
    },

    /// Print the current request path, one segment, or all segments.
    CurrentPath {
        /// Zero-based segment index.
        #[arg(long, conflicts_with = "segments")]
        index: Option<usize>,
        /// Print each segment on its own line.
        #[arg(long)]
        segments: bool,
    },

    /// Print the settings object used by the front-end url helper as JSON.
    Settings,

    /// Run the cron action on all enabled modules.
    Cron {
        /// Simulate an http invocation (requires a matching --key).
        #[arg(long)]
        http: bool,
        /// Cron key supplied with the http invocation.
        #[arg(long, requires = "http")]
        key: Option<String>,
    },
}

impl Cli {
    /// `--config` if given, otherwise the default settings file (created on first use).
    pub fn load_config(&self) -> Result<VeloxConfig> {
        match &self.config {
            Some(path) => config::load_from(path),
            None => config::load_or_init(),
        }
    }

    pub fn run(self, cfg: &VeloxConfig) -> Result<()> {
        tracing::debug!("loaded settings: {:?}", cfg);
        let site = bootstrap_site(cfg, &self.request)?;

        match self.command {
            CliCommand::Url { path, link } => run_url(&site, path.as_deref(), &link.options()),
            CliCommand::ThemeUrl { path, link } => {
                run_theme_url(&site, path.as_deref(), &link.options())
            }
            CliCommand::Current {
                relative,
                fragment,
                scheme,
            } => {
                let options = GenerationOptions {
                    absolute: !relative,
                    fragment,
                    scheme,
                };
                run_current(&site, &options)
            }
            CliCommand::CurrentPath { index, segments } => {
                run_current_path(&site, index, segments)
            }
            CliCommand::Settings => run_settings(cfg, &site)?,
            CliCommand::Cron { http, key } => run_cron(cfg, http, key)?,
        }

        Ok(())
    }
}

fn bootstrap_site(cfg: &VeloxConfig, request: &RequestArgs) -> Result<SiteConfiguration> {
    let app_root = match &request.app_root {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("determine application root")?,
    };
    let theme_path = theme::resolve_theme_path(&app_root, &cfg.theme);
    SiteConfiguration::bootstrap(cfg, &request.request_info(), theme_path)
        .context("resolve site configuration")
}

#[cfg(test)]
mod tests;
