//! Cron entry point.
//!
//! Cron always runs from the command line. Over http it only runs when a
//! `cron_key` is configured and the request carries the same key.

use anyhow::Result;

use crate::config::VeloxConfig;
use crate::module::ModuleRegistry;

pub const CRON_ACTION: &str = "cron";

/// How cron was triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CronInvocation {
    Cli,
    /// Over http, with the `cron_key` request parameter if any.
    Http { key: Option<String> },
}

#[derive(Debug, Clone, Default)]
pub struct CronGate {
    cron_key: Option<String>,
}

impl CronGate {
    pub fn new(cron_key: Option<String>) -> Self {
        Self { cron_key }
    }

    pub fn from_config(cfg: &VeloxConfig) -> Self {
        Self::new(cfg.cron_key.clone())
    }

    /// Key comparison is ASCII case-insensitive.
    pub fn authorize(&self, invocation: &CronInvocation) -> bool {
        let provided = match invocation {
            CronInvocation::Cli => return true,
            CronInvocation::Http { key } => key.as_deref(),
        };
        let Some(expected) = self.cron_key.as_deref() else {
            tracing::warn!("cron requested over http but no cron_key is configured");
            return false;
        };
        match provided {
            Some(key) if key.eq_ignore_ascii_case(expected) => true,
            _ => {
                tracing::warn!("cron requested over http with a missing or wrong key");
                false
            }
        }
    }
}

/// Outcome of a cron request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CronOutcome {
    /// The gate refused the invocation.
    Refused,
    /// The cron action ran on this many modules.
    Ran { invoked: usize },
}

/// Runs the cron action on all enabled modules if the invocation is allowed.
pub fn run_cron(
    registry: &ModuleRegistry,
    gate: &CronGate,
    invocation: &CronInvocation,
) -> Result<CronOutcome> {
    if !gate.authorize(invocation) {
        return Ok(CronOutcome::Refused);
    }
    let invoked = registry.invoke_action(CRON_ACTION)?;
    Ok(CronOutcome::Ran { invoked })
}
