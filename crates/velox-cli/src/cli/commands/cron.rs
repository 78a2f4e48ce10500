//! `velox cron` – run the cron action on enabled modules.

use anyhow::Result;
use velox_core::config::VeloxConfig;
use velox_core::cron::{self, CronGate, CronInvocation, CronOutcome};
use velox_core::module::ModuleRegistry;

pub fn run_cron(cfg: &VeloxConfig, http: bool, key: Option<String>) -> Result<()> {
    let invocation = if http {
        CronInvocation::Http { key }
    } else {
        CronInvocation::Cli
    };
    let registry = ModuleRegistry::new(&cfg.modules);
    let gate = CronGate::from_config(cfg);

    println!("{}", cron_report(&registry, &gate, &invocation)?);
    Ok(())
}

/// One-line summary of a cron run for the terminal.
pub(crate) fn cron_report(
    registry: &ModuleRegistry,
    gate: &CronGate,
    invocation: &CronInvocation,
) -> Result<String> {
    Ok(match cron::run_cron(registry, gate, invocation)? {
        CronOutcome::Refused => "cron refused".to_string(),
        CronOutcome::Ran { invoked: 0 } => {
            "cron ran no modules (no enabled module is registered)".to_string()
        }
        CronOutcome::Ran { invoked } => format!("cron ran {invoked} module(s)"),
    })
}
