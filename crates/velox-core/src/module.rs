//! Module hooks.
//!
//! Modules register once; the `modules` list in the settings decides which of
//! them run and in what order when an action is dispatched.

use anyhow::{bail, Context, Result};

/// Implemented by optional modules (e.g. analytics, admin).
pub trait Module {
    fn name(&self) -> &str;

    /// Called for every dispatched action. Actions a module does not handle are ignored.
    fn invoke(&self, action: &str) -> Result<()> {
        let _ = action;
        Ok(())
    }
}

pub struct ModuleRegistry {
    enabled: Vec<String>,
    modules: Vec<Box<dyn Module>>,
}

impl ModuleRegistry {
    pub fn new(enabled: &[String]) -> Self {
        Self {
            enabled: enabled.to_vec(),
            modules: Vec::new(),
        }
    }

    pub fn register(&mut self, module: Box<dyn Module>) -> Result<()> {
        if self.find(module.name()).is_some() {
            bail!("module {} is already registered", module.name());
        }
        tracing::debug!(
            module = module.name(),
            enabled = self.is_enabled(module.name()),
            "registered module"
        );
        self.modules.push(module);
        Ok(())
    }

    fn is_enabled(&self, name: &str) -> bool {
        self.enabled.iter().any(|n| n == name)
    }

    /// Registered modules that are enabled, in settings order.
    pub fn enabled_modules(&self) -> impl Iterator<Item = &dyn Module> + '_ {
        self.enabled.iter().filter_map(|name| self.find(name))
    }

    /// Invokes `action` on every enabled module, stopping at the first failure.
    /// Returns how many modules ran.
    pub fn invoke_action(&self, action: &str) -> Result<usize> {
        for name in &self.enabled {
            if self.find(name).is_none() {
                tracing::warn!(module = %name, "enabled module is not registered; skipping");
            }
        }

        let mut invoked = 0;
        for module in self.enabled_modules() {
            tracing::debug!(module = module.name(), action, "invoking module action");
            module
                .invoke(action)
                .with_context(|| format!("module {} failed on action {action}", module.name()))?;
            invoked += 1;
        }
        tracing::info!(action, invoked, "action dispatched");
        Ok(invoked)
    }

    fn find(&self, name: &str) -> Option<&dyn Module> {
        self.modules
            .iter()
            .find(|m| m.name() == name)
            .map(|m| &**m)
    }
}
