//! Entry providers and their registry.
//!
//! A provider is a pluggable source of entries with its own activation
//! behavior. Providers are enumerated once at startup, in a fixed order, to
//! build the option collection; afterwards the engine only calls back into
//! them to activate one of their own entries.

pub mod applications;
pub mod clock;
pub mod git_repositories;
pub mod open_windows;
pub mod system_monitor;

use std::process::Command;

use crate::config::Config;
use crate::core::collection::OptionCollection;
use crate::core::entry::{Entry, Payload};
use crate::error::{LanternError, LanternResult};

pub use applications::ApplicationsProvider;
pub use clock::ClockProvider;
pub use git_repositories::GitRepositoriesProvider;
pub use open_windows::OpenWindowsProvider;
pub use system_monitor::SystemMonitorProvider;

/// A pluggable source of entries.
pub trait Provider {
    /// Display label, shown as the group header and matched by the filter.
    fn name(&self) -> &str;

    /// The entries this provider contributes, in display order.
    ///
    /// Called once while the option collection is built; any expensive
    /// discovery work has already happened in the provider's constructor.
    fn list_entries(&self) -> Vec<Entry>;

    /// Act on one of this provider's own entries.
    ///
    /// The payload is the one this provider attached to the entry; nothing
    /// else ever constructs or inspects it. Activation is fire-and-forget:
    /// callers log failures but do not retry or surface them in the list.
    fn activate(&self, payload: &Payload) -> LanternResult<()>;
}

/// The ordered list of all registered providers.
#[derive(Default)]
pub struct Registry {
    providers: Vec<Box<dyn Provider>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Build the registry from configuration, in the fixed display order:
    /// clock, system monitor, open windows, applications, git repositories.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::new();

        if config.providers.clock {
            registry.register(Box::new(ClockProvider::new()));
        }
        if config.providers.system_monitor {
            registry.register(Box::new(SystemMonitorProvider::new()));
        }
        if config.providers.open_windows {
            registry.register(Box::new(OpenWindowsProvider::new()));
        }
        if config.providers.applications {
            registry.register(Box::new(ApplicationsProvider::new()));
        }
        if config.providers.git_repositories {
            match config.git_repositories.resolved_root() {
                Some(root) => registry.register(Box::new(GitRepositoriesProvider::new(
                    root,
                    config.git_repositories.editor.clone(),
                ))),
                None => log::warn!("git repositories provider disabled: no scan root available"),
            }
        }

        registry
    }

    pub fn register(&mut self, provider: Box<dyn Provider>) {
        self.providers.push(provider);
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn provider(&self, index: usize) -> Option<&dyn Provider> {
        self.providers.get(index).map(Box::as_ref)
    }

    /// Materialize the option collection by exhausting each provider in
    /// registration order, keeping every provider's entries contiguous.
    pub fn build_collection(&self) -> OptionCollection {
        let mut collection = OptionCollection::new();
        for (provider_index, provider) in self.providers.iter().enumerate() {
            let entries = provider.list_entries();
            log::debug!("provider '{}' contributed {} entries", provider.name(), entries.len());
            for entry in entries {
                collection.push_entry(provider_index, entry);
            }
        }
        collection
    }
}

/// Spawn a command without waiting for it.
///
/// Activation hands off to external processes (applications, the editor,
/// the window manager); the launcher does not observe their outcome.
pub(crate) fn spawn_detached(program: &str, args: &[String]) -> LanternResult<()> {
    Command::new(program)
        .args(args)
        .spawn()
        .map(|_| ())
        .map_err(|e| LanternError::Launch(format!("failed to run {}: {}", program, e)))
}
