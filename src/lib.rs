//! Lantern - keyboard-driven desktop quick-launcher.
//!
//! Lantern aggregates entries from pluggable providers (installed
//! applications, git repositories, open windows, system statistics, clock)
//! into one grouped, filterable option list with a keyboard-navigable
//! selection.
//!
//! # Architecture
//!
//! - [`config`] - Configuration loading and management
//! - [`core`] - The option collection, filter, navigation and activation
//!   engine
//! - [`provider`] - Entry providers and their registry
//!
//! The crate is frontend-agnostic: a rendering layer consumes the visible
//! entries, the per-row header flags and the current selection, and calls
//! back into [`core::Engine`] on query changes, arrow keys and Enter. The
//! bundled binary is a minimal terminal frontend doing exactly that.
//!
//! # Example
//!
//! ```no_run
//! use lantern::{Config, Engine, Registry};
//!
//! let config = Config::load();
//! let mut engine = Engine::new(Registry::from_config(&config));
//!
//! engine.set_query("fire");
//! for (position, entry) in engine.collection().visible_entries().enumerate() {
//!     if engine.collection().needs_header(position) {
//!         println!("-- {}", entry.provider_name());
//!     }
//!     println!("{}", entry.title());
//! }
//! engine.activate().ok();
//! ```

pub mod config;
pub mod core;
pub mod provider;

mod error;

// Re-export commonly used types for convenience
pub use config::Config;
pub use core::{Engine, Entry, LiveText, OptionCollection, Payload};
pub use error::{LanternError, LanternResult};
pub use provider::{Provider, Registry};
