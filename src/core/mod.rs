//! Core engine: option aggregation, filtering and keyboard navigation.

pub mod collection;
pub mod engine;
pub mod entry;
pub mod filter;
pub mod navigator;

pub use collection::OptionCollection;
pub use engine::Engine;
pub use entry::{Entry, LiveText, Payload};
pub use navigator::Navigator;
