//! The launcher engine - one facade over registry, collection and
//! navigation.
//!
//! Frontends call in on discrete input events: a changed query re-filters
//! the collection and re-anchors the selection, arrow keys move the
//! selection among visible entries, and Enter dispatches activation to the
//! provider owning the selected entry. One event runs to completion before
//! the next is accepted; nothing here blocks.

use crate::core::collection::OptionCollection;
use crate::core::navigator::Navigator;
use crate::error::LanternResult;
use crate::provider::Registry;

pub struct Engine {
    registry: Registry,
    collection: OptionCollection,
    navigator: Navigator,
    query: String,
}

impl Engine {
    /// Build the option collection from the registry and select the first
    /// entry. Providers have finished their discovery work by this point.
    pub fn new(registry: Registry) -> Self {
        let collection = registry.build_collection();
        let mut navigator = Navigator::new();
        navigator.select_first_visible(&collection);

        log::info!(
            "engine ready: {} providers, {} entries",
            registry.len(),
            collection.len()
        );

        Self {
            registry,
            collection,
            navigator,
            query: String::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn collection(&self) -> &OptionCollection {
        &self.collection
    }

    /// Raw collection index of the selected entry.
    pub fn selection(&self) -> Option<usize> {
        self.navigator.selected()
    }

    /// Position of the selection within the visible subsequence, for
    /// frontends that highlight by row.
    pub fn selection_visible_position(&self) -> Option<usize> {
        self.navigator.selected_visible_position(&self.collection)
    }

    /// Re-filter against a new query and re-anchor the selection on the
    /// first visible entry. Runs on every keystroke.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.collection.apply_query(query);
        self.navigator.select_first_visible(&self.collection);
    }

    pub fn select_next(&mut self) {
        self.navigator.select_next(&self.collection);
    }

    pub fn select_previous(&mut self) {
        self.navigator.select_previous(&self.collection);
    }

    /// Activate the selected entry through its owning provider.
    ///
    /// With nothing selected (empty visible set) this is a no-op, not an
    /// error: Enter on an empty result list does nothing.
    pub fn activate(&self) -> LanternResult<()> {
        let Some(raw_index) = self.navigator.selected() else {
            return Ok(());
        };

        let provider_index = self.collection.provider_index_at(raw_index)?;
        let entry = self.collection.entry_at(raw_index)?;

        match self.registry.provider(provider_index) {
            Some(provider) => {
                log::info!("activating '{}' via {}", entry.title(), provider.name());
                provider.activate(entry.payload())
            }
            None => Ok(()),
        }
    }
}
