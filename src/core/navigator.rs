//! Keyboard navigation over the visible subsequence.
//!
//! The selection is stored as a raw collection index (entry identity is
//! positional and stable), but every movement is computed against the
//! visible subsequence, so hidden entries are skipped and the selection can
//! never land on one. Selection changes are plain state updates; the query
//! input keeps keyboard focus and frontends only highlight the row.

use crate::core::collection::OptionCollection;

/// Tracks which entry the keyboard currently targets.
#[derive(Debug, Default)]
pub struct Navigator {
    selected: Option<usize>,
}

impl Navigator {
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Raw collection index of the selected entry, if any is selected.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Anchor the selection on the first visible entry.
    ///
    /// Called at startup and after every filter pass. With nothing visible
    /// the selection becomes empty.
    pub fn select_first_visible(&mut self, collection: &OptionCollection) {
        self.selected = collection.first_visible();
    }

    /// Move the selection one visible entry up.
    ///
    /// Without a selection this anchors on the first visible entry; at the
    /// top of the list it stays put. No wraparound.
    pub fn select_previous(&mut self, collection: &OptionCollection) {
        let Some(position) = self.selected_visible_position(collection) else {
            self.select_first_visible(collection);
            return;
        };

        if position == 0 {
            return;
        }
        self.selected = collection.visible_indices().nth(position - 1);
    }

    /// Move the selection one visible entry down.
    ///
    /// Without a selection this anchors on the first visible entry; at the
    /// bottom of the list it stays put. No wraparound.
    pub fn select_next(&mut self, collection: &OptionCollection) {
        let Some(position) = self.selected_visible_position(collection) else {
            self.select_first_visible(collection);
            return;
        };

        if let Some(next) = collection.visible_indices().nth(position + 1) {
            self.selected = Some(next);
        }
    }

    /// Position of the selected entry within the visible subsequence.
    ///
    /// `None` when nothing is selected or the selected entry is currently
    /// hidden (the latter only occurs transiently, between a filter pass
    /// and the re-anchoring that follows it).
    pub fn selected_visible_position(&self, collection: &OptionCollection) -> Option<usize> {
        self.selected
            .and_then(|raw_index| collection.visible_position(raw_index))
    }
}
