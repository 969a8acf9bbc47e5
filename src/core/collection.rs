//! The option collection - every entry the providers contributed, in order.
//!
//! Membership is fixed once the collection is built. Filtering only flips
//! per-entry visibility flags, and the grouped rendering (one header per
//! provider run) is derived from the visible subsequence on demand.

use crate::core::entry::Entry;
use crate::core::filter;
use crate::error::{LanternError, LanternResult};

struct Slot {
    entry: Entry,
    provider_index: usize,
    visible: bool,
}

/// Ordered sequence of entries with derived visibility flags.
///
/// Providers are enumerated one at a time when the collection is built, so
/// insertion order keeps each provider's entries contiguous.
#[derive(Default)]
pub struct OptionCollection {
    slots: Vec<Slot>,
}

impl OptionCollection {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Append an entry owned by the provider at `provider_index`.
    ///
    /// New entries start visible, consistent with the empty query.
    pub fn push_entry(&mut self, provider_index: usize, entry: Entry) {
        self.slots.push(Slot {
            entry,
            provider_index,
            visible: true,
        });
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Entry at a raw collection index.
    pub fn entry_at(&self, index: usize) -> LanternResult<&Entry> {
        self.slots
            .get(index)
            .map(|slot| &slot.entry)
            .ok_or(LanternError::IndexOutOfRange {
                index,
                len: self.slots.len(),
            })
    }

    /// Index of the provider owning the entry at a raw collection index.
    pub fn provider_index_at(&self, index: usize) -> LanternResult<usize> {
        self.slots
            .get(index)
            .map(|slot| slot.provider_index)
            .ok_or(LanternError::IndexOutOfRange {
                index,
                len: self.slots.len(),
            })
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|slot| slot.visible)
    }

    /// Recompute every visibility flag against `query`.
    ///
    /// Full recomputation per keystroke; titles are re-read through their
    /// live handles here, so entries that rewrote themselves since the last
    /// pass are matched on their current text.
    pub fn apply_query(&mut self, query: &str) {
        let tokens = filter::query_tokens(query);
        for slot in &mut self.slots {
            slot.visible = filter::entry_matches(&slot.entry, &tokens);
        }
    }

    /// Raw indices of the currently visible entries, in insertion order.
    ///
    /// A fresh, restartable view over the flags; nothing is cached.
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.visible)
            .map(|(index, _)| index)
    }

    /// The visible entries themselves, in insertion order.
    pub fn visible_entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.slots
            .iter()
            .filter(|slot| slot.visible)
            .map(|slot| &slot.entry)
    }

    pub fn visible_len(&self) -> usize {
        self.visible_indices().count()
    }

    /// Raw index of the first visible entry, if any entry is visible.
    pub fn first_visible(&self) -> Option<usize> {
        self.visible_indices().next()
    }

    /// Position of a raw index within the visible subsequence.
    ///
    /// The raw index of an entry is stable for the process lifetime, but
    /// its position among visible entries shifts with every filter pass;
    /// deriving the position by scanning keeps the two from drifting apart.
    pub fn visible_position(&self, raw_index: usize) -> Option<usize> {
        self.visible_indices().position(|index| index == raw_index)
    }

    /// Whether a group header belongs above the entry at `visible_index`.
    ///
    /// True exactly when this is the first visible entry, or its provider
    /// name differs from the previous visible entry's. Hidden entries are
    /// skipped by the adjacency check, so the first visible entry of a
    /// group gets its header even when other groups in between were
    /// filtered away. Derived fresh on every call, never retained.
    pub fn needs_header(&self, visible_index: usize) -> bool {
        let mut visible = self.visible_indices();

        let previous = match visible_index.checked_sub(1) {
            None => return visible.next().is_some(),
            Some(previous_position) => visible.nth(previous_position),
        };

        match (previous, visible.next()) {
            (Some(previous), Some(current)) => {
                self.slots[current].entry.provider_name()
                    != self.slots[previous].entry.provider_name()
            }
            _ => false,
        }
    }
}
