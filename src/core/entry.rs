//! Entry model - the unit every provider contributes to the option list.

use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// A title that a provider may rewrite after the entry has been built.
///
/// Clock and system-statistic entries refresh their text on a background
/// tick; everything that displays or matches a title reads it through this
/// handle at the moment of use instead of keeping a copy.
#[derive(Debug, Clone)]
pub struct LiveText(Arc<RwLock<String>>);

impl LiveText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(Arc::new(RwLock::new(text.into())))
    }

    /// Current text. A poisoned lock yields the last written value.
    pub fn get(&self) -> String {
        match self.0.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn set(&self, text: impl Into<String>) {
        match self.0.write() {
            Ok(mut guard) => *guard = text.into(),
            Err(poisoned) => *poisoned.into_inner() = text.into(),
        }
    }
}

impl fmt::Display for LiveText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Data a provider needs to act on one of its own entries.
///
/// The option list carries payloads from construction to activation without
/// looking inside; only the provider that created a payload interprets it.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Exec line of a desktop entry, field codes still embedded.
    Application { exec: String, name: String },
    /// Absolute path of a git repository working directory.
    Repository(PathBuf),
    /// Window-manager container id.
    Window(i64),
    /// Entries with nothing to activate (clock, statistics).
    None,
}

/// One searchable, activatable item contributed by exactly one provider.
///
/// Entries are never mutated or removed after the collection is built; the
/// only thing that changes is whether filtering currently hides them, and
/// (for live entries) the text behind the title handle.
#[derive(Debug, Clone)]
pub struct Entry {
    provider_name: String,
    title: LiveText,
    action_hint: String,
    payload: Payload,
}

impl Entry {
    pub fn new(
        provider_name: impl Into<String>,
        title: impl Into<String>,
        action_hint: impl Into<String>,
        payload: Payload,
    ) -> Self {
        Self {
            provider_name: provider_name.into(),
            title: LiveText::new(title),
            action_hint: action_hint.into(),
            payload,
        }
    }

    /// An entry whose title can be rewritten later through `handle`.
    pub fn with_live_title(
        provider_name: impl Into<String>,
        handle: LiveText,
        action_hint: impl Into<String>,
        payload: Payload,
    ) -> Self {
        Self {
            provider_name: provider_name.into(),
            title: handle,
            action_hint: action_hint.into(),
            payload,
        }
    }

    /// Display label of the owning provider, also matched by the filter.
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    /// Primary display text, read fresh on every call.
    pub fn title(&self) -> String {
        self.title.get()
    }

    /// Secondary display text (e.g. "Enter to launch"); never matched.
    pub fn action_hint(&self) -> &str {
        &self.action_hint
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_text_updates_are_visible() {
        let handle = LiveText::new("12:00:00");
        let entry = Entry::with_live_title("Clock", handle.clone(), "", Payload::None);

        assert_eq!(entry.title(), "12:00:00");
        handle.set("12:00:01");
        assert_eq!(entry.title(), "12:00:01");
    }

    #[test]
    fn test_static_entry_fields() {
        let entry = Entry::new(
            "Applications",
            "Firefox",
            "Enter to launch",
            Payload::Application {
                exec: "firefox %u".into(),
                name: "Firefox".into(),
            },
        );

        assert_eq!(entry.provider_name(), "Applications");
        assert_eq!(entry.title(), "Firefox");
        assert_eq!(entry.action_hint(), "Enter to launch");
    }
}
