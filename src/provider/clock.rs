//! Clock provider.
//!
//! Two entries, time and date, refreshed once a second by a provider-owned
//! tick thread.

use std::thread;
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::core::entry::{Entry, LiveText, Payload};
use crate::error::LanternResult;
use crate::provider::Provider;

const PROVIDER_NAME: &str = "Clock";

pub struct ClockProvider {
    entries: Vec<Entry>,
}

impl ClockProvider {
    pub fn new() -> Self {
        let now = Local::now();
        let time_title = LiveText::new(time_text(now));
        let date_title = LiveText::new(date_text(now));

        let entries = vec![
            Entry::with_live_title(PROVIDER_NAME, time_title.clone(), "", Payload::None),
            Entry::with_live_title(PROVIDER_NAME, date_title.clone(), "", Payload::None),
        ];

        thread::spawn(move || loop {
            thread::sleep(Duration::from_secs(1));
            let now = Local::now();
            time_title.set(time_text(now));
            date_title.set(date_text(now));
        });

        Self { entries }
    }
}

impl Default for ClockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for ClockProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn list_entries(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    fn activate(&self, _payload: &Payload) -> LanternResult<()> {
        // The clock is display-only.
        Ok(())
    }
}

fn time_text(now: DateTime<Local>) -> String {
    now.format("%H:%M:%S").to_string()
}

fn date_text(now: DateTime<Local>) -> String {
    now.format("%A, %-d. %B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_time_and_date_formatting() {
        let moment = Local.with_ymd_and_hms(2024, 1, 1, 9, 5, 7).unwrap();
        assert_eq!(time_text(moment), "09:05:07");
        assert_eq!(date_text(moment), "Monday, 1. January 2024");
    }

    #[test]
    fn test_provider_contributes_time_and_date() {
        let provider = ClockProvider::new();
        let entries = provider.list_entries();

        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.provider_name() == "Clock"));
        assert!(entries.iter().all(|e| e.payload() == &Payload::None));
    }
}
