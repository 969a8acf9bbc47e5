//! System statistics provider.
//!
//! Contributes CPU, memory and (when present) battery entries whose titles
//! refresh on a background tick. The entries themselves never change; only
//! the text behind their title handles does.

use std::thread;
use std::time::Duration;

use sysinfo::System;

use crate::core::entry::{Entry, LiveText, Payload};
use crate::error::LanternResult;
use crate::provider::Provider;

const PROVIDER_NAME: &str = "System Monitor";
const REFRESH_INTERVAL: Duration = Duration::from_secs(3);

pub struct SystemMonitorProvider {
    entries: Vec<Entry>,
}

impl SystemMonitorProvider {
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_cpu();
        system.refresh_memory();

        let cpu_title = LiveText::new(cpu_text(&system));
        let memory_title = LiveText::new(memory_text(&system));

        let mut entries = vec![
            Entry::with_live_title(PROVIDER_NAME, cpu_title.clone(), "", Payload::None),
            Entry::with_live_title(PROVIDER_NAME, memory_title.clone(), "", Payload::None),
        ];

        // The battery entry only exists on machines that have one.
        let battery_title = first_battery().map(|battery| LiveText::new(battery_text(&battery)));
        if let Some(title) = &battery_title {
            entries.push(Entry::with_live_title(
                PROVIDER_NAME,
                title.clone(),
                "",
                Payload::None,
            ));
        }

        thread::spawn(move || loop {
            thread::sleep(REFRESH_INTERVAL);

            system.refresh_cpu();
            system.refresh_memory();
            cpu_title.set(cpu_text(&system));
            memory_title.set(memory_text(&system));

            if let Some(title) = &battery_title {
                if let Some(battery) = first_battery() {
                    title.set(battery_text(&battery));
                }
            }
        });

        Self { entries }
    }
}

impl Default for SystemMonitorProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for SystemMonitorProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn list_entries(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    fn activate(&self, _payload: &Payload) -> LanternResult<()> {
        // Statistics are display-only.
        Ok(())
    }
}

fn cpu_text(system: &System) -> String {
    format!("CPU {}%", system.global_cpu_info().cpu_usage() as i32)
}

fn memory_text(system: &System) -> String {
    format!(
        "Memory {}%",
        memory_percent(system.used_memory(), system.total_memory())
    )
}

fn memory_percent(used: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    used * 100 / total
}

fn battery_text(battery: &battery::Battery) -> String {
    let charge = battery
        .state_of_charge()
        .get::<battery::units::ratio::percent>();
    format!("Battery {:.0}% {}", charge, battery.state())
}

fn first_battery() -> Option<battery::Battery> {
    let manager = match battery::Manager::new() {
        Ok(manager) => manager,
        Err(e) => {
            log::debug!("battery manager unavailable: {}", e);
            return None;
        }
    };
    manager.batteries().ok()?.next()?.ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_percent() {
        assert_eq!(memory_percent(0, 0), 0);
        assert_eq!(memory_percent(1, 4), 25);
        assert_eq!(memory_percent(4, 4), 100);
    }

    #[test]
    fn test_cpu_and_memory_entries_always_present() {
        let provider = SystemMonitorProvider::new();
        let entries = provider.list_entries();

        assert!(entries.len() >= 2);
        assert!(entries[0].title().starts_with("CPU "));
        assert!(entries[1].title().starts_with("Memory "));
        assert!(entries.iter().all(|e| e.provider_name() == "System Monitor"));
    }
}
