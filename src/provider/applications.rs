//! Installed-application provider.
//!
//! Scans the XDG data directories for `.desktop` files and launches the
//! selected application by its `Exec` line.

use std::collections::HashMap;
use std::path::PathBuf;

use freedesktop_desktop_entry::DesktopEntry;
use walkdir::WalkDir;

use crate::core::entry::{Entry, Payload};
use crate::error::{LanternError, LanternResult};
use crate::provider::{spawn_detached, Provider};

const PROVIDER_NAME: &str = "Applications";

#[derive(Debug, Clone)]
struct Application {
    name: String,
    exec: String,
}

pub struct ApplicationsProvider {
    applications: Vec<Application>,
}

impl ApplicationsProvider {
    /// Scan the standard application directories.
    pub fn new() -> Self {
        Self::with_scan_dirs(default_scan_dirs())
    }

    fn with_scan_dirs(dirs: Vec<PathBuf>) -> Self {
        // Deduplicate by name; a desktop file found later shadows an
        // earlier one with the same name.
        let mut by_name: HashMap<String, Application> = HashMap::new();

        for dir in dirs {
            if !dir.exists() {
                continue;
            }
            for entry in WalkDir::new(&dir)
                .max_depth(2)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "desktop") {
                    if let Some(application) = parse_desktop_file(path.to_path_buf()) {
                        by_name.insert(application.name.clone(), application);
                    }
                }
            }
        }

        let mut applications: Vec<Application> = by_name.into_values().collect();
        applications.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

        log::info!("indexed {} applications", applications.len());
        Self { applications }
    }
}

impl Default for ApplicationsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for ApplicationsProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn list_entries(&self) -> Vec<Entry> {
        self.applications
            .iter()
            .map(|application| {
                Entry::new(
                    PROVIDER_NAME,
                    application.name.clone(),
                    "Enter to launch",
                    Payload::Application {
                        exec: application.exec.clone(),
                        name: application.name.clone(),
                    },
                )
            })
            .collect()
    }

    fn activate(&self, payload: &Payload) -> LanternResult<()> {
        let Payload::Application { exec, name } = payload else {
            return Ok(());
        };

        let exec = strip_field_codes(exec);
        let mut parts = exec.split_whitespace();
        let Some(program) = parts.next() else {
            return Err(LanternError::Launch(format!("empty exec line for {}", name)));
        };
        let args: Vec<String> = parts.map(str::to_string).collect();

        spawn_detached(program, &args)
    }
}

/// Standard XDG application directories, plus flatpak and snap exports.
fn default_scan_dirs() -> Vec<PathBuf> {
    let mut dirs_to_scan: Vec<PathBuf> = vec![
        PathBuf::from("/usr/share/applications"),
        PathBuf::from("/usr/local/share/applications"),
    ];

    if let Some(data_home) = dirs::data_local_dir() {
        dirs_to_scan.push(data_home.join("applications"));
    }

    if let Some(home) = dirs::home_dir() {
        dirs_to_scan.push(home.join(".local/share/flatpak/exports/share/applications"));
    }

    dirs_to_scan.push(PathBuf::from("/var/lib/snapd/desktop/applications"));

    dirs_to_scan
}

fn parse_desktop_file(path: PathBuf) -> Option<Application> {
    let content = std::fs::read_to_string(&path).ok()?;
    let entry = DesktopEntry::from_str(&path, &content, Some(&["en"])).ok()?;

    if entry.no_display() || entry.hidden() {
        return None;
    }

    // Empty locale list selects the default (untranslated) values.
    let locales: &[&str] = &[];
    let name = entry.name(locales)?.to_string();
    let exec = entry.exec()?.to_string();

    Some(Application { name, exec })
}

/// Remove desktop-entry field codes (%f, %u, ...) from an exec line.
fn strip_field_codes(exec: &str) -> String {
    exec.replace("%f", "")
        .replace("%F", "")
        .replace("%u", "")
        .replace("%U", "")
        .replace("%i", "")
        .replace("%c", "")
        .replace("%k", "")
}
