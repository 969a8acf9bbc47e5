//! Open-window provider for i3/sway.
//!
//! Queries the window-manager tree through `i3-msg` and focuses the
//! selected window on activation.

use std::process::Command;

use serde::Deserialize;

use crate::core::entry::{Entry, Payload};
use crate::error::{LanternError, LanternResult};
use crate::provider::{spawn_detached, Provider};

const PROVIDER_NAME: &str = "Open Windows";

/// One node of the `i3-msg -t get_tree` output. Only containers that carry
/// a `window_type` are actual windows; everything else is layout structure.
#[derive(Debug, Deserialize)]
struct TreeNode {
    id: i64,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    window_type: Option<String>,
    #[serde(default)]
    nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone)]
struct Window {
    id: i64,
    title: String,
}

pub struct OpenWindowsProvider {
    windows: Vec<Window>,
}

impl OpenWindowsProvider {
    /// Query the current window tree. A window manager that is not running
    /// or answers garbage results in an empty group, not a failed startup.
    pub fn new() -> Self {
        let windows = match query_window_tree() {
            Ok(root) => collect_windows(root),
            Err(e) => {
                log::warn!("window list unavailable: {}", e);
                Vec::new()
            }
        };

        log::info!("found {} open windows", windows.len());
        Self { windows }
    }
}

impl Default for OpenWindowsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for OpenWindowsProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn list_entries(&self) -> Vec<Entry> {
        self.windows
            .iter()
            .map(|window| {
                Entry::new(
                    PROVIDER_NAME,
                    window.title.clone(),
                    "Enter to jump to",
                    Payload::Window(window.id),
                )
            })
            .collect()
    }

    fn activate(&self, payload: &Payload) -> LanternResult<()> {
        let Payload::Window(id) = payload else {
            return Ok(());
        };

        spawn_detached("i3-msg", &[format!("[con_id={}] focus", id)])
    }
}

fn query_window_tree() -> LanternResult<TreeNode> {
    let output = Command::new("i3-msg")
        .args(["-t", "get_tree"])
        .output()
        .map_err(|e| LanternError::WindowQuery(format!("failed to run i3-msg: {}", e)))?;

    if !output.status.success() {
        return Err(LanternError::WindowQuery(format!(
            "i3-msg exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    serde_json::from_slice(&output.stdout)
        .map_err(|e| LanternError::WindowQuery(format!("malformed window tree: {}", e)))
}

/// Flatten the tree into its window nodes, in tree order.
fn collect_windows(node: TreeNode) -> Vec<Window> {
    if node.window_type.is_some() {
        return vec![Window {
            id: node.id,
            title: node.name.unwrap_or_default(),
        }];
    }

    node.nodes.into_iter().flat_map(collect_windows).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_windows_flattens_the_tree() {
        let tree: TreeNode = serde_json::from_str(
            r#"{
                "id": 1,
                "nodes": [
                    {
                        "id": 2,
                        "nodes": [
                            { "id": 3, "name": "editor", "window_type": "normal" },
                            { "id": 4, "name": "terminal", "window_type": "normal" }
                        ]
                    },
                    { "id": 5, "name": "browser", "window_type": "normal" }
                ]
            }"#,
        )
        .unwrap();

        let windows = collect_windows(tree);
        let titles: Vec<&str> = windows.iter().map(|w| w.title.as_str()).collect();

        assert_eq!(titles, vec!["editor", "terminal", "browser"]);
        assert_eq!(windows[0].id, 3);
    }

    #[test]
    fn test_containers_without_window_type_are_structure() {
        let tree: TreeNode = serde_json::from_str(r#"{ "id": 1, "nodes": [] }"#).unwrap();
        assert!(collect_windows(tree).is_empty());
    }

    #[test]
    fn test_window_without_name_gets_empty_title() {
        let tree: TreeNode =
            serde_json::from_str(r#"{ "id": 7, "window_type": "normal" }"#).unwrap();

        let windows = collect_windows(tree);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].title, "");
    }
}
