//! Git repository provider.
//!
//! Walks a configured root directory for git working copies and opens the
//! selected one in the configured editor.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::core::entry::{Entry, Payload};
use crate::error::{LanternError, LanternResult};
use crate::provider::{spawn_detached, Provider};

const PROVIDER_NAME: &str = "Git Repositories";

#[derive(Debug, Clone)]
struct Repository {
    path: PathBuf,
    title: String,
}

pub struct GitRepositoriesProvider {
    editor: String,
    repositories: Vec<Repository>,
}

impl GitRepositoriesProvider {
    /// Scan `root` for repositories. The root comes from configuration;
    /// the provider itself never consults the environment for it.
    pub fn new(root: PathBuf, editor: String) -> Self {
        let home = dirs::home_dir();
        let repositories: Vec<Repository> = scan_repositories(&root)
            .into_iter()
            .map(|path| {
                let title = display_title(&path, home.as_deref());
                Repository { path, title }
            })
            .collect();

        log::info!(
            "found {} git repositories under {}",
            repositories.len(),
            root.display()
        );

        Self {
            editor,
            repositories,
        }
    }
}

impl Provider for GitRepositoriesProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn list_entries(&self) -> Vec<Entry> {
        self.repositories
            .iter()
            .map(|repository| {
                Entry::new(
                    PROVIDER_NAME,
                    repository.title.clone(),
                    "Enter to open",
                    Payload::Repository(repository.path.clone()),
                )
            })
            .collect()
    }

    fn activate(&self, payload: &Payload) -> LanternResult<()> {
        let Payload::Repository(path) = payload else {
            return Ok(());
        };

        let mut parts = self.editor.split_whitespace();
        let Some(program) = parts.next() else {
            return Err(LanternError::Launch("empty editor command".to_string()));
        };
        let mut args: Vec<String> = parts.map(str::to_string).collect();
        args.push(path.to_string_lossy().into_owned());

        spawn_detached(program, &args)
    }
}

/// Directories under `root` containing a `.git` subdirectory.
///
/// Hidden directories are pruned, and the walk does not descend into a
/// repository once found, so nested working copies stay out of the list.
fn scan_repositories(root: &Path) -> Vec<PathBuf> {
    let mut repositories = Vec::new();

    let mut walker = WalkDir::new(root).into_iter();
    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("skipping unreadable path: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        if entry.depth() > 0 && is_hidden(entry.file_name()) {
            walker.skip_current_dir();
            continue;
        }

        if entry.path().join(".git").is_dir() {
            repositories.push(entry.path().to_path_buf());
            walker.skip_current_dir();
        }
    }

    repositories
}

fn is_hidden(file_name: &std::ffi::OsStr) -> bool {
    file_name.to_string_lossy().starts_with('.')
}

/// Path as displayed in the list, with the home prefix shortened to `~`.
fn display_title(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home {
        if let Ok(relative) = path.strip_prefix(home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn make_repo(root: &Path, relative: &str) {
        let path = root.join(relative).join(".git");
        fs::create_dir_all(path).unwrap();
    }

    #[test]
    fn test_scan_finds_repositories() {
        let dir = tempfile::tempdir().unwrap();
        make_repo(dir.path(), "project");
        fs::create_dir_all(dir.path().join("not-a-repo")).unwrap();

        let found = scan_repositories(dir.path());
        assert_eq!(found, vec![dir.path().join("project")]);
    }

    #[test]
    fn test_scan_prunes_hidden_directories() {
        let dir = tempfile::tempdir().unwrap();
        make_repo(dir.path(), ".cache/checkout");
        make_repo(dir.path(), "visible");

        let found = scan_repositories(dir.path());
        assert_eq!(found, vec![dir.path().join("visible")]);
    }

    #[test]
    fn test_scan_does_not_descend_into_repositories() {
        let dir = tempfile::tempdir().unwrap();
        make_repo(dir.path(), "outer");
        make_repo(dir.path(), "outer/vendored");

        let found = scan_repositories(dir.path());
        assert_eq!(found, vec![dir.path().join("outer")]);
    }

    #[test]
    fn test_display_title_shortens_home() {
        let home = PathBuf::from("/home/user");
        assert_eq!(
            display_title(Path::new("/home/user/src/lantern"), Some(&home)),
            "~/src/lantern"
        );
        assert_eq!(
            display_title(Path::new("/srv/checkout"), Some(&home)),
            "/srv/checkout"
        );
        assert_eq!(display_title(Path::new("/srv/checkout"), None), "/srv/checkout");
    }

    #[test]
    fn test_entries_carry_repository_payload() {
        let dir = tempfile::tempdir().unwrap();
        make_repo(dir.path(), "project");

        let provider = GitRepositoriesProvider::new(dir.path().to_path_buf(), "code".into());
        let entries = provider.list_entries();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action_hint(), "Enter to open");
        assert_eq!(
            entries[0].payload(),
            &Payload::Repository(dir.path().join("project"))
        );
    }
}
