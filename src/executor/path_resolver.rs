use std::path::{Path, PathBuf};

pub const DEFAULT_SEARCH_DIRS: &[&str] = &["/bin", "/usr/bin"];

/// Maps a program name to the file to invoke, probing directories in order.
#[derive(Debug, Clone)]
pub struct PathResolver {
    dirs: Vec<PathBuf>,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DIRS.iter().map(PathBuf::from).collect())
    }
}

impl PathResolver {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        PathResolver { dirs }
    }

    pub fn resolve(&self, command: &str) -> Option<PathBuf> {
        // Paths are taken verbatim; the invocation reports whether they exist.
        if command.contains('/') {
            return Some(PathBuf::from(command));
        }

        self.dirs
            .iter()
            .map(|dir| dir.join(command))
            .find(|candidate| is_regular_file(candidate))
    }
}

fn is_regular_file(path: &Path) -> bool {
    path.metadata().map(|m| m.is_file()).unwrap_or(false)
}
