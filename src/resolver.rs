//! Locates a lexeme name definition file by probing a fixed search order.
//!
//! Priority, highest first:
//!   1. the directory of the input file being extracted
//!   2. the process current directory
//!   3. `LEXEME_DEFINITIONS_DIR`, when it names an existing directory
//!   4. the directory holding the running executable

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming an extra directory of definition files.
pub const DEFINITIONS_DIR_VAR: &str = "LEXEME_DEFINITIONS_DIR";

/// Which entry of the search order produced the hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSource {
    InputDir,
    CurrentDir,
    EnvDir,
    ExeDir,
}

/// A successful lookup: the full file path plus the directory that matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub path: PathBuf,
    pub directory: PathBuf,
    pub source: SearchSource,
}

/// Probe the search order for `file_name` and return the first hit.
///
/// Every location is injected so the search itself stays deterministic and
/// testable; `resolve_in_env` supplies the ambient process state. A miss is
/// `None`, never an error — whether a missing definition file matters is the
/// caller's decision.
pub fn resolve(
    file_name: &str,
    input_file_path: &Path,
    cwd: &Path,
    env_dir: Option<&Path>,
    exe_dir: Option<&Path>,
) -> Option<ResolvedPath> {
    // Built fresh per call; skipping an inapplicable source must not
    // disturb the relative order of the ones that remain.
    let mut candidates: Vec<(SearchSource, PathBuf)> = Vec::with_capacity(4);

    if let Some(dir) = input_file_path.parent() {
        if !dir.as_os_str().is_empty() {
            candidates.push((SearchSource::InputDir, dir.to_path_buf()));
        }
    }

    candidates.push((SearchSource::CurrentDir, cwd.to_path_buf()));

    if let Some(dir) = env_dir {
        if dir.is_dir() {
            candidates.push((SearchSource::EnvDir, dir.to_path_buf()));
        }
    }

    if let Some(dir) = exe_dir {
        candidates.push((SearchSource::ExeDir, dir.to_path_buf()));
    }

    for (source, directory) in candidates {
        let path = directory.join(file_name);
        // An unreadable directory fails the probe and is skipped like a miss.
        if path.is_file() {
            return Some(ResolvedPath {
                path,
                directory,
                source,
            });
        }
    }

    None
}

/// `resolve` with the ambient process state filled in: the current
/// directory, `LEXEME_DEFINITIONS_DIR` and the executable's location.
pub fn resolve_in_env(file_name: &str, input_file_path: &Path) -> Option<ResolvedPath> {
    let cwd = env::current_dir().ok()?;
    let env_dir = env::var_os(DEFINITIONS_DIR_VAR).map(PathBuf::from);
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    resolve(
        file_name,
        input_file_path,
        &cwd,
        env_dir.as_deref(),
        exe_dir.as_deref(),
    )
}
