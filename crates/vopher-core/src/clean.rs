use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::plugin::Plugin;

#[derive(Debug)]
pub enum CleanOutcome {
    Removed,
    Missing,
    Failed(io::Error),
}

#[derive(Debug)]
pub struct CleanEntry {
    pub folder:  PathBuf,
    pub outcome: CleanOutcome,
}

/// Remove `<dir>/<name>` for every plugin. Refuses to run without `force`.
///
/// A failure on one folder does not stop the others; each outcome is
/// reported.
pub fn clean(plugins: &[Plugin], dir: &Path, force: bool) -> Result<Vec<CleanEntry>> {
    if !force {
        return Err(Error::CleanNeedsForce);
    }

    let entries = plugins
        .iter()
        .map(|plugin| {
            let folder = plugin.folder(dir);
            let outcome = match std::fs::remove_dir_all(&folder) {
                Ok(()) => {
                    tracing::info!(dest = %folder.display(), "removed");
                    CleanOutcome::Removed
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    tracing::warn!(dest = %folder.display(), "does not exist");
                    CleanOutcome::Missing
                }
                Err(e) => {
                    tracing::error!(dest = %folder.display(), error = %e, "failed to remove");
                    CleanOutcome::Failed(e)
                }
            };
            CleanEntry { folder, outcome }
        })
        .collect();

    Ok(entries)
}
