use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::extract::{EntryVisitor, Mode};
use crate::StreamArchive;

/// Reader for uncompressed tar streams.
///
/// Only regular files are considered; directories, links and device
/// entries are skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct TarArchive;

impl TarArchive {
    fn handle<'a>(
        &self,
        reader: &mut dyn Read,
        mut visitor: EntryVisitor<'a>,
    ) -> Result<EntryVisitor<'a>> {
        let mut archive = tar::Archive::new(reader);

        for entry in archive.entries()? {
            let mut entry = entry.map_err(|e| Error::Corrupted(e.to_string()))?;

            if !entry.header().entry_type().is_file() {
                continue;
            }

            let name = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
            if name.ends_with('/') {
                continue;
            }

            visitor.visit(&name, &mut entry)?;
        }

        Ok(visitor)
    }
}

impl StreamArchive for TarArchive {
    fn entries_from(&self, reader: &mut dyn Read, strip_dirs: usize) -> Result<Vec<String>> {
        let visitor = self.handle(reader, EntryVisitor::new(Mode::List, strip_dirs))?;
        Ok(visitor.into_names())
    }

    fn extract_from(
        &self,
        folder: &Path,
        reader: &mut dyn Read,
        strip_dirs: usize,
    ) -> Result<Vec<PathBuf>> {
        let visitor = self.handle(reader, EntryVisitor::new(Mode::Extract(folder), strip_dirs))?;
        Ok(visitor.into_written())
    }
}
