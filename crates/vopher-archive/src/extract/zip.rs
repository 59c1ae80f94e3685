use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::extract::{EntryVisitor, Mode};
use crate::{ArchiveFormat, ReadSeek};

const S_IFMT: u32 = 0o170000;
const S_IFLNK: u32 = 0o120000;

/// Reader for zip archives. Needs random access to the central directory.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZipArchive;

impl ZipArchive {
    fn handle<'a>(
        &self,
        reader: &mut dyn ReadSeek,
        mut visitor: EntryVisitor<'a>,
    ) -> Result<EntryVisitor<'a>> {
        let mut archive =
            zip::ZipArchive::new(reader).map_err(|e| Error::Corrupted(e.to_string()))?;

        // The central directory is already in memory, so an absolute name
        // fails the archive before any entry is written.
        if let Some(name) = archive.file_names().find(|name| name.starts_with('/')) {
            return Err(Error::AbsolutePath(name.to_string()));
        }

        for index in 0..archive.len() {
            let mut file = archive
                .by_index(index)
                .map_err(|e| Error::Corrupted(e.to_string()))?;

            let is_symlink = file
                .unix_mode()
                .is_some_and(|mode| mode & S_IFMT == S_IFLNK);
            if file.is_dir() || is_symlink {
                continue;
            }

            let name = file.name().to_string();
            visitor.visit(&name, &mut file)?;
        }

        Ok(visitor)
    }
}

impl ArchiveFormat for ZipArchive {
    fn entries(&self, reader: &mut dyn ReadSeek, strip_dirs: usize) -> Result<Vec<String>> {
        let visitor = self.handle(reader, EntryVisitor::new(Mode::List, strip_dirs))?;
        Ok(visitor.into_names())
    }

    fn extract(
        &self,
        folder: &Path,
        reader: &mut dyn ReadSeek,
        strip_dirs: usize,
    ) -> Result<Vec<PathBuf>> {
        let visitor = self.handle(reader, EntryVisitor::new(Mode::Extract(folder), strip_dirs))?;
        Ok(visitor.into_written())
    }
}
