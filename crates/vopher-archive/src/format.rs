use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

use crate::Result;

/// Object-safe `Read + Seek`, so formats can be stored as trait objects.
pub trait ReadSeek: Read + Seek + Send {}

impl<T: Read + Seek + Send + ?Sized> ReadSeek for T {}

/// A container format that can list or materialize its regular files.
///
/// Both operations remove `strip_dirs` leading path segments from every
/// entry; entries left without a name are skipped.
pub trait ArchiveFormat: Send + Sync {
    /// Names of the accepted entries, in archive order.
    fn entries(&self, reader: &mut dyn ReadSeek, strip_dirs: usize) -> Result<Vec<String>>;

    /// Write the accepted entries below `folder`, returning the written paths.
    fn extract(
        &self,
        folder: &Path,
        reader: &mut dyn ReadSeek,
        strip_dirs: usize,
    ) -> Result<Vec<PathBuf>>;

    /// Strip count for sources that do not name one. Tarballs and zips of
    /// a repository usually wrap everything in one top-level folder.
    fn default_strip_dirs(&self) -> usize { 1 }
}

/// A format that only needs a forward-only byte stream.
///
/// Every `StreamArchive` is an [`ArchiveFormat`]; the split exists so a
/// decompressing [`Decoder`](crate::Decoder) can sit in front of it.
pub trait StreamArchive: Send + Sync {
    fn entries_from(&self, reader: &mut dyn Read, strip_dirs: usize) -> Result<Vec<String>>;

    fn extract_from(
        &self,
        folder: &Path,
        reader: &mut dyn Read,
        strip_dirs: usize,
    ) -> Result<Vec<PathBuf>>;

    fn default_strip_dirs(&self) -> usize { 1 }
}

impl<T: StreamArchive> ArchiveFormat for T {
    fn entries(&self, mut reader: &mut dyn ReadSeek, strip_dirs: usize) -> Result<Vec<String>> {
        self.entries_from(&mut reader, strip_dirs)
    }

    fn extract(
        &self,
        folder: &Path,
        mut reader: &mut dyn ReadSeek,
        strip_dirs: usize,
    ) -> Result<Vec<PathBuf>> {
        self.extract_from(folder, &mut reader, strip_dirs)
    }

    fn default_strip_dirs(&self) -> usize { StreamArchive::default_strip_dirs(self) }
}
