//! Per-format readers and the entry handling they share.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::sanitize::strip_entry;

mod tar;
mod vimball;
mod zip;

pub use self::tar::TarArchive;
pub use self::vimball::VimballArchive;
pub use self::zip::ZipArchive;

/// Where accepted entries end up.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Mode<'a> {
    List,
    Extract(&'a Path),
}

/// Applies the absolute-path guard and the strip policy to regular-file
/// entries of block-structured archives, then lists or writes them.
pub(crate) struct EntryVisitor<'a> {
    mode:       Mode<'a>,
    strip_dirs: usize,
    names:      Vec<String>,
    written:    Vec<PathBuf>,
}

impl<'a> EntryVisitor<'a> {
    pub(crate) fn new(mode: Mode<'a>, strip_dirs: usize) -> Self {
        Self {
            mode,
            strip_dirs,
            names: Vec::new(),
            written: Vec::new(),
        }
    }

    pub(crate) fn visit(&mut self, name: &str, data: &mut dyn Read) -> Result<()> {
        if name.starts_with('/') {
            return Err(Error::AbsolutePath(name.to_string()));
        }

        let Some(stripped) = strip_entry(name, self.strip_dirs)? else {
            tracing::trace!(entry = name, "dropping entry without remainder");
            return Ok(());
        };

        match self.mode {
            Mode::List => {
                io::copy(data, &mut io::sink())?;
            }
            Mode::Extract(folder) => {
                let target = folder.join(&stripped);
                write_file(&target, data)?;
                push_unique(&mut self.written, target);
            }
        }
        self.names.push(stripped);
        Ok(())
    }

    pub(crate) fn into_names(self) -> Vec<String> { self.names }

    pub(crate) fn into_written(self) -> Vec<PathBuf> { self.written }
}

/// Create parent directories for `target`, then copy `data` into it,
/// overwriting whatever was there.
pub(crate) fn write_file(target: &Path, data: &mut dyn Read) -> Result<()> {
    let mut file = create_file(target)?;
    io::copy(data, &mut file).map_err(|e| Error::ExtractionFailed {
        path:   target.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %target.display(), "extracted");
    Ok(())
}

/// Later entries for the same path overwrite earlier ones; the path is
/// reported once.
pub(crate) fn push_unique(written: &mut Vec<PathBuf>, target: PathBuf) {
    if !written.contains(&target) {
        written.push(target);
    }
}

pub(crate) fn create_file(target: &Path) -> Result<File> {
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::DirectoryCreationFailed {
            path:   parent.to_path_buf(),
            source: e,
        })?;
    }

    File::create(target).map_err(|e| Error::ExtractionFailed {
        path:   target.to_path_buf(),
        source: e,
    })
}
