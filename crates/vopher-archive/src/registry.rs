use std::fmt;
use std::sync::Arc;

use crate::codec::{Compressed, Compression};
use crate::error::{Error, Result};
use crate::extract::{TarArchive, VimballArchive, ZipArchive};
use crate::ArchiveFormat;

struct Registration {
    suffix: String,
    format: Arc<dyn ArchiveFormat>,
}

/// Ordered mapping from file-name suffix to archive format.
///
/// Lookup returns the first registration whose suffix ends the name. A
/// suffix that an earlier, shorter registration would always win against
/// (`.tar.gz` after `.gz`) is refused when it is registered.
#[derive(Default)]
pub struct FormatRegistry {
    registrations: Vec<Registration>,
}

impl FormatRegistry {
    pub fn new() -> Self { Self::default() }

    /// Every format this crate knows, compound suffixes first.
    pub fn standard() -> Self {
        let gzip_tar: Arc<dyn ArchiveFormat> =
            Arc::new(Compressed::new(Compression::Gzip, TarArchive));
        let bzip2_tar: Arc<dyn ArchiveFormat> =
            Arc::new(Compressed::new(Compression::Bzip2, TarArchive));
        let gzip_vimball: Arc<dyn ArchiveFormat> =
            Arc::new(Compressed::new(Compression::Gzip, VimballArchive));
        let tar: Arc<dyn ArchiveFormat> = Arc::new(TarArchive);
        let zip: Arc<dyn ArchiveFormat> = Arc::new(ZipArchive);
        let vimball: Arc<dyn ArchiveFormat> = Arc::new(VimballArchive);

        let mut standard: Vec<(&str, Arc<dyn ArchiveFormat>)> = vec![
            (".tar.gz", gzip_tar.clone()),
            (".tgz", gzip_tar),
            (".tar.bz2", bzip2_tar.clone()),
            (".tar.bzip2", bzip2_tar.clone()),
            (".tbz2", bzip2_tar.clone()),
            (".tbz", bzip2_tar),
        ];

        #[cfg(feature = "xz")]
        {
            let xz_tar: Arc<dyn ArchiveFormat> =
                Arc::new(Compressed::new(Compression::Xz, TarArchive));
            standard.push((".tar.xz", xz_tar.clone()));
            standard.push((".txz", xz_tar));
        }

        #[cfg(feature = "zstd")]
        {
            let zstd_tar: Arc<dyn ArchiveFormat> =
                Arc::new(Compressed::new(Compression::Zstd, TarArchive));
            standard.push((".tar.zst", zstd_tar.clone()));
            standard.push((".tzst", zstd_tar));
        }

        standard.extend([
            (".tar", tar),
            (".zip", zip),
            (".vba.gz", gzip_vimball.clone()),
            (".vmb.gz", gzip_vimball),
            (".vba", vimball.clone()),
            (".vmb", vimball),
        ]);

        Self {
            registrations: standard
                .into_iter()
                .map(|(suffix, format)| Registration {
                    suffix: suffix.to_string(),
                    format,
                })
                .collect(),
        }
    }

    /// Append a format for `suffix`. Matching is case-insensitive.
    pub fn register(
        &mut self,
        suffix: &str,
        format: impl ArchiveFormat + 'static,
    ) -> Result<&mut Self> {
        self.register_shared(suffix, Arc::new(format))
    }

    pub fn register_shared(
        &mut self,
        suffix: &str,
        format: Arc<dyn ArchiveFormat>,
    ) -> Result<&mut Self> {
        let suffix = suffix.to_ascii_lowercase();
        if !suffix.starts_with('.') || suffix.len() < 2 {
            return Err(Error::InvalidSuffix(suffix));
        }

        for existing in &self.registrations {
            if existing.suffix == suffix {
                return Err(Error::DuplicateSuffix(suffix));
            }
            if suffix.ends_with(&existing.suffix) {
                return Err(Error::ShadowedSuffix {
                    suffix,
                    shadowed_by: existing.suffix.clone(),
                });
            }
        }

        self.registrations.push(Registration { suffix, format });
        Ok(self)
    }

    /// Format for a file name or URL path, if any suffix matches.
    pub fn detect(&self, name: &str) -> Option<Arc<dyn ArchiveFormat>> {
        self.find(name).map(|registration| registration.format.clone())
    }

    /// The registered suffix `name` ends with, if any.
    pub fn suffix_of(&self, name: &str) -> Option<&str> {
        self.find(name).map(|registration| registration.suffix.as_str())
    }

    pub fn suffixes(&self) -> impl Iterator<Item = &str> {
        self.registrations.iter().map(|r| r.suffix.as_str())
    }

    fn find(&self, name: &str) -> Option<&Registration> {
        let name = name.to_ascii_lowercase();
        self.registrations
            .iter()
            .find(|registration| name.ends_with(&registration.suffix))
    }
}

impl fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.suffixes()).finish()
    }
}
