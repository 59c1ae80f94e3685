use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::{Result, StreamArchive};

/// Compression codec wrapped around a stream format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compression {
    Gzip,
    Bzip2,
    #[cfg(feature = "xz")]
    Xz,
    #[cfg(feature = "zstd")]
    Zstd,
}

impl Compression {
    /// Create a decoder for this compression codec.
    ///
    /// Decoding is lazy: a corrupt header only surfaces once bytes are read.
    pub fn decoder<R: Read>(self, reader: R) -> Result<Decoder<R>> {
        match self {
            Self::Gzip => Ok(Decoder::Gzip(Box::new(flate2::read::GzDecoder::new(reader)))),
            Self::Bzip2 => Ok(Decoder::Bzip2(Box::new(bzip2::read::BzDecoder::new(reader)))),
            #[cfg(feature = "xz")]
            Self::Xz => Ok(Decoder::Xz(Box::new(xz2::read::XzDecoder::new(reader)))),
            #[cfg(feature = "zstd")]
            Self::Zstd => Ok(Decoder::Zstd(Box::new(zstd::stream::read::Decoder::new(
                reader,
            )?))),
        }
    }
}

/// Decoder wrapper for decompression.
pub enum Decoder<R: Read> {
    Gzip(Box<flate2::read::GzDecoder<R>>),
    Bzip2(Box<bzip2::read::BzDecoder<R>>),
    #[cfg(feature = "xz")]
    Xz(Box<xz2::read::XzDecoder<R>>),
    #[cfg(feature = "zstd")]
    Zstd(Box<zstd::stream::read::Decoder<'static, io::BufReader<R>>>),
}

impl<R: Read> Read for Decoder<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Gzip(d) => d.read(buf),
            Self::Bzip2(d) => d.read(buf),
            #[cfg(feature = "xz")]
            Self::Xz(d) => d.read(buf),
            #[cfg(feature = "zstd")]
            Self::Zstd(d) => d.read(buf),
        }
    }
}

/// A stream format read through a decompressing decorator, e.g. `.tar.gz`.
#[derive(Clone, Debug)]
pub struct Compressed<F> {
    compression: Compression,
    inner:       F,
}

impl<F: StreamArchive> Compressed<F> {
    pub fn new(compression: Compression, inner: F) -> Self { Self { compression, inner } }
}

impl<F: StreamArchive> StreamArchive for Compressed<F> {
    fn entries_from(&self, reader: &mut dyn Read, strip_dirs: usize) -> Result<Vec<String>> {
        let mut decoder = self.compression.decoder(reader)?;
        self.inner.entries_from(&mut decoder, strip_dirs)
    }

    fn extract_from(
        &self,
        folder: &Path,
        reader: &mut dyn Read,
        strip_dirs: usize,
    ) -> Result<Vec<PathBuf>> {
        let mut decoder = self.compression.decoder(reader)?;
        self.inner.extract_from(folder, &mut decoder, strip_dirs)
    }

    fn default_strip_dirs(&self) -> usize { self.inner.default_strip_dirs() }
}
