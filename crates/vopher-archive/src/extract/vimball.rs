//! Vimball: a line-oriented text archive for vim plugins.
//!
//! ```text
//! " Vimball Archiver by Charles E. Campbell
//! UseVimball
//! finish
//! plugin/foo.vim	[[[1
//! 2
//! line one
//! line two
//! doc/foo.txt	[[[1
//! ...
//! ```
//!
//! Records follow the preamble: a name line (text before the first tab), a
//! line count, and that many content lines.

use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::extract::{create_file, push_unique};
use crate::sanitize::{clean, strip_entry};
use crate::StreamArchive;

const USE_VIMBALL: &[u8] = b"UseVimball";
const FINISH: &[u8] = b"finish";

#[derive(Clone, Copy, Debug, Default)]
pub struct VimballArchive;

/// Splits on `\n`, dropping the terminator and a trailing `\r`.
struct Lines<R> {
    reader: R,
    buf:    Vec<u8>,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        Ok(Some(&self.buf))
    }
}

impl VimballArchive {
    fn handle<F>(&self, reader: &mut dyn Read, mut on_record: F) -> Result<Vec<String>>
    where
        F: FnMut(&str, usize, &mut Lines<BufReader<&mut dyn Read>>) -> Result<()>,
    {
        let mut lines = Lines::new(BufReader::new(reader));
        skip_preamble(&mut lines)?;

        let mut names = Vec::new();
        while let Some(line) = lines.next_line()? {
            let line = String::from_utf8_lossy(line).into_owned();
            let raw = line.split_once('\t').map_or(line.as_str(), |(name, _)| name).trim();
            if raw.is_empty() {
                continue;
            }
            let name = clean(raw);

            let count_line = lines
                .next_line()?
                .ok_or_else(|| Error::MissingLineCount { name: name.clone() })?;
            let count: i64 = String::from_utf8_lossy(count_line)
                .trim()
                .parse()
                .map_err(|source| Error::InvalidLineCount {
                    name: name.clone(),
                    source,
                })?;
            let count = usize::try_from(count).map_err(|_| Error::NegativeLineCount {
                name: name.clone(),
                count,
            })?;

            on_record(&name, count, &mut lines)?;
            names.push(name);
        }

        Ok(names)
    }
}

/// Consume lines up to and including `finish`, which must follow `UseVimball`.
fn skip_preamble<R: BufRead>(lines: &mut Lines<R>) -> Result<()> {
    let mut use_vimball = false;
    loop {
        let Some(line) = lines.next_line()? else {
            return Err(Error::StrangePreamble);
        };
        if !use_vimball {
            use_vimball = line == USE_VIMBALL;
        } else if line == FINISH {
            return Ok(());
        }
    }
}

fn skip_record<R: BufRead>(name: &str, count: usize, lines: &mut Lines<R>) -> Result<()> {
    for read in 0..count {
        if lines.next_line()?.is_none() {
            return Err(truncated(name, count, read));
        }
    }
    Ok(())
}

fn write_record<R: BufRead>(
    name: &str,
    target: &Path,
    count: usize,
    lines: &mut Lines<R>,
) -> Result<()> {
    let mut out = BufWriter::new(create_file(target)?);
    for read in 0..count {
        let Some(line) = lines.next_line()? else {
            return Err(truncated(name, count, read));
        };
        out.write_all(line)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    tracing::debug!(path = %target.display(), lines = count, "extracted");
    Ok(())
}

fn truncated(name: &str, expected: usize, read: usize) -> Error {
    Error::Truncated {
        name: name.to_string(),
        expected,
        read,
    }
}

impl StreamArchive for VimballArchive {
    /// Vimball records are rooted at the plugin folder itself.
    fn default_strip_dirs(&self) -> usize { 0 }

    /// Record names as they appear in the archive; `strip_dirs` only shapes
    /// extraction targets.
    fn entries_from(&self, reader: &mut dyn Read, _strip_dirs: usize) -> Result<Vec<String>> {
        self.handle(reader, |name, count, lines| skip_record(name, count, lines))
    }

    fn extract_from(
        &self,
        folder: &Path,
        reader: &mut dyn Read,
        strip_dirs: usize,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        self.handle(reader, |name, count, lines| {
            // Names are not checked for a leading separator; they are joined
            // below `folder` segment by segment.
            match strip_entry(name, strip_dirs)? {
                Some(relative) => {
                    let target = folder.join(relative);
                    write_record(name, &target, count, lines)?;
                    push_unique(&mut written, target);
                    Ok(())
                }
                None => skip_record(name, count, lines),
            }
        })?;
        Ok(written)
    }
}
