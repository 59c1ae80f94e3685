//! Plugin descriptors and the plugin-list format.
//!
//! ```text
//! # comment
//! https://github.com/tpope/vim-fugitive
//! https://github.com/tpope/vim-fugitive#v2.1
//! foo https://github.com/tpope/vim-fugitive strip=0
//! bar https://example.org/bar.tar.gz sha256=<hex>
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use url::Url;
use vopher_archive::FormatRegistry;
use vopher_verify::{Algorithm, Checksum};

use crate::error::{Error, ParseError, ParseErrorKind, Result};
use crate::resolve::last_segment;

/// One entry of the plugin list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plugin {
    /// Folder name below the target directory, a single path segment.
    pub name:       String,
    /// Source; a fragment names the ref for hosts that understand one.
    pub url:        Url,
    /// Explicit `strip=N`; otherwise the archive format's default applies.
    pub strip_dirs: Option<usize>,
    pub checksum:   Option<Checksum>,
}

impl Plugin {
    /// `<dir>/<name>`, where the plugin is extracted to.
    pub fn folder(&self, dir: &Path) -> PathBuf { dir.join(&self.name) }
}

/// Read and parse the plugin list at `path`. An empty list is an error.
pub fn read_list(path: &Path, registry: &FormatRegistry) -> Result<Vec<Plugin>> {
    let input = std::fs::read_to_string(path).map_err(|source| Error::ReadList {
        path: path.to_path_buf(),
        source,
    })?;

    let plugins = parse_list(&input, registry)?;
    if plugins.is_empty() {
        return Err(Error::EmptyList(path.to_path_buf()));
    }
    Ok(plugins)
}

/// Parse a plugin list.
///
/// Blank lines and lines starting with `#` are ignored. Every other line is
/// `URL`, `NAME URL` or either of those followed by `strip=N`, `sha1=HEX` or
/// `sha256=HEX` options. Names must be unique.
pub fn parse_list(input: &str, registry: &FormatRegistry) -> std::result::Result<Vec<Plugin>, ParseError> {
    let mut plugins = Vec::new();
    let mut seen = HashSet::new();

    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let error = |kind| ParseError {
            line: index + 1,
            kind,
        };

        let plugin = parse_line(line, registry).map_err(error)?;
        if !seen.insert(plugin.name.clone()) {
            return Err(error(ParseErrorKind::DuplicateName(plugin.name)));
        }
        plugins.push(plugin);
    }

    Ok(plugins)
}

fn parse_line(line: &str, registry: &FormatRegistry) -> std::result::Result<Plugin, ParseErrorKind> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    let (name, url, options) = match fields.as_slice() {
        [url, options @ ..] if url.contains("://") => (None, *url, options),
        [name, url, options @ ..] => (Some(*name), *url, options),
        _ => return Err(ParseErrorKind::MissingUrl),
    };

    let url = Url::parse(url).map_err(|source| ParseErrorKind::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ParseErrorKind::UnsupportedScheme(url.scheme().to_string()));
    }

    let name = match name {
        Some(name) => name.to_string(),
        None => default_name(&url, registry)
            .ok_or_else(|| ParseErrorKind::MissingName(url.to_string()))?,
    };
    if !is_valid_name(&name) {
        return Err(ParseErrorKind::InvalidName(name));
    }

    let mut plugin = Plugin {
        name,
        url,
        strip_dirs: None,
        checksum: None,
    };

    for option in options {
        match option.split_once('=') {
            Some(("strip", value)) => {
                let strip = value
                    .parse()
                    .map_err(|_| ParseErrorKind::InvalidStrip(value.to_string()))?;
                plugin.strip_dirs = Some(strip);
            }
            Some(("sha1", value)) => plugin.checksum = Some(Checksum::new(Algorithm::Sha1, value)?),
            Some(("sha256", value)) => {
                plugin.checksum = Some(Checksum::new(Algorithm::Sha256, value)?);
            }
            _ => return Err(ParseErrorKind::UnknownOption(option.to_string())),
        }
    }

    Ok(plugin)
}

/// Last non-empty path segment, minus a `.git` or archive suffix.
fn default_name(url: &Url, registry: &FormatRegistry) -> Option<String> {
    let segment = last_segment(url);

    let name = match segment.strip_suffix(".git") {
        Some(stem) => stem,
        None => match registry.suffix_of(segment) {
            Some(suffix) => &segment[..segment.len() - suffix.len()],
            None => segment,
        },
    };

    (!name.is_empty()).then(|| name.to_string())
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
