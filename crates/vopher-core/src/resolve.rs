//! Turning a plugin URL into something that downloads an archive.

use std::sync::Arc;

use url::Url;
use vopher_archive::{ArchiveFormat, FormatRegistry};
use vopher_fetch::{Fetcher, HttpClient};

use crate::error::PipelineError;

const GITHUB_HOSTS: &[&str] = &["github.com", "www.github.com"];
const DEFAULT_REF: &str = "master";

/// A download URL together with the format its bytes will be read as.
pub struct Resolved {
    pub url:    Url,
    pub format: Arc<dyn ArchiveFormat>,
}

/// Work out where to download `url` from and how to read it.
///
/// A URL whose last path segment already carries a registered suffix is used
/// as is. GitHub repository URLs are rewritten to the zip archive of the ref
/// named by the fragment. Anything else is looked up with a HEAD request and
/// classified by the filename the server suggests.
pub async fn resolve<C: HttpClient>(
    url: &Url,
    registry: &FormatRegistry,
    fetcher: &Fetcher<C>,
) -> Result<Resolved, PipelineError> {
    if let Some(format) = registry.detect(last_segment(url)) {
        return Ok(Resolved {
            url: url.clone(),
            format,
        });
    }

    if let Some(archive) = github_archive_url(url) {
        let name = last_segment(&archive);
        let format = registry
            .detect(name)
            .ok_or_else(|| vopher_archive::Error::UnsupportedFormat(name.to_string()))?;
        tracing::debug!(from = %url, to = %archive, "rewrote github url");
        return Ok(Resolved {
            url: archive,
            format,
        });
    }

    let filename = fetcher.detect_remote_filename(url.as_str()).await?;
    match registry.detect(&filename) {
        Some(format) => Ok(Resolved {
            url: url.clone(),
            format,
        }),
        None => Err(PipelineError::NotAnArchive {
            url: url.to_string(),
            filename,
        }),
    }
}

/// `https://github.com/<owner>/<repo>[.git][/][#ref]` becomes
/// `https://github.com/<owner>/<repo>/archive/<ref>.zip`, `ref` defaulting to
/// `master`. Returns `None` for other hosts.
pub fn github_archive_url(url: &Url) -> Option<Url> {
    let host = url.host_str()?;
    if !GITHUB_HOSTS.iter().any(|h| host.eq_ignore_ascii_case(h)) {
        return None;
    }

    let path = url.path().trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);
    let reference = url.fragment().filter(|f| !f.is_empty()).unwrap_or(DEFAULT_REF);

    let mut archive = url.clone();
    archive.set_path(&format!("{path}/archive/{reference}.zip"));
    archive.set_fragment(None);
    Some(archive)
}

pub(crate) fn last_segment(url: &Url) -> &str {
    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .unwrap_or_default()
}
