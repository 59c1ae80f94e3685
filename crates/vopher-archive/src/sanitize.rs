use crate::error::{Error, Result};

/// Lexically normalize a slash-separated path.
///
/// Repeated separators and `.` segments are removed, `..` consumes the
/// preceding segment. A leading `..` on a relative path is kept and is
/// dropped on a rooted one. An empty result becomes `.`.
pub fn clean(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Remove the first `strip_dirs` segments from an entry name.
///
/// Returns `Ok(None)` when nothing would be left, the entry is then dropped
/// rather than extracted. The remainder is normalized and may not climb
/// above the extraction root.
pub fn strip_entry(name: &str, strip_dirs: usize) -> Result<Option<String>> {
    let segments: Vec<&str> = name
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect();

    if segments.len() <= strip_dirs {
        return Ok(None);
    }

    let mut resolved: Vec<&str> = Vec::with_capacity(segments.len() - strip_dirs);
    for segment in &segments[strip_dirs..] {
        if *segment == ".." {
            if resolved.pop().is_none() {
                return Err(Error::PathEscape(name.to_string()));
            }
        } else {
            resolved.push(segment);
        }
    }

    if resolved.is_empty() {
        return Ok(None);
    }
    Ok(Some(resolved.join("/")))
}
