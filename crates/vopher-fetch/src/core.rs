/// Only a plain `200 OK` counts; anything else fails the fetch.
pub fn is_success(status: u16) -> bool { status == 200 }

/// Pull the `filename=` parameter out of a `Content-Disposition` value.
///
/// `attachment; filename="foo.tar.gz"` yields `foo.tar.gz`. Returns `None`
/// when the parameter is missing or empty.
pub fn content_disposition_filename(header: &str) -> Option<&str> {
    const KEY: &str = "filename=";

    let start = header.find(KEY)? + KEY.len();
    let value = header[start..]
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_matches('"');

    // Only the last path component is meaningful.
    let name = value.rsplit(['/', '\\']).next().unwrap_or_default();
    (!name.is_empty()).then_some(name)
}
