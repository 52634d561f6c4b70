//! Filename normalization from a URL path.

/// Filename used when the path ends in `/`.
pub const INDEX_FILENAME: &str = "index.html";

const HTML_SUFFIX: &str = ".html";

/// Normalizes the last segment of `path` into the filename used for lookups.
///
/// Only the final segment matters, so any prefix the page is served under is
/// ignored. An empty segment (trailing `/`) becomes `index.html`; a segment
/// without a `.html` suffix gets one appended. Already-normalized filenames
/// are returned unchanged.
pub fn normalize_filename(path: &str) -> String {
    let segment = path.rsplit_once('/').map_or(path, |(_, last)| last);
    if segment.is_empty() {
        INDEX_FILENAME.to_string()
    } else if segment.ends_with(HTML_SUFFIX) {
        segment.to_string()
    } else {
        format!("{segment}{HTML_SUFFIX}")
    }
}
