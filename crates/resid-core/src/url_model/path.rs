//! Local path extraction from `file:` URLs.

use super::{percent_decode, UrlParts};

/// Extracts the local filesystem path addressed by a `file:` URL.
///
/// The path is percent-decoded. A leading `/` before a drive letter is
/// dropped (`/C:/dir` becomes `C:/dir`), and a drive letter that ended up in
/// the netloc (`file://C:/dir`) is moved back into the path.
pub fn local_path_from_file_url(url: &str) -> String {
    let parts = UrlParts::split(url);
    let raw = if has_drive_prefix(&parts.netloc) {
        format!("{}{}", parts.netloc, parts.path)
    } else {
        parts.path
    };
    let decoded = percent_decode(&raw);
    match decoded.strip_prefix('/') {
        Some(rest) if has_drive_prefix(rest) => rest.to_string(),
        _ => decoded,
    }
}

/// Whether `s` starts with a drive letter such as `C:`, followed by a
/// separator or nothing.
pub fn has_drive_prefix(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 2
        && b[0].is_ascii_alphabetic()
        && b[1] == b':'
        && (b.len() == 2 || b[2] == b'/' || b[2] == b'\\')
}
