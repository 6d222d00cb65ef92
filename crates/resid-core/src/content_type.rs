//! Content-type registry: MIME type, canonical extension and transfer encoding
//! for path-shaped strings.

/// Compression encodings keyed by extension (case-sensitive, like `.Z`).
const ENCODINGS: &[(&str, &str)] = &[
    ("gz", "gzip"),
    ("tgz", "gzip"),
    ("bz2", "bzip2"),
    ("xz", "xz"),
    ("Z", "compress"),
    ("br", "br"),
];

/// Extension preferred when a content type maps to several.
const PREFERRED_EXTENSIONS: &[(&str, &str)] = &[
    ("text/html", "html"),
    ("text/plain", "txt"),
    ("text/csv", "csv"),
    ("image/jpeg", "jpg"),
    ("image/tiff", "tiff"),
    ("application/json", "json"),
    ("application/pdf", "pdf"),
    ("application/xml", "xml"),
    ("application/javascript", "js"),
    ("text/javascript", "js"),
    ("audio/mpeg", "mp3"),
    ("video/mpeg", "mpeg"),
    ("application/gzip", "gz"),
    ("application/x-gzip", "gz"),
    ("application/x-bzip2", "bz2"),
    ("application/x-xz", "xz"),
    ("application/x-compress", "Z"),
];

/// Content type of a path-shaped string, from its extension.
pub fn guess_content_type(path: &str) -> Option<String> {
    let ext = extension(path)?;
    mime_guess::from_ext(ext).first_raw().map(str::to_string)
}

/// Transfer encoding (compression) implied by the extension of `path`.
pub fn guess_encoding(path: &str) -> Option<String> {
    let ext = extension(path)?;
    encoding_for_extension(ext).map(str::to_string)
}

/// Canonical extension (without the dot) for a content type.
pub fn guess_extension(content_type: &str) -> Option<String> {
    let content_type = content_type.trim().to_ascii_lowercase();
    if let Some((_, ext)) = PREFERRED_EXTENSIONS
        .iter()
        .find(|(ct, _)| *ct == content_type)
    {
        return Some((*ext).to_string());
    }
    mime_guess::get_mime_extensions_str(&content_type)
        .and_then(|exts| exts.first())
        .map(|ext| (*ext).to_string())
}

/// Whether two paths map to the same known content type.
pub fn same_content_type(path: &str, other: &str) -> bool {
    match (guess_content_type(path), guess_content_type(other)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Content type of a `.html` file, used as the default for bare web URLs.
pub fn html_content_type() -> String {
    guess_content_type("index.html").unwrap_or_else(|| "text/html".to_string())
}

/// Extension of the last `/`- or `\`-separated component, without the dot.
///
/// Leading dots do not start an extension, so `.bashrc` has none.
pub fn extension(path: &str) -> Option<&str> {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let stem_start = name.len() - name.trim_start_matches('.').len();
    let dot = name[stem_start..].rfind('.')? + stem_start;
    let ext = &name[dot + 1..];
    if ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}

fn encoding_for_extension(ext: &str) -> Option<&'static str> {
    ENCODINGS
        .iter()
        .find(|(e, _)| *e == ext)
        .or_else(|| {
            let lower = ext.to_ascii_lowercase();
            ENCODINGS.iter().find(|(e, _)| *e == lower)
        })
        .map(|(_, enc)| *enc)
}
