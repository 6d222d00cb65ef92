//! URL modeling for classification.
//!
//! Two views of a URL-ish string are used:
//! - [`UrlParts::split`], a lenient component split that never fails and is
//!   used for resemblance checks on partial or malformed input;
//! - [`strict_parse`], backed by `url::Url`, used for strict support checks
//!   and for joining.

mod path;
mod percent;

pub use path::{has_drive_prefix, local_path_from_file_url};
pub use percent::percent_decode;

use crate::error::ResidError;

/// Components of a URL-ish string, split without validation.
///
/// The scheme is lowercased. `params` is the `;`-suffix of the last path
/// segment. Missing components are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
    pub params: String,
    pub query: String,
    pub fragment: String,
}

impl UrlParts {
    /// Splits `input` into `scheme://netloc/path;params?query#fragment`.
    pub fn split(input: &str) -> Self {
        let mut parts = UrlParts::default();
        let mut rest = input;

        if let Some((candidate, after)) = rest.split_once(':') {
            if is_scheme(candidate) {
                parts.scheme = candidate.to_ascii_lowercase();
                rest = after;
            }
        }

        if let Some(after) = rest.strip_prefix("//") {
            let end = after.find(['/', '?', '#']).unwrap_or(after.len());
            parts.netloc = after[..end].to_string();
            rest = &after[end..];
        }

        if let Some((before, fragment)) = rest.split_once('#') {
            parts.fragment = fragment.to_string();
            rest = before;
        }
        if let Some((before, query)) = rest.split_once('?') {
            parts.query = query.to_string();
            rest = before;
        }

        let last_segment_start = rest.rfind('/').map(|i| i + 1).unwrap_or(0);
        match rest[last_segment_start..].find(';') {
            Some(offset) => {
                let at = last_segment_start + offset;
                parts.path = rest[..at].to_string();
                parts.params = rest[at + 1..].to_string();
            }
            None => parts.path = rest.to_string(),
        }

        parts
    }

    /// Host part of the netloc, lowercased, without userinfo, port or brackets.
    pub fn hostname(&self) -> Option<String> {
        let (host, _) = self.host_and_port();
        if host.is_empty() {
            None
        } else {
            Some(host.to_ascii_lowercase())
        }
    }

    /// Explicit, numeric port in the netloc.
    pub fn port(&self) -> Option<u16> {
        self.host_and_port().1.and_then(|p| p.parse().ok())
    }

    /// Whether the scheme is really a single drive letter (`C:/dir`).
    pub fn scheme_is_drive(&self) -> bool {
        self.scheme.len() == 1
    }

    /// Number of non-empty components among query, params, port and fragment.
    pub fn secondary_count(&self) -> usize {
        [
            !self.query.is_empty(),
            !self.params.is_empty(),
            self.port().is_some(),
            !self.fragment.is_empty(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }

    fn host_and_port(&self) -> (&str, Option<&str>) {
        let hostport = match self.netloc.rsplit_once('@') {
            Some((_, hp)) => hp,
            None => self.netloc.as_str(),
        };
        if let Some(bracketed) = hostport.strip_prefix('[') {
            return match bracketed.split_once(']') {
                Some((host, tail)) => (host, tail.strip_prefix(':')),
                None => (bracketed, None),
            };
        }
        match hostport.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (hostport, None),
        }
    }
}

/// RFC 3986 scheme: a letter followed by letters, digits, `+`, `-` or `.`.
fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Parses `input` as an absolute URL, or `None`.
pub fn strict_parse(input: &str) -> Option<url::Url> {
    url::Url::parse(input).ok()
}

/// Whether `input` parses as an absolute URL with a scheme from `schemes`
/// (any real scheme when `None`) and a host or path.
pub fn is_url(input: &str, schemes: Option<&[&str]>) -> bool {
    let Some(parsed) = strict_parse(input) else {
        return false;
    };
    let scheme_ok = match schemes {
        Some(allowed) => allowed.contains(&parsed.scheme()),
        // A one-letter scheme is a drive letter, not a URL.
        None => parsed.scheme().len() > 1,
    };
    let has_location =
        parsed.host_str().is_some_and(|h| !h.is_empty()) || !parsed.path().is_empty();
    scheme_ok && has_location
}

/// Whether the lenient scheme of `input` matches one of `schemes` (or any
/// non-drive scheme when `None`).
pub fn resembles_scheme(parts: &UrlParts, schemes: Option<&[&str]>) -> bool {
    if parts.scheme.is_empty() || parts.scheme_is_drive() {
        return false;
    }
    match schemes {
        Some(allowed) => allowed.contains(&parts.scheme.as_str()),
        None => true,
    }
}

/// Whether `input` looks like a URL: scheme acceptable and a hostname, a
/// path, or at least two of query/params/port/fragment.
pub fn resembles_url(input: &str, schemes: Option<&[&str]>) -> bool {
    let parts = UrlParts::split(input);
    if !resembles_scheme(&parts, schemes) {
        return false;
    }
    parts.hostname().is_some() || !parts.path.is_empty() || parts.secondary_count() >= 2
}

/// Resolves `relative` against `base`.
pub fn join(base: &str, relative: &str) -> Result<String, ResidError> {
    let base_url = url::Url::parse(base).map_err(|_| ResidError::InvalidUrl(base.to_string()))?;
    let joined = base_url
        .join(relative)
        .map_err(|_| ResidError::InvalidUrl(relative.to_string()))?;
    Ok(joined.to_string())
}

/// Makes `url` absolute by borrowing missing parts from `base_url`.
///
/// - `//host/x` takes the base scheme;
/// - netloc-less references, `/x` included, are joined against the base
///   (whose netloc may be empty, as in `file:///dir/`);
/// - complete URLs are returned unchanged.
pub fn make_absolute(url: &str, base_url: &str) -> Result<String, ResidError> {
    let base = UrlParts::split(base_url);

    if url.starts_with("//") {
        if base.scheme.is_empty() {
            return Err(ResidError::InvalidUrl(base_url.to_string()));
        }
        return Ok(format!("{}:{}", base.scheme, url));
    }

    if UrlParts::split(url).netloc.is_empty() {
        return join(base_url, url);
    }

    if is_url(url, None) {
        Ok(url.to_string())
    } else {
        Err(ResidError::InvalidUrl(url.to_string()))
    }
}
