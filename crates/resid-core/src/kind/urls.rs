//! URL classifiers: web, generic and local-file URLs.

use std::path::Path;

use super::WEB_URL_SCHEMES;
use crate::context::Context;
use crate::source::{PathValue, Source};
use crate::url_model::{self, local_path_from_file_url, UrlParts};

const FILE_SCHEME: &[&str] = &["file"];

pub(super) fn web_url_supported(source: &Source<'_>) -> bool {
    source
        .as_text()
        .is_some_and(|text| url_model::is_url(&text, Some(WEB_URL_SCHEMES)))
}

pub(super) fn web_url_resembles(source: &Source<'_>) -> bool {
    source
        .as_text()
        .is_some_and(|text| url_model::resembles_url(&text, Some(WEB_URL_SCHEMES)))
}

pub(super) fn generic_url_supported(source: &Source<'_>) -> bool {
    source
        .as_text()
        .is_some_and(|text| url_model::is_url(&text, None))
}

pub(super) fn generic_url_resembles(source: &Source<'_>) -> bool {
    source
        .as_text()
        .is_some_and(|text| url_model::resembles_url(&text, None))
}

/// `file:` URL whose decoded path is an existing regular file.
pub(super) fn local_file_url_supported(source: &Source<'_>, ctx: &Context) -> bool {
    let Some(text) = source.as_text() else {
        return false;
    };
    if !url_model::is_url(&text, Some(FILE_SCHEME)) {
        return false;
    }
    let local = local_path_from_file_url(&text);
    !local.is_empty() && ctx.probe().is_file(Path::new(&local))
}

pub(super) fn local_file_url_resembles(source: &Source<'_>) -> bool {
    source.as_text().is_some_and(|text| {
        url_model::resembles_scheme(&UrlParts::split(&text), Some(FILE_SCHEME))
    })
}

pub(super) fn url_path(source: &Source<'_>) -> Option<PathValue> {
    let text = source.as_text()?;
    Some(PathValue::Text(UrlParts::split(&text).path))
}

pub(super) fn local_file_url_path(source: &Source<'_>) -> Option<PathValue> {
    let text = source.as_text()?;
    Some(PathValue::Text(local_path_from_file_url(&text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn web_url_schemes() {
        assert!(web_url_supported(&Source::from("https://example.com/")));
        assert!(web_url_supported(&Source::from("ftp://mirror.example.org/pub/x.iso")));
        assert!(!web_url_supported(&Source::from("git://example.com/repo")));
        assert!(!web_url_supported(&Source::from("www.example.com")));
    }

    #[test]
    fn bytes_are_classified_like_text() {
        let raw = b"http://example.com/page".to_vec();
        assert!(web_url_supported(&Source::from(&raw)));
        assert!(generic_url_resembles(&Source::from(&raw)));
    }

    #[test]
    fn generic_url_rejects_drive_letters() {
        assert!(generic_url_supported(&Source::from("mailto:someone@example.com")));
        assert!(!generic_url_supported(&Source::from("C:/dir/file.txt")));
        assert!(!generic_url_resembles(&Source::from("C:/dir/file.txt")));
    }

    #[test]
    fn local_file_url_requires_existing_file() {
        let ctx = Context::default();
        let dir = tempdir().unwrap();
        let file = dir.path().join("name.txt");
        std::fs::write(&file, b"hi").unwrap();

        let file_url = url::Url::from_file_path(&file).unwrap().to_string();
        assert!(local_file_url_supported(&Source::from(file_url.as_str()), &ctx));

        let dir_url = url::Url::from_directory_path(dir.path()).unwrap();
        let missing = format!("{dir_url}missing.txt");
        assert!(!local_file_url_supported(&Source::from(missing.as_str()), &ctx));
        assert!(local_file_url_resembles(&Source::from(missing.as_str())));
    }

    #[test]
    fn file_url_with_escapes_resolves() {
        let ctx = Context::default();
        let dir = tempdir().unwrap();
        let file = dir.path().join("my report.txt");
        std::fs::write(&file, b"hi").unwrap();

        let file_url = url::Url::from_file_path(&file).unwrap().to_string();
        assert!(file_url.contains("%20"));
        assert!(local_file_url_supported(&Source::from(file_url.as_str()), &ctx));
        assert_eq!(
            local_file_url_path(&Source::from(file_url.as_str())),
            Some(PathValue::Text(file.to_string_lossy().into_owned()))
        );
    }
}
