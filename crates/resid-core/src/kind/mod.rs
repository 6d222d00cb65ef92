//! Resource kinds and their classifiers.
//!
//! Every kind answers three questions about a [`Source`]:
//! - `supported`: strict structural check plus existence/capability check;
//! - `resembles`: relaxed syntactic check, no existence check;
//! - `extract_path`: the path the source addresses, or `None`.
//!
//! All three are pure and total. Strict support always implies resemblance:
//! `resembles` is the heuristic match or'ed with `supported`.

mod paths;
mod urls;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::source::{PathValue, Source};

/// Schemes accepted for web URLs.
pub const WEB_URL_SCHEMES: &[&str] = &["http", "https", "ftp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    WebUrl,
    GenericUrl,
    LocalFileUrl,
    FilePath,
    DirectoryPath,
    /// Path of either kind, file or directory.
    FilesystemPath,
    PathLikeObject,
    DirectoryPathLike,
    FilePathLike,
    InMemoryFile,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 10] = [
        ResourceKind::WebUrl,
        ResourceKind::GenericUrl,
        ResourceKind::LocalFileUrl,
        ResourceKind::FilePath,
        ResourceKind::DirectoryPath,
        ResourceKind::FilesystemPath,
        ResourceKind::PathLikeObject,
        ResourceKind::DirectoryPathLike,
        ResourceKind::FilePathLike,
        ResourceKind::InMemoryFile,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::WebUrl => "web_url",
            ResourceKind::GenericUrl => "generic_url",
            ResourceKind::LocalFileUrl => "local_file_url",
            ResourceKind::FilePath => "file_path",
            ResourceKind::DirectoryPath => "directory_path",
            ResourceKind::FilesystemPath => "filesystem_path",
            ResourceKind::PathLikeObject => "path_like_object",
            ResourceKind::DirectoryPathLike => "directory_path_like",
            ResourceKind::FilePathLike => "file_path_like",
            ResourceKind::InMemoryFile => "in_memory_file",
        }
    }

    /// URL kinds are the only ones whose locality depends on the source.
    pub fn is_url(self) -> bool {
        matches!(self, ResourceKind::WebUrl | ResourceKind::GenericUrl)
    }

    pub fn supported(self, source: &Source<'_>, ctx: &Context) -> bool {
        let verdict = match self {
            ResourceKind::WebUrl => urls::web_url_supported(source),
            ResourceKind::GenericUrl => urls::generic_url_supported(source),
            ResourceKind::LocalFileUrl => urls::local_file_url_supported(source, ctx),
            ResourceKind::FilePath => paths::file_path_supported(source, ctx),
            ResourceKind::DirectoryPath => paths::directory_path_supported(source, ctx),
            ResourceKind::FilesystemPath => paths::filesystem_path_supported(source, ctx),
            ResourceKind::PathLikeObject => paths::path_like_supported(source, ctx),
            ResourceKind::DirectoryPathLike => paths::directory_path_like_supported(source, ctx),
            ResourceKind::FilePathLike => paths::file_path_like_supported(source, ctx),
            ResourceKind::InMemoryFile => source.is_stream(),
        };
        tracing::trace!(kind = self.as_str(), verdict, "supported");
        verdict
    }

    pub fn resembles(self, source: &Source<'_>, ctx: &Context) -> bool {
        let heuristic = match self {
            ResourceKind::WebUrl => urls::web_url_resembles(source),
            ResourceKind::GenericUrl => urls::generic_url_resembles(source),
            ResourceKind::LocalFileUrl => urls::local_file_url_resembles(source),
            ResourceKind::FilePath => paths::file_path_resembles(source, ctx),
            ResourceKind::DirectoryPath => paths::directory_path_resembles(source, ctx),
            ResourceKind::FilesystemPath => paths::filesystem_path_resembles(source, ctx),
            ResourceKind::PathLikeObject
            | ResourceKind::DirectoryPathLike
            | ResourceKind::FilePathLike => source.is_path_handle(),
            ResourceKind::InMemoryFile => source.is_stream(),
        };
        tracing::trace!(kind = self.as_str(), heuristic, "resembles");
        heuristic || self.supported(source, ctx)
    }

    pub fn extract_path(self, source: &Source<'_>) -> Option<PathValue> {
        let path = match self {
            ResourceKind::WebUrl | ResourceKind::GenericUrl => urls::url_path(source),
            ResourceKind::LocalFileUrl => urls::local_file_url_path(source),
            ResourceKind::FilePath | ResourceKind::DirectoryPath | ResourceKind::FilesystemPath => {
                source.as_path_value()
            }
            ResourceKind::PathLikeObject
            | ResourceKind::DirectoryPathLike
            | ResourceKind::FilePathLike => match source {
                Source::Path(handle) => Some(PathValue::Path(handle.fs_path().to_path_buf())),
                _ => None,
            },
            ResourceKind::InMemoryFile => match source {
                Source::Stream(handle) => handle.name(),
                _ => None,
            },
        };
        path.filter(|p| !p.is_empty())
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        ResourceKind::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| format!("unknown resource kind: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemoryFile;
    use std::path::PathBuf;

    #[test]
    fn names_round_trip_through_from_str() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.as_str().parse::<ResourceKind>().unwrap(), kind);
        }
        assert_eq!(
            "Local-File-URL".parse::<ResourceKind>().unwrap(),
            ResourceKind::LocalFileUrl
        );
        assert!("webpage".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&ResourceKind::DirectoryPathLike).unwrap();
        assert_eq!(json, "\"directory_path_like\"");
    }

    #[test]
    fn opaque_values_fail_closed() {
        let ctx = Context::default();
        let value = 42_u32;
        let source = Source::opaque(&value);
        for kind in ResourceKind::ALL {
            assert!(!kind.supported(&source, &ctx), "{kind}");
            assert!(!kind.resembles(&source, &ctx), "{kind}");
            assert!(kind.extract_path(&source).is_none(), "{kind}");
        }
    }

    #[test]
    fn stream_without_name_has_no_path() {
        let ctx = Context::default();
        let stream = std::io::Cursor::new(Vec::<u8>::new());
        let source = Source::stream(&stream);
        assert!(ResourceKind::InMemoryFile.supported(&source, &ctx));
        assert!(ResourceKind::InMemoryFile.extract_path(&source).is_none());
    }

    #[test]
    fn stream_name_becomes_path() {
        let stream = MemoryFile::new().with_name(b"dump.json".to_vec());
        let source = Source::stream(&stream);
        assert_eq!(
            ResourceKind::InMemoryFile.extract_path(&source),
            Some(PathValue::Bytes(b"dump.json".to_vec()))
        );
    }

    #[test]
    fn path_like_kinds_only_accept_handles() {
        let ctx = Context::default();
        let handle = PathBuf::from("/definitely/missing/file.txt");
        let source = Source::from(&handle);
        assert!(ResourceKind::FilePathLike.resembles(&source, &ctx));
        assert!(!ResourceKind::FilePathLike.supported(&source, &ctx));
        assert_eq!(
            ResourceKind::FilePathLike.extract_path(&source),
            Some(PathValue::Path(handle.clone()))
        );

        let text = Source::from("/definitely/missing/file.txt");
        assert!(!ResourceKind::PathLikeObject.resembles(&text, &ctx));
        assert!(ResourceKind::PathLikeObject.extract_path(&text).is_none());
    }

    #[test]
    fn url_path_extraction() {
        let source = Source::from("https://example.com/a/report.pdf?x=1");
        assert_eq!(
            ResourceKind::WebUrl.extract_path(&source),
            Some(PathValue::Text("/a/report.pdf".to_string()))
        );
        let bare = Source::from("https://example.com");
        assert!(ResourceKind::WebUrl.extract_path(&bare).is_none());
    }
}
