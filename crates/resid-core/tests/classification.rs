//! End-to-end classification against real files, directories and streams.

mod common;

use std::io::Cursor;
use std::path::PathBuf;

use common::fixtures::Fixture;
use resid_core::{
    api, MemoryFile, PathValue, ResourceKind, Resolver, Source, Status, DEFAULT_KINDS,
};

fn kind_of<'a>(source: impl Into<Source<'a>>, strict: bool) -> Option<ResourceKind> {
    Resolver::default().classify(source, strict).map(|d| d.kind())
}

#[test]
fn supported_always_implies_resembles() {
    let fx = Fixture::new();
    let file_text = fx.file_text();
    let dir_text = fx.subdir_text();
    let file_url = fx.file_url();
    let handle = fx.file.clone();
    let stream = MemoryFile::with_contents("hello").with_name("hello.txt");
    let number = 7_i64;

    let sources: Vec<Source<'_>> = vec![
        Source::from("https://example.com/"),
        Source::from("ftp://mirror.example.org/pub/x.iso"),
        Source::from("git://example.com/repo"),
        Source::from("mailto:someone@example.com"),
        Source::from("/tmp/does/not/exist.csv"),
        Source::from("relative/dir/"),
        Source::from("not a url or @@ path!!"),
        Source::from(""),
        Source::from(file_text.as_str()),
        Source::from(dir_text.as_str()),
        Source::from(file_url.as_str()),
        Source::from(&handle),
        Source::stream(&stream),
        Source::opaque(&number),
    ];

    for source in sources {
        for kind in ResourceKind::ALL {
            let resolver = Resolver::new([kind]);
            let d = resolver.resolve(source).into_descriptors().remove(0);
            if d.supported() {
                assert!(d.resembles(), "{kind} supports but does not resemble {source:?}");
            }
        }
    }
}

#[test]
fn file_urls_decode_to_local_paths() {
    let set = Resolver::new([ResourceKind::LocalFileUrl]).resolve("file:///C:/dir/name.txt");
    let d = &set.descriptors()[0];
    assert_eq!(d.path(), Some(&PathValue::Text("C:/dir/name.txt".to_string())));

    let set = Resolver::new([ResourceKind::LocalFileUrl]).resolve("file:///home/u/name.txt");
    let d = &set.descriptors()[0];
    assert_eq!(d.path(), Some(&PathValue::Text("/home/u/name.txt".to_string())));
    assert!(d.resembles());
}

#[test]
fn web_urls_in_strict_mode() {
    let d = api::classify("https://example.com/", true).unwrap();
    assert_eq!(d.kind(), ResourceKind::WebUrl);
    assert_eq!(d.content_type(), Some("text/html"));

    let d = api::classify("https://example.com/report.pdf", true).unwrap();
    assert_eq!(d.kind(), ResourceKind::WebUrl);
    assert_eq!(d.content_type(), Some("application/pdf"));
}

#[test]
fn missing_file_only_matches_heuristically() {
    assert_eq!(kind_of("/tmp/does/not/exist.csv", true), None);

    let d = api::classify("/tmp/does/not/exist.csv", false).unwrap();
    assert_eq!(d.kind(), ResourceKind::FilePath);
    assert_eq!(d.status(), Status::NotSupportedButResembles);
    assert_eq!(d.content_type(), Some("text/csv"));
}

#[test]
fn prose_matches_nothing() {
    let set = Resolver::default().resolve("not a url or @@ path!!");
    assert!(set.success_descriptors().is_empty());
    assert!(set.best(false).is_none());
}

#[test]
fn nameless_stream_is_in_memory_file() {
    let stream = Cursor::new(b"payload".to_vec());
    let d = api::classify(Source::stream(&stream), true).unwrap();
    assert_eq!(d.kind(), ResourceKind::InMemoryFile);
    assert!(d.supported());
    assert!(d.path().is_none());
    assert!(d.content_type().is_none());
}

#[test]
fn named_temp_file_stream_takes_its_path() {
    let tmp = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    let d = api::classify(Source::stream(&tmp), true).unwrap();
    assert_eq!(d.kind(), ResourceKind::InMemoryFile);
    assert_eq!(d.path(), Some(&PathValue::Path(tmp.path().to_path_buf())));
    assert_eq!(d.content_type(), Some("application/json"));
    assert_eq!(d.canonical_string(), tmp.path().display().to_string());
}

#[test]
fn existing_entries_are_supported() {
    let fx = Fixture::new();

    assert_eq!(kind_of(fx.file_text().as_str(), true), Some(ResourceKind::FilePath));
    assert_eq!(kind_of(fx.subdir_text().as_str(), true), Some(ResourceKind::DirectoryPath));
    assert_eq!(kind_of(fx.file_url().as_str(), true), Some(ResourceKind::LocalFileUrl));
    assert_eq!(kind_of(&fx.file, true), Some(ResourceKind::FilePathLike));
    assert_eq!(kind_of(&fx.subdir, true), Some(ResourceKind::DirectoryPathLike));

    let file_url = fx.file_url();
    let d = api::classify(file_url.as_str(), true).unwrap();
    assert_eq!(d.content_type(), Some("text/csv"));
    assert!(d.locally_available());
}

#[test]
fn byte_sources_behave_like_text() {
    let fx = Fixture::new();
    let raw = fx.file_text().into_bytes();
    assert_eq!(kind_of(&raw, true), Some(ResourceKind::FilePath));
    let url = b"https://example.com/a.txt".to_vec();
    assert_eq!(kind_of(&url, true), Some(ResourceKind::WebUrl));
}

#[test]
fn missing_handle_resembles_file_path_like() {
    let handle = PathBuf::from("/definitely/missing/archive.tar");
    assert_eq!(kind_of(&handle, true), None);
    assert_eq!(kind_of(&handle, false), Some(ResourceKind::FilePathLike));
}

#[test]
fn priority_order_is_stable() {
    let fx = Fixture::new();
    let text = fx.file_text();
    let resolver = Resolver::default();

    let first: Vec<_> = resolver
        .resolve(text.as_str())
        .descriptors()
        .iter()
        .map(|d| (d.kind(), d.status()))
        .collect();
    for _ in 0..3 {
        let again: Vec<_> = resolver
            .resolve(text.as_str())
            .descriptors()
            .iter()
            .map(|d| (d.kind(), d.status()))
            .collect();
        assert_eq!(again, first);
    }
    let kinds: Vec<_> = first.iter().map(|(k, _)| *k).collect();
    assert_eq!(kinds, DEFAULT_KINDS.to_vec());
}

#[test]
fn custom_order_changes_the_winner() {
    let resolver = Resolver::new([ResourceKind::GenericUrl, ResourceKind::WebUrl]);
    let d = resolver.classify("https://example.com/", true).unwrap();
    assert_eq!(d.kind(), ResourceKind::GenericUrl);
    assert_eq!(d.content_type(), None);
}
