//! One-call helpers over a default [`Resolver`].
//!
//! Unless a function takes a `strict` flag it resolves heuristically: the
//! first supported kind, else the first resembling one. Functions answering
//! a yes/no question return `false` when nothing matches.

use crate::content_type;
use crate::descriptor::{Descriptor, DescriptorSummary};
use crate::error::ResidError;
use crate::kind::ResourceKind;
use crate::resolver::Resolver;
use crate::source::Source;

pub fn classify<'a>(source: impl Into<Source<'a>>, strict: bool) -> Option<Descriptor<'a>> {
    Resolver::default().classify(source, strict)
}

/// Every matching descriptor in priority order: supported ones when `strict`,
/// otherwise everything that is supported or resembles.
pub fn classify_all<'a>(source: impl Into<Source<'a>>, strict: bool) -> Vec<Descriptor<'a>> {
    Resolver::default()
        .resolve(source)
        .into_descriptors()
        .into_iter()
        .filter(|d| if strict { d.supported() } else { d.success() })
        .collect()
}

pub fn force_kind<'a>(
    source: impl Into<Source<'a>>,
    kind: ResourceKind,
) -> Result<Descriptor<'a>, ResidError> {
    Resolver::default().force(source, kind)
}

fn heuristic<'a>(source: impl Into<Source<'a>>) -> Option<Descriptor<'a>> {
    classify(source, false)
}

pub fn guess_content_type<'a>(source: impl Into<Source<'a>>) -> Option<String> {
    heuristic(source).and_then(|d| d.content_type().map(str::to_string))
}

pub fn guess_encoding<'a>(source: impl Into<Source<'a>>) -> Option<String> {
    heuristic(source).and_then(|d| d.encoding())
}

pub fn is_locally_available<'a>(source: impl Into<Source<'a>>) -> bool {
    heuristic(source).is_some_and(|d| d.locally_available())
}

pub fn is_remotely_available<'a>(source: impl Into<Source<'a>>) -> bool {
    heuristic(source).is_some_and(|d| d.remotely_available())
}

pub fn is_supported<'a>(source: impl Into<Source<'a>>) -> bool {
    heuristic(source).is_some_and(|d| d.supported())
}

pub fn is_resembled<'a>(source: impl Into<Source<'a>>) -> bool {
    heuristic(source).is_some_and(|d| d.resembles())
}

pub fn kind_name<'a>(source: impl Into<Source<'a>>) -> Option<&'static str> {
    heuristic(source).map(|d| d.kind_name())
}

/// Display form of the source, or `None` if no kind matches it.
pub fn canonical_string<'a>(source: impl Into<Source<'a>>) -> Option<String> {
    heuristic(source).map(|d| d.canonical_string())
}

pub fn summarize<'a>(source: impl Into<Source<'a>>, strict: bool) -> Option<DescriptorSummary> {
    classify(source, strict).map(|d| d.summary())
}

pub fn is_webpage<'a>(source: impl Into<Source<'a>>) -> bool {
    let source = source.into();
    Resolver::new([ResourceKind::WebUrl])
        .classify(source, true)
        .is_some_and(|d| d.is_webpage())
}

/// Web URL whose path carries an extension with a known content type.
pub fn is_remote_file<'a>(source: impl Into<Source<'a>>) -> bool {
    let source = source.into();
    let Ok(d) = Resolver::default().force(source, ResourceKind::WebUrl) else {
        return false;
    };
    d.path()
        .and_then(|p| content_type::guess_content_type(&p.to_string_lossy()))
        .is_some()
}

/// Not a remote file, and at least shaped like a local file path.
pub fn is_local_file<'a>(source: impl Into<Source<'a>>) -> bool {
    let source = source.into();
    if is_remote_file(source) {
        return false;
    }
    Resolver::new([ResourceKind::FilePath])
        .classify(source, false)
        .is_some()
}
