//! Filesystem path classifiers.

use std::path::Path;

use crate::content_type::extension;
use crate::context::Context;
use crate::probe::path_ok;
use crate::source::Source;
use crate::url_model::{has_drive_prefix, UrlParts};

/// Longest single path component accepted (Linux NAME_MAX, in bytes).
const NAME_MAX: usize = 255;

/// Characters no portable file name may contain.
const RESERVED: &[char] = &['<', '>', '"', '|', '?', '*'];

#[derive(Debug, Clone, Copy)]
enum Target {
    Any,
    File,
    Dir,
}

fn exists_as(source: &Source<'_>, ctx: &Context, target: Target) -> bool {
    let Some(value) = source.as_path_value() else {
        return false;
    };
    if value.is_empty() {
        return false;
    }
    let path = value.to_path_buf();
    let probe = ctx.probe();
    match target {
        Target::Any => probe.exists(&path),
        Target::File => probe.is_file(&path),
        Target::Dir => probe.is_dir(&path),
    }
}

pub(super) fn filesystem_path_supported(source: &Source<'_>, ctx: &Context) -> bool {
    exists_as(source, ctx, Target::Any)
}

pub(super) fn directory_path_supported(source: &Source<'_>, ctx: &Context) -> bool {
    exists_as(source, ctx, Target::Dir)
}

/// Only string and byte sources; path handles go through `FilePathLike`.
pub(super) fn file_path_supported(source: &Source<'_>, ctx: &Context) -> bool {
    source.as_text().is_some() && exists_as(source, ctx, Target::File)
}

pub(super) fn path_like_supported(source: &Source<'_>, ctx: &Context) -> bool {
    source.is_path_handle() && exists_as(source, ctx, Target::Any)
}

pub(super) fn directory_path_like_supported(source: &Source<'_>, ctx: &Context) -> bool {
    source.is_path_handle() && exists_as(source, ctx, Target::Dir)
}

pub(super) fn file_path_like_supported(source: &Source<'_>, ctx: &Context) -> bool {
    source.is_path_handle() && exists_as(source, ctx, Target::File)
}

pub(super) fn filesystem_path_resembles(source: &Source<'_>, ctx: &Context) -> bool {
    match source {
        Source::Path(_) => true,
        Source::Text(_) | Source::Bytes(_) => source
            .as_text()
            .is_some_and(|text| text_resembles_path(&text, ctx)),
        Source::Stream(_) | Source::Opaque(_) => false,
    }
}

pub(super) fn directory_path_resembles(source: &Source<'_>, ctx: &Context) -> bool {
    if !filesystem_path_resembles(source, ctx) {
        return false;
    }
    let Some(value) = source.as_path_value() else {
        return false;
    };
    let text = value.to_string_lossy();
    ends_with_separator(&text) || extension(&text).is_none()
}

pub(super) fn file_path_resembles(source: &Source<'_>, ctx: &Context) -> bool {
    if !filesystem_path_resembles(source, ctx) {
        return false;
    }
    source
        .as_path_value()
        .is_some_and(|value| !ends_with_separator(&value.to_string_lossy()))
}

fn ends_with_separator(text: &str) -> bool {
    text.ends_with('/') || text.ends_with('\\')
}

/// Syntactic path check plus a writability probe per component.
fn text_resembles_path(text: &str, ctx: &Context) -> bool {
    if text.is_empty() {
        return false;
    }
    if text.contains('/') && text.contains('\\') {
        return false;
    }

    let parts = UrlParts::split(text);
    // A hostname or `;params` means some other kind of URL.
    if !parts.netloc.is_empty() || !parts.params.is_empty() {
        return false;
    }
    let drive = has_drive_prefix(text);
    if !parts.scheme.is_empty() && !drive {
        return false;
    }
    if is_bare_prose(text) {
        return false;
    }

    let rest = if drive { &text[2..] } else { text };
    let segments: Vec<&str> = rest
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
        .collect();
    // Nothing to name: only a root such as `/` or `C:\` still looks like a path.
    if segments.is_empty() {
        return ends_with_separator(text);
    }
    segments
        .into_iter()
        .all(|segment| is_plausible_name(segment) && path_ok(ctx.probe(), Path::new(segment), false))
}

/// Free text such as `not a url or @@ path!!`: one component, whitespace,
/// and no extension.
fn is_bare_prose(text: &str) -> bool {
    !text.contains(['/', '\\'])
        && text.chars().any(char::is_whitespace)
        && extension(text).is_none()
}

fn is_plausible_name(segment: &str) -> bool {
    segment.len() <= NAME_MAX
        && !segment.chars().any(|c| c.is_control() || RESERVED.contains(&c))
}
