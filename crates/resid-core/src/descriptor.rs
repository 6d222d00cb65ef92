//! A source bound to one resource kind, with derived metadata.
//!
//! Derived attributes are computed on first access and cached in the
//! descriptor itself (`OnceCell`), so repeated reads return the same value
//! and nothing is shared between descriptors.

use std::cell::OnceCell;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::content_type::{self, extension, html_content_type};
use crate::context::Context;
use crate::kind::ResourceKind;
use crate::source::{PathValue, Source};
use crate::url_model::UrlParts;

/// Explicit metadata that wins over inference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overrides {
    pub content_type: Option<String>,
    pub encoding: Option<String>,
}

impl Overrides {
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    NotSupportedButResembles,
    NotSupportedCritically,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Ok => "ok",
            Status::NotSupportedButResembles => "not supported (resembles)",
            Status::NotSupportedCritically => "not supported (critically)",
        })
    }
}

/// Serializable snapshot of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptorSummary {
    pub uri: String,
    pub kind: ResourceKind,
    pub path: Option<String>,
    pub content_type: Option<String>,
    pub encoding: Option<String>,
    pub supported: bool,
    pub resembles: bool,
    pub available_locally: bool,
    pub issues: bool,
    pub status: Status,
}

#[derive(Debug)]
pub struct Descriptor<'a> {
    source: Source<'a>,
    kind: ResourceKind,
    overrides: Overrides,
    ctx: Context,
    supported: OnceCell<bool>,
    resembles: OnceCell<bool>,
    path: OnceCell<Option<PathValue>>,
    content_type: OnceCell<Option<String>>,
}

impl<'a> Descriptor<'a> {
    pub fn new(source: Source<'a>, kind: ResourceKind, ctx: Context) -> Self {
        Self::with_overrides(source, kind, ctx, Overrides::default())
    }

    pub fn with_overrides(
        source: Source<'a>,
        kind: ResourceKind,
        ctx: Context,
        overrides: Overrides,
    ) -> Self {
        Self {
            source,
            kind,
            overrides,
            ctx,
            supported: OnceCell::new(),
            resembles: OnceCell::new(),
            path: OnceCell::new(),
            content_type: OnceCell::new(),
        }
    }

    pub fn source(&self) -> Source<'a> {
        self.source
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    pub fn supported(&self) -> bool {
        *self
            .supported
            .get_or_init(|| self.kind.supported(&self.source, &self.ctx))
    }

    pub fn resembles(&self) -> bool {
        *self.resembles.get_or_init(|| {
            // Supported implies resembles; skip the heuristic probe.
            self.supported() || self.kind.resembles(&self.source, &self.ctx)
        })
    }

    /// Neither supported nor resembling: the source fits no part of this kind.
    pub fn issues(&self) -> bool {
        !(self.supported() || self.resembles())
    }

    pub fn success(&self) -> bool {
        !self.issues()
    }

    pub fn status(&self) -> Status {
        if self.supported() {
            Status::Ok
        } else if self.resembles() {
            Status::NotSupportedButResembles
        } else {
            Status::NotSupportedCritically
        }
    }

    pub fn path(&self) -> Option<&PathValue> {
        self.path
            .get_or_init(|| self.kind.extract_path(&self.source))
            .as_ref()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type
            .get_or_init(|| self.infer_content_type())
            .as_deref()
    }

    /// Override, else the encoding implied by the content type's canonical
    /// extension.
    pub fn encoding(&self) -> Option<String> {
        if let Some(encoding) = &self.overrides.encoding {
            return Some(encoding.clone());
        }
        let ext = content_type::guess_extension(self.content_type()?)?;
        content_type::guess_encoding(&format!("file.{ext}"))
    }

    /// Whether the data behind the source is on this machine. URL kinds check
    /// for a loopback host; everything else is local.
    pub fn locally_available(&self) -> bool {
        if !self.kind.is_url() {
            return true;
        }
        self.url_parts()
            .and_then(|parts| parts.hostname())
            .is_some_and(|host| self.ctx.is_local_host(&host))
    }

    pub fn remotely_available(&self) -> bool {
        !self.locally_available()
    }

    pub fn canonical_string(&self) -> String {
        self.source.canonical_string()
    }

    pub fn scheme(&self) -> Option<String> {
        self.url_parts()
            .map(|p| p.scheme)
            .filter(|s| !s.is_empty())
    }

    pub fn netloc(&self) -> Option<String> {
        self.url_parts()
            .map(|p| p.netloc)
            .filter(|s| !s.is_empty())
    }

    pub fn hostname(&self) -> Option<String> {
        self.url_parts().and_then(|p| p.hostname())
    }

    /// Web URL addressing an HTML page: no extension, or an HTML one.
    pub fn is_webpage(&self) -> bool {
        if self.kind != ResourceKind::WebUrl || !self.supported() {
            return false;
        }
        let Some(path) = self.path().map(|p| p.to_string_lossy().into_owned()) else {
            return true;
        };
        if extension(&path).is_none() {
            return true;
        }
        // The registry answer, without the bare-URL html default.
        let registered = self
            .overrides
            .content_type
            .clone()
            .or_else(|| content_type::guess_content_type(&path));
        registered == Some(html_content_type())
    }

    pub fn summary(&self) -> DescriptorSummary {
        DescriptorSummary {
            uri: self.canonical_string(),
            kind: self.kind,
            path: self.path().map(|p| p.to_string_lossy().into_owned()),
            content_type: self.content_type().map(str::to_string),
            encoding: self.encoding(),
            supported: self.supported(),
            resembles: self.resembles(),
            available_locally: self.locally_available(),
            issues: self.issues(),
            status: self.status(),
        }
    }

    fn url_parts(&self) -> Option<UrlParts> {
        if !matches!(
            self.kind,
            ResourceKind::WebUrl | ResourceKind::GenericUrl | ResourceKind::LocalFileUrl
        ) {
            return None;
        }
        self.source.as_text().map(|text| UrlParts::split(&text))
    }

    fn infer_content_type(&self) -> Option<String> {
        if let Some(content_type) = &self.overrides.content_type {
            return Some(content_type.clone());
        }
        let guessed = self
            .path()
            .and_then(|p| content_type::guess_content_type(&p.to_string_lossy()));
        if guessed.is_none()
            && self.kind == ResourceKind::WebUrl
            && self.source.as_text().is_some()
        {
            // A bare web URL is assumed to address an HTML page.
            return Some(html_content_type());
        }
        guessed
    }
}
