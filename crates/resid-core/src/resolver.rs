//! Resolution of a source across every resource kind.
//!
//! A [`Resolver`] holds an explicit kind list in priority order (most
//! specific first) and builds a [`ResolutionSet`]: one [`Descriptor`] per
//! kind for a single source. Queries over the set keep that order.

use std::sync::Arc;

use crate::config::ResidConfig;
use crate::context::Context;
use crate::descriptor::{Descriptor, Overrides};
use crate::error::ResidError;
use crate::kind::ResourceKind;
use crate::probe::FsProbe;
use crate::source::Source;

/// Built-in priority order.
///
/// A `file://` URL also looks like a generic URL, and a file path handle looks
/// like a plain path, so the more specific kinds come first.
pub const DEFAULT_KINDS: [ResourceKind; 9] = [
    ResourceKind::LocalFileUrl,
    ResourceKind::FilePathLike,
    ResourceKind::FilePath,
    ResourceKind::DirectoryPathLike,
    ResourceKind::DirectoryPath,
    ResourceKind::FilesystemPath,
    ResourceKind::WebUrl,
    ResourceKind::GenericUrl,
    ResourceKind::InMemoryFile,
];

#[derive(Debug, Clone)]
pub struct Resolver {
    kinds: Vec<ResourceKind>,
    ctx: Context,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(DEFAULT_KINDS)
    }
}

impl Resolver {
    /// Resolver trying `kinds` in the given order. Repeated kinds are dropped.
    pub fn new(kinds: impl IntoIterator<Item = ResourceKind>) -> Self {
        Self {
            kinds: dedup_kinds(kinds),
            ctx: Context::default(),
        }
    }

    pub fn from_config(cfg: &ResidConfig) -> Self {
        let resolver = match &cfg.kinds {
            Some(kinds) => Self::new(kinds.iter().copied()),
            None => Self::default(),
        };
        resolver.with_local_hosts(cfg.local_hosts.iter().cloned())
    }

    pub fn with_probe(mut self, probe: Arc<dyn FsProbe>) -> Self {
        let hosts = self.ctx.local_hosts().to_vec();
        self.ctx = Context::new(probe).with_local_hosts(hosts);
        self
    }

    pub fn with_local_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ctx = self.ctx.with_local_hosts(hosts);
        self
    }

    pub fn kinds(&self) -> &[ResourceKind] {
        &self.kinds
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn resolve<'a>(&self, source: impl Into<Source<'a>>) -> ResolutionSet<'a> {
        self.resolve_with(source, Overrides::default())
    }

    /// Like [`Resolver::resolve`], with explicit content type / encoding
    /// applied to every descriptor.
    pub fn resolve_with<'a>(
        &self,
        source: impl Into<Source<'a>>,
        overrides: Overrides,
    ) -> ResolutionSet<'a> {
        ResolutionSet::build(source.into(), self.kinds.clone(), self.ctx.clone(), overrides)
    }

    /// Best descriptor for `source`: first supported, else (when `strict` is
    /// false) first resembling, else `None`.
    pub fn classify<'a>(&self, source: impl Into<Source<'a>>, strict: bool) -> Option<Descriptor<'a>> {
        self.resolve(source).into_best(strict)
    }

    /// Descriptor of one specific kind, which must be strictly supported.
    pub fn force<'a>(
        &self,
        source: impl Into<Source<'a>>,
        kind: ResourceKind,
    ) -> Result<Descriptor<'a>, ResidError> {
        let source = source.into();
        let descriptor = Descriptor::new(source, kind, self.ctx.clone());
        if descriptor.supported() {
            Ok(descriptor)
        } else {
            Err(ResidError::unsupported(&source.canonical_string(), kind))
        }
    }
}

fn dedup_kinds(kinds: impl IntoIterator<Item = ResourceKind>) -> Vec<ResourceKind> {
    let mut out: Vec<ResourceKind> = Vec::new();
    for kind in kinds {
        if !out.contains(&kind) {
            out.push(kind);
        }
    }
    out
}

/// Descriptors built for one source, one per kind, in priority order.
#[derive(Debug)]
pub struct ResolutionSet<'a> {
    source: Source<'a>,
    kinds: Vec<ResourceKind>,
    ctx: Context,
    overrides: Overrides,
    descriptors: Vec<Descriptor<'a>>,
}

impl<'a> ResolutionSet<'a> {
    fn build(
        source: Source<'a>,
        kinds: Vec<ResourceKind>,
        ctx: Context,
        overrides: Overrides,
    ) -> Self {
        let descriptors = create_descriptors(source, &kinds, &ctx, &overrides);
        Self {
            source,
            kinds,
            ctx,
            overrides,
            descriptors,
        }
    }

    pub fn source(&self) -> Source<'a> {
        self.source
    }

    pub fn kinds(&self) -> &[ResourceKind] {
        &self.kinds
    }

    pub fn descriptors(&self) -> &[Descriptor<'a>] {
        &self.descriptors
    }

    pub fn into_descriptors(self) -> Vec<Descriptor<'a>> {
        self.descriptors
    }

    /// Replace the kind list. Every descriptor is rebuilt.
    pub fn retarget(&mut self, kinds: impl IntoIterator<Item = ResourceKind>) {
        self.kinds = dedup_kinds(kinds);
        self.descriptors = create_descriptors(self.source, &self.kinds, &self.ctx, &self.overrides);
    }

    pub fn supported_descriptors(&self) -> Vec<&Descriptor<'a>> {
        self.filter(Descriptor::supported)
    }

    pub fn resembling_descriptors(&self) -> Vec<&Descriptor<'a>> {
        self.filter(Descriptor::resembles)
    }

    pub fn issue_descriptors(&self) -> Vec<&Descriptor<'a>> {
        self.filter(Descriptor::issues)
    }

    pub fn success_descriptors(&self) -> Vec<&Descriptor<'a>> {
        self.filter(Descriptor::success)
    }

    pub fn first_supported(&self) -> Option<&Descriptor<'a>> {
        self.descriptors.iter().find(|d| d.supported())
    }

    pub fn first_resembling(&self) -> Option<&Descriptor<'a>> {
        self.descriptors.iter().find(|d| d.resembles())
    }

    pub fn first_issue(&self) -> Option<&Descriptor<'a>> {
        self.descriptors.iter().find(|d| d.issues())
    }

    pub fn first_success(&self) -> Option<&Descriptor<'a>> {
        self.descriptors.iter().find(|d| d.success())
    }

    pub fn best(&self, strict: bool) -> Option<&Descriptor<'a>> {
        self.best_index(strict).map(|i| &self.descriptors[i])
    }

    pub fn into_best(self, strict: bool) -> Option<Descriptor<'a>> {
        let index = self.best_index(strict)?;
        self.descriptors.into_iter().nth(index)
    }

    fn best_index(&self, strict: bool) -> Option<usize> {
        let found = self
            .descriptors
            .iter()
            .position(|d| d.supported())
            .or_else(|| {
                if strict {
                    None
                } else {
                    self.descriptors.iter().position(|d| d.resembles())
                }
            });
        match found {
            Some(i) => tracing::debug!(
                kind = self.descriptors[i].kind_name(),
                supported = self.descriptors[i].supported(),
                "resolved source"
            ),
            None => tracing::debug!(strict, "no resource kind matched source"),
        }
        found
    }

    fn filter(&self, keep: impl Fn(&Descriptor<'a>) -> bool) -> Vec<&Descriptor<'a>> {
        self.descriptors.iter().filter(|d| keep(d)).collect()
    }
}

fn create_descriptors<'a>(
    source: Source<'a>,
    kinds: &[ResourceKind],
    ctx: &Context,
    overrides: &Overrides,
) -> Vec<Descriptor<'a>> {
    kinds
        .iter()
        .map(|kind| Descriptor::with_overrides(source, *kind, ctx.clone(), overrides.clone()))
        .collect()
}
