pub mod config;
pub mod error;
pub mod logging;

pub mod api;
pub mod content_type;
pub mod context;
pub mod descriptor;
pub mod kind;
pub mod probe;
pub mod resolver;
pub mod source;
pub mod url_model;

pub use descriptor::{Descriptor, DescriptorSummary, Overrides, Status};
pub use error::ResidError;
pub use kind::ResourceKind;
pub use resolver::{ResolutionSet, Resolver, DEFAULT_KINDS};
pub use source::{MemoryFile, PathHandle, PathValue, Source, StreamHandle};
