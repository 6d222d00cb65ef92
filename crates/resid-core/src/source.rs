//! Source references handed to the resolver.
//!
//! A [`Source`] borrows the caller's value and never mutates it. Path-like and
//! stream-like values are recognised through the [`PathHandle`] and
//! [`StreamHandle`] capability traits rather than by probing attributes.

use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tempfile::{NamedTempFile, TempDir};

/// Value that exposes an inner filesystem path.
pub trait PathHandle: fmt::Debug {
    fn fs_path(&self) -> &Path;
}

impl PathHandle for PathBuf {
    fn fs_path(&self) -> &Path {
        self.as_path()
    }
}

impl PathHandle for TempDir {
    fn fs_path(&self) -> &Path {
        self.path()
    }
}

/// File-like value: readable, writable, seekable, truncatable, closable.
pub trait StreamHandle: Read + Write + Seek + fmt::Debug {
    /// Truncate (or extend) the stream to `len` bytes.
    fn truncate(&mut self, len: u64) -> io::Result<()>;

    /// Whether the stream has been closed.
    fn closed(&self) -> bool;

    /// Optional name the stream was opened under.
    fn name(&self) -> Option<PathValue> {
        None
    }
}

impl StreamHandle for Cursor<Vec<u8>> {
    fn truncate(&mut self, len: u64) -> io::Result<()> {
        let len = usize::try_from(len)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "length exceeds usize"))?;
        self.get_mut().truncate(len);
        Ok(())
    }

    fn closed(&self) -> bool {
        false
    }
}

impl StreamHandle for File {
    fn truncate(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }

    fn closed(&self) -> bool {
        false
    }
}

impl StreamHandle for NamedTempFile {
    fn truncate(&mut self, len: u64) -> io::Result<()> {
        self.as_file().set_len(len)
    }

    fn closed(&self) -> bool {
        false
    }

    fn name(&self) -> Option<PathValue> {
        Some(PathValue::Path(self.path().to_path_buf()))
    }
}

/// In-memory stream with an optional name, closable like a file object.
#[derive(Debug, Default)]
pub struct MemoryFile {
    buf: Cursor<Vec<u8>>,
    name: Option<PathValue>,
    closed: bool,
}

impl MemoryFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stream pre-filled with `data`, positioned at the start.
    pub fn with_contents(data: impl Into<Vec<u8>>) -> Self {
        Self {
            buf: Cursor::new(data.into()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<PathValue>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn contents(&self) -> &[u8] {
        self.buf.get_ref()
    }

    fn ensure_open(&self) -> io::Result<()> {
        if self.closed {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "I/O operation on closed stream",
            ));
        }
        Ok(())
    }
}

impl Read for MemoryFile {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        self.ensure_open()?;
        self.buf.read(out)
    }
}

impl Write for MemoryFile {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.ensure_open()?;
        self.buf.write(data)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.ensure_open()
    }
}

impl Seek for MemoryFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.ensure_open()?;
        self.buf.seek(pos)
    }
}

impl StreamHandle for MemoryFile {
    fn truncate(&mut self, len: u64) -> io::Result<()> {
        self.ensure_open()?;
        StreamHandle::truncate(&mut self.buf, len)
    }

    fn closed(&self) -> bool {
        self.closed
    }

    fn name(&self) -> Option<PathValue> {
        self.name.clone()
    }
}

/// A path extracted from a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathValue {
    Text(String),
    Bytes(Vec<u8>),
    Path(PathBuf),
}

impl PathValue {
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        match self {
            PathValue::Text(s) => Cow::Borrowed(s.as_str()),
            PathValue::Bytes(b) => String::from_utf8_lossy(b),
            PathValue::Path(p) => p.to_string_lossy(),
        }
    }

    pub fn to_path_buf(&self) -> PathBuf {
        match self {
            PathValue::Text(s) => PathBuf::from(s),
            PathValue::Bytes(b) => bytes_to_path(b),
            PathValue::Path(p) => p.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            PathValue::Text(s) => s.is_empty(),
            PathValue::Bytes(b) => b.is_empty(),
            PathValue::Path(p) => p.as_os_str().is_empty(),
        }
    }
}

impl From<&str> for PathValue {
    fn from(s: &str) -> Self {
        PathValue::Text(s.to_string())
    }
}

impl From<String> for PathValue {
    fn from(s: String) -> Self {
        PathValue::Text(s)
    }
}

impl From<Vec<u8>> for PathValue {
    fn from(b: Vec<u8>) -> Self {
        PathValue::Bytes(b)
    }
}

impl From<PathBuf> for PathValue {
    fn from(p: PathBuf) -> Self {
        PathValue::Path(p)
    }
}

#[cfg(unix)]
pub(crate) fn bytes_to_path(bytes: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
pub(crate) fn bytes_to_path(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}

/// Opaque value being classified.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
    Path(&'a dyn PathHandle),
    Stream(&'a dyn StreamHandle),
    /// Any other value. Unsupported and non-resembling for every kind.
    Opaque(&'a dyn fmt::Debug),
}

impl<'a> Source<'a> {
    pub fn path_handle(handle: &'a dyn PathHandle) -> Self {
        Source::Path(handle)
    }

    pub fn stream(handle: &'a dyn StreamHandle) -> Self {
        Source::Stream(handle)
    }

    pub fn opaque(value: &'a dyn fmt::Debug) -> Self {
        Source::Opaque(value)
    }

    /// Text form of string and byte sources; `None` for handles.
    pub fn as_text(&self) -> Option<Cow<'a, str>> {
        match *self {
            Source::Text(s) => Some(Cow::Borrowed(s)),
            Source::Bytes(b) => Some(String::from_utf8_lossy(b)),
            _ => None,
        }
    }

    /// String, bytes, or the unwrapped inner path of a path handle.
    pub fn as_path_value(&self) -> Option<PathValue> {
        match *self {
            Source::Text(s) => Some(PathValue::Text(s.to_string())),
            Source::Bytes(b) => Some(PathValue::Bytes(b.to_vec())),
            Source::Path(h) => Some(PathValue::Path(h.fs_path().to_path_buf())),
            Source::Stream(_) | Source::Opaque(_) => None,
        }
    }

    /// Display form: the text itself, the inner path, or a stream's name.
    pub fn canonical_string(&self) -> String {
        match *self {
            Source::Text(s) => s.to_string(),
            Source::Bytes(b) => String::from_utf8_lossy(b).into_owned(),
            Source::Path(h) => h.fs_path().display().to_string(),
            Source::Stream(h) => h
                .name()
                .filter(|name| !name.is_empty())
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "<in-memory stream>".to_string()),
            Source::Opaque(v) => format!("{v:?}"),
        }
    }

    pub fn is_path_handle(&self) -> bool {
        matches!(self, Source::Path(_))
    }

    pub fn is_stream(&self) -> bool {
        matches!(self, Source::Stream(_))
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(s: &'a str) -> Self {
        Source::Text(s)
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(s: &'a String) -> Self {
        Source::Text(s.as_str())
    }
}

impl<'a> From<&'a [u8]> for Source<'a> {
    fn from(b: &'a [u8]) -> Self {
        Source::Bytes(b)
    }
}

impl<'a> From<&'a Vec<u8>> for Source<'a> {
    fn from(b: &'a Vec<u8>) -> Self {
        Source::Bytes(b.as_slice())
    }
}

impl<'a> From<&'a PathBuf> for Source<'a> {
    fn from(p: &'a PathBuf) -> Self {
        Source::Path(p)
    }
}
