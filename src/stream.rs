//! Module with the message body stream.
//!
//! [`Stream`] wraps an underlying byte [`Resource`] together with the
//! [`Metadata`] describing how it was opened. Whether the stream may be read
//! or written is decided by its open mode, not by the resource type, so a
//! stream can deny an operation the resource itself would support.

use std::fmt;
use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};

use log::debug;

/// Underlying byte resource of a [`Stream`].
///
/// This is the contract the stream builds on: a readable, writable and
/// seekable handle plus an optional size. Resources that cannot support one
/// of the I/O capabilities report it through the open mode of the stream's
/// [`Metadata`] (or through I/O errors of the handle itself).
pub trait Resource: Read + Write + Seek {
    /// Returns the total size of the resource in bytes, if known.
    fn size(&self) -> Option<u64> {
        None
    }
}

impl Resource for Cursor<Vec<u8>> {
    fn size(&self) -> Option<u64> {
        Some(self.get_ref().len() as u64)
    }
}

impl Resource for File {
    fn size(&self) -> Option<u64> {
        self.metadata().ok().map(|metadata| metadata.len())
    }
}

/// Modes that allow reading from the stream.
const READ_MODES: &[&str] = &[
    "r", "w+", "r+", "x+", "c+", "rb", "w+b", "r+b", "x+b", "c+b", "rt", "w+t", "r+t", "x+t",
    "c+t", "a+",
];

/// Modes that allow writing to the stream.
const WRITE_MODES: &[&str] = &[
    "w", "w+", "rw", "r+", "x+", "c+", "wb", "w+b", "r+b", "x+b", "c+b", "w+t", "r+t", "x+t",
    "c+t", "a", "a+",
];

/// Metadata of a [`Stream`]: the mode the resource was opened with, whether
/// it is seekable and an optional label for the underlying resource.
#[derive(Clone, Debug)]
pub struct Metadata {
    mode: String,
    seekable: bool,
    uri: Option<String>,
}

impl Metadata {
    /// Create new metadata for a resource opened with `mode`.
    pub fn new(mode: &str, seekable: bool) -> Metadata {
        Metadata {
            mode: mode.to_owned(),
            seekable,
            uri: None,
        }
    }

    /// Set the label of the underlying resource, e.g. a file path.
    pub fn with_uri(mut self, uri: &str) -> Metadata {
        self.uri = Some(uri.to_owned());
        self
    }

    /// Returns the open mode.
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Returns `true` if the resource is seekable.
    pub fn seekable(&self) -> bool {
        self.seekable
    }

    /// Returns the label of the underlying resource, if any.
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// Look up a metadata value by key.
    ///
    /// Supported keys are `"mode"`, `"seekable"` and `"uri"`; any other key
    /// returns `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "mode" => Some(self.mode.clone()),
            "seekable" => Some(self.seekable.to_string()),
            "uri" => self.uri.clone(),
            _ => None,
        }
    }
}

/// Message body stream.
///
/// Owns its [`Resource`] exclusively; [`Stream::detach`] transfers the
/// resource out and leaves the stream empty, after which every operation
/// returns [`StreamError::Detached`].
pub struct Stream {
    data: Option<Box<dyn Resource>>,
    meta: Metadata,
    eof: bool,
}

impl Stream {
    /// Create a new stream from `resource`, described by `meta`.
    pub fn new<R>(resource: R, meta: Metadata) -> Stream
    where
        R: Resource + 'static,
    {
        Stream {
            data: Some(Box::new(resource)),
            meta,
            eof: false,
        }
    }

    /// Returns `true` if the open mode allows reading.
    pub fn is_readable(&self) -> bool {
        READ_MODES.contains(&self.meta.mode())
    }

    /// Returns `true` if the open mode allows writing.
    pub fn is_writable(&self) -> bool {
        WRITE_MODES.contains(&self.meta.mode())
    }

    /// Returns `true` if the stream is seekable.
    pub fn is_seekable(&self) -> bool {
        self.meta.seekable()
    }

    /// Read up to `length` bytes from the stream.
    ///
    /// A short (or empty) result means the end of the stream was reached,
    /// which is not an error.
    pub fn read(&mut self, length: usize) -> Result<Vec<u8>, StreamError> {
        if !self.is_readable() {
            return Err(StreamError::NotReadable);
        }
        let data = self.data.as_mut().ok_or(StreamError::Detached)?;

        let mut buf = vec![0; length];
        let mut total = 0;
        while total < length {
            match data.read(&mut buf[total..])? {
                0 => break,
                n => total += n,
            }
        }
        if total < length {
            self.eof = true;
        }
        buf.truncate(total);
        Ok(buf)
    }

    /// Write `bytes` to the stream, returning the number of bytes written.
    pub fn write(&mut self, bytes: &[u8]) -> Result<usize, StreamError> {
        if !self.is_writable() {
            return Err(StreamError::NotWritable);
        }
        let data = self.data.as_mut().ok_or(StreamError::Detached)?;
        Ok(data.write(bytes)?)
    }

    /// Seek to a position in the stream, returning the new position.
    ///
    /// Clears the end-of-stream flag.
    pub fn seek(&mut self, pos: SeekFrom) -> Result<u64, StreamError> {
        if !self.is_seekable() {
            return Err(StreamError::NotSeekable);
        }
        let data = self.data.as_mut().ok_or(StreamError::Detached)?;
        let position = data.seek(pos)?;
        self.eof = false;
        Ok(position)
    }

    /// Seek to the beginning of the stream.
    pub fn rewind(&mut self) -> Result<(), StreamError> {
        self.seek(SeekFrom::Start(0)).map(|_| ())
    }

    /// Returns the current position of the read/write pointer.
    pub fn tell(&mut self) -> Result<u64, StreamError> {
        let data = self.data.as_mut().ok_or(StreamError::Detached)?;
        Ok(data.stream_position()?)
    }

    /// Returns `true` if a read reached the end of the stream.
    pub fn eof(&self) -> bool {
        self.eof
    }

    /// Read the remaining contents of the stream, from the current position
    /// to the end.
    pub fn contents(&mut self) -> Result<Vec<u8>, StreamError> {
        let data = self.data.as_mut().ok_or(StreamError::Detached)?;
        let mut contents = Vec::new();
        data.read_to_end(&mut contents)?;
        self.eof = true;
        Ok(contents)
    }

    /// Returns the total size of the stream in bytes, if known.
    pub fn size(&self) -> Option<u64> {
        self.data.as_ref().and_then(|data| data.size())
    }

    /// Returns the stream's metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.meta
    }

    /// Close the stream, releasing the underlying resource.
    pub fn close(&mut self) {
        drop(self.data.take());
    }

    /// Separate the underlying resource from the stream.
    ///
    /// Returns the resource, leaving the stream empty: any following
    /// operation returns [`StreamError::Detached`].
    pub fn detach(&mut self) -> Option<Box<dyn Resource>> {
        self.data.take()
    }

    /// Returns the entire contents of the stream as a string, from the
    /// beginning to the end.
    ///
    /// This is a conversion, not an I/O operation: a stream that cannot be
    /// rewound or read yields an empty string instead of an error. Invalid
    /// UTF-8 is replaced.
    pub fn text(&mut self) -> String {
        String::from_utf8_lossy(&self.all_bytes()).into_owned()
    }

    /// Returns the entire contents of the stream, rewinding first when
    /// seekable. Resource errors are suppressed into an empty result.
    pub(crate) fn all_bytes(&mut self) -> Vec<u8> {
        let result = if self.is_seekable() {
            self.rewind().and_then(|()| self.contents())
        } else {
            self.contents()
        };
        match result {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!("no string conversion for body stream: {err}");
                Vec::new()
            }
        }
    }
}

impl From<Vec<u8>> for Stream {
    /// Creates an in-memory stream positioned at the start, readable,
    /// writable and seekable.
    fn from(bytes: Vec<u8>) -> Stream {
        Stream::new(Cursor::new(bytes), Metadata::new("w+b", true))
    }
}

impl From<&str> for Stream {
    /// See the [`From<Vec<u8>>`] implementation.
    fn from(string: &str) -> Stream {
        Stream::from(string.as_bytes().to_vec())
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("detached", &self.data.is_none())
            .field("meta", &self.meta)
            .field("eof", &self.eof)
            .finish()
    }
}

/// Error returned by [`Stream`] operations.
#[derive(Debug)]
pub enum StreamError {
    /// The open mode does not allow reading.
    NotReadable,
    /// The open mode does not allow writing.
    NotWritable,
    /// The stream is not seekable.
    NotSeekable,
    /// The underlying resource was detached from the stream.
    Detached,
    /// The underlying resource failed.
    Io(io::Error),
}

impl From<io::Error> for StreamError {
    fn from(err: io::Error) -> StreamError {
        StreamError::Io(err)
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use StreamError::*;
        match self {
            NotReadable => f.write_str("stream is not readable"),
            NotWritable => f.write_str("stream is not writable"),
            NotSeekable => f.write_str("stream is not seekable"),
            Detached => f.write_str("stream is detached"),
            Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StreamError::Io(err) => Some(err),
            _ => None,
        }
    }
}
