//! Module with the HTTP message core shared by requests and responses.

use std::fmt;

use crate::header::{HeaderName, HeaderValues, Headers};
use crate::{Stream, Version};

/// Core of an HTTP message: the protocol version, the headers and the body
/// stream.
///
/// A message is a value. Because the body stream exclusively owns its
/// resource the `with_*` methods consume the message and return the changed
/// value; exactly one field changes per call and the rest moves over
/// unchanged. No two live messages ever share a header list or a body
/// stream.
pub struct Message {
    version: Version,
    headers: Headers,
    body: Stream,
}

impl Message {
    /// Create a new message.
    pub fn new(version: Version, headers: Headers, body: Stream) -> Message {
        Message {
            version,
            headers,
            body,
        }
    }

    /// Returns the HTTP protocol version.
    pub const fn version(&self) -> Version {
        self.version
    }

    /// Returns a new message with the protocol version set to `version`.
    pub fn with_version(mut self, version: Version) -> Message {
        self.version = version;
        self
    }

    /// Returns the headers.
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    pub(crate) fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    /// Returns `true` if a header with `name` exists, comparing
    /// case-insensitively.
    pub fn contains_header(&self, name: &str) -> bool {
        self.headers.contains(name)
    }

    /// Get the values of the header with `name`, if any.
    pub fn header(&self, name: &str) -> Option<&[String]> {
        self.headers.get(name)
    }

    /// Get the values of the header with `name` as a single comma-joined
    /// line, or an empty string if the header is not present.
    pub fn header_line(&self, name: &str) -> String {
        self.headers.line(name)
    }

    /// Returns a new message with the header `name` set to `values`,
    /// replacing any existing entry with a case-insensitively matching name.
    pub fn with_header<N, V>(mut self, name: N, values: V) -> Message
    where
        N: Into<HeaderName<'static>>,
        V: Into<HeaderValues>,
    {
        self.headers.insert(name, values);
        self
    }

    /// Returns a new message with `values` appended to the header `name`,
    /// see [`Headers::append`].
    pub fn with_added_header<N, V>(mut self, name: N, values: V) -> Message
    where
        N: Into<HeaderName<'static>>,
        V: Into<HeaderValues>,
    {
        self.headers.append(name, values);
        self
    }

    /// Returns a new message without the header `name`.
    pub fn without_header(mut self, name: &str) -> Message {
        self.headers.remove(name);
        self
    }

    /// Returns a reference to the body stream.
    pub const fn body(&self) -> &Stream {
        &self.body
    }

    /// Returns mutable access to the body stream, to read or write it.
    pub fn body_mut(&mut self) -> &mut Stream {
        &mut self.body
    }

    /// Returns a new message with `body`, dropping the current body stream.
    pub fn with_body(mut self, body: Stream) -> Message {
        self.body = body;
        self
    }

    /// Returns the body of the message.
    pub fn into_body(self) -> Stream {
        self.body
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("version", &self.version)
            .field("headers", &self.headers)
            .field("body", &self.body)
            .finish()
    }
}
