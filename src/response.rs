//! Module with the HTTP response type.

use std::fmt;
use std::io::{self, Write};
use std::time::SystemTime;

use httpdate::HttpDate;
use log::debug;

use crate::header::{HeaderName, HeaderValues, Headers};
use crate::{Message, StatusCode, Stream, Version};

/// HTTP response.
///
/// A response is a value: the `with_*` methods consume the response and
/// return a new one with exactly one field changed.
pub struct Response {
    status: StatusCode,
    /// Explicit reason phrase, overriding the phrase registered for the
    /// status code.
    reason: Option<String>,
    message: Message,
}

impl Response {
    /// Create a new response.
    pub fn new(version: Version, status: StatusCode, headers: Headers, body: Stream) -> Response {
        Response {
            status,
            reason: None,
            message: Message::new(version, headers, body),
        }
    }

    /// Returns the response status code.
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns a new response with the status set to `status` and the reason
    /// phrase to `reason`.
    ///
    /// An empty `reason` selects the phrase registered for `status` (absent
    /// when the code is not registered); a non-empty `reason` is kept
    /// verbatim. [`StatusCode`] is validated at construction, so the status
    /// itself cannot be invalid here.
    pub fn with_status<R>(mut self, status: StatusCode, reason: R) -> Response
    where
        R: Into<String>,
    {
        let reason = reason.into();
        self.status = status;
        self.reason = if reason.is_empty() { None } else { Some(reason) };
        self
    }

    /// Returns the reason phrase associated with the status code.
    ///
    /// This is the explicitly set phrase, if any, and otherwise the phrase
    /// registered for the current status code; `None` when the code is not
    /// registered.
    pub fn reason_phrase(&self) -> Option<&str> {
        match &self.reason {
            Some(reason) => Some(reason),
            None => self.status.phrase(),
        }
    }

    /// Returns the HTTP protocol version.
    pub const fn version(&self) -> Version {
        self.message.version()
    }

    /// Returns a new response with the protocol version set to `version`.
    pub fn with_version(mut self, version: Version) -> Response {
        self.message = self.message.with_version(version);
        self
    }

    /// Returns the headers.
    pub const fn headers(&self) -> &Headers {
        self.message.headers()
    }

    /// Returns `true` if a header with `name` exists, comparing
    /// case-insensitively.
    pub fn contains_header(&self, name: &str) -> bool {
        self.message.contains_header(name)
    }

    /// Get the values of the header with `name`, if any.
    pub fn header(&self, name: &str) -> Option<&[String]> {
        self.message.header(name)
    }

    /// Get the values of the header with `name` as a single comma-joined
    /// line, or an empty string if the header is not present.
    pub fn header_line(&self, name: &str) -> String {
        self.message.header_line(name)
    }

    /// Returns a new response with the header `name` set to `values`.
    pub fn with_header<N, V>(mut self, name: N, values: V) -> Response
    where
        N: Into<HeaderName<'static>>,
        V: Into<HeaderValues>,
    {
        self.message = self.message.with_header(name, values);
        self
    }

    /// Returns a new response with `values` appended to the header `name`.
    pub fn with_added_header<N, V>(mut self, name: N, values: V) -> Response
    where
        N: Into<HeaderName<'static>>,
        V: Into<HeaderValues>,
    {
        self.message = self.message.with_added_header(name, values);
        self
    }

    /// Returns a new response without the header `name`.
    pub fn without_header(mut self, name: &str) -> Response {
        self.message = self.message.without_header(name);
        self
    }

    /// Returns a reference to the body stream.
    pub const fn body(&self) -> &Stream {
        self.message.body()
    }

    /// Returns mutable access to the body stream.
    pub fn body_mut(&mut self) -> &mut Stream {
        self.message.body_mut()
    }

    /// Returns a new response with `body`.
    pub fn with_body(mut self, body: Stream) -> Response {
        self.message = self.message.with_body(body);
        self
    }

    /// Returns the body of the response.
    pub fn into_body(self) -> Stream {
        self.message.into_body()
    }

    /// Send the response to `sink`.
    ///
    /// Writes the status line, one header line per stored header value in
    /// the order the headers are held, and the body when its size is larger
    /// than zero. A `Date` header and, when the body size is known, a
    /// `Content-Length` header are added if the response holds neither.
    pub fn send<W>(mut self, sink: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        let mut itoa_buf = itoa::Buffer::new();

        // Status line (RFC 7230 section 3.1.2).
        sink.write_all(b"HTTP/")?;
        sink.write_all(self.version().as_str().as_bytes())?;
        sink.write_all(b" ")?;
        sink.write_all(itoa_buf.format(self.status.as_u16()).as_bytes())?;
        if let Some(reason) = self.reason_phrase() {
            sink.write_all(b" ")?;
            sink.write_all(reason.as_bytes())?;
        }
        sink.write_all(b"\r\n")?;

        // Header section (RFC 7230 section 3.2), one line per value.
        let mut set_content_length_header = false;
        let mut set_date_header = false;
        for header in self.headers().iter() {
            let name = header.name();
            for value in header.values() {
                sink.write_all(name.as_ref().as_bytes())?;
                sink.write_all(b": ")?;
                sink.write_all(value.as_bytes())?;
                sink.write_all(b"\r\n")?;
            }

            if name == &HeaderName::CONTENT_LENGTH {
                set_content_length_header = true;
            } else if name == &HeaderName::DATE {
                set_date_header = true;
            }
        }

        // Provide the "Date" header if the user didn't.
        if !set_date_header {
            let now = HttpDate::from(SystemTime::now());
            write!(sink, "Date: {now}\r\n")?;
        }

        // Provide the "Content-Length" header if the user didn't.
        if !set_content_length_header {
            if let Some(size) = self.body().size() {
                sink.write_all(b"Content-Length: ")?;
                sink.write_all(itoa_buf.format(size).as_bytes())?;
                sink.write_all(b"\r\n")?;
            }
        }

        // End of the header section.
        sink.write_all(b"\r\n")?;

        if self.body().size().map_or(false, |size| size > 0) {
            debug!(
                "sending response body: status={}, length={:?}",
                self.status,
                self.body().size(),
            );
            // Body bytes go through the suppressing string conversion, the
            // same way printing the body would.
            sink.write_all(&self.message.body_mut().all_bytes())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("reason", &self.reason)
            .field("version", &self.version())
            .field("headers", self.headers())
            .finish()
    }
}
