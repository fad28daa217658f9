//! Module with the HTTP request type.

use std::fmt;

use crate::header::{HeaderName, HeaderValues, Headers};
use crate::{Message, Method, Stream, Uri, Version};

/// HTTP request.
///
/// A request is a value: the `with_*` methods consume the request and return
/// a new one with exactly one field changed.
pub struct Request {
    method: Method,
    uri: Uri,
    /// Explicit request target, overriding the target derived from the URI.
    target: Option<String>,
    message: Message,
}

impl Request {
    /// Create a new request.
    ///
    /// When `headers` has no `Host` header and `uri` has a non-empty host, a
    /// `Host` header with that value is added.
    pub fn new(
        version: Version,
        method: Method,
        headers: Headers,
        body: Stream,
        uri: Uri,
    ) -> Request {
        let mut headers = headers;
        if !headers.contains("Host") && !uri.host().is_empty() {
            headers.insert(HeaderName::HOST, HeaderValues::single(uri.host()));
        }
        Request {
            method,
            uri,
            target: None,
            message: Message::new(version, headers, body),
        }
    }

    /// Returns the request target.
    ///
    /// This is the explicitly set target, if any, and otherwise derived from
    /// the URI: the path (`/` when the path is empty), followed by `?` and
    /// the query when the query is non-empty.
    ///
    /// RFC 7230 section 5.3.
    pub fn request_target(&self) -> String {
        if let Some(target) = &self.target {
            return target.clone();
        }

        let path = self.uri.path();
        let mut target = if path.is_empty() {
            String::from("/")
        } else {
            path.to_owned()
        };
        let query = self.uri.query();
        if !query.is_empty() {
            target.push('?');
            target.push_str(query);
        }
        target
    }

    /// Returns a new request with the request target explicitly set to
    /// `target`, overriding derivation from the URI.
    pub fn with_request_target<T>(mut self, target: T) -> Request
    where
        T: Into<String>,
    {
        self.target = Some(target.into());
        self
    }

    /// Returns the HTTP method of this request.
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Returns a new request with the method set to `method`.
    ///
    /// [`Method`] is a closed set; the string form goes through
    /// [`Method::from_str`], which rejects unknown methods.
    ///
    /// [`Method::from_str`]: std::str::FromStr::from_str
    pub fn with_method(mut self, method: Method) -> Request {
        self.method = method;
        self
    }

    /// Returns the URI of this request.
    pub const fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Returns a new request with the URI set to `uri`.
    ///
    /// When `preserve_host` is false and the new URI has a non-empty host
    /// the `Host` header is overwritten with it. When `preserve_host` is
    /// true an existing `Host` header is left untouched; only a request
    /// without one gets the new URI's host, when it has one.
    pub fn with_uri(mut self, uri: Uri, preserve_host: bool) -> Request {
        let update_host = !uri.host().is_empty()
            && (!preserve_host || !self.message.contains_header("Host"));
        if update_host {
            self.message
                .headers_mut()
                .insert(HeaderName::HOST, HeaderValues::single(uri.host()));
        }
        self.uri = uri;
        self
    }

    /// Returns the HTTP protocol version.
    pub const fn version(&self) -> Version {
        self.message.version()
    }

    /// Returns a new request with the protocol version set to `version`.
    pub fn with_version(mut self, version: Version) -> Request {
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

    /// Returns a new request with the header `name` set to `values`.
    pub fn with_header<N, V>(mut self, name: N, values: V) -> Request
    where
        N: Into<HeaderName<'static>>,
        V: Into<HeaderValues>,
    {
        self.message = self.message.with_header(name, values);
        self
    }

    /// Returns a new request with `values` appended to the header `name`.
    pub fn with_added_header<N, V>(mut self, name: N, values: V) -> Request
    where
        N: Into<HeaderName<'static>>,
        V: Into<HeaderValues>,
    {
        self.message = self.message.with_added_header(name, values);
        self
    }

    /// Returns a new request without the header `name`.
    pub fn without_header(mut self, name: &str) -> Request {
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

    /// Returns a new request with `body`.
    pub fn with_body(mut self, body: Stream) -> Request {
        self.message = self.message.with_body(body);
        self
    }

    /// Returns the body of the request.
    pub fn into_body(self) -> Stream {
        self.message.into_body()
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("uri", &self.uri)
            .field("target", &self.target)
            .field("version", &self.version())
            .field("headers", self.headers())
            .finish()
    }
}
