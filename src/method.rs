//! Module with the HTTP method type.

use std::fmt;
use std::str::FromStr;

/// HTTP request method.
///
/// RFC 7231 section 4.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Method {
    /// GET method.
    ///
    /// RFC 7231 section 4.3.1.
    Get,
    /// HEAD method.
    ///
    /// RFC 7231 section 4.3.2.
    Head,
    /// POST method.
    ///
    /// RFC 7231 section 4.3.3.
    Post,
    /// PUT method.
    ///
    /// RFC 7231 section 4.3.4.
    Put,
    /// DELETE method.
    ///
    /// RFC 7231 section 4.3.5.
    Delete,
    /// CONNECT method.
    ///
    /// RFC 7231 section 4.3.6.
    Connect,
    /// OPTIONS method.
    ///
    /// RFC 7231 section 4.3.7.
    Options,
    /// TRACE method.
    ///
    /// RFC 7231 section 4.3.8.
    Trace,
    /// PATCH method.
    ///
    /// RFC 5789.
    Patch,
}

impl Method {
    /// Returns the method as string.
    pub const fn as_str(self) -> &'static str {
        use Method::*;
        match self {
            Get => "GET",
            Head => "HEAD",
            Post => "POST",
            Put => "PUT",
            Delete => "DELETE",
            Connect => "CONNECT",
            Options => "OPTIONS",
            Trace => "TRACE",
            Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by the [`FromStr`] implementation for [`Method`].
#[derive(Copy, Clone, Debug)]
pub struct UnknownMethod;

impl fmt::Display for UnknownMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown method")
    }
}

impl std::error::Error for UnknownMethod {}

impl FromStr for Method {
    type Err = UnknownMethod;

    /// The method names are a fixed set of upper-case tokens, matched
    /// exactly; `"get"` is not a method.
    fn from_str(method: &str) -> Result<Self, Self::Err> {
        match method {
            "GET" => Ok(Method::Get),
            "HEAD" => Ok(Method::Head),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            "CONNECT" => Ok(Method::Connect),
            "OPTIONS" => Ok(Method::Options),
            "TRACE" => Ok(Method::Trace),
            "PATCH" => Ok(Method::Patch),
            _ => Err(UnknownMethod),
        }
    }
}
