//! Module with the HTTP protocol version type.

use std::fmt;
use std::str::FromStr;

/// HTTP protocol version.
///
/// RFC 7230 section 2.6.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Version {
    /// HTTP/0.9.
    Http09,
    /// HTTP/1.0.
    ///
    /// RFC 1945.
    Http10,
    /// HTTP/1.1.
    ///
    /// RFC 7230.
    Http11,
    /// HTTP/2.
    ///
    /// RFC 7540.
    Http2,
    /// HTTP/3.
    ///
    /// RFC 9114.
    Http3,
}

impl Version {
    /// Returns the protocol version as used in the protocol-version field,
    /// e.g. `"1.1"`, without the `HTTP/` prefix.
    pub const fn as_str(self) -> &'static str {
        use Version::*;
        match self {
            Http09 => "0.9",
            Http10 => "1.0",
            Http11 => "1.1",
            Http2 => "2",
            Http3 => "3",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by the [`FromStr`] implementation for [`Version`].
#[derive(Copy, Clone, Debug)]
pub struct UnknownVersion;

impl fmt::Display for UnknownVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown protocol version")
    }
}

impl std::error::Error for UnknownVersion {}

impl FromStr for Version {
    type Err = UnknownVersion;

    fn from_str(version: &str) -> Result<Self, Self::Err> {
        match version {
            "0.9" => Ok(Version::Http09),
            "1.0" => Ok(Version::Http10),
            "1.1" => Ok(Version::Http11),
            "2" | "2.0" => Ok(Version::Http2),
            "3" | "3.0" => Ok(Version::Http3),
            _ => Err(UnknownVersion),
        }
    }
}
