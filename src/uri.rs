//! Module with the URI type.

use std::fmt;
use std::num::NonZeroU16;

/// Uniform Resource Identifier (URI).
///
/// URIs are build up from a number of components. An example from RFC 3986
/// section 5:
///
/// ```text
///            host     port
///           ___|____    __
///          /         \ /  \
///   http://example.com:8042/some/path?query=value&abc=123
///   \__/   \______________/\________/ \_________________/
///    |           |             |               |
/// scheme     authority        path           query
/// ```
///
/// Every component is normalized at construction: the scheme and host are
/// lowercased, the port is dropped when it is the scheme's registered
/// default, and the path, query and fragment are percent-encoded. The
/// user-information and authority components are derived from the primitive
/// components, see [`Uri::user_info`] and [`Uri::authority`].
///
/// A `Uri` is a value: the `with_*` methods return a new, re-normalized
/// `Uri` and leave the original untouched.
///
/// RFC 3986.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Uri {
    scheme: String,
    user: String,
    pass: String,
    host: String,
    port: Option<NonZeroU16>,
    path: String,
    query: String,
    fragment: String,
}

impl Uri {
    /// Returns a builder to create a `Uri`, with all components empty.
    pub fn builder() -> UriBuilder {
        UriBuilder::new()
    }

    /// Returns the scheme, lowercased, or an empty string.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the user component, or an empty string.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the password component, or an empty string.
    pub fn pass(&self) -> &str {
        &self.pass
    }

    /// Returns the host, lowercased, or an empty string.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port, if present.
    ///
    /// A port equal to the scheme's registered default is dropped at
    /// construction, see [`Uri::with_port`].
    pub fn port(&self) -> Option<u16> {
        self.port.map(NonZeroU16::get)
    }

    /// Returns the percent-encoded path, or an empty string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the percent-encoded query, or an empty string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the percent-encoded fragment, or an empty string.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Returns the user information component: the user, followed by `:` and
    /// the password if a password is set.
    ///
    /// Empty when the user is empty.
    ///
    /// RFC 3986 section 3.2.1.
    pub fn user_info(&self) -> String {
        if self.user.is_empty() {
            return String::new();
        }
        let mut user_info = self.user.clone();
        if !self.pass.is_empty() {
            user_info.push(':');
            user_info.push_str(&self.pass);
        }
        user_info
    }

    /// Returns the authority component: `[user_info@]host[:port]`.
    ///
    /// RFC 3986 section 3.2.
    pub fn authority(&self) -> String {
        let mut authority = String::new();
        let user_info = self.user_info();
        if !user_info.is_empty() {
            authority.push_str(&user_info);
            authority.push('@');
        }
        authority.push_str(&self.host);
        if let Some(port) = self.port {
            let mut itoa_buf = itoa::Buffer::new();
            authority.push(':');
            authority.push_str(itoa_buf.format(port.get()));
        }
        authority
    }

    /// Returns a new `Uri` with `scheme`, lowercased.
    ///
    /// The port is re-checked against the new scheme's default and dropped
    /// when they match.
    pub fn with_scheme(&self, scheme: &str) -> Uri {
        let mut uri = self.clone();
        uri.scheme = scheme.to_ascii_lowercase();
        if let Some(port) = uri.port {
            if default_port(&uri.scheme) == Some(port.get()) {
                uri.port = None;
            }
        }
        uri
    }

    /// Returns a new `Uri` with the user component set to `user`.
    pub fn with_user(&self, user: &str) -> Uri {
        let mut uri = self.clone();
        uri.user = user.to_owned();
        uri
    }

    /// Returns a new `Uri` with the password component set to `pass`.
    pub fn with_pass(&self, pass: &str) -> Uri {
        let mut uri = self.clone();
        uri.pass = pass.to_owned();
        uri
    }

    /// Returns a new `Uri` with `host`, lowercased.
    pub fn with_host(&self, host: &str) -> Uri {
        let mut uri = self.clone();
        uri.host = host.to_ascii_lowercase();
        uri
    }

    /// Returns a new `Uri` with the port set to `port`, `None` removes the
    /// port.
    ///
    /// A port equal to the registered default for the current scheme is
    /// normalized to absent. Port `0` is invalid.
    pub fn with_port(&self, port: Option<u16>) -> Result<Uri, InvalidPort> {
        let port = normalize_port(port, &self.scheme)?;
        let mut uri = self.clone();
        uri.port = port;
        Ok(uri)
    }

    /// Returns a new `Uri` with `path`, percent-encoded.
    pub fn with_path(&self, path: &str) -> Uri {
        let mut uri = self.clone();
        uri.path = encode(path, is_path_byte);
        uri
    }

    /// Returns a new `Uri` with `query`, percent-encoded.
    pub fn with_query(&self, query: &str) -> Uri {
        let mut uri = self.clone();
        uri.query = encode(query, is_query_byte);
        uri
    }

    /// Returns a new `Uri` with `fragment`, percent-encoded.
    pub fn with_fragment(&self, fragment: &str) -> Uri {
        let mut uri = self.clone();
        uri.fragment = encode(fragment, is_query_byte);
        uri
    }

    /// Returns a new `Uri` with the user information set to `user` and
    /// `pass`.
    ///
    /// A `None` password keeps the current password; the derived
    /// [`Uri::user_info`] and [`Uri::authority`] follow the new components.
    pub fn with_user_info(&self, user: &str, pass: Option<&str>) -> Uri {
        let mut uri = self.clone();
        uri.user = user.to_owned();
        if let Some(pass) = pass {
            uri.pass = pass.to_owned();
        }
        uri
    }

    /// Returns a new `Uri` with the authority components set to `host`,
    /// `user`, `pass` and `port`.
    ///
    /// `None` arguments keep the current component values. The port is
    /// normalized the same way [`Uri::with_port`] normalizes it.
    pub fn with_authority(
        &self,
        host: &str,
        user: Option<&str>,
        pass: Option<&str>,
        port: Option<u16>,
    ) -> Result<Uri, InvalidPort> {
        let port = match port {
            Some(port) => normalize_port(Some(port), &self.scheme)?,
            None => self.port,
        };
        let mut uri = self.clone();
        uri.host = host.to_ascii_lowercase();
        if let Some(user) = user {
            uri.user = user.to_owned();
        }
        if let Some(pass) = pass {
            uri.pass = pass.to_owned();
        }
        uri.port = port;
        Ok(uri)
    }
}

/// Recomposes the URI into a string, per RFC 3986 section 5.3.
///
/// When the URI has no authority a path starting with `//` is collapsed to a
/// single leading `/`, and when it has an authority a relative path gets a
/// `/` prefixed, so the result is never ambiguous.
impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let authority = self.authority();
        if !self.scheme.is_empty() {
            f.write_str(&self.scheme)?;
            f.write_str(":")?;
        }
        if !authority.is_empty() {
            f.write_str("//")?;
            f.write_str(&authority)?;
        }
        if !self.path.is_empty() {
            if !authority.is_empty() {
                if !self.path.starts_with('/') {
                    f.write_str("/")?;
                }
                f.write_str(&self.path)?;
            } else if self.path.starts_with("//") {
                f.write_str("/")?;
                f.write_str(self.path.trim_start_matches('/'))?;
            } else {
                f.write_str(&self.path)?;
            }
        }
        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query)?;
        }
        if !self.fragment.is_empty() {
            f.write_str("#")?;
            f.write_str(&self.fragment)?;
        }
        Ok(())
    }
}

/// Builder for [`Uri`], see [`Uri::builder`].
///
/// All components default to empty/absent; [`UriBuilder::build`] normalizes
/// the components into the final value.
#[derive(Debug, Default)]
#[must_use = "call `build` to create the `Uri`"]
pub struct UriBuilder {
    scheme: String,
    user: String,
    pass: String,
    host: String,
    port: Option<u16>,
    path: String,
    query: String,
    fragment: String,
}

impl UriBuilder {
    /// Returns an empty builder.
    pub fn new() -> UriBuilder {
        UriBuilder::default()
    }

    /// Set the scheme.
    pub fn scheme(mut self, scheme: &str) -> UriBuilder {
        self.scheme = scheme.to_owned();
        self
    }

    /// Set the user.
    pub fn user(mut self, user: &str) -> UriBuilder {
        self.user = user.to_owned();
        self
    }

    /// Set the password.
    pub fn pass(mut self, pass: &str) -> UriBuilder {
        self.pass = pass.to_owned();
        self
    }

    /// Set the host.
    pub fn host(mut self, host: &str) -> UriBuilder {
        self.host = host.to_owned();
        self
    }

    /// Set the port.
    pub fn port(mut self, port: u16) -> UriBuilder {
        self.port = Some(port);
        self
    }

    /// Set the path.
    pub fn path(mut self, path: &str) -> UriBuilder {
        self.path = path.to_owned();
        self
    }

    /// Set the query.
    pub fn query(mut self, query: &str) -> UriBuilder {
        self.query = query.to_owned();
        self
    }

    /// Set the fragment.
    pub fn fragment(mut self, fragment: &str) -> UriBuilder {
        self.fragment = fragment.to_owned();
        self
    }

    /// Normalize all components and create the `Uri`.
    ///
    /// Returns an error if the port is `0`.
    pub fn build(self) -> Result<Uri, InvalidPort> {
        let scheme = self.scheme.to_ascii_lowercase();
        let port = normalize_port(self.port, &scheme)?;
        Ok(Uri {
            scheme,
            user: self.user,
            pass: self.pass,
            host: self.host.to_ascii_lowercase(),
            port,
            path: encode(&self.path, is_path_byte),
            query: encode(&self.query, is_query_byte),
            fragment: encode(&self.fragment, is_query_byte),
        })
    }
}

/// Error returned when a URI port is outside the range 1-65535.
#[derive(Copy, Clone, Debug)]
pub struct InvalidPort;

impl fmt::Display for InvalidPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("port outside range 1-65535")
    }
}

impl std::error::Error for InvalidPort {}

/// Validates `port` and drops it when it equals the registered default port
/// for `scheme`.
fn normalize_port(port: Option<u16>, scheme: &str) -> Result<Option<NonZeroU16>, InvalidPort> {
    match port {
        None => Ok(None),
        Some(port) => match NonZeroU16::new(port) {
            None => Err(InvalidPort),
            Some(port) => match default_port(scheme) {
                Some(default) if default == port.get() => Ok(None),
                _ => Ok(Some(port)),
            },
        },
    }
}

/// Returns the registered default port for `scheme`, which must be
/// lowercase.
///
/// An empty or unregistered scheme has no default port. Some schemes are
/// registered without one.
fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "acap" => Some(674),
        "afp" => Some(548),
        "dict" => Some(2628),
        "dns" => Some(53),
        "ftp" => Some(21),
        "git" => Some(9418),
        "gopher" => Some(70),
        "http" => Some(80),
        "https" => Some(443),
        "imap" => Some(143),
        "ipp" => Some(631),
        "ipps" => Some(631),
        "irc" => Some(194),
        "ircs" => Some(6697),
        "ldap" => Some(389),
        "ldaps" => Some(636),
        "mms" => Some(1755),
        "msrp" => Some(2855),
        "mtqp" => Some(1038),
        "nfs" => Some(111),
        "nntp" => Some(119),
        "nntps" => Some(563),
        "pop" => Some(110),
        "prospero" => Some(1525),
        "redis" => Some(6379),
        "rsync" => Some(873),
        "rtsp" => Some(554),
        "rtsps" => Some(322),
        "rtspu" => Some(5005),
        "sftp" => Some(22),
        "smb" => Some(445),
        "snmp" => Some(161),
        "ssh" => Some(22),
        "svn" => Some(3690),
        "telnet" => Some(23),
        "ventrilo" => Some(3784),
        "vnc" => Some(5900),
        "wais" => Some(210),
        "ws" => Some(80),
        "wss" => Some(443),
        // Registered, but without a default port.
        "file" | "msrps" | "steam" | "xmpp" => None,
        _ => None,
    }
}

/// Percent-encodes every byte of `input` not allowed by `is_allowed`.
///
/// A `%` already starting a valid two-hex-digit escape is left untouched, so
/// encoding is idempotent on already-encoded input. Any other `%` is encoded
/// to `%25`.
fn encode(input: &str, is_allowed: fn(u8) -> bool) -> String {
    const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

    let bytes = input.as_bytes();
    let mut encoded = String::with_capacity(bytes.len());
    for (i, b) in bytes.iter().copied().enumerate() {
        if b == b'%' {
            if i + 2 < bytes.len() && is_hex_digit(bytes[i + 1]) && is_hex_digit(bytes[i + 2]) {
                encoded.push('%');
            } else {
                encoded.push_str("%25");
            }
        } else if is_allowed(b) {
            encoded.push(b as char);
        } else {
            encoded.push('%');
            encoded.push(HEX_DIGITS[(b >> 4) as usize] as char);
            encoded.push(HEX_DIGITS[(b & 0x0f) as usize] as char);
        }
    }
    encoded
}

/// Returns `true` if `b` is allowed unencoded in the path component:
/// unreserved / sub-delims / `:` / `@` / `/`.
///
/// RFC 3986 section 3.3.
const fn is_path_byte(b: u8) -> bool {
    matches!(b,
        b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z'
        | b'_' | b'-' | b'.' | b'~'
        | b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
        | b':' | b'@' | b'/')
}

/// Returns `true` if `b` is allowed unencoded in the query and fragment
/// components, which additionally allow `?`.
///
/// RFC 3986 sections 3.4 and 3.5.
const fn is_query_byte(b: u8) -> bool {
    b == b'?' || is_path_byte(b)
}

const fn is_hex_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'a'..=b'f' | b'A'..=b'F')
}
