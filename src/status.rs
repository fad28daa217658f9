//! Module with the response status code type.

use std::fmt;
use std::str::FromStr;

/// Response status code.
///
/// Only codes in the range 100-599 are representable, enforced at
/// construction. A complete list of assigned codes can be found at the HTTP
/// Status Code Registry:
/// <http://www.iana.org/assignments/http-status-codes>.
///
/// RFC 7231 section 6.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StatusCode(u16);

impl StatusCode {
    // 1xx range.
    /// 100 Continue.
    pub const CONTINUE: StatusCode = StatusCode(100);
    /// 101 Switching Protocols.
    pub const SWITCHING_PROTOCOLS: StatusCode = StatusCode(101);
    /// 102 Processing.
    ///
    /// RFC 2518.
    pub const PROCESSING: StatusCode = StatusCode(102);
    /// 103 Early Hints.
    ///
    /// RFC 8297.
    pub const EARLY_HINTS: StatusCode = StatusCode(103);

    // 2xx range.
    /// 200 OK.
    pub const OK: StatusCode = StatusCode(200);
    /// 201 Created.
    pub const CREATED: StatusCode = StatusCode(201);
    /// 202 Accepted.
    pub const ACCEPTED: StatusCode = StatusCode(202);
    /// 203 Non-Authoritative Information.
    pub const NON_AUTHORITATIVE_INFORMATION: StatusCode = StatusCode(203);
    /// 204 No Content.
    pub const NO_CONTENT: StatusCode = StatusCode(204);
    /// 205 Reset Content.
    pub const RESET_CONTENT: StatusCode = StatusCode(205);
    /// 206 Partial Content.
    ///
    /// RFC 7233 section 4.1.
    pub const PARTIAL_CONTENT: StatusCode = StatusCode(206);
    /// 207 Multi-Status.
    ///
    /// RFC 4918.
    pub const MULTI_STATUS: StatusCode = StatusCode(207);
    /// 208 Already Reported.
    ///
    /// RFC 5842.
    pub const ALREADY_REPORTED: StatusCode = StatusCode(208);
    /// 226 IM Used.
    ///
    /// RFC 3229.
    pub const IM_USED: StatusCode = StatusCode(226);

    // 3xx range.
    /// 300 Multiple Choices.
    pub const MULTIPLE_CHOICES: StatusCode = StatusCode(300);
    /// 301 Moved Permanently.
    pub const MOVED_PERMANENTLY: StatusCode = StatusCode(301);
    /// 302 Found.
    pub const FOUND: StatusCode = StatusCode(302);
    /// 303 See Other.
    pub const SEE_OTHER: StatusCode = StatusCode(303);
    /// 304 Not Modified.
    ///
    /// RFC 7232 section 4.1.
    pub const NOT_MODIFIED: StatusCode = StatusCode(304);
    /// 305 Use Proxy.
    pub const USE_PROXY: StatusCode = StatusCode(305);
    // NOTE: 306 is unused, per RFC 7231 section 6.4.6.
    /// 307 Temporary Redirect.
    pub const TEMPORARY_REDIRECT: StatusCode = StatusCode(307);
    /// 308 Permanent Redirect.
    ///
    /// RFC 7538.
    pub const PERMANENT_REDIRECT: StatusCode = StatusCode(308);

    // 4xx range.
    /// 400 Bad Request.
    pub const BAD_REQUEST: StatusCode = StatusCode(400);
    /// 401 Unauthorized.
    ///
    /// RFC 7235 section 3.1.
    pub const UNAUTHORIZED: StatusCode = StatusCode(401);
    /// 402 Payment Required.
    pub const PAYMENT_REQUIRED: StatusCode = StatusCode(402);
    /// 403 Forbidden.
    pub const FORBIDDEN: StatusCode = StatusCode(403);
    /// 404 Not Found.
    pub const NOT_FOUND: StatusCode = StatusCode(404);
    /// 405 Method Not Allowed.
    pub const METHOD_NOT_ALLOWED: StatusCode = StatusCode(405);
    /// 406 Not Acceptable.
    pub const NOT_ACCEPTABLE: StatusCode = StatusCode(406);
    /// 407 Proxy Authentication Required.
    ///
    /// RFC 7235 section 3.2.
    pub const PROXY_AUTHENTICATION_REQUIRED: StatusCode = StatusCode(407);
    /// 408 Request Timeout.
    pub const REQUEST_TIMEOUT: StatusCode = StatusCode(408);
    /// 409 Conflict.
    pub const CONFLICT: StatusCode = StatusCode(409);
    /// 410 Gone.
    pub const GONE: StatusCode = StatusCode(410);
    /// 411 Length Required.
    pub const LENGTH_REQUIRED: StatusCode = StatusCode(411);
    /// 412 Precondition Failed.
    ///
    /// RFC 7232 section 4.2.
    pub const PRECONDITION_FAILED: StatusCode = StatusCode(412);
    /// 413 Payload Too Large.
    pub const PAYLOAD_TOO_LARGE: StatusCode = StatusCode(413);
    /// 414 URI Too Long.
    pub const URI_TOO_LONG: StatusCode = StatusCode(414);
    /// 415 Unsupported Media Type.
    pub const UNSUPPORTED_MEDIA_TYPE: StatusCode = StatusCode(415);
    /// 416 Range Not Satisfiable.
    ///
    /// RFC 7233 section 4.4.
    pub const RANGE_NOT_SATISFIABLE: StatusCode = StatusCode(416);
    /// 417 Expectation Failed.
    pub const EXPECTATION_FAILED: StatusCode = StatusCode(417);
    /// 418 I'm a teapot.
    ///
    /// RFC 2324.
    pub const IM_A_TEAPOT: StatusCode = StatusCode(418);
    /// 421 Misdirected Request.
    ///
    /// RFC 7540 section 9.1.2.
    pub const MISDIRECTED_REQUEST: StatusCode = StatusCode(421);
    /// 422 Unprocessable Entity.
    ///
    /// RFC 4918.
    pub const UNPROCESSABLE_ENTITY: StatusCode = StatusCode(422);
    /// 423 Locked.
    ///
    /// RFC 4918.
    pub const LOCKED: StatusCode = StatusCode(423);
    /// 424 Failed Dependency.
    ///
    /// RFC 4918.
    pub const FAILED_DEPENDENCY: StatusCode = StatusCode(424);
    /// 425 Too Early.
    ///
    /// RFC 8470.
    pub const TOO_EARLY: StatusCode = StatusCode(425);
    /// 426 Upgrade Required.
    pub const UPGRADE_REQUIRED: StatusCode = StatusCode(426);
    /// 428 Precondition Required.
    ///
    /// RFC 6585.
    pub const PRECONDITION_REQUIRED: StatusCode = StatusCode(428);
    /// 429 Too Many Requests.
    ///
    /// RFC 6585.
    pub const TOO_MANY_REQUESTS: StatusCode = StatusCode(429);
    /// 431 Request Header Fields Too Large.
    ///
    /// RFC 6585.
    pub const REQUEST_HEADER_FIELDS_TOO_LARGE: StatusCode = StatusCode(431);
    /// 451 Unavailable For Legal Reasons.
    ///
    /// RFC 7725.
    pub const UNAVAILABLE_FOR_LEGAL_REASONS: StatusCode = StatusCode(451);

    // 5xx range.
    /// 500 Internal Server Error.
    pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode(500);
    /// 501 Not Implemented.
    pub const NOT_IMPLEMENTED: StatusCode = StatusCode(501);
    /// 502 Bad Gateway.
    pub const BAD_GATEWAY: StatusCode = StatusCode(502);
    /// 503 Service Unavailable.
    pub const SERVICE_UNAVAILABLE: StatusCode = StatusCode(503);
    /// 504 Gateway Timeout.
    pub const GATEWAY_TIMEOUT: StatusCode = StatusCode(504);
    /// 505 HTTP Version Not Supported.
    pub const HTTP_VERSION_NOT_SUPPORTED: StatusCode = StatusCode(505);
    /// 506 Variant Also Negotiates.
    ///
    /// RFC 2295.
    pub const VARIANT_ALSO_NEGOTIATES: StatusCode = StatusCode(506);
    /// 507 Insufficient Storage.
    ///
    /// RFC 4918.
    pub const INSUFFICIENT_STORAGE: StatusCode = StatusCode(507);
    /// 508 Loop Detected.
    ///
    /// RFC 5842.
    pub const LOOP_DETECTED: StatusCode = StatusCode(508);
    /// 510 Not Extended.
    ///
    /// RFC 2774.
    pub const NOT_EXTENDED: StatusCode = StatusCode(510);
    /// 511 Network Authentication Required.
    ///
    /// RFC 6585.
    pub const NETWORK_AUTHENTICATION_REQUIRED: StatusCode = StatusCode(511);

    /// Create a new `StatusCode`.
    ///
    /// Returns an error if `code` is outside the range 100-599.
    pub const fn new(code: u16) -> Result<StatusCode, InvalidStatus> {
        if code >= 100 && code <= 599 {
            Ok(StatusCode(code))
        } else {
            Err(InvalidStatus)
        }
    }

    /// Returns the status code as integer.
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Returns `true` if the status code is in the 1xx range.
    pub const fn is_informational(self) -> bool {
        self.0 >= 100 && self.0 <= 199
    }

    /// Returns `true` if the status code is in the 2xx range.
    pub const fn is_successful(self) -> bool {
        self.0 >= 200 && self.0 <= 299
    }

    /// Returns `true` if the status code is in the 3xx range.
    pub const fn is_redirect(self) -> bool {
        self.0 >= 300 && self.0 <= 399
    }

    /// Returns `true` if the status code is in the 4xx range.
    pub const fn is_client_error(self) -> bool {
        self.0 >= 400 && self.0 <= 499
    }

    /// Returns `true` if the status code is in the 5xx range.
    pub const fn is_server_error(self) -> bool {
        self.0 >= 500 && self.0 <= 599
    }

    /// Returns the reason phrase registered for the status code, if any.
    pub const fn phrase(self) -> Option<&'static str> {
        match self.0 {
            100 => Some("Continue"),
            101 => Some("Switching Protocols"),
            102 => Some("Processing"),
            103 => Some("Early Hints"),

            200 => Some("OK"),
            201 => Some("Created"),
            202 => Some("Accepted"),
            203 => Some("Non-Authoritative Information"),
            204 => Some("No Content"),
            205 => Some("Reset Content"),
            206 => Some("Partial Content"),
            207 => Some("Multi-Status"),
            208 => Some("Already Reported"),
            226 => Some("IM Used"),

            300 => Some("Multiple Choices"),
            301 => Some("Moved Permanently"),
            302 => Some("Found"),
            303 => Some("See Other"),
            304 => Some("Not Modified"),
            305 => Some("Use Proxy"),
            307 => Some("Temporary Redirect"),
            308 => Some("Permanent Redirect"),

            400 => Some("Bad Request"),
            401 => Some("Unauthorized"),
            402 => Some("Payment Required"),
            403 => Some("Forbidden"),
            404 => Some("Not Found"),
            405 => Some("Method Not Allowed"),
            406 => Some("Not Acceptable"),
            407 => Some("Proxy Authentication Required"),
            408 => Some("Request Timeout"),
            409 => Some("Conflict"),
            410 => Some("Gone"),
            411 => Some("Length Required"),
            412 => Some("Precondition Failed"),
            413 => Some("Payload Too Large"),
            414 => Some("URI Too Long"),
            415 => Some("Unsupported Media Type"),
            416 => Some("Range Not Satisfiable"),
            417 => Some("Expectation Failed"),
            418 => Some("I'm a teapot"),
            421 => Some("Misdirected Request"),
            422 => Some("Unprocessable Entity"),
            423 => Some("Locked"),
            424 => Some("Failed Dependency"),
            425 => Some("Too Early"),
            426 => Some("Upgrade Required"),
            428 => Some("Precondition Required"),
            429 => Some("Too Many Requests"),
            431 => Some("Request Header Fields Too Large"),
            451 => Some("Unavailable For Legal Reasons"),

            500 => Some("Internal Server Error"),
            501 => Some("Not Implemented"),
            502 => Some("Bad Gateway"),
            503 => Some("Service Unavailable"),
            504 => Some("Gateway Timeout"),
            505 => Some("HTTP Version Not Supported"),
            506 => Some("Variant Also Negotiates"),
            507 => Some("Insufficient Storage"),
            508 => Some("Loop Detected"),
            510 => Some("Not Extended"),
            511 => Some("Network Authentication Required"),

            _ => None,
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Error returned by [`StatusCode::new`] and the [`FromStr`] implementation
/// for [`StatusCode`].
#[derive(Copy, Clone, Debug)]
pub struct InvalidStatus;

impl fmt::Display for InvalidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid status code")
    }
}

impl std::error::Error for InvalidStatus {}

impl FromStr for StatusCode {
    type Err = InvalidStatus;

    /// Accepts exactly three ASCII digits forming a code in the range
    /// 100-599, e.g. `"404"`.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let bytes = code.as_bytes();
        match bytes {
            [b'1'..=b'5', b'0'..=b'9', b'0'..=b'9'] => {
                let value = (bytes[0] - b'0') as u16 * 100
                    + (bytes[1] - b'0') as u16 * 10
                    + (bytes[2] - b'0') as u16;
                Ok(StatusCode(value))
            }
            _ => Err(InvalidStatus),
        }
    }
}
