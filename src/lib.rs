//! Immutable HTTP message value types.
//!
//! This crate models an HTTP [`Request`], [`Response`], [`Uri`] and body
//! [`Stream`] as plain values, so independently written HTTP components can
//! exchange messages without sharing a transport or framework. It does no
//! I/O of its own besides reading and writing the body stream handed to it:
//! construction receives already decomposed fields, there is no wire
//! parsing.
//!
//! The types never change in place. Constructors normalize their inputs
//! into canonical form (lowercased scheme and host, percent-encoded URI
//! components, default ports dropped) and every `with_*` method returns a
//! new value with exactly one field changed. On [`Uri`] the methods borrow
//! and clone; on the message types they consume the receiver, because a
//! body stream exclusively owns its underlying resource.

#![warn(missing_docs)]

pub mod header;
mod message;
pub mod method;
mod request;
mod response;
pub mod status;
pub mod stream;
pub mod uri;
pub mod version;

#[doc(no_inline)]
pub use header::{Header, HeaderName, HeaderValues, Headers};
pub use message::Message;
#[doc(no_inline)]
pub use method::Method;
pub use request::Request;
pub use response::Response;
#[doc(no_inline)]
pub use status::StatusCode;
#[doc(no_inline)]
pub use stream::{Metadata, Resource, Stream, StreamError};
#[doc(no_inline)]
pub use uri::Uri;
#[doc(no_inline)]
pub use version::Version;

/// Returns `true` if `left` and `right` are an ASCII case-insensitive
/// match.
pub(crate) const fn eq_ignore_case(left: &str, right: &str) -> bool {
    let left = left.as_bytes();
    let right = right.as_bytes();
    if left.len() != right.len() {
        return false;
    }

    let mut i = 0;
    while i < left.len() {
        if left[i].to_ascii_lowercase() != right[i].to_ascii_lowercase() {
            return false;
        }
        i += 1;
    }
    true
}
