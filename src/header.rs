//! Module with HTTP header related types.
//!
//! [`Headers`] is an ordered collection of header entries. Each entry pairs a
//! [`HeaderName`], which keeps the casing it was supplied with but compares
//! case-insensitively, with an ordered list of values ([`HeaderValues`]). The
//! collection holds at most one entry per case-insensitive name.

use std::borrow::Cow;
use std::fmt;
use std::iter::FusedIterator;

use crate::eq_ignore_case;

/// List of headers.
///
/// Entries iterate in insertion order. Replacing an entry through
/// [`Headers::insert`] moves it to the end of that order; appending to an
/// entry through [`Headers::append`] keeps its position and its stored name.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Headers {
    parts: Vec<HeaderPart>,
}

#[derive(Clone, PartialEq, Eq)]
struct HeaderPart {
    name: HeaderName<'static>,
    values: HeaderValues,
}

impl Headers {
    /// Empty list of headers.
    pub const EMPTY: Headers = Headers { parts: Vec::new() };

    /// Creates an empty list of headers.
    pub fn new() -> Headers {
        Headers::EMPTY
    }

    /// Returns the number of headers.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns `true` if the list contains no headers.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Returns `true` if a header with `name` exists, comparing
    /// case-insensitively.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Get the values of the header with `name`, if any.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.position(name)
            .map(|idx| self.parts[idx].values.as_slice())
    }

    /// Get the values of the header with `name` as a single comma-joined
    /// line.
    ///
    /// Returns an empty string if the header is not present.
    pub fn line(&self, name: &str) -> String {
        match self.get(name) {
            Some(values) => values.join(","),
            None => String::new(),
        }
    }

    /// Set the header with `name` to `values`, replacing any existing entry
    /// with a case-insensitively matching name.
    ///
    /// The replacement is stored under the casing of `name` as supplied and
    /// placed at the end of the iteration order.
    pub fn insert<N, V>(&mut self, name: N, values: V)
    where
        N: Into<HeaderName<'static>>,
        V: Into<HeaderValues>,
    {
        let name = name.into();
        if let Some(idx) = self.position(name.as_ref()) {
            self.parts.remove(idx);
        }
        self.parts.push(HeaderPart {
            name,
            values: values.into(),
        });
    }

    /// Append `values` to the header with `name`.
    ///
    /// If a case-insensitively matching entry exists its value list is
    /// extended in place, keeping the entry's position and stored casing.
    /// Otherwise this is the same as [`Headers::insert`].
    pub fn append<N, V>(&mut self, name: N, values: V)
    where
        N: Into<HeaderName<'static>>,
        V: Into<HeaderValues>,
    {
        let name = name.into();
        let values = values.into();
        match self.position(name.as_ref()) {
            Some(idx) => self.parts[idx].values.extend(values),
            None => self.parts.push(HeaderPart { name, values }),
        }
    }

    /// Remove the header with `name`, if any, comparing case-insensitively.
    pub fn remove(&mut self, name: &str) {
        if let Some(idx) = self.position(name) {
            self.parts.remove(idx);
        }
    }

    /// Returns an iterator over all headers, in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            headers: self,
            pos: 0,
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.parts
            .iter()
            .position(|part| eq_ignore_case(part.name.as_ref(), name))
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = Header<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl fmt::Debug for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_map();
        for part in self.parts.iter() {
            f.entry(&part.name, &part.values.as_slice());
        }
        f.finish()
    }
}

/// Iterator for [`Headers`], see [`Headers::iter`].
pub struct Iter<'a> {
    headers: &'a Headers,
    pos: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Header<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.headers.parts.get(self.pos).map(|part| {
            let header = Header {
                name: &part.name,
                values: part.values.as_slice(),
            };
            self.pos += 1;
            header
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    fn count(self) -> usize {
        self.len()
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {
    fn len(&self) -> usize {
        self.headers.len() - self.pos
    }
}

impl<'a> FusedIterator for Iter<'a> {}

/// View of a single header entry, see [`Headers::iter`].
#[derive(Copy, Clone)]
pub struct Header<'a> {
    name: &'a HeaderName<'static>,
    values: &'a [String],
}

impl<'a> Header<'a> {
    /// Returns the name of the header, in its stored casing.
    pub const fn name(&self) -> &'a HeaderName<'static> {
        self.name
    }

    /// Returns the values of the header, in append order.
    pub const fn values(&self) -> &'a [String] {
        self.values
    }
}

impl<'a> fmt::Debug for Header<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Header")
            .field("name", &self.name)
            .field("values", &self.values)
            .finish()
    }
}

/// HTTP header name.
///
/// The name keeps the casing it was created with, which is also the casing
/// written when the header is emitted, but two names are equal when they
/// match ASCII case-insensitively.
#[derive(Clone)]
pub struct HeaderName<'a> {
    inner: Cow<'a, str>,
}

/// Macro to create constants for known header names and the matching
/// [`HeaderName::from_str`] arms.
macro_rules! known_headers {
    ($( ( $const_name: ident, $http_name: literal ) ),+ $(,)?) => {
        $(
            #[doc = concat!("`", $http_name, "` header name.")]
            pub const $const_name: HeaderName<'static> = HeaderName::from_static($http_name);
        )+

        /// Create a new HTTP header `HeaderName`.
        ///
        /// Names spelled exactly like one of the associated constants reuse
        /// that constant; any other name is stored as supplied, allocated on
        /// the heap.
        #[allow(clippy::should_implement_trait)]
        pub fn from_str(name: &str) -> HeaderName<'static> {
            match name {
                $( $http_name => HeaderName::$const_name, )+
                _ => HeaderName::from(name.to_string()),
            }
        }
    }
}

impl HeaderName<'static> {
    known_headers!(
        (ALLOW, "Allow"),
        (CONTENT_LENGTH, "Content-Length"),
        (CONTENT_TYPE, "Content-Type"),
        (DATE, "Date"),
        (HOST, "Host"),
        (LOCATION, "Location"),
        (SERVER, "Server"),
        (TRANSFER_ENCODING, "Transfer-Encoding"),
        (USER_AGENT, "User-Agent"),
    );

    /// Create a new `HeaderName` from a static string.
    pub const fn from_static(name: &'static str) -> HeaderName<'static> {
        HeaderName {
            inner: Cow::Borrowed(name),
        }
    }

    /// Returns `true` if `self` is heap allocated.
    ///
    /// # Notes
    ///
    /// This is only here to test [`HeaderName::from_str`], not part of the
    /// stable API.
    #[doc(hidden)]
    pub fn is_heap_allocated(&self) -> bool {
        matches!(self.inner, Cow::Owned(_))
    }
}

impl From<String> for HeaderName<'static> {
    fn from(name: String) -> HeaderName<'static> {
        HeaderName {
            inner: Cow::Owned(name),
        }
    }
}

impl From<&str> for HeaderName<'static> {
    fn from(name: &str) -> HeaderName<'static> {
        HeaderName::from_str(name)
    }
}

impl<'a> AsRef<str> for HeaderName<'a> {
    fn as_ref(&self) -> &str {
        self.inner.as_ref()
    }
}

impl<'a, 'b> PartialEq<HeaderName<'b>> for HeaderName<'a> {
    fn eq(&self, other: &HeaderName<'b>) -> bool {
        eq_ignore_case(self.as_ref(), other.as_ref())
    }
}

impl<'a> Eq for HeaderName<'a> {}

impl<'a> PartialEq<str> for HeaderName<'a> {
    fn eq(&self, other: &str) -> bool {
        eq_ignore_case(self.as_ref(), other)
    }
}

impl<'a> PartialEq<&'_ str> for HeaderName<'a> {
    fn eq(&self, other: &&str) -> bool {
        self.eq(*other)
    }
}

impl<'a> fmt::Debug for HeaderName<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl<'a> fmt::Display for HeaderName<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Ordered list of values for a single header entry.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct HeaderValues {
    values: Vec<String>,
}

impl HeaderValues {
    /// Create a list holding `value` as its only element, without splitting
    /// it on commas.
    pub fn single<V>(value: V) -> HeaderValues
    where
        V: Into<String>,
    {
        HeaderValues {
            values: vec![value.into()],
        }
    }

    /// Returns the values as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.values
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the list contains no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn extend(&mut self, other: HeaderValues) {
        self.values.extend(other.values);
    }
}

/// A single string value is split on every comma into a list of values, so
/// `"a,b"` becomes two values. A value that legitimately contains a comma
/// must go through [`HeaderValues::single`] or an explicit list instead.
impl From<&str> for HeaderValues {
    fn from(value: &str) -> HeaderValues {
        HeaderValues {
            values: value.split(',').map(str::to_owned).collect(),
        }
    }
}

/// See the [`From<&str>`] implementation.
impl From<String> for HeaderValues {
    fn from(value: String) -> HeaderValues {
        HeaderValues::from(value.as_str())
    }
}

impl From<Vec<String>> for HeaderValues {
    fn from(values: Vec<String>) -> HeaderValues {
        HeaderValues { values }
    }
}

impl From<&[&str]> for HeaderValues {
    fn from(values: &[&str]) -> HeaderValues {
        HeaderValues {
            values: values.iter().map(|value| String::from(*value)).collect(),
        }
    }
}

impl fmt::Debug for HeaderValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.values.fmt(f)
    }
}
