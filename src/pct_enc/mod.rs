//! Percent-decoding utilities.
//!
//! Two independent passes are provided and no encoder:
//!
//! - [`decode_url`] decodes every percent-encoded octet that does *not*
//!   stand for a reserved delimiter, interpreting runs of octets with a
//!   text encoding. It can be applied to a whole URL string or to any of
//!   its components, before or after splitting.
//! - [`decode_url_component`] decodes the octets that *do* stand for a
//!   reserved delimiter. It is meant for a single component that has
//!   already been split out, as the last decoding step.

pub(crate) mod table;

use alloc::{borrow::Cow, string::String, vec::Vec};
use core::{fmt, hash};
use ref_cast::{ref_cast_custom, RefCastCustom};

pub use encoding_rs::{Encoding, UTF_8};

const fn hexval(x: u8) -> Option<u8> {
    match x {
        b'0'..=b'9' => Some(x - b'0'),
        b'A'..=b'F' => Some(x - b'A' + 10),
        b'a'..=b'f' => Some(x - b'a' + 10),
        _ => None,
    }
}

/// Returns the octet encoded by the triple starting at `i`, if any.
fn octet_at(s: &[u8], i: usize) -> Option<u8> {
    match *s.get(i..i + 3)? {
        [b'%', hi, lo] => Some(hexval(hi)? << 4 | hexval(lo)?),
        _ => None,
    }
}

/// Decodes percent-encoded octets that do not stand for a reserved delimiter.
///
/// Every octet except those of `: / ? # [ ] @ ! $ & ' ( ) * + , ; =` is
/// decoded, `%25` included. Consecutive octets are decoded together as one
/// byte sequence in the given encoding, with malformed sequences replaced by
/// `U+FFFD`. Incomplete or non-hexadecimal triples and all other text are
/// copied through unchanged.
///
/// # Examples
///
/// ```
/// use urlparts::pct_enc::{decode_url, Encoding, UTF_8};
///
/// assert_eq!(decode_url("%D1%85%D0%B0%D0%B1%D1%80", UTF_8), "хабр");
/// assert_eq!(decode_url("sch%3a%2f%2fhst", UTF_8), "sch%3a%2f%2fhst");
/// assert_eq!(decode_url("%25%2", UTF_8), "%%2");
///
/// let cp1251 = Encoding::for_label(b"windows-1251").unwrap();
/// assert_eq!(decode_url("%f5%e0%e1%f0", cp1251), "хабр");
/// ```
#[must_use]
pub fn decode_url<'a>(s: &'a str, encoding: &'static Encoding) -> Cow<'a, str> {
    decode(s, Some(encoding), false)
}

/// Decodes percent-encoded octets that stand for a reserved delimiter.
///
/// Every triple encoding one of `: / ? # [ ] @ ! $ & ' ( ) * + , ; =` (with
/// either hex digit case) is replaced by the delimiter itself. When an
/// encoding is given, the other octets are decoded as by [`decode_url`] in
/// the same pass. The output of a replacement is never decoded again.
///
/// # Examples
///
/// ```
/// use urlparts::pct_enc::{decode_url_component, UTF_8};
///
/// assert_eq!(decode_url_component("sch%3a%2f%2fhst%2fph%3bpr", None), "sch://hst/ph;pr");
/// assert_eq!(decode_url_component("%a%2%2fhst", None), "%a%2/hst");
/// assert_eq!(decode_url_component("%20%3A", None), "%20:");
/// assert_eq!(decode_url_component("%20%3A", Some(UTF_8)), " :");
/// assert_eq!(decode_url_component("%2525", Some(UTF_8)), "%25");
/// assert_eq!(decode_url_component("%253a", Some(UTF_8)), "%3a");
/// ```
#[must_use]
pub fn decode_url_component<'a>(s: &'a str, encoding: Option<&'static Encoding>) -> Cow<'a, str> {
    decode(s, encoding, true)
}

/// Decodes in a single pass: reserved octets to their delimiters if `reserved`
/// is set, runs of other octets with `encoding` if it is given.
fn decode<'a>(s: &'a str, encoding: Option<&'static Encoding>, reserved: bool) -> Cow<'a, str> {
    let bytes = s.as_bytes();
    let Some(mut i) = s.find('%') else {
        return Cow::Borrowed(s);
    };

    let mut out: Option<String> = None;
    let mut run = Vec::new();
    // Start of the text not yet copied to `out`.
    let mut last = 0;

    while i < bytes.len() {
        match (octet_at(bytes, i), encoding) {
            (Some(x), _) if reserved && table::RESERVED.contains(x) => {
                if let (false, Some(encoding)) = (run.is_empty(), encoding) {
                    flush_run(&mut out, &mut run, encoding);
                }
                let buf = out.get_or_insert_with(|| String::with_capacity(s.len()));
                buf.push_str(&s[last..i]);
                buf.push(char::from(x));
                i += 3;
                last = i;
            }
            (Some(x), Some(_)) if !table::RESERVED.contains(x) => {
                if run.is_empty() {
                    let buf = out.get_or_insert_with(|| String::with_capacity(s.len()));
                    buf.push_str(&s[last..i]);
                }
                run.push(x);
                i += 3;
                last = i;
            }
            _ => {
                if let (false, Some(encoding)) = (run.is_empty(), encoding) {
                    flush_run(&mut out, &mut run, encoding);
                }
                i += 1;
            }
        }
    }

    if let (false, Some(encoding)) = (run.is_empty(), encoding) {
        flush_run(&mut out, &mut run, encoding);
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&s[last..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(s),
    }
}

fn flush_run(out: &mut Option<String>, run: &mut Vec<u8>, encoding: &'static Encoding) {
    let (decoded, _) = encoding.decode_without_bom_handling(run);
    out.get_or_insert_with(String::new).push_str(&decoded);
    run.clear();
}

/// A percent-encoded string slice.
///
/// This is a typed view over text that may contain percent-encoded octets,
/// such as a component of a [`Url`](crate::Url). No validation is performed
/// on construction: malformed triples are kept as they are and simply pass
/// through decoding.
///
/// # Examples
///
/// ```
/// use urlparts::{pct_enc::{PctStr, UTF_8}, Url};
///
/// let url = Url::parse("/%D0%BF%D1%83%D1%82%D1%8C%2Fx");
/// let path = PctStr::new(url.path());
/// assert!(path.has_pct_encoded());
/// assert_eq!(path.decode(UTF_8), "/путь%2Fx");
/// assert_eq!(path.decode_component(Some(UTF_8)), "/путь/x");
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct PctStr {
    inner: str,
}

impl PctStr {
    /// Converts a string slice to a `PctStr` slice.
    #[ref_cast_custom]
    pub const fn new(s: &str) -> &Self;

    /// An empty `PctStr` slice.
    pub const EMPTY: &'static Self = Self::new("");

    /// Yields the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns the length of the slice in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Checks whether the slice is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Checks whether the slice contains a well-formed percent-encoded octet.
    #[must_use]
    pub fn has_pct_encoded(&self) -> bool {
        let bytes = self.inner.as_bytes();
        (0..bytes.len()).any(|i| octet_at(bytes, i).is_some())
    }

    /// Decodes the slice with [`decode_url`].
    #[must_use]
    pub fn decode(&self, encoding: &'static Encoding) -> Cow<'_, str> {
        decode_url(&self.inner, encoding)
    }

    /// Decodes the slice with [`decode_url_component`].
    #[must_use]
    pub fn decode_component(&self, encoding: Option<&'static Encoding>) -> Cow<'_, str> {
        decode_url_component(&self.inner, encoding)
    }
}

impl AsRef<str> for PctStr {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq for PctStr {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl PartialEq<str> for PctStr {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &self.inner == other
    }
}

impl PartialEq<PctStr> for str {
    #[inline]
    fn eq(&self, other: &PctStr) -> bool {
        self == &other.inner
    }
}

impl Eq for PctStr {}

impl hash::Hash for PctStr {
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl Default for &PctStr {
    #[inline]
    fn default() -> Self {
        PctStr::EMPTY
    }
}

impl fmt::Debug for PctStr {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for PctStr {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
