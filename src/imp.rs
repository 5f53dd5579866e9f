use crate::{
    build::Builder,
    parse::{self, Parts},
    pct_enc::{self, Encoding},
};
use alloc::string::String;
use core::{convert::Infallible, str::FromStr};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A URL split into its escaped components.
///
/// Every component is stored as a string that defaults to empty, so an
/// absent component and a present but empty one are the same thing. The
/// scheme and the host are lowercased on construction, and a non-empty path
/// is made to start with `'/'` whenever userinfo, host or port is present.
/// All other components keep their case and percent-encoding.
///
/// A `Url` never changes after construction. Methods that look like they
/// modify it return a new value instead.
///
/// # Parsing
///
/// [`Url::parse`] accepts any string and never fails. The splitting rules
/// are lexical, and where the grammar is ambiguous they pick one reading:
///
/// - A scheme is only recognized when it matches `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
///   and is followed by a colon before any of `/ ? #`.
/// - The userinfo ends at the first `'@'` of the authority.
/// - The port is the text after the last `':'` of the authority, but only
///   when that text is empty or made of digits. Otherwise it stays in the host.
///
/// ```
/// use urlparts::Url;
///
/// let url = Url::parse("//host:22:80/path");
/// assert_eq!((url.host(), url.port(), url.path()), ("host:22", "80", "/path"));
///
/// let url = Url::parse("//host:no/path");
/// assert_eq!((url.host(), url.port()), ("host:no", ""));
///
/// let url = Url::parse("not_a_scheme:path");
/// assert_eq!((url.scheme(), url.path()), ("", "not_a_scheme:path"));
/// ```
///
/// # Comparison
///
/// `Url`s are compared field by field, the decoded marker included.
/// No normalization happens before comparison beyond what construction does.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Url {
    pub(crate) scheme: String,
    pub(crate) userinfo: String,
    pub(crate) host: String,
    pub(crate) port: String,
    pub(crate) path: String,
    pub(crate) query: String,
    pub(crate) fragment: String,
    pub(crate) decoded: bool,
}

impl Url {
    /// Splits a string into URL components.
    ///
    /// This function never fails. Use [`validate`] to check the result
    /// when the input comes from an untrusted source.
    ///
    /// [`validate`]: Self::validate
    #[must_use]
    pub fn parse(s: &str) -> Url {
        Url::from_parts(parse::split(s))
    }

    /// Creates a new builder for constructing a `Url` from its components.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlparts::Url;
    ///
    /// let url = Url::builder()
    ///     .scheme("HTTP")
    ///     .host("example.com")
    ///     .port(8080)
    ///     .path("index.html")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(url.to_string(), "http://example.com:8080/index.html");
    /// ```
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Creates a `Url` from raw components, applying the construction rules.
    pub(crate) fn from_parts(p: Parts<'_>) -> Url {
        let has_authority = !(p.userinfo.is_empty() && p.host.is_empty() && p.port.is_empty());

        let mut path = String::with_capacity(p.path.len() + 1);
        if has_authority && !p.path.is_empty() && !p.path.starts_with('/') {
            path.push('/');
        }
        path.push_str(p.path);

        Url {
            scheme: p.scheme.to_lowercase(),
            userinfo: p.userinfo.into(),
            host: p.host.to_lowercase(),
            port: p.port.into(),
            path,
            query: p.query.into(),
            fragment: p.fragment.into(),
            decoded: false,
        }
    }

    pub(crate) fn as_parts(&self) -> Parts<'_> {
        Parts {
            scheme: &self.scheme,
            userinfo: &self.userinfo,
            host: &self.host,
            port: &self.port,
            path: &self.path,
            query: &self.query,
            fragment: &self.fragment,
        }
    }

    /// Returns the [scheme] component, lowercased.
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the [userinfo] subcomponent.
    ///
    /// [userinfo]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.1
    #[must_use]
    pub fn userinfo(&self) -> &str {
        &self.userinfo
    }

    /// Returns the [host] subcomponent, lowercased.
    ///
    /// IP literals keep their brackets.
    ///
    /// [host]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the [port] subcomponent.
    ///
    /// [port]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.3
    #[must_use]
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Returns the [path] component.
    ///
    /// [path]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.3
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the [query] component, without the leading `'?'`.
    ///
    /// [query]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.4
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the [fragment] component, without the leading `'#'`.
    ///
    /// [fragment]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.5
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Checks whether [`decode`](Self::decode) has been applied.
    #[must_use]
    pub fn is_decoded(&self) -> bool {
        self.decoded
    }

    /// Decodes percent-encoded unreserved octets of the components as UTF-8.
    ///
    /// Equivalent to `self.decode_with(UTF_8)`.
    #[must_use]
    pub fn decode(&self) -> Url {
        self.decode_with(pct_enc::UTF_8)
    }

    /// Decodes percent-encoded octets of the components that do not stand for
    /// a reserved delimiter, with the given text encoding.
    ///
    /// [`decode_url`](pct_enc::decode_url) is applied to the userinfo, host,
    /// path, query and fragment. The result is marked as decoded, and decoding
    /// a decoded `Url` again returns it unchanged, so `%2525` never turns into `%`.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlparts::Url;
    ///
    /// let url = Url::parse("http://%D0%BF%D1%8C%D0%B5%D1%80@local.com/%2525").decode();
    /// assert_eq!(url.userinfo(), "пьер");
    /// assert_eq!(url.path(), "/%25");
    /// assert_eq!(url.decode(), url);
    /// ```
    #[must_use]
    pub fn decode_with(&self, encoding: &'static Encoding) -> Url {
        if self.decoded {
            return self.clone();
        }
        let decode = |s: &str| pct_enc::decode_url(s, encoding).into_owned();
        Url {
            scheme: self.scheme.clone(),
            userinfo: decode(&self.userinfo),
            host: decode(&self.host),
            port: self.port.clone(),
            path: decode(&self.path),
            query: decode(&self.query),
            fragment: decode(&self.fragment),
            decoded: true,
        }
    }
}

impl FromStr for Url {
    type Err = Infallible;

    /// Equivalent to [`Url::parse`].
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Url::parse(s))
    }
}

impl From<&str> for Url {
    #[inline]
    fn from(s: &str) -> Self {
        Url::parse(s)
    }
}

impl From<String> for Url {
    #[inline]
    fn from(s: String) -> Self {
        Url::parse(&s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Url {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Url {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct UrlVisitor;

        impl de::Visitor<'_> for UrlVisitor {
            type Value = Url;

            fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("a URL string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(Url::parse(v))
            }
        }

        deserializer.deserialize_str(UrlVisitor)
    }
}
