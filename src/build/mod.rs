//! Module for building and manipulating URLs.

use crate::{parse, parse::Parts, pct_enc::table, Url};
use alloc::string::{String, ToString};
use core::fmt;

/// An error occurred when applying a [`Builder`].
///
/// This is not a URL error: it reports a misuse of the builder.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// The authority was set together with userinfo, host or port.
    AuthorityConflict,
    /// The full path was set together with path, query or fragment.
    FullPathConflict,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::AuthorityConflict => {
                "authority should not be set together with userinfo, host or port"
            }
            Self::FullPathConflict => {
                "full path should not be set together with path, query or fragment"
            }
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "impl-error")]
impl crate::Error for BuildError {}

/// A value that can be used as a port.
///
/// Numbers are written in decimal. Strings are stored verbatim.
pub trait AsPort {
    /// Appends the port to the buffer.
    fn push_to(self, buf: &mut String);
}

impl AsPort for u16 {
    fn push_to(self, buf: &mut String) {
        buf.push_str(&self.to_string());
    }
}

impl AsPort for &str {
    fn push_to(self, buf: &mut String) {
        buf.push_str(self);
    }
}

impl AsPort for String {
    fn push_to(self, buf: &mut String) {
        buf.push_str(&self);
    }
}

/// A set of component overrides for creating a [`Url`].
///
/// Every component is either set or left alone. An empty string is a value
/// like any other, so setting a component to `""` clears it on
/// [`replace`](Url::replace).
///
/// Besides the seven components, two composites can be set:
/// [`authority`](Self::authority) stands for userinfo, host and port, and
/// [`full_path`](Self::full_path) stands for path, query and fragment.
/// A composite cannot be set together with any of its parts.
///
/// The builder is applied with [`build`](Self::build), [`Url::replace`]
/// or [`Url::setdefault`]. The scheme and the host are lowercased and the
/// path gets a leading `'/'` when needed, as on parsing.
///
/// # Examples
///
/// ```
/// use urlparts::{BuildError, Url};
///
/// let url = Url::builder()
///     .scheme("https")
///     .authority("user@example.com:8042")
///     .full_path("/over/there?name=ferret#nose")
///     .build()?;
/// assert_eq!(url.to_string(), "https://user@example.com:8042/over/there?name=ferret#nose");
///
/// let err = Url::builder().authority("example.com").port(80).build();
/// assert_eq!(err, Err(BuildError::AuthorityConflict));
/// # Ok::<_, urlparts::BuildError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct Builder {
    scheme: Option<String>,
    userinfo: Option<String>,
    host: Option<String>,
    port: Option<String>,
    path: Option<String>,
    query: Option<String>,
    fragment: Option<String>,
    authority: Option<String>,
    full_path: Option<String>,
}

/// Overrides with composites expanded.
#[derive(Clone, Copy)]
struct Fields<'a> {
    scheme: Option<&'a str>,
    userinfo: Option<&'a str>,
    host: Option<&'a str>,
    port: Option<&'a str>,
    path: Option<&'a str>,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl Builder {
    /// Creates a builder with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [scheme] component.
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
    pub fn scheme(mut self, scheme: &str) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Sets the [userinfo] subcomponent.
    ///
    /// [userinfo]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.1
    pub fn userinfo(mut self, userinfo: &str) -> Self {
        self.userinfo = Some(userinfo.into());
        self
    }

    /// Sets the [host] subcomponent.
    ///
    /// [host]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
    pub fn host(mut self, host: &str) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the [port] subcomponent.
    ///
    /// This method takes either a `u16` or a string as argument.
    ///
    /// [port]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.3
    pub fn port(mut self, port: impl AsPort) -> Self {
        let mut buf = String::new();
        port.push_to(&mut buf);
        self.port = Some(buf);
        self
    }

    /// Sets the [path] component.
    ///
    /// [path]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.3
    pub fn path(mut self, path: &str) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the [query] component, without the leading `'?'`.
    ///
    /// [query]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.4
    pub fn query(mut self, query: &str) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Sets the [fragment] component, without the leading `'#'`.
    ///
    /// [fragment]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.5
    pub fn fragment(mut self, fragment: &str) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    /// Sets userinfo, host and port at once from an authority string.
    ///
    /// The string is split as if it followed `"//"` in a URL, so anything
    /// from the first `'/'`, `'?'` or `'#'` on is ignored.
    pub fn authority(mut self, authority: &str) -> Self {
        self.authority = Some(authority.into());
        self
    }

    /// Sets path, query and fragment at once.
    ///
    /// The string is split on its first `'?'` and the first `'#'` after it.
    pub fn full_path(mut self, full_path: &str) -> Self {
        self.full_path = Some(full_path.into());
        self
    }

    /// Creates a `Url` from the components set, leaving the others empty.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a composite is set together with any of its parts.
    pub fn build(self) -> Result<Url, BuildError> {
        Url::default().replace(self)
    }

    fn fields(&self) -> Result<Fields<'_>, BuildError> {
        let mut f = Fields {
            scheme: self.scheme.as_deref(),
            userinfo: self.userinfo.as_deref(),
            host: self.host.as_deref(),
            port: self.port.as_deref(),
            path: self.path.as_deref(),
            query: self.query.as_deref(),
            fragment: self.fragment.as_deref(),
        };

        if let Some(authority) = self.authority.as_deref() {
            if f.userinfo.is_some() || f.host.is_some() || f.port.is_some() {
                return Err(BuildError::AuthorityConflict);
            }
            let end = authority
                .bytes()
                .position(|x| table::AUTHORITY_END.contains(x))
                .unwrap_or(authority.len());
            let (userinfo, host, port) = parse::split_authority(&authority[..end]);
            (f.userinfo, f.host, f.port) = (Some(userinfo), Some(host), Some(port));
        }

        if let Some(full_path) = self.full_path.as_deref() {
            if f.path.is_some() || f.query.is_some() || f.fragment.is_some() {
                return Err(BuildError::FullPathConflict);
            }
            let (path, query, fragment) = parse::split_full_path(full_path);
            (f.path, f.query, f.fragment) = (Some(path), Some(query), Some(fragment));
        }

        Ok(f)
    }
}

/// Picks each component from `base` or from the overrides.
fn merge<'a>(
    base: Parts<'a>,
    f: Fields<'a>,
    pick: impl Fn(&'a str, Option<&'a str>) -> &'a str,
) -> Parts<'a> {
    Parts {
        scheme: pick(base.scheme, f.scheme),
        userinfo: pick(base.userinfo, f.userinfo),
        host: pick(base.host, f.host),
        port: pick(base.port, f.port),
        path: pick(base.path, f.path),
        query: pick(base.query, f.query),
        fragment: pick(base.fragment, f.fragment),
    }
}

impl Url {
    /// Returns a new `Url` with the components set in `builder` replaced.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a composite is set together with any of its parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlparts::Url;
    ///
    /// let url = Url::parse("http://example.com/path?query");
    /// let url = url.replace(Url::builder().host("ya.ru").query(""))?;
    /// assert_eq!(url.to_string(), "http://ya.ru/path");
    ///
    /// let url = url.replace(Url::builder().full_path("/new?q#f"))?;
    /// assert_eq!(url.to_string(), "http://ya.ru/new?q#f");
    /// # Ok::<_, urlparts::BuildError>(())
    /// ```
    pub fn replace(&self, builder: Builder) -> Result<Url, BuildError> {
        let f = builder.fields()?;
        Ok(Url::from_parts(merge(self.as_parts(), f, |old, new| {
            new.unwrap_or(old)
        })))
    }

    /// Returns a new `Url` with the empty components filled from `builder`.
    ///
    /// Components that are not empty are kept even when set in `builder`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a composite is set together with any of its parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlparts::Url;
    ///
    /// let url = Url::parse("//example.com/path");
    /// let url = url.setdefault(Url::builder().scheme("http").host("ya.ru").port(80))?;
    /// assert_eq!(url.to_string(), "http://example.com:80/path");
    /// # Ok::<_, urlparts::BuildError>(())
    /// ```
    pub fn setdefault(&self, builder: Builder) -> Result<Url, BuildError> {
        let f = builder.fields()?;
        Ok(Url::from_parts(merge(self.as_parts(), f, |old, new| {
            if old.is_empty() {
                new.unwrap_or(old)
            } else {
                old
            }
        })))
    }

    /// Returns a new `Url` that takes each non-empty component of `other`
    /// and keeps the rest.
    ///
    /// This is the reverse of [`setdefault`](Self::setdefault): `other` wins
    /// wherever it has a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlparts::Url;
    ///
    /// let url = Url::parse("http://example.com/path?q");
    /// let url = url.replace_from(&Url::parse("https://ya.ru"));
    /// assert_eq!(url.to_string(), "https://ya.ru/path?q");
    /// ```
    #[must_use]
    pub fn replace_from(&self, other: &Url) -> Url {
        let o = other.as_parts();
        let f = Fields {
            scheme: Some(o.scheme),
            userinfo: Some(o.userinfo),
            host: Some(o.host),
            port: Some(o.port),
            path: Some(o.path),
            query: Some(o.query),
            fragment: Some(o.fragment),
        };
        Url::from_parts(merge(self.as_parts(), f, |old, new| match new {
            Some(new) if !new.is_empty() => new,
            _ => old,
        }))
    }
}
