use crate::{parse, Url};
use alloc::string::{String, ToString};
use core::fmt::{self, Write};

impl Url {
    /// Composes the components back into a URL string.
    ///
    /// Equivalent to `self.to_string()`. See the [`Display`](#impl-Display-for-Url)
    /// implementation for the exact rules.
    #[must_use]
    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

/// Writes the URL string.
///
/// The output always parses back to the same components:
///
/// - `"//"` is written before the authority, and also when the authority is
///   empty but the path starts with `"//"`, so that the path is not read as
///   an authority.
/// - `"./"` is written before a path without scheme and authority whose first
///   segment contains a colon after its first character, so that the segment
///   is not read as a scheme. Parsing strips this prefix again.
///
/// The output is not necessarily equal to the string the `Url` was parsed from:
/// empty delimiters such as a trailing `'?'` are dropped.
///
/// # Examples
///
/// ```
/// use urlparts::Url;
///
/// let url = Url::builder().path("//path").build().unwrap();
/// assert_eq!(url.to_string(), "////path");
/// let url = Url::builder().path("pa:th/not").build().unwrap();
/// assert_eq!(url.to_string(), "./pa:th/not");
/// assert_eq!(Url::parse("./pa:th/not"), url);
/// let url = Url::builder().host("host").path("path").build().unwrap();
/// assert_eq!(url.to_string(), "//host/path");
/// assert_eq!(Url::parse("/path?#").to_string(), "/path");
/// ```
impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            f.write_str(&self.scheme)?;
            f.write_char(':')?;
        }

        let authority = self.authority();
        if !authority.is_empty() || self.path.starts_with("//") {
            f.write_str("//")?;
            f.write_str(&authority)?;
        } else if self.scheme.is_empty() && parse::needs_dot_prefix(&self.path) {
            f.write_str("./")?;
        }

        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            f.write_char('?')?;
            f.write_str(&self.query)?;
        }
        if !self.fragment.is_empty() {
            f.write_char('#')?;
            f.write_str(&self.fragment)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Url")
            .field("scheme", &self.scheme)
            .field("userinfo", &self.userinfo)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("path", &self.path)
            .field("query", &self.query)
            .field("fragment", &self.fragment)
            .field("decoded", &self.decoded)
            .finish()
    }
}
