use core::fmt;

/// Detailed cause of an [`UrlError::InvalidAuthority`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AuthorityError {
    /// The userinfo subcomponent contains one of `/ ? # @ [ ]`.
    InvalidUserinfo,
    /// The host subcomponent is neither a valid IP literal in brackets
    /// nor free of `/ ? # @ [ ] :`.
    InvalidHost,
}

impl fmt::Display for AuthorityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::InvalidUserinfo => "invalid userinfo",
            Self::InvalidHost => "invalid host",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "impl-error")]
impl crate::Error for AuthorityError {}

/// An error occurred when validating a [`Url`].
///
/// Components are checked in the order scheme, userinfo, host, path, query,
/// and the first violation is reported. The fragment is never invalid.
///
/// [`Url`]: crate::Url
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum UrlError {
    /// The scheme does not match `[a-z][a-z0-9+.-]*`.
    InvalidScheme,
    /// The userinfo or the host is invalid.
    InvalidAuthority(AuthorityError),
    /// The path contains `?` or `#`.
    InvalidPath,
    /// The query contains `#`.
    InvalidQuery,
}

impl UrlError {
    /// Checks whether the error concerns the authority component.
    #[must_use]
    pub fn is_authority(&self) -> bool {
        matches!(self, Self::InvalidAuthority(_))
    }
}

impl From<AuthorityError> for UrlError {
    #[inline]
    fn from(e: AuthorityError) -> Self {
        Self::InvalidAuthority(e)
    }
}

impl fmt::Display for UrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScheme => f.write_str("invalid scheme"),
            Self::InvalidAuthority(e) => write!(f, "invalid authority: {e}"),
            Self::InvalidPath => f.write_str("invalid path: unescaped '?' or '#'"),
            Self::InvalidQuery => f.write_str("invalid query: unescaped '#'"),
        }
    }
}

#[cfg(feature = "impl-error")]
impl crate::Error for UrlError {
    fn source(&self) -> Option<&(dyn crate::Error + 'static)> {
        match self {
            Self::InvalidAuthority(e) => Some(e),
            _ => None,
        }
    }
}
