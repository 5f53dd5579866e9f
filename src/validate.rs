use crate::{
    error::{AuthorityError, UrlError},
    pct_enc::table,
    Url,
};

/// Checks an IP literal without its brackets.
///
/// This accepts `IPvFuture` and any run of hex digits, colons and dots.
/// It does not check the structure of IPv6 addresses.
fn is_ip_literal(s: &str) -> bool {
    if let Some(rem) = s.strip_prefix('v').or_else(|| s.strip_prefix('V')) {
        if let Some((ver, addr)) = rem.split_once('.') {
            if !ver.is_empty()
                && table::HEXDIG.validate(ver.as_bytes())
                && !addr.is_empty()
                && table::IPV_FUTURE.validate(addr.as_bytes())
            {
                return true;
            }
        }
    }
    !s.is_empty() && table::IP_ADDR.validate(s.as_bytes())
}

fn validate_host(host: &str) -> Result<(), AuthorityError> {
    let valid = match host.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(literal) => is_ip_literal(literal),
        // Valid IPv4 addresses are valid registered names too.
        None => !table::REG_NAME_DELIMS.any_in(host.as_bytes()),
    };
    if valid {
        Ok(())
    } else {
        Err(AuthorityError::InvalidHost)
    }
}

impl Url {
    /// Checks the components against their grammar.
    ///
    /// Parsing accepts anything, so this should be called on URLs from
    /// untrusted sources. Components are checked in the order scheme,
    /// userinfo, host, path, query; the first violation is returned.
    ///
    /// Only delimiters are checked, since a component that holds a delimiter
    /// of a following component could not have been parsed into it. Empty
    /// components are always valid, and so is the fragment. A path that
    /// starts with `"//"` or whose first segment contains `':'` is not
    /// rejected, since [`Display`](core::fmt::Display) escapes it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    ///
    /// - the scheme does not match `[a-z][a-z0-9+.-]*`;
    /// - the userinfo contains one of `/ ? # @ [ ]`;
    /// - the host is in brackets but is not an IP literal, or is not in
    ///   brackets and contains one of `/ ? # @ [ ] :`. After `v<hex>.`, an
    ///   `IPvFuture` literal may hold unreserved characters, sub-delims
    ///   (including `'+'`) and `':'`, following RFC 3986;
    /// - the path contains `'?'` or `'#'`;
    /// - the query contains `'#'`.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlparts::{AuthorityError, Url, UrlError};
    ///
    /// let url = Url::parse("http://user@[v1.fe]:80/a?b#c");
    /// assert_eq!(url.validate(), Ok(&url));
    ///
    /// let url = Url::parse("//h:22:80/");
    /// assert_eq!(url.validate(), Err(UrlError::InvalidAuthority(AuthorityError::InvalidHost)));
    /// ```
    pub fn validate(&self) -> Result<&Self, UrlError> {
        if !self.scheme.is_empty() {
            let valid = matches!(self.scheme.as_bytes(), [first, rem @ ..]
                if first.is_ascii_lowercase()
                    && table::SCHEME.validate(rem)
                    && !rem.iter().any(u8::is_ascii_uppercase));
            if !valid {
                return Err(UrlError::InvalidScheme);
            }
        }

        if table::USERINFO_DELIMS.any_in(self.userinfo.as_bytes()) {
            return Err(AuthorityError::InvalidUserinfo.into());
        }

        if !self.host.is_empty() {
            validate_host(&self.host)?;
        }

        if table::PATH_END.any_in(self.path.as_bytes()) {
            return Err(UrlError::InvalidPath);
        }

        if self.query.contains('#') {
            return Err(UrlError::InvalidQuery);
        }

        Ok(self)
    }
}
