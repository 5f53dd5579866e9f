//! Composite components and information about a [`Url`].

use crate::{pct_enc::table, Url};
use alloc::string::String;

/// Checks whether `host` would lose a trailing port-looking part on reparse,
/// i.e., whether the text after its last colon is empty or all digits.
fn has_port_like_tail(host: &str) -> bool {
    host.rsplit_once(':')
        .is_some_and(|(_, tail)| table::DIGIT.validate(tail.as_bytes()))
}

impl Url {
    /// Returns the [authority] component: `[userinfo "@"] host [":" port]`.
    ///
    /// The result parses back to the same userinfo, host and port even for
    /// hosts that contain `':'` or `'@'`: a bare `':'` is appended when the
    /// host ends like a port, and a bare `'@'` is prepended when the host
    /// contains `'@'` but the userinfo is empty.
    ///
    /// [authority]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2
    ///
    /// # Examples
    ///
    /// ```
    /// use urlparts::Url;
    ///
    /// for authority in ["", "host", "host:80", ":80", "user@host", "user@", "user@:80"] {
    ///     assert_eq!(Url::parse(&format!("//{authority}")).authority(), authority);
    /// }
    ///
    /// let url = Url::parse("//no:99:");
    /// assert_eq!((url.host(), url.port()), ("no:99", ""));
    /// assert_eq!(url.authority(), "no:99:");
    /// ```
    #[must_use]
    pub fn authority(&self) -> String {
        let mut buf = String::with_capacity(
            self.userinfo.len() + self.host.len() + self.port.len() + 2,
        );

        if !self.userinfo.is_empty() {
            buf.push_str(&self.userinfo);
            buf.push('@');
        } else if self.host.contains('@') {
            buf.push('@');
        }

        buf.push_str(&self.host);

        if !self.port.is_empty() {
            buf.push(':');
            buf.push_str(&self.port);
        } else if has_port_like_tail(&self.host) {
            buf.push(':');
        }
        buf
    }

    /// Returns the path followed by `"?" query` and `"#" fragment`,
    /// each only when non-empty.
    #[must_use]
    pub fn full_path(&self) -> String {
        let mut buf =
            String::with_capacity(self.path.len() + self.query.len() + self.fragment.len() + 2);
        buf.push_str(&self.path);
        if !self.query.is_empty() {
            buf.push('?');
            buf.push_str(&self.query);
        }
        if !self.fragment.is_empty() {
            buf.push('#');
            buf.push_str(&self.fragment);
        }
        buf
    }

    /// Returns the part of userinfo before the first `':'`.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlparts::Url;
    ///
    /// let url = Url::parse("//user:pass:buzz@host");
    /// assert_eq!(url.username(), "user");
    /// assert_eq!(url.authorization(), "pass:buzz");
    /// ```
    #[must_use]
    pub fn username(&self) -> &str {
        self.userinfo
            .split_once(':')
            .map_or(&self.userinfo[..], |(name, _)| name)
    }

    /// Returns the part of userinfo after the first `':'`, or an empty string.
    #[must_use]
    pub fn authorization(&self) -> &str {
        self.userinfo.split_once(':').map_or("", |(_, auth)| auth)
    }

    /// Checks whether any of userinfo, host or port is non-empty.
    #[must_use]
    pub fn has_authority(&self) -> bool {
        !(self.host.is_empty() && self.userinfo.is_empty() && self.port.is_empty())
    }

    /// Checks whether all seven components are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scheme.is_empty()
            && !self.has_authority()
            && self.path.is_empty()
            && self.query.is_empty()
            && self.fragment.is_empty()
    }

    /// Checks whether the scheme is empty.
    ///
    /// This is a relative reference in the terms of RFC 3986. See also
    /// [`is_relative_path`](Self::is_relative_path).
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.scheme.is_empty()
    }

    /// Checks whether this is a relative-path reference: one without
    /// scheme and authority whose path does not start with `'/'`.
    ///
    /// Joining such a reference merges its path with the base path
    /// instead of replacing it.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlparts::Url;
    ///
    /// assert!(Url::parse("path/").is_relative_path());
    /// assert!(Url::parse("?query").is_relative_path());
    /// assert!(!Url::parse("/path").is_relative_path());
    /// assert!(!Url::parse("//host").is_relative_path());
    /// assert!(!Url::parse("sc:path/").is_relative_path());
    /// ```
    #[must_use]
    pub fn is_relative_path(&self) -> bool {
        self.scheme.is_empty() && !self.has_authority() && !self.path.starts_with('/')
    }

    /// Checks whether the host is a dotted-decimal IPv4 address:
    /// four decimal parts, each less than 256.
    #[must_use]
    pub fn is_host_ipv4(&self) -> bool {
        let mut parts = 0;
        for part in self.host.split('.') {
            parts += 1;
            if parts > 4 || part.is_empty() || !table::DIGIT.validate(part.as_bytes()) {
                return false;
            }
            // Leading zeros are allowed and do not count.
            let digits = part.trim_start_matches('0');
            if digits.len() > 3 || digits.parse::<u16>().unwrap_or(0) > 255 {
                return false;
            }
        }
        parts == 4
    }

    /// Checks whether the host is an IPv4 address or an IP literal in brackets.
    ///
    /// The content of the brackets is not checked; see [`validate`](Self::validate).
    ///
    /// # Examples
    ///
    /// ```
    /// use urlparts::Url;
    ///
    /// assert!(Url::parse("//127.0.0.1").is_host_ip());
    /// assert!(Url::parse("//127.0.0.1").is_host_ipv4());
    /// assert!(Url::parse("//[127.0.0.1]").is_host_ip());
    /// assert!(!Url::parse("//[127.0.0.1]").is_host_ipv4());
    /// assert!(!Url::parse("//127.0.1").is_host_ip());
    /// ```
    #[must_use]
    pub fn is_host_ip(&self) -> bool {
        self.is_host_ipv4() || self.is_host_ip_literal()
    }

    pub(crate) fn is_host_ip_literal(&self) -> bool {
        self.host.len() >= 2 && self.host.starts_with('[') && self.host.ends_with(']')
    }
}
