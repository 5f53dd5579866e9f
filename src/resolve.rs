//! Module for reference resolution.

use crate::{parse::Parts, Url};
use alloc::{string::String, vec::Vec};
use core::ops::Add;

impl Url {
    /// Resolves a reference against this URL as the base.
    ///
    /// This follows the algorithm in
    /// [Section 5.2.2 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.2)
    /// with path merging done by plain concatenation and [`remove_dot_segments`]:
    ///
    /// - If the reference has a scheme, it is taken as a whole.
    /// - Otherwise the scheme of the base is taken. If the reference has an
    ///   authority, everything else is taken from the reference.
    /// - Otherwise the authority of the base is taken. An empty reference path
    ///   takes the path of the base, and also its query when the reference
    ///   query is empty. An absolute reference path is taken as is. A relative
    ///   one is appended to the base path up to and including its last `'/'`.
    /// - The fragment is always taken from the reference.
    ///
    /// Dot segments are removed from the resulting path in every case.
    ///
    /// Since a `Url` does not tell an empty component from an absent one,
    /// an empty query or fragment of the reference does not override the base.
    /// For example, resolving `"?"` against `"http://a/b?q"` gives `"http://a/b?q"`
    /// where RFC 3986 gives `"http://a/b?"`. The same goes for an empty authority.
    ///
    /// The operator `+` is an alias of this method.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlparts::Url;
    ///
    /// let base = Url::parse("http://example.com/foo/bar");
    ///
    /// assert_eq!(base.join(&Url::parse("baz")).to_string(), "http://example.com/foo/baz");
    /// assert_eq!(base.join(&Url::parse("../baz")).to_string(), "http://example.com/baz");
    /// assert_eq!(base.join(&Url::parse("?baz")).to_string(), "http://example.com/foo/bar?baz");
    /// assert_eq!((&base + &Url::parse("//h")).to_string(), "http://h");
    /// ```
    #[must_use]
    pub fn join(&self, reference: &Url) -> Url {
        let r = reference.as_parts();
        let mut t = r;

        if r.scheme.is_empty() {
            t.scheme = &self.scheme;

            if !reference.has_authority() {
                t.userinfo = &self.userinfo;
                t.host = &self.host;
                t.port = &self.port;

                if r.path.is_empty() {
                    t.path = &self.path;
                    if r.query.is_empty() {
                        t.query = &self.query;
                    }
                } else if !r.path.starts_with('/') {
                    let base_dir = self.path.rfind('/').map_or("", |i| &self.path[..=i]);
                    let mut merged = String::with_capacity(base_dir.len() + r.path.len());
                    merged.push_str(base_dir);
                    merged.push_str(r.path);
                    return finish(t, &merged);
                }
            }
        }

        finish(t, t.path)
    }
}

fn finish(t: Parts<'_>, path: &str) -> Url {
    let path = remove_dot_segments(path);
    Url::from_parts(Parts { path: &path, ..t })
}

impl Add<&Url> for &Url {
    type Output = Url;

    /// Equivalent to [`Url::join`].
    fn add(self, reference: &Url) -> Url {
        self.join(reference)
    }
}

impl Add<&Url> for Url {
    type Output = Url;

    /// Equivalent to [`Url::join`].
    fn add(self, reference: &Url) -> Url {
        self.join(reference)
    }
}

impl Add<Url> for Url {
    type Output = Url;

    /// Equivalent to [`Url::join`].
    fn add(self, reference: Url) -> Url {
        self.join(&reference)
    }
}

enum SegKind {
    Dot,
    DoubleDot,
    Normal,
}

fn classify_segment(seg: &str) -> SegKind {
    match seg {
        "." => SegKind::Dot,
        ".." => SegKind::DoubleDot,
        _ => SegKind::Normal,
    }
}

/// Removes the `"."` and `".."` segments from a path.
///
/// A `".."` segment removes the segment before it, if any. It never removes
/// the root of an absolute path, so excess `".."` segments are ignored
/// instead of being reported, and an absolute path stays absolute:
/// `"/.."` gives `"/"` rather than `""`, as in
/// [Section 5.2.4 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.4).
/// A path ending with `"/."` or `"/.."` keeps its trailing slash.
/// Percent-encoded dots are not recognized.
///
/// # Examples
///
/// ```
/// use urlparts::resolve::remove_dot_segments;
///
/// assert_eq!(remove_dot_segments("/a/b/c/./../../g"), "/a/g");
/// assert_eq!(remove_dot_segments("mid/content=5/../6"), "mid/6");
/// assert_eq!(remove_dot_segments("/b/c/.."), "/b/");
/// assert_eq!(remove_dot_segments("/../../g"), "/g");
/// assert_eq!(remove_dot_segments("/.."), "/");
/// assert_eq!(remove_dot_segments("a//b/./c"), "a//b/c");
/// ```
#[must_use]
pub fn remove_dot_segments(path: &str) -> String {
    // The leading empty segment of an absolute path is the root.
    let floor = usize::from(path.starts_with('/'));
    let mut stack: Vec<&str> = Vec::new();

    for seg in path.split('/') {
        match classify_segment(seg) {
            SegKind::Dot => {}
            SegKind::DoubleDot => {
                if stack.len() > floor {
                    stack.pop();
                }
            }
            SegKind::Normal => stack.push(seg),
        }
    }
    if path.ends_with("/.") || path.ends_with("/..") {
        stack.push("");
    }

    stack.join("/")
}
