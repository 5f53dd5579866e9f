use crate::pct_enc::table::{self, Table};

/// The seven components of a URL, borrowed from the input.
///
/// Scheme and host are not yet lowercased.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Parts<'a> {
    pub scheme: &'a str,
    pub userinfo: &'a str,
    pub host: &'a str,
    pub port: &'a str,
    pub path: &'a str,
    pub query: &'a str,
    pub fragment: &'a str,
}

/// Splits a URL string into its components.
///
/// This is a lexical partition, not a validation: it accepts any input.
pub(crate) fn split(s: &str) -> Parts<'_> {
    let mut reader = Reader::new(s);
    let mut out = Parts::default();

    // Only a conforming scheme followed by a colon is taken.
    // Anything else, such as `not_a_scheme:`, is left to the path.
    let name = reader.peek_until(table::GEN_DELIMS);
    if reader.peek_at(name.len()) == Some(b':') && is_scheme(name) {
        out.scheme = name;
        reader.skip(name.len() + 1);
    }

    if reader.read_str("//") {
        let authority = reader.read_until(table::AUTHORITY_END);
        (out.userinfo, out.host, out.port) = split_authority(authority);
    }

    (out.path, out.query, out.fragment) = split_full_path(reader.rest());

    // Undo the escape written before a path whose first segment has a colon.
    if out.scheme.is_empty() {
        if let Some(path) = out.path.strip_prefix("./") {
            if needs_dot_prefix(path) {
                out.path = path;
            }
        }
    }
    out
}

/// Checks whether a path written on its own, without scheme and authority,
/// must be prefixed with `"./"`.
///
/// This is the case when a colon ends a non-empty first segment, whether or
/// not the segment is a valid scheme name, and when the path already starts
/// with such an escape.
pub(crate) fn needs_dot_prefix(mut path: &str) -> bool {
    loop {
        if let Some(i) = path.find(':') {
            if i > 0 && !path[..i].contains('/') {
                return true;
            }
        }
        match path.strip_prefix("./") {
            Some(rest) => path = rest,
            None => return false,
        }
    }
}

/// Splits an authority into userinfo, host and port.
pub(crate) fn split_authority(authority: &str) -> (&str, &str, &str) {
    // Userinfo cannot contain '@', so the first one ends it.
    let (userinfo, host_port) = authority.split_once('@').unwrap_or(("", authority));

    // A host may contain colons and digits too, so the port is only split off
    // when everything after the last colon is a (possibly empty) digit run.
    // Otherwise the whole text stays in the host and fails validation later.
    if let Some((host, port)) = host_port.rsplit_once(':') {
        if table::DIGIT.validate(port.as_bytes()) {
            return (userinfo, host, port);
        }
    }
    (userinfo, host_port, "")
}

/// Splits a path with optional query and fragment.
pub(crate) fn split_full_path(s: &str) -> (&str, &str, &str) {
    let mut reader = Reader::new(s);
    let path = reader.read_until(table::PATH_END);
    let query = if reader.read_str("?") {
        reader.read_until(Table::new(b"#"))
    } else {
        ""
    };
    let fragment = if reader.read_str("#") {
        reader.rest()
    } else {
        ""
    };
    (path, query, fragment)
}

/// Checks whether the string matches `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
pub(crate) fn is_scheme(s: &str) -> bool {
    matches!(s.as_bytes(), [first, rem @ ..]
        if first.is_ascii_alphabetic() && table::SCHEME.validate(rem))
}

/// A cursor over the input.
///
/// # Invariants
///
/// `pos <= s.len()`, `pos` is non-decreasing and on a `char` boundary.
struct Reader<'a> {
    s: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(s: &'a str) -> Self {
        Reader { s, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.s[self.pos..]
    }

    fn peek_at(&self, i: usize) -> Option<u8> {
        self.s.as_bytes().get(self.pos + i).copied()
    }

    // Any call to this method must keep the invariants.
    fn skip(&mut self, n: usize) {
        self.pos += n;
        debug_assert!(self.s.is_char_boundary(self.pos));
    }

    /// Returns the text up to (excluding) the first byte in `table`, or the rest.
    fn peek_until(&self, table: Table) -> &'a str {
        let rest = self.rest();
        // INVARIANT: bytes in a table are ASCII, so the index is on a char boundary.
        let len = rest
            .bytes()
            .position(|x| table.contains(x))
            .unwrap_or(rest.len());
        &rest[..len]
    }

    fn read_until(&mut self, table: Table) -> &'a str {
        let s = self.peek_until(table);
        self.skip(s.len());
        s
    }

    fn read_str(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            self.skip(s.len());
            true
        } else {
            false
        }
    }
}
