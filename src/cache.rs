//! A bounded cache of parsed URLs.

use crate::Url;
use std::{collections::HashMap, fmt};

/// The capacity of a [`ParseCache`] created with [`Default`].
pub const DEFAULT_CAPACITY: usize = 20;

/// A bounded map from input strings to their parsed [`Url`]s.
///
/// When the cache is full, it is cleared entirely before the next entry is
/// inserted. There is no per-entry eviction.
///
/// Lookups take `&mut self`. To share a cache between threads, wrap it in a
/// [`Mutex`](std::sync::Mutex) so that the size check, the clear and the
/// insertion happen under one lock.
///
/// # Examples
///
/// ```
/// use urlparts::{cache::ParseCache, Url};
///
/// let mut cache = ParseCache::new(2);
/// assert_eq!(cache.get_or_parse("http://a/"), &Url::parse("http://a/"));
/// cache.get_or_parse("http://b/");
/// assert_eq!(cache.len(), 2);
///
/// // Full: cleared before inserting.
/// cache.get_or_parse("http://c/");
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Clone)]
pub struct ParseCache {
    map: HashMap<String, Url>,
    capacity: usize,
    parser: fn(&str) -> Url,
}

impl fmt::Debug for ParseCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseCache")
            .field("map", &self.map)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl Default for ParseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ParseCache {
    /// Creates an empty cache holding up to `capacity` entries, parsing
    /// with [`Url::parse`].
    ///
    /// A capacity of zero is treated as one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_parser(capacity, Url::parse)
    }

    /// Creates an empty cache that stores the results of `parser`.
    ///
    /// A capacity of zero is treated as one.
    #[must_use]
    pub fn with_parser(capacity: usize, parser: fn(&str) -> Url) -> Self {
        let capacity = capacity.max(1);
        Self {
            map: HashMap::with_capacity(capacity),
            capacity,
            parser,
        }
    }

    /// Returns the cached `Url` for `s`, parsing and storing it on a miss.
    pub fn get_or_parse(&mut self, s: &str) -> &Url {
        if !self.map.contains_key(s) {
            if self.map.len() >= self.capacity {
                debug!("parse cache full at {} entries, clearing", self.map.len());
                self.map.clear();
            }
            trace!("parse cache miss: {s:?}");
            self.map.insert(s.into(), (self.parser)(s));
        }
        &self.map[s]
    }

    /// Returns the number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Checks whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the maximum number of entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}
