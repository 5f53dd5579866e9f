#![cfg(feature = "std")]

use std::{
    sync::{Arc, Mutex},
    thread,
};
use urlparts::{
    cache::{ParseCache, DEFAULT_CAPACITY},
    Url,
};

#[test]
fn cache_hit_and_miss() {
    let mut cache = ParseCache::default();
    assert_eq!(cache.capacity(), DEFAULT_CAPACITY);
    assert!(cache.is_empty());

    let u = cache.get_or_parse("http://a/b").clone();
    assert_eq!(u, Url::parse("http://a/b"));
    assert_eq!(cache.get_or_parse("http://a/b"), &u);
    assert_eq!(cache.len(), 1);

    cache.get_or_parse("http://a/c");
    assert_eq!(cache.len(), 2);

    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn cache_clears_when_full() {
    let mut cache = ParseCache::new(3);
    for s in ["a", "b", "c"] {
        cache.get_or_parse(s);
    }
    assert_eq!(cache.len(), 3);

    // A hit does not clear.
    cache.get_or_parse("b");
    assert_eq!(cache.len(), 3);

    // A miss on a full cache clears everything first.
    assert_eq!(cache.get_or_parse("d"), &Url::parse("d"));
    assert_eq!(cache.len(), 1);

    let mut cache = ParseCache::new(0);
    assert_eq!(cache.capacity(), 1);
    cache.get_or_parse("a");
    cache.get_or_parse("b");
    assert_eq!(cache.len(), 1);
}

#[test]
fn cache_with_parser() {
    fn parse_decoded(s: &str) -> Url {
        Url::parse(s).decode()
    }

    let mut cache = ParseCache::with_parser(4, parse_decoded);
    let u = cache.get_or_parse("/%41");
    assert_eq!(u.path(), "/A");
    assert!(u.is_decoded());
}

#[test]
fn cache_shared() {
    let cache = Arc::new(Mutex::new(ParseCache::new(5)));
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..50 {
                    let s = format!("http://host{}/{}", t, i % 7);
                    let u = cache.lock().unwrap().get_or_parse(&s).clone();
                    assert_eq!(u, Url::parse(&s));
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    let cache = cache.lock().unwrap();
    assert!(!cache.is_empty());
    assert!(cache.len() <= cache.capacity());
}
