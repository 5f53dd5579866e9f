use urlparts::{
    pct_enc::{decode_url, decode_url_component, Encoding, PctStr, UTF_8},
    Url,
};

#[test]
fn decode_url_utf8() {
    for (src, dst) in [
        ("какая-то строка", "какая-то строка"),
        ("%D1%85%D0%B0%D0%B1%D1%80", "хабр"),
        ("sch%3a%2f%2fhst%2fph", "sch%3a%2f%2fhst%2fph"),
        ("%25%25", "%%"),
        ("%25%2", "%%2"),
        ("%25%", "%%"),
        ("%2%25", "%2%"),
        ("%%25", "%%"),
        ("%2525", "%25"),
        ("%41%42c%2F%44", "ABc%2FD"),
        ("%zz%4", "%zz%4"),
    ] {
        assert_eq!(decode_url(src, UTF_8), dst, "{src}");
    }
}

#[test]
fn decode_url_legacy_encoding() {
    let cp1251 = Encoding::for_label(b"windows-1251").unwrap();
    assert_eq!(decode_url("%f5%e0%e1%f0ахабр", cp1251), "хабрахабр");

    // Malformed sequences are replaced, not rejected.
    assert_eq!(decode_url("%FF%FE", UTF_8), "\u{FFFD}\u{FFFD}");
}

#[test]
fn decode_url_component_reserved() {
    for (src, dst) in [
        ("какая-то строка", "какая-то строка"),
        ("sch%3a%2f%2fhst%2fph%3bpr", "sch://hst/ph;pr"),
        ("%a%2%2fhst%2fph%3b", "%a%2/hst/ph;"),
        ("%a%2%2fhst", "%a%2/hst"),
        ("%3a%3", ":%3"),
        ("%3a", ":"),
        ("%3A%2F%3F%23%5B%5D%40", ":/?#[]@"),
        ("%21%24%26%27%28%29%2A%2B%2C%3B%3D", "!$&'()*+,;="),
        ("%20", "%20"),
        ("%e2%8c%98", "%e2%8c%98"),
        ("%253a", "%253a"),
    ] {
        assert_eq!(decode_url_component(src, None), dst, "{src}");
    }
}

#[test]
fn decode_url_component_with_encoding() {
    assert_eq!(decode_url_component("%e2%8c%98%2F", Some(UTF_8)), "⌘/");
    assert_eq!(decode_url_component("%2525", Some(UTF_8)), "%25");
    assert_eq!(decode_url_component("%253a", Some(UTF_8)), "%3a");
}

#[test]
fn decode_component_idempotent() {
    for s in ["sch%3a%2f%2fhst%2fph%3bpr", "%a%2%2fhst", "%3a%3", "plain"] {
        let once = decode_url_component(s, None);
        assert_eq!(decode_url_component(&once, None), once);
    }
}

#[test]
fn decode_url_record() {
    for (enc, dec) in [
        (
            "http://%D0%BF%D1%8C%D0%B5%D1%80@local.com/%D0%B7%D0%B0%D0%BF%D0%B8%D1%81%D0%B8",
            "http://пьер@local.com/записи",
        ),
        ("/%2525", "/%25"),
    ] {
        let u = Url::parse(enc).decode();
        assert!(u.is_decoded());
        assert_eq!(u.to_string(), dec);
        assert_eq!(u.decode().to_string(), dec);
        assert_eq!(u.decode(), u);
        assert_ne!(u, Url::parse(dec));
        assert_eq!(u.replace(Url::builder()).unwrap(), Url::parse(dec));
    }
}

#[test]
fn decode_url_record_parts() {
    let u = Url::parse("sc://u%41@H%41:80/p%41%2F?q%41#f%41").decode();
    assert_eq!(
        [u.scheme(), u.userinfo(), u.host(), u.port(), u.path(), u.query(), u.fragment()],
        ["sc", "uA", "hA", "80", "/pA%2F", "qA", "fA"]
    );

    let cp1251 = Encoding::for_label(b"cp1251").unwrap();
    let u = Url::parse("/%f5%e0%e1%f0").decode_with(cp1251);
    assert_eq!(u.path(), "/хабр");
}

#[test]
fn pct_str() {
    let s = PctStr::new("a%2Fb%41");
    assert_eq!(s.as_str(), "a%2Fb%41");
    assert_eq!(s, "a%2Fb%41");
    assert_eq!(s.len(), 8);
    assert!(!s.is_empty());
    assert!(s.has_pct_encoded());
    assert_eq!(s.decode(UTF_8), "a%2FbA");
    assert_eq!(s.decode_component(None), "a/b%41");
    assert_eq!(s.decode_component(Some(UTF_8)), "a/bA");

    assert!(!PctStr::new("%4").has_pct_encoded());
    assert!(PctStr::EMPTY.is_empty());
    assert_eq!(<&PctStr>::default(), PctStr::EMPTY);
    assert_eq!(format!("{s}"), "a%2Fb%41");
    assert_eq!(format!("{s:?}"), r#""a%2Fb%41""#);
}
