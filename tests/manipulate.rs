use urlparts::{BuildError, Builder, Url};

fn components(u: &Url) -> [&str; 7] {
    [
        u.scheme(),
        u.userinfo(),
        u.host(),
        u.port(),
        u.path(),
        u.query(),
        u.fragment(),
    ]
}

/// Sets the `idx`-th component.
fn set(b: Builder, idx: usize, value: &str) -> Builder {
    match idx {
        0 => b.scheme(value),
        1 => b.userinfo(value),
        2 => b.host(value),
        3 => b.port(value),
        4 => b.path(value),
        5 => b.query(value),
        6 => b.fragment(value),
        _ => unreachable!(),
    }
}

fn all(c: [&str; 7]) -> Builder {
    (0..7).fold(Url::builder(), |b, i| set(b, i, c[i]))
}

#[test]
fn fixes() {
    // Port conversion.
    let port = Url::builder().port("80").build().unwrap();
    assert_eq!(Url::builder().port(80).build().unwrap(), port);
    assert_eq!(Url::default().replace(Url::builder().port(80)).unwrap(), port);
    assert_eq!(Url::default().setdefault(Url::builder().port(80)).unwrap(), port);
    assert_eq!(Url::builder().port(String::from("80")).build().unwrap(), port);

    // Scheme and host are lowercased.
    let u = Url::builder().scheme("scheme").host("host").build().unwrap();
    assert_eq!(Url::builder().scheme("SCHEME").host("HOST").build().unwrap(), u);
    let b = || Url::builder().scheme("SCHEME").host("HOST");
    assert_eq!(Url::default().replace(b()).unwrap(), u);
    assert_eq!(Url::default().setdefault(b()).unwrap(), u);
    assert_eq!(Url::default().replace_from(&Url::parse("SCHEME://HOST")), u);

    // Relative path without authority is kept.
    let path = |u: Result<Url, BuildError>| u.unwrap().path().to_owned();
    assert_eq!(path(Url::builder().path("rel").build()), "rel");
    assert_eq!(path(Url::default().replace(Url::builder().path("rel"))), "rel");
    assert_eq!(path(Url::default().setdefault(Url::builder().path("rel"))), "rel");

    // Relative path with authority gets a slash.
    let host = Url::builder().host("host").build().unwrap();
    let rel = Url::builder().path("rel").build().unwrap();
    assert_eq!(path(Url::builder().host("host").path("rel").build()), "/rel");
    assert_eq!(path(host.replace(Url::builder().path("rel"))), "/rel");
    assert_eq!(path(rel.replace(Url::builder().host("host"))), "/rel");
    assert_eq!(path(host.setdefault(Url::builder().path("rel"))), "/rel");
    assert_eq!(path(rel.setdefault(Url::builder().host("host"))), "/rel");
    assert_eq!(path(Url::builder().userinfo("u").path("rel").build()), "/rel");
    assert_eq!(path(Url::builder().port(1).path("rel").build()), "/rel");
    assert_eq!(rel.replace_from(&host).path(), "/rel");

    // The first segment may contain a colon.
    let u = Url::builder().path("re:at").build().unwrap();
    assert_eq!(u.path(), "re:at");
    assert_eq!(u.to_string(), "./re:at");
    let u = u.replace(Url::builder().scheme("sc")).unwrap();
    assert_eq!(u.to_string(), "sc:re:at");
    let u = Url::builder().path("re:at").build().unwrap();
    let u = u.replace(Url::builder().host("ho")).unwrap();
    assert_eq!(u.path(), "/re:at");
    assert_eq!(u.to_string(), "//ho/re:at");
}

#[test]
fn replace() {
    for u in [
        Url::parse("htttp://user@google.com:8080/path?query#fragment"),
        Url::default(),
        Url::parse("path"),
        Url::parse("//host:80"),
    ] {
        assert_eq!(u.replace(Url::builder()).unwrap(), u);
        let c = components(&u);
        for idx in 0..7 {
            // Replace with the same value.
            assert_eq!(u.replace(set(Url::builder(), idx, c[idx])).unwrap(), u);
            // Clear.
            let cleared = u.replace(set(Url::builder(), idx, "")).unwrap();
            assert_eq!(components(&cleared)[idx], "");
            // Replace with another value.
            let other = u.replace(set(Url::builder(), idx, "an")).unwrap();
            if u.has_authority() && idx == 4 {
                assert_eq!(components(&other)[idx], "/an");
            } else {
                assert_eq!(components(&other)[idx], "an");
            }
        }
    }

    let u = Url::default()
        .replace(all(["SCHEME", "AUTH", "HOST", "30", "/PATH", "", ""]))
        .unwrap();
    assert_eq!(components(&u), ["scheme", "AUTH", "host", "30", "/PATH", "", ""]);
}

#[test]
fn replace_authority() {
    for (u, authority) in [
        (Url::parse("a://b:c@d:5/f?g#h"), "blah"),
        (Url::parse("a://blah/f?g#h"), ""),
        (Url::parse("a:/f"), "u@[::1]:8"),
    ] {
        let orig = u.authority();
        let u = u.replace(Url::builder().authority(authority)).unwrap();
        assert_eq!(u.authority(), authority);
        let u = u.replace(Url::builder().authority(&orig)).unwrap();
        assert_eq!(u.authority(), orig);
    }

    // Only the authority part of the string is used.
    let u = Url::default()
        .replace(Url::builder().authority("host:1/path?q"))
        .unwrap();
    assert_eq!(u.to_string(), "//host:1");
}

#[test]
fn replace_full_path() {
    for (u, full_path) in [
        (Url::parse("a://b:c@d:5/f?g#h"), ""),
        (Url::parse("a://b:c@d:5/f?g#h"), "/path"),
        (Url::parse("a://b:c@d:5/f?g#h"), "/path?qr"),
        (Url::parse("a://b:c@d:5/f?g#h"), "?qr"),
        (Url::parse("a://b:c@d:5/f?g#h"), "?qr#fr"),
        (Url::parse("a://b:c@d:5/f?g#h"), "#fr"),
        (Url::parse("a://b:c@d:5"), "/path"),
        (Url::parse("a:"), "x:y?z"),
    ] {
        let orig = u.full_path();
        let u = u.replace(Url::builder().full_path(full_path)).unwrap();
        assert_eq!(u.full_path(), full_path);
        let u = u.replace(Url::builder().full_path(&orig)).unwrap();
        assert_eq!(u.full_path(), orig);
    }
}

#[test]
fn conflicts() {
    let u = Url::parse("a://b");

    for idx in 1..4 {
        let b = set(Url::builder().authority("c"), idx, "other");
        assert_eq!(u.replace(b.clone()), Err(BuildError::AuthorityConflict));
        assert_eq!(u.setdefault(b.clone()), Err(BuildError::AuthorityConflict));
        assert_eq!(b.build(), Err(BuildError::AuthorityConflict));
    }
    for idx in 4..7 {
        let b = set(Url::builder().full_path("c?d#e"), idx, "other");
        assert_eq!(u.replace(b.clone()), Err(BuildError::FullPathConflict));
        assert_eq!(u.setdefault(b.clone()), Err(BuildError::FullPathConflict));
        assert_eq!(b.build(), Err(BuildError::FullPathConflict));
    }

    // The empty string counts as set.
    let b = Url::builder().full_path("c?d#e").fragment("");
    assert_eq!(u.replace(b), Err(BuildError::FullPathConflict));
    let b = Url::builder().authority("").host("");
    assert_eq!(u.replace(b), Err(BuildError::AuthorityConflict));

    // Composites alone are fine together with the scheme.
    let b = Url::builder().scheme("s").authority("h").full_path("/p");
    assert_eq!(b.build().unwrap().to_string(), "s://h/p");

    assert_eq!(
        BuildError::AuthorityConflict.to_string(),
        "authority should not be set together with userinfo, host or port"
    );
}

#[test]
fn replace_from() {
    let full = Url::parse("scheme://user@host:80/path?query#frgment");
    for s in ["an://oth@er:33/full?url#!!", "/simple/path", "scm:", ""] {
        assert_eq!(Url::parse(s).replace_from(&full), full);
    }

    assert_eq!(full.replace_from(&Url::parse("scm:")).scheme(), "scm");
    assert_eq!(full.replace_from(&Url::parse("//hst")).host(), "hst");
    assert_eq!(full.replace_from(&Url::parse("/pth")).path(), "/pth");
    assert_eq!(full.replace_from(&Url::default()), full);
}

#[test]
fn setdefault() {
    let empty = Url::default();
    let full1 = Url::parse("scheme://user@host:80/path?query#frgment");
    let full2 = Url::parse("an://oth@er:33/full?url#!!");

    assert_eq!(empty.setdefault(all(components(&full1))).unwrap(), full1);
    assert_eq!(full1.setdefault(all(components(&full2))).unwrap(), full1);

    let c1 = components(&full1);
    let c2 = components(&full2);
    for idx in 0..7 {
        let b = || set(Url::builder(), idx, c1[idx]);
        assert_eq!(empty.setdefault(b()).unwrap(), empty.replace(b()).unwrap());
        assert_eq!(components(&empty.setdefault(b()).unwrap())[idx], c1[idx]);
        assert_eq!(components(&full2.setdefault(b()).unwrap())[idx], c2[idx]);
    }

    let u = Url::parse("//host")
        .setdefault(Url::builder().authority("user@other:8").full_path("/p?q"))
        .unwrap();
    assert_eq!(u.to_string(), "//user@host:8/p?q");
}

#[test]
fn manipulation_clears_decoded() {
    let u = Url::parse("/%41").decode();
    assert!(u.is_decoded());
    assert!(!u.replace(Url::builder()).unwrap().is_decoded());
    assert!(!u.setdefault(Url::builder()).unwrap().is_decoded());
    assert!(!u.replace_from(&Url::default()).is_decoded());
}
