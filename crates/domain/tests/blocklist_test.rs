use ferrous_sinkhole_domain::blocklist::{is_blocked, Blocklist};

fn blocklist() -> Blocklist {
    Blocklist::new(["example.com", "ads.badsite.net"])
}

#[test]
fn test_exact_match_is_blocked() {
    let list = blocklist();
    assert!(list.is_blocked("example.com"));
    assert!(list.is_blocked("ads.badsite.net"));
    assert!(!list.is_blocked("google.com"));
}

#[test]
fn test_match_is_case_insensitive() {
    let list = blocklist();
    assert_eq!(list.is_blocked("Example.COM"), list.is_blocked("example.com"));
    assert!(list.is_blocked("EXAMPLE.COM"));

    let upper = Blocklist::new(["Ads.BadSite.NET"]);
    assert!(upper.is_blocked("ads.badsite.net"));
}

#[test]
fn test_no_suffix_or_wildcard_matching() {
    let list = blocklist();
    assert!(!list.is_blocked("www.example.com"));
    assert!(!list.is_blocked("badsite.net"));
    assert!(!list.is_blocked("example.com."));
    assert!(!list.is_blocked("xample.com"));
}

#[test]
fn test_empty_name_never_blocked() {
    assert!(!blocklist().is_blocked(""));
    assert!(!Blocklist::default().is_blocked("example.com"));
}

#[test]
fn test_entries_keep_order_and_spelling() {
    let list = Blocklist::new([" Tracker.IO ", "", "example.com"]);
    let entries: Vec<&str> = list.entries().collect();
    assert_eq!(entries, vec!["Tracker.IO", "example.com"]);
    assert_eq!(list.len(), 2);
    assert!(!list.is_empty());
}

#[test]
fn test_linear_scan_agrees_with_index() {
    let entries = vec!["example.com".to_string(), "Ads.BadSite.net".to_string()];
    let list = Blocklist::new(&entries);

    for name in [
        "example.com",
        "EXAMPLE.com",
        "ads.badsite.NET",
        "notblocked.org",
        "www.example.com",
    ] {
        assert_eq!(is_blocked(name, &entries), list.is_blocked(name), "{}", name);
    }
}
