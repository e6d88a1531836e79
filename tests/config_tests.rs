use auction_services::config::Settings;
use std::collections::HashMap;
use std::path::PathBuf;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let values: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| values.get(key).cloned()
}

#[test]
fn defaults_apply_when_nothing_is_set() {
    assert_eq!(Settings::from_lookup(lookup(&[])), Settings::default());
}

#[test]
fn environment_overrides_defaults() {
    let settings = Settings::from_lookup(lookup(&[
        ("AUCTIONS_FILE", "/var/lib/auctions/open.json"),
        ("PAYMENTS_FILE", "/var/lib/auctions/payments.jsonl"),
        ("RUST_LOG", "debug"),
    ]));

    assert_eq!(settings.auctions_path, PathBuf::from("/var/lib/auctions/open.json"));
    assert_eq!(settings.payments_path, PathBuf::from("/var/lib/auctions/payments.jsonl"));
    assert_eq!(settings.log_filter, "debug");
}

#[test]
fn blank_values_are_ignored() {
    let settings = Settings::from_lookup(lookup(&[("AUCTIONS_FILE", "  "), ("RUST_LOG", "")]));

    assert_eq!(settings, Settings::default());
}
