use changelog_scan::consolidate::{consolidate, latest_patch};
use changelog_scan::extract::{ExtractError, Extractor};

const CHANGELOG: &str = "\
# Changelog

## 0.48.x

0.48.x
Agent planning improvements for long running tasks

### Patches

0.48.1: Fixed crash when opening large files - 0.48.2: Fixed crash when opening large files - 0.48.3: Improved tab completion latency

UPDATE (0.47.1 - 0.47.3): Stability fixes for remote workspaces

0.46.5: Resolved login loop on corporate proxies
";

#[test]
fn full_document_extraction_covers_every_idiom() {
    let table = Extractor::new().extract(CHANGELOG).unwrap();

    assert_eq!(table.get("0.48.x"), Some("Agent planning improvements for long running tasks"));
    assert_eq!(table.get("0.48.1"), Some("Fixed crash when opening large files"));
    assert_eq!(table.get("0.48.2"), Some("Fixed crash when opening large files"));
    assert_eq!(table.get("0.48.3"), Some("Improved tab completion latency"));
    for version in ["0.47.1", "0.47.2", "0.47.3"] {
        assert_eq!(
            table.get(version),
            Some("Stability fixes for remote workspaces"),
            "missing range expansion for {version}"
        );
    }
    assert_eq!(table.get("0.46.5"), Some("Resolved login loop on corporate proxies"));
}

#[test]
fn consolidation_orders_records_newest_first() {
    let table = Extractor::new().extract(CHANGELOG).unwrap();
    let records = consolidate(&table);

    let rows: Vec<(String, String)> = records
        .iter()
        .map(|r| (r.range.to_string(), r.description.clone()))
        .collect();

    assert_eq!(
        rows,
        vec![
            (
                "0.48.x".to_string(),
                "Agent planning improvements for long running tasks".to_string()
            ),
            (
                "0.48.3".to_string(),
                "Improved tab completion latency".to_string()
            ),
            (
                "0.48.1-0.48.2".to_string(),
                "Fixed crash when opening large files".to_string()
            ),
            (
                "0.47.1-0.47.3".to_string(),
                "Stability fixes for remote workspaces".to_string()
            ),
            (
                "0.46.5".to_string(),
                "Resolved login loop on corporate proxies".to_string()
            ),
        ]
    );
}

#[test]
fn latest_patch_skips_the_wildcard_header() {
    let table = Extractor::new().extract(CHANGELOG).unwrap();
    let records = consolidate(&table);

    assert_eq!(
        latest_patch(&records).as_deref(),
        Some("0.48.3 - Improved tab completion latency")
    );
}

#[test]
fn empty_document_is_reported_not_crashed() {
    let result = Extractor::new().extract("");

    assert!(matches!(result, Err(ExtractError::EmptyInput)));
    assert_eq!(latest_patch(&[]), None);
}

#[test]
fn document_without_version_mentions_yields_no_records() {
    let table = Extractor::new()
        .extract("Just prose about releases, no numbers that fit.")
        .unwrap();

    assert!(table.is_empty());
    assert!(consolidate(&table).is_empty());
}
