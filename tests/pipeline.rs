use changelog_scan::fetch::FirecrawlFetcher;
use changelog_scan::pipeline::run;
use mockito::Server;
use serde_json::json;
use tempfile::TempDir;

const CHANGELOG: &str = "\
### Patches

0.45.1: Reduced memory usage during indexing - 0.45.2: Reduced memory usage during indexing

UPDATE (0.44.1 - 0.44.2): Hardened extension host restarts
";

#[tokio::test]
async fn run_writes_consolidated_csv() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/scrape")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"data": {"markdown": CHANGELOG}}).to_string())
        .create_async()
        .await;

    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("patches.csv");

    let fetcher = FirecrawlFetcher::with_base_url(&server.url(), "test-key");
    run(&fetcher, "https://example.com/changelog", &output)
        .await
        .unwrap();

    mock.assert_async().await;

    let contents = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Version,Description",
            "0.45.1-0.45.2,Reduced memory usage during indexing",
            "0.44.1-0.44.2,Hardened extension host restarts",
        ]
    );
}

#[tokio::test]
async fn run_fails_on_an_empty_document() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/scrape")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": {"markdown": ""}}"#)
        .create_async()
        .await;

    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("patches.csv");

    let fetcher = FirecrawlFetcher::with_base_url(&server.url(), "test-key");
    let result = run(&fetcher, "https://example.com/changelog", &output).await;

    mock.assert_async().await;
    assert!(result.is_err());
    assert!(!output.exists());
}

#[tokio::test]
async fn run_skips_csv_output_when_nothing_was_found() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/scrape")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": {"markdown": "Release notes without any versions."}}"#)
        .create_async()
        .await;

    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("patches.csv");

    let fetcher = FirecrawlFetcher::with_base_url(&server.url(), "test-key");
    run(&fetcher, "https://example.com/changelog", &output)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(!output.exists());
}
