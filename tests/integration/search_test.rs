//! Integration tests for combined folder/file search.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_search_matches_folders_and_files() {
    let app = helpers::TestApp::new();
    let reports = app.create_folder("Reports", None).await;
    app.create_folder("Pictures", None).await;
    app.create_file("annual-report.pdf", &reports).await;
    app.create_file("photo.jpg", &reports).await;

    let response = app
        .request("GET", "/api/v1/folders/search?q=REPORT", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let folders = response.data()["folders"].as_array().expect("folders");
    let files = response.data()["files"].as_array().expect("files");
    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0]["name"], "Reports");
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["name"], "annual-report.pdf");
}

#[tokio::test]
async fn test_blank_search_returns_empty_without_store_calls() {
    let app = helpers::TestApp::new();

    for path in [
        "/api/v1/folders/search",
        "/api/v1/folders/search?q=",
        "/api/v1/folders/search?q=%20%20",
    ] {
        let response = app.request("GET", path, None).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.data()["folders"], serde_json::json!([]));
        assert_eq!(response.data()["files"], serde_json::json!([]));
    }

    assert_eq!(app.store.call_count(), 0);
}

#[tokio::test]
async fn test_search_wildcards_are_literal() {
    let app = helpers::TestApp::new();
    app.create_folder("100% done", None).await;
    app.create_folder("plain", None).await;

    let response = app
        .request("GET", "/api/v1/folders/search?q=%25", None)
        .await;
    let folders = response.data()["folders"].as_array().expect("folders");
    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0]["name"], "100% done");
}

#[tokio::test]
async fn test_search_files_newest_first() {
    let app = helpers::TestApp::new();
    let docs = app.create_folder("Docs", None).await;
    app.create_file("notes-1.md", &docs).await;
    app.create_file("notes-2.md", &docs).await;

    let response = app
        .request("GET", "/api/v1/folders/search?q=notes", None)
        .await;
    let names: Vec<&str> = response.data()["files"]
        .as_array()
        .expect("files")
        .iter()
        .filter_map(|f| f["name"].as_str())
        .collect();
    assert_eq!(names, vec!["notes-2.md", "notes-1.md"]);
}
