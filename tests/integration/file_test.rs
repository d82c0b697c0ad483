//! Integration tests for file endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_file_with_defaults() {
    let app = helpers::TestApp::new();
    let docs = app.create_folder("Documents", None).await;

    let response = app
        .request(
            "POST",
            "/api/v1/files",
            Some(json!({ "name": "notes.txt", "folderId": docs })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["size"], 0);
    assert!(response.data()["mimeType"].is_null());
    assert_eq!(response.data()["folderId"], docs.as_str());
}

#[tokio::test]
async fn test_create_file_errors() {
    let app = helpers::TestApp::new();
    let docs = app.create_folder("Documents", None).await;

    let missing_folder = app
        .request(
            "POST",
            "/api/v1/files",
            Some(json!({
                "name": "a.txt",
                "folderId": "00000000-0000-0000-0000-000000000001"
            })),
        )
        .await;
    assert_eq!(missing_folder.status, StatusCode::NOT_FOUND);

    let blank_name = app
        .request(
            "POST",
            "/api/v1/files",
            Some(json!({ "name": " ", "folderId": docs })),
        )
        .await;
    assert_eq!(blank_name.status, StatusCode::BAD_REQUEST);

    let negative = app
        .request(
            "POST",
            "/api/v1/files",
            Some(json!({ "name": "a.txt", "folderId": docs, "size": -1 })),
        )
        .await;
    assert_eq!(negative.status, StatusCode::BAD_REQUEST);

    let bad_folder_id = app
        .request(
            "POST",
            "/api/v1/files",
            Some(json!({ "name": "a.txt", "folderId": "nope" })),
        )
        .await;
    assert_eq!(bad_folder_id.status, StatusCode::BAD_REQUEST);

    assert_eq!(app.store.file_count().await, 0);
}

#[tokio::test]
async fn test_get_file() {
    let app = helpers::TestApp::new();
    let docs = app.create_folder("Documents", None).await;
    let response = app
        .request(
            "POST",
            "/api/v1/files",
            Some(json!({
                "name": "tes.pdf",
                "folderId": docs,
                "mimeType": "application/pdf",
                "size": 1024
            })),
        )
        .await;
    let id = response.id();

    let fetched = app.request("GET", &format!("/api/v1/files/{id}"), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.data()["name"], "tes.pdf");
    assert_eq!(fetched.data()["mimeType"], "application/pdf");
    assert_eq!(fetched.data()["size"], 1024);

    let malformed = app.request("GET", "/api/v1/files/xyz", None).await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rename_file() {
    let app = helpers::TestApp::new();
    let docs = app.create_folder("Documents", None).await;
    let id = app.create_file("draft.txt", &docs).await;

    let renamed = app
        .request(
            "PUT",
            &format!("/api/v1/files/{id}"),
            Some(json!({ "name": "final.txt" })),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.data()["name"], "final.txt");
    assert_eq!(renamed.data()["folderId"], docs.as_str());

    let blank = app
        .request(
            "PUT",
            &format!("/api/v1/files/{id}"),
            Some(json!({ "name": "" })),
        )
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);

    let missing = app
        .request(
            "PUT",
            "/api/v1/files/00000000-0000-0000-0000-000000000001",
            Some(json!({ "name": "x.txt" })),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_move_file() {
    let app = helpers::TestApp::new();
    let src = app.create_folder("src", None).await;
    let dst = app.create_folder("dst", None).await;
    let id = app.create_file("report.pdf", &src).await;

    let moved = app
        .request(
            "PUT",
            &format!("/api/v1/files/{id}/move"),
            Some(json!({ "targetFolderId": dst })),
        )
        .await;
    assert_eq!(moved.status, StatusCode::OK);
    assert_eq!(moved.data()["folderId"], dst.as_str());
    assert_eq!(moved.data()["name"], "report.pdf");

    let src_files = app
        .request("GET", &format!("/api/v1/folders/{src}/files"), None)
        .await;
    assert!(src_files.names().is_empty());

    let missing_target = app
        .request(
            "PUT",
            &format!("/api/v1/files/{id}/move"),
            Some(json!({ "targetFolderId": "00000000-0000-0000-0000-000000000001" })),
        )
        .await;
    assert_eq!(missing_target.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_file() {
    let app = helpers::TestApp::new();
    let docs = app.create_folder("Documents", None).await;
    let id = app.create_file("a.txt", &docs).await;

    let deleted = app
        .request("DELETE", &format!("/api/v1/files/{id}"), None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let again = app
        .request("DELETE", &format!("/api/v1/files/{id}"), None)
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_folder_files_direct_and_recursive() {
    let app = helpers::TestApp::new();
    let root = app.create_folder("root", None).await;
    let child = app.create_folder("child", Some(&root)).await;
    let grandchild = app.create_folder("grandchild", Some(&child)).await;
    app.create_file("top.txt", &root).await;
    app.create_file("middle.txt", &child).await;
    app.create_file("bottom.txt", &grandchild).await;

    let direct = app
        .request("GET", &format!("/api/v1/folders/{root}/files"), None)
        .await;
    assert_eq!(direct.status, StatusCode::OK);
    assert_eq!(direct.names(), vec!["top.txt"]);

    let recursive = app
        .request(
            "GET",
            &format!("/api/v1/folders/{root}/files?recursive=true"),
            None,
        )
        .await;
    assert_eq!(
        recursive.names(),
        vec!["bottom.txt", "middle.txt", "top.txt"]
    );

    let from_child = app
        .request(
            "GET",
            &format!("/api/v1/folders/{child}/files?recursive=true"),
            None,
        )
        .await;
    assert_eq!(from_child.names(), vec!["bottom.txt", "middle.txt"]);
}
