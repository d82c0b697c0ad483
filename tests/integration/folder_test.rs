//! Integration tests for folder endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_banner_and_health() {
    let app = helpers::TestApp::new();

    let banner = app.request("GET", "/", None).await;
    assert_eq!(banner.status, StatusCode::OK);
    assert_eq!(banner.body["message"], "Backend is running");

    let health = app.request("GET", "/api/health", None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.data()["status"], "ok");
    assert_eq!(health.data()["database"], "connected");
}

#[tokio::test]
async fn test_create_and_get_folder() {
    let app = helpers::TestApp::new();
    let id = app.create_folder("Docs", None).await;

    let response = app.request("GET", &format!("/api/v1/folders/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.data()["name"], "Docs");
    assert!(response.data()["parentId"].is_null());
    assert!(response.data()["createdAt"].is_string());
}

#[tokio::test]
async fn test_empty_parent_id_creates_root() {
    let app = helpers::TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/v1/folders",
            Some(json!({ "name": "Root", "parentId": "" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data()["parentId"].is_null());
}

#[tokio::test]
async fn test_create_folder_validation_errors() {
    let app = helpers::TestApp::new();

    let blank = app
        .request("POST", "/api/v1/folders", Some(json!({ "name": "   " })))
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
    assert_eq!(blank.body["error"], "VALIDATION_ERROR");

    let missing_name = app
        .request("POST", "/api/v1/folders", Some(json!({})))
        .await;
    assert_eq!(missing_name.status, StatusCode::BAD_REQUEST);

    let bad_parent = app
        .request(
            "POST",
            "/api/v1/folders",
            Some(json!({ "name": "x", "parentId": "not-a-uuid" })),
        )
        .await;
    assert_eq!(bad_parent.status, StatusCode::BAD_REQUEST);

    let malformed = app.request_raw("POST", "/api/v1/folders", "{name:").await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);

    assert_eq!(app.store.folder_count().await, 0);
}

#[tokio::test]
async fn test_create_under_missing_parent_is_404() {
    let app = helpers::TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/v1/folders",
            Some(json!({
                "name": "Orphan",
                "parentId": "00000000-0000-0000-0000-000000000001"
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_folder_errors() {
    let app = helpers::TestApp::new();

    let malformed = app.request("GET", "/api/v1/folders/abc", None).await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);

    let missing = app
        .request(
            "GET",
            "/api/v1/folders/00000000-0000-0000-0000-000000000001",
            None,
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_roots_and_children() {
    let app = helpers::TestApp::new();
    let pictures = app.create_folder("Pictures", None).await;
    let docs = app.create_folder("Documents", None).await;
    app.create_folder("Work", Some(&docs)).await;
    app.create_folder("Personal", Some(&docs)).await;

    let roots = app.request("GET", "/api/v1/folders", None).await;
    assert_eq!(roots.status, StatusCode::OK);
    assert_eq!(roots.names(), vec!["Documents", "Pictures"]);

    let children = app
        .request("GET", &format!("/api/v1/folders/{docs}/children"), None)
        .await;
    assert_eq!(children.names(), vec!["Personal", "Work"]);

    let empty = app
        .request("GET", &format!("/api/v1/folders/{pictures}/children"), None)
        .await;
    assert_eq!(empty.status, StatusCode::OK);
    assert!(empty.names().is_empty());
}

#[tokio::test]
async fn test_tree_nests_descendants() {
    let app = helpers::TestApp::new();
    let one = app.create_folder("1", None).await;
    let two = app.create_folder("2", Some(&one)).await;
    app.create_folder("3", Some(&two)).await;

    let response = app.request("GET", "/api/v1/folders/tree", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let forest = response.data().as_array().expect("array");
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0]["name"], "1");
    assert_eq!(forest[0]["children"][0]["name"], "2");
    assert_eq!(forest[0]["children"][0]["children"][0]["name"], "3");
    assert_eq!(
        forest[0]["children"][0]["children"][0]["children"],
        json!([])
    );
}

#[tokio::test]
async fn test_rename_and_move_folder() {
    let app = helpers::TestApp::new();
    let a = app.create_folder("a", None).await;
    let b = app.create_folder("b", None).await;

    let renamed = app
        .request(
            "PUT",
            &format!("/api/v1/folders/{b}"),
            Some(json!({ "name": "bee" })),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.data()["name"], "bee");
    assert!(renamed.data()["parentId"].is_null());

    let moved = app
        .request(
            "PUT",
            &format!("/api/v1/folders/{b}"),
            Some(json!({ "parentId": a })),
        )
        .await;
    assert_eq!(moved.status, StatusCode::OK);
    assert_eq!(moved.data()["parentId"], a.as_str());
    assert_eq!(moved.data()["name"], "bee");

    let to_root = app
        .request(
            "PUT",
            &format!("/api/v1/folders/{b}"),
            Some(json!({ "parentId": null })),
        )
        .await;
    assert_eq!(to_root.status, StatusCode::OK);
    assert!(to_root.data()["parentId"].is_null());
}

#[tokio::test]
async fn test_cycle_prevention() {
    let app = helpers::TestApp::new();
    let a = app.create_folder("a", None).await;
    let b = app.create_folder("b", Some(&a)).await;
    let c = app.create_folder("c", Some(&b)).await;

    let own_parent = app
        .request(
            "PUT",
            &format!("/api/v1/folders/{a}"),
            Some(json!({ "parentId": a })),
        )
        .await;
    assert_eq!(own_parent.status, StatusCode::BAD_REQUEST);

    let into_grandchild = app
        .request(
            "PUT",
            &format!("/api/v1/folders/{a}"),
            Some(json!({ "parentId": c })),
        )
        .await;
    assert_eq!(into_grandchild.status, StatusCode::BAD_REQUEST);
    assert!(
        into_grandchild.body["message"]
            .as_str()
            .unwrap_or_default()
            .contains("descendant")
    );

    let missing_target = app
        .request(
            "PUT",
            &format!("/api/v1/folders/{a}"),
            Some(json!({ "parentId": "00000000-0000-0000-0000-000000000001" })),
        )
        .await;
    assert_eq!(missing_target.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_missing_folder_is_404() {
    let app = helpers::TestApp::new();
    let response = app
        .request(
            "PUT",
            "/api/v1/folders/00000000-0000-0000-0000-000000000001",
            Some(json!({ "name": "x" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_folder_cascades() {
    let app = helpers::TestApp::new();
    let root = app.create_folder("root", None).await;
    let child = app.create_folder("child", Some(&root)).await;
    let file = app.create_file("deep.txt", &child).await;

    let response = app
        .request("DELETE", &format!("/api/v1/folders/{root}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let child_gone = app
        .request("GET", &format!("/api/v1/folders/{child}"), None)
        .await;
    assert_eq!(child_gone.status, StatusCode::NOT_FOUND);

    let file_gone = app.request("GET", &format!("/api/v1/files/{file}"), None).await;
    assert_eq!(file_gone.status, StatusCode::NOT_FOUND);

    let again = app
        .request("DELETE", &format!("/api/v1/folders/{root}"), None)
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}
