mod common;

use serde_json::Value;

#[tokio::test]
async fn test_openapi_document_served() {
    let server = common::make_server();

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();

    let doc = response.json::<Value>();
    assert_eq!(doc["openapi"], "3.0.0");
    assert_eq!(doc["info"]["title"], "CRUD - Usuarios");
    assert_eq!(doc["servers"][0]["url"], "http://localhost:3000");
    assert!(doc["components"]["schemas"]["Usuario"].is_object());
}

#[tokio::test]
async fn test_openapi_paths_match_routes() {
    let server = common::make_server();

    let doc = server.get("/api-docs/openapi.json").await.json::<Value>();
    let paths = doc["paths"].as_object().unwrap();

    assert_eq!(paths.len(), 2);
    assert!(paths.contains_key("/usuario"));
    assert!(paths.contains_key("/usuario/{id}"));
}
