use mockito::{Matcher, Mock, ServerGuard};
use serde_json::Value;

pub const TEST_API_KEY: &str = "integration-key";

/// Serves `body` for `GET /{path}` with the test API key.
pub async fn mock_endpoint(server: &mut ServerGuard, path: &str, body: &Value) -> Mock {
    server
        .mock("GET", format!("/{}", path).as_str())
        .match_query(Matcher::UrlEncoded("api_key".into(), TEST_API_KEY.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

/// Serves a search for `keyword` on `search/{kind}`.
pub async fn mock_search(
    server: &mut ServerGuard,
    kind: &str,
    keyword: &str,
    body: &Value,
) -> Mock {
    server
        .mock("GET", format!("/search/{}", kind).as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("api_key".into(), TEST_API_KEY.into()),
            Matcher::UrlEncoded("query".into(), keyword.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

pub async fn mock_failure(server: &mut ServerGuard, path: &str, status: usize) -> Mock {
    server
        .mock("GET", format!("/{}", path).as_str())
        .match_query(Matcher::Any)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status_code":11,"status_message":"Internal error."}"#)
        .create_async()
        .await
}
