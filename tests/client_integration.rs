//! Smoke tests through the top-level crate's re-exports.

use godaddy_rs::prelude::*;
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize)]
struct Domain {
    domain: String,
    status: String,
}

#[tokio::test]
async fn test_list_domains_via_prelude() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/domains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"domain": "example.com", "status": "ACTIVE"},
            {"domain": "example.org", "status": "PENDING_DNS_ACTIVE"}
        ])))
        .mount(&server)
        .await;

    let client = Client::new(ClientConfig::new("key", "secret").with_endpoint(server.uri())).await?;
    let domains: Vec<Domain> = client
        .get("/v1/domains?statuses=ACTIVE,PENDING_DNS_ACTIVE")
        .await?
        .unwrap_or_default();

    assert_eq!(domains.len(), 2);
    assert_eq!(domains[0].domain, "example.com");
    assert_eq!(domains[1].status, "PENDING_DNS_ACTIVE");
    Ok(())
}

#[tokio::test]
async fn test_cancelled_context_sends_nothing() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/domains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(ClientConfig::new("key", "secret").with_endpoint(server.uri())).await?;
    let ctx = RequestContext::background();
    ctx.cancel();

    let err = client
        .get_with_context::<serde_json::Value>(&ctx, "/v1/domains/example.com")
        .await
        .unwrap_err();
    assert!(err.as_cancelled().is_some());
    Ok(())
}

#[test]
fn test_version_is_set() {
    assert!(!godaddy_rs::VERSION.is_empty());
}
