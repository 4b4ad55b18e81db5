//! Integration tests for the client plumbing: authentication headers,
//! URL resolution, and response classification.

use paga_business::{sha512_hex, ApiBody, Client, Environment, PagaError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_client(server: &MockServer) -> Client {
    Client::builder()
        .principal("P")
        .credential("C")
        .api_key("K")
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[test]
fn test_environment_urls() {
    let client = Client::builder()
        .principal("P")
        .credential("C")
        .api_key("K")
        .environment(Environment::Test)
        .build()
        .unwrap();
    assert_eq!(
        client.base_url(),
        "https://beta.mypaga.com/paga-webservices/business-rest/secured/"
    );

    // the environment defaults to Live
    let client = Client::builder()
        .principal("P")
        .credential("C")
        .api_key("K")
        .build()
        .unwrap();
    assert_eq!(
        client.base_url(),
        "https://www.mypaga.com/paga-webservices/business-rest/secured/"
    );
}

#[tokio::test]
async fn test_auth_headers_are_sent_per_call() {
    let mock_server = MockServer::start().await;

    // accountBalance signs the reference number alone
    let expected_hash = sha512_hex(b"ref-1K");

    Mock::given(method("POST"))
        .and(path("/accountBalance"))
        .and(header("principal", "P"))
        .and(header("credentials", "C"))
        .and(header("hash", expected_hash.as_str()))
        .and(header("Content-Type", "application/json"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "responseCode": 0,
            "totalBalance": "100.0",
            "availableBalance": 50.0,
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);
    let outcome = client
        .account()
        .balance("ref-1", None, None, None, None)
        .await
        .unwrap();

    assert!(outcome.is_success());
    assert_eq!(outcome.response_code(), Some(0));
    assert_eq!(
        outcome.response.as_json().unwrap()["availableBalance"],
        50.0
    );
}

#[tokio::test]
async fn test_nonzero_response_code_is_flagged_not_thrown() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/getBanks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "responseCode": 5,
            "message": "invalid credentials",
        })))
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);
    let outcome = client.directory().banks("ref-2", None).await.unwrap();

    assert!(outcome.error);
    assert_eq!(outcome.response_code(), Some(5));

    let err = outcome.into_result().unwrap_err();
    assert!(matches!(err, PagaError::Business { code: 5, .. }));
}

#[tokio::test]
async fn test_non_json_body_is_returned_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/getOperationStatus"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>502 Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);
    let outcome = client
        .account()
        .operation_status("ref-3", None)
        .await
        .unwrap();

    assert!(outcome.error);
    assert_eq!(
        outcome.response,
        ApiBody::Text("<html>502 Bad Gateway</html>".to_string())
    );
}

#[tokio::test]
async fn test_network_error_keeps_its_source() {
    // unroutable port, nothing is listening
    let client = Client::builder()
        .principal("P")
        .credential("C")
        .api_key("K")
        .base_url("http://127.0.0.1:9/")
        .timeout(std::time::Duration::from_millis(500))
        .build()
        .unwrap();

    let err = client
        .account()
        .balance("ref-4", None, None, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, PagaError::Network(_)));
}
