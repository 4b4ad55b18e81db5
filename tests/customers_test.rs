//! Integration tests for customer operations, including the multipart
//! upload path.

use chrono::NaiveDate;
use paga_business::{sha512_hex, Client, RegisterCustomerRequest};
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
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

#[tokio::test]
async fn test_register_customer_formats_date_of_birth() {
    let mock_server = MockServer::start().await;

    // the date of birth is not part of the signing contract
    let expected_hash = sha512_hex(b"R1+2348012345678AdaObiK");

    Mock::given(method("POST"))
        .and(path("/registerCustomer"))
        .and(header("hash", expected_hash.as_str()))
        .and(body_partial_json(serde_json::json!({
            "referenceNumber": "R1",
            "customerPhoneNumber": "+2348012345678",
            "customerFirstName": "Ada",
            "customerLastName": "Obi",
            "customerDateOfBirth": "1990/01/15",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "responseCode": 0,
            "pagaAccountNumber": "123456789",
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);
    let outcome = client
        .customers()
        .register_customer(RegisterCustomerRequest {
            reference_number: "R1".to_string(),
            customer_phone_number: "+2348012345678".to_string(),
            customer_first_name: "Ada".to_string(),
            customer_last_name: "Obi".to_string(),
            customer_email: None,
            customer_date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 15),
        })
        .await
        .unwrap();

    assert!(outcome.is_success());
}

#[tokio::test]
async fn test_account_photo_travels_as_a_customer_form_field() {
    let mock_server = MockServer::start().await;

    let expected_hash = sha512_hex(b"R9+2348012345678K");

    Mock::given(method("POST"))
        .and(path("/registerCustomerAccountPhoto"))
        .and(header("principal", "P"))
        .and(header("hash", expected_hash.as_str()))
        // single multipart field named "customer" holding the JSON
        // payload, with the photo bytes base64 encoded inside it
        .and(body_string_contains("form-data; name=\"customer\""))
        .and(body_string_contains("\"customerAccountPhoto\":\"AQID\""))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"responseCode": 0})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);
    let outcome = client
        .customers()
        .register_customer_account_photo("R9", "+2348012345678", &[1, 2, 3])
        .await
        .unwrap();

    assert!(outcome.is_success());
}

#[tokio::test]
async fn test_multipart_boundary_is_generated_per_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/registerCustomerAccountPhoto"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"responseCode": 0})),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);
    for _ in 0..2 {
        client
            .customers()
            .register_customer_account_photo("R9", "+2348012345678", &[1, 2, 3])
            .await
            .unwrap();
    }

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);

    let boundaries: Vec<String> = requests
        .iter()
        .map(|request| {
            let content_type = request
                .headers
                .iter()
                .find(|(name, _)| name.as_str().eq_ignore_ascii_case("content-type"))
                .map(|(_, values)| values.last().to_string())
                .expect("multipart request must carry a content-type");
            assert!(content_type.starts_with("multipart/form-data; boundary="));
            let boundary = content_type
                .split("boundary=")
                .nth(1)
                .unwrap()
                .to_string();
            // the boundary named in the header must be the one used in
            // the body
            let body = String::from_utf8_lossy(&request.body);
            assert!(body.contains(&format!("--{boundary}")));
            boundary
        })
        .collect();

    assert_ne!(boundaries[0], boundaries[1]);
}
