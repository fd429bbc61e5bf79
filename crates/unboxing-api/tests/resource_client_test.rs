// Integration tests for `ResourceClient` using wiremock.
#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use unboxing_api::models::{NewBilling, NewCustomer};
use unboxing_api::{
    Body, Credentials, CredentialPolicy, Error, FailureKind, Method, RequestOutcome,
    ResourceClient, Session, catalog,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ResourceClient) {
    let server = MockServer::start().await;
    let client = ResourceClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

async fn authorization_headers(server: &MockServer) -> Vec<Option<String>> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|req| {
            req.headers
                .get("authorization")
                .map(|v| v.to_str().unwrap().to_owned())
        })
        .collect()
}

// ── Authentication ──────────────────────────────────────────────────

#[tokio::test]
async fn test_authenticate_posts_form_and_reads_token() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/tokens/authentication"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("email=admin%40unboxing.test"))
        .and(body_string_contains("password=hunter22"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "authentication_token": {
                "token": "TOKEN26CHARSXXXXXXXXXXXXXX",
                "expiry": "2024-05-03T10:00:00Z"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = client
        .authenticate(&Credentials {
            email: "admin@unboxing.test".into(),
            password: "hunter22".into(),
        })
        .await
        .unwrap();

    assert_eq!(token.token, "TOKEN26CHARSXXXXXXXXXXXXXX");
    assert!(token.expiry.is_some());
    assert_eq!(authorization_headers(&server).await, vec![None]);
}

#[tokio::test]
async fn test_authenticate_surfaces_plain_text_rejection() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/tokens/authentication"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials\n"))
        .mount(&server)
        .await;

    let err = client
        .authenticate(&Credentials {
            email: "admin@unboxing.test".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "HTTP 401: Invalid credentials");
}

// ── Lists ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_customers_decodes_bare_array() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/customer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Acme", "email": "ops@acme.test", "phone": "555-0100",
             "address": "1 Main St", "version": 1},
            {"id": 2, "name": "Globex", "email": "it@globex.test", "phone": "",
             "address": "", "version": 3}
        ])))
        .mount(&server)
        .await;

    let customers = client
        .list_customers(&Session::anonymous())
        .await
        .unwrap();

    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].name, "Acme");
    assert_eq!(customers[1].version, 3);
}

#[tokio::test]
async fn test_list_users_unwraps_envelope_and_sends_bearer() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/user"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [
                {"id": 4, "created_at": "2024-02-01T09:30:00Z", "name": "Dana",
                 "email": "dana@unboxing.test", "role": "HR"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let users = client
        .list_users(&Session::with_credential("abc123"))
        .await
        .unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].role, "HR");
}

#[tokio::test]
async fn test_malformed_list_is_a_decode_failure() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/payroll"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[{\"id\": 1,"))
        .mount(&server)
        .await;

    let outcome = client
        .perform(
            &Session::anonymous(),
            &catalog::PAYROLL_LIST,
            Method::Get,
            None,
            None,
        )
        .await;

    assert!(matches!(
        outcome,
        RequestOutcome::TransportError {
            kind: FailureKind::Decode,
            ..
        }
    ));
}

// ── Mutations ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_customer_sends_json_with_info_key() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/customer"))
        .and(header("authorization", "Bearer abc123"))
        .and(body_json(json!({
            "name": "Acme",
            "email": "ops@acme.test",
            "info": "555-0100",
            "address": "1 Main St"
        })))
        // The create handler appends a message after the JSON document.
        .respond_with(ResponseTemplate::new(201).set_body_string(
            "{\"id\":9,\"name\":\"Acme\"}\n\"message\":\"New customer created\"",
        ))
        .expect(1)
        .mount(&server)
        .await;

    client
        .create_customer(
            &Session::with_credential("abc123"),
            &NewCustomer {
                name: "Acme".into(),
                email: "ops@acme.test".into(),
                phone: "555-0100".into(),
                address: "1 Main St".into(),
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_billing_is_public_unless_policy_says_otherwise() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/billing"))
        .and(body_json(json!({"customer_id": 3, "amount": 49.5, "date": "2024-01-01"})))
        .respond_with(ResponseTemplate::new(201).set_body_string("created"))
        .expect(2)
        .mount(&server)
        .await;

    let billing = NewBilling {
        customer_id: 3,
        amount: 49.5,
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    };
    let session = Session::with_credential("abc123");

    client.create_billing(&session, &billing).await.unwrap();

    let client = ResourceClient::from_reqwest(&server.uri(), reqwest::Client::new())
        .unwrap()
        .with_credential_policy(CredentialPolicy::Always);
    client.create_billing(&session, &billing).await.unwrap();

    assert_eq!(
        authorization_headers(&server).await,
        vec![None, Some("Bearer abc123".to_owned())]
    );
}

#[tokio::test]
async fn test_customer_and_payroll_reads_send_bearer() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/customer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/payroll"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/customer/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string("customer deleted"))
        .mount(&server)
        .await;

    let session = Session::with_credential("abc123");
    assert!(client.list_customers(&session).await.unwrap().is_empty());
    assert!(client.list_payroll(&session).await.unwrap().is_empty());
    client.delete_customer(&session, 7).await.unwrap();

    assert_eq!(
        authorization_headers(&server).await,
        vec![Some("Bearer abc123".to_owned()); 3]
    );
}

#[tokio::test]
async fn test_delete_customer_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/customer/7"))
        .respond_with(ResponseTemplate::new(404).set_body_string("customer not found\n"))
        .mount(&server)
        .await;

    let err = client
        .delete_customer(&Session::anonymous(), 7)
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    match err {
        Error::Http { message, .. } => assert_eq!(message, "customer not found"),
        other => panic!("expected HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_opaque_success_keeps_text() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/payroll/12"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Payroll deleted successfully"))
        .mount(&server)
        .await;

    let outcome = client
        .perform(
            &Session::with_credential("abc123"),
            &catalog::PAYROLL_DELETE,
            Method::Delete,
            Some("12"),
            None,
        )
        .await;

    assert_eq!(
        outcome,
        RequestOutcome::Success(Body::Text("Payroll deleted successfully".into()))
    );
}

// ── Transport ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() {
    let client = ResourceClient::from_reqwest("http://127.0.0.1:1", reqwest::Client::new()).unwrap();

    let outcome = client
        .perform(
            &Session::anonymous(),
            &catalog::CUSTOMER_LIST,
            Method::Get,
            None,
            None,
        )
        .await;

    assert!(matches!(outcome, RequestOutcome::TransportError { .. }));
    assert_eq!(outcome.error_text(), None);
}

#[tokio::test]
async fn test_healthcheck_parses_text() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/healthcheck"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "status: available\nenvironment: development\nversion: 1.0.0\n",
        ))
        .mount(&server)
        .await;

    let health = client.healthcheck().await.unwrap();
    assert_eq!(health.status, "available");
    assert_eq!(health.version, "1.0.0");
}
