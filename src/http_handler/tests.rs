use super::common::HTTPError;
use super::http_client::HTTPClient;
use super::http_request::drone_stop_post::DroneStopRequest;
use super::http_request::request_common::JSONBodyHTTPRequestType;
use crate::console::DroneConsole;
use crate::session::{MemoryTokenStore, Session, TokenStore};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn console_for(uri: &str, token: Option<&str>) -> (DroneConsole, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::new());
    if let Some(token) = token {
        store.save(token).unwrap();
    }
    let session = Arc::new(Session::new(Box::new(Arc::clone(&store))));
    (DroneConsole::new(uri, session), store)
}

/// Matches requests that carry no Authorization header at all.
struct NoAuthHeader;

impl wiremock::Match for NoAuthHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

#[tokio::test]
async fn bearer_header_reflects_latest_set_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drone/status"))
        .and(header("Authorization", "Bearer fresh-token"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "Ready"})))
        .mount(&server)
        .await;

    let (console, _store) = console_for(&server.uri(), Some("stale-token"));
    console.session().set_token("fresh-token");
    let status = console.drone_status().await.unwrap();
    assert_eq!(status.status(), "Ready");
}

#[tokio::test]
async fn requests_without_token_omit_the_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drone/status"))
        .and(NoAuthHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "Ready"})))
        .mount(&server)
        .await;

    let (console, _store) = console_for(&server.uri(), None);
    assert!(console.drone_status().await.is_ok());
}

#[tokio::test]
async fn unauthorized_response_purges_the_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drone/status"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    store.save("doomed").unwrap();
    let notified = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&notified);
    let session = Arc::new(
        Session::new(Box::new(Arc::clone(&store)))
            .with_unauthorized_handler(move || flag.store(true, Ordering::SeqCst)),
    );
    let console = DroneConsole::new(&server.uri(), session);

    let err = console.drone_status().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(console.session().token().is_none());
    assert_eq!(store.load().unwrap(), None);
    assert!(notified.load(Ordering::SeqCst));
}

#[tokio::test]
async fn non_success_status_with_valid_json_still_parses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drone/status"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"status": "Degraded"})))
        .mount(&server)
        .await;

    let (console, _store) = console_for(&server.uri(), Some("token"));
    let status = console.drone_status().await.unwrap();
    assert_eq!(status.status(), "Degraded");
}

#[tokio::test]
async fn post_payload_is_serialized_as_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/drone/fly"))
        .and(body_json(json!({"destination": "pad-7"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Drone is flying"})))
        .mount(&server)
        .await;

    let (console, _store) = console_for(&server.uri(), Some("token"));
    let response = console.fly_drone("pad-7").await.unwrap();
    assert_eq!(response.message(), "Drone is flying");
}

#[tokio::test]
async fn start_drone_sends_the_given_parameter_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/drone/start"))
        .and(body_json(json!({"mode": "auto"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Drone started"})))
        .mount(&server)
        .await;

    let (console, _store) = console_for(&server.uri(), Some("token"));
    let response = console.start_drone(json!({"mode": "auto"})).await.unwrap();
    assert_eq!(response.message(), "Drone started");
}

#[tokio::test]
async fn stop_request_without_parameters_sends_an_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/drone/stop"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Drone stopped"})))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let session = Arc::new(Session::new(Box::new(Arc::clone(&store))));
    let client = HTTPClient::new(&server.uri(), session);
    let response = DroneStopRequest::default().send_request(&client).await.unwrap();
    assert_eq!(response.message(), "Drone stopped");
}

#[tokio::test]
async fn get_requests_carry_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drone/battery"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"battery": "75%"})))
        .mount(&server)
        .await;

    let (console, _store) = console_for(&server.uri(), Some("token"));
    let response = console.battery_status().await.unwrap();
    assert_eq!(response.battery(), "75%");
}

#[tokio::test]
async fn system_logs_sends_limit_and_type_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .and(query_param("limit", "50"))
        .and(query_param("type", "error"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let (console, _store) = console_for(&server.uri(), Some("token"));
    let logs = console.system_logs(50, Some("error")).await.unwrap();
    assert!(logs.records().is_empty());
}

#[tokio::test]
async fn historical_data_parses_telemetry_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/data"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "altitude": 120.5,
            "speed": 14.2,
            "coordinates": "34.0522,-118.2437",
            "battery_level": 88.0,
            "wind_speed": 3.1,
            "position": "sector-4",
            "timestamp": "2025-06-01 12:00:00"
        }])))
        .mount(&server)
        .await;

    let (console, _store) = console_for(&server.uri(), Some("token"));
    let data = console.historical_data(100).await.unwrap();
    assert_eq!(data.records().len(), 1);
    assert_eq!(data.records()[0].position(), "sector-4");
    assert_eq!(data.records()[0].coordinates(), "34.0522,-118.2437");
}

#[tokio::test]
async fn receive_commands_parses_the_queued_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drone/receive_commands"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"commands": ["takeoff", "land", "hover"]})),
        )
        .mount(&server)
        .await;

    let (console, _store) = console_for(&server.uri(), Some("token"));
    let response = console.receive_commands().await.unwrap();
    assert_eq!(response.commands(), &["takeoff", "land", "hover"]);
}

#[tokio::test]
async fn login_stores_the_returned_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"username": "operator", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "jwt-123",
            "message": "Login successful",
            "role": "admin"
        })))
        .mount(&server)
        .await;

    let (console, store) = console_for(&server.uri(), None);
    let response = console.login("operator", "hunter2").await.unwrap();
    assert_eq!(response.role(), "admin");
    assert_eq!(console.session().token().as_deref(), Some("jwt-123"));
    assert_eq!(store.load().unwrap().as_deref(), Some("jwt-123"));
}

#[tokio::test]
async fn transport_failure_is_reported_as_a_request_error() {
    // Bind a port, then drop the listener so connecting to it is refused.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (console, _store) = console_for(&format!("http://{addr}"), Some("token"));
    let err = console.drone_status().await.unwrap_err();
    assert!(matches!(err, HTTPError::HTTPRequestError(_)));
}

#[tokio::test]
async fn malformed_body_surfaces_as_a_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drone/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let (console, _store) = console_for(&server.uri(), Some("token"));
    let err = console.drone_status().await.unwrap_err();
    assert!(matches!(err, HTTPError::HTTPResponseError(_)));
}
