use super::super::http_response::system_logs::SystemLogsResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /api/logs endpoint. The `type` query parameter only
/// appears when a log kind is given.
#[derive(Debug)]
pub struct SystemLogsRequest {
    endpoint: String,
}

impl SystemLogsRequest {
    pub fn new(limit: u32, kind: Option<&str>) -> Self {
        let mut endpoint = format!("/api/logs?limit={limit}");
        if let Some(kind) = kind {
            endpoint.push_str(&format!("&type={kind}"));
        }
        Self { endpoint }
    }
}

impl NoBodyHTTPRequestType for SystemLogsRequest {}

impl HTTPRequestType for SystemLogsRequest {
    type Response = SystemLogsResponse;
    fn endpoint(&self) -> &str { &self.endpoint }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
