use super::super::http_response::drone_stop::DroneStopResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /drone/stop endpoint.
#[derive(Debug)]
pub struct DroneStopRequest {
    pub params: serde_json::Value,
}

impl Default for DroneStopRequest {
    fn default() -> Self {
        Self { params: serde_json::json!({}) }
    }
}

impl JSONBodyHTTPRequestType for DroneStopRequest {
    type Body = serde_json::Value;
    fn body(&self) -> &Self::Body { &self.params }
}

impl HTTPRequestType for DroneStopRequest {
    type Response = DroneStopResponse;
    fn endpoint(&self) -> &'static str { "/drone/stop" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
