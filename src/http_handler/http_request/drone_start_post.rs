use super::super::http_response::drone_start::DroneStartResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /drone/start endpoint.
///
/// The body is an arbitrary launch-parameter object; `{}` when the caller
/// has none.
#[derive(Debug)]
pub struct DroneStartRequest {
    pub params: serde_json::Value,
}

impl Default for DroneStartRequest {
    fn default() -> Self {
        Self { params: serde_json::json!({}) }
    }
}

impl JSONBodyHTTPRequestType for DroneStartRequest {
    /// The type of the json body.
    type Body = serde_json::Value;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body { &self.params }
}

impl HTTPRequestType for DroneStartRequest {
    /// Type of the expected response.
    type Response = DroneStartResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &'static str { "/drone/start" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
