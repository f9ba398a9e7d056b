use super::super::http_response::send_drone_data::SendDroneDataResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /drone/send_data endpoint. The payload is whatever
/// JSON object the caller wants the backend to retain.
#[derive(Debug)]
pub struct SendDroneDataRequest {
    payload: serde_json::Value,
}

impl SendDroneDataRequest {
    pub fn new(payload: serde_json::Value) -> Self {
        Self { payload }
    }
}

impl JSONBodyHTTPRequestType for SendDroneDataRequest {
    type Body = serde_json::Value;
    fn body(&self) -> &Self::Body { &self.payload }
}

impl HTTPRequestType for SendDroneDataRequest {
    type Response = SendDroneDataResponse;
    fn endpoint(&self) -> &'static str { "/drone/send_data" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
