use super::super::http_response::drone_arrived::DroneArrivedResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /drone/arrived endpoint, reporting the location the
/// vehicle touched down at.
#[derive(serde::Serialize, Debug)]
pub struct DroneArrivedRequest {
    pub location: String,
}

impl JSONBodyHTTPRequestType for DroneArrivedRequest {
    type Body = DroneArrivedRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for DroneArrivedRequest {
    type Response = DroneArrivedResponse;
    fn endpoint(&self) -> &'static str { "/drone/arrived" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
