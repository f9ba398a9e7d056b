use super::super::http_response::drone_status::DroneStatusResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct DroneStatusRequest {}

impl NoBodyHTTPRequestType for DroneStatusRequest {}

impl HTTPRequestType for DroneStatusRequest {
    type Response = DroneStatusResponse;
    fn endpoint(&self) -> &'static str {
        "/drone/status"
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Get
    }
}
