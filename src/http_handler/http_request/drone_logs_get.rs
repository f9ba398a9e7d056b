use super::super::http_response::drone_logs::DroneLogsResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct DroneLogsRequest {}

impl NoBodyHTTPRequestType for DroneLogsRequest {}

impl HTTPRequestType for DroneLogsRequest {
    type Response = DroneLogsResponse;
    fn endpoint(&self) -> &'static str { "/drone/logs" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
