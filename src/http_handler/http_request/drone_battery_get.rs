use super::super::http_response::drone_battery::DroneBatteryResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct DroneBatteryRequest {}

impl NoBodyHTTPRequestType for DroneBatteryRequest {}

impl HTTPRequestType for DroneBatteryRequest {
    type Response = DroneBatteryResponse;
    fn endpoint(&self) -> &'static str { "/drone/battery" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
