use super::super::http_response::drone_coordinates::DroneCoordinatesResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct DroneCoordinatesRequest {}

impl NoBodyHTTPRequestType for DroneCoordinatesRequest {}

impl HTTPRequestType for DroneCoordinatesRequest {
    type Response = DroneCoordinatesResponse;
    fn endpoint(&self) -> &'static str { "/drone/coordinates" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
