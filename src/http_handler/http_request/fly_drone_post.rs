use super::super::http_response::fly_drone::FlyDroneResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /drone/fly endpoint.
#[derive(serde::Serialize, Debug)]
pub struct FlyDroneRequest {
    /// The destination the vehicle should head for.
    pub destination: String,
}

impl JSONBodyHTTPRequestType for FlyDroneRequest {
    /// The type of the json body.
    type Body = FlyDroneRequest;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for FlyDroneRequest {
    type Response = FlyDroneResponse;
    fn endpoint(&self) -> &'static str { "/drone/fly" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
