use super::super::http_response::login::LoginResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /login endpoint.
#[derive(serde::Serialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl JSONBodyHTTPRequestType for LoginRequest {
    type Body = LoginRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for LoginRequest {
    type Response = LoginResponse;
    fn endpoint(&self) -> &'static str { "/login" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
