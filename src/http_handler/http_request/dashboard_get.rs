use super::super::http_response::dashboard::DashboardResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct DashboardRequest {}

impl NoBodyHTTPRequestType for DashboardRequest {}

impl HTTPRequestType for DashboardRequest {
    type Response = DashboardResponse;
    fn endpoint(&self) -> &'static str { "/api/dashboard" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
