use super::super::http_response::receive_commands::ReceiveCommandsResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct ReceiveCommandsRequest {}

impl NoBodyHTTPRequestType for ReceiveCommandsRequest {}

impl HTTPRequestType for ReceiveCommandsRequest {
    type Response = ReceiveCommandsResponse;
    fn endpoint(&self) -> &'static str { "/drone/receive_commands" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
