use super::super::http_response::command_history::CommandHistoryResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /api/commands endpoint.
#[derive(Debug)]
pub struct CommandHistoryRequest {
    endpoint: String,
}

impl CommandHistoryRequest {
    pub fn new(limit: u32) -> Self {
        Self { endpoint: format!("/api/commands?limit={limit}") }
    }
}

impl NoBodyHTTPRequestType for CommandHistoryRequest {}

impl HTTPRequestType for CommandHistoryRequest {
    type Response = CommandHistoryResponse;
    fn endpoint(&self) -> &str { &self.endpoint }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
