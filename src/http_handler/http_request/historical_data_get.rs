use super::super::http_response::historical_data::HistoricalDataResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /api/data endpoint. The query string is fixed at
/// construction.
#[derive(Debug)]
pub struct HistoricalDataRequest {
    endpoint: String,
}

impl HistoricalDataRequest {
    /// `limit` bounds how many telemetry rows the backend returns.
    pub fn new(limit: u32) -> Self {
        Self { endpoint: format!("/api/data?limit={limit}") }
    }
}

impl NoBodyHTTPRequestType for HistoricalDataRequest {}

impl HTTPRequestType for HistoricalDataRequest {
    type Response = HistoricalDataResponse;
    fn endpoint(&self) -> &str { &self.endpoint }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
