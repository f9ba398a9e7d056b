use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /drone/status endpoint.
#[derive(serde::Deserialize, Debug)]
pub struct DroneStatusResponse {
    /// Readiness string as the backend reports it (e.g. "Ready").
    status: String,
}

impl SerdeJSONBodyHTTPResponseType for DroneStatusResponse {}

impl DroneStatusResponse {
    pub fn status(&self) -> &str { &self.status }
}
