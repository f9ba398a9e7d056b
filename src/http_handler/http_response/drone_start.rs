use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /drone/start endpoint.
#[derive(serde::Deserialize, Debug)]
pub struct DroneStartResponse {
    /// Acknowledgement text from the backend.
    message: String,
}

impl SerdeJSONBodyHTTPResponseType for DroneStartResponse {}

impl DroneStartResponse {
    pub fn message(&self) -> &str { &self.message }
}
