use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /drone/stop endpoint.
#[derive(serde::Deserialize, Debug)]
pub struct DroneStopResponse {
    message: String,
}

impl SerdeJSONBodyHTTPResponseType for DroneStopResponse {}

impl DroneStopResponse {
    pub fn message(&self) -> &str { &self.message }
}
