use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /drone/arrived endpoint.
#[derive(serde::Deserialize, Debug)]
pub struct DroneArrivedResponse {
    message: String,
}

impl SerdeJSONBodyHTTPResponseType for DroneArrivedResponse {}

impl DroneArrivedResponse {
    pub fn message(&self) -> &str { &self.message }
}
