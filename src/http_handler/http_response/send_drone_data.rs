use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /drone/send_data endpoint.
#[derive(serde::Deserialize, Debug)]
pub struct SendDroneDataResponse {
    message: String,
}

impl SerdeJSONBodyHTTPResponseType for SendDroneDataResponse {}

impl SendDroneDataResponse {
    pub fn message(&self) -> &str { &self.message }
}
