use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /drone/fly endpoint.
#[derive(serde::Deserialize, Debug)]
pub struct FlyDroneResponse {
    message: String,
}

impl SerdeJSONBodyHTTPResponseType for FlyDroneResponse {}

impl FlyDroneResponse {
    pub fn message(&self) -> &str { &self.message }
}
