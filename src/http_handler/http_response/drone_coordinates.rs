use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /drone/coordinates endpoint.
#[derive(serde::Deserialize, Debug)]
pub struct DroneCoordinatesResponse {
    latitude: f64,
    longitude: f64,
}

impl SerdeJSONBodyHTTPResponseType for DroneCoordinatesResponse {}

impl DroneCoordinatesResponse {
    pub fn latitude(&self) -> f64 { self.latitude }
    pub fn longitude(&self) -> f64 { self.longitude }
}
