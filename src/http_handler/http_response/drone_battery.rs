use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /drone/battery endpoint.
#[derive(serde::Deserialize, Debug)]
pub struct DroneBatteryResponse {
    /// Charge level as the backend formats it (e.g. "75%").
    battery: String,
}

impl SerdeJSONBodyHTTPResponseType for DroneBatteryResponse {}

impl DroneBatteryResponse {
    pub fn battery(&self) -> &str { &self.battery }
}
