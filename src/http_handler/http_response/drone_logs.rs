use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /drone/logs endpoint.
#[derive(serde::Deserialize, Debug)]
pub struct DroneLogsResponse {
    logs: Vec<String>,
}

impl SerdeJSONBodyHTTPResponseType for DroneLogsResponse {}

impl DroneLogsResponse {
    pub fn logs(&self) -> &[String] { &self.logs }
}
