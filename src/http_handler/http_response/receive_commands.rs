use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /drone/receive_commands endpoint.
#[derive(serde::Deserialize, Debug)]
pub struct ReceiveCommandsResponse {
    /// Commands currently queued for the vehicle, e.g. "takeoff" or "land".
    commands: Vec<String>,
}

impl SerdeJSONBodyHTTPResponseType for ReceiveCommandsResponse {}

impl ReceiveCommandsResponse {
    pub fn commands(&self) -> &[String] { &self.commands }
}
