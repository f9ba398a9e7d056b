use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /api/dashboard endpoint.
///
/// The dashboard aggregate is composed server-side and has no fixed schema,
/// so it is kept as a raw JSON value.
#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub struct DashboardResponse {
    payload: serde_json::Value,
}

impl SerdeJSONBodyHTTPResponseType for DashboardResponse {}

impl DashboardResponse {
    pub fn payload(&self) -> &serde_json::Value { &self.payload }
}
