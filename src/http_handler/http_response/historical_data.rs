use super::super::common::TelemetryRecord;
use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /api/data endpoint: telemetry rows, newest first.
#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub struct HistoricalDataResponse {
    records: Vec<TelemetryRecord>,
}

impl SerdeJSONBodyHTTPResponseType for HistoricalDataResponse {}

impl HistoricalDataResponse {
    pub fn records(&self) -> &[TelemetryRecord] { &self.records }
}
