use super::super::common::LogRecord;
use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /api/logs endpoint: system log lines, newest first.
#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub struct SystemLogsResponse {
    records: Vec<LogRecord>,
}

impl SerdeJSONBodyHTTPResponseType for SystemLogsResponse {}

impl SystemLogsResponse {
    pub fn records(&self) -> &[LogRecord] { &self.records }
}
