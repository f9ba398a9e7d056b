use super::super::common::CommandRecord;
use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /api/commands endpoint: issued commands, newest
/// first.
#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub struct CommandHistoryResponse {
    records: Vec<CommandRecord>,
}

impl SerdeJSONBodyHTTPResponseType for CommandHistoryResponse {}

impl CommandHistoryResponse {
    pub fn records(&self) -> &[CommandRecord] { &self.records }
}
