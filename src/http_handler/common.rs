use super::http_request::request_common::RequestError;
use super::http_response::response_common::ResponseError;
use strum_macros::Display;

/// Umbrella error for a single API call.
#[derive(Debug, Display)]
pub enum HTTPError {
    HTTPRequestError(RequestError),
    HTTPResponseError(ResponseError),
}

impl std::error::Error for HTTPError {}

impl HTTPError {
    /// True when the call failed because the backend rejected the session.
    /// By the time the caller sees this, the session has been invalidated.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, HTTPError::HTTPResponseError(ResponseError::Unauthorized))
    }
}

/// One telemetry row as retained by the backend.
#[derive(serde::Deserialize, Debug)]
pub struct TelemetryRecord {
    id: i64,
    altitude: f64,
    speed: f64,
    coordinates: String,
    battery_level: f64,
    wind_speed: f64,
    position: String,
    timestamp: String,
}

impl TelemetryRecord {
    pub fn id(&self) -> i64 { self.id }
    pub fn altitude(&self) -> f64 { self.altitude }
    pub fn speed(&self) -> f64 { self.speed }
    /// Raw `"lat,lon"` pair as the vehicle reported it.
    pub fn coordinates(&self) -> &str { &self.coordinates }
    pub fn battery_level(&self) -> f64 { self.battery_level }
    pub fn wind_speed(&self) -> f64 { self.wind_speed }
    pub fn position(&self) -> &str { &self.position }
    /// Server-formatted insertion time.
    pub fn timestamp(&self) -> &str { &self.timestamp }
}

/// One issued command as retained by the backend.
#[derive(serde::Deserialize, Debug)]
pub struct CommandRecord {
    id: i64,
    command: String,
    parameters: Option<String>,
    status: String,
    timestamp: String,
}

impl CommandRecord {
    pub fn id(&self) -> i64 { self.id }
    pub fn command(&self) -> &str { &self.command }
    /// Parameters as the JSON text the backend stored, if any were recorded.
    pub fn parameters(&self) -> Option<&str> { self.parameters.as_deref() }
    pub fn status(&self) -> &str { &self.status }
    pub fn timestamp(&self) -> &str { &self.timestamp }
}

/// One system log line as retained by the backend.
#[derive(serde::Deserialize, Debug)]
pub struct LogRecord {
    id: i64,
    message: String,
    #[serde(rename = "type")]
    kind: String,
    timestamp: String,
}

impl LogRecord {
    pub fn id(&self) -> i64 { self.id }
    pub fn message(&self) -> &str { &self.message }
    /// Log category, e.g. `"info"`, `"error"` or `"command"`.
    pub fn kind(&self) -> &str { &self.kind }
    pub fn timestamp(&self) -> &str { &self.timestamp }
}
