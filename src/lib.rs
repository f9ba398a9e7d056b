//! Asynchronous client library for a UAS ground-control and telemetry HTTP API.
//!
//! The crate wraps base-URL composition, bearer-token retention and injection,
//! and JSON (de)serialization behind one typed request/response pair per
//! backend endpoint. [`DroneConsole`] is the high-level entry point; the
//! [`Session`] it carries owns the token and decides what happens when the
//! backend rejects it.

mod config;
mod console;
mod http_handler;
mod logger;
mod session;

pub use config::ClientConfig;
pub use console::DroneConsole;
pub use http_handler::common::{CommandRecord, HTTPError, LogRecord, TelemetryRecord};
pub use http_handler::http_client::HTTPClient;
pub use http_handler::http_request::request_common::RequestError;
pub use http_handler::http_response::response_common::ResponseError;
pub use http_handler::http_response::{
    command_history::CommandHistoryResponse, dashboard::DashboardResponse,
    drone_arrived::DroneArrivedResponse, drone_battery::DroneBatteryResponse,
    drone_coordinates::DroneCoordinatesResponse, drone_logs::DroneLogsResponse,
    drone_start::DroneStartResponse, drone_status::DroneStatusResponse,
    drone_stop::DroneStopResponse, fly_drone::FlyDroneResponse,
    historical_data::HistoricalDataResponse, login::LoginResponse,
    receive_commands::ReceiveCommandsResponse, send_drone_data::SendDroneDataResponse,
    system_logs::SystemLogsResponse,
};
pub use session::{FileTokenStore, MemoryTokenStore, Session, TokenStore};
