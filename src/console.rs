use crate::config::ClientConfig;
use crate::http_handler::common::HTTPError;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::{
    command_history_get::CommandHistoryRequest, dashboard_get::DashboardRequest,
    drone_arrived_post::DroneArrivedRequest, drone_battery_get::DroneBatteryRequest,
    drone_coordinates_get::DroneCoordinatesRequest, drone_logs_get::DroneLogsRequest,
    drone_start_post::DroneStartRequest, drone_status_get::DroneStatusRequest,
    drone_stop_post::DroneStopRequest, fly_drone_post::FlyDroneRequest,
    historical_data_get::HistoricalDataRequest, login_post::LoginRequest,
    receive_commands_get::ReceiveCommandsRequest,
    request_common::{JSONBodyHTTPRequestType, NoBodyHTTPRequestType},
    send_drone_data_post::SendDroneDataRequest, system_logs_get::SystemLogsRequest,
};
use crate::http_handler::http_response::{
    command_history::CommandHistoryResponse, dashboard::DashboardResponse,
    drone_arrived::DroneArrivedResponse, drone_battery::DroneBatteryResponse,
    drone_coordinates::DroneCoordinatesResponse, drone_logs::DroneLogsResponse,
    drone_start::DroneStartResponse, drone_status::DroneStatusResponse,
    drone_stop::DroneStopResponse, fly_drone::FlyDroneResponse,
    historical_data::HistoricalDataResponse, login::LoginResponse,
    receive_commands::ReceiveCommandsResponse, send_drone_data::SendDroneDataResponse,
    system_logs::SystemLogsResponse,
};
use crate::session::{FileTokenStore, Session};
use std::sync::Arc;

/// High-level handle to the ground-control backend: one method per endpoint.
///
/// Every call is a single asynchronous request; calls may overlap freely and
/// complete in any order. Cloning is cheap — clones share the HTTP client
/// and session.
#[derive(Debug, Clone)]
pub struct DroneConsole {
    client: Arc<HTTPClient>,
}

impl DroneConsole {
    /// Creates a console for `base_url` over an existing session.
    pub fn new(base_url: &str, session: Arc<Session>) -> DroneConsole {
        DroneConsole { client: Arc::new(HTTPClient::new(base_url, session)) }
    }

    /// Creates a console from configuration, with a file-backed token store
    /// and no unauthorized handler.
    pub fn from_config(config: &ClientConfig) -> DroneConsole {
        let store = FileTokenStore::new(config.token_file());
        Self::new(config.base_url(), Arc::new(Session::new(Box::new(store))))
    }

    /// The session shared by every request this console issues.
    pub fn session(&self) -> &Session { self.client.session() }

    /// Authenticates against the backend and retains the returned token, so
    /// subsequent requests are authorized.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, HTTPError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = request.send_request(&self.client).await?;
        self.session().set_token(response.token());
        Ok(response)
    }

    pub async fn start_drone(
        &self,
        params: serde_json::Value,
    ) -> Result<DroneStartResponse, HTTPError> {
        DroneStartRequest { params }.send_request(&self.client).await
    }

    pub async fn stop_drone(
        &self,
        params: serde_json::Value,
    ) -> Result<DroneStopResponse, HTTPError> {
        DroneStopRequest { params }.send_request(&self.client).await
    }

    pub async fn drone_status(&self) -> Result<DroneStatusResponse, HTTPError> {
        DroneStatusRequest {}.send_request(&self.client).await
    }

    pub async fn drone_coordinates(&self) -> Result<DroneCoordinatesResponse, HTTPError> {
        DroneCoordinatesRequest {}.send_request(&self.client).await
    }

    /// Uploads a telemetry object for the backend to retain.
    pub async fn send_drone_data(
        &self,
        payload: serde_json::Value,
    ) -> Result<SendDroneDataResponse, HTTPError> {
        SendDroneDataRequest::new(payload).send_request(&self.client).await
    }

    pub async fn receive_commands(&self) -> Result<ReceiveCommandsResponse, HTTPError> {
        ReceiveCommandsRequest {}.send_request(&self.client).await
    }

    pub async fn drone_logs(&self) -> Result<DroneLogsResponse, HTTPError> {
        DroneLogsRequest {}.send_request(&self.client).await
    }

    pub async fn battery_status(&self) -> Result<DroneBatteryResponse, HTTPError> {
        DroneBatteryRequest {}.send_request(&self.client).await
    }

    /// Dispatches the vehicle towards `destination`.
    pub async fn fly_drone(&self, destination: &str) -> Result<FlyDroneResponse, HTTPError> {
        FlyDroneRequest { destination: destination.to_string() }
            .send_request(&self.client)
            .await
    }

    /// Reports that the vehicle has arrived at `location`.
    pub async fn arrive_destination(
        &self,
        location: &str,
    ) -> Result<DroneArrivedResponse, HTTPError> {
        DroneArrivedRequest { location: location.to_string() }
            .send_request(&self.client)
            .await
    }

    pub async fn dashboard(&self) -> Result<DashboardResponse, HTTPError> {
        DashboardRequest {}.send_request(&self.client).await
    }

    /// Fetches up to `limit` retained telemetry rows, newest first.
    pub async fn historical_data(&self, limit: u32) -> Result<HistoricalDataResponse, HTTPError> {
        HistoricalDataRequest::new(limit).send_request(&self.client).await
    }

    /// Fetches up to `limit` issued commands, newest first.
    pub async fn command_history(&self, limit: u32) -> Result<CommandHistoryResponse, HTTPError> {
        CommandHistoryRequest::new(limit).send_request(&self.client).await
    }

    /// Fetches up to `limit` system log lines, optionally restricted to one
    /// log kind (e.g. `Some("error")`).
    pub async fn system_logs(
        &self,
        limit: u32,
        kind: Option<&str>,
    ) -> Result<SystemLogsResponse, HTTPError> {
        SystemLogsRequest::new(limit, kind).send_request(&self.client).await
    }
}
