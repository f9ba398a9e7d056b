pub mod command_history_get;
pub mod dashboard_get;
pub mod drone_arrived_post;
pub mod drone_battery_get;
pub mod drone_coordinates_get;
pub mod drone_logs_get;
pub mod drone_start_post;
pub mod drone_status_get;
pub mod drone_stop_post;
pub mod fly_drone_post;
pub mod historical_data_get;
pub mod login_post;
pub mod receive_commands_get;
pub mod request_common;
pub mod send_drone_data_post;
pub mod system_logs_get;
