pub mod command_history;
pub mod dashboard;
pub mod drone_arrived;
pub mod drone_battery;
pub mod drone_coordinates;
pub mod drone_logs;
pub mod drone_start;
pub mod drone_status;
pub mod drone_stop;
pub mod fly_drone;
pub mod historical_data;
pub mod login;
pub mod receive_commands;
pub mod response_common;
pub mod send_drone_data;
pub mod system_logs;
