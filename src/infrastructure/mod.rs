pub mod database;
pub mod gateways;
pub mod plan_file;
pub mod time;
