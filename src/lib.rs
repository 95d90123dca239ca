pub mod config;
pub mod csv_export;
pub mod env_file;
pub mod report;
pub mod s3_client;
pub mod sensor_data;
pub mod uploader;

/// Install the logger with an `info` default, overridable through `RUST_LOG`
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
