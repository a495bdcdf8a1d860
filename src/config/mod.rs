//! Configuration module

pub mod settings;

pub use settings::{ControllerConfig, LoggingConfig, ServiceConfig, Settings, DEFAULT_BASE_URL};
