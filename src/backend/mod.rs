//! Backend module - Service trait and HTTP client

pub mod http_backend;
pub mod traits;

pub use http_backend::HttpBackend;
pub use traits::{GeneratedMap, GenerationService, MapRequest, MapStyle};
