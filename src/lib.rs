//! AI Map Generator client
//!
//! Collects a prompt and a style, submits them to the remote map generation
//! service over HTTP, and tracks the outcome of each attempt as a single
//! typed [`RequestState`].

pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;

pub use backend::{GeneratedMap, GenerationService, HttpBackend, MapRequest, MapStyle};
pub use controller::{AttemptId, OrderingPolicy, Phase, RequestState, Submission, SubmissionController};
pub use error::{AppError, Result, FALLBACK_MESSAGE};
pub use form::{Draft, MapForm, ViewModel};
