//! # Collaborator seams
//!
//! The page talks to two outside parties: the Data Service that stores records
//! and the platform's location provider. Both are reached through the traits
//! below so the page logic can run against in-memory stand-ins in tests and
//! against `reqwest` / the browser in the app.
//!
//! ## [`DataService`]
//!
//! | Method | Request |
//! |--------|---------|
//! | `register` | `POST /api/v1/data/register` with the [`FormState`] as JSON |
//! | `list_records` | `GET /api/v1/data/getdata`, answering a [`RecordsResponse`] |
//!
//! ## [`LocationProvider`]
//!
//! A single-shot "get current position". Platforms without a location
//! capability answer [`LocationError::Unsupported`].

use thiserror::Error;

use crate::models::{Coordinate, FormState, RecordsResponse};

pub const REGISTER_PATH: &str = "/api/v1/data/register";
pub const LIST_PATH: &str = "/api/v1/data/getdata";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response: {0}")]
    Decode(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("geolocation is not supported on this platform")]
    Unsupported,
    #[error("location permission denied")]
    PermissionDenied,
    #[error("position unavailable")]
    Unavailable,
    #[error("timed out waiting for a position")]
    Timeout,
}

/// Async access to the external Data Service.
pub trait DataService {
    fn register(
        &self,
        form: &FormState,
    ) -> impl std::future::Future<Output = Result<(), ServiceError>>;
    fn list_records(
        &self,
    ) -> impl std::future::Future<Output = Result<RecordsResponse, ServiceError>>;
}

/// Single-shot access to the device position.
pub trait LocationProvider {
    fn current_position(
        &self,
    ) -> impl std::future::Future<Output = Result<Coordinate, LocationError>>;
}
