use std::sync::{Arc, Mutex};

use crate::models::{Coordinate, FormState, Record, RecordsResponse};
use crate::service::{DataService, LocationError, LocationProvider, ServiceError};

/// In-memory DataService for tests and offline runs.
#[derive(Clone, Debug, Default)]
pub struct MemoryService {
    records: Arc<Mutex<Vec<FormState>>>,
    unreachable: bool,
}

impl MemoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service whose every request fails at the transport level.
    pub fn failing() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    /// Bodies received by `register`, oldest first.
    pub fn submitted(&self) -> Vec<FormState> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    fn check(&self) -> Result<(), ServiceError> {
        if self.unreachable {
            Err(ServiceError::Transport("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

impl DataService for MemoryService {
    async fn register(&self, form: &FormState) -> Result<(), ServiceError> {
        self.check()?;
        self.records
            .lock()
            .map_err(|e| ServiceError::Transport(e.to_string()))?
            .push(form.clone());
        Ok(())
    }

    async fn list_records(&self) -> Result<RecordsResponse, ServiceError> {
        self.check()?;
        let data = self
            .records
            .lock()
            .map_err(|e| ServiceError::Transport(e.to_string()))?
            .iter()
            .map(Record::from)
            .collect();
        Ok(RecordsResponse::success(data))
    }
}

/// LocationProvider that always answers the same result.
#[derive(Clone, Copy, Debug)]
pub struct FixedLocator {
    result: Result<Coordinate, LocationError>,
}

impl FixedLocator {
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            result: Ok(Coordinate::new(latitude, longitude)),
        }
    }

    pub fn failing(error: LocationError) -> Self {
        Self { result: Err(error) }
    }

    /// The provider used where the platform has no location capability.
    pub fn unsupported() -> Self {
        Self::failing(LocationError::Unsupported)
    }
}

impl LocationProvider for FixedLocator {
    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        self.result
    }
}
