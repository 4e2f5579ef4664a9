//! User-visible messages emitted by page actions.

pub const FIX_FORM_ERRORS: &str = "Please fix the form errors";
pub const REGISTERED: &str = "Registered successfully!";
pub const REGISTRATION_FAILED: &str = "Registration failed. Try again!";
pub const LOCATION_CAPTURED: &str = "Location captured!";
pub const LOCATION_FAILED: &str = "Failed to get location";
pub const LOCATION_UNSUPPORTED: &str = "Geolocation is not supported by your browser";
pub const DATA_FETCHED: &str = "Data fetched successfully!";
pub const NO_DATA: &str = "No data found.";
pub const FETCH_FAILED: &str = "Failed to fetch data.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Level::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }
}
