pub mod config;
pub mod map;
pub mod models;
pub mod notification;
pub mod page;
pub mod service;
pub mod validation;

mod memory;
pub use memory::{FixedLocator, MemoryService};

pub use config::AppConfig;
pub use map::{MapView, Tile};
pub use models::{Coordinate, Department, Field, FormState, Gender, Record, RecordsResponse};
pub use notification::{Level, Notification};
pub use page::PageState;
pub use service::{DataService, LocationError, LocationProvider, ServiceError};
pub use validation::{validate, ErrorSet};
pub use strum::IntoEnumIterator;
