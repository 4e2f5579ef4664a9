//! # Page state and its transitions
//!
//! [`PageState`] is the single container owned by the page component. Every
//! user action is expressed as one of the update functions below; each returns
//! the notification the action produces so the caller only has to show it.
//!
//! The asynchronous actions are split around their collaborator call:
//!
//! ```text
//! submit:   begin_submit() --Ok(payload)--> DataService::register --> finish_submit()
//!                          \-Err(warning)-> (no request)
//! capture:  LocationProvider::current_position --> location_captured()
//! browse:   DataService::list_records --> records_fetched()
//! ```
//!
//! Nothing here awaits, so the caller never holds a borrow of the state across
//! a suspension point. A caller that goes away before the collaborator answers
//! simply never applies the second half.

use crate::models::{Coordinate, Field, FormState, Record, RecordsResponse};
use crate::notification::{self, Notification};
use crate::service::{LocationError, ServiceError};
use crate::validation::{validate, ErrorSet};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub form: FormState,
    /// Errors from the most recent submit attempt.
    pub errors: ErrorSet,
    /// Last captured position; the map preview is shown while this is set.
    pub location: Option<Coordinate>,
    pub records: Vec<Record>,
    pub table_visible: bool,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an input change. The location field is filled only by a capture.
    pub fn edit(&mut self, field: Field, value: &str) {
        if field == Field::CurrentLocation {
            return;
        }
        self.form.set(field, value);
    }

    /// Validate and decide whether the create-record request may go out.
    ///
    /// The error set is replaced in both cases. On success the returned form is
    /// the request body.
    pub fn begin_submit(&mut self) -> Result<FormState, Notification> {
        self.errors = validate(&self.form);
        if self.errors.is_empty() {
            Ok(self.form.clone())
        } else {
            tracing::debug!(
                "submit rejected: {:?}",
                self.errors.fields().collect::<Vec<_>>()
            );
            Err(Notification::warning(notification::FIX_FORM_ERRORS))
        }
    }

    /// Outcome of the create-record request. The form is left as it was.
    pub fn finish_submit(&mut self, result: Result<(), ServiceError>) -> Notification {
        match result {
            Ok(()) => Notification::success(notification::REGISTERED),
            Err(e) => {
                tracing::error!("registration failed: {}", e);
                Notification::error(notification::REGISTRATION_FAILED)
            }
        }
    }

    /// Outcome of a position request.
    pub fn location_captured(
        &mut self,
        result: Result<Coordinate, LocationError>,
    ) -> Notification {
        match result {
            Ok(coord) => {
                self.form.current_location = coord.to_string();
                self.location = Some(coord);
                Notification::success(notification::LOCATION_CAPTURED)
            }
            Err(LocationError::Unsupported) => {
                Notification::error(notification::LOCATION_UNSUPPORTED)
            }
            Err(e) => {
                tracing::warn!("location capture failed: {}", e);
                Notification::error(notification::LOCATION_FAILED)
            }
        }
    }

    /// Outcome of the list-records request. The record list is replaced or
    /// cleared wholesale, never merged.
    pub fn records_fetched(
        &mut self,
        result: Result<RecordsResponse, ServiceError>,
    ) -> Notification {
        match result {
            Ok(resp) if resp.has_data() => {
                self.records = resp.data;
                self.table_visible = true;
                Notification::success(notification::DATA_FETCHED)
            }
            Ok(resp) => {
                tracing::debug!("list-records answered status {:?}", resp.status);
                self.records.clear();
                self.table_visible = false;
                Notification::warning(notification::NO_DATA)
            }
            Err(e) => {
                tracing::error!("failed to fetch records: {}", e);
                self.records.clear();
                self.table_visible = false;
                Notification::error(notification::FETCH_FAILED)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{FixedLocator, MemoryService};
    use crate::models::{Department, Gender};
    use crate::notification::Level;
    use crate::service::{DataService, LocationProvider};
    use crate::validation::PASSWORD_LENGTH;

    fn fill_valid(page: &mut PageState) {
        page.edit(Field::MailId, "a@b.com");
        page.edit(Field::Password, "abcdefgh");
        page.edit(Field::FirstName, "A");
        page.edit(Field::LastName, "B");
        page.edit(Field::MobileNo, "1234567890");
        page.edit(Field::Gender, "Male");
        page.edit(Field::Pincode, "123456");
        page.edit(Field::Department, "IT");
    }

    #[test]
    fn test_edit_ignores_location_field() {
        let mut page = PageState::new();
        page.edit(Field::CurrentLocation, "1,2");
        assert_eq!(page.form.current_location, "");
        page.edit(Field::Gender, "Other");
        assert_eq!(page.form.gender, Some(Gender::Other));
    }

    #[tokio::test]
    async fn test_valid_submit_reaches_service() {
        let service = MemoryService::new();
        let mut page = PageState::new();
        fill_valid(&mut page);

        let payload = page.begin_submit().unwrap();
        assert!(page.errors.is_empty());
        assert_eq!(payload.department, Some(Department::It));

        let note = page.finish_submit(service.register(&payload).await);
        assert_eq!(note.level, Level::Success);
        assert_eq!(note.message, notification::REGISTERED);
        assert_eq!(service.submitted(), vec![payload]);

        // the form is kept after a successful submit
        assert_eq!(page.form.mail_id, "a@b.com");
    }

    #[test]
    fn test_invalid_submit_is_rejected_locally() {
        let mut page = PageState::new();
        fill_valid(&mut page);
        page.edit(Field::Password, "short");

        let note = page.begin_submit().unwrap_err();
        assert_eq!(note.level, Level::Warning);
        assert_eq!(note.message, notification::FIX_FORM_ERRORS);
        assert_eq!(page.errors.len(), 1);
        assert_eq!(page.errors.get(Field::Password), Some(PASSWORD_LENGTH));
    }

    #[test]
    fn test_errors_replaced_on_each_submit() {
        let mut page = PageState::new();
        assert!(page.begin_submit().is_err());
        assert_eq!(page.errors.len(), 8);

        fill_valid(&mut page);
        assert!(page.begin_submit().is_ok());
        assert!(page.errors.is_empty());
    }

    #[tokio::test]
    async fn test_service_failure_on_submit() {
        let service = MemoryService::failing();
        let mut page = PageState::new();
        fill_valid(&mut page);
        let before = page.form.clone();

        let payload = page.begin_submit().unwrap();
        let note = page.finish_submit(service.register(&payload).await);
        assert_eq!(note.level, Level::Error);
        assert_eq!(note.message, notification::REGISTRATION_FAILED);
        assert_eq!(page.form, before);
    }

    #[tokio::test]
    async fn test_location_capture_success() {
        let locator = FixedLocator::at(12.9, 77.6);
        let mut page = PageState::new();

        let note = page.location_captured(locator.current_position().await);
        assert_eq!(note.level, Level::Success);
        assert_eq!(note.message, notification::LOCATION_CAPTURED);
        assert_eq!(page.form.current_location, "12.9,77.6");
        assert_eq!(page.location, Some(Coordinate::new(12.9, 77.6)));
    }

    #[tokio::test]
    async fn test_location_capture_last_success_wins() {
        let mut page = PageState::new();
        page.location_captured(FixedLocator::at(1.5, 2.5).current_position().await);
        page.location_captured(FixedLocator::at(3.0, 4.25).current_position().await);
        assert_eq!(page.form.current_location, "3,4.25");
        assert_eq!(page.location, Some(Coordinate::new(3.0, 4.25)));

        // a later failure leaves the last good position alone
        page.location_captured(
            FixedLocator::failing(LocationError::Timeout)
                .current_position()
                .await,
        );
        assert_eq!(page.form.current_location, "3,4.25");
    }

    #[tokio::test]
    async fn test_location_failures() {
        let mut page = PageState::new();

        let note = page.location_captured(
            FixedLocator::failing(LocationError::Unsupported)
                .current_position()
                .await,
        );
        assert_eq!(note.level, Level::Error);
        assert_eq!(note.message, notification::LOCATION_UNSUPPORTED);

        let note = page.location_captured(
            FixedLocator::failing(LocationError::PermissionDenied)
                .current_position()
                .await,
        );
        assert_eq!(note.message, notification::LOCATION_FAILED);
        assert_eq!(page.location, None);
        assert_eq!(page.form.current_location, "");
    }

    #[tokio::test]
    async fn test_fetch_shows_table_with_one_row_per_record() {
        let service = MemoryService::new();
        let mut page = PageState::new();
        fill_valid(&mut page);
        let payload = page.begin_submit().unwrap();
        service.register(&payload).await.unwrap();
        service.register(&payload).await.unwrap();

        let note = page.records_fetched(service.list_records().await);
        assert_eq!(note.level, Level::Success);
        assert_eq!(note.message, notification::DATA_FETCHED);
        assert!(page.table_visible);
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.records[0].cell(Field::MailId), "a@b.com");
    }

    #[test]
    fn test_fetch_failure_status_hides_table() {
        let mut page = PageState::new();
        page.table_visible = true;
        page.records = vec![Record::default()];

        let resp = RecordsResponse {
            status: "Failure".to_string(),
            data: vec![],
        };
        let note = page.records_fetched(Ok(resp));
        assert_eq!(note.level, Level::Warning);
        assert_eq!(note.message, notification::NO_DATA);
        assert!(!page.table_visible);
    }

    #[tokio::test]
    async fn test_fetch_empty_success_hides_table() {
        let service = MemoryService::new();
        let mut page = PageState::new();
        let note = page.records_fetched(service.list_records().await);
        assert_eq!(note.message, notification::NO_DATA);
        assert!(!page.table_visible);
    }

    #[tokio::test]
    async fn test_fetch_transport_error_hides_table() {
        let service = MemoryService::failing();
        let mut page = PageState::new();
        page.table_visible = true;

        let note = page.records_fetched(service.list_records().await);
        assert_eq!(note.level, Level::Error);
        assert_eq!(note.message, notification::FETCH_FAILED);
        assert!(!page.table_visible);
        assert!(page.records.is_empty());
    }
}
