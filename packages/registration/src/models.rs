//! # Domain models for the data collection form
//!
//! Everything the page holds in memory and everything that crosses the wire to
//! the Data Service is defined here. The wire keys are the ones the service
//! expects (`MailID`, `FirstName`, ...), so the serde attributes below are part
//! of the external contract and must not be renamed casually.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Field`] | One of the ten form keys. Drives rendering order, labels and error keys. |
//! | [`Gender`] / [`Department`] | Closed enumerations behind the two `<select>` inputs. |
//! | [`FormState`] | The current value of every input. Serialised as the create-record body. |
//! | [`Coordinate`] | A captured `(latitude, longitude)` pair. |
//! | [`Record`] | One row returned by list-records, kept as the raw JSON object. |
//! | [`RecordsResponse`] | The `{ status, data }` envelope of list-records. |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// A named input of the form, spelled the way the service spells it.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Field {
    #[strum(serialize = "MailID")]
    MailId,
    Password,
    FirstName,
    LastName,
    MobileNo,
    Gender,
    Dob,
    Pincode,
    Department,
    CurrentLocation,
}

impl Field {
    /// Fields that carry a validation rule and a `required` marker.
    pub fn is_required(self) -> bool {
        !matches!(self, Field::Dob | Field::CurrentLocation)
    }

    /// The wire key, e.g. `"MailID"`.
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Column heading used by the record table.
    pub fn heading(self) -> &'static str {
        match self {
            Field::MailId => "MailID",
            Field::Password => "Password",
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::MobileNo => "Mobile No",
            Field::Gender => "Gender",
            Field::Dob => "DOB",
            Field::Pincode => "Pincode",
            Field::Department => "Department",
            Field::CurrentLocation => "Current Location",
        }
    }

    /// Fields rendered as plain `<input>` elements, in page order.
    pub fn text_inputs() -> impl Iterator<Item = Field> {
        Field::iter().filter(|f| {
            !matches!(
                f,
                Field::Gender | Field::Department | Field::CurrentLocation
            )
        })
    }

    /// Columns shown by the record table. The password is never displayed.
    pub fn table_columns() -> impl Iterator<Item = Field> {
        Field::iter().filter(|f| *f != Field::Password)
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Department {
    #[serde(rename = "IT")]
    #[strum(serialize = "IT")]
    It,
    #[serde(rename = "CSE")]
    #[strum(serialize = "CSE")]
    Cse,
    #[serde(rename = "ECE")]
    #[strum(serialize = "ECE")]
    Ece,
    #[serde(rename = "MECH")]
    #[strum(serialize = "MECH")]
    Mech,
    #[serde(rename = "CIVIL")]
    #[strum(serialize = "CIVIL")]
    Civil,
    #[serde(rename = "EEE")]
    #[strum(serialize = "EEE")]
    Eee,
    #[serde(rename = "AI-ML")]
    #[strum(serialize = "AI-ML")]
    AiMl,
    #[serde(rename = "AI-DS")]
    #[strum(serialize = "AI-DS")]
    AiDs,
}

/// Current value of every form input.
///
/// Gender and Department stay `None` until the user picks a member of the
/// closed enum; an unselected value goes over the wire as `""`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FormState {
    #[serde(rename = "MailID")]
    pub mail_id: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile_no: String,
    #[serde(default, with = "choice")]
    pub gender: Option<Gender>,
    pub dob: String,
    pub pincode: String,
    #[serde(default, with = "choice")]
    pub department: Option<Department>,
    pub current_location: String,
}

impl FormState {
    /// The value an input should display for `field`.
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::MailId => self.mail_id.clone(),
            Field::Password => self.password.clone(),
            Field::FirstName => self.first_name.clone(),
            Field::LastName => self.last_name.clone(),
            Field::MobileNo => self.mobile_no.clone(),
            Field::Gender => self.gender.map(|g| g.to_string()).unwrap_or_default(),
            Field::Dob => self.dob.clone(),
            Field::Pincode => self.pincode.clone(),
            Field::Department => self.department.map(|d| d.to_string()).unwrap_or_default(),
            Field::CurrentLocation => self.current_location.clone(),
        }
    }

    /// Store raw input text into `field`.
    ///
    /// Select values that are not members of their enum leave the field unset.
    pub fn set(&mut self, field: Field, value: &str) {
        match field {
            Field::MailId => self.mail_id = value.to_string(),
            Field::Password => self.password = value.to_string(),
            Field::FirstName => self.first_name = value.to_string(),
            Field::LastName => self.last_name = value.to_string(),
            Field::MobileNo => self.mobile_no = value.to_string(),
            Field::Gender => self.gender = Gender::from_str(value).ok(),
            Field::Dob => self.dob = value.to_string(),
            Field::Pincode => self.pincode = value.to_string(),
            Field::Department => self.department = Department::from_str(value).ok(),
            Field::CurrentLocation => self.current_location = value.to_string(),
        }
    }
}

/// A position reported by the platform, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Formats as `"<lat>,<lon>"` using the shortest decimal that round-trips.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// One stored record as returned by the service.
///
/// The service may add its own keys (ids, timestamps) and may send numbers
/// where the form sent strings, so the object is kept as-is and only read
/// through [`Record::cell`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub serde_json::Map<String, serde_json::Value>);

impl Record {
    /// Display text for a column; missing and null values render empty.
    pub fn cell(&self, field: Field) -> String {
        match self.0.get(field.key()) {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

impl From<&FormState> for Record {
    fn from(form: &FormState) -> Self {
        match serde_json::to_value(form) {
            Ok(serde_json::Value::Object(map)) => Record(map),
            _ => Record::default(),
        }
    }
}

/// Envelope returned by list-records.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordsResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub data: Vec<Record>,
}

impl RecordsResponse {
    pub const SUCCESS: &'static str = "Success";

    pub fn success(data: Vec<Record>) -> Self {
        Self {
            status: Self::SUCCESS.to_string(),
            data,
        }
    }

    /// Whether the service flagged success and sent at least one record.
    pub fn has_data(&self) -> bool {
        self.status == Self::SUCCESS && !self.data.is_empty()
    }
}

/// Serde adapter mapping `Option<E>` to `""` / the enum's string form.
mod choice {
    use super::*;

    pub fn serialize<E, S>(value: &Option<E>, serializer: S) -> Result<S::Ok, S::Error>
    where
        E: Copy + Into<&'static str>,
        S: Serializer,
    {
        let s: &'static str = value.map(Into::into).unwrap_or("");
        serializer.serialize_str(s)
    }

    pub fn deserialize<'de, E, D>(deserializer: D) -> Result<Option<E>, D::Error>
    where
        E: FromStr,
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.and_then(|s| E::from_str(&s).ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_match_wire_names() {
        let keys: Vec<&str> = Field::iter().map(Field::key).collect();
        assert_eq!(
            keys,
            vec![
                "MailID",
                "Password",
                "FirstName",
                "LastName",
                "MobileNo",
                "Gender",
                "Dob",
                "Pincode",
                "Department",
                "CurrentLocation",
            ]
        );
        assert_eq!(Field::from_str("MailID"), Ok(Field::MailId));
    }

    #[test]
    fn test_required_fields() {
        let required: Vec<Field> = Field::iter().filter(|f| f.is_required()).collect();
        assert_eq!(required.len(), 8);
        assert!(!Field::Dob.is_required());
        assert!(!Field::CurrentLocation.is_required());
    }

    #[test]
    fn test_text_inputs_order() {
        let inputs: Vec<Field> = Field::text_inputs().collect();
        assert_eq!(
            inputs,
            vec![
                Field::MailId,
                Field::Password,
                Field::FirstName,
                Field::LastName,
                Field::MobileNo,
                Field::Dob,
                Field::Pincode,
            ]
        );
        assert!(!Field::table_columns().any(|f| f == Field::Password));
    }

    #[test]
    fn test_department_strings() {
        let names: Vec<String> = Department::iter().map(|d| d.to_string()).collect();
        assert_eq!(
            names,
            vec!["IT", "CSE", "ECE", "MECH", "CIVIL", "EEE", "AI-ML", "AI-DS"]
        );
        assert_eq!(Department::from_str("AI-DS"), Ok(Department::AiDs));
        assert!(Department::from_str("Physics").is_err());
    }

    #[test]
    fn test_set_parses_select_values() {
        let mut form = FormState::default();
        form.set(Field::Gender, "Female");
        form.set(Field::Department, "AI-ML");
        assert_eq!(form.gender, Some(Gender::Female));
        assert_eq!(form.department, Some(Department::AiMl));

        form.set(Field::Gender, "");
        form.set(Field::Department, "Select Department");
        assert_eq!(form.gender, None);
        assert_eq!(form.department, None);
        assert_eq!(form.value(Field::Gender), "");
    }

    #[test]
    fn test_form_serializes_with_service_keys() {
        let mut form = FormState::default();
        form.set(Field::MailId, "a@b.com");
        form.set(Field::Department, "AI-DS");
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["MailID"], "a@b.com");
        assert_eq!(json["Gender"], "");
        assert_eq!(json["Department"], "AI-DS");
        assert_eq!(json["CurrentLocation"], "");
        assert_eq!(json.as_object().unwrap().len(), 10);
    }

    #[test]
    fn test_coordinate_display() {
        assert_eq!(Coordinate::new(12.9, 77.6).to_string(), "12.9,77.6");
        assert_eq!(Coordinate::new(-33.0, 151.25).to_string(), "-33,151.25");
    }

    #[test]
    fn test_record_cells() {
        let record: Record = serde_json::from_str(
            r#"{"_id":"abc","MailID":"x@y.z","Pincode":560001,"Dob":null}"#,
        )
        .unwrap();
        assert_eq!(record.cell(Field::MailId), "x@y.z");
        assert_eq!(record.cell(Field::Pincode), "560001");
        assert_eq!(record.cell(Field::Dob), "");
        assert_eq!(record.cell(Field::Gender), "");
    }

    #[test]
    fn test_records_response_without_data() {
        let resp: RecordsResponse = serde_json::from_str(r#"{"status":"Failure"}"#).unwrap();
        assert!(resp.data.is_empty());
        assert!(!resp.has_data());
        assert!(!RecordsResponse::success(vec![]).has_data());
    }
}
