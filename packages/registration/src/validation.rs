//! Client-side validation of [`FormState`].

use std::collections::BTreeMap;

use crate::models::{Field, FormState};

pub const EMAIL_REQUIRED: &str = "Valid email required";
pub const PASSWORD_LENGTH: &str = "Password must be 8-15 characters";
pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const MOBILE_REQUIRED: &str = "10-digit mobile number required";
pub const GENDER_REQUIRED: &str = "Gender required";
pub const PINCODE_REQUIRED: &str = "6-digit pincode required";
pub const DEPARTMENT_REQUIRED: &str = "Select valid department";

const PASSWORD_MIN: usize = 8;
const PASSWORD_MAX: usize = 15;

/// Field-level messages for every input that currently fails validation.
///
/// Keys are always required fields. An empty set means the form is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorSet(BTreeMap<Field, &'static str>);

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        debug_assert!(field.is_required());
        self.0.insert(field, message);
    }
}

/// Check every rule against `form`. Rules are independent; all of them run.
pub fn validate(form: &FormState) -> ErrorSet {
    let mut errors = ErrorSet::new();

    if !form.mail_id.contains('@') {
        errors.insert(Field::MailId, EMAIL_REQUIRED);
    }
    // UTF-16 code units, as a browser form measures it.
    let password_len = form.password.encode_utf16().count();
    if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&password_len) {
        errors.insert(Field::Password, PASSWORD_LENGTH);
    }
    if form.first_name.is_empty() {
        errors.insert(Field::FirstName, FIRST_NAME_REQUIRED);
    }
    if form.last_name.is_empty() {
        errors.insert(Field::LastName, LAST_NAME_REQUIRED);
    }
    if !is_digits(&form.mobile_no, 10) {
        errors.insert(Field::MobileNo, MOBILE_REQUIRED);
    }
    if form.gender.is_none() {
        errors.insert(Field::Gender, GENDER_REQUIRED);
    }
    if !is_digits(&form.pincode, 6) {
        errors.insert(Field::Pincode, PINCODE_REQUIRED);
    }
    if form.department.is_none() {
        errors.insert(Field::Department, DEPARTMENT_REQUIRED);
    }

    errors
}

/// `^\d{n}$` over ASCII digits.
fn is_digits(s: &str, n: usize) -> bool {
    s.len() == n && s.bytes().all(|b| b.is_ascii_digit())
}
