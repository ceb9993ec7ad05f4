//! Field-level rules for the employee record.
//!
//! Every rule is applied independently so one pass reports every invalid
//! field; nothing short-circuits after the first failure.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use shared::domain::{Department, EmployeeRole, Field};

use crate::EmployeeDraft;

pub const EMPLOYEE_ID_MAX_CHARS: usize = 10;

const DATE_FORMAT: &str = "%Y-%m-%d";

// Relaxed local@domain.tld shape, matched anywhere in the value.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10}$").unwrap());

/// Mapping from invalid field to one human-readable message. A field is
/// present only when it failed its rule; an empty map means the record is
/// valid. Iteration follows on-screen field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Applies all seven field rules to the record and returns the accumulated
/// errors.
pub fn validate(record: &EmployeeDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if record.name.is_empty() {
        errors.insert(Field::Name, "Name is required.");
    }

    if record.employee_id.is_empty() {
        errors.insert(Field::EmployeeId, "Employee ID is required.");
    } else if record.employee_id.chars().count() > EMPLOYEE_ID_MAX_CHARS {
        errors.insert(
            Field::EmployeeId,
            "Employee ID must be at most 10 characters.",
        );
    }

    if record.email.is_empty() {
        errors.insert(Field::Email, "Email is required.");
    } else if !EMAIL_REGEX.is_match(&record.email) {
        errors.insert(Field::Email, "Enter a valid email address.");
    }

    if record.phone_number.is_empty() {
        errors.insert(Field::PhoneNumber, "Phone number is required.");
    } else if !PHONE_REGEX.is_match(&record.phone_number) {
        errors.insert(
            Field::PhoneNumber,
            "Phone number must be exactly 10 digits.",
        );
    }

    if record.department.is_empty() {
        errors.insert(Field::Department, "Department is required.");
    } else if Department::parse(&record.department).is_none() {
        errors.insert(Field::Department, "Select a valid department.");
    }

    if let Err(message) = check_date_of_joining(&record.date_of_joining) {
        errors.insert(Field::DateOfJoining, message);
    }

    if record.role.is_empty() {
        errors.insert(Field::Role, "Role is required.");
    } else if EmployeeRole::parse(&record.role).is_none() {
        errors.insert(Field::Role, "Select a valid role.");
    }

    errors
}

fn check_date_of_joining(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("Date of joining is required.");
    }

    let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) else {
        return Err("Date of joining must be a valid date (YYYY-MM-DD).");
    };

    // The current local day itself is still a valid joining date.
    if date > Local::now().date_naive() {
        return Err("Date of joining must not be in the future.");
    }

    Ok(())
}
