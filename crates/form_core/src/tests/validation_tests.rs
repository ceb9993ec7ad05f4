use chrono::{Days, Local};
use shared::domain::Field;

use crate::{validate, EmployeeDraft};

fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn valid_draft() -> EmployeeDraft {
    EmployeeDraft {
        name: "Grace Hopper".to_string(),
        employee_id: "1234567890".to_string(),
        email: "grace@example.com".to_string(),
        phone_number: "0987654321".to_string(),
        department: "HR".to_string(),
        date_of_joining: today(),
        role: "Manager".to_string(),
    }
}

#[test]
fn empty_record_reports_an_error_for_every_field() {
    let errors = validate(&EmployeeDraft::default());

    assert_eq!(errors.len(), 7);
    for field in Field::ALL {
        assert!(
            errors.get(field).is_some(),
            "expected an error for {field}"
        );
    }
}

#[test]
fn fully_valid_record_passes() {
    let errors = validate(&valid_draft());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn errors_iterate_in_on_screen_field_order() {
    let errors = validate(&EmployeeDraft::default());
    let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
    assert_eq!(fields, Field::ALL);
}

#[test]
fn employee_id_length_is_capped_at_ten_characters() {
    let mut draft = valid_draft();

    draft.employee_id = "12345678901".to_string();
    assert!(validate(&draft).get(Field::EmployeeId).is_some());

    draft.employee_id = "1234567890".to_string();
    assert!(validate(&draft).get(Field::EmployeeId).is_none());
}

#[test]
fn phone_number_must_be_exactly_ten_digits() {
    let mut draft = valid_draft();

    draft.phone_number = "12345".to_string();
    assert!(validate(&draft).get(Field::PhoneNumber).is_some());

    draft.phone_number = "12345abcde".to_string();
    assert!(validate(&draft).get(Field::PhoneNumber).is_some());

    draft.phone_number = "1234567890".to_string();
    assert!(validate(&draft).get(Field::PhoneNumber).is_none());
}

#[test]
fn email_must_contain_local_at_domain_dot_tld() {
    let mut draft = valid_draft();

    draft.email = "a@b.c".to_string();
    assert!(validate(&draft).get(Field::Email).is_none());

    draft.email = "not-an-email".to_string();
    assert!(validate(&draft).get(Field::Email).is_some());
}

#[test]
fn joining_today_passes_but_tomorrow_fails() {
    let mut draft = valid_draft();

    draft.date_of_joining = today();
    assert!(validate(&draft).get(Field::DateOfJoining).is_none());

    let tomorrow = Local::now()
        .date_naive()
        .checked_add_days(Days::new(1))
        .expect("tomorrow");
    draft.date_of_joining = tomorrow.format("%Y-%m-%d").to_string();
    assert_eq!(
        validate(&draft).get(Field::DateOfJoining),
        Some("Date of joining must not be in the future.")
    );
}

#[test]
fn unparseable_joining_date_is_rejected() {
    let mut draft = valid_draft();
    draft.date_of_joining = "03/01/2024".to_string();
    assert_eq!(
        validate(&draft).get(Field::DateOfJoining),
        Some("Date of joining must be a valid date (YYYY-MM-DD).")
    );
}

#[test]
fn department_and_role_must_come_from_their_fixed_sets() {
    let mut draft = valid_draft();

    draft.department = "Sales".to_string();
    assert!(validate(&draft).get(Field::Department).is_some());
    draft.department = "Engineering".to_string();
    assert!(validate(&draft).get(Field::Department).is_none());

    // The department values are not valid roles.
    draft.role = "Engineering".to_string();
    assert!(validate(&draft).get(Field::Role).is_some());
    draft.role = "Developer".to_string();
    assert!(validate(&draft).get(Field::Role).is_none());
}

#[test]
fn rules_accumulate_instead_of_short_circuiting() {
    let mut draft = valid_draft();
    draft.name.clear();
    draft.phone_number = "12345".to_string();
    draft.role.clear();

    let errors = validate(&draft);
    assert_eq!(errors.len(), 3);
    assert!(errors.get(Field::Name).is_some());
    assert!(errors.get(Field::PhoneNumber).is_some());
    assert!(errors.get(Field::Role).is_some());
}
