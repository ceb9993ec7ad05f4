use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the seven fields of the employee form, in display order.
///
/// `as_str` yields the wire name used in the create-record payload; the
/// variant order is the order fields appear on screen, so ordered
/// collections keyed by `Field` iterate top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    EmployeeId,
    Email,
    PhoneNumber,
    Department,
    DateOfJoining,
    Role,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::EmployeeId,
        Field::Email,
        Field::PhoneNumber,
        Field::Department,
        Field::DateOfJoining,
        Field::Role,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::EmployeeId => "employeeId",
            Field::Email => "email",
            Field::PhoneNumber => "phoneNumber",
            Field::Department => "department",
            Field::DateOfJoining => "dateOfJoining",
            Field::Role => "role",
        }
    }

    /// Human-facing label shown next to the widget.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::EmployeeId => "Employee ID",
            Field::Email => "Email",
            Field::PhoneNumber => "Phone Number",
            Field::Department => "Department",
            Field::DateOfJoining => "Date of Joining",
            Field::Role => "Role",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "HR")]
    Hr,
    Engineering,
    Marketing,
}

impl Department {
    pub const ALL: [Department; 3] = [
        Department::Hr,
        Department::Engineering,
        Department::Marketing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Department::Hr => "HR",
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Job role of the new employee.
///
/// The role select carries its own value set; it is not a second copy of
/// the department enumeration, and the stored value always equals the
/// displayed label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeRole {
    Manager,
    Developer,
}

impl EmployeeRole {
    pub const ALL: [EmployeeRole; 2] = [EmployeeRole::Manager, EmployeeRole::Developer];

    pub fn as_str(self) -> &'static str {
        match self {
            EmployeeRole::Manager => "Manager",
            EmployeeRole::Developer => "Developer",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }
}

impl fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
