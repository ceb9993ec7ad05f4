use serde::{Deserialize, Serialize};

/// Body of the create-record POST.
///
/// Every value crosses the wire as a string; `date_of_joining` is an
/// ISO-8601 calendar date (`YYYY-MM-DD`). Key casing must match what the
/// employee endpoint expects, hence the camelCase rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub employee_id: String,
    pub email: String,
    pub phone_number: String,
    pub department: String,
    pub date_of_joining: String,
    pub role: String,
}
