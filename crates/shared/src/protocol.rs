use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Department, EmployeeId, EmployeeStatus, Gender, Position};

/// Breakdown key for records that carry no department.
pub const UNASSIGNED_DEPARTMENT: &str = "Unassigned";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub street_name: String,
    #[serde(default)]
    pub building_number: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, rename = "country_code")]
    pub country_code: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

/// One employee entry: the remote person payload plus locally managed HR fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub firstname: String,
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub birthday: String,
    pub gender: Gender,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<u64>,
}

/// Envelope returned by the persons endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonsResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub seed: Option<String>,
    #[serde(default)]
    pub total: usize,
    pub data: Vec<EmployeeRecord>,
}

/// Create/edit form payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub birthday: String,
    pub gender: Gender,
    pub department: Department,
    pub position: Position,
    pub status: EmployeeStatus,
    pub city: String,
    pub country: String,
}

impl Default for EmployeeDraft {
    fn default() -> Self {
        Self {
            firstname: String::new(),
            lastname: String::new(),
            email: String::new(),
            phone: String::new(),
            birthday: String::new(),
            gender: Gender::Male,
            department: Department::first(),
            position: Position::first(),
            status: EmployeeStatus::Active,
            city: String::new(),
            country: String::new(),
        }
    }
}

impl EmployeeDraft {
    /// Populates a draft from an existing record, defaulting missing HR fields.
    pub fn from_record(record: &EmployeeRecord) -> Self {
        Self {
            firstname: record.firstname.clone(),
            lastname: record.lastname.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            birthday: record.birthday.clone(),
            gender: record.gender,
            department: record.department.unwrap_or_else(Department::first),
            position: record.position.unwrap_or_else(Position::first),
            status: record.status.unwrap_or(EmployeeStatus::Active),
            city: record.address.city.clone(),
            country: record.address.country.clone(),
        }
    }
}

/// Partial update. `None` leaves the stored value untouched; for `city` and
/// `country` an empty string is treated the same as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePatch {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birthday: Option<String>,
    pub gender: Option<Gender>,
    pub department: Option<Department>,
    pub position: Option<Position>,
    pub status: Option<EmployeeStatus>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl EmployeePatch {
    pub fn status(status: EmployeeStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl From<EmployeeDraft> for EmployeePatch {
    fn from(draft: EmployeeDraft) -> Self {
        Self {
            firstname: Some(draft.firstname),
            lastname: Some(draft.lastname),
            email: Some(draft.email),
            phone: Some(draft.phone),
            birthday: Some(draft.birthday),
            gender: Some(draft.gender),
            department: Some(draft.department),
            position: Some(draft.position),
            status: Some(draft.status),
            city: Some(draft.city),
            country: Some(draft.country),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HrMetrics {
    pub total_employees: usize,
    pub active_employees: usize,
    pub on_leave_employees: usize,
    pub terminated_employees: usize,
    pub department_breakdown: BTreeMap<String, usize>,
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
