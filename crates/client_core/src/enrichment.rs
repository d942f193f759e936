//! Deterministic synthesis of HR attributes for records fetched from the
//! persons provider. Every value is a pure function of the record's position
//! in the batch as received.

use shared::{
    domain::{Department, EmployeeStatus, Position},
    protocol::EmployeeRecord,
};

const STATUS_PATTERN: [EmployeeStatus; 5] = [
    EmployeeStatus::Active,
    EmployeeStatus::Active,
    EmployeeStatus::Active,
    EmployeeStatus::OnLeave,
    EmployeeStatus::Terminated,
];

const HIRE_YEAR_BASE: usize = 2020;
const SALARY_BASE: u64 = 45_000;
const SALARY_STEP: u64 = 5_000;
const SALARY_GRANULARITY: u64 = 1_000;

pub fn department_for_index(index: usize) -> Department {
    Department::ALL[index % Department::ALL.len()]
}

pub fn position_for_index(index: usize) -> Position {
    Position::ALL[index % Position::ALL.len()]
}

pub fn status_for_index(index: usize) -> EmployeeStatus {
    STATUS_PATTERN[index % STATUS_PATTERN.len()]
}

/// `YYYY-MM-DD` with year cycling over 2020..=2023.
pub fn hire_date_for_index(index: usize) -> String {
    let year = HIRE_YEAR_BASE + index % 4;
    let month = index % 12 + 1;
    let day = index % 28 + 1;
    format!("{year}-{month:02}-{day:02}")
}

pub fn salary_for_index(index: usize) -> u64 {
    let base = SALARY_BASE.saturating_add((index as u64).saturating_mul(SALARY_STEP));
    base / SALARY_GRANULARITY * SALARY_GRANULARITY
}

/// Overwrites the HR fields of every record according to its batch index.
pub fn enrich(batch: Vec<EmployeeRecord>) -> Vec<EmployeeRecord> {
    batch
        .into_iter()
        .enumerate()
        .map(|(index, record)| EmployeeRecord {
            department: Some(department_for_index(index)),
            position: Some(position_for_index(index)),
            status: Some(status_for_index(index)),
            hire_date: Some(hire_date_for_index(index)),
            salary: Some(salary_for_index(index)),
            ..record
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/enrichment_tests.rs"]
mod tests;
