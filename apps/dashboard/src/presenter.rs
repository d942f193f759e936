//! Text rendering for the headless dashboard.

use std::fmt::Write as _;

use chrono::NaiveDate;
use client_core::EmployeeStore;
use shared::{domain::EmployeeStatus, protocol::EmployeeRecord};

use crate::controller::coordinator::ViewCoordinator;

const NOT_AVAILABLE: &str = "N/A";

pub fn status_label(status: Option<EmployeeStatus>) -> &'static str {
    status.map(EmployeeStatus::label).unwrap_or("Unknown")
}

pub fn initials(record: &EmployeeRecord) -> String {
    record
        .firstname
        .chars()
        .take(1)
        .chain(record.lastname.chars().take(1))
        .flat_map(char::to_uppercase)
        .collect()
}

/// `$50,000` style; missing or zero salaries render as `N/A`.
pub fn format_salary(salary: Option<u64>) -> String {
    let Some(amount) = salary.filter(|s| *s > 0) else {
        return NOT_AVAILABLE.to_string();
    };
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

/// `Mar 5, 2021` style for ISO dates; anything else renders as `N/A`.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %-d, %Y").to_string(),
        Err(_) => NOT_AVAILABLE.to_string(),
    }
}

pub fn render_dashboard(store: &EmployeeStore, view: &ViewCoordinator, status: &str) -> String {
    let mut out = String::new();
    let metrics = store.metrics();

    let _ = writeln!(out, "HR Dashboard");
    let _ = writeln!(
        out,
        "Total: {}  Active: {}  On Leave: {}  Terminated: {}",
        metrics.total_employees,
        metrics.active_employees,
        metrics.on_leave_employees,
        metrics.terminated_employees
    );
    for (department, count) in &metrics.department_breakdown {
        let _ = writeln!(out, "  {department:<18} {count}");
    }

    if store.is_loading() {
        let _ = writeln!(out, "Loading employees...");
    }
    if let Some(error) = store.error() {
        let _ = writeln!(out, "! {error}");
    }

    let employees = view.filtered_employees(store);
    let _ = writeln!(out, "Showing {} of {}", employees.len(), store.employees().len());
    for employee in employees {
        let _ = writeln!(out, "{}", render_row(employee));
    }

    if !status.is_empty() {
        let _ = writeln!(out, "-- {status}");
    }
    out
}

fn render_row(employee: &EmployeeRecord) -> String {
    format!(
        "#{:<4} [{}] {} {} <{}> | {} | {} | {} | hired {} | {}",
        employee.id,
        initials(employee),
        employee.firstname,
        employee.lastname,
        employee.email,
        employee.department.map(|d| d.as_str()).unwrap_or(NOT_AVAILABLE),
        employee.position.map(|p| p.as_str()).unwrap_or(NOT_AVAILABLE),
        status_label(employee.status),
        employee
            .hire_date
            .as_deref()
            .map(format_date)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        format_salary(employee.salary),
    )
}

#[cfg(test)]
#[path = "tests/presenter_tests.rs"]
mod tests;
