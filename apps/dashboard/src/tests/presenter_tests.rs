use super::*;
use shared::{
    domain::{Department, EmployeeId, Gender, Selection},
    protocol::{Address, EmployeeDraft},
};

fn record(firstname: &str, lastname: &str) -> EmployeeRecord {
    EmployeeRecord {
        id: EmployeeId(1),
        firstname: firstname.into(),
        lastname: lastname.into(),
        email: String::new(),
        phone: String::new(),
        birthday: String::new(),
        gender: Gender::Male,
        address: Address::default(),
        website: String::new(),
        image: String::new(),
        department: None,
        position: None,
        status: None,
        hire_date: None,
        salary: None,
    }
}

#[test]
fn status_labels() {
    assert_eq!(status_label(Some(EmployeeStatus::Active)), "Active");
    assert_eq!(status_label(Some(EmployeeStatus::OnLeave)), "On Leave");
    assert_eq!(status_label(Some(EmployeeStatus::Terminated)), "Terminated");
    assert_eq!(status_label(None), "Unknown");
}

#[test]
fn initials_are_uppercased() {
    assert_eq!(initials(&record("ada", "lovelace")), "AL");
    assert_eq!(initials(&record("", "Hopper")), "H");
}

#[test]
fn salary_formatting() {
    assert_eq!(format_salary(Some(50_000)), "$50,000");
    assert_eq!(format_salary(Some(1_234_567)), "$1,234,567");
    assert_eq!(format_salary(Some(999)), "$999");
    assert_eq!(format_salary(Some(0)), "N/A");
    assert_eq!(format_salary(None), "N/A");
}

#[test]
fn date_formatting() {
    assert_eq!(format_date("2021-03-05"), "Mar 5, 2021");
    assert_eq!(format_date("2020-12-28"), "Dec 28, 2020");
    assert_eq!(format_date(""), "N/A");
    assert_eq!(format_date("yesterday"), "N/A");
}

#[test]
fn renders_metrics_and_filtered_rows() {
    let mut store = EmployeeStore::new();
    store.create_on(
        EmployeeDraft {
            firstname: "Ada".into(),
            lastname: "Lovelace".into(),
            ..EmployeeDraft::default()
        },
        NaiveDate::from_ymd_opt(2024, 2, 9).expect("date"),
    );
    store.create_on(
        EmployeeDraft {
            firstname: "Grace".into(),
            lastname: "Hopper".into(),
            department: Department::Legal,
            ..EmployeeDraft::default()
        },
        NaiveDate::from_ymd_opt(2024, 2, 10).expect("date"),
    );
    let mut view = ViewCoordinator::new();
    view.set_department_filter(Selection::Only(Department::Engineering));

    let text = render_dashboard(&store, &view, "Loaded 2 employees");

    assert!(text.contains("Total: 2  Active: 2  On Leave: 0  Terminated: 0"));
    assert!(text.contains("Showing 1 of 2"));
    assert!(text.contains("[AL] Ada Lovelace"));
    assert!(text.contains("hired Feb 9, 2024 | $50,000"));
    assert!(!text.contains("Grace"));
    assert!(text.ends_with("-- Loaded 2 employees\n"));
}
