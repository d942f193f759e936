use super::*;
use crate::test_fixtures::person;

#[test]
fn status_follows_five_slot_pattern() {
    let statuses: Vec<_> = (0..10).map(status_for_index).collect();
    assert_eq!(
        statuses,
        vec![
            EmployeeStatus::Active,
            EmployeeStatus::Active,
            EmployeeStatus::Active,
            EmployeeStatus::OnLeave,
            EmployeeStatus::Terminated,
            EmployeeStatus::Active,
            EmployeeStatus::Active,
            EmployeeStatus::Active,
            EmployeeStatus::OnLeave,
            EmployeeStatus::Terminated,
        ]
    );
}

#[test]
fn department_and_position_wrap_around_their_lists() {
    assert_eq!(department_for_index(0), Department::Engineering);
    assert_eq!(department_for_index(8), Department::Engineering);
    assert_eq!(department_for_index(9), Department::HumanResources);
    assert_eq!(position_for_index(5), Position::Vp);
    assert_eq!(position_for_index(10), Position::JuniorDeveloper);
}

#[test]
fn hire_dates_are_zero_padded() {
    assert_eq!(hire_date_for_index(0), "2020-01-01");
    assert_eq!(hire_date_for_index(5), "2021-06-06");
    assert_eq!(hire_date_for_index(14), "2022-03-15");
    assert_eq!(hire_date_for_index(27), "2023-04-28");
    assert_eq!(hire_date_for_index(28), "2020-05-01");
}

#[test]
fn salary_grows_in_five_thousand_steps() {
    assert_eq!(salary_for_index(0), 45_000);
    assert_eq!(salary_for_index(1), 50_000);
    assert_eq!(salary_for_index(14), 115_000);
    assert_eq!(salary_for_index(3) % 1_000, 0);
}

#[test]
fn enrich_overwrites_hr_fields_and_keeps_person_data() {
    let mut seeded = person(42, "Alan", "Turing");
    seeded.department = Some(Department::Legal);
    let batch = vec![seeded, person(7, "Ada", "Lovelace")];

    let enriched = enrich(batch);

    assert_eq!(enriched.len(), 2);
    assert_eq!(enriched[0].id.0, 42);
    assert_eq!(enriched[0].firstname, "Alan");
    assert_eq!(enriched[0].department, Some(Department::Engineering));
    assert_eq!(enriched[1].department, Some(Department::HumanResources));
    assert_eq!(enriched[1].position, Some(Position::SeniorDeveloper));
    assert_eq!(enriched[1].hire_date.as_deref(), Some("2021-02-02"));
    assert_eq!(enriched[1].salary, Some(50_000));
}
