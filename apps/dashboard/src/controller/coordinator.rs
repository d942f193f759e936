//! Transient dashboard state: list filters, the open modal and its form draft.
//!
//! Nothing here is read by the store. Derived views take the store by
//! reference and are recomputed on every call.

use client_core::EmployeeStore;
use shared::{
    domain::{Department, EmployeeId, EmployeeStatus, Selection},
    error::{StoreError, UnknownVariant},
    protocol::{EmployeeDraft, EmployeePatch, EmployeeRecord},
};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalMode {
    #[default]
    None,
    Create,
    Edit,
    View,
    Delete,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub department: Selection<Department>,
    pub status: Selection<EmployeeStatus>,
}

impl FilterState {
    /// Free-text query, then department, then status; all must pass.
    pub fn matches(&self, record: &EmployeeRecord) -> bool {
        matches_query(record, &self.query.to_lowercase())
            && self.department.admits(record.department)
            && self.status.admits(record.status)
    }
}

fn matches_query(record: &EmployeeRecord, lowered_query: &str) -> bool {
    if lowered_query.is_empty() {
        return true;
    }
    record.firstname.to_lowercase().contains(lowered_query)
        || record.lastname.to_lowercase().contains(lowered_query)
        || record.email.to_lowercase().contains(lowered_query)
        || record
            .department
            .is_some_and(|d| d.as_str().to_lowercase().contains(lowered_query))
}

pub fn filter_employees<'a>(
    employees: &'a [EmployeeRecord],
    filters: &FilterState,
) -> Vec<&'a EmployeeRecord> {
    employees.iter().filter(|e| filters.matches(e)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Firstname,
    Lastname,
    Email,
    Phone,
    Birthday,
    Gender,
    Department,
    Position,
    Status,
    City,
    Country,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(EmployeeRecord),
    Updated(EmployeeId),
    Missing(EmployeeId),
    Ignored,
}

#[derive(Debug, Default)]
pub struct ViewCoordinator {
    filters: FilterState,
    mode: ModalMode,
    selected: Option<EmployeeRecord>,
    draft: EmployeeDraft,
}

impl ViewCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filters.query = query.into();
    }

    pub fn set_department_filter(&mut self, department: Selection<Department>) {
        self.filters.department = department;
    }

    pub fn set_status_filter(&mut self, status: Selection<EmployeeStatus>) {
        self.filters.status = status;
    }

    pub fn filtered_employees<'a>(&self, store: &'a EmployeeStore) -> Vec<&'a EmployeeRecord> {
        filter_employees(store.employees(), &self.filters)
    }

    pub fn mode(&self) -> ModalMode {
        self.mode
    }

    pub fn selected(&self) -> Option<&EmployeeRecord> {
        self.selected.as_ref()
    }

    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    pub fn open_create(&mut self) {
        self.draft = EmployeeDraft::default();
        self.mode = ModalMode::Create;
    }

    pub fn open_edit(&mut self, record: &EmployeeRecord) {
        self.draft = EmployeeDraft::from_record(record);
        self.selected = Some(record.clone());
        self.mode = ModalMode::Edit;
    }

    pub fn open_view(&mut self, record: &EmployeeRecord) {
        self.selected = Some(record.clone());
        self.mode = ModalMode::View;
    }

    pub fn open_delete(&mut self, record: &EmployeeRecord) {
        self.selected = Some(record.clone());
        self.mode = ModalMode::Delete;
    }

    pub fn close(&mut self) {
        self.mode = ModalMode::None;
        self.selected = None;
        self.draft = EmployeeDraft::default();
    }

    /// Replaces one draft field. Enumerated fields must carry one of their
    /// labels; on a bad label the draft is left as it was.
    pub fn update_draft_field(
        &mut self,
        field: DraftField,
        value: &str,
    ) -> Result<(), UnknownVariant> {
        let draft = &mut self.draft;
        match field {
            DraftField::Firstname => draft.firstname = value.to_string(),
            DraftField::Lastname => draft.lastname = value.to_string(),
            DraftField::Email => draft.email = value.to_string(),
            DraftField::Phone => draft.phone = value.to_string(),
            DraftField::Birthday => draft.birthday = value.to_string(),
            DraftField::Gender => draft.gender = value.parse()?,
            DraftField::Department => draft.department = value.parse()?,
            DraftField::Position => draft.position = value.parse()?,
            DraftField::Status => draft.status = value.parse()?,
            DraftField::City => draft.city = value.to_string(),
            DraftField::Country => draft.country = value.to_string(),
        }
        Ok(())
    }

    /// Commits the draft for create/edit modals, then closes.
    pub fn submit(&mut self, store: &mut EmployeeStore) -> SubmitOutcome {
        let outcome = match (self.mode, self.selected.as_ref()) {
            (ModalMode::Create, _) => SubmitOutcome::Created(store.create(self.draft.clone())),
            (ModalMode::Edit, Some(record)) => {
                let id = record.id;
                match store.update(id, EmployeePatch::from(self.draft.clone())) {
                    Ok(()) => SubmitOutcome::Updated(id),
                    Err(StoreError::NotFound(id)) => {
                        warn!(employee_id = %id, "edited employee no longer exists");
                        SubmitOutcome::Missing(id)
                    }
                }
            }
            (mode, _) => {
                debug!(?mode, "submit without a form modal");
                SubmitOutcome::Ignored
            }
        };
        self.close();
        outcome
    }

    /// Deletes the selected record, if any. Always closes the modal.
    pub fn confirm_delete(&mut self, store: &mut EmployeeStore) -> bool {
        let removed = self
            .selected
            .as_ref()
            .is_some_and(|record| store.delete(record.id));
        self.close();
        removed
    }

    /// Row-level status change. An open modal showing the same record sees
    /// the new status too.
    pub fn update_status(
        &mut self,
        store: &mut EmployeeStore,
        record: &EmployeeRecord,
        status: EmployeeStatus,
    ) -> Result<(), StoreError> {
        store.update_status(record.id, status)?;
        if let Some(selected) = self.selected.as_mut().filter(|s| s.id == record.id) {
            selected.status = Some(status);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/coordinator_tests.rs"]
mod tests;
