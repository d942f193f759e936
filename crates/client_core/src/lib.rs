use std::{
    collections::{BTreeMap, HashSet},
    sync::Arc,
};

use chrono::{NaiveDate, Utc};
use shared::{
    domain::{Department, EmployeeId, EmployeeStatus, Selection},
    error::{ProviderError, StoreError, LOAD_FAILURE_MESSAGE},
    protocol::{
        Address, EmployeeDraft, EmployeePatch, EmployeeRecord, HrMetrics, UNASSIGNED_DEPARTMENT,
    },
};
use tracing::{debug, error, info, warn};

pub mod avatar;
pub mod enrichment;
pub mod provider;

pub use avatar::{avatar_seed, AvatarGenerator, DiceBearAvatars};
pub use provider::{FakerApiProvider, MissingPersonsProvider, PersonsProvider};

pub const DEFAULT_BATCH_SIZE: usize = 15;
pub const DEFAULT_SALARY: u64 = 50_000;

/// Identifies one `begin_load` call. Only the most recent ticket may
/// complete a load, and only once; older or spent ones are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Canonical in-memory employee collection plus load status.
///
/// Collection order is display order: loaded batches keep the provider's
/// order and created records are prepended. Derived views (`metrics`,
/// `search`, the filters) are recomputed on every call.
pub struct EmployeeStore {
    employees: Vec<EmployeeRecord>,
    loading: bool,
    error: Option<String>,
    generation: u64,
    batch_size: usize,
    avatars: Arc<dyn AvatarGenerator>,
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::with_avatars(Arc::new(DiceBearAvatars::default()))
    }

    pub fn with_avatars(avatars: Arc<dyn AvatarGenerator>) -> Self {
        Self {
            employees: Vec::new(),
            loading: false,
            error: None,
            generation: 0,
            batch_size: DEFAULT_BATCH_SIZE,
            avatars,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn employees(&self) -> &[EmployeeRecord] {
        &self.employees
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn get(&self, id: EmployeeId) -> Option<&EmployeeRecord> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Fetches a fresh batch from `provider` and replaces the collection.
    ///
    /// Returns `false` when a newer load was started while this one was in
    /// flight and its response was therefore dropped.
    pub async fn load<P>(&mut self, provider: &P) -> bool
    where
        P: PersonsProvider + ?Sized,
    {
        let ticket = self.begin_load();
        let result = provider.fetch_persons(self.batch_size).await;
        self.complete_load(ticket, result)
    }

    /// Marks a load as in flight and returns the ticket its response must
    /// present to `complete_load`.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        info!(generation = self.generation, "loading employees");
        LoadTicket(self.generation)
    }

    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<EmployeeRecord>, ProviderError>,
    ) -> bool {
        if ticket.0 != self.generation {
            warn!(
                stale = ticket.0,
                current = self.generation,
                "discarding superseded employee batch"
            );
            return false;
        }
        if !self.loading {
            warn!(generation = ticket.0, "discarding batch for a finished load");
            return false;
        }

        match result {
            Ok(batch) => {
                let received = batch.len();
                let employees = dedupe_ids(enrichment::enrich(batch));
                if employees.len() != received {
                    warn!(
                        received,
                        kept = employees.len(),
                        "dropped records with duplicate ids"
                    );
                }
                info!(
                    generation = ticket.0,
                    count = employees.len(),
                    "employees loaded"
                );
                self.employees = employees;
            }
            Err(err) => {
                error!(generation = ticket.0, error = %err, "error fetching employees");
                self.error = Some(LOAD_FAILURE_MESSAGE.to_string());
                self.employees.clear();
            }
        }
        self.loading = false;
        true
    }

    /// Creates a record hired today (UTC) and puts it at the front.
    pub fn create(&mut self, draft: EmployeeDraft) -> EmployeeRecord {
        self.create_on(draft, Utc::now().date_naive())
    }

    pub fn create_on(&mut self, draft: EmployeeDraft, hire_date: NaiveDate) -> EmployeeRecord {
        let id = EmployeeId(self.next_id());
        let image = self
            .avatars
            .avatar_url(&avatar_seed(&draft.firstname, &draft.lastname));

        let record = EmployeeRecord {
            id,
            firstname: draft.firstname,
            lastname: draft.lastname,
            email: draft.email,
            phone: draft.phone,
            birthday: draft.birthday,
            gender: draft.gender,
            address: Address {
                id: id.0,
                city: draft.city,
                country: draft.country,
                ..Address::default()
            },
            website: String::new(),
            image,
            department: Some(draft.department),
            position: Some(draft.position),
            status: Some(draft.status),
            hire_date: Some(hire_date.format("%Y-%m-%d").to_string()),
            salary: Some(DEFAULT_SALARY),
        };

        info!(employee_id = %id, "employee created");
        self.employees.insert(0, record.clone());
        record
    }

    /// Merges `patch` into the record with `id`.
    ///
    /// Empty `city`/`country` values leave the stored address untouched.
    pub fn update(&mut self, id: EmployeeId, patch: EmployeePatch) -> Result<(), StoreError> {
        let Some(record) = self.employees.iter_mut().find(|e| e.id == id) else {
            debug!(employee_id = %id, "update for unknown employee");
            return Err(StoreError::NotFound(id));
        };

        if let Some(v) = patch.firstname {
            record.firstname = v;
        }
        if let Some(v) = patch.lastname {
            record.lastname = v;
        }
        if let Some(v) = patch.email {
            record.email = v;
        }
        if let Some(v) = patch.phone {
            record.phone = v;
        }
        if let Some(v) = patch.birthday {
            record.birthday = v;
        }
        if let Some(v) = patch.gender {
            record.gender = v;
        }
        if let Some(v) = patch.department {
            record.department = Some(v);
        }
        if let Some(v) = patch.position {
            record.position = Some(v);
        }
        if let Some(v) = patch.status {
            record.status = Some(v);
        }
        if let Some(city) = patch.city.filter(|v| !v.is_empty()) {
            record.address.city = city;
        }
        if let Some(country) = patch.country.filter(|v| !v.is_empty()) {
            record.address.country = country;
        }

        info!(employee_id = %id, "employee updated");
        Ok(())
    }

    pub fn update_status(
        &mut self,
        id: EmployeeId,
        status: EmployeeStatus,
    ) -> Result<(), StoreError> {
        self.update(id, EmployeePatch::status(status))
    }

    /// Removes the record with `id`; returns whether one was removed.
    pub fn delete(&mut self, id: EmployeeId) -> bool {
        let Some(index) = self.employees.iter().position(|e| e.id == id) else {
            debug!(employee_id = %id, "delete for unknown employee");
            return false;
        };
        self.employees.remove(index);
        info!(employee_id = %id, "employee deleted");
        true
    }

    pub fn metrics(&self) -> HrMetrics {
        compute_metrics(&self.employees)
    }

    /// Case-insensitive match on first name, last name or email.
    pub fn search(&self, query: &str) -> Vec<&EmployeeRecord> {
        let needle = query.to_lowercase();
        self.employees
            .iter()
            .filter(|e| {
                e.firstname.to_lowercase().contains(&needle)
                    || e.lastname.to_lowercase().contains(&needle)
                    || e.email.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn filter_by_department(&self, selection: Selection<Department>) -> Vec<&EmployeeRecord> {
        self.employees
            .iter()
            .filter(|e| selection.admits(e.department))
            .collect()
    }

    pub fn filter_by_status(&self, selection: Selection<EmployeeStatus>) -> Vec<&EmployeeRecord> {
        self.employees
            .iter()
            .filter(|e| selection.admits(e.status))
            .collect()
    }

    /// One past the largest id, or the smallest free positive id once the
    /// largest is `i64::MAX`.
    fn next_id(&self) -> i64 {
        let max = self.employees.iter().map(|e| e.id.0).max().unwrap_or(0);
        if let Some(next) = max.checked_add(1) {
            return next;
        }

        let taken: HashSet<i64> = self.employees.iter().map(|e| e.id.0).collect();
        // Ids are unique, so 1..=len+1 holds at least one free value.
        let upper = i64::try_from(self.employees.len()).unwrap_or(i64::MAX - 1) + 1;
        (1..=upper)
            .find(|candidate| !taken.contains(candidate))
            .unwrap_or(upper)
    }
}

pub fn compute_metrics(employees: &[EmployeeRecord]) -> HrMetrics {
    let mut metrics = HrMetrics {
        total_employees: employees.len(),
        ..HrMetrics::default()
    };
    let mut breakdown: BTreeMap<String, usize> = BTreeMap::new();

    for employee in employees {
        match employee.status {
            Some(EmployeeStatus::Active) => metrics.active_employees += 1,
            Some(EmployeeStatus::OnLeave) => metrics.on_leave_employees += 1,
            Some(EmployeeStatus::Terminated) => metrics.terminated_employees += 1,
            None => {}
        }
        let key = employee
            .department
            .map(|d| d.as_str())
            .unwrap_or(UNASSIGNED_DEPARTMENT);
        *breakdown.entry(key.to_string()).or_default() += 1;
    }

    metrics.department_breakdown = breakdown;
    metrics
}

fn dedupe_ids(employees: Vec<EmployeeRecord>) -> Vec<EmployeeRecord> {
    let mut seen = HashSet::new();
    employees
        .into_iter()
        .filter(|e| seen.insert(e.id))
        .collect()
}

#[cfg(test)]
#[path = "tests/fixtures.rs"]
pub(crate) mod test_fixtures;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
