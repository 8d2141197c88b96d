//! In-memory implementations of the repository ports
//!
//! Both repositories can share one `InMemoryStore`, which keeps company rows
//! and employee rows apart and links them through `company_id`, as the
//! database does. Each repository counts its own calls so tests can verify
//! that nothing was persisted.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Company, CompanyId, Employee, EmployeeId};
use crate::domain::ports::{EmployeeRepository, Page, PageRequest, Repository};
use crate::error::DomainError;

// ============================================================================
// Call bookkeeping
// ============================================================================

#[derive(Default)]
struct CallLog {
    finds: AtomicUsize,
    saves: AtomicUsize,
    deletes: AtomicUsize,
    pages: RwLock<Vec<PageRequest>>,
}

impl CallLog {
    fn finds(&self) -> usize {
        self.finds.load(Ordering::SeqCst)
    }

    fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    fn pages(&self) -> Vec<PageRequest> {
        self.pages.read().unwrap().clone()
    }
}

struct IdSequence(AtomicI32);

impl Default for IdSequence {
    fn default() -> Self {
        Self(AtomicI32::new(1))
    }
}

impl IdSequence {
    fn next(&self) -> i32 {
        self.0.fetch_add(1, Ordering::SeqCst)
    }

    /// Make sure freshly assigned IDs never collide with `seen`
    fn observe(&self, seen: i32) {
        self.0.fetch_max(seen + 1, Ordering::SeqCst);
    }
}

fn unavailable() -> DomainError {
    DomainError::Database("connection refused".to_string())
}

fn page_of<T: Clone>(rows: &[T], request: PageRequest) -> Page<T> {
    let content = rows
        .iter()
        .skip(request.offset() as usize)
        .take(request.size() as usize)
        .cloned()
        .collect();
    Page::new(content, request, rows.len() as u64)
}

// ============================================================================
// Shared store
// ============================================================================

#[derive(Clone)]
struct CompanyRow {
    company_name: String,
    employees_number: i32,
}

/// Company and employee tables shared by the in-memory repositories
#[derive(Default)]
pub struct InMemoryStore {
    companies: RwLock<BTreeMap<CompanyId, CompanyRow>>,
    employees: RwLock<BTreeMap<EmployeeId, Employee>>,
    company_ids: IdSequence,
    employee_ids: IdSequence,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn seed_company(&self, company: Company) {
        let id = company.id.expect("seeded company needs an id");
        self.company_ids.observe(id.0);
        self.companies.write().unwrap().insert(
            id,
            CompanyRow {
                company_name: company.company_name,
                employees_number: company.employees_number,
            },
        );
        for employee in company.employees {
            self.seed_employee(Employee {
                company_id: Some(id),
                ..employee
            });
        }
    }

    fn seed_employee(&self, employee: Employee) {
        let id = employee.id.expect("seeded employee needs an id");
        self.employee_ids.observe(id.0);
        self.employees.write().unwrap().insert(id, employee);
    }

    /// Join a company row with the employees pointing at it
    fn assemble(&self, id: CompanyId, row: CompanyRow) -> Company {
        let employees = self
            .employees
            .read()
            .unwrap()
            .values()
            .filter(|e| e.company_id == Some(id))
            .cloned()
            .collect();
        Company {
            id: Some(id),
            company_name: row.company_name,
            employees_number: row.employees_number,
            employees,
        }
    }

    fn all_companies(&self) -> Vec<Company> {
        let rows: Vec<(CompanyId, CompanyRow)> = self
            .companies
            .read()
            .unwrap()
            .iter()
            .map(|(id, row)| (*id, row.clone()))
            .collect();
        rows.into_iter()
            .map(|(id, row)| self.assemble(id, row))
            .collect()
    }

    /// Insert or update one employee row, assigning an ID when it is new
    fn upsert_employee(&self, employee: &Employee) -> Employee {
        let mut employees = self.employees.write().unwrap();
        let id = match employee.id {
            Some(id) if employees.contains_key(&id) => id,
            _ => EmployeeId(self.employee_ids.next()),
        };
        let stored = Employee {
            id: Some(id),
            ..employee.clone()
        };
        employees.insert(id, stored.clone());
        stored
    }

    /// Clear `company_id` on rows of `company` whose ID is not in `kept`
    fn detach_staff(&self, company: CompanyId, kept: &[EmployeeId]) {
        for employee in self.employees.write().unwrap().values_mut() {
            let listed = employee.id.is_some_and(|id| kept.contains(&id));
            if employee.company_id == Some(company) && !listed {
                employee.company_id = None;
            }
        }
    }
}

// ============================================================================
// In-Memory Company Repository
// ============================================================================

pub struct InMemoryCompanyRepository {
    store: Arc<InMemoryStore>,
    calls: CallLog,
    failing: bool,
}

impl Default for InMemoryCompanyRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCompanyRepository {
    /// A repository over a private store
    pub fn new() -> Self {
        Self::sharing(InMemoryStore::new())
    }

    /// A repository over `store`, which other repositories may also use
    pub fn sharing(store: Arc<InMemoryStore>) -> Self {
        Self {
            store,
            calls: CallLog::default(),
            failing: false,
        }
    }

    /// Every operation fails with a database error
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    /// Pre-populate with a company and its staff. The company and every
    /// employee must carry an ID.
    pub fn with_company(self, company: Company) -> Self {
        self.store.seed_company(company);
        self
    }

    pub fn find_calls(&self) -> usize {
        self.calls.finds()
    }

    pub fn save_calls(&self) -> usize {
        self.calls.saves()
    }

    pub fn delete_calls(&self) -> usize {
        self.calls.deletes()
    }

    pub fn page_requests(&self) -> Vec<PageRequest> {
        self.calls.pages()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.failing {
            Err(unavailable())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Repository<Company> for InMemoryCompanyRepository {
    async fn find_by_id(&self, id: CompanyId) -> Result<Option<Company>, DomainError> {
        self.check()?;
        self.calls.finds.fetch_add(1, Ordering::SeqCst);
        let row = self.store.companies.read().unwrap().get(&id).cloned();
        Ok(row.map(|row| self.store.assemble(id, row)))
    }

    async fn find_all(&self) -> Result<Vec<Company>, DomainError> {
        self.check()?;
        Ok(self.store.all_companies())
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Company>, DomainError> {
        self.check()?;
        self.calls.pages.write().unwrap().push(request);
        Ok(page_of(&self.store.all_companies(), request))
    }

    async fn save(&self, company: &Company) -> Result<Company, DomainError> {
        self.check()?;
        self.calls.saves.fetch_add(1, Ordering::SeqCst);

        let row = CompanyRow {
            company_name: company.company_name.clone(),
            employees_number: company.employees_number,
        };
        let id = {
            let mut companies = self.store.companies.write().unwrap();
            let id = match company.id {
                Some(id) if companies.contains_key(&id) => id,
                _ => CompanyId(self.store.company_ids.next()),
            };
            companies.insert(id, row.clone());
            id
        };

        let staff: Vec<Employee> = company
            .employees
            .iter()
            .map(|employee| {
                self.store.upsert_employee(&Employee {
                    company_id: Some(id),
                    ..employee.clone()
                })
            })
            .collect();
        let kept: Vec<EmployeeId> = staff.iter().filter_map(|e| e.id).collect();
        self.store.detach_staff(id, &kept);

        Ok(Company {
            id: Some(id),
            company_name: row.company_name,
            employees_number: row.employees_number,
            employees: staff,
        })
    }

    /// Staff stay behind with their company link cleared
    async fn delete(&self, id: CompanyId) -> Result<(), DomainError> {
        self.check()?;
        self.calls.deletes.fetch_add(1, Ordering::SeqCst);
        self.store.companies.write().unwrap().remove(&id);
        self.store.detach_staff(id, &[]);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        self.check()?;
        self.calls.deletes.fetch_add(1, Ordering::SeqCst);
        self.store.companies.write().unwrap().clear();
        for employee in self.store.employees.write().unwrap().values_mut() {
            employee.company_id = None;
        }
        Ok(())
    }
}

// ============================================================================
// In-Memory Employee Repository
// ============================================================================

pub struct InMemoryEmployeeRepository {
    store: Arc<InMemoryStore>,
    calls: CallLog,
    failing: bool,
}

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEmployeeRepository {
    /// A repository over a private store
    pub fn new() -> Self {
        Self::sharing(InMemoryStore::new())
    }

    /// A repository over `store`, which other repositories may also use
    pub fn sharing(store: Arc<InMemoryStore>) -> Self {
        Self {
            store,
            calls: CallLog::default(),
            failing: false,
        }
    }

    /// Every operation fails with a database error
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    /// Pre-populate with an employee for testing. The employee must carry an ID.
    pub fn with_employee(self, employee: Employee) -> Self {
        self.store.seed_employee(employee);
        self
    }

    pub fn with_employees(self, employees: Vec<Employee>) -> Self {
        employees
            .into_iter()
            .fold(self, |repo, employee| repo.with_employee(employee))
    }

    pub fn find_calls(&self) -> usize {
        self.calls.finds()
    }

    pub fn save_calls(&self) -> usize {
        self.calls.saves()
    }

    pub fn delete_calls(&self) -> usize {
        self.calls.deletes()
    }

    pub fn page_requests(&self) -> Vec<PageRequest> {
        self.calls.pages()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.failing {
            Err(unavailable())
        } else {
            Ok(())
        }
    }

    fn rows(&self) -> Vec<Employee> {
        self.store.employees.read().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl Repository<Employee> for InMemoryEmployeeRepository {
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, DomainError> {
        self.check()?;
        self.calls.finds.fetch_add(1, Ordering::SeqCst);
        Ok(self.store.employees.read().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        self.check()?;
        Ok(self.rows())
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Employee>, DomainError> {
        self.check()?;
        self.calls.pages.write().unwrap().push(request);
        Ok(page_of(&self.rows(), request))
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, DomainError> {
        self.check()?;
        self.calls.saves.fetch_add(1, Ordering::SeqCst);
        Ok(self.store.upsert_employee(employee))
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), DomainError> {
        self.check()?;
        self.calls.deletes.fetch_add(1, Ordering::SeqCst);
        self.store.employees.write().unwrap().remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        self.check()?;
        self.calls.deletes.fetch_add(1, Ordering::SeqCst);
        self.store.employees.write().unwrap().clear();
        Ok(())
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_gender(&self, gender: &str) -> Result<Vec<Employee>, DomainError> {
        self.check()?;
        Ok(self
            .rows()
            .into_iter()
            .filter(|e| e.gender == gender)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_company, test_company_with_staff, test_employee};

    #[tokio::test]
    async fn save_with_unknown_id_assigns_a_fresh_one() {
        let repo = InMemoryEmployeeRepository::new().with_employee(test_employee(3));

        let saved = repo.save(&test_employee(42)).await.unwrap();

        assert_eq!(saved.id, Some(EmployeeId(4)));
    }

    #[tokio::test]
    async fn save_with_known_id_updates_in_place() {
        let repo = InMemoryCompanyRepository::new().with_company(test_company(1, "OOCL"));

        let mut company = test_company(1, "TW");
        company.employees_number = 9;
        repo.save(&company).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].company_name, "TW");
    }

    #[tokio::test]
    async fn delete_all_empties_the_store() {
        let repo = InMemoryCompanyRepository::new()
            .with_company(test_company(1, "OOCL"))
            .with_company(test_company(2, "TW"));

        repo.delete_all().await.unwrap();

        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failing_repository_errors() {
        let repo = InMemoryEmployeeRepository::failing();
        assert!(repo.find_by_gender("male").await.is_err());
        assert!(repo.delete(EmployeeId(1)).await.is_err());
    }

    #[tokio::test]
    async fn employee_saved_with_company_id_joins_its_staff() {
        let store = InMemoryStore::new();
        let companies =
            InMemoryCompanyRepository::sharing(store.clone()).with_company(test_company(1, "OOCL"));
        let employees = InMemoryEmployeeRepository::sharing(store);

        let hired = employees
            .save(&Employee {
                id: None,
                ..test_employee(0)
            })
            .await
            .unwrap();

        let company = companies.find_by_id(CompanyId(1)).await.unwrap().unwrap();
        assert_eq!(company.employees, vec![hired]);
    }

    #[tokio::test]
    async fn company_save_detaches_unlisted_staff() {
        let store = InMemoryStore::new();
        let companies = InMemoryCompanyRepository::sharing(store.clone())
            .with_company(test_company_with_staff(1, "OOCL"));
        let employees = InMemoryEmployeeRepository::sharing(store);

        companies.save(&test_company(1, "OOCL")).await.unwrap();

        let former = employees.find_by_id(EmployeeId(1)).await.unwrap().unwrap();
        assert_eq!(former.company_id, None);
        let company = companies.find_by_id(CompanyId(1)).await.unwrap().unwrap();
        assert!(company.employees.is_empty());
    }

    #[tokio::test]
    async fn company_delete_keeps_staff_without_company() {
        let store = InMemoryStore::new();
        let companies = InMemoryCompanyRepository::sharing(store.clone())
            .with_company(test_company_with_staff(2, "TW"));
        let employees = InMemoryEmployeeRepository::sharing(store);

        companies.delete(CompanyId(2)).await.unwrap();

        let remaining = employees.find_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].company_id, None);
    }
}
