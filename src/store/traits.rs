use crate::model::{Company, Employee};
use anyhow::Result;

/// Read access to companies, plus the insert used for seeding
#[async_trait::async_trait]
pub trait CompanyStore: Send + Sync {
    /// List companies in the order the store yields them
    async fn list_companies(&self) -> Result<Vec<Company>>;
    /// Insert a company unless one with the same id already exists
    async fn insert_company_if_missing(&self, company: Company) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait EmployeeStore: Send + Sync {
    /// List employees in the order the store yields them
    async fn list_employees(&self) -> Result<Vec<Employee>>;
    /// Insert an employee unless one with the same id already exists
    async fn insert_employee_if_missing(&self, employee: Employee) -> Result<bool>;
}

pub trait Store: CompanyStore + EmployeeStore + Send + Sync {}
