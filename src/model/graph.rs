use crate::model::{Company, Employee, Id};
use std::sync::{Arc, Weak};

/// A company as an in-memory entity, the way an ORM materializes it.
///
/// `employees` is `None` when the collection was not loaded.
#[derive(Debug)]
pub struct CompanyEntity {
    pub id: Id,
    pub name: String,
    pub employees: Option<Vec<EmployeeEntity>>,
}

/// An employee entity with a navigable back-reference to its company
#[derive(Debug)]
pub struct EmployeeEntity {
    pub id: Id,
    pub name: String,
    pub company_id: Id,
    pub company: Weak<CompanyEntity>,
}

impl CompanyEntity {
    /// Company without its employees collection loaded
    pub fn detached(company: Company) -> Arc<Self> {
        Arc::new(Self {
            id: company.id,
            name: company.name,
            employees: None,
        })
    }

    /// Company with its employees loaded, each pointing back at the company
    pub fn with_employees(company: Company, employees: Vec<Employee>) -> Arc<Self> {
        Arc::new_cyclic(|this| Self {
            id: company.id,
            name: company.name,
            employees: Some(
                employees
                    .into_iter()
                    .map(|employee| EmployeeEntity {
                        id: employee.id,
                        name: employee.name,
                        company_id: employee.company_id,
                        company: this.clone(),
                    })
                    .collect(),
            ),
        })
    }

    pub fn employees(&self) -> &[EmployeeEntity] {
        self.employees.as_deref().unwrap_or_default()
    }
}

impl EmployeeEntity {
    /// Follow the back-reference; `None` once the company has been dropped
    pub fn company(&self) -> Option<Arc<CompanyEntity>> {
        self.company.upgrade()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_reference_points_at_owner() {
        let company = CompanyEntity::with_employees(
            Company::new(1, "JetBrains"),
            vec![Employee::new(1, "Khalid Abuhakmeh", 1)],
        );

        let employee = &company.employees()[0];
        let owner = employee.company().expect("company should be alive");
        assert!(Arc::ptr_eq(&owner, &company));
        assert_eq!(employee.company_id, owner.id);
    }

    #[test]
    fn test_detached_company_has_no_collection() {
        let company = CompanyEntity::detached(Company::new(7, "Acme"));

        assert!(company.employees.is_none());
        assert!(company.employees().is_empty());
    }

    #[test]
    fn test_back_reference_does_not_keep_company_alive() {
        let company = CompanyEntity::with_employees(
            Company::new(1, "JetBrains"),
            vec![Employee::new(1, "Khalid Abuhakmeh", 1)],
        );
        let weak = Arc::downgrade(&company);

        drop(company);
        assert!(weak.upgrade().is_none());
    }
}
