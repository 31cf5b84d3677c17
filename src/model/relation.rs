use crate::model::{Employee, Id};
use itertools::Itertools;
use std::collections::HashMap;

/// Acyclic view of the company/employee relationship.
///
/// The forward direction (company -> employees) is what responses are built
/// from. The reverse direction (employee -> company) is kept as a plain id
/// lookup and is never embedded in a returned record.
#[derive(Debug, Clone, Default)]
pub struct CompanyRelation {
    employees_by_company: HashMap<Id, Vec<Employee>>,
    company_by_employee: HashMap<Id, Id>,
}

impl CompanyRelation {
    /// Index employee rows by owning company, keeping the order the store yielded them in
    pub fn build(employees: Vec<Employee>) -> Self {
        let company_by_employee = employees
            .iter()
            .map(|employee| (employee.id, employee.company_id))
            .collect();
        let employees_by_company = employees
            .into_iter()
            .into_group_map_by(|employee| employee.company_id);

        Self {
            employees_by_company,
            company_by_employee,
        }
    }

    /// Employees owned by a company; empty when it has none
    pub fn employees_of(&self, company_id: Id) -> &[Employee] {
        self.employees_by_company
            .get(&company_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Move the employees of a company out of the index
    pub fn take_employees(&mut self, company_id: Id) -> Vec<Employee> {
        self.employees_by_company
            .remove(&company_id)
            .unwrap_or_default()
    }

    #[cfg(test)]
    pub fn company_of(&self, employee_id: Id) -> Option<Id> {
        self.company_by_employee.get(&employee_id).copied()
    }

    pub fn employee_count(&self) -> usize {
        self.company_by_employee.len()
    }
}
