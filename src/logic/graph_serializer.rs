use crate::model::{CompanyEntity, EmployeeEntity};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("A possible object cycle was detected. Path: {path}")]
    CycleDetected { path: String },
}

/// Writes an entity graph as a JSON tree by following every navigation
/// property, including back-references.
///
/// A tree cannot hold a cycle, so revisiting an entity that is already on the
/// current path is an error rather than an endless expansion.
#[derive(Debug, Default)]
pub struct GraphSerializer {
    on_path: HashSet<usize>,
}

impl GraphSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_value(companies: &[Arc<CompanyEntity>]) -> Result<Value, GraphError> {
        let mut serializer = Self::new();
        let mut items = Vec::with_capacity(companies.len());
        for (index, company) in companies.iter().enumerate() {
            items.push(serializer.company(company, format!("$[{}]", index))?);
        }
        Ok(Value::Array(items))
    }

    fn company(&mut self, company: &Arc<CompanyEntity>, path: String) -> Result<Value, GraphError> {
        let key = Arc::as_ptr(company) as usize;
        if !self.on_path.insert(key) {
            return Err(GraphError::CycleDetected { path });
        }

        let employees = match &company.employees {
            None => Value::Null,
            Some(employees) => {
                let mut items = Vec::with_capacity(employees.len());
                for (index, employee) in employees.iter().enumerate() {
                    items.push(self.employee(employee, format!("{}.employees[{}]", path, index))?);
                }
                Value::Array(items)
            }
        };

        self.on_path.remove(&key);

        Ok(json!({
            "id": company.id,
            "name": company.name,
            "employees": employees,
        }))
    }

    fn employee(&mut self, employee: &EmployeeEntity, path: String) -> Result<Value, GraphError> {
        let company = match employee.company() {
            Some(company) => self.company(&company, format!("{}.company", path))?,
            None => Value::Null,
        };

        Ok(json!({
            "id": employee.id,
            "name": employee.name,
            "companyId": employee.company_id,
            "company": company,
        }))
    }
}
