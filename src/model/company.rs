use serde::{Deserialize, Serialize};

pub type Id = i64;

/// A row of the `companies` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: Id,
    pub name: String,
}

impl Company {
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A row of the `employees` table. `company_id` points at the owning company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Id,
    pub name: String,
    pub company_id: Id,
}

impl Employee {
    pub fn new(id: Id, name: impl Into<String>, company_id: Id) -> Self {
        Self {
            id,
            name: name.into(),
            company_id,
        }
    }
}
