use crate::model::{Company, Employee, Id};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: Id,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyResponse {
    pub id: Id,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub employees: Vec<EmployeeResponse>,
}

impl From<&Employee> for EmployeeResponse {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
        }
    }
}

impl CompanyResponse {
    pub fn new(company: Company, employees: &[Employee]) -> Self {
        Self {
            id: company.id,
            name: company.name,
            employees: employees.iter().map(EmployeeResponse::from).collect(),
        }
    }
}

/// Generic response envelope.
///
/// Wrapping results in an object leaves room for sibling metadata (counts,
/// cursors) without turning a top-level array into an object later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Response<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub results: Vec<T>,
}

impl<T> Response<T> {
    /// `None` results become an empty list
    pub fn new(results: Option<Vec<T>>) -> Self {
        Self {
            results: results.unwrap_or_default(),
        }
    }
}

impl<T> Default for Response<T> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<T> From<Vec<T>> for Response<T> {
    fn from(results: Vec<T>) -> Self {
        Self::new(Some(results))
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
