use crate::model::{Company, CompanyRelation, CompanyResponse, Response};
use crate::store::traits::Store;
use anyhow::Result;
use serde_json::{json, Value};

/// Builds acyclic responses from company and employee rows.
///
/// Every shape selects scalar fields and follows the relationship forward only
/// (company -> employees), so no output record can reach back to its parent.
pub struct ResponseShaper;

impl ResponseShaper {
    async fn load<S: Store>(store: &S) -> Result<(Vec<Company>, CompanyRelation)> {
        let companies = store.list_companies().await?;
        let relation = CompanyRelation::build(store.list_employees().await?);
        Ok((companies, relation))
    }

    /// Ad-hoc records, returned as a bare array
    pub async fn projection_anon<S: Store>(store: &S) -> Result<Vec<Value>> {
        let (companies, relation) = Self::load(store).await?;

        Ok(companies
            .into_iter()
            .map(|company| {
                let employees: Vec<Value> = relation
                    .employees_of(company.id)
                    .iter()
                    .map(|employee| json!({ "id": employee.id, "name": employee.name }))
                    .collect();

                json!({
                    "id": company.id,
                    "name": company.name,
                    "employees": employees,
                })
            })
            .collect())
    }

    /// The same ad-hoc records, nested under `results`
    pub async fn projection_anon_wrapper<S: Store>(store: &S) -> Result<Value> {
        let results = Self::projection_anon(store).await?;
        Ok(json!({ "results": results }))
    }

    /// Declared response types inside the generic envelope
    pub async fn projection_type_wrapper<S: Store>(
        store: &S,
    ) -> Result<Response<CompanyResponse>> {
        let (companies, relation) = Self::load(store).await?;

        let results = companies
            .into_iter()
            .map(|company| {
                let employees = relation.employees_of(company.id);
                CompanyResponse::new(company, employees)
            })
            .collect();

        Ok(Response::new(Some(results)))
    }
}
