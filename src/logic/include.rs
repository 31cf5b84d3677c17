use crate::model::{CompanyEntity, CompanyRelation};
use crate::store::traits::Store;
use anyhow::Result;
use std::sync::Arc;

/// Materializes companies as entities, the way an ORM query with or without
/// an eager include would.
pub struct GraphLoader;

impl GraphLoader {
    /// Companies only; the employees collection stays unloaded
    #[cfg(test)]
    pub async fn load_companies<S: Store>(store: &S) -> Result<Vec<Arc<CompanyEntity>>> {
        let companies = store.list_companies().await?;
        Ok(companies.into_iter().map(CompanyEntity::detached).collect())
    }

    /// Companies with their employees eagerly loaded. Every employee keeps a
    /// back-reference to its company, so the result is a cyclic graph.
    pub async fn load_companies_with_employees<S: Store>(
        store: &S,
    ) -> Result<Vec<Arc<CompanyEntity>>> {
        let companies = store.list_companies().await?;
        let mut relation = CompanyRelation::build(store.list_employees().await?);

        let entities: Vec<_> = companies
            .into_iter()
            .map(|company| {
                let employees = relation.take_employees(company.id);
                CompanyEntity::with_employees(company, employees)
            })
            .collect();

        let attached: usize = entities.iter().map(|company| company.employees().len()).sum();
        let unattached = relation.employee_count() - attached;
        if unattached > 0 {
            log::warn!("{} employees reference a company that was not loaded", unattached);
        }

        Ok(entities)
    }
}
