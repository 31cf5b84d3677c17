use crate::model::{Company, Employee};
use crate::store::traits::Store;
use anyhow::Result;

pub fn seed_companies() -> Vec<Company> {
    vec![Company::new(1, "JetBrains")]
}

pub fn seed_employees() -> Vec<Employee> {
    vec![Employee::new(1, "Khalid Abuhakmeh", 1)]
}

/// Insert the fixed demonstration rows. Rows that already exist are left alone,
/// so this is safe to run on every startup.
pub async fn load_seed_data<S: Store>(store: &S) -> Result<()> {
    let mut inserted = 0;

    for company in seed_companies() {
        if store.insert_company_if_missing(company).await? {
            inserted += 1;
        }
    }

    for employee in seed_employees() {
        if store.insert_employee_if_missing(employee).await? {
            inserted += 1;
        }
    }

    log::info!("Seed data applied ({} new rows)", inserted);
    Ok(())
}
