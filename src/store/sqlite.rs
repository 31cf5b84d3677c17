use anyhow::{Context, Result};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Row, SqlitePool,
};
use std::str::FromStr;
use std::time::Duration;

use crate::model::{Company, Employee};
use crate::store::traits::{CompanyStore, EmployeeStore, Store};

const CREATE_COMPANIES: &str = r#"
    CREATE TABLE IF NOT EXISTS companies (
        id INTEGER PRIMARY KEY NOT NULL,
        name TEXT NOT NULL
    )
"#;

const CREATE_EMPLOYEES: &str = r#"
    CREATE TABLE IF NOT EXISTS employees (
        id INTEGER PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        company_id INTEGER NOT NULL REFERENCES companies (id) ON DELETE CASCADE
    )
"#;

const CREATE_EMPLOYEES_COMPANY_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS ix_employees_company_id ON employees (company_id)";

#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Create a new SQLite store with the given database URL
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid SQLite database URL: {}", database_url))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await
            .context("Failed to create SQLite connection pool")?;

        Ok(Self { pool })
    }

    /// Private in-memory database, alive as long as the store is.
    ///
    /// The in-memory database is dropped once its last connection closes, so
    /// the pool keeps one connection open and never lets it expire.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await
            .context("Failed to open in-memory SQLite database")?;

        Ok(Self { pool })
    }

    /// Create the tables if they do not exist yet
    pub async fn migrate(&self) -> Result<()> {
        for statement in [CREATE_COMPANIES, CREATE_EMPLOYEES, CREATE_EMPLOYEES_COMPANY_INDEX] {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .context("Failed to run database migrations")?;
        }
        log::debug!("SQLite schema is up to date");
        Ok(())
    }
}

#[async_trait::async_trait]
impl CompanyStore for SqliteStore {
    async fn list_companies(&self) -> Result<Vec<Company>> {
        let rows = sqlx::query("SELECT id, name FROM companies")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list companies")?;

        let companies = rows
            .into_iter()
            .map(|row| Company {
                id: row.get("id"),
                name: row.get("name"),
            })
            .collect();

        Ok(companies)
    }

    async fn insert_company_if_missing(&self, company: Company) -> Result<bool> {
        let result = sqlx::query("INSERT OR IGNORE INTO companies (id, name) VALUES (?, ?)")
            .bind(company.id)
            .bind(&company.name)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to insert company {}", company.id))?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait::async_trait]
impl EmployeeStore for SqliteStore {
    async fn list_employees(&self) -> Result<Vec<Employee>> {
        let rows = sqlx::query("SELECT id, name, company_id FROM employees")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list employees")?;

        let employees = rows
            .into_iter()
            .map(|row| Employee {
                id: row.get("id"),
                name: row.get("name"),
                company_id: row.get("company_id"),
            })
            .collect();

        Ok(employees)
    }

    async fn insert_employee_if_missing(&self, employee: Employee) -> Result<bool> {
        let result = sqlx::query(
            "INSERT OR IGNORE INTO employees (id, name, company_id) VALUES (?, ?, ?)",
        )
        .bind(employee.id)
        .bind(&employee.name)
        .bind(employee.company_id)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to insert employee {}", employee.id))?;

        Ok(result.rows_affected() > 0)
    }
}

impl Store for SqliteStore {}
