//! Read-only aggregate queries for staffing reports.
//!
//! # Responsibility
//! - Read per-employee bonuses from the `employee_bonuses` view.
//! - Sum salaries and project budgets.

use super::{uuid_column, RepoResult};
use crate::model::employee::EmployeeId;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

/// Share of salary paid per rating point.
pub const BONUS_RATE_PER_RATING_POINT: f64 = 0.05;

/// Bonus line for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeBonus {
    pub id: EmployeeId,
    pub name: String,
    pub salary: f64,
    pub performance_rating: f64,
    /// `salary * performance_rating * 0.05`.
    pub bonus: f64,
}

/// Organisation-wide money totals. Empty tables sum to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub total_salary: f64,
    pub total_budget: f64,
}

/// Repository interface for report queries.
pub trait ReportRepository {
    fn employee_bonuses(&self) -> RepoResult<Vec<EmployeeBonus>>;
    fn totals(&self) -> RepoResult<Totals>;
}

/// SQLite-backed report queries.
pub struct SqliteReportRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteReportRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ReportRepository for SqliteReportRepository<'_> {
    fn employee_bonuses(&self) -> RepoResult<Vec<EmployeeBonus>> {
        let mut stmt = self.conn.prepare(
            "SELECT uuid, name, salary, performance_rating, bonus
             FROM employee_bonuses
             ORDER BY seq ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut bonuses = Vec::new();

        while let Some(row) = rows.next()? {
            bonuses.push(EmployeeBonus {
                id: uuid_column(row, "uuid")?,
                name: row.get("name")?,
                salary: row.get("salary")?,
                performance_rating: row.get("performance_rating")?,
                bonus: row.get("bonus")?,
            });
        }

        Ok(bonuses)
    }

    fn totals(&self) -> RepoResult<Totals> {
        let totals = self.conn.query_row(
            "SELECT
                (SELECT COALESCE(SUM(salary), 0.0) FROM employees) AS total_salary,
                (SELECT COALESCE(SUM(budget), 0.0) FROM projects) AS total_budget;",
            [],
            |row| {
                Ok(Totals {
                    total_salary: row.get("total_salary")?,
                    total_budget: row.get("total_budget")?,
                })
            },
        )?;
        Ok(totals)
    }
}
