//! Employee/project assignment repository.
//!
//! # Invariants
//! - Both ends of an assignment must exist before the link is written.
//! - Listing order follows assignment insertion order.

use super::{count_rows, row_exists, RepoError, RepoResult};
use crate::model::employee::EmployeeId;
use crate::model::project::ProjectId;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

/// Flat read model joining one assignment with both names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRow {
    pub employee_name: String,
    pub project_name: String,
    /// Unix epoch milliseconds.
    pub deadline: Option<i64>,
}

/// Repository interface for employee/project links.
pub trait AssignmentRepository {
    /// Links an employee to a project.
    ///
    /// Returns `NotFound` when either end does not exist.
    fn assign(&self, employee_id: EmployeeId, project_id: ProjectId) -> RepoResult<()>;
    fn count_assignments(&self) -> RepoResult<u64>;
    fn list_assignment_rows(&self) -> RepoResult<Vec<AssignmentRow>>;
}

/// SQLite-backed assignment repository.
pub struct SqliteAssignmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAssignmentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AssignmentRepository for SqliteAssignmentRepository<'_> {
    fn assign(&self, employee_id: EmployeeId, project_id: ProjectId) -> RepoResult<()> {
        if !row_exists(self.conn, "employees", employee_id)? {
            return Err(RepoError::NotFound {
                entity: "employee",
                id: employee_id,
            });
        }
        if !row_exists(self.conn, "projects", project_id)? {
            return Err(RepoError::NotFound {
                entity: "project",
                id: project_id,
            });
        }

        self.conn.execute(
            "INSERT INTO employee_projects (employee_uuid, project_uuid) VALUES (?1, ?2);",
            params![employee_id.to_string(), project_id.to_string()],
        )?;

        Ok(())
    }

    fn count_assignments(&self) -> RepoResult<u64> {
        count_rows(self.conn, "employee_projects")
    }

    fn list_assignment_rows(&self) -> RepoResult<Vec<AssignmentRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                e.name AS employee_name,
                p.name AS project_name,
                p.deadline AS deadline
             FROM employees e
             JOIN employee_projects ep ON e.uuid = ep.employee_uuid
             JOIN projects p ON ep.project_uuid = p.uuid
             ORDER BY ep.rowid ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut result = Vec::new();

        while let Some(row) = rows.next()? {
            result.push(AssignmentRow {
                employee_name: row.get("employee_name")?,
                project_name: row.get("project_name")?,
                deadline: row.get("deadline")?,
            });
        }

        Ok(result)
    }
}
