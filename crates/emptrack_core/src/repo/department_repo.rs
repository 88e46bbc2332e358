//! Department repository contracts and SQLite implementation.

use super::{count_rows, uuid_column, RepoResult};
use crate::model::department::{Department, DepartmentId};
use rusqlite::{params, Connection, Row};

const DEPARTMENT_SELECT_SQL: &str = "SELECT uuid, name FROM departments";

/// Repository interface for departments.
pub trait DepartmentRepository {
    fn create_department(&self, department: &Department) -> RepoResult<DepartmentId>;
    fn get_department(&self, id: DepartmentId) -> RepoResult<Option<Department>>;
    fn list_departments(&self) -> RepoResult<Vec<Department>>;
    fn count_departments(&self) -> RepoResult<u64>;
}

/// SQLite-backed department repository.
pub struct SqliteDepartmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DepartmentRepository for SqliteDepartmentRepository<'_> {
    fn create_department(&self, department: &Department) -> RepoResult<DepartmentId> {
        department.validate()?;

        self.conn.execute(
            "INSERT INTO departments (uuid, name) VALUES (?1, ?2);",
            params![department.id.to_string(), department.name.as_str()],
        )?;

        Ok(department.id)
    }

    fn get_department(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_department_row(row)?));
        }

        Ok(None)
    }

    fn list_departments(&self) -> RepoResult<Vec<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut departments = Vec::new();

        while let Some(row) = rows.next()? {
            departments.push(parse_department_row(row)?);
        }

        Ok(departments)
    }

    fn count_departments(&self) -> RepoResult<u64> {
        count_rows(self.conn, "departments")
    }
}

fn parse_department_row(row: &Row<'_>) -> RepoResult<Department> {
    Ok(Department {
        id: uuid_column(row, "uuid")?,
        name: row.get("name")?,
    })
}
