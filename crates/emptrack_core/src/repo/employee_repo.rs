//! Employee repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist employees and read them back in insertion order.
//! - Eager-load employees together with their assignments and projects in a
//!   single join query.
//!
//! # Invariants
//! - `load_with_assignments` returns every employee, including those without
//!   assignments, and keeps assignments in insertion order.

use super::{count_rows, optional_uuid_column, row_exists, uuid_column, RepoError, RepoResult};
use crate::model::employee::{Employee, EmployeeId};
use crate::model::project::{Project, ProjectAssignment};
use rusqlite::{params, Connection, Row};

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    uuid,
    name,
    salary,
    performance_rating,
    hire_date,
    department_uuid
FROM employees";

const EMPLOYEE_WITH_ASSIGNMENTS_SQL: &str = "SELECT
    e.uuid AS uuid,
    e.name AS name,
    e.salary AS salary,
    e.performance_rating AS performance_rating,
    e.hire_date AS hire_date,
    e.department_uuid AS department_uuid,
    ep.project_uuid AS assigned_project_uuid,
    p.uuid AS project_uuid,
    p.name AS project_name,
    p.budget AS project_budget,
    p.deadline AS project_deadline
FROM employees e
LEFT JOIN employee_projects ep ON ep.employee_uuid = e.uuid
LEFT JOIN projects p ON p.uuid = ep.project_uuid
ORDER BY e.rowid ASC, ep.rowid ASC;";

/// Repository interface for employees.
pub trait EmployeeRepository {
    /// Persists the employee row. `assignments` are ignored.
    fn create_employee(&self, employee: &Employee) -> RepoResult<EmployeeId>;
    /// Lists employees without assignments, in insertion order.
    fn list_employees(&self) -> RepoResult<Vec<Employee>>;
    fn count_employees(&self) -> RepoResult<u64>;
    /// Lists employees with their assignments and linked projects populated.
    fn load_with_assignments(&self) -> RepoResult<Vec<Employee>>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn create_employee(&self, employee: &Employee) -> RepoResult<EmployeeId> {
        employee.validate()?;
        if !row_exists(self.conn, "departments", employee.department_id)? {
            return Err(RepoError::NotFound {
                entity: "department",
                id: employee.department_id,
            });
        }

        self.conn.execute(
            "INSERT INTO employees (
                uuid,
                name,
                salary,
                performance_rating,
                hire_date,
                department_uuid
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                employee.id.to_string(),
                employee.name.as_str(),
                employee.salary,
                employee.performance_rating,
                employee.hire_date,
                employee.department_id.to_string(),
            ],
        )?;

        Ok(employee.id)
    }

    fn list_employees(&self) -> RepoResult<Vec<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();

        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }

        Ok(employees)
    }

    fn count_employees(&self) -> RepoResult<u64> {
        count_rows(self.conn, "employees")
    }

    fn load_with_assignments(&self) -> RepoResult<Vec<Employee>> {
        let mut stmt = self.conn.prepare(EMPLOYEE_WITH_ASSIGNMENTS_SQL)?;
        let mut rows = stmt.query([])?;
        let mut employees: Vec<Employee> = Vec::new();

        while let Some(row) = rows.next()? {
            let employee_id = uuid_column(row, "uuid")?;
            // Rows arrive grouped by employee; start a new record on id change.
            let continues_last = employees.last().is_some_and(|last| last.id == employee_id);
            if !continues_last {
                employees.push(parse_employee_row(row)?);
            }

            if let Some(assignment) = parse_assignment_columns(row, employee_id)? {
                if let Some(employee) = employees.last_mut() {
                    employee.assignments.push(assignment);
                }
            }
        }

        Ok(employees)
    }
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    Ok(Employee {
        id: uuid_column(row, "uuid")?,
        name: row.get("name")?,
        salary: row.get("salary")?,
        performance_rating: row.get("performance_rating")?,
        hire_date: row.get("hire_date")?,
        department_id: uuid_column(row, "department_uuid")?,
        assignments: Vec::new(),
    })
}

fn parse_assignment_columns(
    row: &Row<'_>,
    employee_id: EmployeeId,
) -> RepoResult<Option<ProjectAssignment>> {
    let Some(project_id) = optional_uuid_column(row, "assigned_project_uuid")? else {
        return Ok(None);
    };

    let project = match optional_uuid_column(row, "project_uuid")? {
        Some(id) => Some(Project {
            id,
            name: row.get("project_name")?,
            budget: row.get("project_budget")?,
            deadline: row.get("project_deadline")?,
        }),
        None => None,
    };

    Ok(Some(ProjectAssignment {
        employee_id,
        project_id,
        project,
    }))
}
