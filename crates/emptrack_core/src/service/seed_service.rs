//! Demo data seeding.
//!
//! # Responsibility
//! - Insert the demo department, employees, projects and assignments when
//!   the store has none of them.
//!
//! # Invariants
//! - Each seeding step checks for existing rows before inserting, so
//!   repeated runs never duplicate data.
//! - Assignments are only seeded when no assignment exists yet.

use crate::model::department::Department;
use crate::model::employee::Employee;
use crate::model::project::Project;
use crate::repo::assignment_repo::{AssignmentRepository, SqliteAssignmentRepository};
use crate::repo::department_repo::{DepartmentRepository, SqliteDepartmentRepository};
use crate::repo::employee_repo::{EmployeeRepository, SqliteEmployeeRepository};
use crate::repo::project_repo::{ProjectRepository, SqliteProjectRepository};
use crate::repo::RepoResult;
use chrono::{DateTime, Months, Utc};
use log::info;
use rusqlite::Connection;

pub const SEED_DEPARTMENT_NAME: &str = "Software Engineering";

/// (name, salary, performance rating)
pub const SEED_EMPLOYEES: [(&str, f64, f64); 3] = [
    ("Ali Ahmed", 5000.0, 4.2),
    ("Sara Khalid", 7000.0, 3.8),
    ("Mohammed Saeed", 5500.0, 4.5),
];

/// (name, budget, months until deadline)
pub const SEED_PROJECTS: [(&str, f64, u32); 3] = [
    ("AI Chatbot", 15000.0, 2),
    ("E-Commerce Platform", 30000.0, 4),
    ("HR Management System", 20000.0, 1),
];

/// (employee index, project index) pairs over insertion-ordered lists.
pub const SEED_ASSIGNMENTS: [(usize, usize); 6] =
    [(0, 0), (0, 1), (1, 1), (1, 2), (2, 2), (2, 0)];

/// Which seeding steps inserted rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    pub employees_seeded: bool,
    pub projects_seeded: bool,
    pub assignments_seeded: bool,
}

impl SeedOutcome {
    pub fn seeded_anything(&self) -> bool {
        self.employees_seeded || self.projects_seeded || self.assignments_seeded
    }
}

/// Seed-if-empty orchestration over the four staffing repositories.
pub struct SeedService<D, E, P, A> {
    departments: D,
    employees: E,
    projects: P,
    assignments: A,
}

impl<'conn>
    SeedService<
        SqliteDepartmentRepository<'conn>,
        SqliteEmployeeRepository<'conn>,
        SqliteProjectRepository<'conn>,
        SqliteAssignmentRepository<'conn>,
    >
{
    /// Builds a service over SQLite repositories sharing one connection.
    pub fn for_connection(conn: &'conn Connection) -> Self {
        Self::new(
            SqliteDepartmentRepository::new(conn),
            SqliteEmployeeRepository::new(conn),
            SqliteProjectRepository::new(conn),
            SqliteAssignmentRepository::new(conn),
        )
    }
}

impl<D, E, P, A> SeedService<D, E, P, A>
where
    D: DepartmentRepository,
    E: EmployeeRepository,
    P: ProjectRepository,
    A: AssignmentRepository,
{
    pub fn new(departments: D, employees: E, projects: P, assignments: A) -> Self {
        Self {
            departments,
            employees,
            projects,
            assignments,
        }
    }

    /// Seeds demo rows that are missing, using `now` for hire dates and
    /// deadlines.
    ///
    /// # Errors
    /// - Returns the first repository error; earlier steps stay committed.
    pub fn seed_if_empty(&self, now: DateTime<Utc>) -> RepoResult<SeedOutcome> {
        let mut outcome = SeedOutcome::default();

        if self.employees.count_employees()? == 0 {
            self.seed_employees(now)?;
            outcome.employees_seeded = true;
        }

        if self.projects.count_projects()? == 0 {
            self.seed_projects(now)?;
            outcome.projects_seeded = true;
        }

        if self.assignments.count_assignments()? == 0 {
            outcome.assignments_seeded = self.seed_assignments()?;
        }

        info!(
            "event=seed module=service status=ok employees_seeded={} projects_seeded={} assignments_seeded={}",
            outcome.employees_seeded, outcome.projects_seeded, outcome.assignments_seeded
        );
        Ok(outcome)
    }

    fn seed_employees(&self, now: DateTime<Utc>) -> RepoResult<()> {
        let department = Department::new(SEED_DEPARTMENT_NAME);
        self.departments.create_department(&department)?;

        for (name, salary, rating) in SEED_EMPLOYEES {
            let employee = Employee::new(
                name,
                salary,
                rating,
                now.timestamp_millis(),
                department.id,
            );
            self.employees.create_employee(&employee)?;
        }
        Ok(())
    }

    fn seed_projects(&self, now: DateTime<Utc>) -> RepoResult<()> {
        for (name, budget, months_ahead) in SEED_PROJECTS {
            let deadline = now
                .checked_add_months(Months::new(months_ahead))
                .map(|deadline| deadline.timestamp_millis());
            self.projects
                .create_project(&Project::new(name, budget, deadline))?;
        }
        Ok(())
    }

    /// Returns `false` when there is nothing to link yet.
    fn seed_assignments(&self) -> RepoResult<bool> {
        let employees = self.employees.list_employees()?;
        let projects = self.projects.list_projects()?;
        if employees.is_empty() || projects.is_empty() {
            return Ok(false);
        }

        let mut linked = false;
        for (employee_index, project_index) in SEED_ASSIGNMENTS {
            // Stores seeded elsewhere may hold fewer rows than the demo pairs need.
            let (Some(employee), Some(project)) =
                (employees.get(employee_index), projects.get(project_index))
            else {
                continue;
            };
            self.assignments.assign(employee.id, project.id)?;
            linked = true;
        }
        Ok(linked)
    }
}
