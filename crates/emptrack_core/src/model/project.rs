//! Project and assignment records.
//!
//! # Invariants
//! - A persisted assignment references exactly one existing employee and one
//!   existing project.
//! - An (employee, project) pair is assigned at most once.

use super::employee::EmployeeId;
use super::{validate_amount, validate_name, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ProjectId = Uuid;

/// Budgeted unit of work with an optional deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub budget: f64,
    /// Unix epoch milliseconds. `None` never satisfies an activity window.
    pub deadline: Option<i64>,
}

impl Project {
    /// Creates a project with a generated stable ID.
    pub fn new(name: impl Into<String>, budget: f64, deadline: Option<i64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            budget,
            deadline,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("project", &self.name)?;
        validate_amount("project", "budget", self.budget)
    }
}

/// Many-to-many link between one employee and one project.
///
/// `project` holds the linked record when it was loaded alongside the
/// assignment; it is `None` when the link could not be resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectAssignment {
    pub employee_id: EmployeeId,
    pub project_id: ProjectId,
    pub project: Option<Project>,
}

impl ProjectAssignment {
    /// Creates an assignment that carries its resolved project.
    pub fn resolved(employee_id: EmployeeId, project: Project) -> Self {
        Self {
            employee_id,
            project_id: project.id,
            project: Some(project),
        }
    }

    /// Returns the linked project's deadline, if both are known.
    pub fn deadline(&self) -> Option<i64> {
        self.project.as_ref().and_then(|project| project.deadline)
    }
}
