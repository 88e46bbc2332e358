//! Employee record.

use super::department::DepartmentId;
use super::project::ProjectAssignment;
use super::{validate_amount, validate_name, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type EmployeeId = Uuid;

/// Staff member with compensation, rating and project assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub salary: f64,
    /// Conceptually 0-5; the range is not enforced.
    pub performance_rating: f64,
    /// Unix epoch milliseconds.
    pub hire_date: i64,
    pub department_id: DepartmentId,
    /// Ordered as loaded. Empty unless loaded with assignments.
    #[serde(default)]
    pub assignments: Vec<ProjectAssignment>,
}

impl Employee {
    /// Creates an employee with a generated stable ID and no assignments.
    pub fn new(
        name: impl Into<String>,
        salary: f64,
        performance_rating: f64,
        hire_date: i64,
        department_id: DepartmentId,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            salary,
            performance_rating,
            hire_date,
            department_id,
            assignments: Vec::new(),
        }
    }

    /// Validates fields that persistence relies on.
    ///
    /// Assignments are not checked here; they are written separately.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("employee", &self.name)?;
        validate_amount("employee", "salary", self.salary)?;
        if !self.performance_rating.is_finite() {
            return Err(ValidationError::InvalidRating(self.performance_rating));
        }
        Ok(())
    }
}
