//! Listing, bonus and totals reports.

use crate::repo::assignment_repo::{AssignmentRepository, AssignmentRow};
use crate::repo::report_repo::{EmployeeBonus, ReportRepository, Totals};
use crate::repo::RepoResult;

/// Use-case service for read-only staffing reports.
pub struct ReportService<A: AssignmentRepository, R: ReportRepository> {
    assignments: A,
    reports: R,
}

impl<A: AssignmentRepository, R: ReportRepository> ReportService<A, R> {
    pub fn new(assignments: A, reports: R) -> Self {
        Self {
            assignments,
            reports,
        }
    }

    /// Lists every employee/project pair with the project deadline.
    pub fn assignment_rows(&self) -> RepoResult<Vec<AssignmentRow>> {
        self.assignments.list_assignment_rows()
    }

    pub fn employee_bonuses(&self) -> RepoResult<Vec<EmployeeBonus>> {
        self.reports.employee_bonuses()
    }

    pub fn totals(&self) -> RepoResult<Totals> {
        self.reports.totals()
    }
}
