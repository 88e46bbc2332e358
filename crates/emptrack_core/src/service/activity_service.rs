//! Recently-active employee selection.
//!
//! # Responsibility
//! - Load employees with assignments in one fetch and apply the activity
//!   rule for a caller-supplied policy and reference time.

use crate::activity::{select_active, ActivityPolicy};
use crate::model::employee::Employee;
use crate::repo::employee_repo::EmployeeRepository;
use crate::repo::RepoResult;
use chrono::{DateTime, Utc};
use log::info;

/// Use-case service for the recent-activity report.
pub struct ActivityService<E: EmployeeRepository> {
    employees: E,
}

impl<E: EmployeeRepository> ActivityService<E> {
    pub fn new(employees: E) -> Self {
        Self { employees }
    }

    /// Returns employees with more than `policy.threshold` assignments whose
    /// deadline is within `policy.window_months` before `now`.
    ///
    /// A window reaching past the representable calendar counts every dated
    /// assignment.
    pub fn active_employees(
        &self,
        policy: &ActivityPolicy,
        now: DateTime<Utc>,
    ) -> RepoResult<Vec<Employee>> {
        let employees = self.employees.load_with_assignments()?;
        let window_start = policy.window_start(now).unwrap_or(i64::MIN);
        let active: Vec<Employee> = select_active(&employees, window_start, policy.threshold)
            .into_iter()
            .cloned()
            .collect();

        info!(
            "event=activity_query module=service status=ok threshold={} window_months={} loaded={} active={}",
            policy.threshold,
            policy.window_months,
            employees.len(),
            active.len()
        );
        Ok(active)
    }
}
