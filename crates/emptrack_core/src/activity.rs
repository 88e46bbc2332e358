//! Recent-activity rule over employees and their project assignments.
//!
//! # Responsibility
//! - Decide which employees worked on more than `threshold` projects whose
//!   deadline falls inside a trailing window.
//! - Compute window starts from an injected reference time.
//!
//! # Invariants
//! - Evaluation is pure and keeps the caller's employee order.
//! - The window lower bound is inclusive.
//! - Assignments without a resolved project or deadline never count.

use crate::model::employee::Employee;
use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ACTIVITY_THRESHOLD: u32 = 3;
pub const DEFAULT_WINDOW_MONTHS: u32 = 6;

/// Parameters for classifying employees as recently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityPolicy {
    /// Qualifying assignment count must be strictly greater than this.
    pub threshold: u32,
    /// Length of the trailing window in calendar months.
    pub window_months: u32,
}

impl Default for ActivityPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_ACTIVITY_THRESHOLD,
            window_months: DEFAULT_WINDOW_MONTHS,
        }
    }
}

impl ActivityPolicy {
    /// Returns the window start for this policy relative to `now`.
    pub fn window_start(&self, now: DateTime<Utc>) -> Option<i64> {
        trailing_window_start(now, self.window_months)
    }
}

/// Returns `now` minus `months` calendar months, in epoch milliseconds.
///
/// Day-of-month is clamped the way chrono clamps it (e.g. Aug 31 minus six
/// months is Feb 28/29). Returns `None` outside chrono's representable range.
pub fn trailing_window_start(now: DateTime<Utc>, months: u32) -> Option<i64> {
    now.checked_sub_months(Months::new(months))
        .map(|start| start.timestamp_millis())
}

/// Counts assignments whose project deadline is at or after `window_start`.
pub fn count_recent_assignments(employee: &Employee, window_start: i64) -> usize {
    employee
        .assignments
        .iter()
        .filter(|assignment| {
            assignment
                .deadline()
                .is_some_and(|deadline| deadline >= window_start)
        })
        .count()
}

/// Selects employees with more than `threshold` recent assignments.
///
/// Input order is preserved. An employee with no assignments is never
/// selected.
pub fn select_active<'a>(
    employees: &'a [Employee],
    window_start: i64,
    threshold: u32,
) -> Vec<&'a Employee> {
    employees
        .iter()
        .filter(|employee| {
            count_recent_assignments(employee, window_start) > threshold as usize
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{count_recent_assignments, select_active, trailing_window_start, ActivityPolicy};
    use crate::model::employee::Employee;
    use crate::model::project::{Project, ProjectAssignment};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    const DAY_MS: i64 = 24 * 60 * 60 * 1000;
    const NOW_MS: i64 = 1_760_000_000_000;

    fn employee_with_deadlines(name: &str, deadlines: &[Option<i64>]) -> Employee {
        let mut employee = Employee::new(name, 5000.0, 4.0, 0, Uuid::new_v4());
        for (index, deadline) in deadlines.iter().enumerate() {
            let project = Project::new(format!("{name}-{index}"), 1000.0, *deadline);
            employee
                .assignments
                .push(ProjectAssignment::resolved(employee.id, project));
        }
        employee
    }

    fn days(offset: i64) -> Option<i64> {
        Some(NOW_MS + offset * DAY_MS)
    }

    fn names<'a>(selected: &[&'a Employee]) -> Vec<&'a str> {
        selected.iter().map(|employee| employee.name.as_str()).collect()
    }

    #[test]
    fn recent_and_stale_employees_are_separated() {
        let a = employee_with_deadlines("A", &[days(0), days(10), days(40)]);
        let b = employee_with_deadlines("B", &[days(-200), days(-190)]);
        let employees = vec![a, b];
        let window_start = NOW_MS - 180 * DAY_MS;

        assert_eq!(count_recent_assignments(&employees[0], window_start), 3);
        assert_eq!(count_recent_assignments(&employees[1], window_start), 0);
        assert_eq!(names(&select_active(&employees, window_start, 1)), vec!["A"]);
    }

    #[test]
    fn zero_threshold_selects_single_qualifying_assignment() {
        let employees = vec![employee_with_deadlines("C", &[days(5)])];
        assert_eq!(names(&select_active(&employees, NOW_MS, 0)), vec!["C"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(select_active(&[], NOW_MS, 0).is_empty());
        assert!(select_active(&[], i64::MIN, 10).is_empty());
    }

    #[test]
    fn employees_without_assignments_are_never_selected() {
        let employees = vec![employee_with_deadlines("idle", &[])];
        for threshold in [0, 1, 3, u32::MAX] {
            assert!(select_active(&employees, i64::MIN, threshold).is_empty());
        }
    }

    #[test]
    fn deadline_on_window_start_is_counted() {
        let employees = vec![employee_with_deadlines("edge", &[Some(NOW_MS)])];
        assert_eq!(count_recent_assignments(&employees[0], NOW_MS), 1);
        assert_eq!(count_recent_assignments(&employees[0], NOW_MS + 1), 0);
    }

    #[test]
    fn missing_deadline_or_project_is_not_counted() {
        let mut employee = employee_with_deadlines("partial", &[None, days(1)]);
        employee.assignments.push(ProjectAssignment {
            employee_id: employee.id,
            project_id: Uuid::new_v4(),
            project: None,
        });

        assert_eq!(count_recent_assignments(&employee, i64::MIN), 1);
    }

    #[test]
    fn result_keeps_input_order_and_is_repeatable() {
        let employees = vec![
            employee_with_deadlines("z", &[days(1), days(2)]),
            employee_with_deadlines("skip", &[days(-400)]),
            employee_with_deadlines("a", &[days(3), days(4)]),
        ];
        let window_start = NOW_MS - 30 * DAY_MS;

        let first = select_active(&employees, window_start, 1);
        let second = select_active(&employees, window_start, 1);
        assert_eq!(names(&first), vec!["z", "a"]);
        assert_eq!(first, second);
    }

    #[test]
    fn raising_threshold_never_grows_result() {
        let employees = vec![
            employee_with_deadlines("one", &[days(1)]),
            employee_with_deadlines("two", &[days(1), days(2)]),
            employee_with_deadlines("four", &[days(1), days(2), days(3), days(4)]),
        ];

        let mut previous = usize::MAX;
        for threshold in 0..6 {
            let size = select_active(&employees, NOW_MS, threshold).len();
            assert!(size <= previous, "threshold {threshold} grew result");
            previous = size;
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn window_start_subtracts_calendar_months() {
        let now = Utc.with_ymd_and_hms(2026, 8, 31, 12, 0, 0).unwrap();
        let expected = Utc.with_ymd_and_hms(2026, 2, 28, 12, 0, 0).unwrap();

        assert_eq!(
            trailing_window_start(now, 6),
            Some(expected.timestamp_millis())
        );
        assert_eq!(
            ActivityPolicy::default().window_start(now),
            Some(expected.timestamp_millis())
        );
        assert_eq!(trailing_window_start(now, 0), Some(now.timestamp_millis()));
    }

    #[test]
    fn window_start_is_none_past_calendar_range() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 0, 0, 0).unwrap();
        assert_eq!(trailing_window_start(now, u32::MAX), None);
        assert_eq!(trailing_window_start(now, 4_000_000), None);

        let policy = ActivityPolicy {
            threshold: 0,
            window_months: u32::MAX,
        };
        assert_eq!(policy.window_start(now), None);
    }
}
