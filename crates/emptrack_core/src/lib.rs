//! Core domain logic for the employee tracking demo.
//! Owns the staffing model, the SQLite store and the recent-activity rule.

pub mod activity;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use activity::{
    count_recent_assignments, select_active, trailing_window_start, ActivityPolicy,
};
pub use logging::{default_log_level, flush_logging, init_logging, logging_status};
pub use model::department::{Department, DepartmentId};
pub use model::employee::{Employee, EmployeeId};
pub use model::project::{Project, ProjectAssignment, ProjectId};
pub use model::ValidationError;
pub use repo::assignment_repo::{AssignmentRepository, AssignmentRow, SqliteAssignmentRepository};
pub use repo::department_repo::{DepartmentRepository, SqliteDepartmentRepository};
pub use repo::employee_repo::{EmployeeRepository, SqliteEmployeeRepository};
pub use repo::project_repo::{ProjectRepository, SqliteProjectRepository};
pub use repo::report_repo::{EmployeeBonus, ReportRepository, SqliteReportRepository, Totals};
pub use repo::{RepoError, RepoResult};
pub use service::activity_service::ActivityService;
pub use service::report_service::ReportService;
pub use service::seed_service::{SeedOutcome, SeedService};
