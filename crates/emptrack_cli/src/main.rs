//! Demo entry point.
//!
//! # Responsibility
//! - Seed the staffing store when empty, then print the activity, listing,
//!   bonus and totals reports.
//! - Acquire a fresh connection per step so each is released on exit.
//! - Flush the file logger before exiting on success and on error.

mod cli;
mod render;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use cli::Cli;
use emptrack_core::db::open_db;
use emptrack_core::{
    default_log_level, flush_logging, init_logging, ActivityService, ReportService, SeedService,
    SqliteAssignmentRepository, SqliteEmployeeRepository, SqliteReportRepository,
};
use log::{error, info};
use rusqlite::Connection;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let result = run(&cli);
    if let Err(err) = &result {
        error!("event=cli_exit module=cli status=error error={err:#}");
    }
    flush_logging();
    result
}

fn run(cli: &Cli) -> Result<()> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(|message| anyhow!(message))?;
    }
    info!("event=cli_start module=cli status=ok db={}", cli.db.display());

    let now = Utc::now();
    seed(cli, now)?;
    print_active_employees(cli, now)?;
    print_assignments(cli)?;
    print_bonuses(cli)?;
    print_totals(cli)?;
    info!("event=cli_exit module=cli status=ok");
    Ok(())
}

fn connect(cli: &Cli) -> Result<Connection> {
    open_db(&cli.db).with_context(|| format!("failed to open store `{}`", cli.db.display()))
}

fn seed(cli: &Cli, now: DateTime<Utc>) -> Result<()> {
    let conn = connect(cli)?;
    println!("Seeding database with demo data...");
    let outcome = SeedService::for_connection(&conn)
        .seed_if_empty(now)
        .context("seeding failed")?;
    if outcome.seeded_anything() {
        println!("Demo data added.");
    } else {
        println!("Store already populated; nothing added.");
    }
    Ok(())
}

fn print_active_employees(cli: &Cli, now: DateTime<Utc>) -> Result<()> {
    let conn = connect(cli)?;
    let policy = cli.policy();
    let active = ActivityService::new(SqliteEmployeeRepository::new(&conn))
        .active_employees(&policy, now)
        .context("activity query failed")?;

    println!(
        "\nEmployees who worked on more than {} projects in the last {} months:",
        policy.threshold, policy.window_months
    );
    for employee in &active {
        println!("{}", employee.name);
    }
    Ok(())
}

fn reports(
    conn: &Connection,
) -> ReportService<SqliteAssignmentRepository<'_>, SqliteReportRepository<'_>> {
    ReportService::new(
        SqliteAssignmentRepository::new(conn),
        SqliteReportRepository::new(conn),
    )
}

fn print_assignments(cli: &Cli) -> Result<()> {
    let conn = connect(cli)?;
    let rows = reports(&conn)
        .assignment_rows()
        .context("assignment listing failed")?;

    println!("\nEmployees with their projects:");
    for row in &rows {
        println!(
            "Employee: {}, Project: {}, Deadline: {}",
            row.employee_name,
            row.project_name,
            render::timestamp(row.deadline)
        );
    }
    Ok(())
}

fn print_bonuses(cli: &Cli) -> Result<()> {
    let conn = connect(cli)?;
    let bonuses = reports(&conn)
        .employee_bonuses()
        .context("bonus report failed")?;

    println!("\nEmployee bonuses:");
    for line in &bonuses {
        println!(
            "Employee: {}, Salary: {}, Rating: {}, Bonus: {}",
            line.name,
            render::currency(line.salary),
            line.performance_rating,
            render::currency(line.bonus)
        );
    }
    Ok(())
}

fn print_totals(cli: &Cli) -> Result<()> {
    let conn = connect(cli)?;
    let totals = reports(&conn).totals().context("totals query failed")?;

    println!(
        "\nTotal salaries: {}, Total project budget: {}",
        render::currency(totals.total_salary),
        render::currency(totals.total_budget)
    );
    Ok(())
}
