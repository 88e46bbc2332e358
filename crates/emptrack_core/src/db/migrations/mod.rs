//! Versioned schema for the staffing store.
//!
//! # Responsibility
//! - List the SQL steps that build the store, oldest first.
//! - Bring a connection up to the newest step inside one transaction.
//!
//! # Invariants
//! - Step versions start at 1 and grow by exactly 1.
//! - `PRAGMA user_version` always names the last step applied.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::{Connection, Transaction};

/// One schema step: version number and the SQL batch it runs.
#[derive(Debug, Clone, Copy)]
struct SchemaStep {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const SCHEMA_STEPS: &[SchemaStep] = &[
    SchemaStep {
        version: 1,
        name: "staffing_tables",
        sql: include_str!("0001_init.sql"),
    },
    SchemaStep {
        version: 2,
        name: "employee_bonuses_view",
        sql: include_str!("0002_employee_bonuses.sql"),
    },
];

/// Returns the newest schema version this build can create.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |step| step.version)
}

/// Applies every step newer than the store's version.
///
/// Returns the versions applied, oldest first; empty when already current.
/// A failing step rolls back the whole batch.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<Vec<u32>> {
    let from_version = stored_version(conn)?;
    let latest = latest_version();
    if from_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from_version,
            latest_supported: latest,
        });
    }

    let pending: Vec<&SchemaStep> = SCHEMA_STEPS
        .iter()
        .filter(|step| step.version > from_version)
        .collect();
    if pending.is_empty() {
        return Ok(Vec::new());
    }

    let tx = conn.transaction()?;
    for step in &pending {
        run_step(&tx, step)?;
    }
    tx.commit()?;

    Ok(pending.iter().map(|step| step.version).collect())
}

fn run_step(tx: &Transaction<'_>, step: &SchemaStep) -> DbResult<()> {
    tx.execute_batch(step.sql)
        .and_then(|()| tx.pragma_update(None, "user_version", step.version))
        .map_err(|source| DbError::Migration {
            version: step.version,
            source,
        })?;
    info!(
        "event=db_migrate module=db status=ok version={} step={}",
        step.version, step.name
    );
    Ok(())
}

fn stored_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::{apply_migrations, latest_version, SCHEMA_STEPS};
    use rusqlite::Connection;

    #[test]
    fn step_versions_are_contiguous_from_one() {
        for (index, step) in SCHEMA_STEPS.iter().enumerate() {
            assert_eq!(step.version as usize, index + 1, "step {}", step.name);
        }
    }

    #[test]
    fn fresh_store_applies_every_step_once() {
        let mut conn = Connection::open_in_memory().unwrap();

        let applied = apply_migrations(&mut conn).unwrap();
        assert_eq!(applied, (1..=latest_version()).collect::<Vec<_>>());
        assert!(apply_migrations(&mut conn).unwrap().is_empty());
    }

    #[test]
    fn partially_migrated_store_resumes_after_stored_version() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA_STEPS[0].sql).unwrap();
        conn.execute_batch("PRAGMA user_version = 1;").unwrap();

        assert_eq!(apply_migrations(&mut conn).unwrap(), vec![2]);
    }
}
