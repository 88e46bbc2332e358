//! Project repository contracts and SQLite implementation.

use super::{count_rows, uuid_column, RepoResult};
use crate::model::project::{Project, ProjectId};
use rusqlite::{params, Connection, Row};

const PROJECT_SELECT_SQL: &str = "SELECT uuid, name, budget, deadline FROM projects";

/// Repository interface for projects.
pub trait ProjectRepository {
    fn create_project(&self, project: &Project) -> RepoResult<ProjectId>;
    fn list_projects(&self) -> RepoResult<Vec<Project>>;
    fn count_projects(&self) -> RepoResult<u64>;
}

/// SQLite-backed project repository.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn create_project(&self, project: &Project) -> RepoResult<ProjectId> {
        project.validate()?;

        self.conn.execute(
            "INSERT INTO projects (uuid, name, budget, deadline) VALUES (?1, ?2, ?3, ?4);",
            params![
                project.id.to_string(),
                project.name.as_str(),
                project.budget,
                project.deadline,
            ],
        )?;

        Ok(project.id)
    }

    fn list_projects(&self) -> RepoResult<Vec<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut projects = Vec::new();

        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }

        Ok(projects)
    }

    fn count_projects(&self) -> RepoResult<u64> {
        count_rows(self.conn, "projects")
    }
}

fn parse_project_row(row: &Row<'_>) -> RepoResult<Project> {
    Ok(Project {
        id: uuid_column(row, "uuid")?,
        name: row.get("name")?,
        budget: row.get("budget")?,
        deadline: row.get("deadline")?,
    })
}
