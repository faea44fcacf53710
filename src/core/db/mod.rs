mod model;
mod project;
mod state;

use std::path::Path;

use anyhow::Context;
use state::DbState;
use tracing::debug;

pub use model::{HOURS_SCALE, Hours, HoursError};
pub use project::{NewProject, Project, ProjectRepository, ProjectSummary, ProjectUpdate};

/// SQLite-backed project table.
#[derive(Debug)]
pub struct ProjectDb {
    state: DbState,
}

impl ProjectDb {
    /// Opens (or creates) the database file and makes sure the project table exists.
    pub async fn new<P: AsRef<Path>>(db_file: P) -> anyhow::Result<Self> {
        Ok(Self {
            state: DbState::new(db_file).await?,
        })
    }

    /// Flushes pending writes and releases the database file.
    pub async fn close(&self) -> anyhow::Result<()> {
        self.state.close().await
    }
}

#[derive(sqlx::FromRow)]
struct ProjectRow {
    project_id: i64,
    project_name: String,
    estimated_hours: Option<String>,
    actual_hours: Option<String>,
    difficulty: Option<i32>,
    notes: Option<String>,
}

impl TryFrom<ProjectRow> for Project {
    type Error = anyhow::Error;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        Ok(Project {
            id: row_id(row.project_id)?,
            name: row.project_name,
            estimated_hours: row.estimated_hours.map(Hours::try_from).transpose()?,
            actual_hours: row.actual_hours.map(Hours::try_from).transpose()?,
            difficulty: row.difficulty,
            notes: row.notes,
        })
    }
}

fn row_id(id: i64) -> anyhow::Result<i32> {
    i32::try_from(id).with_context(|| format!("Project ID {} is out of range", id))
}

impl ProjectRepository for ProjectDb {
    async fn insert_project(&self, project: &NewProject) -> anyhow::Result<i32> {
        let mut conn = self.state.conn().await?;
        debug!(name = ?project.name, "inserting project");
        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO project (project_name, estimated_hours, actual_hours, difficulty, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING project_id"#,
        )
        .bind(&project.name)
        .bind(project.estimated_hours.map(String::from))
        .bind(project.actual_hours.map(String::from))
        .bind(project.difficulty)
        .bind(&project.notes)
        .fetch_one(&mut *conn)
        .await
        .context("Failed to insert project")?;
        row_id(id)
    }

    async fn select_all_projects(&self) -> anyhow::Result<Vec<ProjectSummary>> {
        let mut conn = self.state.conn().await?;
        debug!("selecting all projects");
        sqlx::query_as::<_, (i64, String)>(
            r#"SELECT project_id, project_name FROM project ORDER BY project_name ASC"#,
        )
        .fetch_all(&mut *conn)
        .await
        .context("Failed to list projects")?
        .into_iter()
        .map(|(id, name)| Ok(ProjectSummary { id: row_id(id)?, name }))
        .collect()
    }

    async fn select_project_by_id(&self, id: i32) -> anyhow::Result<Option<Project>> {
        let mut conn = self.state.conn().await?;
        debug!(id, "selecting project");
        sqlx::query_as::<_, ProjectRow>(
            r#"SELECT project_id, project_name, estimated_hours, actual_hours, difficulty, notes
            FROM project WHERE project_id = $1"#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .with_context(|| format!("Failed to fetch project {}", id))?
        .map(Project::try_from)
        .transpose()
    }

    async fn update_project(&self, project: &Project) -> anyhow::Result<u64> {
        let mut conn = self.state.conn().await?;
        debug!(id = project.id, "updating project");
        let result = sqlx::query(
            r#"UPDATE project SET
                project_name = $1,
                estimated_hours = $2,
                actual_hours = $3,
                difficulty = $4,
                notes = $5
            WHERE project_id = $6"#,
        )
        .bind(&project.name)
        .bind(project.estimated_hours.map(String::from))
        .bind(project.actual_hours.map(String::from))
        .bind(project.difficulty)
        .bind(&project.notes)
        .bind(project.id)
        .execute(&mut *conn)
        .await
        .with_context(|| format!("Failed to update project {}", project.id))?;
        Ok(result.rows_affected())
    }

    async fn delete_project(&self, id: i32) -> anyhow::Result<u64> {
        let mut conn = self.state.conn().await?;
        debug!(id, "deleting project");
        let result = sqlx::query(r#"DELETE FROM project WHERE project_id = $1"#)
            .bind(id)
            .execute(&mut *conn)
            .await
            .with_context(|| format!("Failed to delete project {}", id))?;
        Ok(result.rows_affected())
    }
}
