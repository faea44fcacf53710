use std::{fmt, future::Future};

use crate::core::db::model::Hours;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub estimated_hours: Option<Hours>,
    pub actual_hours: Option<Hours>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProject {
    pub name: Option<String>,
    pub estimated_hours: Option<Hours>,
    pub actual_hours: Option<Hours>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
}

/// The columns the project list shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub id: i32,
    pub name: String,
}

/// Field-by-field edits to a project; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub estimated_hours: Option<Hours>,
    pub actual_hours: Option<Hours>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
}

impl Project {
    /// Applies `update` on top of this project. The ID never changes.
    pub fn merged(&self, update: ProjectUpdate) -> Project {
        Project {
            id: self.id,
            name: update.name.unwrap_or_else(|| self.name.clone()),
            estimated_hours: update.estimated_hours.or(self.estimated_hours),
            actual_hours: update.actual_hours.or(self.actual_hours),
            difficulty: update.difficulty.or(self.difficulty),
            notes: update.notes.or_else(|| self.notes.clone()),
        }
    }

    pub fn with_id(id: i32, project: NewProject) -> anyhow::Result<Project> {
        let name = project
            .name
            .ok_or_else(|| anyhow::anyhow!("Project {} has no name", id))?;
        Ok(Project {
            id,
            name,
            estimated_hours: project.estimated_hours,
            actual_hours: project.actual_hours,
            difficulty: project.difficulty,
            notes: project.notes,
        })
    }
}

fn display_opt<T: fmt::Display>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "   ID={}", self.id)?;
        writeln!(f, "   name={}", self.name)?;
        writeln!(f, "   estimated hours={}", display_opt(&self.estimated_hours))?;
        writeln!(f, "   actual hours={}", display_opt(&self.actual_hours))?;
        writeln!(f, "   difficulty={}", display_opt(&self.difficulty))?;
        write!(f, "   notes={}", display_opt(&self.notes))
    }
}

/// Row-level access to the project table.
///
/// Update and delete report the number of rows affected; deciding whether
/// zero rows means "not found" is left to the caller.
pub trait ProjectRepository {
    fn insert_project(&self, project: &NewProject) -> impl Future<Output = anyhow::Result<i32>>;
    fn select_all_projects(&self) -> impl Future<Output = anyhow::Result<Vec<ProjectSummary>>>;
    fn select_project_by_id(&self, id: i32) -> impl Future<Output = anyhow::Result<Option<Project>>>;
    fn update_project(&self, project: &Project) -> impl Future<Output = anyhow::Result<u64>>;
    fn delete_project(&self, id: i32) -> impl Future<Output = anyhow::Result<u64>>;
}
