//! Project operations on top of a [`ProjectRepository`].
//!
//! The service adds no business rules of its own. It turns backend
//! outcomes into [`ProjectError`]s: a missing row or zero affected rows
//! becomes [`ProjectError::NotFound`], and any backend failure becomes
//! [`ProjectError::Persistence`].

use crate::core::{
    ProjectError, Result,
    db::{NewProject, Project, ProjectRepository, ProjectSummary},
};

#[derive(Debug)]
pub struct ProjectService<R> {
    repo: R,
}

impl<R: ProjectRepository> ProjectService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn into_repository(self) -> R {
        self.repo
    }

    /// Inserts the project and returns it with the ID the backend assigned.
    pub async fn add(&self, project: NewProject) -> Result<Project> {
        let id = self.repo.insert_project(&project).await?;
        Ok(Project::with_id(id, project)?)
    }

    pub async fn fetch_all(&self) -> Result<Vec<ProjectSummary>> {
        Ok(self.repo.select_all_projects().await?)
    }

    pub async fn fetch_by_id(&self, id: i32) -> Result<Project> {
        self.repo
            .select_project_by_id(id)
            .await?
            .ok_or(ProjectError::NotFound(id))
    }

    pub async fn update(&self, project: &Project) -> Result<()> {
        match self.repo.update_project(project).await? {
            0 => Err(ProjectError::NotFound(project.id)),
            _ => Ok(()),
        }
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        match self.repo.delete_project(id).await? {
            0 => Err(ProjectError::NotFound(id)),
            _ => Ok(()),
        }
    }
}
