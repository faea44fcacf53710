use std::{
    fmt,
    io::{BufRead, Write},
};

use tracing::debug;

use crate::{
    core::{
        ProjectError, Result,
        db::{NewProject, Project, ProjectRepository, ProjectUpdate},
    },
    input::InputReader,
    service::ProjectService,
};

const OPERATIONS: [&str; 5] = [
    "1) Add a project",
    "2) List projects",
    "3) Select a project",
    "4) Update project details",
    "5) Delete a project",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Exited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Exit,
    Create,
    List,
    Select,
    Update,
    Delete,
    Unknown(i32),
}

impl From<Option<i32>> for Selection {
    fn from(value: Option<i32>) -> Self {
        match value {
            None => Selection::Exit,
            Some(1) => Selection::Create,
            Some(2) => Selection::List,
            Some(3) => Selection::Select,
            Some(4) => Selection::Update,
            Some(5) => Selection::Delete,
            Some(n) => Selection::Unknown(n),
        }
    }
}

/// The project the user is currently working with.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<Project>,
}

impl Session {
    pub fn current(&self) -> Option<&Project> {
        self.current.as_ref()
    }

    pub fn select(&mut self, project: Project) {
        self.current = Some(project);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Drops the selection if it refers to project `id`.
    pub fn forget(&mut self, id: i32) {
        if self.current.as_ref().is_some_and(|p| p.id == id) {
            self.current = None;
        }
    }
}

fn bracketed<T: fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => format!("[{}]", v),
        None => "[]".to_string(),
    }
}

/// Interactive menu over a [`ProjectService`].
///
/// Errors from individual actions are printed and the loop carries on;
/// only a failure of the terminal streams ends [`Menu::run`] early.
pub struct Menu<R, I, O> {
    service: ProjectService<R>,
    input: InputReader<I, O>,
    session: Session,
}

impl<R, I, O> Menu<R, I, O>
where
    R: ProjectRepository,
    I: BufRead,
    O: Write,
{
    pub fn new(service: ProjectService<R>, input: InputReader<I, O>) -> Self {
        Self {
            service,
            input,
            session: Session::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_parts(self) -> (ProjectService<R>, InputReader<I, O>, Session) {
        (self.service, self.input, self.session)
    }

    fn out(&mut self) -> &mut O {
        self.input.output()
    }

    pub async fn run(&mut self) -> Result<()> {
        loop {
            match self.step().await {
                Ok(MenuState::Running) => {}
                Ok(MenuState::Exited) => return Ok(()),
                Err(ProjectError::Io(e)) => return Err(ProjectError::Io(e)),
                Err(e) => {
                    debug!(error = %e, "menu action failed");
                    writeln!(self.out(), "\nError: {} Try again.", e)?;
                }
            }
        }
    }

    /// Shows the menu, reads one selection and performs it.
    pub async fn step(&mut self) -> Result<MenuState> {
        self.print_operations()?;
        let selection = Selection::from(self.input.read_integer("Enter a menu selection")?);
        debug!(?selection, "menu selection");

        match selection {
            Selection::Exit => {
                writeln!(self.out(), "\nExiting the menu. Goodbye!")?;
                return Ok(MenuState::Exited);
            }
            Selection::Create => self.create_project().await?,
            Selection::List => self.list_projects().await?,
            Selection::Select => self.select_project().await?,
            Selection::Update => self.update_project_details().await?,
            Selection::Delete => self.delete_project().await?,
            Selection::Unknown(n) => writeln!(
                self.out(),
                "\n{} is not a valid option. Please resubmit your selection.",
                n
            )?,
        }
        Ok(MenuState::Running)
    }

    fn print_operations(&mut self) -> Result<()> {
        let out = self.input.output();
        writeln!(out, "\nThese are the available selections. Press the ENTER key to quit:")?;
        for line in OPERATIONS {
            writeln!(out, "  {}", line)?;
        }
        match self.session.current() {
            None => writeln!(out, "\nYou are not currently working with a project.")?,
            Some(project) => writeln!(out, "\nYou are currently working with project: {}", project)?,
        }
        Ok(())
    }

    async fn create_project(&mut self) -> Result<()> {
        let project = NewProject {
            name: self.input.read_string("Enter the project name")?,
            estimated_hours: self.input.read_decimal("Enter the estimated hours")?,
            actual_hours: self.input.read_decimal("Enter the actual hours")?,
            difficulty: self.input.read_integer("Enter the project difficulty (1-5)")?,
            notes: self.input.read_string("Enter the project notes")?,
        };

        let created = self.service.add(project).await?;
        writeln!(self.out(), "You have successfully created project: {}", created)?;
        self.session.select(created);
        Ok(())
    }

    async fn list_projects(&mut self) -> Result<()> {
        let projects = self.service.fetch_all().await?;
        let out = self.input.output();
        writeln!(out, "\nProjects:")?;
        for project in projects {
            writeln!(out, "  {}: {}", project.id, project.name)?;
        }
        Ok(())
    }

    async fn select_project(&mut self) -> Result<()> {
        self.list_projects().await?;
        let Some(id) = self.input.read_integer("Enter a project ID to select a project")? else {
            return Ok(());
        };

        self.session.clear();
        let project = self.service.fetch_by_id(id).await?;
        self.session.select(project);
        Ok(())
    }

    async fn update_project_details(&mut self) -> Result<()> {
        let Some(current) = self.session.current().cloned() else {
            writeln!(self.out(), "\nPlease select a project.")?;
            return Ok(());
        };

        let update = ProjectUpdate {
            name: self
                .input
                .read_string(&format!("Enter the project name [{}]", current.name))?,
            estimated_hours: self.input.read_decimal(&format!(
                "Enter the estimated hours {}",
                bracketed(&current.estimated_hours)
            ))?,
            actual_hours: self.input.read_decimal(&format!(
                "Enter the actual hours {}",
                bracketed(&current.actual_hours)
            ))?,
            difficulty: self.input.read_integer(&format!(
                "Enter the project difficulty (1-5) {}",
                bracketed(&current.difficulty)
            ))?,
            notes: self
                .input
                .read_string(&format!("Enter the project notes {}", bracketed(&current.notes)))?,
        };

        let project = current.merged(update);
        self.service.update(&project).await?;
        let refreshed = self.service.fetch_by_id(project.id).await?;
        self.session.select(refreshed);
        Ok(())
    }

    async fn delete_project(&mut self) -> Result<()> {
        self.list_projects().await?;
        let Some(id) = self
            .input
            .read_integer("Enter the ID of the project to delete")?
        else {
            return Ok(());
        };

        self.service.delete(id).await?;
        writeln!(self.out(), "You have deleted project {}.", id)?;
        self.session.forget(id);
        Ok(())
    }
}
