mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from projects for tests
pub use projects::{
    Hours, InputReader, Menu, NewProject, Project, ProjectDb, ProjectError, ProjectRepository,
    ProjectService, ProjectSummary, ProjectUpdate, Session,
};
