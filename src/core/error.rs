/// Errors surfaced to the menu by input parsing and project operations.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("project with ID={0} does not exist")]
    NotFound(i32),

    #[error("persistence error: {0:#}")]
    Persistence(#[from] anyhow::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProjectError>;
