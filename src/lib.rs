pub mod core;
pub mod input;
pub mod menu;
pub mod service;

pub use self::core::db::{Hours, NewProject, Project, ProjectDb, ProjectRepository, ProjectSummary, ProjectUpdate};
pub use self::core::{ProjectError, Result};
pub use input::InputReader;
pub use menu::{Menu, MenuState, Session};
pub use service::ProjectService;
