use std::io::Cursor;

use projects::{Hours, InputReader, Menu, NewProject, ProjectDb, ProjectService};

/// Menu wired to a scripted stdin and a captured stdout.
pub type ScriptedMenu = Menu<ProjectDb, Cursor<Vec<u8>>, Vec<u8>>;

/// Creates a ProjectDb in a temporary directory.
/// Returns both the database and the temp directory (which must be kept alive).
pub async fn create_test_db() -> (ProjectDb, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("projects.db");
    let db = ProjectDb::new(&path)
        .await
        .expect("Failed to create test database");
    (db, dir)
}

pub fn hours(text: &str) -> Hours {
    text.parse().expect("valid hours literal")
}

/// Creates a fully populated NewProject with the given name.
pub fn make_new_project(name: &str) -> NewProject {
    NewProject {
        name: Some(name.to_string()),
        estimated_hours: Some(hours("40")),
        actual_hours: Some(hours("0")),
        difficulty: Some(3),
        notes: Some("none".to_string()),
    }
}

/// Builds a menu over `db` that will read the given lines, one per prompt.
pub fn scripted_menu(db: ProjectDb, lines: &[&str]) -> ScriptedMenu {
    let mut script = lines.join("\n");
    script.push('\n');
    let input = InputReader::new(Cursor::new(script.into_bytes()), Vec::new());
    Menu::new(ProjectService::new(db), input)
}

/// Runs the menu to completion and returns the database and everything printed.
pub async fn run_menu(mut menu: ScriptedMenu) -> (ProjectDb, String, projects::Session) {
    menu.run().await.expect("menu loop should not fail");
    let (service, input, session) = menu.into_parts();
    let (_, output) = input.into_inner();
    (
        service.into_repository(),
        String::from_utf8(output).expect("menu output is utf-8"),
        session,
    )
}
