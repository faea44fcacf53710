use projects::{ProjectDb, ProjectRepository};

#[tokio::test]
async fn test_simple() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("test.db");
    let db: ProjectDb = ProjectDb::new(&path).await?;

    let projects = db.select_all_projects().await?;
    assert_eq!(projects.len(), 0);

    Ok(())
}
