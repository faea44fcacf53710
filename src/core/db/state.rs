use anyhow::Context;
use sqlx::{
    Sqlite,
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous},
};
use tracing::info;

use std::path::{Path, PathBuf};

pub(super) struct DbState {
    db_file: PathBuf,
    pool: SqlitePool,
}

impl std::fmt::Debug for DbState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbState")
            .field("db_file", &self.db_file)
            .field("closed", &self.pool.is_closed())
            .finish()
    }
}

impl DbState {
    pub(super) async fn new<P: AsRef<Path>>(db_file: P) -> anyhow::Result<Self> {
        let db_file = db_file.as_ref().to_path_buf();

        if let Some(parent) = db_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.is_dir() {
                anyhow::bail!("Database file parent does not exist: {:?}", db_file);
            }
        }

        let connect_opts = SqliteConnectOptions::new()
            .filename(&db_file)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true);

        // One user, one statement at a time.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(connect_opts)
            .await
            .with_context(|| format!("Failed to open database {:?}", db_file))?;
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .with_context(|| format!("Failed to create project table in {:?}", db_file))?;

        info!(db_file = %db_file.display(), "database opened");
        Ok(Self { db_file, pool })
    }

    pub(super) async fn conn(&self) -> anyhow::Result<PoolConnection<Sqlite>> {
        self.pool
            .acquire()
            .await
            .with_context(|| format!("Failed to acquire connection to {:?}", self.db_file))
    }

    /// Checkpoints the WAL into the main file and closes the pool.
    pub(super) async fn close(&self) -> anyhow::Result<()> {
        sqlx::query("PRAGMA wal_checkpoint(TRUNCATE);")
            .execute(&self.pool)
            .await?;
        self.pool.close().await;
        info!(db_file = %self.db_file.display(), "database closed");
        Ok(())
    }
}
