use concat_string::concat_string;
use tempfile::TempDir;

use crate::database::Database;
use crate::{config, constant};

pub struct Mock {
    // Removed on drop together with the database file.
    _root: TempDir,
    database: Database,
}

impl Mock {
    pub async fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info".into()),
            )
            .with_test_writer()
            .try_init();

        let root = tempfile::Builder::new()
            .prefix(&concat_string!(constant::SERVER_NAME, "."))
            .tempdir()
            .unwrap();
        let path = root.path().join("storage").join("playlist.db");
        let database = Database::new(&config::Database { path }).await.unwrap();

        Self { _root: root, database }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }
}
