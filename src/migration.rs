use color_eyre::eyre::eyre;
use diesel::{Connection, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::Error;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub async fn run(database_url: &str) -> Result<(), Error> {
    let database_url = database_url.to_owned();
    tokio::task::spawn_blocking(move || -> Result<(), Error> {
        let mut connection =
            SqliteConnection::establish(&database_url).map_err(color_eyre::Report::from)?;
        let versions = connection.run_pending_migrations(MIGRATIONS).map_err(|e| eyre!(e))?;
        for version in versions {
            tracing::info!(%version, "applied migration");
        }
        Ok(())
    })
    .await?
}
