mod song;

use std::path::Path;

use color_eyre::eyre::OptionExt;
use diesel::{ConnectionError, ConnectionResult, SqliteConnection};
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, ManagerConfig, deadpool};
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use diesel_async::{AsyncConnection, SimpleAsyncConnection};
use futures::FutureExt;
use futures::future::BoxFuture;

use crate::{Error, config, migration};

type Connection = SyncConnectionWrapper<SqliteConnection>;
type Manager = AsyncDieselConnectionManager<Connection>;
type Pool = deadpool::Pool<Connection>;

#[derive(Clone)]
pub struct Database {
    pool: Pool,
}

impl Database {
    // Concurrent writers wait for the lock instead of failing with `SQLITE_BUSY`.
    const SETUP_QUERY: &'static str = "PRAGMA busy_timeout = 5000;";

    pub async fn new(config: &config::Database) -> Result<Self, Error> {
        if let Some(parent) = config.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let url = Self::url(&config.path)?;
        migration::run(&url).await?;

        let mut manager_config = ManagerConfig::default();
        manager_config.custom_setup = Box::new(Self::establish);
        let pool = Pool::builder(Manager::new_with_config(&url, manager_config))
            .build()
            .map_err(color_eyre::Report::from)?;

        tracing::info!(path = %config.path.display(), "opened database");
        Ok(Self { pool })
    }

    pub async fn get(&self) -> Result<deadpool::Object<Connection>, Error> {
        self.pool.get().await.map_err(|_| Error::CheckoutConnectionPool)
    }

    fn url(path: &Path) -> Result<String, Error> {
        path.to_str()
            .map(str::to_owned)
            .ok_or_eyre("Database path is not valid UTF-8")
            .map_err(Error::from)
    }

    fn establish(url: &str) -> BoxFuture<'_, ConnectionResult<Connection>> {
        async move {
            let mut connection = Connection::establish(url).await?;
            connection
                .batch_execute(Self::SETUP_QUERY)
                .await
                .map_err(ConnectionError::CouldntSetupConfiguration)?;
            Ok(connection)
        }
        .boxed()
    }
}
