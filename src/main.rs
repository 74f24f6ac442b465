use playlist_builder::config::Config;
use playlist_builder::database::Database;
use playlist_builder::{build, constant, init_tracing};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let config = Config::new()?;
    init_tracing(&config.log)?;
    tracing::info!(server_version =% constant::SERVER_VERSION);
    tracing::info!("{config:#?}");

    let database = Database::new(&config.database).await?;

    let listener = tokio::net::TcpListener::bind(config.server.to_socket_addr()).await?;
    tracing::info!(address = %listener.local_addr()?, "listening");
    axum::serve(listener, build(database)).await?;
    Ok(())
}
