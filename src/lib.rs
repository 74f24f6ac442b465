pub mod api;
pub mod config;
pub mod constant;
pub mod database;
mod error;
mod migration;
mod orm;
mod route;
mod schema;
pub mod service;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use concat_string::concat_string;
pub use error::Error;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::log::Format;
use crate::database::Database;

pub fn build(database: Database) -> Router {
    Router::new().merge(route::router()).with_state(database).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id =
                    request.headers().get("x-request-id").and_then(|value| value.to_str().ok());
                tracing::info_span!(
                    "request", method = %request.method(), uri = %request.uri(), request_id
                )
            }))
            .layer(PropagateRequestIdLayer::x_request_id()),
    )
}

pub fn init_tracing(config: &config::Log) -> Result<(), color_eyre::Report> {
    color_eyre::install()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        concat_string!(constant::SERVER_NAME, "=info,tower_http=info").into()
    });
    let registry = tracing_subscriber::registry().with(filter).with(ErrorLayer::default());

    match (&config.format, config.time) {
        (Format::Plain, true) => registry.with(fmt::layer()).try_init()?,
        (Format::Plain, false) => registry.with(fmt::layer().without_time()).try_init()?,
        (Format::Json, true) => registry.with(fmt::layer().json()).try_init()?,
        (Format::Json, false) => registry.with(fmt::layer().json().without_time()).try_init()?,
    }
    Ok(())
}

#[cfg(test)]
mod test;
