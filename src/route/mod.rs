mod greeting;
mod song;

use axum::Router;

use crate::database::Database;

pub fn router() -> Router<Database> {
    Router::new().nest("/api/v1", Router::new().merge(greeting::router()).merge(song::router()))
}
