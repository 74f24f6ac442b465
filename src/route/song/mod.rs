mod create;
mod list;

use axum::Router;
use axum::routing::post;

use crate::database::Database;

pub fn router() -> Router<Database> {
    Router::new().route("/songs", post(create::handler).get(list::handler))
}
