use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;

use crate::api::greeting::{Request, Response};
use crate::database::Database;
use crate::{Error, service};

pub fn router() -> Router<Database> {
    Router::new().route("/greeting", get(handler))
}

async fn handler(
    WithRejection(Query(request), _): WithRejection<Query<Request>, Error>,
) -> Result<Json<Response>, Error> {
    let name = request
        .name
        .filter(|name| !name.is_empty())
        .ok_or(Error::BadRequest("name parameter is required"))?;
    Ok(Json(Response { message: service::greeting::message(&name) }))
}
