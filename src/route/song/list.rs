use axum::Json;
use axum::extract::State;

use crate::api::song::Song;
use crate::database::Database;
use crate::{Error, service};

pub async fn handler(State(database): State<Database>) -> Result<Json<Vec<Song>>, Error> {
    Ok(Json(service::song::get_all(&database).await?))
}
