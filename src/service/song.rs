use time::OffsetDateTime;
use uuid::Uuid;

use crate::Error;
use crate::api::song::{Song, create};
use crate::database::Database;

pub async fn create(database: &Database, request: create::Request) -> Result<Song, Error> {
    let create::Request { title, artist, album, year, genre } = request;
    let song = Song {
        id: Uuid::new_v4(),
        title,
        artist,
        album,
        year,
        genre,
        created_at: OffsetDateTime::now_utc(),
    };
    database.create_song(&song).await?;
    tracing::debug!(id = %song.id, "created song");
    Ok(song)
}

pub async fn get_all(database: &Database) -> Result<Vec<Song>, Error> {
    database.get_all_songs().await
}
