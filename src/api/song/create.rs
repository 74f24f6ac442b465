use serde::{Deserialize, Serialize};

use crate::Error;

/// Body of a song creation request. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(fake::Dummy))]
pub struct Request {
    #[cfg_attr(test, dummy(faker = "1..32"))]
    pub title: String,
    #[cfg_attr(test, dummy(faker = "1..32"))]
    pub artist: String,
    #[cfg_attr(test, dummy(faker = "1..32"))]
    pub album: String,
    #[cfg_attr(test, dummy(faker = "1900..2100"))]
    pub year: i32,
    #[cfg_attr(test, dummy(faker = "1..32"))]
    pub genre: String,
}

impl Request {
    /// Rejects zero values the same way a missing field is rejected.
    pub fn validate(&self) -> Result<(), Error> {
        let Self { title, artist, album, year, genre } = self;
        if title.is_empty() {
            Err(Error::BadRequest("title is required"))
        } else if artist.is_empty() {
            Err(Error::BadRequest("artist is required"))
        } else if album.is_empty() {
            Err(Error::BadRequest("album is required"))
        } else if *year == 0 {
            Err(Error::BadRequest("year is required"))
        } else if genre.is_empty() {
            Err(Error::BadRequest("genre is required"))
        } else {
            Ok(())
        }
    }
}
