use std::borrow::Cow;

use diesel::prelude::*;
use time::{PrimitiveDateTime, UtcOffset};
use uuid::Uuid;

pub use crate::schema::songs::{self, *};
use crate::{Error, api};

#[derive(Debug, Queryable, Selectable, Insertable)]
#[diesel(table_name = songs, check_for_backend(crate::orm::Type))]
pub struct Song<'a> {
    pub id: Cow<'a, str>,
    pub title: Cow<'a, str>,
    pub artist: Cow<'a, str>,
    pub album: Cow<'a, str>,
    pub year: i32,
    pub genre: Cow<'a, str>,
    pub created_at: PrimitiveDateTime,
}

impl<'a> From<&'a api::song::Song> for Song<'a> {
    fn from(value: &'a api::song::Song) -> Self {
        let utc = value.created_at.to_offset(UtcOffset::UTC);
        Self {
            id: value.id.to_string().into(),
            title: value.title.as_str().into(),
            artist: value.artist.as_str().into(),
            album: value.album.as_str().into(),
            year: value.year,
            genre: value.genre.as_str().into(),
            created_at: PrimitiveDateTime::new(utc.date(), utc.time()),
        }
    }
}

impl TryFrom<Song<'_>> for api::song::Song {
    type Error = Error;

    fn try_from(value: Song<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&value.id)?,
            title: value.title.into_owned(),
            artist: value.artist.into_owned(),
            album: value.album.into_owned(),
            year: value.year,
            genre: value.genre.into_owned(),
            created_at: value.created_at.assume_utc(),
        })
    }
}
