use diesel::{QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;

use super::Database;
use crate::orm::songs;
use crate::{Error, api};

impl Database {
    pub async fn create_song(&self, song: &api::song::Song) -> Result<(), Error> {
        diesel::insert_into(songs::table)
            .values(songs::Song::from(song))
            .execute(&mut self.get().await?)
            .await?;
        Ok(())
    }

    pub async fn get_all_songs(&self) -> Result<Vec<api::song::Song>, Error> {
        songs::table
            .select(songs::Song::as_select())
            .get_results(&mut self.get().await?)
            .await?
            .into_iter()
            .map(api::song::Song::try_from)
            .collect()
    }
}
