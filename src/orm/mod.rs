pub mod songs;

pub type Type = diesel::sqlite::Sqlite;
