mod database;
pub mod log;
mod server;

pub use database::Database;
use figment::Figment;
use figment::providers::{Env, Serialized};
pub use log::Log;
use serde::Deserialize;
pub use server::Server;

use crate::constant;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub server: Server,
    pub database: Database,
    pub log: Log,
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        let env = Env::prefixed(const_format::concatcp!(constant::SERVER_NAME, "_")).split("__");
        Self::figment(env).extract()
    }

    fn figment(provider: impl figment::Provider) -> Figment {
        Figment::new()
            .merge(provider)
            .join(Serialized::default("server", Server::default()))
            .join(Serialized::default("database", Database::default()))
            .join(Serialized::default("log", Log::default()))
    }
}
