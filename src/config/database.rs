use std::path::PathBuf;

use educe::Educe;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Educe)]
#[educe(Default)]
#[serde(default)]
pub struct Database {
    /// Location of the SQLite file. Missing parent directories are created on startup.
    #[educe(Default(expression = "storage/sqlite/playlist.db".into()))]
    pub path: PathBuf,
}
