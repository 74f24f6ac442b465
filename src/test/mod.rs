mod database;

pub use mock_impl::{Mock, mock};
