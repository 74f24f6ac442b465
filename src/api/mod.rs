pub mod greeting;
pub mod song;
