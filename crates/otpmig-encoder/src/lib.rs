#![warn(clippy::pedantic)]

pub mod encoder;
pub mod error;

pub use encoder::MigrationEncoder;
pub use error::EncodeError;
