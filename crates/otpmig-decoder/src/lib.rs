#![warn(clippy::pedantic)]

pub mod decoder;
pub mod error;
pub mod uri;

pub use decoder::{decode_migration_uri, decode_payload};
pub use error::ExtractError;
pub use uri::{MIGRATION_PREFIX, extract_data};
