#![warn(clippy::pedantic)]

pub mod account;
pub mod enums;
pub mod escape;
pub mod payload;

pub use account::OtpAccount;
pub use enums::{Algorithm, OtpType};
pub use payload::MigrationPayload;
