#![warn(clippy::pedantic)]

pub mod presenter;
pub mod report;

pub use presenter::{PresentedAccount, present};
pub use report::{BatchMetadata, MigrationReport};
