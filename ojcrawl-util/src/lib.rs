#![warn(clippy::all)]

#[macro_use]
extern crate strum;

pub mod console;
pub mod error;
mod macros;
pub mod model;
pub mod serde_ext;
pub mod service;

pub use console::{Console, ConsoleConfig};
pub use error::FetchError;

pub type Error = anyhow::Error;
pub type Result<T> = anyhow::Result<T>;
