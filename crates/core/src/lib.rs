#![allow(clippy::collapsible_if)]

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use config::Config;
pub use error::{Error, Result};
