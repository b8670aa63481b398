//! ATS analyzer library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod nlp;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{AtsError, Result};
