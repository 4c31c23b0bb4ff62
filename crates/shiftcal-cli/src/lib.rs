//! Batch binary internals: configuration, pipeline orchestration and
//! publication of the republished calendar.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod publish;

pub use config::RunConfig;
pub use error::{CliError, CliResult};
