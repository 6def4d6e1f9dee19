//! Library surface of the survey analyzer CLI.
//!
//! Exposes the logging setup so integration tests and the binary share
//! one subscriber configuration.

pub mod logging;
