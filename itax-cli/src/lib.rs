//! Command-line front end for the income tax estimator.

pub mod config;
pub mod format;
pub mod logging;
pub mod report;
pub mod utils;
