//! Loan Calculator Configuration
//!
//! Settings are layered:
//! 1. Built-in defaults
//! 2. Optional TOML file (`loan-calc.toml` or `--config <path>`)
//! 3. `LOAN_CALC__*` environment variables

pub mod constants;
pub mod settings;

pub use settings::{ConfigError, FormDefaults, LoggingSettings, Settings};
