//! # jobboard-core
//!
//! Core crate for Jobboard. Contains the repository and health-probe
//! traits, configuration schemas, the job identifier type, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other Jobboard crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
