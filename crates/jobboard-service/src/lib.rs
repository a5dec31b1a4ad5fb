//! # jobboard-service
//!
//! Use cases behind the HTTP handlers. Services depend only on the
//! repository and probe traits from `jobboard-core`, never on a concrete
//! database.

pub mod health;
pub mod job;

pub use health::{DependencyStatus, HealthReport, HealthService};
pub use job::JobService;
