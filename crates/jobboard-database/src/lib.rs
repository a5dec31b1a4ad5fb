//! # jobboard-database
//!
//! PostgreSQL connection management, per-operation scoped sessions, schema
//! initialization, the idempotent seed routine, and the job repositories
//! (PostgreSQL and in-memory).

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod seed;
pub mod session;

pub use connection::DatabasePool;
pub use session::DbSession;
