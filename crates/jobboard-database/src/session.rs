//! Scoped database sessions.

use std::time::Instant;

use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, Postgres};
use tracing::trace;

/// A pooled connection checked out for one operation.
///
/// Dropping the session returns the connection to the pool. Repository
/// methods create one at the top and let it fall out of scope, so the
/// connection is released on success, on `?` early returns, and on panics.
#[derive(Debug)]
pub struct DbSession {
    conn: PoolConnection<Postgres>,
    acquired_at: Instant,
}

impl DbSession {
    pub(crate) fn new(conn: PoolConnection<Postgres>) -> Self {
        trace!("Database session acquired");
        Self {
            conn,
            acquired_at: Instant::now(),
        }
    }

    /// Borrow the live connection as a sqlx executor.
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.conn
    }
}

impl Drop for DbSession {
    fn drop(&mut self) {
        trace!(
            held_ms = self.acquired_at.elapsed().as_millis() as u64,
            "Database session released"
        );
    }
}
