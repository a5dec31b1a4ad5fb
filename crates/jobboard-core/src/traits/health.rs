//! Dependency health probing.

use async_trait::async_trait;

use crate::result::AppResult;

/// A best-effort reachability check against an external dependency.
#[async_trait]
pub trait DependencyProbe: Send + Sync + 'static {
    /// Short name used in logs (e.g. `"postgres"`).
    fn name(&self) -> &'static str;

    /// Perform a trivial round trip. `Ok(())` means reachable.
    async fn check(&self) -> AppResult<()>;
}
