//! Convenience result type alias for Jobboard.

use crate::error::AppError;

/// A specialized `Result` type for Jobboard operations.
pub type AppResult<T> = Result<T, AppError>;
