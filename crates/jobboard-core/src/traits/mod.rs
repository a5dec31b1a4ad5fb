//! Trait seams between the HTTP layer and its backing dependencies.

pub mod health;
pub mod repository;

pub use health::DependencyProbe;
pub use repository::Repository;
