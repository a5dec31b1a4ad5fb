//! Job repository implementations.

pub mod job;
pub mod memory;

pub use job::JobRepository;
pub use memory::MemoryJobRepository;
