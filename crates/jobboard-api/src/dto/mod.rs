//! Response DTOs that are not domain entities.

pub mod response;
