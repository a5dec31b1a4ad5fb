//! # jobboard-entity
//!
//! Domain models for Jobboard. [`job::JobRow`] is the stored row of the
//! `jobs` table, [`job::Job`] is the JSON shape exchanged over HTTP, and
//! [`job::NewJob`] is a validated create payload that has not been given an
//! identifier yet.

pub mod job;
