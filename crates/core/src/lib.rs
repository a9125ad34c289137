//! Domain building blocks for the Gatherly event-planning backend.
//!
//! Everything here is pure logic: resource descriptors, typed query
//! predicates, required-field validation and start-time composition. The
//! `db`, `mail` and `api` crates depend on it; it depends on none of them.

pub mod error;
pub mod query;
pub mod resource;
pub mod schedule;
pub mod types;
pub mod validation;
