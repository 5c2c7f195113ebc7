//! Data Transfer Objects for REST request/response serialization.
//!
//! The wire shape mirrors the stored record one-to-one; the mapping
//! functions here are the only place the two representations meet.

pub mod athlete_dto;

pub use athlete_dto::*;
