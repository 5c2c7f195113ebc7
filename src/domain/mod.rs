//! Domain types: the athlete record.

pub mod athlete;

pub use athlete::Athlete;
