//! Service layer: filter logic over the full record set.

pub mod athlete_service;

pub use athlete_service::AthleteService;
