//! # podium-api
//!
//! REST API for Olympic athlete results.
//!
//! This crate exposes a thin CRUD surface over athlete records (name,
//! nationality, event, medal, location, year, result) stored in
//! PostgreSQL. There is no business logic beyond field-equality and
//! substring filters — this service is a mapping layer.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── AthleteService (service/)
//!     │
//!     ├── AthleteStore trait (persistence/)
//!     │       ├── PostgresStore (production)
//!     │       └── MemoryStore (tests)
//!     │
//!     └── PostgreSQL
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
