//! Athlete wire representation and query parameter types.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Athlete;

/// Athlete record as sent and received over HTTP.
///
/// Every field except `id` is optional; absent fields are stored as
/// nulls. No server-side validation is applied.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteDto {
    /// Unique record identifier, caller-supplied.
    pub id: String,
    /// Athlete gender.
    #[serde(default)]
    pub gender: Option<String>,
    /// Event name.
    #[serde(default)]
    pub event: Option<String>,
    /// Host city of the games.
    #[serde(default)]
    pub location: Option<String>,
    /// Year of the games.
    #[serde(default)]
    pub year: Option<String>,
    /// Medal won, if any.
    #[serde(default)]
    pub medal: Option<String>,
    /// Athlete full name.
    #[serde(default)]
    pub name: Option<String>,
    /// Athlete nationality.
    #[serde(default)]
    pub nationality: Option<String>,
    /// Result mark as text.
    #[serde(default)]
    pub result: Option<String>,
}

impl From<AthleteDto> for Athlete {
    fn from(dto: AthleteDto) -> Self {
        Self {
            id: dto.id,
            gender: dto.gender,
            event: dto.event,
            location: dto.location,
            year: dto.year,
            medal: dto.medal,
            name: dto.name,
            nationality: dto.nationality,
            result: dto.result,
        }
    }
}

impl From<Athlete> for AthleteDto {
    fn from(athlete: Athlete) -> Self {
        Self {
            id: athlete.id,
            gender: athlete.gender,
            event: athlete.event,
            location: athlete.location,
            year: athlete.year,
            medal: athlete.medal,
            name: athlete.name,
            nationality: athlete.nationality,
            result: athlete.result,
        }
    }
}

/// Query parameters for `GET /athletes/name`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct NameQuery {
    /// Exact athlete name to look up.
    pub name: String,
}

/// Query parameters for `GET /athletes/nationality`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct NationalityQuery {
    /// Nationality to match (trimmed, case-insensitive).
    pub nationality: String,
}

/// Query parameters for `GET /athletes/medal`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct MedalQuery {
    /// Substring to match against the medal field.
    pub medal: String,
}
