//! The athlete record: one participant's result at one Olympic event.

/// A single athlete result record.
///
/// `id` is the unique, immutable key. Every other field is free text and
/// may be absent — the source dataset leaves medal empty for non-podium
/// results and has gaps elsewhere. No field is validated on write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Athlete {
    /// Unique record identifier, caller-supplied.
    pub id: String,
    /// Athlete gender.
    pub gender: Option<String>,
    /// Event name (e.g. `"100M Men"`).
    pub event: Option<String>,
    /// Host city of the games.
    pub location: Option<String>,
    /// Year of the games, kept as text.
    pub year: Option<String>,
    /// Medal won, if any (`"G"`, `"S"`, `"B"` or longer forms).
    pub medal: Option<String>,
    /// Athlete full name.
    pub name: Option<String>,
    /// Athlete nationality, as recorded (may carry stray whitespace).
    pub nationality: Option<String>,
    /// Result mark (time, distance, score) as text.
    pub result: Option<String>,
}
