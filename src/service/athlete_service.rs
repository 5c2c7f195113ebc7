//! Athlete service: CRUD delegation plus in-memory predicate filters.

use std::fmt;
use std::sync::Arc;

use crate::domain::Athlete;
use crate::error::ApiError;
use crate::persistence::AthleteStore;

/// Read/write operations over athlete records.
///
/// Filter methods load the full record set from the store and scan it in
/// memory — O(n) per call, no query pushdown. Acceptable for the small
/// reference dataset this service fronts; there is no indexing.
///
/// Records missing the filtered field never match.
pub struct AthleteService {
    store: Arc<dyn AthleteStore>,
}

impl fmt::Debug for AthleteService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AthleteService").finish_non_exhaustive()
    }
}

impl AthleteService {
    /// Creates a new service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn AthleteStore>) -> Self {
        Self { store }
    }

    /// Returns all records, unfiltered.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] on storage failure.
    pub async fn get_athletes(&self) -> Result<Vec<Athlete>, ApiError> {
        self.store.find_all().await
    }

    /// Returns all records whose nationality equals `nationality`,
    /// comparing case-insensitively after trimming leading and trailing
    /// whitespace on both sides.
    ///
    /// The source dataset carries stray whitespace in the nationality
    /// column, so `" usa "` and `"USA"` are the same country here.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] on storage failure.
    pub async fn get_athletes_from_nationality(
        &self,
        nationality: &str,
    ) -> Result<Vec<Athlete>, ApiError> {
        let wanted = nationality.trim();
        let all = self.store.find_all().await?;
        Ok(all
            .into_iter()
            .filter(|a| {
                a.nationality
                    .as_deref()
                    .is_some_and(|n| n.trim().eq_ignore_ascii_case(wanted))
            })
            .collect())
    }

    /// Returns all records whose name contains `search_text`,
    /// case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] on storage failure.
    pub async fn get_athletes_by_name(&self, search_text: &str) -> Result<Vec<Athlete>, ApiError> {
        let needle = search_text.to_lowercase();
        let all = self.store.find_all().await?;
        Ok(all
            .into_iter()
            .filter(|a| {
                a.name
                    .as_deref()
                    .is_some_and(|n| n.to_lowercase().contains(&needle))
            })
            .collect())
    }

    /// Returns all records whose medal field contains `medal` as a
    /// substring. Records without a medal are skipped; no match is an
    /// empty vec.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] on storage failure.
    pub async fn get_athletes_by_medal(&self, medal: &str) -> Result<Vec<Athlete>, ApiError> {
        let all = self.store.find_all().await?;
        Ok(all
            .into_iter()
            .filter(|a| a.medal.as_deref().is_some_and(|m| m.contains(medal)))
            .collect())
    }

    /// Returns all records whose location equals `city`,
    /// case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] on storage failure.
    pub async fn get_athletes_by_city(&self, city: &str) -> Result<Vec<Athlete>, ApiError> {
        let all = self.store.find_all().await?;
        Ok(all
            .into_iter()
            .filter(|a| {
                a.location
                    .as_deref()
                    .is_some_and(|l| l.eq_ignore_ascii_case(city))
            })
            .collect())
    }

    /// Persists the record, overwriting any existing record with the
    /// same id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] on storage failure.
    pub async fn save_athlete(&self, athlete: &Athlete) -> Result<(), ApiError> {
        self.store.save(athlete).await?;
        tracing::info!(id = %athlete.id, "athlete saved");
        Ok(())
    }

    /// Looks up a record by its unique id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] on storage failure.
    pub async fn get_athlete_by_id(&self, id: &str) -> Result<Option<Athlete>, ApiError> {
        self.store.find_by_id(id).await
    }

    /// Looks up a record by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] on storage failure.
    pub async fn get_athlete_by_name(&self, name: &str) -> Result<Option<Athlete>, ApiError> {
        self.store.find_by_name(name).await
    }

    /// Case-insensitive substring search on name, pushed down to the
    /// store rather than filtered in memory.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] on storage failure.
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Athlete>, ApiError> {
        self.store.find_by_name_containing_ignore_case(name).await
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::persistence::memory::MemoryStore;

    fn record(id: &str) -> Athlete {
        Athlete {
            id: id.to_string(),
            gender: Some("M".to_string()),
            event: Some("100M Men".to_string()),
            location: Some("Rio".to_string()),
            year: Some("2016".to_string()),
            medal: Some("G".to_string()),
            name: Some("Usain Bolt".to_string()),
            nationality: Some("JAM".to_string()),
            result: Some("9.81".to_string()),
        }
    }

    async fn seeded_service(records: Vec<Athlete>) -> AthleteService {
        let store = Arc::new(MemoryStore::new());
        for r in &records {
            let Ok(()) = store.save(r).await else {
                panic!("seed failed");
            };
        }
        AthleteService::new(store)
    }

    #[tokio::test]
    async fn get_athletes_returns_everything() {
        let mut other = record("2");
        other.name = Some("Justin Gatlin".to_string());
        let service = seeded_service(vec![record("1"), other]).await;

        let Ok(all) = service.get_athletes().await else {
            panic!("get_athletes failed");
        };
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn nationality_filter_trims_and_ignores_case() {
        let mut padded = record("1");
        padded.nationality = Some(" usa ".to_string());
        let jam = record("2");
        let service = seeded_service(vec![padded, jam]).await;

        let Ok(hits) = service.get_athletes_from_nationality("USA").await else {
            panic!("filter failed");
        };
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().map(|a| a.id.as_str()), Some("1"));
    }

    #[tokio::test]
    async fn nationality_filter_skips_missing_field() {
        let mut blank = record("1");
        blank.nationality = None;
        let service = seeded_service(vec![blank]).await;

        let Ok(hits) = service.get_athletes_from_nationality("USA").await else {
            panic!("filter failed");
        };
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn name_filter_matches_substring_case_insensitively() {
        let mut gatlin = record("2");
        gatlin.name = Some("Justin Gatlin".to_string());
        let service = seeded_service(vec![record("1"), gatlin]).await;

        let Ok(hits) = service.get_athletes_by_name("bolt").await else {
            panic!("filter failed");
        };
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().map(|a| a.id.as_str()), Some("1"));
    }

    #[tokio::test]
    async fn medal_filter_skips_null_medals() {
        let gold = record("1");
        let mut none = record("2");
        none.medal = None;
        let service = seeded_service(vec![gold, none]).await;

        let Ok(hits) = service.get_athletes_by_medal("G").await else {
            panic!("filter failed");
        };
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().map(|a| a.id.as_str()), Some("1"));
    }

    #[tokio::test]
    async fn medal_filter_is_substring_match() {
        let mut gold = record("1");
        gold.medal = Some("Gold".to_string());
        let service = seeded_service(vec![gold]).await;

        let Ok(hits) = service.get_athletes_by_medal("Go").await else {
            panic!("filter failed");
        };
        assert_eq!(hits.len(), 1);

        let Ok(misses) = service.get_athletes_by_medal("Silver").await else {
            panic!("filter failed");
        };
        assert!(misses.is_empty());
    }

    #[tokio::test]
    async fn city_filter_ignores_case() {
        let service = seeded_service(vec![record("1")]).await;

        let Ok(hits) = service.get_athletes_by_city("rio").await else {
            panic!("filter failed");
        };
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn save_twice_overwrites() {
        let service = seeded_service(vec![]).await;
        let first = record("1");
        let mut second = record("1");
        second.result = Some("9.58".to_string());

        let Ok(()) = service.save_athlete(&first).await else {
            panic!("save failed");
        };
        let Ok(()) = service.save_athlete(&second).await else {
            panic!("save failed");
        };

        let Ok(found) = service.get_athlete_by_id("1").await else {
            panic!("lookup failed");
        };
        assert_eq!(found.and_then(|a| a.result), Some("9.58".to_string()));

        let Ok(all) = service.get_athletes().await else {
            panic!("get_athletes failed");
        };
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn get_by_id_absent_is_none() {
        let service = seeded_service(vec![]).await;

        let Ok(found) = service.get_athlete_by_id("missing").await else {
            panic!("lookup failed");
        };
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn exact_name_lookup() {
        let service = seeded_service(vec![record("1")]).await;

        let Ok(found) = service.get_athlete_by_name("Usain Bolt").await else {
            panic!("lookup failed");
        };
        assert!(found.is_some());

        let Ok(missed) = service.get_athlete_by_name("usain bolt").await else {
            panic!("lookup failed");
        };
        assert!(missed.is_none());
    }

    #[tokio::test]
    async fn search_by_name_uses_store_search() {
        let mut gatlin = record("2");
        gatlin.name = Some("Justin Gatlin".to_string());
        let service = seeded_service(vec![record("1"), gatlin]).await;

        let Ok(hits) = service.search_by_name("USAIN").await else {
            panic!("search failed");
        };
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().map(|a| a.id.as_str()), Some("1"));
    }
}
