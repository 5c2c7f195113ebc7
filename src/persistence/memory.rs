//! In-memory athlete store for tests and local demos.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::AthleteStore;
use crate::domain::Athlete;
use crate::error::ApiError;

/// `HashMap`-backed store keyed by athlete id.
///
/// Matches [`super::postgres::PostgresStore`] semantics: upsert by id,
/// deterministic id-ordered listing, case-insensitive substring name
/// search. Never fails.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, Athlete>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AthleteStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Athlete>, ApiError> {
        let map = self.records.read().await;
        let mut all: Vec<Athlete> = map.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Athlete>, ApiError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn save(&self, athlete: &Athlete) -> Result<(), ApiError> {
        self.records
            .write()
            .await
            .insert(athlete.id.clone(), athlete.clone());
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Athlete>, ApiError> {
        let map = self.records.read().await;
        Ok(map
            .values()
            .find(|a| a.name.as_deref() == Some(name))
            .cloned())
    }

    async fn find_by_name_containing_ignore_case(
        &self,
        fragment: &str,
    ) -> Result<Vec<Athlete>, ApiError> {
        let needle = fragment.to_lowercase();
        let map = self.records.read().await;
        let mut matches: Vec<Athlete> = map
            .values()
            .filter(|a| {
                a.name
                    .as_deref()
                    .is_some_and(|n| n.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(matches)
    }

    async fn delete_by_name(&self, name: &str) -> Result<(), ApiError> {
        self.records
            .write()
            .await
            .retain(|_, a| a.name.as_deref() != Some(name));
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn athlete(id: &str, name: &str) -> Athlete {
        Athlete {
            id: id.to_string(),
            gender: None,
            event: None,
            location: None,
            year: None,
            medal: None,
            name: Some(name.to_string()),
            nationality: None,
            result: None,
        }
    }

    #[tokio::test]
    async fn save_then_find_by_id() {
        let store = MemoryStore::new();
        let Ok(()) = store.save(&athlete("1", "Usain Bolt")).await else {
            panic!("save failed");
        };

        let Ok(found) = store.find_by_id("1").await else {
            panic!("lookup failed");
        };
        assert_eq!(found.and_then(|a| a.name), Some("Usain Bolt".to_string()));
    }

    #[tokio::test]
    async fn save_overwrites_same_id() {
        let store = MemoryStore::new();
        let Ok(()) = store.save(&athlete("1", "First")).await else {
            panic!("save failed");
        };
        let Ok(()) = store.save(&athlete("1", "Second")).await else {
            panic!("save failed");
        };

        let Ok(all) = store.find_all().await else {
            panic!("find_all failed");
        };
        assert_eq!(all.len(), 1);
        assert_eq!(all.first().and_then(|a| a.name.as_deref()), Some("Second"));
    }

    #[tokio::test]
    async fn substring_search_is_case_insensitive() {
        let store = MemoryStore::new();
        let Ok(()) = store.save(&athlete("1", "Usain Bolt")).await else {
            panic!("save failed");
        };
        let Ok(()) = store.save(&athlete("2", "Shelly-Ann Fraser-Pryce")).await else {
            panic!("save failed");
        };

        let Ok(hits) = store.find_by_name_containing_ignore_case("BOLT").await else {
            panic!("search failed");
        };
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().map(|a| a.id.as_str()), Some("1"));
    }

    #[tokio::test]
    async fn delete_by_name_removes_all_matches() {
        let store = MemoryStore::new();
        let Ok(()) = store.save(&athlete("1", "Usain Bolt")).await else {
            panic!("save failed");
        };
        let Ok(()) = store.save(&athlete("2", "Usain Bolt")).await else {
            panic!("save failed");
        };
        let Ok(()) = store.delete_by_name("Usain Bolt").await else {
            panic!("delete failed");
        };

        let Ok(all) = store.find_all().await else {
            panic!("find_all failed");
        };
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn find_by_name_skips_nameless_records() {
        let store = MemoryStore::new();
        let mut record = athlete("1", "placeholder");
        record.name = None;
        let Ok(()) = store.save(&record).await else {
            panic!("save failed");
        };

        let Ok(found) = store.find_by_name("placeholder").await else {
            panic!("lookup failed");
        };
        assert!(found.is_none());
    }
}
