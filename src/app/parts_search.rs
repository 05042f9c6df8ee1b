use crate::core::{PartsLookup, Record};
use crate::utils::error::Result;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Results(Vec<Record>),
    /// A newer search was issued while this one was in flight.
    Superseded,
}

/// Search-as-you-type session over the stock service.
///
/// Identical queries are answered from memory for the lifetime of the
/// session. Responses that arrive after a newer query has been issued are
/// dropped so a slow early request cannot overwrite fresher results.
pub struct PartsSearch<L: PartsLookup> {
    lookup: L,
    latest: AtomicU64,
    cache: Mutex<HashMap<String, Vec<Record>>>,
}

impl<L: PartsLookup> PartsSearch<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            latest: AtomicU64::new(0),
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub async fn search(&self, query: &str) -> Result<SearchOutcome> {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let key = query.trim();
        if key.is_empty() {
            return Ok(SearchOutcome::Results(Vec::new()));
        }

        if let Some(hit) = self.cached(key) {
            tracing::debug!("Parts search cache hit for '{}'", key);
            return Ok(SearchOutcome::Results(hit));
        }

        let results = self.lookup.lookup(key).await?;
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), results.clone());

        if self.latest.load(Ordering::SeqCst) != seq {
            tracing::debug!("Discarding stale parts search #{} for '{}'", seq, key);
            return Ok(SearchOutcome::Superseded);
        }
        Ok(SearchOutcome::Results(results))
    }

    pub fn cached_queries(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    fn cached(&self, key: &str) -> Option<Vec<Record>> {
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;
    use tokio::sync::Notify;

    struct FakeLookup {
        gate: Arc<Notify>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PartsLookup for FakeLookup {
        async fn lookup(&self, query: &str) -> Result<Vec<Record>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if query == "skærm" {
                self.gate.notified().await;
            }
            Ok(vec![Record::named("name", format!("{} part", query))])
        }
    }

    fn session() -> (PartsSearch<FakeLookup>, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let lookup = FakeLookup {
            gate: gate.clone(),
            calls: AtomicUsize::new(0),
        };
        (PartsSearch::new(lookup), gate)
    }

    #[tokio::test]
    async fn test_identical_queries_hit_cache() {
        let (search, _gate) = session();

        let first = search.search("batteri").await.unwrap();
        let second = search.search("  batteri ").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(search.lookup.calls.load(Ordering::SeqCst), 1);
        assert_eq!(search.cached_queries(), 1);
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let (search, gate) = session();

        let (slow, fast) = tokio::join!(search.search("skærm"), async {
            let out = search.search("batteri").await;
            gate.notify_one();
            out
        });

        assert_eq!(slow.unwrap(), SearchOutcome::Superseded);
        match fast.unwrap() {
            SearchOutcome::Results(records) => {
                assert_eq!(records[0].str_field("name"), "batteri part")
            }
            SearchOutcome::Superseded => panic!("latest search must not be discarded"),
        }
        // the stale answer is still remembered for later
        assert_eq!(search.cached_queries(), 2);
    }

    #[tokio::test]
    async fn test_empty_query_skips_lookup() {
        let (search, _gate) = session();
        assert_eq!(
            search.search("   ").await.unwrap(),
            SearchOutcome::Results(Vec::new())
        );
        assert_eq!(search.lookup.calls.load(Ordering::SeqCst), 0);
    }
}
