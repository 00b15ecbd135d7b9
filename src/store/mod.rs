//! # Dog Store
//!
//! An asynchronous lookup source and the helpers that turn its lookups into
//! [`AsyncResult`] handles.
//!
//! ## Structure
//!
//! - [`DogStore`] - the async trait any backing store implements
//! - [`InMemoryDogStore`] - map-backed implementation with optional latency
//! - [`lookup_dog`] - starts a lookup immediately and hands back the pending result
//! - [`fetch_pair`] - starts two lookups, then awaits both
//!
//! ## Usage
//!
//! ```rust
//! use idiom_recipe::model::Dog;
//! use idiom_recipe::store::{lookup_dog, InMemoryDogStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(InMemoryDogStore::new().with_dog("34", Dog::new("harry")));
//!
//!     let pending = lookup_dog(store, "34");
//!     let dog = pending.await.unwrap();
//!     assert_eq!(dog.name, "harry");
//! }
//! ```

use crate::future::{AsyncFailure, AsyncResult};
use crate::model::Dog;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Source of dogs, looked up by id.
#[async_trait]
pub trait DogStore: Send + Sync + 'static {
    /// Fetches the dog with `id`.
    ///
    /// Fails with [`AsyncFailure::NotFound`] when there is no such dog.
    async fn fetch(&self, id: &str) -> Result<Dog, AsyncFailure>;
}

/// In-memory [`DogStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryDogStore {
    dogs: HashMap<String, Dog>,
    latency: Option<Duration>,
}

impl InMemoryDogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dog(mut self, id: impl Into<String>, dog: Dog) -> Self {
        self.dogs.insert(id.into(), dog);
        self
    }

    /// Every fetch sleeps for `latency` before answering.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}

#[async_trait]
impl DogStore for InMemoryDogStore {
    async fn fetch(&self, id: &str) -> Result<Dog, AsyncFailure> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        let found = self.dogs.get(id).cloned();
        debug!(id, found = found.is_some(), "Fetch");
        found.ok_or_else(|| AsyncFailure::NotFound(id.to_string()))
    }
}

/// Starts fetching `id` on the runtime and returns the pending result.
///
/// The fetch runs whether or not anyone awaits the handle.
pub fn lookup_dog<S>(store: Arc<S>, id: impl Into<String>) -> AsyncResult<Dog, AsyncFailure>
where
    S: DogStore + ?Sized,
{
    let id = id.into();
    AsyncResult::spawn(async move { store.fetch(&id).await })
}

/// Starts both lookups before awaiting either, then awaits them in order.
#[instrument(skip(store))]
pub async fn fetch_pair<S>(store: Arc<S>, first: &str, second: &str) -> Result<(Dog, Dog), AsyncFailure>
where
    S: DogStore + ?Sized,
{
    let first_dog = lookup_dog(Arc::clone(&store), first);
    let second_dog = lookup_dog(store, second);

    let first_dog = first_dog.await?;
    let second_dog = second_dog.await?;
    info!(first = %first_dog.name, second = %second_dog.name, "Fetched pair");
    Ok((first_dog, second_dog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn kennel() -> Arc<InMemoryDogStore> {
        Arc::new(
            InMemoryDogStore::new()
                .with_dog("34", Dog::new("harry"))
                .with_dog("32344", Dog::new("rex")),
        )
    }

    #[tokio::test]
    async fn test_lookup_found() {
        let dog = lookup_dog(kennel(), "34").await.unwrap();
        assert_eq!(dog, Dog::new("harry"));
    }

    #[tokio::test]
    async fn test_lookup_missing_propagates_not_found() {
        let result = lookup_dog(kennel(), "1").await;
        assert_eq!(result, Err(AsyncFailure::NotFound("1".into())));
    }

    #[tokio::test]
    async fn test_fetch_pair() {
        let (a, b) = fetch_pair(kennel(), "34", "32344").await.unwrap();
        assert_eq!(a.name, "harry");
        assert_eq!(b.name, "rex");
    }

    #[tokio::test]
    async fn test_fetch_pair_fails_on_either_lookup() {
        let result = fetch_pair(kennel(), "34", "missing").await;
        assert_eq!(result, Err(AsyncFailure::NotFound("missing".into())));
    }

    /// Counts concurrent fetches to show both lookups are in flight together.
    struct OverlapStore {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    #[async_trait]
    impl DogStore for OverlapStore {
        async fn fetch(&self, id: &str) -> Result<Dog, AsyncFailure> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(50)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(Dog::new(id))
        }
    }

    #[tokio::test]
    async fn test_fetch_pair_overlaps_lookups() {
        let store = Arc::new(OverlapStore {
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        });
        fetch_pair(Arc::clone(&store), "a", "b").await.unwrap();
        assert_eq!(store.peak.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_trait_object_store() {
        let store: Arc<dyn DogStore> = kennel();
        let dog = lookup_dog(store, "32344").await.unwrap();
        assert_eq!(dog.name, "rex");
    }
}
