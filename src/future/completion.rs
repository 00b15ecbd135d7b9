//! # One-Shot Results
//!
//! [`AsyncResult`] is the read side of a value that will exist later;
//! [`Promise`] is its single write side.
//!
//! ## State Machine
//!
//! ```text
//! Pending --resolve(v)--> Resolved(v)
//! Pending --fail(e)-----> Failed(e)
//! ```
//!
//! Both terminal states are final. The state sits behind one mutex so that
//! registering an observer and resolving are serialized: an observer added
//! while pending runs at resolution, an observer added afterwards runs on the
//! spot. Observers themselves always run outside the lock.

use super::error::Abandoned;
use super::suspend::{suspend, Continuation};
use futures::future::BoxFuture;
use std::fmt::Debug;
use std::future::{Future, IntoFuture};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

enum Observer<T, E> {
    Callback(Box<dyn FnOnce(Result<T, E>) + Send>),
    Waiter(Continuation<T, E>),
}

impl<T, E> Observer<T, E> {
    /// A waiter whose future was dropped can never be woken.
    fn is_cancelled(&self) -> bool {
        match self {
            Observer::Callback(_) => false,
            Observer::Waiter(continuation) => continuation.is_cancelled(),
        }
    }

    fn notify(self, outcome: Result<T, E>) {
        match self {
            Observer::Callback(callback) => callback(outcome),
            Observer::Waiter(continuation) => continuation.resume_with(outcome),
        }
    }
}

enum State<T, E> {
    Pending(Vec<Observer<T, E>>),
    Resolved(T),
    Failed(E),
}

type Shared<T, E> = Arc<Mutex<State<T, E>>>;

fn lock<T, E>(shared: &Mutex<State<T, E>>) -> MutexGuard<'_, State<T, E>> {
    // Observers never run under the lock, so a poisoned guard still holds a
    // consistent state.
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle to the eventual outcome of an asynchronous operation.
///
/// Cloning is cheap and every clone observes the same outcome. Any number of
/// tasks may [`wait`](AsyncResult::wait) on it; each receives its own clone of
/// the value (or of the failure).
///
/// ```
/// use idiom_recipe::future::{AsyncFailure, AsyncResult};
///
/// # #[tokio::main]
/// # async fn main() {
/// let (promise, result) = AsyncResult::<u32, AsyncFailure>::pending();
/// let waiter = tokio::spawn(result.clone().into_future());
///
/// promise.resolve(34);
/// assert_eq!(waiter.await.unwrap(), Ok(34));
/// assert_eq!(result.await, Ok(34));
/// # }
/// # use std::future::IntoFuture;
/// ```
pub struct AsyncResult<T, E> {
    shared: Shared<T, E>,
}

/// The producer half of an [`AsyncResult`].
///
/// Every completing method takes `self`, so a promise resolves at most once.
/// Dropping it unresolved fails the result with [`Abandoned`].
pub struct Promise<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + From<Abandoned> + Send + 'static,
{
    shared: Option<Shared<T, E>>,
}

impl<T, E> Clone for AsyncResult<T, E> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T, E> Debug for AsyncResult<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match &*lock(&self.shared) {
            State::Pending(observers) => format!("Pending({} observers)", observers.len()),
            State::Resolved(_) => "Resolved".to_string(),
            State::Failed(_) => "Failed".to_string(),
        };
        f.debug_struct("AsyncResult").field("state", &status).finish()
    }
}

impl<T, E> AsyncResult<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    /// Creates a pending result together with the promise that settles it.
    pub fn pending() -> (Promise<T, E>, Self)
    where
        E: From<Abandoned>,
    {
        let shared = Arc::new(Mutex::new(State::Pending(Vec::new())));
        let promise = Promise {
            shared: Some(Arc::clone(&shared)),
        };
        (promise, Self { shared })
    }

    /// A result that already holds `value`.
    pub fn resolved(value: T) -> Self {
        Self {
            shared: Arc::new(Mutex::new(State::Resolved(value))),
        }
    }

    /// A result that already holds `error`.
    pub fn failed(error: E) -> Self {
        Self {
            shared: Arc::new(Mutex::new(State::Failed(error))),
        }
    }

    /// Runs `future` on the Tokio runtime and settles the result with its
    /// output.
    ///
    /// Must be called from within a runtime. If the task panics the promise is
    /// dropped during unwinding and waiters see [`Abandoned`].
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
        E: From<Abandoned>,
    {
        let (promise, result) = Self::pending();
        tokio::spawn(async move { promise.complete(future.await) });
        result
    }

    pub fn is_complete(&self) -> bool {
        !matches!(&*lock(&self.shared), State::Pending(_))
    }

    /// The outcome if already settled, without waiting.
    pub fn try_outcome(&self) -> Option<Result<T, E>> {
        match &*lock(&self.shared) {
            State::Pending(_) => None,
            State::Resolved(value) => Some(Ok(value.clone())),
            State::Failed(error) => Some(Err(error.clone())),
        }
    }

    /// Registers a completion observer.
    ///
    /// The observer runs exactly once: at resolution time if the result is
    /// still pending, otherwise immediately on the calling thread.
    pub fn when_complete<F>(&self, observer: F)
    where
        F: FnOnce(Result<T, E>) + Send + 'static,
    {
        self.observe(Observer::Callback(Box::new(observer)));
    }

    /// Suspends until the result settles.
    ///
    /// Returns the produced value, or the producer's failure exactly as it was
    /// raised. Registers one observer per call; concurrent waits do not
    /// interfere with each other. A wait that is dropped early (say, by a
    /// timeout) leaves a cancelled observer behind, which is pruned the next
    /// time anything registers.
    pub async fn wait(&self) -> Result<T, E>
    where
        E: From<Abandoned>,
    {
        suspend(|continuation| self.observe(Observer::Waiter(continuation))).await
    }

    fn observe(&self, observer: Observer<T, E>) {
        let mut state = lock(&self.shared);
        let outcome = match &mut *state {
            State::Pending(observers) => {
                observers.retain(|registered| !registered.is_cancelled());
                observers.push(observer);
                return;
            }
            State::Resolved(value) => Ok(value.clone()),
            State::Failed(error) => Err(error.clone()),
        };
        drop(state);
        observer.notify(outcome);
    }
}

impl<T, E> IntoFuture for AsyncResult<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + From<Abandoned> + Send + 'static,
{
    type Output = Result<T, E>;
    type IntoFuture = BoxFuture<'static, Result<T, E>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move { self.wait().await })
    }
}

impl<T, E> Promise<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + From<Abandoned> + Send + 'static,
{
    pub fn resolve(self, value: T) {
        self.complete(Ok(value));
    }

    pub fn fail(self, error: E) {
        self.complete(Err(error));
    }

    /// Settles the result and runs every registered observer.
    pub fn complete(mut self, outcome: Result<T, E>) {
        if let Some(shared) = self.shared.take() {
            settle(&shared, outcome);
        }
    }
}

impl<T, E> Drop for Promise<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + From<Abandoned> + Send + 'static,
{
    fn drop(&mut self) {
        if let Some(shared) = self.shared.take() {
            warn!("Promise dropped before completion");
            settle(&shared, Err(E::from(Abandoned)));
        }
    }
}

fn settle<T, E>(shared: &Mutex<State<T, E>>, outcome: Result<T, E>)
where
    T: Clone,
    E: Clone,
{
    let observers = {
        let mut state = lock(shared);
        let settled = match &outcome {
            Ok(value) => State::Resolved(value.clone()),
            Err(error) => State::Failed(error.clone()),
        };
        match std::mem::replace(&mut *state, settled) {
            State::Pending(observers) => observers,
            // Only a promise settles, and only once.
            previous => {
                *state = previous;
                return;
            }
        }
    };

    debug!(ok = outcome.is_ok(), observers = observers.len(), "Result settled");
    for observer in observers {
        observer.notify(outcome.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::future::AsyncFailure;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_resolved_before_wait_returns_immediately() {
        let result = AsyncResult::<u32, AsyncFailure>::resolved(5);
        let value = tokio::time::timeout(Duration::from_secs(1), result.wait())
            .await
            .expect("wait on a resolved result must not suspend");
        assert_eq!(value, Ok(5));
    }

    #[tokio::test]
    async fn test_resolved_after_wait_returns_only_after_resolution() {
        let (promise, result) = AsyncResult::<&str, AsyncFailure>::pending();
        let waiter = tokio::spawn(result.clone().into_future());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!waiter.is_finished());
        assert!(!result.is_complete());

        promise.resolve("harry");
        assert_eq!(waiter.await.unwrap(), Ok("harry"));
        assert!(result.is_complete());
    }

    #[tokio::test]
    async fn test_failure_propagates_exactly() {
        let (promise, result) = AsyncResult::<u32, AsyncFailure>::pending();
        promise.fail(AsyncFailure::Lookup("connection reset".into()));
        assert_eq!(
            result.wait().await,
            Err(AsyncFailure::Lookup("connection reset".into()))
        );
    }

    #[tokio::test]
    async fn test_dropped_promise_abandons_waiters() {
        let (promise, result) = AsyncResult::<u32, AsyncFailure>::pending();
        let waiter = tokio::spawn(result.into_future());
        tokio::task::yield_now().await;
        drop(promise);
        assert_eq!(
            waiter.await.unwrap(),
            Err(AsyncFailure::Abandoned(Abandoned))
        );
    }

    #[tokio::test]
    async fn test_observer_fires_once_per_registration() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (promise, result) = AsyncResult::<u32, AsyncFailure>::pending();

        let before = Arc::clone(&calls);
        result.when_complete(move |outcome| {
            assert_eq!(outcome, Ok(1));
            before.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        promise.resolve(1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let after = Arc::clone(&calls);
        result.when_complete(move |_| {
            after.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_many_waiters_on_one_result() {
        let (promise, result) = AsyncResult::<String, AsyncFailure>::pending();
        let waiters: Vec<_> = (0..8)
            .map(|_| tokio::spawn(result.clone().into_future()))
            .collect();

        promise.resolve("UK".to_string());
        for waiter in waiters {
            assert_eq!(waiter.await.unwrap(), Ok("UK".to_string()));
        }
    }

    #[tokio::test]
    async fn test_independent_results_do_not_interfere() {
        let (first_promise, first) = AsyncResult::<u32, AsyncFailure>::pending();
        let (_second_promise, second) = AsyncResult::<u32, AsyncFailure>::pending();

        first_promise.resolve(10);
        assert_eq!(first.wait().await, Ok(10));
        assert!(!second.is_complete());
        assert_eq!(second.try_outcome(), None);
    }

    #[tokio::test]
    async fn test_spawned_result() {
        let result = AsyncResult::<u32, AsyncFailure>::spawn(async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Ok(99)
        });
        assert_eq!(result.await, Ok(99));
    }

    fn crash() -> Result<u32, AsyncFailure> {
        panic!("producer crashed")
    }

    #[tokio::test]
    async fn test_panicking_producer_is_abandoned() {
        let result = AsyncResult::spawn(async { crash() });
        assert_eq!(result.await, Err(AsyncFailure::Abandoned(Abandoned)));
    }

    #[tokio::test]
    async fn test_timed_out_waiters_are_pruned() {
        let (_promise, result) = AsyncResult::<u32, AsyncFailure>::pending();
        for _ in 0..3 {
            let timed_out = tokio::time::timeout(Duration::from_millis(1), result.wait()).await;
            assert!(timed_out.is_err());
        }
        assert_eq!(
            format!("{result:?}"),
            r#"AsyncResult { state: "Pending(3 observers)" }"#
        );

        result.when_complete(|_| {});
        assert_eq!(
            format!("{result:?}"),
            r#"AsyncResult { state: "Pending(1 observers)" }"#
        );
    }

    #[test]
    fn test_debug_reports_state() {
        let result = AsyncResult::<u32, AsyncFailure>::failed(AsyncFailure::NotFound("7".into()));
        assert_eq!(format!("{result:?}"), r#"AsyncResult { state: "Failed" }"#);
    }
}
