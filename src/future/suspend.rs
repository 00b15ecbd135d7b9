//! # Suspension Points
//!
//! [`suspend`] turns "call me back exactly once" into "wait here".
//!
//! The calling task parks on a `tokio::sync::oneshot` receiver, so the worker
//! thread is free to run other tasks until the [`Continuation`] is resumed.

use super::error::Abandoned;
use tokio::sync::oneshot;

/// The resume handle passed to a [`suspend`] registration.
///
/// Consuming `self` on every resume method means a continuation can be
/// resumed at most once. Dropping it without resuming wakes the waiter with
/// [`Abandoned`].
#[derive(Debug)]
pub struct Continuation<T, E> {
    sender: oneshot::Sender<Result<T, E>>,
}

impl<T, E> Continuation<T, E> {
    /// Resumes the waiter with a value.
    pub fn resume(self, value: T) {
        self.resume_with(Ok(value));
    }

    /// Resumes the waiter with a failure, which it returns unchanged.
    pub fn resume_with_error(self, error: E) {
        self.resume_with(Err(error));
    }

    pub fn resume_with(self, outcome: Result<T, E>) {
        // The waiter may have been dropped (cancelled); nothing to deliver to.
        let _ = self.sender.send(outcome);
    }

    /// `true` once the waiting side has gone away.
    pub fn is_cancelled(&self) -> bool {
        self.sender.is_closed()
    }
}

/// Suspends the current task until the continuation handed to `register` is
/// resumed.
///
/// `register` runs synchronously, before the first poll completes, and is
/// expected to stash the continuation in some callback. If the callback fires
/// before the task actually parks, the outcome is buffered and the wait
/// returns on its first poll.
///
/// # Example
/// ```
/// use idiom_recipe::future::{suspend, AsyncFailure};
///
/// # #[tokio::main]
/// # async fn main() {
/// let answer: Result<u32, AsyncFailure> = suspend(|continuation| {
///     std::thread::spawn(move || continuation.resume(42));
/// })
/// .await;
/// assert_eq!(answer, Ok(42));
/// # }
/// ```
pub async fn suspend<T, E, F>(register: F) -> Result<T, E>
where
    F: FnOnce(Continuation<T, E>),
    E: From<Abandoned>,
{
    let (sender, receiver) = oneshot::channel();
    register(Continuation { sender });
    receiver.await.map_err(|_| E::from(Abandoned))?
}
