//! Spawning futures whose errors are logged rather than returned.
//!
//! A forgotten future runs to completion on the current tokio runtime.  Its
//! success value is dropped.  Its error is logged at `warn`, unless the
//! caller's predicate accepts it, in which case it is logged at `debug`.

use std::fmt::Display;
use std::future::Future;

use cs_core::errors::Result;
use cs_core::fail;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Fire-and-forget for fallible futures.
pub trait ForgetExt<T, E>: Future<Output = std::result::Result<T, E>> + Send + Sized + 'static
where
    T: Send + 'static,
    E: Display + Send + 'static,
{
    /// Spawn the future and log its error, if any.
    ///
    /// The returned handle may be dropped; the task keeps running.
    ///
    /// # Errors
    /// [`Error::Runtime`](cs_core::Error::Runtime) when called outside a
    /// tokio runtime.
    fn forget(self) -> Result<JoinHandle<()>> {
        self.forget_accepting(|_| false)
    }

    /// Spawn the future and log its error unless `accept` returns `true`
    /// for it.
    ///
    /// # Errors
    /// [`Error::Runtime`](cs_core::Error::Runtime) when called outside a
    /// tokio runtime.
    fn forget_accepting<P>(self, accept: P) -> Result<JoinHandle<()>>
    where
        P: FnOnce(&E) -> bool + Send + 'static,
    {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => fail!("cannot forget a task outside a tokio runtime: {e}"),
        };
        Ok(handle.spawn(async move {
            if let Err(error) = self.await {
                if accept(&error) {
                    debug!(%error, "forgotten task failed with an accepted error");
                } else {
                    warn!(%error, "forgotten task failed");
                }
            }
        }))
    }
}

impl<F, T, E> ForgetExt<T, E> for F
where
    F: Future<Output = std::result::Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Display + Send + 'static,
{
}
