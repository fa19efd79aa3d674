//! Thread-safe handle onto one [`Exchange`].

use std::sync::{Arc, Mutex, MutexGuard};

use crate::exchange::Exchange;
use crate::traits::AssetLedger;

/// A cloneable, thread-safe exchange handle.
///
/// Each call to [`with`](Self::with) holds the lock for the whole
/// closure, so a routed swap touching two pools is one critical section
/// and concurrent operations are serialized.
///
/// A panic inside a closure poisons the mutex.  The flag is cleared and
/// the state reused: a panic raised by the ledger during an operation
/// unwinds through its [`Transaction`](crate::ledger::Transaction), which
/// rolls the ledger back, and pools only commit after the transaction has
/// been kept.  A closure that panics between two separate operations keeps
/// whatever the first one completed.
///
/// # Example
///
/// ```rust
/// use hydra_dex::prelude::*;
///
/// let exchange = Exchange::new(ExchangeConfig::default(), MemoryLedger::new()).expect("config");
/// let shared = SharedExchange::new(exchange);
/// let token = AssetId::from_bytes([7; 32]);
///
/// let handle = shared.clone();
/// std::thread::spawn(move || handle.with(|ex| ex.create_pool(token)))
///     .join()
///     .expect("thread")
///     .expect("created");
/// assert!(shared.with(|ex| ex.get_pool(token)).is_some());
/// ```
#[derive(Debug)]
pub struct SharedExchange<L: AssetLedger> {
    inner: Arc<Mutex<Exchange<L>>>,
}

impl<L: AssetLedger> Clone for SharedExchange<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L: AssetLedger> SharedExchange<L> {
    /// Wraps `exchange` for shared use.
    #[must_use]
    pub fn new(exchange: Exchange<L>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(exchange)),
        }
    }

    /// Runs `op` with exclusive access to the exchange.
    pub fn with<T>(&self, op: impl FnOnce(&mut Exchange<L>) -> T) -> T {
        let mut guard = self.lock();
        op(&mut guard)
    }

    /// Returns the exchange if this is the last handle.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged while other handles are alive.
    pub fn try_unwrap(self) -> Result<Exchange<L>, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => Ok(mutex
                .into_inner()
                .unwrap_or_else(std::sync::PoisonError::into_inner)),
            Err(inner) => Err(Self { inner }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Exchange<L>> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("exchange mutex was poisoned; recovering");
            self.inner.clear_poison();
            poisoned.into_inner()
        })
    }
}
