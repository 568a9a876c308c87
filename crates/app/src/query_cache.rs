//! Keyed query cache with generation tokens.
//!
//! Each key owns a slot holding the last resolved value, the in-flight load
//! (if any), and a generation token. Loads run as background tasks so a
//! caller can stop waiting without cancelling them. Invalidating a key gives
//! it a fresh token; a load that finishes under an older token is dropped
//! instead of being cached. Tokens are unique across the whole cache, so a
//! slot removed and created again never matches a load started before.
//!
//! Values rejected by the retention rule (and failed loads) are handed to
//! the waiting callers but leave no slot behind.

use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;

use quill_domain::error::QuillError;

/// Outcome of a [`QueryCache::fetch`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState<V> {
    /// The value is available.
    Ready(V),
    /// The load is still running, or was superseded by an invalidation.
    Loading,
    /// The load failed.
    Failed,
}

#[derive(Debug, Clone)]
enum Resolution<V> {
    Pending,
    Ready(V),
    Stale,
    Failed,
}

impl<V> Resolution<V> {
    fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

struct Slot<V> {
    generation: u64,
    value: Option<V>,
    pending: Option<watch::Receiver<Resolution<V>>>,
}

impl<V> Slot<V> {
    fn new(generation: u64) -> Self {
        Self {
            generation,
            value: None,
            pending: None,
        }
    }

    fn invalidate(&mut self, generation: u64) {
        self.generation = generation;
        self.value = None;
        self.pending = None;
    }
}

struct Slots<K, V> {
    entries: HashMap<K, Slot<V>>,
    last_generation: u64,
}

fn next_generation(last: &mut u64) -> u64 {
    *last += 1;
    *last
}

type Shared<K, V> = Arc<Mutex<Slots<K, V>>>;

fn lock<K, V>(slots: &Mutex<Slots<K, V>>) -> MutexGuard<'_, Slots<K, V>> {
    slots.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Cache of query results keyed by `K`.
pub struct QueryCache<K, V> {
    slots: Shared<K, V>,
    retain: fn(&V) -> bool,
}

impl<K, V> Default for QueryCache<K, V> {
    fn default() -> Self {
        Self::retaining(|_| true)
    }
}

impl<K, V> QueryCache<K, V> {
    /// A cache that keeps only the resolved values for which `retain` holds.
    #[must_use]
    pub fn retaining(retain: fn(&V) -> bool) -> Self {
        Self {
            slots: Arc::new(Mutex::new(Slots {
                entries: HashMap::new(),
                last_generation: 0,
            })),
            retain,
        }
    }
}

impl<K, V> QueryCache<K, V>
where
    K: Eq + Hash + Clone + Debug + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, or start `loader` and wait up to
    /// `budget` for it.
    ///
    /// Callers asking for a key whose load is already in flight join that
    /// load rather than starting another one. When the budget runs out the
    /// load keeps going and fills the cache for the next caller.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn fetch<F>(&self, key: K, budget: Duration, loader: F) -> QueryState<V>
    where
        F: Future<Output = Result<V, QuillError>> + Send + 'static,
    {
        let mut receiver = {
            let mut guard = lock(&self.slots);
            let Slots {
                entries,
                last_generation,
            } = &mut *guard;
            let slot = entries
                .entry(key.clone())
                .or_insert_with(|| Slot::new(next_generation(last_generation)));
            if let Some(value) = &slot.value {
                return QueryState::Ready(value.clone());
            }
            if let Some(pending) = &slot.pending {
                pending.clone()
            } else {
                let (sender, receiver) = watch::channel(Resolution::Pending);
                slot.pending = Some(receiver.clone());
                let token = slot.generation;
                tokio::spawn(resolve(
                    Arc::clone(&self.slots),
                    key,
                    token,
                    self.retain,
                    loader,
                    sender,
                ));
                receiver
            }
        };

        let outcome = tokio::time::timeout(budget, receiver.wait_for(Resolution::is_settled)).await;
        match outcome {
            Ok(Ok(resolution)) => match &*resolution {
                Resolution::Ready(value) => QueryState::Ready(value.clone()),
                Resolution::Failed => QueryState::Failed,
                Resolution::Pending | Resolution::Stale => QueryState::Loading,
            },
            Ok(Err(_closed)) => QueryState::Failed,
            Err(_elapsed) => QueryState::Loading,
        }
    }

    /// Drop the cached value of `key` and orphan any in-flight load.
    pub fn invalidate(&self, key: &K) {
        let mut guard = lock(&self.slots);
        let Slots {
            entries,
            last_generation,
        } = &mut *guard;
        if let Some(slot) = entries.get_mut(key) {
            slot.invalidate(next_generation(last_generation));
        }
    }

    /// Invalidate every key.
    pub fn invalidate_all(&self) {
        let mut guard = lock(&self.slots);
        let Slots {
            entries,
            last_generation,
        } = &mut *guard;
        for slot in entries.values_mut() {
            slot.invalidate(next_generation(last_generation));
        }
    }

    #[cfg(test)]
    pub(crate) fn cached(&self, key: &K) -> Option<V> {
        lock(&self.slots)
            .entries
            .get(key)
            .and_then(|slot| slot.value.clone())
    }

    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        lock(&self.slots).entries.len()
    }
}

async fn resolve<K, V, F>(
    slots: Shared<K, V>,
    key: K,
    token: u64,
    retain: fn(&V) -> bool,
    loader: F,
    sender: watch::Sender<Resolution<V>>,
) where
    K: Eq + Hash + Debug,
    V: Clone,
    F: Future<Output = Result<V, QuillError>>,
{
    let outcome = loader.await;

    let mut slots = lock(&slots);
    let current = slots
        .entries
        .get(&key)
        .is_some_and(|slot| slot.generation == token);
    if !current {
        tracing::debug!(?key, token, "discarding stale query resolution");
        sender.send_replace(Resolution::Stale);
        return;
    }

    match outcome {
        Ok(value) if retain(&value) => {
            if let Some(slot) = slots.entries.get_mut(&key) {
                slot.pending = None;
                slot.value = Some(value.clone());
            }
            sender.send_replace(Resolution::Ready(value));
        }
        Ok(value) => {
            slots.entries.remove(&key);
            sender.send_replace(Resolution::Ready(value));
        }
        Err(err) => {
            tracing::warn!(error = %err, ?key, "query failed");
            slots.entries.remove(&key);
            sender.send_replace(Resolution::Failed);
        }
    }
}
