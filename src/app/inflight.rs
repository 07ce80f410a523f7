use std::collections::HashSet;
use std::hash::Hash;

use tokio::task::JoinHandle;

/// Cancel-and-replace guard for one panel
///
/// Starting a request aborts the outstanding one and bumps the generation;
/// only a completion carrying the current generation may touch the panel.
#[derive(Debug, Default)]
pub struct InFlight {
    generation: u64,
    current: Option<JoinHandle<()>>,
}

impl InFlight {
    /// Aborts any outstanding request and returns the new generation
    pub fn begin(&mut self) -> u64 {
        if let Some(handle) = self.current.take() {
            handle.abort();
        }
        self.generation += 1;
        self.generation
    }

    /// Records the task serving the current generation
    pub fn track(&mut self, handle: JoinHandle<()>) {
        self.current = Some(handle);
    }

    /// Marks `generation` complete; false if it has been superseded
    pub fn complete(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.current.is_some()
    }
}

/// At most one outstanding request per key
#[derive(Debug)]
pub struct KeyedGuard<K> {
    pending: HashSet<K>,
}

impl<K> Default for KeyedGuard<K> {
    fn default() -> Self {
        Self {
            pending: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> KeyedGuard<K> {
    /// False if a request for `key` is already outstanding
    pub fn try_begin(&mut self, key: K) -> bool {
        self.pending.insert(key)
    }

    pub fn finish(&mut self, key: &K) {
        self.pending.remove(key);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
