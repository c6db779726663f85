//! Thread-safe handle to a road network.
//!
//! Queries read the adjacency lists for their whole run and mutations
//! (block, unblock, maintenance, new cities) rewrite them in place.  A
//! `SharedNetwork` serializes the two: every query holds the read lock from
//! start to finish and every mutation holds the write lock, so a query always
//! sees a single consistent network state.

use std::sync::{Arc, PoisonError, RwLock};

use crate::RoadNetwork;

/// Cloneable, `Send + Sync` handle around a [`RoadNetwork`].
#[derive(Clone, Debug, Default)]
pub struct SharedNetwork {
    inner: Arc<RwLock<RoadNetwork>>,
}

impl SharedNetwork {
    pub fn new(network: RoadNetwork) -> Self {
        Self { inner: Arc::new(RwLock::new(network)) }
    }

    /// Run `f` with shared access.  Any number of readers may run at once.
    pub fn read<T>(&self, f: impl FnOnce(&RoadNetwork) -> T) -> T {
        // A panic inside another closure leaves the network structurally
        // valid, so a poisoned lock is still usable.
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Run `f` with exclusive access, waiting for in-flight queries first.
    pub fn write<T>(&self, f: impl FnOnce(&mut RoadNetwork) -> T) -> T {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Clone the current network state.
    pub fn snapshot(&self) -> RoadNetwork {
        self.read(RoadNetwork::clone)
    }
}

impl From<RoadNetwork> for SharedNetwork {
    fn from(network: RoadNetwork) -> Self {
        Self::new(network)
    }
}
