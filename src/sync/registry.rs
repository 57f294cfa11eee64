// Process-wide sync registry - append-only key -> factory table

use super::source::SyncFactory;
use super::SyncError;
use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex};

/// The one registry shared by every aggregator in the process
///
/// Guarded by a mutex only because Rust statics require synchronization;
/// all access is expected to happen on the UI thread.
static REGISTRY: LazyLock<Mutex<HashMap<String, Arc<dyn SyncFactory>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Register input-source factories under their keys
///
/// Append-only: a key maps to at most one factory for the lifetime of the
/// process, and there is no removal. Re-registering a key with the identical
/// factory (same `Arc`) is a no-op for that key. Re-registering a key with a
/// different factory fails with [`SyncError::Conflict`] at the first
/// conflicting entry in iteration order; entries inserted earlier in the
/// same call persist.
pub fn register<I, K>(entries: I) -> Result<(), SyncError>
where
    I: IntoIterator<Item = (K, Arc<dyn SyncFactory>)>,
    K: Into<String>,
{
    let mut registry = REGISTRY.lock().expect("sync registry mutex poisoned");

    for (key, factory) in entries {
        let key = key.into();
        match registry.get(&key) {
            None => {
                debug!("registered sync key `{key}`");
                registry.insert(key, factory);
            }
            Some(existing) if Arc::ptr_eq(existing, &factory) => {
                // Repeat registration of the same factory: nothing to do
            }
            Some(_) => return Err(SyncError::Conflict(key)),
        }
    }

    Ok(())
}

/// Look up the factory registered under `key`
pub fn lookup(key: &str) -> Option<Arc<dyn SyncFactory>> {
    REGISTRY
        .lock()
        .expect("sync registry mutex poisoned")
        .get(key)
        .cloned()
}

/// Check whether a factory is registered under `key`
pub fn is_registered(key: &str) -> bool {
    REGISTRY
        .lock()
        .expect("sync registry mutex poisoned")
        .contains_key(key)
}
