//! Default registry implementation.
//!
//! [`DefaultServices`] keeps three maps keyed by [`Key`]: constants (which
//! also receive resolved lazy singletons), lazy-singleton factories with
//! their one-shot slots, and transient factories. All three sit behind a
//! single reader/writer lock; factories are always invoked after the lock
//! has been released.

use std::collections::hash_map::Entry;
use std::sync::Arc;

use crate::internal::{Map, RwLock};
use crate::key::Key;
use crate::logger::Logger;
use crate::registration::{Factory, LazySingleton, ServiceValue};
use crate::traits::{Services, ServicesExt};

/// Thread-safe service registry.
///
/// This is the container the global locator installs by default. It can
/// also be created directly and shared through an `Arc`.
///
/// # Lookup order
///
/// 1. Constants, including lazy singletons that have already been built
/// 2. Lazy-singleton factories (constructed once, then cached as constants)
/// 3. Transient factories (invoked on every lookup)
///
/// # Duplicate registrations
///
/// The first registration for a key wins. Later attempts return `false` and
/// emit a warning through the `dyn Logger` registered in this container, if
/// there is one.
///
/// # Examples
///
/// ```
/// use service_locator::{DefaultServices, ServicesExt};
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use std::sync::Arc;
///
/// static BUILT: AtomicU32 = AtomicU32::new(0);
///
/// struct Database { url: String }
///
/// let services = DefaultServices::new();
/// services.add_lazy_singleton(|| {
///     BUILT.fetch_add(1, Ordering::SeqCst);
///     Database { url: "postgres://localhost".to_string() }
/// });
///
/// let a = services.get_required::<Database>();
/// let b = services.get_required::<Database>();
/// assert!(Arc::ptr_eq(&a, &b));
/// assert_eq!(BUILT.load(Ordering::SeqCst), 1);
/// assert_eq!(a.url, "postgres://localhost");
/// ```
pub struct DefaultServices {
    maps: RwLock<ServiceMaps>,
}

#[derive(Default)]
struct ServiceMaps {
    constants: Map<Key, ServiceValue>,
    lazy_singletons: Map<Key, LazySingleton>,
    factories: Map<Key, Factory>,
}

impl DefaultServices {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            maps: RwLock::new(ServiceMaps::default()),
        }
    }

    fn constant(&self, key: &Key) -> Option<ServiceValue> {
        self.maps.read().constants.get(key).cloned()
    }

    fn lazy_singleton(&self, key: &Key) -> Option<ServiceValue> {
        let (factory, slot) = {
            let maps = self.maps.read();
            let entry = maps.lazy_singletons.get(key)?;
            (entry.factory.clone(), entry.slot.clone())
        };

        // Concurrent callers for the same key block here until the first
        // one finishes; no registry lock is held while the factory runs.
        let value = slot
            .get_or_init(|| {
                tracing::trace!(service = %key, "constructing lazy singleton");
                factory()
            })
            .clone();

        let mut maps = self.maps.write();
        let still_registered = maps
            .lazy_singletons
            .get(key)
            .is_some_and(|entry| Arc::ptr_eq(&entry.slot, &slot));
        if !still_registered {
            // Unregistered (or replaced) while the factory ran.
            return Some(value);
        }
        Some(maps.constants.entry(key.clone()).or_insert(value).clone())
    }

    fn transient(&self, key: &Key) -> Option<ServiceValue> {
        let factory = self.maps.read().factories.get(key).cloned()?;
        Some(factory())
    }

    fn warn_duplicate(&self, key: &Key, kind: &str) {
        tracing::debug!(service = %key, kind, "duplicate registration ignored");
        // Best effort: no logger, or something else stored under its key,
        // simply drops the warning.
        if let Ok(Some(logger)) = self.get_trait::<dyn Logger>() {
            logger.warn(
                std::any::type_name::<Self>(),
                &format!("{} is already registered as a {}", key, kind),
            );
        }
    }

    /// Dumps every registered key, grouped by map.
    #[cfg(feature = "diagnostics")]
    pub fn to_debug_string(&self) -> String {
        fn section<V>(out: &mut String, title: &str, map: &Map<Key, V>) {
            let mut keys: Vec<&Key> = map.keys().collect();
            keys.sort();
            out.push_str(title);
            out.push_str(":\n");
            for key in keys {
                out.push_str(&format!("  {}\n", key));
            }
        }

        let maps = self.maps.read();
        let mut s = String::new();
        s.push_str("=== Service Registry Debug ===\n");
        section(&mut s, "Constants", &maps.constants);
        section(&mut s, "Lazy Singletons", &maps.lazy_singletons);
        section(&mut s, "Factories", &maps.factories);
        s
    }
}

impl Default for DefaultServices {
    fn default() -> Self {
        Self::new()
    }
}

/// Inserts `value` if `key` is vacant, otherwise hands it back so the caller
/// can drop it after releasing the lock.
fn insert_absent<V>(map: &mut Map<Key, V>, key: Key, value: V) -> Result<(), V> {
    match map.entry(key) {
        Entry::Occupied(_) => Err(value),
        Entry::Vacant(slot) => {
            slot.insert(value);
            Ok(())
        }
    }
}

impl Services for DefaultServices {
    fn get_service(&self, key: &Key) -> Option<ServiceValue> {
        self.constant(key)
            .or_else(|| self.lazy_singleton(key))
            .or_else(|| self.transient(key))
    }

    fn register_service(&self, key: Key, factory: Factory) -> bool {
        let result = insert_absent(&mut self.maps.write().factories, key.clone(), factory);
        let inserted = result.is_ok();
        if inserted {
            tracing::trace!(service = %key, "registered transient factory");
        } else {
            self.warn_duplicate(&key, "transient factory");
        }
        inserted
    }

    fn register_lazy_singleton(&self, key: Key, factory: Factory) -> bool {
        let result = insert_absent(
            &mut self.maps.write().lazy_singletons,
            key.clone(),
            LazySingleton::new(factory),
        );
        let inserted = result.is_ok();
        if inserted {
            tracing::trace!(service = %key, "registered lazy singleton");
        } else {
            self.warn_duplicate(&key, "lazy singleton");
        }
        inserted
    }

    fn register_constant(&self, key: Key, value: ServiceValue) -> bool {
        let result = insert_absent(&mut self.maps.write().constants, key.clone(), value);
        let inserted = result.is_ok();
        if inserted {
            tracing::trace!(service = %key, "registered constant");
        } else {
            self.warn_duplicate(&key, "constant");
        }
        inserted
    }

    fn unregister_service(&self, key: &Key) {
        let removed = {
            let mut maps = self.maps.write();
            (
                maps.constants.remove(key),
                maps.lazy_singletons.remove(key),
                maps.factories.remove(key),
            )
        };
        tracing::trace!(service = %key, "unregistered");
        // Dropped unlocked: a value's `Drop` may resolve from this registry.
        drop(removed);
    }
}
