//! Lock, map and once-cell back ends selected by Cargo features.
//!
//! Every type here exposes the same surface whichever feature is active, so
//! the rest of the crate never needs its own `cfg` branches.

#[cfg(feature = "parking-lot")]
pub(crate) use parking_lot::{Mutex, RwLock};

#[cfg(not(feature = "parking-lot"))]
pub(crate) use self::std_locks::{Mutex, RwLock};

#[cfg(feature = "ahash")]
pub(crate) type Map<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;

#[cfg(not(feature = "ahash"))]
pub(crate) type Map<K, V> = std::collections::HashMap<K, V>;

#[cfg(feature = "once-cell")]
pub(crate) use once_cell::sync::OnceCell as OnceSlot;

#[cfg(not(feature = "once-cell"))]
pub(crate) use std::sync::OnceLock as OnceSlot;

#[cfg(not(feature = "parking-lot"))]
mod std_locks {
    use std::sync::{MutexGuard, PoisonError, RwLockReadGuard, RwLockWriteGuard};

    /// `std::sync::Mutex` with parking_lot's non-poisoning `lock()`.
    #[derive(Debug, Default)]
    pub(crate) struct Mutex<T>(std::sync::Mutex<T>);

    impl<T> Mutex<T> {
        pub(crate) const fn new(value: T) -> Self {
            Self(std::sync::Mutex::new(value))
        }

        pub(crate) fn lock(&self) -> MutexGuard<'_, T> {
            // A panicking factory must not brick the container.
            self.0.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

    /// `std::sync::RwLock` with parking_lot's non-poisoning guards.
    #[derive(Debug, Default)]
    pub(crate) struct RwLock<T>(std::sync::RwLock<T>);

    impl<T> RwLock<T> {
        pub(crate) const fn new(value: T) -> Self {
            Self(std::sync::RwLock::new(value))
        }

        pub(crate) fn read(&self) -> RwLockReadGuard<'_, T> {
            self.0.read().unwrap_or_else(PoisonError::into_inner)
        }

        pub(crate) fn write(&self) -> RwLockWriteGuard<'_, T> {
            self.0.write().unwrap_or_else(PoisonError::into_inner)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rwlock_allows_shared_readers() {
        let lock = RwLock::new(1);
        let a = lock.read();
        let b = lock.read();
        assert_eq!(*a + *b, 2);
    }

    #[test]
    fn once_slot_runs_initializer_once() {
        let slot: OnceSlot<u32> = OnceSlot::new();
        assert_eq!(*slot.get_or_init(|| 1), 1);
        assert_eq!(*slot.get_or_init(|| 2), 1);
    }

    #[test]
    fn map_default_is_empty() {
        let map: Map<u8, u8> = Map::default();
        assert!(map.is_empty());
    }

    #[test]
    fn mutex_guards_value() {
        let m = Mutex::new(Vec::new());
        m.lock().push(3);
        assert_eq!(*m.lock(), vec![3]);
    }
}
