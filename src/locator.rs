//! Free functions that operate on the process-wide container.
//!
//! Each function fetches [`get_container`] and forwards to it, so swapping
//! the container with [`register_container`](crate::register_container)
//! redirects all of them.

use std::sync::Arc;

use crate::error::LocatorResult;
use crate::global::get_container;
use crate::key::Key;
use crate::logger::{DefaultLogger, Logger};
use crate::registration::{Factory, ServiceValue};
use crate::traits::{Services, ServicesExt};

/// Looks up `key` in the global container.
pub fn get_service(key: &Key) -> Option<ServiceValue> {
    get_container().get_service(key)
}

/// Resolves `T` from the global container.
///
/// # Examples
///
/// ```
/// use service_locator::locator;
///
/// struct Unregistered;
/// assert!(locator::get::<Unregistered>().unwrap().is_none());
/// ```
pub fn get<T: Send + Sync + 'static>() -> LocatorResult<Option<Arc<T>>> {
    get_container().get::<T>()
}

/// Resolves `T` registered under `contract` from the global container.
pub fn get_named<T: Send + Sync + 'static>(contract: &str) -> LocatorResult<Option<Arc<T>>> {
    get_container().get_named::<T>(contract)
}

/// Resolves a trait object from the global container.
pub fn get_trait<T: ?Sized + Send + Sync + 'static>() -> LocatorResult<Option<Arc<T>>> {
    get_container().get_trait::<T>()
}

/// Resolves a trait object registered under `contract` from the global
/// container.
pub fn get_named_trait<T: ?Sized + Send + Sync + 'static>(
    contract: &str,
) -> LocatorResult<Option<Arc<T>>> {
    get_container().get_named_trait::<T>(contract)
}

/// Registers a transient factory in the global container.
pub fn register_service(key: Key, factory: Factory) -> bool {
    get_container().register_service(key, factory)
}

/// Registers a lazy singleton in the global container.
pub fn register_lazy_singleton(key: Key, factory: Factory) -> bool {
    get_container().register_lazy_singleton(key, factory)
}

/// Registers a constant in the global container.
pub fn register_constant(key: Key, value: ServiceValue) -> bool {
    get_container().register_constant(key, value)
}

/// Removes `key` from the global container.
pub fn unregister_service(key: &Key) {
    get_container().unregister_service(key)
}

/// Registers `logger` as the global `dyn Logger` constant.
pub fn register_logger(logger: Arc<dyn Logger>) -> bool {
    get_container().add_constant_trait::<dyn Logger>(logger)
}

/// Registers a logger built lazily by `factory` on first use.
pub fn register_logger_with<L, F>(factory: F) -> bool
where
    L: Logger + 'static,
    F: Fn() -> L + Send + Sync + 'static,
{
    get_container()
        .add_lazy_singleton_trait::<dyn Logger, _>(move || Arc::new(factory()) as Arc<dyn Logger>)
}

/// Returns the global logger, installing a [`DefaultLogger`] if none is
/// registered.
///
/// A payload of the wrong type under the logger key is treated as absent.
pub fn logger() -> Arc<dyn Logger> {
    let container = get_container();
    if let Ok(Some(logger)) = container.get_trait::<dyn Logger>() {
        return logger;
    }

    let fallback: Arc<dyn Logger> = Arc::new(DefaultLogger::new());
    container.add_constant_trait::<dyn Logger>(fallback.clone());
    // Another thread may have won the registration race.
    match container.get_trait::<dyn Logger>() {
        Ok(Some(logger)) => logger,
        _ => fallback,
    }
}
