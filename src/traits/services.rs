//! Registry traits for service lookup and registration.

use std::sync::Arc;

use crate::error::{LocatorError, LocatorResult};
use crate::key::Key;
use crate::registration::{Factory, ServiceValue};

/// Core registry trait for object-safe service lookup and registration.
///
/// This is the contract every container installed in the global locator
/// must honor. It works entirely with erased [`Key`]s and
/// [`ServiceValue`]s so it can be used as `Arc<dyn Services>`.
///
/// Most callers should use the generic helpers on [`ServicesExt`] instead.
///
/// # Contract
///
/// - Lookups try constants (including resolved lazy singletons), then lazy
///   singleton factories, then transient factories.
/// - All register operations keep the first registration for a key and
///   return `false` for later ones.
/// - `unregister_service` removes the key from every map and is idempotent.
pub trait Services: Send + Sync {
    /// Looks up the service registered under `key`.
    ///
    /// Returns `None` when nothing is registered. A miss is not an error.
    fn get_service(&self, key: &Key) -> Option<ServiceValue>;

    /// Registers a transient factory, invoked on every lookup.
    fn register_service(&self, key: Key, factory: Factory) -> bool;

    /// Registers a factory that runs at most once, on first lookup.
    fn register_lazy_singleton(&self, key: Key, factory: Factory) -> bool;

    /// Registers an existing instance.
    fn register_constant(&self, key: Key, value: ServiceValue) -> bool;

    /// Removes every registration stored under `key`.
    fn unregister_service(&self, key: &Key);
}

/// High-level registry interface with generic methods.
///
/// Implemented for every [`Services`], including `dyn Services`, so the
/// same helpers work on a concrete [`DefaultServices`](crate::DefaultServices)
/// and on the handle returned by [`get_container`](crate::get_container).
///
/// # Examples
///
/// ```
/// use service_locator::{DefaultServices, ServicesExt};
/// use std::sync::Arc;
///
/// trait Clock: Send + Sync {
///     fn now(&self) -> u64;
/// }
///
/// struct FixedClock;
/// impl Clock for FixedClock {
///     fn now(&self) -> u64 { 42 }
/// }
///
/// let services = DefaultServices::new();
/// services.add_constant(String::from("app"));
/// services.add_named_constant("port", 8080u16);
/// services.add_constant_trait::<dyn Clock>(Arc::new(FixedClock));
///
/// assert_eq!(&*services.get_required::<String>(), "app");
/// assert_eq!(*services.get_required_named::<u16>("port"), 8080);
/// assert_eq!(services.get_required_trait::<dyn Clock>().now(), 42);
/// assert!(services.get::<u16>().unwrap().is_none());
/// ```
pub trait ServicesExt: Services {
    /// Resolves a concrete service type.
    ///
    /// * `Ok(Some(_))` - the service
    /// * `Ok(None)` - nothing registered for `T`
    /// * `Err(TypeMismatch)` - something other than `T` is stored under `T`'s key
    fn get<T: Send + Sync + 'static>(&self) -> LocatorResult<Option<Arc<T>>> {
        self.get_service(&Key::of::<T>())
            .map(|value| value.downcast::<T>())
            .transpose()
    }

    /// Resolves a concrete service type registered under `contract`.
    fn get_named<T: Send + Sync + 'static>(&self, contract: &str) -> LocatorResult<Option<Arc<T>>> {
        self.get_service(&Key::named::<T>(contract))
            .map(|value| value.downcast::<T>())
            .transpose()
    }

    /// Resolves a trait object registered with one of the `*_trait` helpers.
    fn get_trait<T: ?Sized + Send + Sync + 'static>(&self) -> LocatorResult<Option<Arc<T>>> {
        self.get_service(&Key::of::<T>())
            .map(|value| value.downcast_trait::<T>())
            .transpose()
    }

    /// Resolves a trait object registered under `contract`.
    fn get_named_trait<T: ?Sized + Send + Sync + 'static>(
        &self,
        contract: &str,
    ) -> LocatorResult<Option<Arc<T>>> {
        self.get_service(&Key::named::<T>(contract))
            .map(|value| value.downcast_trait::<T>())
            .transpose()
    }

    /// Resolves a concrete service, panicking if it is missing or mistyped.
    ///
    /// Intended for application startup and tests where a missing service
    /// is a wiring bug.
    fn get_required<T: Send + Sync + 'static>(&self) -> Arc<T> {
        match self.get::<T>() {
            Ok(Some(service)) => service,
            Ok(None) => panic!("{}", not_found::<T>(None)),
            Err(err) => panic!("{}", err),
        }
    }

    /// Named variant of [`get_required`](Self::get_required).
    fn get_required_named<T: Send + Sync + 'static>(&self, contract: &str) -> Arc<T> {
        match self.get_named::<T>(contract) {
            Ok(Some(service)) => service,
            Ok(None) => panic!("{}", not_found::<T>(Some(contract))),
            Err(err) => panic!("{}", err),
        }
    }

    /// Trait-object variant of [`get_required`](Self::get_required).
    fn get_required_trait<T: ?Sized + Send + Sync + 'static>(&self) -> Arc<T> {
        match self.get_trait::<T>() {
            Ok(Some(service)) => service,
            Ok(None) => panic!("{}", not_found::<T>(None)),
            Err(err) => panic!("{}", err),
        }
    }

    /// Registers `value` as a constant for `T`.
    fn add_constant<T: Send + Sync + 'static>(&self, value: T) -> bool {
        self.register_constant(Key::of::<T>(), ServiceValue::new(value))
    }

    /// Registers `value` as a constant for `T` under `contract`.
    fn add_named_constant<T: Send + Sync + 'static>(&self, contract: &str, value: T) -> bool {
        self.register_constant(Key::named::<T>(contract), ServiceValue::new(value))
    }

    /// Registers a trait object as a constant.
    fn add_constant_trait<T: ?Sized + Send + Sync + 'static>(&self, value: Arc<T>) -> bool {
        self.register_constant(Key::of::<T>(), ServiceValue::from_trait(value))
    }

    /// Registers a trait object as a constant under `contract`.
    fn add_named_constant_trait<T: ?Sized + Send + Sync + 'static>(
        &self,
        contract: &str,
        value: Arc<T>,
    ) -> bool {
        self.register_constant(Key::named::<T>(contract), ServiceValue::from_trait(value))
    }

    /// Registers a transient factory for `T`.
    fn add_factory<T, F>(&self, factory: F) -> bool
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.register_service(Key::of::<T>(), Arc::new(move || ServiceValue::new(factory())))
    }

    /// Registers a transient factory for `T` under `contract`.
    fn add_named_factory<T, F>(&self, contract: &str, factory: F) -> bool
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.register_service(
            Key::named::<T>(contract),
            Arc::new(move || ServiceValue::new(factory())),
        )
    }

    /// Registers a transient factory producing trait objects.
    fn add_factory_trait<T, F>(&self, factory: F) -> bool
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn() -> Arc<T> + Send + Sync + 'static,
    {
        self.register_service(
            Key::of::<T>(),
            Arc::new(move || ServiceValue::from_trait(factory())),
        )
    }

    /// Registers a lazy singleton for `T`.
    fn add_lazy_singleton<T, F>(&self, factory: F) -> bool
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.register_lazy_singleton(Key::of::<T>(), Arc::new(move || ServiceValue::new(factory())))
    }

    /// Registers a lazy singleton for `T` under `contract`.
    fn add_named_lazy_singleton<T, F>(&self, contract: &str, factory: F) -> bool
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.register_lazy_singleton(
            Key::named::<T>(contract),
            Arc::new(move || ServiceValue::new(factory())),
        )
    }

    /// Registers a lazy singleton producing a trait object.
    fn add_lazy_singleton_trait<T, F>(&self, factory: F) -> bool
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn() -> Arc<T> + Send + Sync + 'static,
    {
        self.register_lazy_singleton(
            Key::of::<T>(),
            Arc::new(move || ServiceValue::from_trait(factory())),
        )
    }

    /// Removes every registration for `T`.
    fn remove<T: ?Sized + 'static>(&self) {
        self.unregister_service(&Key::of::<T>())
    }

    /// Removes every registration for `T` under `contract`.
    fn remove_named<T: ?Sized + 'static>(&self, contract: &str) {
        self.unregister_service(&Key::named::<T>(contract))
    }
}

impl<S: Services + ?Sized> ServicesExt for S {}

fn not_found<T: ?Sized>(contract: Option<&str>) -> LocatorError {
    LocatorError::NotFound {
        service: std::any::type_name::<T>(),
        contract: contract.map(str::to_owned),
    }
}
