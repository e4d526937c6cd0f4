//! Service registration types.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::{LocatorError, LocatorResult};
use crate::internal::OnceSlot;

// Type-erased Arc for storage
pub(crate) type AnyArc = Arc<dyn Any + Send + Sync>;

/// Constructor stored for transient and lazy-singleton registrations.
pub type Factory = Arc<dyn Fn() -> ServiceValue + Send + Sync>;

/// Type-erased service payload.
///
/// The registry stores and returns `ServiceValue`s without looking inside
/// them. Clones share the same allocation, so a constant handed out twice is
/// the same instance both times (see [`ptr_eq`](Self::ptr_eq)).
///
/// Concrete types are stored as `Arc<T>`; trait objects are stored as
/// `Arc<Arc<dyn Trait>>` and must be read back with
/// [`downcast_trait`](Self::downcast_trait).
///
/// # Examples
///
/// ```rust
/// use service_locator::{LocatorError, ServiceValue};
/// use std::sync::Arc;
///
/// let value = ServiceValue::new(String::from("hello"));
/// let s: Arc<String> = value.downcast().unwrap();
/// assert_eq!(&*s, "hello");
///
/// assert!(matches!(
///     value.downcast::<u32>(),
///     Err(LocatorError::TypeMismatch { .. })
/// ));
/// ```
#[derive(Clone)]
pub struct ServiceValue {
    inner: AnyArc,
    type_name: &'static str,
}

impl ServiceValue {
    /// Wraps an owned value.
    pub fn new<T: Send + Sync + 'static>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wraps an existing `Arc` without copying; identity is preserved.
    pub fn from_arc<T: Send + Sync + 'static>(value: Arc<T>) -> Self {
        Self {
            inner: value,
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Wraps a trait object.
    pub fn from_trait<T: ?Sized + Send + Sync + 'static>(value: Arc<T>) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Recovers a concrete type stored with [`new`](Self::new) or
    /// [`from_arc`](Self::from_arc).
    pub fn downcast<T: Send + Sync + 'static>(&self) -> LocatorResult<Arc<T>> {
        self.inner
            .clone()
            .downcast::<T>()
            .map_err(|_| self.mismatch(std::any::type_name::<T>()))
    }

    /// Recovers a trait object stored with [`from_trait`](Self::from_trait).
    pub fn downcast_trait<T: ?Sized + Send + Sync + 'static>(&self) -> LocatorResult<Arc<T>> {
        self.inner
            .downcast_ref::<Arc<T>>()
            .cloned()
            .ok_or_else(|| self.mismatch(std::any::type_name::<T>()))
    }

    /// Type name of the stored payload.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// True when both values point at the same allocation.
    pub fn ptr_eq(&self, other: &ServiceValue) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Unwraps into the raw type-erased `Arc`.
    pub fn into_any(self) -> Arc<dyn Any + Send + Sync> {
        self.inner
    }

    fn mismatch(&self, expected: &'static str) -> LocatorError {
        LocatorError::TypeMismatch {
            expected,
            found: self.type_name,
        }
    }
}

impl fmt::Debug for ServiceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceValue")
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// Lazy singleton registration: the factory plus its one-shot slot.
///
/// The slot is shared out of the registry lock so that construction runs
/// unlocked while still happening at most once per registration.
pub(crate) struct LazySingleton {
    pub(crate) factory: Factory,
    pub(crate) slot: Arc<OnceSlot<ServiceValue>>,
}

impl LazySingleton {
    pub(crate) fn new(factory: Factory) -> Self {
        Self {
            factory,
            slot: Arc::new(OnceSlot::new()),
        }
    }
}
