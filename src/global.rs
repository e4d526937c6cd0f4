//! The process-wide container and its accessors.
//!
//! The global slot starts empty and is filled with a [`DefaultServices`] on
//! first access. Tests and applications can swap in their own container
//! with [`register_container`]; passing `None` resets to a fresh default.

use std::sync::Arc;

use crate::container::DefaultServices;
use crate::internal::Mutex;
use crate::traits::Services;

/// Shared handle to a container.
pub type ServicesHandle = Arc<dyn Services>;

// Get-or-create and replace both happen under this one lock, so two callers
// can never observe different "first" defaults.
static CONTAINER: Mutex<Option<ServicesHandle>> = Mutex::new(None);

/// Returns the process-wide container, creating a default one on first use.
///
/// # Examples
///
/// ```
/// use service_locator::get_container;
/// use std::sync::Arc;
///
/// let a = get_container();
/// let b = get_container();
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
pub fn get_container() -> ServicesHandle {
    let mut slot = CONTAINER.lock();
    slot.get_or_insert_with(|| {
        tracing::debug!("creating default service container");
        default_container()
    })
    .clone()
}

/// Installs `services` as the process-wide container.
///
/// `None` installs a fresh [`DefaultServices`], dropping every registration
/// held by the previous container (unless other handles keep it alive).
///
/// # Examples
///
/// ```
/// use service_locator::{get_container, register_container, DefaultServices, ServicesExt};
/// use std::sync::Arc;
///
/// let custom = Arc::new(DefaultServices::new());
/// custom.add_constant(1u8);
/// register_container(Some(custom));
/// assert_eq!(*get_container().get_required::<u8>(), 1);
///
/// register_container(None);
/// assert!(get_container().get::<u8>().unwrap().is_none());
/// ```
pub fn register_container(services: Option<ServicesHandle>) {
    let services = services.unwrap_or_else(default_container);
    let previous = std::mem::replace(&mut *CONTAINER.lock(), Some(services));
    tracing::debug!("service container replaced");
    // Services owned by the old container may reach the locator from `Drop`.
    drop(previous);
}

fn default_container() -> ServicesHandle {
    Arc::new(DefaultServices::new())
}

/// Installs a default-constructed `T` as the process-wide container.
pub fn register_default_container<T>()
where
    T: Services + Default + 'static,
{
    register_container(Some(Arc::new(T::default())));
}

/// Installs the container built by `factory`.
pub fn register_container_with<T, F>(factory: F)
where
    T: Services + 'static,
    F: FnOnce() -> Arc<T>,
{
    let services: ServicesHandle = factory();
    register_container(Some(services));
}
