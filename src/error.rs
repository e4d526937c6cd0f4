//! Error types for the service locator.

use std::fmt;

/// Service locator errors
///
/// A lookup miss is not an error: lookups return `None`. These variants
/// cover the cases where a caller asked for something specific and the
/// registry could not honor it.
///
/// # Examples
///
/// ```rust
/// use service_locator::{DefaultServices, LocatorError, ServicesExt};
///
/// let services = DefaultServices::new();
/// services.add_constant(7u32);
///
/// match services.get::<String>() {
///     Ok(None) => {}
///     other => panic!("unexpected: {:?}", other),
/// }
///
/// let err = LocatorError::TypeMismatch { expected: "u64", found: "u32" };
/// assert_eq!(err.to_string(), "Type mismatch: expected u64, found u32");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocatorError {
    /// Service not registered
    NotFound {
        /// Type name of the requested service
        service: &'static str,
        /// Contract the lookup was qualified with
        contract: Option<String>,
    },
    /// Downcast of a stored value to the requested type failed
    TypeMismatch {
        /// Type the caller asked for
        expected: &'static str,
        /// Type actually stored under the key
        found: &'static str,
    },
}

impl fmt::Display for LocatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocatorError::NotFound { service, contract: None } => {
                write!(f, "Service not found: {}", service)
            }
            LocatorError::NotFound { service, contract: Some(contract) } => {
                write!(f, "Service not found: {} (contract: {})", service, contract)
            }
            LocatorError::TypeMismatch { expected, found } => {
                write!(f, "Type mismatch: expected {}, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for LocatorError {}

/// Result type for locator operations
pub type LocatorResult<T> = Result<T, LocatorError>;
