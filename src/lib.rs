//! # service-locator
//!
//! Thread-safe service locator for Rust: a registry mapping a type plus an
//! optional contract name to a constant, a transient factory, or a lazily
//! built singleton.
//!
//! ## Features
//!
//! - **Three registration strategies**: constants, transient factories and lazy singletons
//! - **Contracts**: several registrations of one type, told apart by name
//! - **Trait objects**: register and resolve `Arc<dyn Trait>` directly
//! - **First registration wins**: duplicates are rejected and reported, never overwritten
//! - **Exactly-once singletons**: concurrent first lookups run the factory once, without holding the registry lock
//! - **Swappable global container**: a process-wide instance you can replace in tests
//!
//! ## Quick Start
//!
//! ```rust
//! use service_locator::{DefaultServices, ServicesExt};
//! use std::sync::Arc;
//!
//! struct Config {
//!     url: String,
//! }
//!
//! struct RequestId(u64);
//!
//! let services = DefaultServices::new();
//! services.add_constant(Config { url: "postgres://localhost".to_string() });
//! services.add_factory(|| RequestId(7));
//!
//! let config = services.get_required::<Config>();
//! assert_eq!(config.url, "postgres://localhost");
//!
//! // Constants are shared, factory results are fresh
//! assert!(Arc::ptr_eq(&config, &services.get_required::<Config>()));
//! assert!(!Arc::ptr_eq(
//!     &services.get_required::<RequestId>(),
//!     &services.get_required::<RequestId>()
//! ));
//! ```
//!
//! ## Contracts
//!
//! ```rust
//! use service_locator::{DefaultServices, ServicesExt};
//!
//! let services = DefaultServices::new();
//! services.add_constant(String::from("X"));
//! services.add_named_constant("c1", String::from("Y"));
//!
//! assert_eq!(&*services.get_required::<String>(), "X");
//! assert_eq!(&*services.get_required_named::<String>("c1"), "Y");
//! assert!(services.get_named::<String>("c2").unwrap().is_none());
//! ```
//!
//! ## Global Locator
//!
//! ```rust
//! use service_locator::{get_container, locator, register_container, ServicesExt};
//!
//! struct Greeting(&'static str);
//!
//! get_container().add_constant(Greeting("hello"));
//! assert_eq!(locator::get::<Greeting>().unwrap().unwrap().0, "hello");
//!
//! // Reset to a fresh, empty container
//! register_container(None);
//! assert!(locator::get::<Greeting>().unwrap().is_none());
//! ```

// Module declarations
pub mod container;
pub mod error;
pub mod global;
pub mod key;
pub mod locator;
pub mod logger;
pub mod traits;

// Internal modules
mod internal;
mod registration;

// Re-export core types
pub use container::DefaultServices;
pub use error::{LocatorError, LocatorResult};
pub use global::{
    get_container, register_container, register_container_with, register_default_container,
    ServicesHandle,
};
pub use key::{key_of_type, Key};
pub use logger::{DefaultLogger, EnableLogger, LogLevel, Logger};
pub use registration::{Factory, ServiceValue};
pub use traits::{Services, ServicesExt};
