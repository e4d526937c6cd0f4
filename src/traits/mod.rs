//! Core traits for the service locator.

mod services;

pub use services::{Services, ServicesExt};
