//! Configuration property schemas.
//!
//! This crate provides the read-only lookup the resolution engine consults
//! before admitting a folder setting: for each configuration key, which
//! [`ConfigurationScope`] it belongs to and whether it can trigger external
//! execution.
//!
//! The engine never owns the registry. Callers construct a
//! [`SchemaRegistry`] (or any other [`SchemaProvider`]) and inject it.

pub mod error;
pub mod provider;
pub mod registry;
pub mod scope;

pub use error::{Error, Result};
pub use provider::{PropertySchema, SchemaProvider};
pub use registry::SchemaRegistry;
pub use scope::ConfigurationScope;
