//! Command implementations for conf-cli

pub mod inspect;
pub mod resolve;

pub use inspect::{run_get, run_keys, run_unsupported};
pub use resolve::run_resolve;
