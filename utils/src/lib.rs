//! Shared utilities for the WalletKit crates.

pub mod logging;

pub use logging::{init_logging, init_tracing, try_init_logging, LogFormat};
