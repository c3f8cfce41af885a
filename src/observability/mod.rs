//! Tracing subscriber setup.
//!
//! The crate logs through `tracing` everywhere. Where those events end up
//! depends on the target:
//!
//! ```text
//! wasm32:  tracing → tracing-wasm → browser console (+ performance marks)
//! native:  tracing → EnvFilter → fmt layer → stderr
//! ```
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (native only, highest priority)
//! 2. `trace_level` config option (`data-trace-level` in the browser)
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust
//! use leavedesk_landing::observability::init_tracing;
//! use leavedesk_landing::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("page initialized");
//! ```

mod init;

pub use init::{init_tracing, parse_level};
