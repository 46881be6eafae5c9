//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! The desktop shell talks to exactly one backend surface, the session-verification endpoint.
//! `session` holds the `fetch`-based adapter (with a non-wasm fallback that reports the service
//! as unavailable) and `adapters` selects the strategy and assembles the host bundle.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod session;

pub use adapters::{
    build_host_services, host_strategy_name, selected_host_strategy, session_service,
    SessionServiceAdapter,
};
pub use session::WebSessionService;
