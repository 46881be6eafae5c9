//! Typed host-domain contracts used across the desktop runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services. The only external collaborator
//! of the window manager is the session-verification endpoint, so the surface here is the
//! session service contract, its payload and error types, and the host bundle that carries the
//! selected adapter into `desktop_runtime`. Concrete browser adapters live in
//! `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod session;

pub use host::{HostServices, HostStrategy};
pub use session::{
    SessionError, SessionFuture, SessionIdentity, SessionService, StaticSessionService,
};
