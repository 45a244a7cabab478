//! Static resources for the htl front-end.
//!
//! # Scope
//!
//! This crate provides:
//! - **Resource loading** - read a file, pick its content type, and turn
//!   `.htl` sources into HTML
//! - **Handlers** - one per file, either reloading on every request (dev
//!   mode) or serving bytes cached at startup
//! - **Routing** - walk directories and map every file to a URL path

/// Load errors.
pub mod error;
/// Per-file handlers and the directory walk.
pub mod handler;
/// Resources, content types and transformers.
pub mod resource;
/// HTTP routing over a set of handlers.
pub mod router;

pub use error::LoadError;
pub use handler::{Handler, handlers_from_dirs, route_for};
pub use resource::{Resource, content_type_for_extension};
pub use router::router;
