//! Common utilities for the htl tools.
//!
//! This crate provides shared infrastructure used by the loader and binaries:
//! - **Warning System** - colored, deduplicated terminal warnings

pub mod warning;
