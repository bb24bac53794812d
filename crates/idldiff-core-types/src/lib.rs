//! Core types shared across idldiff facilities
//!
//! This crate provides the canonical schema constants used by the logging
//! facility in `idldiff-core` and by the CLI:
//!
//! - **Schema constants**: Canonical field keys and event names

pub mod schema;
