//! Infrastructure layer for external integrations.
//!
//! Implements the source contract defined by the domain layer.
//!
//! # Modules
//!
//! - [`wikimedia`] - Wikimedia REST API pageviews client

pub mod wikimedia;
