//! Domain layer containing the pageview data model and source contract.
//!
//! # Architecture
//!
//! - [`entities`] - Titles, query parameters, rows and series
//! - [`sources`] - The [`sources::PageviewSource`] trait and [`sources::FetchError`]
//!
//! # Design Principles
//!
//! - No dependency on HTTP clients, templates or the web framework
//! - Concrete sources live in [`crate::infrastructure`]
//! - Orchestration lives in [`crate::application::services`]

pub mod entities;
pub mod sources;
