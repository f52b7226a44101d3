//! Source trait definitions for the domain layer.
//!
//! A source is anything that can answer "daily pageviews for this article over
//! this range". The trait is implemented by the upstream HTTP client in the
//! infrastructure layer and by stubs in tests.
//!
//! # Available Sources
//!
//! - [`PageviewSource`] - Daily per-article pageview lookup
//!
//! # Testing
//!
//! A `mockall` mock is generated under `cfg(test)`; integration tests in
//! `tests/` use the stub in `tests/common/mod.rs`.

pub mod pageview_source;

pub use pageview_source::{FetchError, PageviewSource};

#[cfg(test)]
pub use pageview_source::MockPageviewSource;
