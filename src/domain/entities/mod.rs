//! Core domain entities for the pageview pipeline.
//!
//! Entities are plain data structures created per request and dropped once the
//! response has been rendered. Nothing here is shared between requests.
//!
//! # Entity Types
//!
//! - [`ArticleTitle`] - A user-typed article title and its API path form
//! - [`QueryParams`] - One submission of the form (title plus date range)
//! - [`PageviewRow`] - Views for a single calendar day
//! - [`PageviewSeries`] - Date-keyed rows labeled with the article title

pub mod article;
pub mod pageview;
pub mod query;

pub use article::ArticleTitle;
pub use pageview::{PageviewRow, PageviewSeries};
pub use query::QueryParams;
