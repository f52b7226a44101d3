//! Web form layer for browser-based use.
//!
//! Serves the pageview form and renders its output server-side with Askama
//! templates. The chart is embedded as inline SVG, so the page needs no
//! JavaScript.
//!
//! # Modules
//!
//! - [`form`] - Form state, defaults and example inputs
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Web route configuration

pub mod form;
pub mod handlers;
pub mod routes;
