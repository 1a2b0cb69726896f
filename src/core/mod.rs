//! Core catalog logic - framework-agnostic and free of I/O.
//!
//! The presentation layer talks to [`store::CatalogStore`] through
//! [`store::Command`] values and renders the [`pipeline::QueryPage`] it gets back.

/// Placeholder booking and contact actions
pub mod actions;
/// Mock inventory generation
pub mod generator;
/// Filter, sort and paginate
pub mod pipeline;
/// Query state types and input coercion
pub mod query;
/// Session store and command reducer
pub mod store;
