//! Job application tracking backed by a single JSON file.
//!
//! [`store::RecordStore`] owns the records, [`query::apply`] filters and
//! orders them, and [`pagination::page`] cuts the result into pages.
//! [`view::ViewState`] keeps those three in step for a front end.

pub mod applications;
pub mod attachments;
pub mod config;
pub mod error;
pub mod logging;
pub mod pagination;
pub mod query;
pub mod store;
pub mod view;
