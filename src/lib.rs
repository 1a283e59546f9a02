//! Stay Scout: the discovery engine of a property-rental marketplace.
//!
//! Merges a built-in catalog with moderated user submissions, applies
//! multi-criteria filtering, ranks by proximity or a sort key, and
//! paginates deterministically. Consumed as a library by presentation
//! layers; `main.rs` is a small wiring demo.

pub mod catalog;
pub mod models;
pub mod moderation;
pub mod search;
pub mod store;
