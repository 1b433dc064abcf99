//! Entity model for authors and articles.
//!
//! # Responsibility
//! - Define create/update/read shapes for every entity.
//! - Keep caller-validated invariants next to the shapes they constrain.
//!
//! # Invariants
//! - Identifiers never appear in create shapes; the gateway assigns them.
//! - Identifiers are mandatory in update shapes.
//! - Deletion is a one-way `Lifecycle` transition, never a hard delete.

pub mod article;
pub mod author;
pub mod lifecycle;
pub mod query;
pub mod validation;
