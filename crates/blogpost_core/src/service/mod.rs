//! Core use-case services.
//!
//! # Responsibility
//! - Define the single capability interface both transports are built on.
//! - Orchestrate repository calls into full create/read/update/delete
//!   round trips.

pub mod blog_service;
