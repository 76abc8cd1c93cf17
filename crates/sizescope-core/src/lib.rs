//! SizeScope Core — scanning, chart models, and data model.
//!
//! This crate contains all business logic with zero UI dependencies.
//! It is designed to be reusable across different frontends (GUI, CLI, TUI).
//!
//! # Modules
//!
//! - [`model`] — Usage records and size conversion helpers.
//! - [`scanner`] — Single-pass directory walk producing usage records.
//! - [`analysis`] — Chart-model builders consumed by the viewer.
//! - [`error`] — Fatal error taxonomy for the CLI surface.

pub mod analysis;
pub mod error;
pub mod model;
pub mod scanner;

pub use error::UsageError;
