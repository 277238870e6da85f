//! Library crate for codexglyph-manual.
//!
//! This crate exposes the building blocks of the viewer:
//! - Controller state and menu loop (`app`)
//! - Command-line definition and one-shot commands (`cli`)
//! - The embedded manual and its read-only store (`content`)
//! - Error and result types (`error`)
//! - Line search over the store (`search`)
//! - Terminal I/O behind the `Console` trait (`term`)
//! - Screen rendering (`ui`)
//!
//! It is used by the `codexglyph-manual` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod app;
pub mod cli;
pub mod content;
pub mod error;
pub mod search;
pub mod term;
pub mod ui;

// Re-export commonly used items at the crate root for convenience
/// Convenient error and result types shared across the crate.
pub use error::{DynError, Result};
pub use content::ContentStore;
pub use search::{SearchResult, search};
