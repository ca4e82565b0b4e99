/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Positional string templating with numbered curly-brace markers.
//!
//! This crate substitutes numbered `{N}` markers in a template with the
//! `Display` rendering of the N-th argument. It supports:
//!
//! - Positional markers: `{0}`, `{1}`, ... repeatable in any order
//! - Escaped braces: `{{` and `}}` for literal `{` and `}`
//! - Precise errors: malformed templates fail with the byte offset of the
//!   offending construct, and no partial output is ever returned
//!
//! # Architecture
//!
//! Rendering is two identical scans of the template. The first scan counts
//! marker references, escapes, and plain bytes ([`ScanCounts`]), from which
//! [`output_len`] computes the exact output size; the second scan fills a
//! buffer pre-allocated at that size ([`FillWriter`]). The output string is
//! therefore allocated exactly once and never resized — a repeated marker
//! costs one copy per occurrence, never a rebuild of the whole string.
//!
//! Both scans share one traversal function, [`scan`], which is a pure
//! function of (template, argument count, visitor); the two passes differ
//! only in the [`TemplateVisitor`] they plug in.
//!
//! # Example
//!
//! ```rust
//! use curly_format::format2;
//!
//! let s = format2("{1} {0} {1}", "right", "left")?;
//! assert_eq!(s, "left right left");
//! # Ok::<(), curly_format::TemplateError>(())
//! ```

pub mod args;
pub mod engine;
pub mod error;
pub mod fill;
pub mod measure;
pub mod scanner;

// Re-export main types at crate root
pub use args::{format, format1, format2, format3, format4, format5, format6};
pub use engine::render;
pub use error::{TemplateError, TemplateResult};
pub use fill::FillWriter;
pub use measure::{ScanCounts, output_len};
pub use scanner::{TemplateVisitor, scan};
