/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for template scanning and rendering.

use thiserror::Error;

/// Errors that can occur while scanning a template.
///
/// Every variant carries the byte offset of the offending construct, so a
/// caller can point a diagnostic at the exact spot in the template. Markers
/// report the offset of their opening `{`; syntax errors report the rejected
/// character itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template ended while a marker was still open.
    #[error("template ended inside a marker opened at byte {position}")]
    UnterminatedTemplate { position: usize },

    /// A marker contained something other than digits closed by `}`.
    #[error("invalid marker syntax at byte {position}: expected a digit or '}}', found {found:?}")]
    InvalidMarkerSyntax { position: usize, found: char },

    /// A `}` appeared outside a marker without a `}}` escape.
    #[error("unescaped '}}' at byte {position}")]
    UnescapedRightBrace { position: usize },

    /// A marker referenced an argument index that was not supplied.
    #[error("marker {{{index}}} at byte {position} is out of range for {supplied} argument(s)")]
    ArgumentIndexOutOfRange {
        position: usize,
        index: usize,
        supplied: usize,
    },
}

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;
