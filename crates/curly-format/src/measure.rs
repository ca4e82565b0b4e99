/*
 * measure.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Sizing pass: reference counting and exact output length.
//!
//! The first of the two scans accumulates a [`ScanCounts`], which records
//! how often each argument is referenced without ever touching argument
//! text. [`output_len`] then combines those counts with the argument
//! lengths to produce the exact byte length of the rendered output — an
//! allocation size, not an estimate.

use crate::scanner::TemplateVisitor;

/// Accumulated counts from the sizing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCounts {
    /// Marker references per argument index.
    references: Vec<usize>,

    /// Escaped braces seen; each collapses to one output byte.
    escaped_braces: usize,

    /// UTF-8 bytes of plain characters.
    plain_bytes: usize,
}

impl ScanCounts {
    /// Create zeroed counts for a call with `arg_count` arguments.
    pub fn new(arg_count: usize) -> Self {
        ScanCounts {
            references: vec![0; arg_count],
            escaped_braces: 0,
            plain_bytes: 0,
        }
    }

    /// How many times argument `index` is referenced by the template.
    pub fn reference_count(&self, index: usize) -> usize {
        self.references[index]
    }
}

impl TemplateVisitor for ScanCounts {
    fn on_marker(&mut self, index: usize) {
        self.references[index] += 1;
    }

    fn on_escaped_left(&mut self) {
        self.escaped_braces += 1;
    }

    fn on_escaped_right(&mut self) {
        self.escaped_braces += 1;
    }

    fn on_plain(&mut self, ch: char) {
        self.plain_bytes += ch.len_utf8();
    }
}

/// Exact output length in bytes for `counts` against `args`.
///
/// The sum over all indices of (reference count × argument byte length),
/// plus one byte per escaped brace, plus the plain-character bytes. The fill
/// pass writes exactly this many bytes.
pub fn output_len(counts: &ScanCounts, args: &[String]) -> usize {
    let substituted: usize = counts
        .references
        .iter()
        .zip(args)
        .map(|(count, arg)| count * arg.len())
        .sum();
    substituted + counts.escaped_braces + counts.plain_bytes
}
