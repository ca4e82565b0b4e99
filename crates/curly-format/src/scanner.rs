/*
 * scanner.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Single-pass template scanner.
//!
//! The scanner walks a template left to right exactly once, classifying each
//! position as an escaped brace, a positional marker, or a plain character,
//! and reports each classified unit to a [`TemplateVisitor`]. It keeps no
//! state of its own, so running it twice over the same template with the
//! same argument count produces the same callback sequence both times — the
//! sizing pass and the fill pass rely on that identity.
//!
//! Recognition rules, checked in order at each position:
//!
//! - `{{` is an escaped left brace (one literal `{`)
//! - a single `{` opens a marker: one or more digits, then a closing `}`
//! - `}}` is an escaped right brace (one literal `}`)
//! - a single `}` is always an error; braces are never implicitly literal
//! - anything else is a plain character

use std::iter::Peekable;

use crate::error::{TemplateError, TemplateResult};

/// Callback interface for scan events.
///
/// One method per classified unit. Implementations accumulate whatever they
/// need (counts, output text); the scanner itself never buffers anything.
pub trait TemplateVisitor {
    /// A `{N}` marker referencing argument `index`.
    ///
    /// The scanner has already checked `index` against the argument count,
    /// so implementations may index their argument list directly.
    fn on_marker(&mut self, index: usize);

    /// A `{{` escape, standing for one literal `{`.
    fn on_escaped_left(&mut self);

    /// A `}}` escape, standing for one literal `}`.
    fn on_escaped_right(&mut self);

    /// A character outside any marker or escape.
    fn on_plain(&mut self, ch: char);
}

/// Scan `template` once, reporting each classified unit to `visitor`.
///
/// `arg_count` is the number of arguments supplied for this call; marker
/// indices at or above it are rejected here, during classification, so
/// visitors never see an out-of-range index.
///
/// # Errors
///
/// Returns the first malformation found, with its byte offset. The rest of
/// the template is not scanned and the visitor receives no further events.
pub fn scan<V: TemplateVisitor>(
    template: &str,
    arg_count: usize,
    visitor: &mut V,
) -> TemplateResult<()> {
    let mut chars = template.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        match ch {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    visitor.on_escaped_left();
                } else {
                    let index = scan_marker(&mut chars, position)?;
                    if index >= arg_count {
                        return Err(TemplateError::ArgumentIndexOutOfRange {
                            position,
                            index,
                            supplied: arg_count,
                        });
                    }
                    visitor.on_marker(index);
                }
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                    visitor.on_escaped_right();
                } else {
                    return Err(TemplateError::UnescapedRightBrace { position });
                }
            }
            _ => visitor.on_plain(ch),
        }
    }

    Ok(())
}

/// Parse the digit run and closing `}` of a marker whose `{` sits at
/// `opened_at`, returning the argument index.
///
/// Leading zeros are accepted (`{007}` is index 7). Accumulation saturates
/// rather than wrapping, so a digit run too long for `usize` still compares
/// as out of range instead of aliasing a small index.
fn scan_marker<I>(chars: &mut Peekable<I>, opened_at: usize) -> TemplateResult<usize>
where
    I: Iterator<Item = (usize, char)>,
{
    let mut index: usize = 0;
    let mut saw_digit = false;

    loop {
        match chars.next() {
            Some((_, digit @ '0'..='9')) => {
                saw_digit = true;
                index = index
                    .saturating_mul(10)
                    .saturating_add((digit as u8 - b'0') as usize);
            }
            Some((_, '}')) if saw_digit => return Ok(index),
            Some((position, found)) => {
                return Err(TemplateError::InvalidMarkerSyntax { position, found });
            }
            None => {
                return Err(TemplateError::UnterminatedTemplate {
                    position: opened_at,
                });
            }
        }
    }
}
