/*
 * args.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Argument stringification and the fixed-arity call surface.
//!
//! The engine itself is arity-agnostic: [`format`] takes an ordered slice of
//! `Display` values of any length. The `format1`..`format6` helpers below
//! are the conventional bounded surface, generated mechanically so each
//! arity stays a one-line delegation.

use std::fmt;

use crate::engine::render;
use crate::error::TemplateResult;

/// Format `template` against an ordered argument list.
///
/// Each argument is stringified once through its `Display` impl; the
/// resulting texts are substituted for `{N}` markers by [`render`]. The same
/// argument may be referenced any number of times, in any order.
///
/// # Example
///
/// ```rust
/// use curly_format::format;
///
/// let s = format("{0}, {1}!", &[&"hello", &"world"])?;
/// assert_eq!(s, "hello, world!");
/// # Ok::<(), curly_format::TemplateError>(())
/// ```
///
/// # Errors
///
/// Fails with a [`TemplateError`](crate::TemplateError) if the template is
/// malformed or references an index at or above `args.len()`.
pub fn format(template: &str, args: &[&dyn fmt::Display]) -> TemplateResult<String> {
    let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
    render(template, &args)
}

/// Generates one fixed-arity wrapper around [`format`].
macro_rules! fixed_arity {
    ($(#[$attr:meta])* $name:ident: $($arg:ident as $ty:ident),+) => {
        $(#[$attr])*
        pub fn $name<$($ty: fmt::Display),+>(
            template: &str,
            $($arg: $ty),+
        ) -> TemplateResult<String> {
            format(template, &[$(&$arg as &dyn fmt::Display),+])
        }
    };
}

fixed_arity! {
    /// [`format`] with exactly one argument.
    format1: v0 as T0
}

fixed_arity! {
    /// [`format`] with exactly two arguments.
    format2: v0 as T0, v1 as T1
}

fixed_arity! {
    /// [`format`] with exactly three arguments.
    format3: v0 as T0, v1 as T1, v2 as T2
}

fixed_arity! {
    /// [`format`] with exactly four arguments.
    format4: v0 as T0, v1 as T1, v2 as T2, v3 as T3
}

fixed_arity! {
    /// [`format`] with exactly five arguments.
    format5: v0 as T0, v1 as T1, v2 as T2, v3 as T3, v4 as T4
}

fixed_arity! {
    /// [`format`] with exactly six arguments.
    format6: v0 as T0, v1 as T1, v2 as T2, v3 as T3, v4 as T4, v5 as T5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_accepts_mixed_types() {
        let s = format("{0} = {1}", &[&"answer" as &dyn fmt::Display, &42]).unwrap();
        assert_eq!(s, "answer = 42");
    }

    #[test]
    fn test_fixed_arity_delegation() {
        assert_eq!(format3("{2}{1}{0}", 'a', 'b', 'c').unwrap(), "cba");
    }

    #[test]
    fn test_stringification_happens_once_per_argument() {
        // 2.5 renders through Display exactly as std would print it,
        // however many times the marker repeats.
        assert_eq!(format1("{0} {0} {0}", 2.5).unwrap(), "2.5 2.5 2.5");
    }

    #[test]
    fn test_arity_bound_is_surface_only() {
        // The slice entry point takes any argument count.
        let args: Vec<String> = (0..10).map(|n| n.to_string()).collect();
        assert_eq!(crate::render("{9}", &args).unwrap(), "9");
    }
}
