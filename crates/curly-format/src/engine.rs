/*
 * engine.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Two-pass render orchestration.

use tracing::trace;

use crate::error::TemplateResult;
use crate::fill::FillWriter;
use crate::measure::{ScanCounts, output_len};
use crate::scanner::scan;

/// Render `template` against already-stringified `args`.
///
/// Runs the scanner twice: once with a [`ScanCounts`] visitor to compute the
/// exact output length, then again with a [`FillWriter`] bound to a buffer
/// of that length. A malformed template fails on the first pass, before any
/// output is allocated.
///
/// # Errors
///
/// Any [`TemplateError`](crate::TemplateError) raised by the scanner is
/// returned unchanged; no partial output is exposed.
pub fn render(template: &str, args: &[String]) -> TemplateResult<String> {
    let mut counts = ScanCounts::new(args.len());
    scan(template, args.len(), &mut counts)?;

    let capacity = output_len(&counts, args);
    trace!(
        template_len = template.len(),
        output_len = capacity,
        arg_count = args.len(),
        "sized template render"
    );

    let mut writer = FillWriter::with_capacity(capacity, args);
    scan(template, args.len(), &mut writer)?;
    Ok(writer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TemplateError;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_substitutes_each_reference() {
        let args = strings(&["a", "bc"]);
        assert_eq!(render("{0}{1}{0}", &args).unwrap(), "abca");
    }

    #[test]
    fn test_render_empty_template() {
        assert_eq!(render("", &[]).unwrap(), "");
    }

    #[test]
    fn test_render_empty_argument() {
        let args = strings(&[""]);
        assert_eq!(render("[{0}]", &args).unwrap(), "[]");
    }

    #[test]
    fn test_output_is_exactly_sized() {
        let template = "{{{0}}} plus {0}";
        let args = strings(&["xyz"]);
        let out = render(template, &args).unwrap();

        let mut counts = ScanCounts::new(args.len());
        scan(template, args.len(), &mut counts).unwrap();
        assert_eq!(out.len(), output_len(&counts, &args));
        assert_eq!(out, "{xyz} plus xyz");
    }

    #[test]
    fn test_error_propagates_from_first_pass() {
        let args = strings(&["a"]);
        assert_eq!(
            render("{0} {", &args),
            Err(TemplateError::UnterminatedTemplate { position: 4 })
        );
    }
}
