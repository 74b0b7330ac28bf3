//! Streaming converter from a small plain-text markup dialect to HTML.
//!
//! There is no syntax tree: a fixed, ordered set of parser variants is tried
//! at every position of the input and each one writes its HTML as soon as it
//! matches, recursing into sub-ranges where a construct has nested content.

mod context;
mod engine;
mod error;
mod escape;
mod options;
mod parsers;
mod rules;
mod sanitize;
mod span;

use std::io::Write;

use context::Context;

pub use error::RenderError;
pub use options::{DEFAULT_MAX_DEPTH, RenderOptions};

/// Streams the HTML for `source` into `out`.
///
/// Returns how many input bytes were consumed, which is always
/// `source.len()`.
pub fn render_to<W: Write>(
    source: &[u8],
    options: &RenderOptions,
    out: &mut W,
) -> Result<usize, RenderError> {
    tracing::debug!(bytes = source.len(), strict = options.strict, "rendering");
    let mut ctx = Context::new(options, out);
    engine::process(&mut ctx, source, true)
}

/// Renders `source` with the default options.
pub fn render_html(source: &str) -> Result<String, RenderError> {
    render_html_with_options(source, &RenderOptions::default())
}

/// Renders `source` into a `String`, replacing invalid UTF-8 in the output.
pub fn render_html_with_options(
    source: &str,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let mut out = Vec::with_capacity(source.len() + source.len() / 4);
    render_to(source.as_bytes(), options, &mut out)?;
    Ok(String::from_utf8(out)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned()))
}

/// Renders `source` and filters the result through an allow-list of the tags
/// and attributes the renderer emits, dropping raw HTML it does not know.
pub fn render_html_sanitized(
    source: &str,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let html = render_html_with_options(source, options)?;
    Ok(sanitize::sanitize(&html))
}
