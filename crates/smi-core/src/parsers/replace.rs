use super::{Consumed, ParseResult};
use crate::context::Context;
use crate::rules::{INSERTIONS, REPLACEMENTS};

/// Hard line breaks and backslash escapes.
///
/// An insertion is written whenever its pattern starts here, even when no
/// replacement matches; the pattern's bytes are then emitted as ordinary text.
pub(super) fn parse(ctx: &mut Context<'_>, input: &[u8]) -> ParseResult {
    for (pattern, insert) in INSERTIONS {
        if input.starts_with(pattern) {
            ctx.text(insert)?;
        }
    }
    for (pattern, replacement) in REPLACEMENTS {
        if input.starts_with(pattern) {
            ctx.text(replacement)?;
            return Ok(Some(Consumed::inline(pattern.len())));
        }
    }
    Ok(None)
}
