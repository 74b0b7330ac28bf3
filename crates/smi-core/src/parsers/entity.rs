use super::{Consumed, ParseResult};
use crate::context::Context;

/// A bare `&`. In permissive mode an `&` that looks like the start of an
/// entity reference (`;` before any whitespace or backslash) is left alone.
pub(super) fn parse_ampersand(ctx: &mut Context<'_>, input: &[u8]) -> ParseResult {
    if input[0] != b'&' {
        return Ok(None);
    }
    if !ctx.strict() {
        let terminator = input[1..]
            .iter()
            .find(|b| b"; \\\n\t".contains(b));
        if terminator == Some(&b';') {
            return Ok(None);
        }
    }
    ctx.raw(b"&amp;")?;
    Ok(Some(Consumed::inline(1)))
}

/// Bytes that may follow `<` or precede `>` in a tag.
fn is_tag_byte(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || b"/\"'".contains(&byte)
}

/// A `<` that cannot open a tag, or a `>` after a byte that cannot end one.
/// Permissive mode only; strict mode escapes every byte anyway.
pub(super) fn parse_angle_bracket(ctx: &mut Context<'_>, input: &[u8]) -> ParseResult {
    if ctx.strict() || input.len() < 2 {
        return Ok(None);
    }
    if input[1] == b'>' {
        if is_tag_byte(input[0]) {
            return Ok(None);
        }
        ctx.escaped(&input[..1])?;
        ctx.raw(b"&gt;")?;
        return Ok(Some(Consumed::inline(2)));
    }
    if input[0] == b'<' && !is_tag_byte(input[1]) {
        ctx.raw(b"&lt;")?;
        return Ok(Some(Consumed::inline(1)));
    }
    Ok(None)
}
