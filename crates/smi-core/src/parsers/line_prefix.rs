use super::{Consumed, ParseResult, emit_body, line_start};
use crate::context::Context;
use crate::rules::LINE_PREFIX;

/// Blocks marked by a literal prefix on every line: code blocks, block
/// quotes, ATX headings and the horizontal rule.
pub(super) fn parse(ctx: &mut Context<'_>, input: &[u8], new_block: bool) -> ParseResult {
    let Some(start) = line_start(input, new_block) else {
        return Ok(None);
    };
    for tag in LINE_PREFIX {
        let prefix = tag.pattern;
        if !input[start..].starts_with(prefix) {
            continue;
        }
        if start == 1 {
            ctx.raw(b"\n")?;
        }
        ctx.text(tag.open)?;
        if prefix.ends_with(b"\n") {
            ctx.text(tag.close)?;
            ctx.raw(b"\n")?;
            return Ok(Some(Consumed::block(start + prefix.len())));
        }

        // Strip the prefix from every continuation line; the first line
        // without it ends the block.
        let mut body = Vec::new();
        let mut pos = start + prefix.len();
        while pos < input.len() {
            let byte = input[pos];
            body.push(byte);
            if byte == b'\n' && pos + prefix.len() < input.len() {
                if !input[pos + 1..].starts_with(prefix) {
                    break;
                }
                pos += prefix.len();
            }
            pos += 1;
        }

        emit_body(ctx, tag.recurse, &body)?;
        ctx.text(tag.close)?;
        ctx.raw(b"\n")?;
        return Ok(Some(Consumed::block(pos)));
    }
    Ok(None)
}
