use super::{Consumed, ParseResult, emit_body, find};
use crate::context::Context;
use crate::rules::{Recurse, SURROUND};

/// Emphasis and code spans delimited by the same pattern on both sides.
pub(super) fn parse(ctx: &mut Context<'_>, input: &[u8]) -> ParseResult {
    for tag in SURROUND {
        let delim = tag.pattern;
        if input.len() < 2 * delim.len() || !input.starts_with(delim) {
            continue;
        }
        let start = delim.len();
        let Some(unescaped) = find_unescaped(input, start, delim) else {
            continue;
        };
        // Code spans still end at the nearest delimiter, escaped or not.
        let close = match tag.recurse {
            Recurse::None => find(&input[start..], delim).map_or(unescaped, |idx| start + idx),
            Recurse::Inline | Recurse::Block => unescaped,
        };
        ctx.text(tag.open)?;
        emit_body(ctx, tag.recurse, &input[start..close])?;
        ctx.text(tag.close)?;
        return Ok(Some(Consumed::inline(close + delim.len())));
    }
    Ok(None)
}

/// First occurrence of `delim` at or after `from` not preceded by a backslash.
fn find_unescaped(input: &[u8], from: usize, delim: &[u8]) -> Option<usize> {
    let mut from = from;
    while let Some(idx) = find(&input[from..], delim) {
        let at = from + idx;
        if input[at - 1] != b'\\' {
            return Some(at);
        }
        from = at + 1;
    }
    None
}
