use super::{Consumed, ParseResult, find};
use crate::context::Context;
use crate::engine::process;
use crate::span::Span;

/// Inline links `[text](url)` and images `![alt](url)`.
///
/// Each `![` inside the description pushes its end past one more `](`, so a
/// single image can sit inside a link's text.
pub(super) fn parse(ctx: &mut Context<'_>, input: &[u8]) -> ParseResult {
    let image = if input.starts_with(b"![") {
        true
    } else if input[0] == b'[' {
        false
    } else {
        return Ok(None);
    };
    let desc_start = if image { 2 } else { 1 };
    let Some(mut desc_end) = find_from(input, desc_start, b"](") else {
        return Ok(None);
    };
    let mut nested = find_from(input, desc_start, b"![");
    while let Some(opener) = nested.filter(|&at| at < desc_end) {
        let Some(next) = find_from(input, desc_end + 1, b"](") else {
            return Ok(None);
        };
        desc_end = next;
        nested = find_from(input, opener + 1, b"![");
    }
    let target_start = desc_end + 2;
    let Some(target_end) = find_from(input, target_start, b")") else {
        return Ok(None);
    };

    let desc = Span::new(desc_start, desc_end);
    let target = Span::new(target_start, target_end);
    if image {
        ctx.raw(b"<img src=\"")?;
        ctx.escaped(target.slice(input))?;
        ctx.raw(b"\" alt=\"")?;
        ctx.escaped(desc.slice(input))?;
        ctx.raw(b"\" />")?;
    } else {
        ctx.raw(b"<a href=\"")?;
        ctx.escaped(target.slice(input))?;
        ctx.raw(b"\">")?;
        process(ctx, desc.slice(input), false)?;
        ctx.raw(b"</a>")?;
    }
    Ok(Some(Consumed::inline(target_end + 1)))
}

fn find_from(input: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    input
        .get(from..)
        .and_then(|rest| find(rest, needle))
        .map(|idx| from + idx)
}
