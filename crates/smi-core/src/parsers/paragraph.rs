use super::{Consumed, ParseResult, find};
use crate::context::Context;
use crate::engine::process;

pub(super) fn parse(ctx: &mut Context<'_>, input: &[u8], new_block: bool) -> ParseResult {
    if !new_block {
        return Ok(None);
    }
    let end = find(input, b"\n\n").unwrap_or(input.len());
    if end <= 1 {
        return Ok(None);
    }
    ctx.raw(b"<p>\n")?;
    process(ctx, &input[..end], false)?;
    ctx.raw(b"</p>\n")?;
    Ok(Some(Consumed::block(end)))
}
