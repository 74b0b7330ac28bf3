use crate::context::Context;
use crate::error::RenderError;
use crate::parsers::PRIORITY;

/// Renders `input` by trying every parser variant at each position.
///
/// `new_block` seeds whether the first position may start a block. Returns
/// the number of bytes walked, which is always `input.len()`: a trailing run
/// of newlines is skipped without output.
pub(crate) fn process(
    ctx: &mut Context<'_>,
    input: &[u8],
    new_block: bool,
) -> Result<usize, RenderError> {
    ctx.enter()?;
    let walked = walk(ctx, input, new_block);
    ctx.leave();
    walked
}

fn walk(ctx: &mut Context<'_>, input: &[u8], mut new_block: bool) -> Result<usize, RenderError> {
    let end = input.len();
    let mut pos = 0;
    while pos < end {
        if new_block {
            while input[pos] == b'\n' {
                pos += 1;
                if pos == end {
                    return Ok(end);
                }
            }
        }

        let mut matched = None;
        for variant in PRIORITY {
            if let Some(consumed) = variant.try_parse(ctx, &input[pos..], new_block)? {
                tracing::trace!(
                    ?variant,
                    len = consumed.len,
                    new_block = consumed.new_block,
                    "variant matched"
                );
                matched = Some(consumed);
                break;
            }
        }

        let forces_block = match matched {
            Some(consumed) => {
                pos += consumed.len;
                consumed.new_block
            }
            None => {
                let byte = &input[pos..pos + 1];
                if ctx.strict() {
                    ctx.escaped(byte)?;
                } else {
                    ctx.raw(byte)?;
                }
                pos += 1;
                false
            }
        };

        if input[pos..].iter().all(|&b| b == b'\n') {
            return Ok(end);
        }
        new_block = forces_block || input[pos..].starts_with(b"\n\n");
    }
    Ok(pos)
}
