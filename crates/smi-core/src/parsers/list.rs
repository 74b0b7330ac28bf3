use super::{Consumed, ParseResult, line_start};
use crate::context::Context;
use crate::engine::process;

fn is_blank(byte: &u8) -> bool {
    *byte == b' ' || *byte == b'\t'
}

fn is_bullet(byte: Option<&u8>) -> bool {
    matches!(byte, Some(b'-' | b'*' | b'+'))
}

/// Ordered (`1.`) and unordered (`-`, `*`, `+`) lists.
///
/// The width of the first marker plus its trailing whitespace is the indent
/// every later line is measured against: a line whose first `indent` bytes
/// are a new marker starts the next item, one indented by whitespace
/// continues the current item. Any other line is a lazy continuation, unless
/// it follows a blank line, in which case the list is over.
pub(super) fn parse(ctx: &mut Context<'_>, input: &[u8], new_block: bool) -> ParseResult {
    let Some(start) = line_start(input, new_block) else {
        return Ok(None);
    };
    let mut pos = start;
    let ordered = if is_bullet(input.get(pos)) {
        pos += 1;
        false
    } else {
        let digits = input[pos..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 || input.get(pos + digits) != Some(&b'.') {
            return Ok(None);
        }
        pos += digits + 1;
        true
    };
    if !input.get(pos).is_some_and(is_blank) {
        return Ok(None);
    }
    pos += 1;
    pos += input[pos..].iter().take_while(|b| is_blank(b)).count();
    if pos == input.len() {
        return Ok(None);
    }
    let indent = pos - start;

    if start == 1 {
        ctx.raw(b"\n")?;
    }
    ctx.text(if ordered { "<ol>\n" } else { "<ul>\n" })?;

    let mut body = Vec::new();
    let mut blank_lines = 0usize;
    loop {
        body.clear();
        let mut next_item = false;
        let mut ended_by_blank = false;
        while pos < input.len() {
            let byte = input[pos];
            if byte != b'\n' {
                body.push(byte);
                pos += 1;
                continue;
            }
            if pos + 1 == input.len() {
                pos += 1;
                break;
            }
            let blank = input[pos + 1] == b'\n';
            let line = if blank {
                blank_lines += 1;
                body.push(b'\n');
                pos + 2
            } else {
                pos + 1
            };
            body.push(b'\n');
            if prefix_width(input, line, ordered, indent) == indent {
                pos = line + indent;
                if is_blank(&input[line]) {
                    continue;
                }
                next_item = true;
                break;
            }
            pos = line;
            if blank {
                ended_by_blank = true;
                break;
            }
        }

        let as_block = blank_lines > 1 || (blank_lines == 1 && !ended_by_blank);
        ctx.raw(b"<li>")?;
        process(ctx, &body, as_block)?;
        ctx.raw(b"</li>\n")?;
        if !next_item {
            break;
        }
    }
    ctx.text(if ordered { "</ol>\n" } else { "</ul>\n" })?;

    let mut end = pos;
    while end > start && input[end - 1] == b'\n' {
        end -= 1;
    }
    Ok(Some(Consumed::block(end)))
}

/// How many of the first `indent` bytes of the line at `line` form a marker
/// of the same list kind followed by whitespace, or plain indentation.
fn prefix_width(input: &[u8], line: usize, ordered: bool, indent: usize) -> usize {
    let rest = input.get(line..).unwrap_or_default();
    let mut width = 0;
    if !ordered {
        if is_bullet(rest.first()) {
            width = 1;
        }
    } else {
        let digits = rest
            .iter()
            .take(indent)
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits > 0 && rest.get(digits) == Some(&b'.') {
            width = digits + 1;
        }
    }
    if width <= indent && rest.len() > indent {
        width += rest[width..indent].iter().take_while(|b| is_blank(b)).count();
    }
    width
}
