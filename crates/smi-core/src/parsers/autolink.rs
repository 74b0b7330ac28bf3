use super::{Consumed, ParseResult};
use crate::context::Context;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Target {
    Unknown,
    Mail,
    Url,
}

/// `<scheme:...>` or `<user@host>`. Mail addresses are written as numeric
/// character references to keep them away from naive harvesters.
pub(super) fn parse(ctx: &mut Context<'_>, input: &[u8]) -> ParseResult {
    if input[0] != b'<' {
        return Ok(None);
    }
    let mut target = Target::Unknown;
    for (idx, &byte) in input.iter().enumerate().skip(1) {
        match byte {
            b' ' | b'\t' | b'\n' => return Ok(None),
            b'#' | b':' => target = Target::Url,
            b'@' if target == Target::Unknown => target = Target::Mail,
            b'>' => {
                let address = &input[1..idx];
                match target {
                    Target::Unknown => return Ok(None),
                    Target::Mail => {
                        let encoded = encode_numeric(address);
                        ctx.raw(b"<a href=\"")?;
                        ctx.text(&encode_numeric(b"mailto:"))?;
                        ctx.text(&encoded)?;
                        ctx.raw(b"\">")?;
                        ctx.text(&encoded)?;
                    }
                    Target::Url => {
                        ctx.raw(b"<a href=\"")?;
                        ctx.escaped(address)?;
                        ctx.raw(b"\">")?;
                        ctx.escaped(address)?;
                    }
                }
                ctx.raw(b"</a>")?;
                return Ok(Some(Consumed::inline(idx + 1)));
            }
            _ => {}
        }
    }
    Ok(None)
}

fn encode_numeric(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .map(|ch| format!("&#{};", u32::from(ch)))
        .collect()
}
