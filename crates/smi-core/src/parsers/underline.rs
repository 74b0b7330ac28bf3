use memchr::memchr;

use super::{Consumed, ParseResult, emit_body};
use crate::context::Context;
use crate::rules::UNDERLINE;

/// Setext-style heading: a line followed by a run of `=` or `-` at least as
/// long as the line itself.
pub(super) fn parse(ctx: &mut Context<'_>, input: &[u8], new_block: bool) -> ParseResult {
    if !new_block {
        return Ok(None);
    }
    let Some(title_len) = memchr(b'\n', input) else {
        return Ok(None);
    };
    if title_len == 0 {
        return Ok(None);
    }
    let underline_start = title_len + 1;
    for tag in UNDERLINE {
        let marker = tag.pattern[0];
        let run = input[underline_start..]
            .iter()
            .take_while(|&&b| b == marker)
            .count();
        if run < title_len {
            continue;
        }
        ctx.text(tag.open)?;
        emit_body(ctx, tag.recurse, &input[..title_len])?;
        ctx.text(tag.close)?;
        ctx.raw(b"\n")?;
        return Ok(Some(Consumed::block(underline_start + run)));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::parse;
    use crate::parsers::Consumed;
    use crate::parsers::testing::run;

    #[test]
    fn equals_underline_makes_h1() {
        let (consumed, html) = run(false, "Title\n=====\nrest", |ctx, input| {
            parse(ctx, input, true)
        });
        assert_eq!(consumed, Some(Consumed::block(11)));
        assert_eq!(html, "<h1>\nTitle</h1>\n");
    }

    #[test]
    fn dash_underline_makes_h2_and_may_overshoot() {
        let (consumed, html) = run(false, "Sub\n-------", |ctx, input| parse(ctx, input, true));
        assert_eq!(consumed, Some(Consumed::block(11)));
        assert_eq!(html, "<h2>\nSub</h2>\n");
    }

    #[test]
    fn short_underline_does_not_match() {
        let (consumed, html) = run(false, "Title\n===", |ctx, input| parse(ctx, input, true));
        assert_eq!(consumed, None);
        assert_eq!(html, "");
    }

    #[test]
    fn requires_block_start_and_a_second_line() {
        let (consumed, _) = run(false, "Title\n=====", |ctx, input| parse(ctx, input, false));
        assert_eq!(consumed, None);
        let (consumed, _) = run(false, "Title", |ctx, input| parse(ctx, input, true));
        assert_eq!(consumed, None);
    }

    #[test]
    fn title_is_parsed_inline() {
        let (_, html) = run(false, "*big*\n=====", |ctx, input| parse(ctx, input, true));
        assert_eq!(html, "<h1>\n<em>big</em></h1>\n");
    }
}
