use super::{Consumed, ParseResult, find};
use crate::context::Context;

/// Raw HTML block: `<name ...` at a block start, copied verbatim through the
/// first line that begins with `</name>`.
pub(super) fn parse(ctx: &mut Context<'_>, input: &[u8], new_block: bool) -> ParseResult {
    if ctx.strict() || !new_block {
        return Ok(None);
    }
    let lead = usize::from(input.first() == Some(&b'\n'));
    let open = &input[lead..];
    if open.len() < 2 || open[0] != b'<' || !open[1].is_ascii_alphabetic() {
        return Ok(None);
    }
    let name_len = open[1..]
        .iter()
        .position(|b| b" \t\n/>".contains(b))
        .unwrap_or(open.len() - 1);
    let name = &open[1..1 + name_len];

    let mut from = lead + 1 + name_len;
    while let Some(found) = find(&input[from..], b"\n</") {
        let tag_start = from + found + 3;
        let rest = &input[tag_start..];
        if rest.starts_with(name) && rest.get(name.len()) == Some(&b'>') {
            let end = tag_start + name.len() + 1;
            ctx.raw(&input[..end])?;
            ctx.raw(b"\n\n")?;
            return Ok(Some(Consumed::block(end)));
        }
        from = tag_start;
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::parse;
    use crate::parsers::Consumed;
    use crate::parsers::testing::run;

    #[test]
    fn copies_block_through_closing_tag() {
        let input = "<div class=\"x\">\n<b>&copy;</b>\n</div>\nafter";
        let (consumed, html) = run(false, input, |ctx, input| parse(ctx, input, true));
        assert_eq!(consumed, Some(Consumed::block(36)));
        assert_eq!(html, "<div class=\"x\">\n<b>&copy;</b>\n</div>\n\n");
    }

    #[test]
    fn skips_closing_tags_of_other_elements() {
        let input = "<section>\n</div>\n</section>";
        let (consumed, html) = run(false, input, |ctx, input| parse(ctx, input, true));
        assert_eq!(consumed, Some(Consumed::block(input.len())));
        assert_eq!(html, format!("{input}\n\n"));
    }

    #[test]
    fn unterminated_block_does_not_match() {
        let (consumed, html) = run(false, "<div>\nno end", |ctx, input| parse(ctx, input, true));
        assert_eq!(consumed, None);
        assert_eq!(html, "");
    }

    #[test]
    fn closing_tag_must_start_a_line() {
        let (consumed, _) = run(false, "<p>text</p>", |ctx, input| parse(ctx, input, true));
        assert_eq!(consumed, None);
    }

    #[test]
    fn disabled_in_strict_mode_and_inline() {
        let input = "<div>\n</div>";
        let (consumed, _) = run(true, input, |ctx, input| parse(ctx, input, true));
        assert_eq!(consumed, None);
        let (consumed, _) = run(false, input, |ctx, input| parse(ctx, input, false));
        assert_eq!(consumed, None);
    }

    #[test]
    fn tag_name_must_start_with_a_letter() {
        let (consumed, _) = run(false, "<1>\n</1>", |ctx, input| parse(ctx, input, true));
        assert_eq!(consumed, None);
    }
}
