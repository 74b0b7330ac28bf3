//! The parser variants tried at every position of the dispatch loop.

mod autolink;
mod entity;
mod html;
mod line_prefix;
mod link;
mod list;
mod paragraph;
mod replace;
mod surround;
mod underline;

use memchr::memmem;

use crate::context::Context;
use crate::engine::process;
use crate::error::RenderError;
use crate::rules::Recurse;

/// Result of a successful match.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Consumed {
    /// Bytes matched; never zero.
    pub len: usize,
    /// Whether the text after the match starts a new block.
    pub new_block: bool,
}

impl Consumed {
    pub fn inline(len: usize) -> Self {
        debug_assert!(len > 0);
        Self {
            len,
            new_block: false,
        }
    }

    pub fn block(len: usize) -> Self {
        debug_assert!(len > 0);
        Self {
            len,
            new_block: true,
        }
    }
}

pub(crate) type ParseResult = Result<Option<Consumed>, RenderError>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Variant {
    Underline,
    RawHtml,
    LinePrefix,
    List,
    Paragraph,
    AngleBracket,
    Surround,
    Link,
    ShortLink,
    Ampersand,
    Replace,
}

/// Dispatch order; the first variant that matches wins.
pub(crate) const PRIORITY: [Variant; 11] = [
    Variant::Underline,
    Variant::RawHtml,
    Variant::LinePrefix,
    Variant::List,
    Variant::Paragraph,
    Variant::AngleBracket,
    Variant::Surround,
    Variant::Link,
    Variant::ShortLink,
    Variant::Ampersand,
    Variant::Replace,
];

impl Variant {
    /// Attempts a match at the start of `input`, which must be non-empty.
    pub fn try_parse(self, ctx: &mut Context<'_>, input: &[u8], new_block: bool) -> ParseResult {
        match self {
            Variant::Underline => underline::parse(ctx, input, new_block),
            Variant::RawHtml => html::parse(ctx, input, new_block),
            Variant::LinePrefix => line_prefix::parse(ctx, input, new_block),
            Variant::List => list::parse(ctx, input, new_block),
            Variant::Paragraph => paragraph::parse(ctx, input, new_block),
            Variant::AngleBracket => entity::parse_angle_bracket(ctx, input),
            Variant::Surround => surround::parse(ctx, input),
            Variant::Link => link::parse(ctx, input),
            Variant::ShortLink => autolink::parse(ctx, input),
            Variant::Ampersand => entity::parse_ampersand(ctx, input),
            Variant::Replace => replace::parse(ctx, input),
        }
    }
}

/// Renders a tag body according to the tag's recurse mode.
fn emit_body(ctx: &mut Context<'_>, recurse: Recurse, body: &[u8]) -> Result<(), RenderError> {
    match recurse {
        Recurse::None => ctx.escaped(body),
        Recurse::Inline => process(ctx, body, false).map(|_| ()),
        Recurse::Block => process(ctx, body, true).map(|_| ()),
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    memmem::find(haystack, needle)
}

/// Offset where a line-start construct begins: 0 at a block boundary, 1 after
/// a bare newline in inline context, `None` otherwise.
fn line_start(input: &[u8], new_block: bool) -> Option<usize> {
    if new_block {
        Some(0)
    } else if input.first() == Some(&b'\n') {
        Some(1)
    } else {
        None
    }
}
