//! Static rule tables consulted by the parser variants.
//!
//! Order inside each table is a tie-break: a pattern that is a prefix of
//! another must come after it (`**` before `*`, `######` before `#`).

/// How the body of a matched tag is rendered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Recurse {
    /// Escaped verbatim.
    None,
    /// Dispatched again with the new-block flag cleared.
    Inline,
    /// Dispatched again as a fresh block sequence.
    Block,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Tag {
    pub pattern: &'static [u8],
    pub recurse: Recurse,
    pub open: &'static str,
    pub close: &'static str,
}

impl Tag {
    const fn new(
        pattern: &'static [u8],
        recurse: Recurse,
        open: &'static str,
        close: &'static str,
    ) -> Self {
        Self {
            pattern,
            recurse,
            open,
            close,
        }
    }
}

pub(crate) const LINE_PREFIX: &[Tag] = &[
    Tag::new(b"   ", Recurse::None, "<pre><code>", "</code></pre>"),
    Tag::new(b"\t", Recurse::None, "<pre><code>", "</code></pre>"),
    Tag::new(b"> ", Recurse::Block, "<blockquote>", "</blockquote>"),
    Tag::new(b"###### ", Recurse::Inline, "<h6>\n", "</h6>"),
    Tag::new(b"##### ", Recurse::Inline, "<h5>\n", "</h5>"),
    Tag::new(b"#### ", Recurse::Inline, "<h4>\n", "</h4>"),
    Tag::new(b"### ", Recurse::Inline, "<h3>\n", "</h3>"),
    Tag::new(b"## ", Recurse::Inline, "<h2>\n", "</h2>"),
    Tag::new(b"# ", Recurse::Inline, "<h1>\n", "</h1>"),
    Tag::new(b"- - -\n", Recurse::Inline, "<hr />", ""),
];

/// Only the first byte of each pattern is used: it is the underline character.
pub(crate) const UNDERLINE: &[Tag] = &[
    Tag::new(b"=", Recurse::Inline, "<h1>\n", "</h1>"),
    Tag::new(b"-", Recurse::Inline, "<h2>\n", "</h2>"),
];

pub(crate) const SURROUND: &[Tag] = &[
    Tag::new(b"``", Recurse::None, "<code>", "</code>"),
    Tag::new(b"`", Recurse::None, "<code>", "</code>"),
    Tag::new(b"___", Recurse::Inline, "<strong><em>", "</em></strong>"),
    Tag::new(b"***", Recurse::Inline, "<strong><em>", "</em></strong>"),
    Tag::new(b"__", Recurse::Inline, "<strong>", "</strong>"),
    Tag::new(b"**", Recurse::Inline, "<strong>", "</strong>"),
    Tag::new(b"_", Recurse::Inline, "<em>", "</em>"),
    Tag::new(b"*", Recurse::Inline, "<em>", "</em>"),
];

/// Backslash escapes and what they stand for.
pub(crate) const REPLACEMENTS: &[(&[u8], &str)] = &[
    (b"\\\\", "\\"),
    (b"\\`", "`"),
    (b"\\*", "*"),
    (b"\\_", "_"),
    (b"\\{", "{"),
    (b"\\}", "}"),
    (b"\\[", "["),
    (b"\\]", "]"),
    (b"\\(", "("),
    (b"\\)", ")"),
    (b"\\#", "#"),
    (b"\\+", "+"),
    (b"\\-", "-"),
    (b"\\.", "."),
    (b"\\!", "!"),
];

/// Emitted in front of the matching text; the text itself is left in place.
pub(crate) const INSERTIONS: &[(&[u8], &str)] = &[(b"  \n", "<br />")];
