use std::collections::{HashMap, HashSet};

use ammonia::Builder;
use once_cell::sync::Lazy;

/// Allow-list covering every tag the renderer itself produces.
static SANITIZER: Lazy<Builder<'static>> = Lazy::new(|| {
    let tags: HashSet<&'static str> = [
        "a",
        "blockquote",
        "br",
        "code",
        "em",
        "h1",
        "h2",
        "h3",
        "h4",
        "h5",
        "h6",
        "hr",
        "img",
        "li",
        "ol",
        "p",
        "pre",
        "strong",
        "ul",
    ]
    .iter()
    .copied()
    .collect();

    let mut tag_attributes = HashMap::new();
    tag_attributes.insert("a", ["href"].iter().copied().collect());
    tag_attributes.insert("img", ["alt", "src"].iter().copied().collect());

    let mut builder = Builder::new();
    builder
        .tags(tags)
        .generic_attributes(HashSet::new())
        .tag_attributes(tag_attributes)
        .link_rel(None);
    builder
});

pub(crate) fn sanitize(html: &str) -> String {
    SANITIZER.clean(html).to_string()
}
