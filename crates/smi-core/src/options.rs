/// Recursion limit used when the caller does not pick one.
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RenderOptions {
    /// "No HTML" mode: raw HTML is never passed through and every `&` is escaped.
    pub strict: bool,
    /// Maximum nesting of the dispatch loop before rendering fails.
    pub max_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
