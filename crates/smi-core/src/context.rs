use std::io::Write;

use crate::error::RenderError;
use crate::escape::write_escaped;
use crate::options::RenderOptions;

/// Per-run state handed to the dispatch loop and every parser variant.
pub(crate) struct Context<'a> {
    options: &'a RenderOptions,
    out: &'a mut dyn Write,
    depth: usize,
}

impl<'a> Context<'a> {
    pub fn new(options: &'a RenderOptions, out: &'a mut dyn Write) -> Self {
        Self {
            options,
            out,
            depth: 0,
        }
    }

    pub fn strict(&self) -> bool {
        self.options.strict
    }

    pub fn raw(&mut self, bytes: &[u8]) -> Result<(), RenderError> {
        self.out.write_all(bytes)?;
        Ok(())
    }

    pub fn text(&mut self, text: &str) -> Result<(), RenderError> {
        self.raw(text.as_bytes())
    }

    pub fn escaped(&mut self, bytes: &[u8]) -> Result<(), RenderError> {
        write_escaped(&mut *self.out, bytes)?;
        Ok(())
    }

    pub fn enter(&mut self) -> Result<(), RenderError> {
        let limit = self.options.max_depth;
        if self.depth >= limit {
            tracing::warn!(limit, "nesting limit reached");
            return Err(RenderError::TooDeep { limit });
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
