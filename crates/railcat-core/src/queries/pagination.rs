//! Offset/limit pagination cursors

use serde::{Deserialize, Serialize};

/// An offset/limit cursor into an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Page {
    /// Offset of the first item
    pub start: usize,
    /// Maximum number of items
    pub limit: usize,
}

impl Page {
    /// Create a page cursor
    pub fn new(start: usize, limit: usize) -> Page {
        Page { start, limit }
    }

    /// The cursor one page forward
    pub fn next(&self) -> Page {
        Page::new(self.start + self.limit, self.limit)
    }

    /// The cursor one page back, clamped at the start of the result
    /// set rather than going negative.
    pub fn previous(&self) -> Page {
        Page::new(self.start.saturating_sub(self.limit), self.limit)
    }
}

impl Default for Page {
    fn default() -> Page {
        Page::new(0, 25)
    }
}
