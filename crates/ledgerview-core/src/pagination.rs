//! Page cursor for the ledger table

use serde::{Deserialize, Serialize};

/// Tracks the current page and the total page count.
///
/// Both values are 1-based and at least 1. The cursor clamps every
/// transition into `[1, total]`, so navigation never runs past either
/// end even if a caller skips the enablement checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageCursor {
    current: u32,
    total: u32,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            current: 1,
            total: 1,
        }
    }
}

impl PageCursor {
    /// Current 1-based page index
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Total page count
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Record the page count reported by the backend, clamping the
    /// current page back into range when the collection shrank
    pub fn set_total(&mut self, total: u32) {
        self.total = total.max(1);
        self.current = self.current.min(self.total);
    }

    /// Jump to `page`, clamped into `[1, total]`; returns the page landed on
    pub fn go_to(&mut self, page: u32) -> u32 {
        self.current = page.clamp(1, self.total);
        self.current
    }

    /// Move to the next page; saturates at the last page
    pub fn advance(&mut self) -> u32 {
        if self.has_next() {
            self.current += 1;
        }
        self.current
    }

    /// Move to the previous page; saturates at page 1
    pub fn retreat(&mut self) -> u32 {
        if self.has_prev() {
            self.current -= 1;
        }
        self.current
    }

    /// Whether a "Previous" control should be enabled
    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    /// Whether a "Next" control should be enabled
    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    /// Human-readable position, e.g. "Page 2 of 5"
    pub fn indicator(&self) -> String {
        format!("Page {} of {}", self.current, self.total)
    }
}
