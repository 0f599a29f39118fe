//! Page geometry and the vertical cursor
//!
//! All layout happens in millimeters on an A4 portrait page, measured
//! from the top edge downward. The cursor tracks the current write
//! position and the page count; the renderer asks it whether a pending
//! write still fits and breaks the page when it does not.

/// A4 portrait width in millimeters
pub const PAGE_WIDTH: f32 = 210.0;

/// A4 portrait height in millimeters
pub const PAGE_HEIGHT: f32 = 297.0;

/// Uniform page margin in millimeters
pub const MARGIN: f32 = 20.0;

/// Horizontal space available for content
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

/// Baseline of the page number footer, from the top edge
pub const FOOTER_Y: f32 = PAGE_HEIGHT - 10.0;

/// Vertical write position on the current page
///
/// `y` is the distance in millimeters from the top edge of the page and
/// only ever moves downward; a page break resets it to the top margin
/// and bumps the page number.
#[derive(Debug, Clone, Copy)]
pub struct PageCursor {
    y: f32,
    page: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl PageCursor {
    /// Cursor at the top of page 1
    pub fn new() -> Self {
        Self { y: MARGIN, page: 1 }
    }

    /// Current vertical offset from the top edge
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Current page number, starting at 1
    pub fn page(&self) -> usize {
        self.page
    }

    /// Lowest usable vertical offset on a page
    pub fn limit(&self) -> f32 {
        PAGE_HEIGHT - MARGIN
    }

    /// Would writing `needed` more millimeters overflow the page?
    pub fn needs_break(&self, needed: f32) -> bool {
        self.y + needed > self.limit()
    }

    /// Move to the top of a fresh page
    pub fn break_page(&mut self) {
        self.page += 1;
        self.y = MARGIN;
    }

    /// Move the cursor down by `amount` millimeters
    pub fn advance(&mut self, amount: f32) {
        self.y += amount;
    }
}
