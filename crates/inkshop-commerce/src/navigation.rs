//! Page navigation state derived from the scroll position.

/// Scroll offset past which the header gets its shadow.
pub const HEADER_SHADOW_OFFSET: f64 = 50.0;

/// Scroll offset past which the scroll-to-top button shows.
pub const SCROLL_TOP_OFFSET: f64 = 500.0;

/// How far below the header a section may start and still count as current.
pub const ACTIVE_SECTION_LEAD: f64 = 100.0;

/// Vertical extent of a page section, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// What the header and scroll controls show at a scroll position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollState {
    pub header_scrolled: bool,
    pub show_scroll_top: bool,
    /// Section whose nav link is highlighted. `None` between sections,
    /// where the previous highlight should be kept.
    pub active_section: Option<String>,
}

impl ScrollState {
    pub fn at(scroll_y: f64, header_height: f64, sections: &[SectionBounds]) -> Self {
        let line_y = scroll_y + header_height + ACTIVE_SECTION_LEAD;
        Self {
            header_scrolled: scroll_y > HEADER_SHADOW_OFFSET,
            show_scroll_top: scroll_y > SCROLL_TOP_OFFSET,
            // Later sections win when bounds overlap.
            active_section: sections
                .iter()
                .rev()
                .find(|s| s.contains(line_y))
                .map(|s| s.id.clone()),
        }
    }
}

/// Scroll offset that puts a section's top just below the fixed header.
pub fn scroll_target(section_top: f64, header_height: f64) -> f64 {
    (section_top - header_height).max(0.0)
}
