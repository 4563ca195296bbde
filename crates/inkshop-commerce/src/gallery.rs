//! Gallery lightbox state.
//!
//! The lightbox shows one image of the studio gallery at a time, full
//! screen, with wrap-around navigation. Keyboard and swipe input map to
//! the same [`GalleryCommand`]s as the on-screen buttons.

use serde::{Deserialize, Serialize};

/// Horizontal travel, in CSS pixels, a touch must cover to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// One gallery entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GalleryImage {
    /// Image URL. `None` for placeholder tiles without a photo.
    pub src: Option<String>,
    pub alt: String,
    pub caption: String,
}

/// Lightbox intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryCommand {
    Open(usize),
    Next,
    Prev,
    Close,
}

impl GalleryCommand {
    /// Map a `KeyboardEvent.key` value. Other keys are not ours.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(GalleryCommand::Close),
            "ArrowLeft" => Some(GalleryCommand::Prev),
            "ArrowRight" => Some(GalleryCommand::Next),
            _ => None,
        }
    }

    /// Map a horizontal swipe from `start_x` to `end_x`.
    ///
    /// Swiping left shows the next image, swiping right the previous one.
    /// Movements up to [`SWIPE_THRESHOLD_PX`] are taps, not swipes.
    pub fn from_swipe(start_x: f64, end_x: f64) -> Option<Self> {
        let diff = start_x - end_x;
        if diff.abs() <= SWIPE_THRESHOLD_PX {
            return None;
        }
        Some(if diff > 0.0 {
            GalleryCommand::Next
        } else {
            GalleryCommand::Prev
        })
    }
}

/// The lightbox over a fixed list of images.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Gallery {
    images: Vec<GalleryImage>,
    current: usize,
    open: bool,
}

impl Gallery {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self {
            images,
            current: 0,
            open: false,
        }
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the shown image, while open.
    pub fn current(&self) -> Option<usize> {
        self.open.then_some(self.current)
    }

    /// The shown image, while open.
    pub fn current_image(&self) -> Option<&GalleryImage> {
        self.current().and_then(|i| self.images.get(i))
    }

    /// Position text such as "3 / 8", while open.
    pub fn counter(&self) -> Option<String> {
        self.current()
            .map(|i| format!("{} / {}", i + 1, self.images.len()))
    }

    /// Apply a command. Returns whether anything changed.
    ///
    /// Opening an index past the end is ignored, as is navigating while
    /// closed.
    pub fn dispatch(&mut self, command: GalleryCommand) -> bool {
        tracing::trace!(?command, "gallery dispatch");
        match command {
            GalleryCommand::Open(index) => self.open(index),
            GalleryCommand::Next => self.step(1),
            GalleryCommand::Prev => self.step(-1),
            GalleryCommand::Close => self.close(),
        }
    }

    fn open(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        let changed = !self.open || self.current != index;
        self.current = index;
        self.open = true;
        changed
    }

    fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    fn step(&mut self, delta: isize) -> bool {
        let len = self.images.len();
        if !self.open || len == 0 {
            return false;
        }
        let next = (self.current as isize + delta).rem_euclid(len as isize) as usize;
        let changed = next != self.current;
        self.current = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(n: usize) -> Gallery {
        Gallery::new(
            (0..n)
                .map(|i| GalleryImage {
                    src: Some(format!("/img/{i}.jpg")),
                    alt: format!("Rad {i}"),
                    caption: format!("Rad {i}"),
                })
                .collect(),
        )
    }

    #[test]
    fn test_starts_closed() {
        let g = gallery(3);
        assert!(!g.is_open());
        assert_eq!(g.current(), None);
        assert_eq!(g.counter(), None);
    }

    #[test]
    fn test_open_shows_index() {
        let mut g = gallery(3);
        assert!(g.dispatch(GalleryCommand::Open(1)));
        assert_eq!(g.current(), Some(1));
        assert_eq!(g.counter().as_deref(), Some("2 / 3"));
        assert_eq!(g.current_image().map(|i| i.alt.as_str()), Some("Rad 1"));
    }

    #[test]
    fn test_next_wraps_at_end() {
        let mut g = gallery(3);
        g.dispatch(GalleryCommand::Open(2));
        g.dispatch(GalleryCommand::Next);
        assert_eq!(g.current(), Some(0));
    }

    #[test]
    fn test_prev_wraps_at_start() {
        let mut g = gallery(3);
        g.dispatch(GalleryCommand::Open(0));
        g.dispatch(GalleryCommand::Prev);
        assert_eq!(g.current(), Some(2));
    }

    #[test]
    fn test_single_image_stays_put() {
        let mut g = gallery(1);
        g.dispatch(GalleryCommand::Open(0));
        assert!(!g.dispatch(GalleryCommand::Next));
        assert!(!g.dispatch(GalleryCommand::Prev));
        assert_eq!(g.current(), Some(0));
        assert_eq!(g.counter().as_deref(), Some("1 / 1"));
    }

    #[test]
    fn test_out_of_range_open_is_ignored() {
        let mut g = gallery(2);
        assert!(!g.dispatch(GalleryCommand::Open(2)));
        assert!(!g.is_open());

        let mut empty = gallery(0);
        assert!(!empty.dispatch(GalleryCommand::Open(0)));
        assert!(!empty.dispatch(GalleryCommand::Next));
    }

    #[test]
    fn test_navigation_while_closed_is_ignored() {
        let mut g = gallery(3);
        g.dispatch(GalleryCommand::Open(1));
        assert!(g.dispatch(GalleryCommand::Close));
        assert!(!g.dispatch(GalleryCommand::Close));
        assert!(!g.dispatch(GalleryCommand::Next));
        assert_eq!(g.current(), None);

        // Reopening starts where asked, not where navigation left off.
        g.dispatch(GalleryCommand::Open(0));
        assert_eq!(g.current(), Some(0));
    }

    #[test]
    fn test_keys() {
        assert_eq!(GalleryCommand::from_key("Escape"), Some(GalleryCommand::Close));
        assert_eq!(GalleryCommand::from_key("ArrowLeft"), Some(GalleryCommand::Prev));
        assert_eq!(GalleryCommand::from_key("ArrowRight"), Some(GalleryCommand::Next));
        assert_eq!(GalleryCommand::from_key("Enter"), None);
    }

    #[test]
    fn test_swipes() {
        assert_eq!(GalleryCommand::from_swipe(300.0, 200.0), Some(GalleryCommand::Next));
        assert_eq!(GalleryCommand::from_swipe(200.0, 300.0), Some(GalleryCommand::Prev));
        assert_eq!(GalleryCommand::from_swipe(200.0, 250.0), None);
        assert_eq!(GalleryCommand::from_swipe(200.0, 200.0), None);
    }
}
