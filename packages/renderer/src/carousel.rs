use serde::{Deserialize, Serialize};

/// Cursor of one testimonial carousel.
///
/// The stored index is never trusted on its own: every read clamps it to the
/// current item count, so removing testimonials cannot leave it dangling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CarouselState {
    index: usize,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(index: usize) -> Self {
        Self { index }
    }

    /// Index of the visible item for a carousel of `count` items
    pub fn current(&self, count: usize) -> usize {
        self.index.min(count.saturating_sub(1))
    }

    pub fn can_go_previous(&self, count: usize) -> bool {
        self.current(count) > 0
    }

    pub fn can_go_next(&self, count: usize) -> bool {
        count > 0 && self.current(count) < count - 1
    }

    pub fn previous(&mut self, count: usize) {
        self.index = self.current(count).saturating_sub(1);
    }

    pub fn next(&mut self, count: usize) {
        self.index = (self.current(count) + 1).min(count.saturating_sub(1));
    }
}
