use std::cell::Cell;

use crate::config::SCROLL_TOP_THRESHOLD;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed() -> Self {
        Self { open: false }
    }
}

pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

/// Last observed scroll offset. Resize and load ticks leave the offset where
/// it was, so only real scrolling reports movement.
#[derive(Debug, Default)]
pub struct ScrollMotion {
    last: Cell<Option<f64>>,
}

impl ScrollMotion {
    pub fn moved(&self, scroll_y: f64) -> bool {
        self.last
            .replace(Some(scroll_y))
            .is_some_and(|previous| previous != scroll_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_close_always_closes() {
        let menu = MenuState::default();
        assert!(menu.toggled().open);
        assert!(!menu.toggled().toggled().open);
        assert_eq!(MenuState::closed(), MenuState::default());
    }

    #[test]
    fn scroll_top_appears_past_threshold() {
        assert!(!scroll_top_visible(0.0));
        assert!(!scroll_top_visible(60.0));
        assert!(scroll_top_visible(60.5));
    }

    #[test]
    fn only_a_changed_offset_counts_as_scrolling() {
        let motion = ScrollMotion::default();
        assert!(!motion.moved(0.0), "first tick is page load");
        assert!(!motion.moved(0.0), "resize at the same offset");
        assert!(motion.moved(120.0));
        assert!(!motion.moved(120.0));
        assert!(motion.moved(80.0));
    }
}
