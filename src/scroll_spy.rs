use std::cell::Cell;

use crate::config::SCROLL_SPY_OFFSET;

#[derive(Clone, Debug, PartialEq)]
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

    /// Half-open window `[top - offset, top - offset + height)`.
    pub fn contains(&self, scroll_y: f64) -> bool {
        let start = self.top - SCROLL_SPY_OFFSET;
        scroll_y >= start && scroll_y < start + self.height
    }
}

/// Section currently in view. Overlapping windows resolve to the last section
/// in document order.
pub fn current_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| section.contains(scroll_y))
        .map(|section| section.id.as_str())
}

/// Fragment named by an in-page href, without the leading `#`.
pub fn href_fragment(href: &str) -> Option<&str> {
    let (_, fragment) = href.split_once('#')?;
    (!fragment.is_empty()).then_some(fragment)
}

pub fn link_is_active(href: &str, active_section: &str) -> bool {
    href_fragment(href) == Some(active_section)
}

/// Coalesces bursts of scroll events into one update per animation frame.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    pending: Cell<bool>,
}

impl FrameThrottle {
    /// `true` when the caller should schedule a frame; `false` while one is
    /// already queued.
    pub fn try_schedule(&self) -> bool {
        !self.pending.replace(true)
    }

    pub fn frame_ran(&self) {
        self.pending.set(false);
    }

    #[cfg(test)]
    fn is_pending(&self) -> bool {
        self.pending.get()
    }
}
