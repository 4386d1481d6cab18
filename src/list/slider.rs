use super::{Site, VirtualList};

/// Snapshot of the slider thumb, in percent of the track length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderState {
    pub height: f64,
    pub position: f64,
    /// False when every item already fits the viewport.
    pub active: bool,
}

impl<S: Site> VirtualList<S> {
    /// Thumb length in percent, never below 1.
    pub fn slider_height(&self) -> f64 {
        if self.total < 1 {
            return 100.0;
        }

        (100.0 * self.count as f64 / self.total as f64).clamp(1.0, 100.0)
    }

    /// Offset of the thumb's leading edge in percent. The thumb never
    /// leaves the track.
    pub fn slider_position(&self) -> f64 {
        if self.total < 1 {
            return 0.0;
        }

        let room = 100.0 - self.slider_height();
        (100.0 * self.start as f64 / self.total as f64)
            .min(room)
            .max(0.0)
    }

    /// Whether there is anything to scroll.
    pub fn is_active(&self) -> bool {
        self.count < self.total
    }

    pub fn slider(&self) -> SliderState {
        SliderState {
            height: self.slider_height(),
            position: self.slider_position(),
            active: self.is_active(),
        }
    }

    /// Jumps so the thumb starts at `relative` (0..=1) along the track.
    pub fn set_position(&mut self, relative: f64) {
        if self.move_to(relative) {
            self.notify();
        }
    }

    /// Pages towards a click at `relative` along the track. Clicks on the
    /// thumb itself are ignored.
    pub fn on_click(&mut self, relative: f64) {
        if self.total < 1 || relative.is_nan() {
            return;
        }

        let thumb_start = self.slider_position() / 100.0;
        let thumb_size = self.slider_height() / 100.0;

        let target = if relative < thumb_start {
            (thumb_start - thumb_size).max(0.0)
        } else if relative > thumb_start + thumb_size {
            (thumb_start + thumb_size).min(1.0)
        } else {
            return;
        };

        self.set_position(target);
    }

    /// Converts a track fraction into `start` without notifying.
    /// Returns whether `start` changed.
    pub(super) fn move_to(&mut self, relative: f64) -> bool {
        if self.total < 1 || relative.is_nan() {
            return false;
        }

        let limit = 1.0 - self.slider_height() / 100.0;
        let index = (relative.min(limit) * self.total as f64).floor();
        let start = if index > 0.0 {
            (index as usize).min(self.last_index())
        } else {
            0
        };

        if start == self.start {
            return false;
        }

        self.start = start;
        true
    }
}
