//! Entrance animations
//!
//! Elements fade (and slide) in the first time they scroll into view and stay
//! revealed afterwards. The tracker only computes progress from frame time;
//! the sections decide how to paint it.

use std::collections::HashMap;

use egui::Id;

/// Default entrance duration in seconds
pub const REVEAL_DURATION_SECS: f64 = 0.6;

/// Vertical slide distance at progress 0, in points
pub const REVEAL_SLIDE: f32 = 20.0;

/// Cubic ease-out, `t` in `0.0..=1.0`
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Tracks when each element first entered the viewport
#[derive(Debug)]
pub struct RevealTracker {
    first_seen: HashMap<Id, f64>,
    duration: f64,
    disabled: bool,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(false)
    }
}

impl RevealTracker {
    pub fn new(reduce_motion: bool) -> Self {
        Self {
            first_seen: HashMap::new(),
            duration: REVEAL_DURATION_SECS,
            disabled: reduce_motion,
        }
    }

    /// Turn all entrance animations off (everything renders fully revealed)
    pub fn set_reduce_motion(&mut self, reduce_motion: bool) {
        self.disabled = reduce_motion;
    }

    /// Eased progress of the element `id` at time `now`.
    ///
    /// The clock starts the first frame `in_view` is true and never resets.
    pub fn progress(&mut self, id: Id, in_view: bool, now: f64, delay: f64) -> f32 {
        if self.disabled {
            return 1.0;
        }

        if in_view {
            self.first_seen.entry(id).or_insert(now);
        }

        match self.first_seen.get(&id) {
            Some(&start) => {
                let elapsed = now - start - delay;
                let duration = self.duration.max(f64::EPSILON);
                ease_out_cubic((elapsed / duration) as f32)
            }
            None => 0.0,
        }
    }

    /// Whether an element has entered the viewport at least once
    pub fn has_revealed(&self, id: Id) -> bool {
        self.disabled || self.first_seen.contains_key(&id)
    }
}

/// The tracker bound to one frame's clock
///
/// Remembers whether anything is still mid-animation so the app knows to keep
/// repainting.
pub struct FrameReveal<'a> {
    tracker: &'a mut RevealTracker,
    now: f64,
    animating: bool,
}

impl<'a> FrameReveal<'a> {
    pub fn new(tracker: &'a mut RevealTracker, now: f64) -> Self {
        Self {
            tracker,
            now,
            animating: false,
        }
    }

    pub fn progress(&mut self, id: Id, in_view: bool, delay: f64) -> f32 {
        let progress = self.tracker.progress(id, in_view, self.now, delay);
        if progress < 1.0 && self.tracker.has_revealed(id) {
            self.animating = true;
        }
        progress
    }

    /// Whether any element is between its first sighting and full reveal
    pub fn is_animating(&self) -> bool {
        self.animating
    }
}

/// Show `add_contents` with an entrance fade and slide for `progress`.
pub fn reveal<R>(
    ui: &mut egui::Ui,
    progress: f32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    ui.scope(|ui| {
        if progress < 1.0 {
            ui.add_space((1.0 - progress) * REVEAL_SLIDE);
            ui.set_opacity(progress);
        }
        add_contents(ui)
    })
    .inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_bounds() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(-3.0), 0.0);
        assert_eq!(ease_out_cubic(4.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn test_progress_before_view_is_zero() {
        let mut tracker = RevealTracker::new(false);
        let id = Id::new("card-1");
        assert_eq!(tracker.progress(id, false, 5.0, 0.0), 0.0);
        assert!(!tracker.has_revealed(id));
    }

    #[test]
    fn test_progress_completes_after_duration() {
        let mut tracker = RevealTracker::new(false);
        let id = Id::new("card-1");
        assert_eq!(tracker.progress(id, true, 1.0, 0.0), 0.0);
        assert!(tracker.progress(id, true, 1.3, 0.0) > 0.0);
        assert_eq!(tracker.progress(id, true, 1.0 + REVEAL_DURATION_SECS, 0.0), 1.0);
    }

    #[test]
    fn test_delay_holds_progress() {
        let mut tracker = RevealTracker::new(false);
        let id = Id::new("card-4");
        tracker.progress(id, true, 0.0, 0.3);
        assert_eq!(tracker.progress(id, true, 0.2, 0.3), 0.0);
        assert!(tracker.progress(id, true, 0.5, 0.3) > 0.0);
    }

    #[test]
    fn test_reveal_is_once() {
        let mut tracker = RevealTracker::new(false);
        let id = Id::new("qr");
        tracker.progress(id, true, 0.0, 0.0);
        // Scrolled away again: stays revealed
        assert_eq!(tracker.progress(id, false, 10.0, 0.0), 1.0);
        assert!(tracker.has_revealed(id));
    }

    #[test]
    fn test_frame_reveal_reports_animation() {
        let mut tracker = RevealTracker::new(false);
        let mut frame = FrameReveal::new(&mut tracker, 0.0);
        frame.progress(Id::new("offscreen"), false, 0.0);
        assert!(!frame.is_animating());
        frame.progress(Id::new("hero"), true, 0.0);
        assert!(frame.is_animating());
    }

    #[test]
    fn test_reduce_motion_skips_animation() {
        let mut tracker = RevealTracker::new(true);
        assert_eq!(tracker.progress(Id::new("hero"), false, 0.0, 0.0), 1.0);
    }
}
