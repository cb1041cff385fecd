// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Viewport visibility observer.
//!
//! Tracks rectangles inside a scrollable viewport and emits discrete
//! enter/exit events when an item's visible-area coverage crosses a
//! threshold (60% by default). Deliberately decoupled from the playback
//! coordinator: pages forward `Entered` events to `request_active`
//! themselves, and an item leaving focus emits `Exited` without anyone
//! releasing playback — a sole focused video keeps playing.

use egui::Rect;
use std::hash::Hash;

/// Focus threshold used by the portfolio feed.
pub const FEED_FOCUS_COVERAGE: f32 = 0.6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibilityEvent<K> {
    Entered(K),
    Exited(K),
}

struct Tracked<K> {
    key: K,
    rect: Rect,
    in_focus: bool,
    seen: bool,
}

/// Observer over a set of keyed rectangles.
///
/// Call [`update`] for every tracked item each frame, then [`observe`]
/// once with the viewport rect. Items not updated since the last observe
/// are treated as unmounted.
pub struct VisibilityObserver<K> {
    threshold: f32,
    // Vec keeps update order so same-tick events resolve deterministically
    tracked: Vec<Tracked<K>>,
}

impl<K: Clone + Eq + Hash> VisibilityObserver<K> {
    pub fn new() -> Self {
        Self::with_threshold(FEED_FOCUS_COVERAGE)
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            threshold,
            tracked: Vec::new(),
        }
    }

    /// Record this frame's rect for an item.
    pub fn update(&mut self, key: K, rect: Rect) {
        if let Some(item) = self.tracked.iter_mut().find(|t| t.key == key) {
            item.rect = rect;
            item.seen = true;
        } else {
            self.tracked.push(Tracked {
                key,
                rect,
                in_focus: false,
                seen: true,
            });
        }
    }

    /// Compute coverage against the viewport and emit focus transitions,
    /// in update order. Unseen items are dropped (with an exit event if
    /// they were in focus).
    pub fn observe(&mut self, viewport: Rect) -> Vec<VisibilityEvent<K>> {
        let mut events = Vec::new();
        let threshold = self.threshold;

        self.tracked.retain_mut(|item| {
            if !item.seen {
                if item.in_focus {
                    events.push(VisibilityEvent::Exited(item.key.clone()));
                }
                return false;
            }
            item.seen = false;

            let focused = coverage(item.rect, viewport) >= threshold;
            if focused != item.in_focus {
                item.in_focus = focused;
                events.push(if focused {
                    VisibilityEvent::Entered(item.key.clone())
                } else {
                    VisibilityEvent::Exited(item.key.clone())
                });
            }
            true
        });

        events
    }
}

impl<K: Clone + Eq + Hash> Default for VisibilityObserver<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fraction of `rect`'s area lying inside `viewport`.
fn coverage(rect: Rect, viewport: Rect) -> f32 {
    let area = rect.area();
    if area <= 0.0 {
        return 0.0;
    }
    let overlap = rect.intersect(viewport);
    if overlap.is_positive() {
        overlap.area() / area
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn rect(top: f32, height: f32) -> Rect {
        Rect::from_min_max(pos2(0.0, top), pos2(100.0, top + height))
    }

    fn viewport() -> Rect {
        Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 100.0))
    }

    #[test]
    fn test_enter_requires_threshold_coverage() {
        let mut observer: VisibilityObserver<&str> = VisibilityObserver::new();

        // Only half visible: below the 60% threshold
        observer.update("a", rect(50.0, 100.0));
        assert!(observer.observe(viewport()).is_empty());

        // 70% visible: crosses the threshold
        observer.update("a", rect(30.0, 100.0));
        assert_eq!(
            observer.observe(viewport()),
            vec![VisibilityEvent::Entered("a")]
        );

        // Stays focused: no repeat event
        observer.update("a", rect(20.0, 100.0));
        assert!(observer.observe(viewport()).is_empty());
    }

    #[test]
    fn test_exit_on_scroll_away() {
        let mut observer: VisibilityObserver<&str> = VisibilityObserver::new();
        observer.update("a", rect(0.0, 80.0));
        let _ = observer.observe(viewport());

        observer.update("a", rect(90.0, 80.0));
        assert_eq!(
            observer.observe(viewport()),
            vec![VisibilityEvent::Exited("a")]
        );
    }

    #[test]
    fn test_same_tick_events_keep_update_order() {
        let mut observer: VisibilityObserver<&str> = VisibilityObserver::new();
        observer.update("a", rect(0.0, 40.0));
        observer.update("b", rect(40.0, 40.0));
        let events = observer.observe(viewport());
        // Both enter in the same tick; the consumer's last-writer-wins
        // rule means "b" ends up active
        assert_eq!(
            events,
            vec![VisibilityEvent::Entered("a"), VisibilityEvent::Entered("b")]
        );
    }

    #[test]
    fn test_unseen_item_is_unmounted() {
        let mut observer: VisibilityObserver<&str> = VisibilityObserver::new();
        observer.update("a", rect(0.0, 80.0));
        let _ = observer.observe(viewport());

        // "a" not updated this frame: dropped with an exit event
        observer.update("b", rect(200.0, 50.0));
        assert_eq!(
            observer.observe(viewport()),
            vec![VisibilityEvent::Exited("a")]
        );
    }
}
