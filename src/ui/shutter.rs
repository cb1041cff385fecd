// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Route-transition shutter.
//!
//! Navigation between pages plays a two-phase wipe: panels close over the
//! outgoing page, the route swaps while the screen is fully covered, then
//! the panels open to reveal the new page. Navigation requests arriving
//! while a transition is in flight are ignored; the first requested
//! target wins.

use crate::app::Route;
use crate::util::anim::{Anim, EASE_IN_OUT};

/// Duration of each half of the wipe.
pub const SHUTTER_SECS: f64 = 0.45;

enum Phase {
    Idle,
    /// Panels sliding shut over the outgoing page.
    Closing { target: Route, anim: Anim },
    /// Panels sliding open over the incoming page.
    Opening { anim: Anim },
}

pub struct Shutter {
    phase: Phase,
}

impl Shutter {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Whether a wipe is currently playing.
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Start a wipe toward `target`. No-op while a wipe is in flight.
    pub fn begin(&mut self, target: Route, now: f64) {
        if let Phase::Idle = self.phase {
            self.phase = Phase::Closing {
                target,
                anim: Anim::new(now, SHUTTER_SECS, 0.0, 1.0, EASE_IN_OUT),
            };
        }
    }

    /// Advance the wipe. Returns the target route exactly once, at the
    /// moment the screen is fully covered and the swap should happen.
    pub fn take_swap(&mut self, now: f64) -> Option<Route> {
        match &self.phase {
            Phase::Closing { target, anim } if anim.finished(now) => {
                let target = target.clone();
                self.phase = Phase::Opening {
                    anim: Anim::new(now, SHUTTER_SECS, 1.0, 0.0, EASE_IN_OUT),
                };
                Some(target)
            }
            Phase::Opening { anim } if anim.finished(now) => {
                self.phase = Phase::Idle;
                None
            }
            _ => None,
        }
    }

    /// Fraction of the screen covered right now, 0..=1.
    fn coverage(&self, now: f64) -> f32 {
        match &self.phase {
            Phase::Idle => 0.0,
            Phase::Closing { anim, .. } | Phase::Opening { anim } => anim.value(now),
        }
    }

    /// Paint the shutter panels over everything else.
    pub fn paint(&self, ctx: &egui::Context, now: f64) {
        let cover = self.coverage(now);
        if cover <= 0.0 {
            return;
        }
        let screen = ctx.screen_rect();
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("route_shutter"),
        ));
        let half = screen.height() * 0.5 * cover;
        let top = egui::Rect::from_min_max(
            screen.min,
            egui::pos2(screen.max.x, screen.min.y + half),
        );
        let bottom = egui::Rect::from_min_max(
            egui::pos2(screen.min.x, screen.max.y - half),
            screen.max,
        );
        let fill = egui::Color32::from_gray(3);
        painter.rect_filled(top, egui::Rounding::ZERO, fill);
        painter.rect_filled(bottom, egui::Rounding::ZERO, fill);
        // Seam highlight where the panels meet.
        painter.line_segment(
            [
                egui::pos2(screen.min.x, top.max.y),
                egui::pos2(screen.max.x, top.max.y),
            ],
            egui::Stroke::new(1.0, egui::Color32::from_white_alpha((60.0 * cover) as u8)),
        );
        painter.line_segment(
            [
                egui::pos2(screen.min.x, bottom.min.y),
                egui::pos2(screen.max.x, bottom.min.y),
            ],
            egui::Stroke::new(1.0, egui::Color32::from_white_alpha((60.0 * cover) as u8)),
        );
    }
}

impl Default for Shutter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_fires_once_when_covered() {
        let mut shutter = Shutter::new();
        shutter.begin(Route::Portfolio, 0.0);
        assert!(shutter.is_active());
        assert_eq!(shutter.take_swap(0.2), None);
        assert_eq!(shutter.take_swap(0.5), Some(Route::Portfolio));
        // Opening phase: never yields the target again.
        assert_eq!(shutter.take_swap(0.6), None);
        assert_eq!(shutter.take_swap(1.0), None);
        assert!(!shutter.is_active());
    }

    #[test]
    fn test_requests_during_flight_are_dropped() {
        let mut shutter = Shutter::new();
        shutter.begin(Route::Portfolio, 0.0);
        shutter.begin(Route::About, 0.1);
        assert_eq!(shutter.take_swap(0.5), Some(Route::Portfolio));
    }

    #[test]
    fn test_coverage_peaks_at_swap() {
        let mut shutter = Shutter::new();
        shutter.begin(Route::Home, 0.0);
        assert!(shutter.coverage(0.0) < 0.01);
        assert!(shutter.coverage(0.45) > 0.99);
        shutter.take_swap(0.45);
        assert!(shutter.coverage(0.9) < 0.01);
    }

    #[test]
    fn test_idle_shutter_is_invisible() {
        let shutter = Shutter::new();
        assert!(!shutter.is_active());
        assert_eq!(shutter.coverage(5.0), 0.0);
    }
}
