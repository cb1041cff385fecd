// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Custom cursor overlay.
//!
//! Hides the OS cursor and draws a ring that trails the pointer with a
//! short lerp. The ring grows over clickable surfaces and shrinks over
//! copy; widgets set the variant on [`crate::state::AppShared`] each
//! frame and the default is restored before pages run.

use crate::state::CursorVariant;
use crate::ui::ACCENT;

const FOLLOW: f32 = 0.35;

fn radius(variant: CursorVariant) -> f32 {
    match variant {
        CursorVariant::Default => 14.0,
        CursorVariant::Link => 34.0,
        CursorVariant::Text => 5.0,
    }
}

pub struct CursorOverlay {
    pos: Option<egui::Pos2>,
    size: f32,
}

impl CursorOverlay {
    pub fn new() -> Self {
        Self {
            pos: None,
            size: radius(CursorVariant::Default),
        }
    }

    /// Draw the cursor for this frame. Call after all pages and overlays
    /// so the ring sits on top.
    pub fn show(&mut self, ctx: &egui::Context, variant: CursorVariant) {
        let Some(target) = ctx.pointer_latest_pos() else {
            // Pointer left the window; forget the trail so re-entry does
            // not sweep the ring across the screen.
            self.pos = None;
            return;
        };
        ctx.set_cursor_icon(egui::CursorIcon::None);

        let pos = match self.pos {
            Some(prev) => prev + (target - prev) * FOLLOW,
            None => target,
        };
        self.pos = Some(pos);
        let goal = radius(variant);
        self.size += (goal - self.size) * FOLLOW;

        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("cursor_overlay"),
        ));
        match variant {
            CursorVariant::Link => {
                painter.circle_filled(pos, self.size, egui::Color32::from_white_alpha(28));
                painter.circle_stroke(pos, self.size, egui::Stroke::new(1.5, ACCENT));
            }
            _ => {
                painter.circle_filled(pos, 2.0, ACCENT);
                painter.circle_stroke(pos, self.size, egui::Stroke::new(1.0, ACCENT));
            }
        }

        // Keep animating until the ring settles on the pointer.
        if (target - pos).length() > 0.5 || (goal - self.size).abs() > 0.5 {
            ctx.request_repaint();
        }
    }
}

impl Default for CursorOverlay {
    fn default() -> Self {
        Self::new()
    }
}
