// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Fullscreen showreel overlay.
//!
//! Opened by the nav reel button. Mounts a dedicated embedded player for
//! the reel, takes the active-playback token while open (so any feed
//! preview pauses), and destroys the player when dismissed via the close
//! button or Escape.

use crate::models::data::SITE_INFO;
use crate::models::project::MediaRef;
use crate::playback::engine::PlaybackEngine;
use crate::playback::PlayerId;
use crate::state::{AppShared, CursorVariant};
use crate::ui::{faded, player, ACCENT, TEXT_DIM};

pub struct ShowreelOverlay {
    player: Option<PlayerId>,
}

impl ShowreelOverlay {
    pub fn new() -> Self {
        Self { player: None }
    }

    pub fn show(&mut self, ctx: &egui::Context, engine: &mut PlaybackEngine, shared: &mut AppShared) {
        if !shared.is_reel_playing() {
            if let Some(id) = self.player.take() {
                engine.destroy_player(id);
            }
            return;
        }

        let id = match self.player {
            Some(id) => id,
            None => {
                let id = engine.create_player(&MediaRef::embedded(SITE_INFO.showreel_id));
                engine.request_active(id);
                self.player = Some(id);
                id
            }
        };

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            shared.stop_reel();
        }

        let screen = ctx.screen_rect();
        egui::Area::new(egui::Id::new("showreel_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                // Swallow clicks aimed at the page underneath.
                ui.allocate_rect(screen, egui::Sense::click());
                ui.painter()
                    .rect_filled(screen, egui::Rounding::ZERO, faded(egui::Color32::BLACK, 0.96));

                // Largest 16:9 rect fitting in 85% of the screen.
                let avail = screen.size() * 0.85;
                let size = if avail.x / avail.y > 16.0 / 9.0 {
                    egui::vec2(avail.y * 16.0 / 9.0, avail.y)
                } else {
                    egui::vec2(avail.x, avail.x * 9.0 / 16.0)
                };
                let rect = egui::Rect::from_center_size(screen.center(), size);
                player::show(ui, engine, id, rect, None, true, shared);

                ui.painter().text(
                    egui::pos2(rect.min.x, rect.min.y - 12.0),
                    egui::Align2::LEFT_BOTTOM,
                    "SHOWREEL 2025",
                    egui::FontId::monospace(11.0),
                    TEXT_DIM,
                );

                let close_rect = egui::Rect::from_center_size(
                    egui::pos2(screen.max.x - 40.0, screen.min.y + 40.0),
                    egui::vec2(36.0, 36.0),
                );
                let close = ui.interact(
                    close_rect,
                    egui::Id::new("showreel_close"),
                    egui::Sense::click(),
                );
                if close.hovered() {
                    shared.cursor = CursorVariant::Link;
                }
                ui.painter().text(
                    close_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "✕",
                    egui::FontId::proportional(22.0),
                    if close.hovered() { ACCENT } else { TEXT_DIM },
                );
                if close.clicked() {
                    shared.stop_reel();
                }
            });
    }
}

impl Default for ShowreelOverlay {
    fn default() -> Self {
        Self::new()
    }
}
