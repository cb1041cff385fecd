// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Player surface widget.
//!
//! Paints a mounted player into a rect: poster still while loading, a
//! spinner until the backend reports ready, and an optional hover control
//! bar (play/pause, mute, volume, seek strip, fullscreen). All control
//! input goes through the engine so the one-active-player rule holds no
//! matter which surface the click lands on.

use crate::playback::engine::PlaybackEngine;
use crate::playback::PlayerId;
use crate::state::{AppShared, CursorVariant};
use crate::ui::{faded, ACCENT, TEXT_DIM};

const BAR_HEIGHT: f32 = 40.0;

/// Render the player into `rect`. `still` is drawn behind everything as
/// a poster frame when available.
pub fn show(
    ui: &mut egui::Ui,
    engine: &mut PlaybackEngine,
    id: PlayerId,
    rect: egui::Rect,
    still: Option<&egui::TextureHandle>,
    show_controls: bool,
    shared: &mut AppShared,
) {
    let painter = ui.painter().with_clip_rect(rect);
    painter.rect_filled(rect, egui::Rounding::ZERO, egui::Color32::BLACK);

    let Some(player) = engine.player(id) else {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "SIGNAL LOST",
            egui::FontId::monospace(12.0),
            TEXT_DIM,
        );
        return;
    };

    if let Some(texture) = still {
        let tint = if player.is_playing() {
            egui::Color32::from_gray(70)
        } else {
            egui::Color32::from_gray(130)
        };
        painter.image(
            texture.id(),
            rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            tint,
        );
    }

    let ready = player.is_ready();
    let playing = player.is_playing();
    let muted = player.is_muted();
    let volume = player.volume();
    let progress = player.progress();

    if !ready {
        ui.put(
            egui::Rect::from_center_size(rect.center(), egui::vec2(28.0, 28.0)),
            egui::Spinner::new().size(28.0),
        );
        painter.text(
            rect.center() + egui::vec2(0.0, 30.0),
            egui::Align2::CENTER_CENTER,
            "LOADING FEED",
            egui::FontId::monospace(10.0),
            TEXT_DIM,
        );
        return;
    }

    // Thin progress strip along the bottom edge, drawn even without the
    // control bar so previews read as alive.
    if let Some(fraction) = progress.fraction() {
        let strip = egui::Rect::from_min_max(
            egui::pos2(rect.min.x, rect.max.y - 3.0),
            egui::pos2(rect.min.x + rect.width() * fraction.clamp(0.0, 1.0), rect.max.y),
        );
        painter.rect_filled(strip, egui::Rounding::ZERO, ACCENT);
    }

    if !show_controls || !ui.rect_contains_pointer(rect) {
        return;
    }

    let bar = egui::Rect::from_min_max(
        egui::pos2(rect.min.x, rect.max.y - BAR_HEIGHT),
        rect.max,
    );
    painter.rect_filled(bar, egui::Rounding::ZERO, faded(egui::Color32::BLACK, 0.75));

    // Seek strip just above the bar.
    let seek_rect = egui::Rect::from_min_max(
        egui::pos2(rect.min.x, bar.min.y - 8.0),
        egui::pos2(rect.max.x, bar.min.y),
    );
    let seek = ui.interact(
        seek_rect,
        ui.id().with((id, "seek")),
        egui::Sense::click_and_drag(),
    );
    if seek.hovered() {
        shared.cursor = CursorVariant::Link;
    }
    if seek.clicked() || seek.dragged() {
        if let (Some(pos), true) = (seek.interact_pointer_pos(), progress.duration > 0.0) {
            let fraction = ((pos.x - rect.min.x) / rect.width()).clamp(0.0, 1.0);
            if let Some(player) = engine.player_mut(id) {
                player.seek(fraction as f64 * progress.duration);
            }
        }
    }

    ui.allocate_ui_at_rect(bar.shrink2(egui::vec2(12.0, 4.0)), |ui| {
        ui.horizontal_centered(|ui| {
            let toggle = ui.add(
                egui::Button::new(
                    egui::RichText::new(if playing { "⏸" } else { "▶" })
                        .size(16.0)
                        .color(ACCENT),
                )
                .frame(false),
            );
            if toggle.hovered() {
                shared.cursor = CursorVariant::Link;
            }
            if toggle.clicked() {
                if playing {
                    if let Some(player) = engine.player_mut(id) {
                        player.pause();
                    }
                    engine.release(id);
                } else {
                    // Route through the coordinator so everything else
                    // pauses first.
                    engine.request_active(id);
                }
            }

            let mute = ui.add(
                egui::Button::new(
                    egui::RichText::new(if muted { "🔇" } else { "🔊" })
                        .size(14.0)
                        .color(ACCENT),
                )
                .frame(false),
            );
            if mute.hovered() {
                shared.cursor = CursorVariant::Link;
            }
            if mute.clicked() {
                if let Some(player) = engine.player_mut(id) {
                    player.toggle_mute();
                }
            }

            let mut vol = volume;
            let slider = ui.add(
                egui::Slider::new(&mut vol, 0.0..=100.0)
                    .show_value(false)
                    .trailing_fill(true),
            );
            if slider.hovered() {
                shared.cursor = CursorVariant::Link;
            }
            if slider.changed() {
                if let Some(player) = engine.player_mut(id) {
                    player.set_volume(vol);
                    // Dragging the volume up implies the user wants
                    // sound; zero means silence.
                    if vol > 0.0 && player.is_muted() {
                        player.toggle_mute();
                    } else if vol == 0.0 && !player.is_muted() {
                        player.toggle_mute();
                    }
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let full = ui.add(
                    egui::Button::new(egui::RichText::new("⛶").size(16.0).color(ACCENT))
                        .frame(false),
                );
                if full.hovered() {
                    shared.cursor = CursorVariant::Link;
                }
                if full.clicked() {
                    let is_full = ui
                        .ctx()
                        .input(|i| i.viewport().fullscreen.unwrap_or(false));
                    ui.ctx()
                        .send_viewport_cmd(egui::ViewportCommand::Fullscreen(!is_full));
                }
                if progress.duration > 0.0 {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} / {}",
                            timestamp(progress.position),
                            timestamp(progress.duration)
                        ))
                        .monospace()
                        .size(10.0)
                        .color(TEXT_DIM),
                    );
                }
            });
        });
    });
}

fn timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_format() {
        assert_eq!(timestamp(0.0), "0:00");
        assert_eq!(timestamp(65.4), "1:05");
        assert_eq!(timestamp(600.0), "10:00");
        assert_eq!(timestamp(-3.0), "0:00");
    }
}
