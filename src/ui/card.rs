// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio feed card.
//!
//! A 16:9 tile showing the project's preview player behind a caption
//! overlay. The caller records the returned rect with the visibility
//! observer; the observer, not the card, decides when the preview starts.

use crate::models::project::ProjectRecord;
use crate::playback::engine::PlaybackEngine;
use crate::playback::PlayerId;
use crate::state::{AppShared, CursorVariant};
use crate::ui::{faded, player, ACCENT, SURFACE, TEXT_DIM, TEXT_FAINT};

const MAX_WIDTH: f32 = 960.0;

pub struct CardResponse {
    pub clicked: bool,
    pub rect: egui::Rect,
}

pub fn show(
    ui: &mut egui::Ui,
    project: &ProjectRecord,
    still: Option<&egui::TextureHandle>,
    engine: &mut PlaybackEngine,
    preview: PlayerId,
    shared: &mut AppShared,
) -> CardResponse {
    let width = ui.available_width().min(MAX_WIDTH);
    let height = width * 9.0 / 16.0;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::click());
    if !ui.is_rect_visible(rect) {
        return CardResponse {
            clicked: false,
            rect,
        };
    }

    let hovered = response.hovered();
    if hovered {
        shared.cursor = CursorVariant::Link;
    }

    ui.painter()
        .rect_filled(rect, egui::Rounding::same(4.0), SURFACE);
    player::show(ui, engine, preview, rect, still, false, shared);

    // Caption gradient stand-in: darken the lower third.
    let caption = egui::Rect::from_min_max(
        egui::pos2(rect.min.x, rect.max.y - rect.height() * 0.34),
        rect.max,
    );
    let painter = ui.painter().with_clip_rect(rect);
    painter.rect_filled(caption, egui::Rounding::ZERO, faded(egui::Color32::BLACK, 0.55));

    painter.text(
        egui::pos2(rect.min.x + 20.0, rect.max.y - 58.0),
        egui::Align2::LEFT_BOTTOM,
        project.category.to_uppercase(),
        egui::FontId::monospace(10.0),
        TEXT_FAINT,
    );
    painter.text(
        egui::pos2(rect.min.x + 20.0, rect.max.y - 22.0),
        egui::Align2::LEFT_BOTTOM,
        &project.title,
        egui::FontId::proportional(30.0),
        ACCENT,
    );
    painter.text(
        egui::pos2(rect.max.x - 20.0, rect.max.y - 22.0),
        egui::Align2::RIGHT_BOTTOM,
        project.details.year.to_string(),
        egui::FontId::monospace(14.0),
        TEXT_DIM,
    );

    if hovered {
        painter.rect_stroke(
            rect,
            egui::Rounding::same(4.0),
            egui::Stroke::new(1.0, faded(ACCENT, 0.6)),
        );
    }

    CardResponse {
        clicked: response.clicked(),
        rect,
    }
}
