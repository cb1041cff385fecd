// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! VFX process page.
//!
//! A four-stage compositing walkthrough rendered as one visual that
//! accumulates treatment passes as the viewer steps through: plate, CG
//! integration, FX pass, final grade.

use crate::app::Route;
use crate::state::{AppShared, CursorVariant};
use crate::ui::{faded, PageAction, ACCENT, SURFACE, TEXT_DIM, TEXT_FAINT};
use crate::util::anim::pulse;

const STAGES: [(&str, &str); 4] = [
    (
        "Plate",
        "The original footage, straight off the timeline. No treatment, \
         no grade — the honest starting point every shot is judged from.",
    ),
    (
        "CG Integration",
        "Synthetic elements tracked and composited into the plate. \
         Matching perspective and motion is what sells the shot.",
    ),
    (
        "FX Pass",
        "Atmosphere on top: grain, glow, and light wrap binding the \
         layers into a single photographic image.",
    ),
    (
        "Final Grade",
        "The finishing color pass. Contrast and palette pull the eye \
         where the edit needs it.",
    ),
];

pub struct BreakdownState {
    pub active_stage: usize,
}

impl BreakdownState {
    pub fn new() -> Self {
        Self { active_stage: 0 }
    }
}

impl Default for BreakdownState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn show(
    ui: &mut egui::Ui,
    state: &mut BreakdownState,
    shared: &mut AppShared,
    now: f64,
) -> PageAction {
    let mut action = PageAction::None;

    ui.vertical_centered(|ui| {
        ui.set_max_width(920.0_f32.min(ui.available_width()));
        ui.add_space(28.0);
        ui.label(
            egui::RichText::new("PROCESS BREAKDOWN")
                .size(32.0)
                .strong()
                .color(ACCENT),
        );
        ui.label(
            egui::RichText::new("HOW A SHOT GETS BUILT, PASS BY PASS")
                .monospace()
                .size(11.0)
                .color(TEXT_FAINT),
        );
        ui.add_space(22.0);

        let width = ui.available_width();
        let rect = ui
            .allocate_exact_size(egui::vec2(width, width * 9.0 / 16.0), egui::Sense::hover())
            .0;
        stage_visual(ui.painter(), rect, state.active_stage, now);

        ui.add_space(14.0);
        ui.horizontal(|ui| {
            for (i, (title, _)) in STAGES.iter().enumerate() {
                let selected = i == state.active_stage;
                let label = ui.selectable_label(
                    selected,
                    egui::RichText::new(format!("{:02} {}", i + 1, title))
                        .monospace()
                        .size(12.0),
                );
                if label.hovered() {
                    shared.cursor = CursorVariant::Link;
                }
                if label.clicked() {
                    state.active_stage = i;
                }
            }
        });

        ui.add_space(10.0);
        ui.label(
            egui::RichText::new(STAGES[state.active_stage].1)
                .size(14.0)
                .color(TEXT_DIM),
        );

        ui.add_space(36.0);
        let back = ui.add(
            egui::Label::new(
                egui::RichText::new("SEE THE FINISHED WORK →")
                    .monospace()
                    .size(12.0)
                    .color(TEXT_DIM),
            )
            .sense(egui::Sense::click()),
        );
        if back.hovered() {
            shared.cursor = CursorVariant::Link;
        }
        if back.clicked() {
            action = PageAction::Navigate(Route::Portfolio);
        }
    });

    action
}

/// Paint the accumulated passes up to and including `stage`.
fn stage_visual(painter: &egui::Painter, rect: egui::Rect, stage: usize, now: f64) {
    let painter = painter.with_clip_rect(rect);

    // Stage 0 — the plate: flat footage stand-in with a horizon line.
    painter.rect_filled(rect, egui::Rounding::same(4.0), SURFACE);
    let horizon = rect.min.y + rect.height() * 0.62;
    painter.rect_filled(
        egui::Rect::from_min_max(egui::pos2(rect.min.x, horizon), rect.max),
        egui::Rounding::ZERO,
        egui::Color32::from_gray(24),
    );
    painter.line_segment(
        [egui::pos2(rect.min.x, horizon), egui::pos2(rect.max.x, horizon)],
        egui::Stroke::new(1.0, egui::Color32::from_gray(40)),
    );

    // Stage 1 — CG element: a tracked orb hovering over the horizon.
    if stage >= 1 {
        let center = egui::pos2(
            rect.min.x + rect.width() * 0.68,
            horizon - rect.height() * 0.18,
        );
        let radius = rect.height() * 0.09;
        painter.circle_filled(center, radius, egui::Color32::from_rgb(70, 160, 190));
        painter.circle_stroke(
            center,
            radius,
            egui::Stroke::new(1.5, egui::Color32::from_rgb(120, 210, 240)),
        );
    }

    // Stage 2 — FX pass: glow and a breathing light wrap.
    if stage >= 2 {
        let center = egui::pos2(
            rect.min.x + rect.width() * 0.68,
            horizon - rect.height() * 0.18,
        );
        let breath = 1.0 + 0.12 * pulse(now, 2.4);
        painter.circle_filled(
            center,
            rect.height() * 0.16 * breath,
            faded(egui::Color32::from_rgb(120, 210, 240), 0.12),
        );
        painter.rect_filled(
            rect,
            egui::Rounding::same(4.0),
            faded(egui::Color32::from_rgb(90, 140, 180), 0.05),
        );
    }

    // Stage 3 — grade: warm lift, crushed edges.
    if stage >= 3 {
        painter.rect_filled(
            rect,
            egui::Rounding::same(4.0),
            faded(egui::Color32::from_rgb(200, 140, 60), 0.10),
        );
        painter.rect_stroke(
            rect.shrink(2.0),
            egui::Rounding::same(4.0),
            egui::Stroke::new(6.0, faded(egui::Color32::BLACK, 0.35)),
        );
    }

    painter.text(
        rect.min + egui::vec2(14.0, 14.0),
        egui::Align2::LEFT_TOP,
        format!("PASS {:02} / {:02}", stage + 1, STAGES.len()),
        egui::FontId::monospace(10.0),
        TEXT_FAINT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_stages_with_copy() {
        assert_eq!(STAGES.len(), 4);
        for (title, description) in STAGES {
            assert!(!title.is_empty());
            assert!(!description.is_empty());
        }
    }

    #[test]
    fn test_state_starts_on_plate() {
        assert_eq!(BreakdownState::new().active_stage, 0);
    }
}
