// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! "About this site" page: how the portfolio itself was put together.

use crate::app::Route;
use crate::state::{AppShared, CursorVariant};
use crate::ui::{PageAction, ACCENT, TEXT_DIM, TEXT_FAINT};

const PRINCIPLES: [&str; 4] = [
    "One player audible at a time, no matter how many are on screen.",
    "Previews start themselves when you look at them, not before.",
    "The player script loads once, however many embeds ask for it.",
    "Every transition is cut like an edit: close, swap, open.",
];

pub fn show(ui: &mut egui::Ui, shared: &mut AppShared) -> PageAction {
    let mut action = PageAction::None;

    ui.vertical_centered(|ui| {
        ui.set_max_width(720.0_f32.min(ui.available_width()));
        ui.add_space(36.0);
        ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
            ui.label(
                egui::RichText::new("THIS SITE, ITSELF")
                    .size(34.0)
                    .strong()
                    .color(ACCENT),
            );
            ui.label(
                egui::RichText::new("AN EDITOR'S PORTFOLIO, BUILT LIKE AN EDIT")
                    .monospace()
                    .size(11.0)
                    .color(TEXT_FAINT),
            );
            ui.add_space(18.0);

            let body = ui.add(
                egui::Label::new(
                    egui::RichText::new(
                        "I treated the portfolio as a motion piece in its own \
                         right. The playback plumbing is the interesting part: a \
                         single coordinator hands out the right to make noise, a \
                         visibility observer decides which preview deserves it, \
                         and one shared script bootstrap feeds every embedded \
                         player on the page.",
                    )
                    .size(15.0)
                    .color(TEXT_DIM),
                )
                .sense(egui::Sense::hover()),
            );
            if body.hovered() {
                shared.cursor = CursorVariant::Text;
            }
            ui.add_space(22.0);

            ui.label(
                egui::RichText::new("GROUND RULES")
                    .monospace()
                    .size(11.0)
                    .color(TEXT_FAINT),
            );
            ui.add_space(6.0);
            for principle in PRINCIPLES {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("✓").color(ACCENT));
                    ui.label(egui::RichText::new(principle).size(13.0).color(TEXT_DIM));
                });
            }
            ui.add_space(30.0);

            let link = ui.add(
                egui::Label::new(
                    egui::RichText::new("SEE IT IN ACTION →")
                        .monospace()
                        .size(12.0)
                        .color(TEXT_DIM),
                )
                .sense(egui::Sense::click()),
            );
            if link.hovered() {
                shared.cursor = CursorVariant::Link;
            }
            if link.clicked() {
                action = PageAction::Navigate(Route::Portfolio);
            }
        });
    });

    action
}
