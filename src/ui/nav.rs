// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Top navigation bar.

use crate::app::Route;
use crate::state::{AppShared, CursorVariant};
use crate::ui::{PageAction, ACCENT, BACKGROUND, TEXT_DIM};

/// Render the nav bar. Returns the navigation or reel request, if any.
pub fn show(ctx: &egui::Context, current: &Route, shared: &mut AppShared) -> PageAction {
    let mut action = PageAction::None;
    egui::TopBottomPanel::top("nav_bar")
        .frame(
            egui::Frame::none()
                .fill(BACKGROUND)
                .inner_margin(egui::Margin::symmetric(24.0, 14.0)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let brand = ui.add(
                    egui::Label::new(
                        egui::RichText::new("VIKAS")
                            .strong()
                            .size(18.0)
                            .color(ACCENT),
                    )
                    .sense(egui::Sense::click()),
                );
                if brand.hovered() {
                    shared.cursor = CursorVariant::Link;
                }
                if brand.clicked() {
                    action = PageAction::Navigate(Route::Home);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let reel = ui.add(
                        egui::Button::new(
                            egui::RichText::new("● REEL").size(13.0).color(ACCENT),
                        )
                        .fill(egui::Color32::from_gray(24))
                        .rounding(egui::Rounding::same(14.0)),
                    );
                    if reel.hovered() {
                        shared.cursor = CursorVariant::Link;
                    }
                    if reel.clicked() {
                        action = PageAction::PlayReel;
                    }
                    ui.add_space(16.0);

                    // Right-to-left layout, so list the links in reverse.
                    for (label, route) in [
                        ("SITE", Route::AboutSite),
                        ("ABOUT", Route::About),
                        ("PROCESS", Route::Breakdown),
                        ("WORK", Route::Portfolio),
                    ] {
                        if nav_link(ui, label, *current == route, shared) {
                            action = PageAction::Navigate(route);
                        }
                        ui.add_space(10.0);
                    }
                });
            });
        });
    action
}

fn nav_link(ui: &mut egui::Ui, label: &str, active: bool, shared: &mut AppShared) -> bool {
    let color = if active { ACCENT } else { TEXT_DIM };
    let response = ui.add(
        egui::Label::new(egui::RichText::new(label).size(12.0).color(color))
            .sense(egui::Sense::click()),
    );
    if response.hovered() {
        shared.cursor = CursorVariant::Link;
    }
    response.clicked()
}
