// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! About page: bio, toolset, and social links.

use crate::models::data::{SITE_INFO, SOCIAL_LINKS, TECH_CATEGORIES};
use crate::state::{AppShared, CursorVariant};
use crate::ui::{PageAction, ACCENT, SURFACE, TEXT_DIM, TEXT_FAINT};

pub fn show(ui: &mut egui::Ui, shared: &mut AppShared) -> PageAction {
    egui::ScrollArea::vertical()
        .id_source("about_page")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(760.0_f32.min(ui.available_width()));
                ui.add_space(36.0);
                ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
                    ui.label(
                        egui::RichText::new("ABOUT")
                            .size(34.0)
                            .strong()
                            .color(ACCENT),
                    );
                    ui.label(
                        egui::RichText::new(SITE_INFO.role.to_uppercase())
                            .monospace()
                            .size(11.0)
                            .color(TEXT_FAINT),
                    );
                    ui.add_space(18.0);

                    let bio = ui.add(
                        egui::Label::new(
                            egui::RichText::new(
                                "I cut motion work the way a sound engineer mixes a \
                                 record: everything lands on a beat, every frame earns \
                                 its place. Most of my time goes into editorial motion \
                                 graphics, rhythm-driven edits, and title design — the \
                                 kind of work where pacing is the product.",
                            )
                            .size(15.0)
                            .color(TEXT_DIM),
                        )
                        .sense(egui::Sense::hover()),
                    );
                    if bio.hovered() {
                        shared.cursor = CursorVariant::Text;
                    }
                    ui.add_space(26.0);

                    ui.label(
                        egui::RichText::new("TOOLSET")
                            .monospace()
                            .size(11.0)
                            .color(TEXT_FAINT),
                    );
                    ui.add_space(6.0);
                    for (group, tools) in TECH_CATEGORIES {
                        ui.label(egui::RichText::new(group).size(13.0).color(ACCENT));
                        ui.horizontal_wrapped(|ui| {
                            for tool in tools {
                                egui::Frame::none()
                                    .fill(SURFACE)
                                    .rounding(egui::Rounding::same(10.0))
                                    .inner_margin(egui::Margin::symmetric(10.0, 4.0))
                                    .show(ui, |ui| {
                                        ui.label(
                                            egui::RichText::new(*tool)
                                                .monospace()
                                                .size(11.0)
                                                .color(TEXT_DIM),
                                        );
                                    });
                            }
                        });
                        ui.add_space(8.0);
                    }
                    ui.add_space(20.0);

                    ui.label(
                        egui::RichText::new("ELSEWHERE")
                            .monospace()
                            .size(11.0)
                            .color(TEXT_FAINT),
                    );
                    ui.add_space(6.0);
                    for (label, url) in SOCIAL_LINKS {
                        let link = ui.hyperlink_to(
                            egui::RichText::new(format!("{label} ↗")).size(13.0),
                            url,
                        );
                        if link.hovered() {
                            shared.cursor = CursorVariant::Link;
                        }
                    }
                    ui.add_space(40.0);
                });
            });
        });
    PageAction::None
}
