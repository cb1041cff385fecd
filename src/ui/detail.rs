// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Project detail page.
//!
//! Hero player with full controls, the editorial sections, the
//! per-project breakdown steps (each step remounts the player on its own
//! media), and a wrap-around link to the next catalog entry. A slug with
//! no catalog record renders the not-found view instead.

use crate::app::{Route, StillCache};
use crate::models::catalog::find_project;
use crate::models::project::{MediaRef, ProjectRecord};
use crate::playback::engine::PlaybackEngine;
use crate::playback::PlayerId;
use crate::state::{AppShared, CursorVariant};
use crate::ui::{faded, player, PageAction, ACCENT, SURFACE, TEXT_DIM, TEXT_FAINT};

const CONTENT_WIDTH: f32 = 1040.0;

pub struct DetailState {
    bound: Option<String>,
    /// Hero player keyed by its media src; a gallery selection remounts
    /// it on the chosen clip.
    hero: Option<(String, PlayerId)>,
    hero_override: Option<MediaRef>,
    active_step: usize,
    /// Player for the selected breakdown step, keyed by its media src so
    /// step switches remount it.
    step_player: Option<(String, PlayerId)>,
}

impl DetailState {
    pub fn new() -> Self {
        Self {
            bound: None,
            hero: None,
            hero_override: None,
            active_step: 0,
            step_player: None,
        }
    }

    /// Destroy everything this page mounted.
    pub fn unmount(&mut self, engine: &mut PlaybackEngine) {
        if let Some((_, id)) = self.hero.take() {
            engine.destroy_player(id);
        }
        if let Some((_, id)) = self.step_player.take() {
            engine.destroy_player(id);
        }
        self.bound = None;
        self.hero_override = None;
        self.active_step = 0;
    }
}

impl Default for DetailState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn show(
    ui: &mut egui::Ui,
    state: &mut DetailState,
    slug: &str,
    catalog: &[ProjectRecord],
    engine: &mut PlaybackEngine,
    stills: &mut StillCache,
    shared: &mut AppShared,
) -> PageAction {
    // Rebind when the slug changes (including project-to-project jumps).
    if state.bound.as_deref() != Some(slug) {
        state.unmount(engine);
        state.bound = Some(slug.to_string());
    }

    let Some((index, project)) = find_project(catalog, slug) else {
        return not_found(ui, slug, shared);
    };

    // Gallery selections override the project hero; a source change
    // remounts the player.
    let hero_media = state
        .hero_override
        .clone()
        .unwrap_or_else(|| project.hero.clone());
    let hero = match &state.hero {
        Some((src, id)) if src == &hero_media.src => *id,
        _ => {
            if let Some((_, old)) = state.hero.take() {
                engine.destroy_player(old);
            }
            // Hero takes the stage as soon as it mounts.
            let id = engine.create_player(&hero_media);
            engine.request_active(id);
            state.hero = Some((hero_media.src.clone(), id));
            id
        }
    };

    let next = &catalog[(index + 1) % catalog.len()];
    let mut action = PageAction::None;

    egui::ScrollArea::vertical()
        .id_source(("project_detail", slug))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(CONTENT_WIDTH.min(ui.available_width()));
                ui.add_space(16.0);

                let width = ui.available_width();
                let hero_rect = ui
                    .allocate_exact_size(
                        egui::vec2(width, width * 9.0 / 16.0),
                        egui::Sense::hover(),
                    )
                    .0;
                player::show(
                    ui,
                    engine,
                    hero,
                    hero_rect,
                    stills.get(&project.still_image),
                    true,
                    shared,
                );

                ui.add_space(26.0);
                ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
                    header(ui, project);
                    sections(ui, project, shared);
                    gallery(ui, state, project, shared);
                    breakdown(ui, state, project, engine, stills, shared);
                });

                ui.add_space(48.0);
                if next_project_link(ui, next, shared) {
                    action = PageAction::Navigate(Route::Project(next.id.clone()));
                }
                ui.add_space(18.0);
                if text_link(ui, "← RETURN TO PORTFOLIO INDEX", shared) {
                    action = PageAction::Navigate(Route::Portfolio);
                }
                ui.add_space(40.0);
            });
        });

    action
}

fn header(ui: &mut egui::Ui, project: &ProjectRecord) {
    ui.label(
        egui::RichText::new(project.category.to_uppercase())
            .monospace()
            .size(11.0)
            .color(TEXT_FAINT),
    );
    ui.label(
        egui::RichText::new(&project.title)
            .size(40.0)
            .strong()
            .color(ACCENT),
    );
    ui.label(
        egui::RichText::new(format!("{} — {}", project.details.role, project.details.year))
            .size(13.0)
            .color(TEXT_DIM),
    );
    ui.add_space(20.0);
}

fn sections(ui: &mut egui::Ui, project: &ProjectRecord, shared: &mut AppShared) {
    section_title(ui, "WHAT SOFTWARES I USED");
    ui.horizontal_wrapped(|ui| {
        for tool in &project.details.tools {
            egui::Frame::none()
                .fill(SURFACE)
                .rounding(egui::Rounding::same(12.0))
                .inner_margin(egui::Margin::symmetric(12.0, 6.0))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(format!("● {tool}"))
                            .monospace()
                            .size(12.0)
                            .color(ACCENT),
                    );
                });
        }
    });
    ui.add_space(22.0);

    if let Some(notes) = project.edit_notes() {
        section_title(ui, "HOW I EDITED");
        body_text(ui, notes, shared);
        ui.add_space(22.0);
    }

    section_title(ui, "VIDEO CONTENT");
    body_text(ui, &project.description, shared);
    ui.add_space(22.0);

    if !project.details.techniques.is_empty() || project.details.analysis.is_some() {
        section_title(ui, "TECHNIQUE NOTES");
        ui.horizontal_wrapped(|ui| {
            for technique in &project.details.techniques {
                ui.label(
                    egui::RichText::new(format!("[{technique}]"))
                        .monospace()
                        .size(11.0)
                        .color(TEXT_DIM),
                );
            }
        });
        if let Some(analysis) = &project.details.analysis {
            ui.add_space(8.0);
            body_text(ui, analysis, shared);
        }
        ui.add_space(22.0);
    }

    if let Some(url) = &project.details.live_url {
        let link = ui.hyperlink_to(
            egui::RichText::new("VIEW LIVE ↗").monospace().size(12.0),
            url,
        );
        if link.hovered() {
            shared.cursor = CursorVariant::Link;
        }
        ui.add_space(22.0);
    }
}

fn gallery(
    ui: &mut egui::Ui,
    state: &mut DetailState,
    project: &ProjectRecord,
    shared: &mut AppShared,
) {
    if project.gallery.is_empty() {
        return;
    }
    section_title(ui, "GALLERY");
    ui.horizontal_wrapped(|ui| {
        for (i, media) in project.gallery.iter().enumerate() {
            let selected = state
                .hero_override
                .as_ref()
                .map(|m| m.src == media.src)
                .unwrap_or(false);
            let chip = ui.selectable_label(
                selected,
                egui::RichText::new(format!("CLIP {:02}", i + 1))
                    .monospace()
                    .size(12.0),
            );
            if chip.hovered() {
                shared.cursor = CursorVariant::Link;
            }
            if chip.clicked() {
                state.hero_override = if selected { None } else { Some(media.clone()) };
            }
        }
    });
    ui.label(
        egui::RichText::new("Select a clip to load it in the player above.")
            .size(11.0)
            .color(TEXT_FAINT),
    );
    ui.add_space(22.0);
}

fn breakdown(
    ui: &mut egui::Ui,
    state: &mut DetailState,
    project: &ProjectRecord,
    engine: &mut PlaybackEngine,
    stills: &mut StillCache,
    shared: &mut AppShared,
) {
    if project.breakdown.is_empty() {
        return;
    }
    section_title(ui, "SHOT BREAKDOWN");

    if state.active_step >= project.breakdown.len() {
        state.active_step = 0;
    }
    ui.horizontal(|ui| {
        for (i, step) in project.breakdown.iter().enumerate() {
            let selected = i == state.active_step;
            let label = ui.selectable_label(
                selected,
                egui::RichText::new(format!("{:02} {}", i + 1, step.title))
                    .monospace()
                    .size(12.0),
            );
            if label.hovered() {
                shared.cursor = CursorVariant::Link;
            }
            if label.clicked() {
                state.active_step = i;
            }
        }
    });

    let step = &project.breakdown[state.active_step];

    // Remount the step player whenever the selected media changes.
    if state
        .step_player
        .as_ref()
        .map(|(src, _)| src != &step.media.src)
        .unwrap_or(true)
    {
        if let Some((_, old)) = state.step_player.take() {
            engine.destroy_player(old);
        }
        let id = engine.create_player(&step.media);
        state.step_player = Some((step.media.src.clone(), id));
    }

    if let Some(id) = state.step_player.as_ref().map(|(_, id)| *id) {
        ui.add_space(10.0);
        let width = ui.available_width() * 0.75;
        let rect = ui
            .allocate_exact_size(egui::vec2(width, width * 9.0 / 16.0), egui::Sense::hover())
            .0;
        player::show(
            ui,
            engine,
            id,
            rect,
            stills.get(&project.still_image),
            true,
            shared,
        );
    }
    if let Some(description) = &step.description {
        ui.add_space(8.0);
        body_text(ui, description, shared);
    }
    ui.add_space(22.0);
}

fn not_found(ui: &mut egui::Ui, slug: &str, shared: &mut AppShared) -> PageAction {
    let mut action = PageAction::None;
    ui.add_space(120.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("ARCHIVE ENTRY MISSING")
                .monospace()
                .size(20.0)
                .color(ACCENT),
        );
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(format!("No project answers to \"{slug}\"."))
                .color(TEXT_FAINT),
        );
        ui.add_space(16.0);
        if text_link(ui, "RETURN TO PORTFOLIO INDEX", shared) {
            action = PageAction::Navigate(Route::Portfolio);
        }
    });
    action
}

fn next_project_link(ui: &mut egui::Ui, next: &ProjectRecord, shared: &mut AppShared) -> bool {
    let width = ui.available_width();
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, 150.0), egui::Sense::click());
    let hovered = response.hovered();
    if hovered {
        shared.cursor = CursorVariant::Link;
    }
    let painter = ui.painter();
    painter.rect_filled(
        rect,
        egui::Rounding::same(4.0),
        if hovered {
            egui::Color32::from_gray(22)
        } else {
            SURFACE
        },
    );
    painter.text(
        egui::pos2(rect.min.x + 28.0, rect.min.y + 36.0),
        egui::Align2::LEFT_CENTER,
        "NEXT ARTIFACT",
        egui::FontId::monospace(11.0),
        TEXT_FAINT,
    );
    painter.text(
        egui::pos2(rect.min.x + 28.0, rect.center().y + 18.0),
        egui::Align2::LEFT_CENTER,
        &next.title,
        egui::FontId::proportional(32.0),
        if hovered { ACCENT } else { TEXT_DIM },
    );
    painter.text(
        egui::pos2(rect.max.x - 28.0, rect.center().y),
        egui::Align2::RIGHT_CENTER,
        "→",
        egui::FontId::proportional(34.0),
        faded(ACCENT, if hovered { 1.0 } else { 0.4 }),
    );
    response.clicked()
}

fn text_link(ui: &mut egui::Ui, label: &str, shared: &mut AppShared) -> bool {
    let response = ui.add(
        egui::Label::new(
            egui::RichText::new(label).monospace().size(12.0).color(TEXT_DIM),
        )
        .sense(egui::Sense::click()),
    );
    if response.hovered() {
        shared.cursor = CursorVariant::Link;
    }
    response.clicked()
}

fn section_title(ui: &mut egui::Ui, title: &str) {
    ui.label(
        egui::RichText::new(title)
            .monospace()
            .size(11.0)
            .color(TEXT_FAINT),
    );
    ui.add_space(6.0);
}

fn body_text(ui: &mut egui::Ui, text: &str, shared: &mut AppShared) {
    let response = ui.add(
        egui::Label::new(
            egui::RichText::new(text).size(15.0).color(TEXT_DIM),
        )
        .sense(egui::Sense::hover()),
    );
    if response.hovered() {
        shared.cursor = CursorVariant::Text;
    }
}
