// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio index page.
//!
//! Search, tool, and sort controls over the catalog, with one preview
//! player per visible card. The visibility observer drives autoplay: a
//! card whose rect crosses 60% coverage takes the active token, and the
//! last one to cross in a tick wins. The first visit each session is
//! gated behind a decrypt-style overlay that dissolves as the user
//! scrolls.

use crate::app::{Route, StillCache};
use crate::models::catalog::{query_catalog, SortMode};
use crate::models::data::TECH_CATEGORIES;
use crate::models::project::ProjectRecord;
use crate::playback::engine::PlaybackEngine;
use crate::playback::visibility::{VisibilityEvent, VisibilityObserver};
use crate::playback::PlayerId;
use crate::state::{AppShared, CursorVariant};
use crate::ui::{card, faded, pulse_chevron, PageAction, ACCENT, TEXT_DIM, TEXT_FAINT};
use crate::util::anim::pulse;
use std::collections::{HashMap, HashSet};

/// Scroll depth (in points) that clears the first-visit gate.
const UNLOCK_DEPTH: f32 = 300.0;
/// Scroll depth over which the gate overlay fades to nothing.
const GATE_FADE_DEPTH: f32 = 400.0;

pub struct PortfolioState {
    pub query: String,
    pub sort: SortMode,
    pub tech: Option<String>,
    players: HashMap<String, PlayerId>,
    observer: VisibilityObserver<String>,
}

impl PortfolioState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            sort: SortMode::Default,
            tech: None,
            players: HashMap::new(),
            observer: VisibilityObserver::new(),
        }
    }

    pub fn reset_filters(&mut self) {
        self.query.clear();
        self.tech = None;
        self.sort = SortMode::Default;
    }

    /// Destroy every preview player. Called when the page unmounts so
    /// nothing keeps playing off-route.
    pub fn unmount(&mut self, engine: &mut PlaybackEngine) {
        for (_, id) in self.players.drain() {
            engine.destroy_player(id);
        }
        self.observer = VisibilityObserver::new();
    }
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn show(
    ui: &mut egui::Ui,
    state: &mut PortfolioState,
    catalog: &[ProjectRecord],
    engine: &mut PlaybackEngine,
    stills: &mut StillCache,
    shared: &mut AppShared,
    now: f64,
) -> PageAction {
    let mut action = PageAction::None;
    let first_visit = !shared.session.portfolio_unlocked();

    controls(ui, state, shared);
    ui.add_space(8.0);

    let results = query_catalog(catalog, &state.query, state.tech.as_deref(), state.sort);
    let keep: HashSet<String> = results.iter().map(|p| p.id.clone()).collect();

    // Drop players for records the current filter excludes.
    let stale: Vec<String> = state
        .players
        .keys()
        .filter(|slug| !keep.contains(*slug))
        .cloned()
        .collect();
    for slug in stale {
        if let Some(id) = state.players.remove(&slug) {
            engine.destroy_player(id);
        }
    }

    let scroll_out = egui::ScrollArea::vertical()
        .id_source("portfolio_feed")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if first_visit {
                // Push the feed below the fold so the gate has something
                // to guard.
                ui.add_space(ui.ctx().screen_rect().height() * 0.9);
            }
            ui.add_space(12.0);

            if results.is_empty() {
                empty_state(ui, state, shared);
                return;
            }

            ui.vertical_centered(|ui| {
                for project in &results {
                    let preview = *state
                        .players
                        .entry(project.id.clone())
                        .or_insert_with(|| engine.create_player(&project.preview));
                    let still = stills.get(&project.still_image);
                    let response = card::show(ui, project, still, engine, preview, shared);
                    state.observer.update(project.id.clone(), response.rect);
                    if response.clicked {
                        action = PageAction::Navigate(Route::Project(project.id.clone()));
                    }
                    ui.add_space(36.0);
                }
            });
        });

    // Focus transitions drive autoplay; exits do not release the token,
    // so a lone focused card keeps its preview running.
    for event in state.observer.observe(scroll_out.inner_rect) {
        if let VisibilityEvent::Entered(slug) = event {
            if let Some(&id) = state.players.get(&slug) {
                engine.request_active(id);
            }
        }
    }

    let offset = scroll_out.state.offset.y;
    if first_visit {
        if offset > UNLOCK_DEPTH {
            shared.session.unlock_portfolio();
        }
        let alpha = 1.0 - (offset / GATE_FADE_DEPTH).clamp(0.0, 1.0);
        if alpha > 0.0 {
            gate_overlay(ui.ctx(), alpha, now);
        }
    }

    action
}

fn controls(ui: &mut egui::Ui, state: &mut PortfolioState, shared: &mut AppShared) {
    ui.horizontal(|ui| {
        let search = ui.add(
            egui::TextEdit::singleline(&mut state.query)
                .hint_text("Search title, category, tool...")
                .desired_width(260.0),
        );
        if search.hovered() {
            shared.cursor = CursorVariant::Text;
        }

        let tech_label = state.tech.as_deref().unwrap_or("Show All Work");
        egui::ComboBox::from_id_source("tech_filter")
            .selected_text(tech_label)
            .width(190.0)
            .show_ui(ui, |ui| {
                if ui
                    .selectable_label(state.tech.is_none(), "Show All Work")
                    .clicked()
                {
                    state.tech = None;
                }
                for (group, tools) in TECH_CATEGORIES {
                    ui.label(
                        egui::RichText::new(group.to_uppercase())
                            .small()
                            .color(TEXT_FAINT),
                    );
                    for tool in tools {
                        let selected = state.tech.as_deref() == Some(*tool);
                        if ui.selectable_label(selected, *tool).clicked() {
                            state.tech = Some(tool.to_string());
                        }
                    }
                }
            });

        egui::ComboBox::from_id_source("sort_mode")
            .selected_text(state.sort.label())
            .width(140.0)
            .show_ui(ui, |ui| {
                for mode in SortMode::ALL {
                    ui.selectable_value(&mut state.sort, mode, mode.label());
                }
            });
    });
}

fn empty_state(ui: &mut egui::Ui, state: &mut PortfolioState, shared: &mut AppShared) {
    ui.add_space(80.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("NO TRANSMISSIONS FOUND")
                .monospace()
                .size(16.0)
                .color(TEXT_DIM),
        );
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new("Nothing in the archive matches that query.")
                .color(TEXT_FAINT),
        );
        ui.add_space(14.0);
        let reset = ui.button("Reset Filters");
        if reset.hovered() {
            shared.cursor = CursorVariant::Link;
        }
        if reset.clicked() {
            state.reset_filters();
        }
    });
}

/// First-visit overlay: fades and parts as the user scrolls through it.
fn gate_overlay(ctx: &egui::Context, alpha: f32, now: f64) {
    let screen = ctx.screen_rect();
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Middle,
        egui::Id::new("archive_gate"),
    ));
    painter.rect_filled(
        screen,
        egui::Rounding::ZERO,
        faded(egui::Color32::from_gray(5), 0.94 * alpha),
    );
    painter.text(
        screen.center() - egui::vec2(0.0, 20.0),
        egui::Align2::CENTER_CENTER,
        "ACCESSING ARCHIVE",
        egui::FontId::proportional(34.0),
        faded(ACCENT, alpha),
    );
    painter.text(
        screen.center() + egui::vec2(0.0, 18.0),
        egui::Align2::CENTER_CENTER,
        "DECRYPTION IN PROGRESS — SCROLL TO CONTINUE",
        egui::FontId::monospace(11.0),
        faded(TEXT_DIM, alpha * (0.4 + 0.6 * pulse(now, 1.6))),
    );
    pulse_chevron(
        &painter,
        egui::pos2(screen.center().x, screen.max.y - 60.0),
        alpha,
        now,
    );
}
