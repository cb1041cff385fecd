// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Landing page.
//!
//! Staggered letter-by-letter reveal of the site owner's name, a role
//! line, and a pulsing scroll affordance. Scrolling down (or clicking the
//! affordance) moves on to the portfolio.

use crate::app::Route;
use crate::models::data::SITE_INFO;
use crate::state::{AppShared, CursorVariant};
use crate::ui::{faded, PageAction, ACCENT, TEXT_DIM, TEXT_FAINT};
use crate::util::anim::{pulse, Anim, EASE_OUT};

const LETTER_STAGGER: f64 = 0.09;
const LETTER_RISE: f32 = 46.0;

pub struct HomeState {
    entered_at: Option<f64>,
    navigated: bool,
}

impl HomeState {
    pub fn new() -> Self {
        Self {
            entered_at: None,
            navigated: false,
        }
    }

    /// Replay the entrance the next time the page shows.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn show(ui: &mut egui::Ui, state: &mut HomeState, shared: &mut AppShared, now: f64) -> PageAction {
    let t0 = *state.entered_at.get_or_insert(now);
    let rect = ui.max_rect();
    let painter = ui.painter();
    let mut action = PageAction::None;

    // Name, one letter at a time.
    let font = egui::FontId::proportional(110.0);
    let letters: Vec<char> = SITE_INFO.name.chars().collect();
    let galley_widths: Vec<f32> = letters
        .iter()
        .map(|c| {
            ui.fonts(|f| f.layout_no_wrap(c.to_string(), font.clone(), ACCENT))
                .size()
                .x
        })
        .collect();
    let total: f32 = galley_widths.iter().sum();
    let mut x = rect.center().x - total * 0.5;
    let base_y = rect.center().y - 90.0;
    for (i, (c, w)) in letters.iter().zip(&galley_widths).enumerate() {
        let anim = Anim::new(t0 + 0.4 + LETTER_STAGGER * i as f64, 0.7, 0.0, 1.0, EASE_OUT);
        let e = anim.value(now);
        if e > 0.0 {
            let galley = ui.fonts(|f| {
                f.layout_no_wrap(c.to_string(), font.clone(), faded(ACCENT, e))
            });
            painter.galley(
                egui::pos2(x, base_y + LETTER_RISE * (1.0 - e)),
                galley,
                ACCENT,
            );
        }
        x += w;
    }

    // Role and tagline fade in after the name lands.
    let sub = Anim::new(t0 + 1.3, 0.6, 0.0, 1.0, EASE_OUT).value(now);
    if sub > 0.0 {
        painter.text(
            egui::pos2(rect.center().x, base_y + 140.0),
            egui::Align2::CENTER_TOP,
            SITE_INFO.role.to_uppercase(),
            egui::FontId::monospace(13.0),
            faded(TEXT_DIM, sub),
        );
        painter.text(
            egui::pos2(rect.center().x, base_y + 168.0),
            egui::Align2::CENTER_TOP,
            SITE_INFO.tagline,
            egui::FontId::proportional(15.0),
            faded(TEXT_FAINT, sub),
        );
    }

    // Scroll affordance.
    let hint_pos = egui::pos2(rect.center().x, rect.max.y - 48.0);
    let glow = 0.35 + 0.65 * pulse(now, 1.8);
    painter.text(
        hint_pos,
        egui::Align2::CENTER_CENTER,
        "SCROLL TO ENTER",
        egui::FontId::monospace(11.0),
        faded(TEXT_DIM, glow),
    );
    painter.text(
        hint_pos + egui::vec2(0.0, 20.0),
        egui::Align2::CENTER_CENTER,
        "⌄",
        egui::FontId::proportional(18.0),
        faded(ACCENT, glow),
    );
    let hint = ui.interact(
        egui::Rect::from_center_size(hint_pos + egui::vec2(0.0, 10.0), egui::vec2(180.0, 56.0)),
        egui::Id::new("home_scroll_hint"),
        egui::Sense::click(),
    );
    if hint.hovered() {
        shared.cursor = CursorVariant::Link;
    }

    let scrolled = ui.ctx().input(|i| i.raw_scroll_delta.y < -0.5);
    if (hint.clicked() || scrolled) && !state.navigated {
        state.navigated = true;
        action = PageAction::Navigate(Route::Portfolio);
    }

    action
}
