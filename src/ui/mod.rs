// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! UI components: pages, overlays, and the shared palette.

pub mod about;
pub mod about_site;
pub mod breakdown;
pub mod card;
pub mod cursor;
pub mod detail;
pub mod home;
pub mod nav;
pub mod player;
pub mod portfolio;
pub mod showreel;
pub mod shutter;

use crate::app::Route;

/// Result of rendering a page or navigation chrome.
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    None,
    Navigate(Route),
    PlayReel,
}

// ── Palette ──────────────────────────────────────────────────────────────

pub const BACKGROUND: egui::Color32 = egui::Color32::from_gray(8);
pub const SURFACE: egui::Color32 = egui::Color32::from_gray(16);
pub const ACCENT: egui::Color32 = egui::Color32::from_gray(235);
pub const TEXT_DIM: egui::Color32 = egui::Color32::from_gray(150);
pub const TEXT_FAINT: egui::Color32 = egui::Color32::from_gray(95);

/// A color with its alpha scaled by `a` (0..=1).
pub fn faded(color: egui::Color32, a: f32) -> egui::Color32 {
    let a = (a.clamp(0.0, 1.0) * color.a() as f32) as u8;
    egui::Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), a)
}

/// Pulsing down-chevron used by scroll affordances.
pub fn pulse_chevron(painter: &egui::Painter, pos: egui::Pos2, alpha: f32, now: f64) {
    let glow = 0.35 + 0.65 * crate::util::anim::pulse(now, 1.8);
    painter.text(
        pos,
        egui::Align2::CENTER_CENTER,
        "⌄",
        egui::FontId::proportional(20.0),
        faded(ACCENT, alpha * glow),
    );
}
