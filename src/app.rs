// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Application shell: routing, the frame loop, and still-image caching.
//!
//! Owns the playback engine, the catalog, and per-page state. Routing
//! runs through the shutter transition except for jumps into or out of a
//! project detail page, which swap instantly so the hero video starts
//! without ceremony.

use crate::io::media::{load_image, LoadedImage};
use crate::io::serialization;
use crate::models::data::built_in_catalog;
use crate::models::project::ProjectRecord;
use crate::playback::engine::PlaybackEngine;
use crate::playback::offline::OfflineLoader;
use crate::state::{AppShared, CursorVariant};
use crate::ui::cursor::CursorOverlay;
use crate::ui::showreel::ShowreelOverlay;
use crate::ui::shutter::Shutter;
use crate::ui::{
    about, about_site, breakdown, detail, home, nav, portfolio, PageAction, BACKGROUND,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::mpsc::{channel, Receiver, Sender};

/// The site's pages. `Project` carries the catalog slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Portfolio,
    Project(String),
    Breakdown,
    About,
    AboutSite,
}

impl Route {
    fn name(&self) -> &str {
        match self {
            Route::Home => "home",
            Route::Portfolio => "portfolio",
            Route::Project(slug) => slug,
            Route::Breakdown => "breakdown",
            Route::About => "about",
            Route::AboutSite => "about-site",
        }
    }
}

enum StillEntry {
    Loading,
    Failed,
    Ready(egui::TextureHandle),
}

/// Background-loaded texture cache for project stills. Misses kick off a
/// decode thread; `poll` uploads finished decodes each frame.
pub struct StillCache {
    entries: HashMap<String, StillEntry>,
    tx: Sender<(String, Result<LoadedImage, String>)>,
    rx: Receiver<(String, Result<LoadedImage, String>)>,
}

impl StillCache {
    fn new() -> Self {
        let (tx, rx) = channel();
        Self {
            entries: HashMap::new(),
            tx,
            rx,
        }
    }

    /// Texture for a still, if loaded. A miss starts the decode and
    /// returns None; callers draw their placeholder meanwhile.
    pub fn get(&mut self, path: &str) -> Option<&egui::TextureHandle> {
        if path.is_empty() {
            return None;
        }
        if !self.entries.contains_key(path) {
            self.entries.insert(path.to_string(), StillEntry::Loading);
            let tx = self.tx.clone();
            let owned = path.to_string();
            std::thread::spawn(move || {
                let result = load_image(Path::new(&owned)).map_err(|e| e.to_string());
                let _ = tx.send((owned, result));
            });
        }
        match self.entries.get(path) {
            Some(StillEntry::Ready(texture)) => Some(texture),
            _ => None,
        }
    }

    /// Upload any decodes that finished since last frame.
    fn poll(&mut self, ctx: &egui::Context) {
        while let Ok((path, result)) = self.rx.try_recv() {
            let entry = match result {
                Ok(img) => {
                    let color = egui::ColorImage::from_rgba_unmultiplied(
                        [img.width as usize, img.height as usize],
                        &img.pixels,
                    );
                    StillEntry::Ready(ctx.load_texture(
                        &path,
                        color,
                        egui::TextureOptions::LINEAR,
                    ))
                }
                Err(err) => {
                    log::warn!("still '{}' failed to load: {}", path, err);
                    StillEntry::Failed
                }
            };
            self.entries.insert(path, entry);
        }
    }
}

pub struct ShowreelApp {
    catalog: Vec<ProjectRecord>,
    engine: PlaybackEngine,
    shared: AppShared,
    stills: StillCache,
    route: Route,
    shutter: Shutter,
    cursor: CursorOverlay,
    reel: ShowreelOverlay,
    home: home::HomeState,
    portfolio: portfolio::PortfolioState,
    detail: detail::DetailState,
    breakdown: breakdown::BreakdownState,
}

impl ShowreelApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = BACKGROUND;
        visuals.override_text_color = None;
        cc.egui_ctx.set_visuals(visuals);

        Self {
            catalog: built_in_catalog(),
            engine: PlaybackEngine::new(Box::new(OfflineLoader::default())),
            shared: AppShared::default(),
            stills: StillCache::new(),
            route: Route::Home,
            shutter: Shutter::new(),
            cursor: CursorOverlay::new(),
            reel: ShowreelOverlay::new(),
            home: home::HomeState::new(),
            portfolio: portfolio::PortfolioState::new(),
            detail: detail::DetailState::new(),
            breakdown: breakdown::BreakdownState::new(),
        }
    }

    /// Request a route change. Detail jumps swap instantly; everything
    /// else rides the shutter.
    fn navigate(&mut self, target: Route, now: f64) {
        if target == self.route || self.shutter.is_active() {
            return;
        }
        let instant = matches!(target, Route::Project(_)) || matches!(self.route, Route::Project(_));
        if instant {
            self.enter_route(target, now);
        } else {
            self.shutter.begin(target, now);
        }
    }

    /// Perform the actual swap: unmount the outgoing page's players and
    /// reset entrance animations where the page replays them.
    fn enter_route(&mut self, target: Route, _now: f64) {
        log::info!("route {} -> {}", self.route.name(), target.name());
        match &self.route {
            Route::Portfolio => self.portfolio.unmount(&mut self.engine),
            Route::Project(_) => {
                if !matches!(target, Route::Project(_)) {
                    self.detail.unmount(&mut self.engine);
                }
            }
            _ => {}
        }
        if matches!(target, Route::Home) {
            self.home.reset();
        }
        self.route = target;
    }

    fn apply_action(&mut self, action: PageAction, now: f64) {
        match action {
            PageAction::None => {}
            PageAction::Navigate(route) => self.navigate(route, now),
            PageAction::PlayReel => self.shared.play_reel(),
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Catalog...").clicked() {
                        self.open_catalog();
                        ui.close_menu();
                    }
                    ui.menu_button("Export Catalog", |ui| {
                        if ui.button("As YAML...").clicked() {
                            self.export_catalog("yaml");
                            ui.close_menu();
                        }
                        if ui.button("As JSON...").clicked() {
                            self.export_catalog("json");
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }

    fn open_catalog(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Catalog", &["yaml", "yml", "json"])
            .pick_file()
        else {
            return;
        };
        let result = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serialization::import_json(&path),
            _ => serialization::import_yaml(&path),
        };
        match result {
            Ok(catalog) => {
                log::info!("loaded catalog with {} projects from {:?}", catalog.len(), path);
                // Old slugs may be gone; drop every mounted page player.
                self.portfolio.unmount(&mut self.engine);
                self.detail.unmount(&mut self.engine);
                self.catalog = catalog;
            }
            Err(err) => log::error!("failed to load catalog from {:?}: {:#}", path, err),
        }
    }

    fn export_catalog(&self, format: &str) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(format!("catalog.{format}"))
            .save_file()
        else {
            return;
        };
        let result = match format {
            "json" => serialization::export_json(&self.catalog, &path),
            _ => serialization::export_yaml(&self.catalog, &path),
        };
        match result {
            Ok(()) => log::info!("exported {} projects to {:?}", self.catalog.len(), path),
            Err(err) => log::error!("failed to export catalog to {:?}: {:#}", path, err),
        }
    }
}

impl eframe::App for ShowreelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (now, dt) = ctx.input(|i| (i.time, i.stable_dt as f64));

        self.stills.poll(ctx);
        self.engine.tick(dt);
        // Hover handlers re-set the variant every frame.
        self.shared.cursor = CursorVariant::Default;

        self.menu_bar(ctx);
        let nav_action = nav::show(ctx, &self.route, &mut self.shared);
        self.apply_action(nav_action, now);

        let route = self.route.clone();
        let action = egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| match &route {
                Route::Home => home::show(ui, &mut self.home, &mut self.shared, now),
                Route::Portfolio => portfolio::show(
                    ui,
                    &mut self.portfolio,
                    &self.catalog,
                    &mut self.engine,
                    &mut self.stills,
                    &mut self.shared,
                    now,
                ),
                Route::Project(slug) => detail::show(
                    ui,
                    &mut self.detail,
                    slug,
                    &self.catalog,
                    &mut self.engine,
                    &mut self.stills,
                    &mut self.shared,
                ),
                Route::Breakdown => {
                    breakdown::show(ui, &mut self.breakdown, &mut self.shared, now)
                }
                Route::About => about::show(ui, &mut self.shared),
                Route::AboutSite => about_site::show(ui, &mut self.shared),
            })
            .inner;
        self.apply_action(action, now);

        self.reel.show(ctx, &mut self.engine, &mut self.shared);

        if let Some(target) = self.shutter.take_swap(now) {
            self.enter_route(target, now);
        }
        self.shutter.paint(ctx, now);
        self.cursor.show(ctx, self.shared.cursor);

        let animating = self.shutter.is_active()
            || self.shared.is_reel_playing()
            || self.engine.any_live()
            || matches!(self.route, Route::Home | Route::Breakdown);
        if animating {
            ctx.request_repaint_after(std::time::Duration::from_millis(33));
        }
    }
}
