// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Showreel: a motion-design portfolio as a native desktop app.

mod app;
mod io;
mod models;
mod playback;
mod state;
mod ui;
mod util;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 640.0])
            .with_title("VIKAS — Motion Portfolio"),
        ..Default::default()
    };

    eframe::run_native(
        "showreel",
        options,
        Box::new(|cc| Ok(Box::new(app::ShowreelApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("application error: {e}"))?;

    Ok(())
}
