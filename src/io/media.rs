// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Still-image loading.
//!
//! Decodes project card/hero stills into RGBA pixel buffers suitable for
//! egui texture upload. Decoding runs on a background thread (see the
//! still cache in `app.rs`); a missing or broken file is logged and the
//! card keeps its placeholder.

use anyhow::Result;
use std::path::Path;

/// A decoded RGBA8 image.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Load and decode an image file to RGBA8.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(LoadedImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}
