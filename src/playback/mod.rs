// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Video playback coordination.
//!
//! One engine owns every player instance on the page, the script
//! bootstrap for the embed provider, and the single active-playback
//! token. Pages create players, forward visibility events, and render
//! whatever state the engine reports — all cross-instance state lives
//! here and is mutated only through the engine's operations.

pub mod backend;
pub mod bootstrap;
pub mod engine;
pub mod offline;
pub mod provider;
pub mod visibility;

use uuid::Uuid;

/// Runtime identifier of a player instance. Fresh per mount; never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(Uuid);

impl PlayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Short form is plenty for logs
        write!(f, "{}", &self.0.to_string()[..8])
    }
}
