// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Embed provider protocol.
//!
//! The embedded backend drives a provider-hosted player through this small
//! remote-control surface: a loader that fetches the provider's API script
//! at most once per process, player construction with a fixed parameter
//! set, and a polled event stream (ready + state changes).

use std::sync::mpsc::Receiver;

/// Provider-reported playback states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
}

/// Events surfaced by an embedded player between polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedEvent {
    /// The player finished initializing and accepts control calls.
    Ready,
    StateChange(EmbedState),
}

/// Construction parameters for an embedded player.
///
/// Mirrors the provider's fixed parameter set; looping requires an
/// explicit playlist reference back to the same video id.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedParams {
    pub autoplay: bool,
    pub start_muted: bool,
    pub looping: bool,
    pub playlist: Option<String>,
    pub hide_controls: bool,
    pub suppress_related: bool,
    pub inline: bool,
    pub minimal_branding: bool,
}

impl EmbedParams {
    /// The standard looping-preview configuration used everywhere on the
    /// site: autoplaying, muted, chromeless.
    pub fn looping_preview(video_id: &str) -> Self {
        Self {
            autoplay: true,
            start_muted: true,
            looping: true,
            playlist: Some(video_id.to_string()),
            hide_controls: true,
            suppress_related: true,
            inline: true,
            minimal_branding: true,
        }
    }
}

/// Remote-control surface of one provider-hosted player.
pub trait EmbedPlayer {
    fn play(&mut self);
    fn pause(&mut self);
    fn mute(&mut self);
    fn un_mute(&mut self);
    fn is_muted(&self) -> bool;
    fn seek_to(&mut self, seconds: f64);
    /// Volume in percent, 0..=100.
    fn set_volume(&mut self, percent: f32);
    fn volume(&self) -> f32;
    fn current_time(&self) -> f64;
    fn duration(&self) -> f64;
    /// Drain events that occurred since the last poll.
    fn poll_events(&mut self) -> Vec<EmbedEvent>;
    /// Release the underlying player resource. No event fires afterwards.
    fn destroy(&mut self);
}

/// Loader for the provider's API script.
pub trait EmbedScriptLoader {
    /// Start fetching the API script. Called at most once per process; the
    /// returned channel fires once when the script is ready. If it never
    /// fires, waiting players simply stay not-ready — there is no retry.
    fn begin_load(&mut self) -> Receiver<()>;

    /// Construct a player against the loaded script. Only valid once the
    /// readiness channel has fired.
    fn create_player(&mut self, video_id: &str, params: &EmbedParams) -> Box<dyn EmbedPlayer>;
}
