// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Offline embed provider.
//!
//! The desktop build has no webview to host the real iframe API, so this
//! provider stands in for it behind the exact same protocol: a deferred
//! script-ready signal, a ready event after construction, and a wall-clock
//! player that reports `Ended` instead of looping on its own (the backend
//! owns the restart).

use super::provider::{EmbedEvent, EmbedParams, EmbedPlayer, EmbedScriptLoader, EmbedState};
use std::sync::mpsc::{channel, Receiver};
use std::time::{Duration, Instant};

/// Nominal runtime of an offline embed, used when the catalog has no
/// better information.
const DEFAULT_EMBED_SECS: f64 = 120.0;

/// Script loader that completes after a short simulated fetch.
pub struct OfflineLoader {
    fetch_delay: Duration,
}

impl Default for OfflineLoader {
    fn default() -> Self {
        Self {
            fetch_delay: Duration::from_millis(400),
        }
    }
}

impl EmbedScriptLoader for OfflineLoader {
    fn begin_load(&mut self) -> Receiver<()> {
        let (sender, receiver) = channel();
        let delay = self.fetch_delay;
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            let _ = sender.send(());
        });
        receiver
    }

    fn create_player(&mut self, video_id: &str, params: &EmbedParams) -> Box<dyn EmbedPlayer> {
        log::info!("offline embed player created for {}", video_id);
        Box::new(OfflinePlayer::new(params))
    }
}

/// Wall-clock embedded player following the provider event protocol.
pub struct OfflinePlayer {
    playing: bool,
    muted: bool,
    volume: f32,
    position: f64,
    duration: f64,
    last_advance: Instant,
    events: Vec<EmbedEvent>,
    destroyed: bool,
}

impl OfflinePlayer {
    fn new(params: &EmbedParams) -> Self {
        Self {
            playing: false,
            muted: params.start_muted,
            volume: 100.0,
            position: 0.0,
            duration: DEFAULT_EMBED_SECS,
            last_advance: Instant::now(),
            // Ready fires on the first poll after construction
            events: vec![EmbedEvent::Ready],
            destroyed: false,
        }
    }

    fn advance_clock(&mut self) {
        let elapsed = self.last_advance.elapsed().as_secs_f64();
        self.last_advance = Instant::now();
        if !self.playing || self.destroyed {
            return;
        }
        self.position += elapsed;
        if self.position >= self.duration {
            // Playback stops at the end; the backend owns the restart.
            self.position = self.duration;
            self.playing = false;
            self.events.push(EmbedEvent::StateChange(EmbedState::Ended));
        }
    }
}

impl EmbedPlayer for OfflinePlayer {
    fn play(&mut self) {
        if self.destroyed || self.playing {
            return;
        }
        self.advance_clock();
        self.playing = true;
        self.events.push(EmbedEvent::StateChange(EmbedState::Playing));
    }

    fn pause(&mut self) {
        if self.destroyed || !self.playing {
            return;
        }
        self.advance_clock();
        self.playing = false;
        self.events.push(EmbedEvent::StateChange(EmbedState::Paused));
    }

    fn mute(&mut self) {
        self.muted = true;
    }

    fn un_mute(&mut self) {
        self.muted = false;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn seek_to(&mut self, seconds: f64) {
        self.advance_clock();
        self.position = seconds.clamp(0.0, self.duration);
    }

    fn set_volume(&mut self, percent: f32) {
        self.volume = percent.clamp(0.0, 100.0);
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn poll_events(&mut self) -> Vec<EmbedEvent> {
        self.advance_clock();
        std::mem::take(&mut self.events)
    }

    fn destroy(&mut self) {
        self.destroyed = true;
        self.playing = false;
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_fires_once_on_first_poll() {
        let params = EmbedParams::looping_preview("vid");
        let mut player = OfflinePlayer::new(&params);
        assert_eq!(player.poll_events(), vec![EmbedEvent::Ready]);
        assert!(player.poll_events().is_empty());
    }

    #[test]
    fn test_play_pause_emit_state_changes() {
        let params = EmbedParams::looping_preview("vid");
        let mut player = OfflinePlayer::new(&params);
        let _ = player.poll_events();
        player.play();
        player.pause();
        assert_eq!(
            player.poll_events(),
            vec![
                EmbedEvent::StateChange(EmbedState::Playing),
                EmbedEvent::StateChange(EmbedState::Paused),
            ]
        );
    }

    #[test]
    fn test_destroyed_player_is_inert() {
        let params = EmbedParams::looping_preview("vid");
        let mut player = OfflinePlayer::new(&params);
        player.destroy();
        player.play();
        assert!(player.poll_events().is_empty());
    }
}
