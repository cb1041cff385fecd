// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Playback engine: player registry and singleton coordinator.
//!
//! Owns every live player, the script bootstrap, and the single
//! active-playback token. `request_active` enforces the page-wide
//! invariant that at most one player is playing: every other playing
//! instance is paused before the new one starts. Two activations in the
//! same tick resolve last-writer-wins.

use super::backend::Player;
use super::bootstrap::ScriptBootstrap;
use super::provider::{EmbedParams, EmbedScriptLoader};
use super::PlayerId;
use crate::models::project::{MediaKind, MediaRef};

pub struct PlaybackEngine {
    // Mount order; also the waiter-service order on script readiness
    players: Vec<Player>,
    active: Option<PlayerId>,
    bootstrap: ScriptBootstrap,
}

impl PlaybackEngine {
    pub fn new(loader: Box<dyn EmbedScriptLoader>) -> Self {
        Self {
            players: Vec::new(),
            active: None,
            bootstrap: ScriptBootstrap::new(loader),
        }
    }

    /// Mount a player for a media reference. Embedded sources go through
    /// the script bootstrap and stay not-ready until it resolves.
    pub fn create_player(&mut self, media: &MediaRef) -> PlayerId {
        let id = PlayerId::new();
        let player = match media.kind {
            MediaKind::Local => Player::native(id, media),
            MediaKind::Embedded => {
                let params = EmbedParams::looping_preview(&media.src);
                let mut player = Player::embedded(id, media, params.clone());
                if self.bootstrap.request(id) {
                    // Script already loaded: construct immediately
                    if let Some(embed) = self.bootstrap.create_player(&media.src, &params) {
                        player.attach_embed(embed);
                    }
                }
                player
            }
        };
        log::info!("player {} mounted for {}", id, media.src);
        self.players.push(player);
        id
    }

    /// Unmount a player and release its backend resource. Clears the
    /// active token and any queued script waiter so nothing fires against
    /// a disposed instance.
    pub fn destroy_player(&mut self, id: PlayerId) {
        self.bootstrap.cancel(id);
        if self.active == Some(id) {
            self.active = None;
        }
        if let Some(pos) = self.players.iter().position(|p| p.id == id) {
            let mut player = self.players.remove(pos);
            player.teardown();
            log::info!("player {} unmounted", id);
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn active(&self) -> Option<PlayerId> {
        self.active
    }

    /// Make `id` the one playing instance. Others pause first so there is
    /// no window with two audible players.
    pub fn request_active(&mut self, id: PlayerId) {
        if self.player(id).is_none() {
            return;
        }
        for player in self.players.iter_mut() {
            if player.id != id && player.is_playing() {
                player.pause();
            }
        }
        if self.active != Some(id) {
            log::info!("active player -> {}", id);
        }
        self.active = Some(id);
        if let Some(player) = self.player_mut(id) {
            player.play();
        }
    }

    /// Clear the token if `id` currently holds it; no effect otherwise.
    pub fn release(&mut self, id: PlayerId) {
        if self.active == Some(id) {
            self.active = None;
        }
    }

    /// True while anything needs periodic repaints (progress movement or
    /// a pending script load).
    pub fn any_live(&self) -> bool {
        !self.players.is_empty()
    }

    /// Per-frame pump: resolve script readiness (servicing waiters in
    /// mount order), advance native clocks, and drain provider events.
    pub fn tick(&mut self, dt: f64) {
        for id in self.bootstrap.poll() {
            let Some(pos) = self.players.iter().position(|p| p.id == id) else {
                continue;
            };
            let Some((video_id, params)) = self.players[pos].video_id_and_params() else {
                continue;
            };
            if let Some(embed) = self.bootstrap.create_player(&video_id, &params) {
                self.players[pos].attach_embed(embed);
            }
        }
        for player in self.players.iter_mut() {
            player.tick(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::provider::{EmbedEvent, EmbedPlayer};
    use std::sync::mpsc::{channel, Receiver, Sender};

    /// Embedded player that reports ready on first poll and tracks play
    /// state like the real provider.
    struct InstantPlayer {
        playing: bool,
        ready_sent: bool,
    }

    impl EmbedPlayer for InstantPlayer {
        fn play(&mut self) {
            self.playing = true;
        }
        fn pause(&mut self) {
            self.playing = false;
        }
        fn mute(&mut self) {}
        fn un_mute(&mut self) {}
        fn is_muted(&self) -> bool {
            true
        }
        fn seek_to(&mut self, _seconds: f64) {}
        fn set_volume(&mut self, _percent: f32) {}
        fn volume(&self) -> f32 {
            30.0
        }
        fn current_time(&self) -> f64 {
            0.0
        }
        fn duration(&self) -> f64 {
            120.0
        }
        fn poll_events(&mut self) -> Vec<EmbedEvent> {
            let mut events = Vec::new();
            if !self.ready_sent {
                self.ready_sent = true;
                events.push(EmbedEvent::Ready);
            }
            if self.playing {
                events.push(EmbedEvent::StateChange(
                    crate::playback::provider::EmbedState::Playing,
                ));
            }
            events
        }
        fn destroy(&mut self) {
            self.playing = false;
        }
    }

    struct TriggerLoader {
        trigger_out: Sender<Sender<()>>,
        players_made: usize,
    }

    impl EmbedScriptLoader for TriggerLoader {
        fn begin_load(&mut self) -> Receiver<()> {
            let (tx, rx) = channel();
            let _ = self.trigger_out.send(tx);
            rx
        }
        fn create_player(
            &mut self,
            _video_id: &str,
            _params: &EmbedParams,
        ) -> Box<dyn EmbedPlayer> {
            self.players_made += 1;
            Box::new(InstantPlayer {
                playing: false,
                ready_sent: false,
            })
        }
    }

    fn engine_with_trigger() -> (PlaybackEngine, Receiver<Sender<()>>) {
        let (side_tx, side_rx) = channel();
        let engine = PlaybackEngine::new(Box::new(TriggerLoader {
            trigger_out: side_tx,
            players_made: 0,
        }));
        (engine, side_rx)
    }

    fn embedded_ref(id: &str) -> MediaRef {
        MediaRef::embedded(id)
    }

    #[test]
    fn test_request_active_pauses_previous() {
        let (mut engine, _side) = engine_with_trigger();
        let a = engine.create_player(&MediaRef::local("a.mp4", 10.0));
        let b = engine.create_player(&MediaRef::local("b.mp4", 10.0));

        engine.request_active(a);
        assert!(engine.player(a).unwrap().is_playing());

        engine.request_active(b);
        assert!(!engine.player(a).unwrap().is_playing());
        assert!(engine.player(b).unwrap().is_playing());
        assert_eq!(engine.active(), Some(b));
    }

    #[test]
    fn test_at_most_one_playing_after_activations() {
        let (mut engine, _side) = engine_with_trigger();
        let ids: Vec<PlayerId> = (0..4)
            .map(|i| engine.create_player(&MediaRef::local(format!("{i}.mp4"), 10.0)))
            .collect();
        for &id in &ids {
            engine.request_active(id);
            let playing = ids
                .iter()
                .filter(|&&p| engine.player(p).unwrap().is_playing())
                .count();
            assert_eq!(playing, 1);
        }
    }

    #[test]
    fn test_release_only_clears_own_token() {
        let (mut engine, _side) = engine_with_trigger();
        let a = engine.create_player(&MediaRef::local("a.mp4", 10.0));
        let b = engine.create_player(&MediaRef::local("b.mp4", 10.0));
        engine.request_active(a);
        engine.release(b);
        assert_eq!(engine.active(), Some(a));
        engine.release(a);
        assert_eq!(engine.active(), None);
    }

    #[test]
    fn test_three_mounts_one_script_all_become_ready() {
        let (mut engine, side) = engine_with_trigger();
        let a = engine.create_player(&embedded_ref("v1"));
        let b = engine.create_player(&embedded_ref("v2"));
        let c = engine.create_player(&embedded_ref("v3"));
        // One fetch started for three mounts
        let trigger = side.try_recv().expect("one load begun");
        assert!(side.try_recv().is_err(), "second script fetch started");

        for id in [a, b, c] {
            assert!(!engine.player(id).unwrap().is_ready());
        }
        trigger.send(()).unwrap();
        engine.tick(0.0); // attach in mount order
        engine.tick(0.0); // drain Ready events
        for id in [a, b, c] {
            assert!(engine.player(id).unwrap().is_ready());
        }
    }

    #[test]
    fn test_mount_after_ready_is_immediate() {
        let (mut engine, side) = engine_with_trigger();
        let _first = engine.create_player(&embedded_ref("v1"));
        side.try_recv().unwrap().send(()).unwrap();
        engine.tick(0.0);

        let late = engine.create_player(&embedded_ref("v2"));
        engine.tick(0.0);
        assert!(engine.player(late).unwrap().is_ready());
    }

    #[test]
    fn test_destroy_before_ready_drops_waiter() {
        let (mut engine, side) = engine_with_trigger();
        let a = engine.create_player(&embedded_ref("v1"));
        let b = engine.create_player(&embedded_ref("v2"));
        engine.destroy_player(a);
        side.try_recv().unwrap().send(()).unwrap();
        engine.tick(0.0);
        engine.tick(0.0);
        assert!(engine.player(a).is_none());
        assert!(engine.player(b).unwrap().is_ready());
    }

    #[test]
    fn test_destroy_active_clears_token() {
        let (mut engine, _side) = engine_with_trigger();
        let a = engine.create_player(&MediaRef::local("a.mp4", 10.0));
        engine.request_active(a);
        engine.destroy_player(a);
        assert_eq!(engine.active(), None);
        assert!(!engine.any_live());
    }
}
