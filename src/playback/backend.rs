// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Playback backend adapter.
//!
//! One uniform control surface over two backends: a native media clock
//! for local files and a provider-hosted embedded player. Control calls
//! made before a backend is ready are silent no-ops — never queued, never
//! an error — and end-of-media always restarts from zero so every surface
//! on the site loops seamlessly. A player only ever mutates its own
//! state.

use super::provider::{EmbedEvent, EmbedParams, EmbedPlayer, EmbedState};
use super::PlayerId;
use crate::models::project::{MediaKind, MediaRef};

/// Volume applied to an embedded player once it reports ready.
const DEFAULT_EMBED_VOLUME: f32 = 30.0;

/// Current position and duration, in seconds. A zero duration means
/// "unknown" (no metadata yet).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Progress {
    pub position: f64,
    pub duration: f64,
}

impl Progress {
    /// Position as a 0..=1 fraction, when the duration is known.
    pub fn fraction(&self) -> Option<f32> {
        if self.duration > 0.0 {
            Some((self.position / self.duration) as f32)
        } else {
            None
        }
    }
}

/// Native backend: state held directly, clock advanced by the engine.
#[derive(Debug)]
pub struct NativePlayer {
    playing: bool,
    muted: bool,
    volume: f32,
    position: f64,
    duration: f64,
}

impl NativePlayer {
    /// A native element autoplays muted, like the site's inline videos.
    fn new(duration: Option<f64>) -> Self {
        Self {
            playing: true,
            muted: true,
            volume: 100.0,
            position: 0.0,
            duration: duration.unwrap_or(0.0),
        }
    }

    fn tick(&mut self, dt: f64) {
        if !self.playing {
            return;
        }
        self.position += dt;
        if self.duration > 0.0 && self.position >= self.duration {
            // Seamless loop: wrap straight back to zero
            self.position = 0.0;
        }
    }
}

/// Connection state of an embedded backend.
enum EmbedLink {
    /// Waiting for the provider script.
    Pending,
    /// Player constructed; `ready` flips on the provider's Ready event.
    Live {
        player: Box<dyn EmbedPlayer>,
        ready: bool,
        playing: bool,
    },
}

/// Embedded backend: controls a provider player, mirrors its state.
pub struct EmbeddedHandle {
    video_id: String,
    params: EmbedParams,
    link: EmbedLink,
}

impl EmbeddedHandle {
    fn new(video_id: String, params: EmbedParams) -> Self {
        Self {
            video_id,
            params,
            link: EmbedLink::Pending,
        }
    }

    fn attach(&mut self, player: Box<dyn EmbedPlayer>) {
        self.link = EmbedLink::Live {
            player,
            ready: false,
            playing: false,
        };
    }

    fn poll(&mut self) {
        let EmbedLink::Live {
            player,
            ready,
            playing,
        } = &mut self.link
        else {
            return;
        };
        for event in player.poll_events() {
            match event {
                EmbedEvent::Ready => {
                    *ready = true;
                    if self.params.start_muted {
                        player.mute();
                    }
                    player.set_volume(DEFAULT_EMBED_VOLUME);
                    if self.params.autoplay {
                        player.play();
                    }
                }
                EmbedEvent::StateChange(EmbedState::Playing) => *playing = true,
                EmbedEvent::StateChange(EmbedState::Ended) => {
                    // The provider does not loop on its own; restart
                    // manually from zero.
                    player.seek_to(0.0);
                    player.play();
                }
                EmbedEvent::StateChange(_) => *playing = false,
            }
        }
    }
}

enum Backend {
    Native(NativePlayer),
    Embedded(EmbeddedHandle),
}

/// One mounted player instance with the uniform control surface.
pub struct Player {
    pub id: PlayerId,
    src: String,
    kind: MediaKind,
    backend: Backend,
}

impl Player {
    pub(super) fn native(id: PlayerId, media: &MediaRef) -> Self {
        Self {
            id,
            src: media.src.clone(),
            kind: MediaKind::Local,
            backend: Backend::Native(NativePlayer::new(media.duration_secs)),
        }
    }

    pub(super) fn embedded(id: PlayerId, media: &MediaRef, params: EmbedParams) -> Self {
        Self {
            id,
            src: media.src.clone(),
            kind: MediaKind::Embedded,
            backend: Backend::Embedded(EmbeddedHandle::new(media.src.clone(), params)),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub(super) fn video_id_and_params(&self) -> Option<(String, EmbedParams)> {
        match &self.backend {
            Backend::Embedded(handle) => Some((handle.video_id.clone(), handle.params.clone())),
            Backend::Native(_) => None,
        }
    }

    pub(super) fn attach_embed(&mut self, player: Box<dyn EmbedPlayer>) {
        if let Backend::Embedded(handle) = &mut self.backend {
            handle.attach(player);
        }
    }

    /// Advance clocks and drain provider events. Called once per frame by
    /// the engine.
    pub(super) fn tick(&mut self, dt: f64) {
        match &mut self.backend {
            Backend::Native(native) => native.tick(dt),
            Backend::Embedded(handle) => handle.poll(),
        }
    }

    /// Release the backend resource. No callback fires afterwards.
    pub(super) fn teardown(&mut self) {
        if let Backend::Embedded(handle) = &mut self.backend {
            if let EmbedLink::Live { player, .. } = &mut handle.link {
                player.destroy();
            }
            handle.link = EmbedLink::Pending;
        }
    }

    pub fn is_ready(&self) -> bool {
        match &self.backend {
            Backend::Native(_) => true,
            Backend::Embedded(handle) => {
                matches!(handle.link, EmbedLink::Live { ready: true, .. })
            }
        }
    }

    pub fn is_playing(&self) -> bool {
        match &self.backend {
            Backend::Native(native) => native.playing,
            Backend::Embedded(handle) => {
                matches!(handle.link, EmbedLink::Live { playing: true, .. })
            }
        }
    }

    pub fn is_muted(&self) -> bool {
        match &self.backend {
            Backend::Native(native) => native.muted,
            Backend::Embedded(handle) => match &handle.link {
                EmbedLink::Live { player, .. } => player.is_muted(),
                EmbedLink::Pending => handle.params.start_muted,
            },
        }
    }

    pub fn volume(&self) -> f32 {
        match &self.backend {
            Backend::Native(native) => native.volume,
            Backend::Embedded(handle) => match &handle.link {
                EmbedLink::Live { player, .. } => player.volume(),
                EmbedLink::Pending => DEFAULT_EMBED_VOLUME,
            },
        }
    }

    pub fn play(&mut self) {
        match &mut self.backend {
            Backend::Native(native) => native.playing = true,
            Backend::Embedded(handle) => {
                if let EmbedLink::Live {
                    player,
                    ready: true,
                    ..
                } = &mut handle.link
                {
                    player.play();
                }
            }
        }
    }

    pub fn pause(&mut self) {
        match &mut self.backend {
            Backend::Native(native) => native.playing = false,
            Backend::Embedded(handle) => {
                if let EmbedLink::Live {
                    player,
                    ready: true,
                    ..
                } = &mut handle.link
                {
                    player.pause();
                }
            }
        }
    }

    pub fn toggle_mute(&mut self) {
        match &mut self.backend {
            Backend::Native(native) => native.muted = !native.muted,
            Backend::Embedded(handle) => {
                if let EmbedLink::Live {
                    player,
                    ready: true,
                    ..
                } = &mut handle.link
                {
                    if player.is_muted() {
                        player.un_mute();
                    } else {
                        player.mute();
                    }
                }
            }
        }
    }

    pub fn seek(&mut self, seconds: f64) {
        match &mut self.backend {
            Backend::Native(native) => {
                let max = if native.duration > 0.0 {
                    native.duration
                } else {
                    f64::MAX
                };
                native.position = seconds.clamp(0.0, max);
            }
            Backend::Embedded(handle) => {
                if let EmbedLink::Live {
                    player,
                    ready: true,
                    ..
                } = &mut handle.link
                {
                    player.seek_to(seconds);
                }
            }
        }
    }

    /// Volume in percent, 0..=100.
    pub fn set_volume(&mut self, percent: f32) {
        match &mut self.backend {
            Backend::Native(native) => native.volume = percent.clamp(0.0, 100.0),
            Backend::Embedded(handle) => {
                if let EmbedLink::Live {
                    player,
                    ready: true,
                    ..
                } = &mut handle.link
                {
                    player.set_volume(percent);
                }
            }
        }
    }

    pub fn progress(&self) -> Progress {
        match &self.backend {
            Backend::Native(native) => Progress {
                position: native.position,
                duration: native.duration,
            },
            Backend::Embedded(handle) => match &handle.link {
                EmbedLink::Live { player, .. } => Progress {
                    position: player.current_time(),
                    duration: player.duration(),
                },
                EmbedLink::Pending => Progress::default(),
            },
        }
    }
}

#[cfg(test)]
pub(super) mod test_support {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Hand-driven embedded player shared with the test through an Rc so
    /// events can be injected after attachment.
    #[derive(Default)]
    pub struct Scripted {
        pub playing: bool,
        pub muted: bool,
        pub volume: f32,
        pub position: f64,
        pub duration: f64,
        pub events: Vec<EmbedEvent>,
        pub destroyed: bool,
    }

    pub struct ScriptedPlayer(pub Rc<RefCell<Scripted>>);

    impl EmbedPlayer for ScriptedPlayer {
        fn play(&mut self) {
            self.0.borrow_mut().playing = true;
        }
        fn pause(&mut self) {
            self.0.borrow_mut().playing = false;
        }
        fn mute(&mut self) {
            self.0.borrow_mut().muted = true;
        }
        fn un_mute(&mut self) {
            self.0.borrow_mut().muted = false;
        }
        fn is_muted(&self) -> bool {
            self.0.borrow().muted
        }
        fn seek_to(&mut self, seconds: f64) {
            self.0.borrow_mut().position = seconds;
        }
        fn set_volume(&mut self, percent: f32) {
            self.0.borrow_mut().volume = percent;
        }
        fn volume(&self) -> f32 {
            self.0.borrow().volume
        }
        fn current_time(&self) -> f64 {
            self.0.borrow().position
        }
        fn duration(&self) -> f64 {
            self.0.borrow().duration
        }
        fn poll_events(&mut self) -> Vec<EmbedEvent> {
            std::mem::take(&mut self.0.borrow_mut().events)
        }
        fn destroy(&mut self) {
            let mut s = self.0.borrow_mut();
            s.destroyed = true;
            s.playing = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{Scripted, ScriptedPlayer};
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn embedded_player() -> (Player, Rc<RefCell<Scripted>>) {
        let media = MediaRef::embedded("abc123");
        let params = EmbedParams::looping_preview(&media.src);
        let mut player = Player::embedded(PlayerId::new(), &media, params);
        let remote = Rc::new(RefCell::new(Scripted::default()));
        player.attach_embed(Box::new(ScriptedPlayer(Rc::clone(&remote))));
        (player, remote)
    }

    #[test]
    fn test_native_autoplays_and_loops() {
        let media = MediaRef::local("clip.mp4", 10.0);
        let mut player = Player::native(PlayerId::new(), &media);
        assert!(player.is_ready());
        assert!(player.is_playing());
        assert!(player.is_muted());
        player.tick(9.5);
        assert!((player.progress().position - 9.5).abs() < 1e-9);
        player.tick(1.0);
        // Wrapped back to zero, still playing
        assert_eq!(player.progress().position, 0.0);
        assert!(player.is_playing());
    }

    #[test]
    fn test_native_unknown_duration_never_wraps() {
        let media = MediaRef {
            kind: MediaKind::Local,
            src: "clip.mp4".to_string(),
            duration_secs: None,
        };
        let mut player = Player::native(PlayerId::new(), &media);
        player.tick(500.0);
        assert_eq!(player.progress().position, 500.0);
        assert!(player.progress().fraction().is_none());
    }

    #[test]
    fn test_controls_before_ready_are_noops() {
        let (mut player, remote) = embedded_player();
        assert!(!player.is_ready());
        player.play();
        player.seek(42.0);
        player.set_volume(80.0);
        player.toggle_mute();
        let state = remote.borrow();
        assert!(!state.playing);
        assert_eq!(state.position, 0.0);
        assert_eq!(state.volume, 0.0);
        assert!(!state.muted);
    }

    #[test]
    fn test_ready_applies_autoplay_and_mute() {
        let (mut player, remote) = embedded_player();
        remote.borrow_mut().events.push(EmbedEvent::Ready);
        player.tick(0.0);
        assert!(player.is_ready());
        let state = remote.borrow();
        assert!(state.playing);
        assert!(state.muted);
        assert_eq!(state.volume, DEFAULT_EMBED_VOLUME);
    }

    #[test]
    fn test_ended_restarts_from_zero() {
        let (mut player, remote) = embedded_player();
        remote.borrow_mut().events.push(EmbedEvent::Ready);
        player.tick(0.0);
        {
            let mut state = remote.borrow_mut();
            state.position = 120.0;
            state.playing = false;
            state.events.push(EmbedEvent::StateChange(EmbedState::Ended));
        }
        player.tick(0.0);
        let state = remote.borrow();
        assert_eq!(state.position, 0.0);
        assert!(state.playing);
    }

    #[test]
    fn test_playing_flag_tracks_state_changes() {
        let (mut player, remote) = embedded_player();
        remote.borrow_mut().events.push(EmbedEvent::Ready);
        player.tick(0.0);
        remote
            .borrow_mut()
            .events
            .push(EmbedEvent::StateChange(EmbedState::Playing));
        player.tick(0.0);
        assert!(player.is_playing());
        remote
            .borrow_mut()
            .events
            .push(EmbedEvent::StateChange(EmbedState::Buffering));
        player.tick(0.0);
        assert!(!player.is_playing());
    }

    #[test]
    fn test_teardown_destroys_remote() {
        let (mut player, remote) = embedded_player();
        player.teardown();
        assert!(remote.borrow().destroyed);
        assert!(!player.is_ready());
    }
}
