// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Script bootstrap singleton.
//!
//! The embed provider's API script is fetched at most once per process.
//! Player instances that mount before the script is ready are queued and
//! serviced exactly once, in enqueue order, when readiness fires; a mount
//! after readiness is serviced immediately. A fetch that never completes
//! leaves every waiter permanently pending — no retry, no timeout.

use super::provider::{EmbedParams, EmbedPlayer, EmbedScriptLoader};
use super::PlayerId;
use std::collections::VecDeque;
use std::sync::mpsc::Receiver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptState {
    Unrequested,
    Loading,
    Ready,
}

pub struct ScriptBootstrap {
    loader: Box<dyn EmbedScriptLoader>,
    state: ScriptState,
    waiters: VecDeque<PlayerId>,
    ready_rx: Option<Receiver<()>>,
}

impl ScriptBootstrap {
    pub fn new(loader: Box<dyn EmbedScriptLoader>) -> Self {
        Self {
            loader,
            state: ScriptState::Unrequested,
            waiters: VecDeque::new(),
            ready_rx: None,
        }
    }

    pub fn state(&self) -> ScriptState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == ScriptState::Ready
    }

    /// Register a player that needs the script. Returns true if the script
    /// is already ready (the caller may create its player right away);
    /// otherwise the id is queued and will come back out of [`poll`] once.
    ///
    /// The first call in the process kicks off the fetch; later calls
    /// during loading only enqueue.
    pub fn request(&mut self, id: PlayerId) -> bool {
        match self.state {
            ScriptState::Ready => true,
            ScriptState::Loading => {
                self.waiters.push_back(id);
                false
            }
            ScriptState::Unrequested => {
                log::info!("fetching embed provider script");
                self.ready_rx = Some(self.loader.begin_load());
                self.state = ScriptState::Loading;
                self.waiters.push_back(id);
                false
            }
        }
    }

    /// Drop a queued waiter (player destroyed before readiness).
    pub fn cancel(&mut self, id: PlayerId) {
        self.waiters.retain(|w| *w != id);
    }

    /// Observe the fetch. On the loading -> ready transition, returns every
    /// queued waiter in enqueue order; empty otherwise.
    pub fn poll(&mut self) -> Vec<PlayerId> {
        if self.state != ScriptState::Loading {
            return Vec::new();
        }
        let fired = self
            .ready_rx
            .as_ref()
            .map(|rx| rx.try_recv().is_ok())
            .unwrap_or(false);
        if !fired {
            return Vec::new();
        }
        self.state = ScriptState::Ready;
        self.ready_rx = None;
        let drained: Vec<PlayerId> = self.waiters.drain(..).collect();
        log::info!("embed script ready, {} player(s) waiting", drained.len());
        drained
    }

    /// Construct an embedded player. Returns None until the script is
    /// ready.
    pub fn create_player(
        &mut self,
        video_id: &str,
        params: &EmbedParams,
    ) -> Option<Box<dyn EmbedPlayer>> {
        if !self.is_ready() {
            return None;
        }
        Some(self.loader.create_player(video_id, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::provider::EmbedEvent;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::mpsc::{channel, Sender};

    struct NullPlayer;

    impl EmbedPlayer for NullPlayer {
        fn play(&mut self) {}
        fn pause(&mut self) {}
        fn mute(&mut self) {}
        fn un_mute(&mut self) {}
        fn is_muted(&self) -> bool {
            true
        }
        fn seek_to(&mut self, _seconds: f64) {}
        fn set_volume(&mut self, _percent: f32) {}
        fn volume(&self) -> f32 {
            0.0
        }
        fn current_time(&self) -> f64 {
            0.0
        }
        fn duration(&self) -> f64 {
            0.0
        }
        fn poll_events(&mut self) -> Vec<EmbedEvent> {
            Vec::new()
        }
        fn destroy(&mut self) {}
    }

    /// Loader with a hand-held readiness trigger and a begin_load counter.
    struct TestLoader {
        begin_calls: Rc<Cell<usize>>,
        trigger_out: Sender<Sender<()>>,
    }

    impl EmbedScriptLoader for TestLoader {
        fn begin_load(&mut self) -> Receiver<()> {
            self.begin_calls.set(self.begin_calls.get() + 1);
            let (tx, rx) = channel();
            let _ = self.trigger_out.send(tx);
            rx
        }

        fn create_player(
            &mut self,
            _video_id: &str,
            _params: &EmbedParams,
        ) -> Box<dyn EmbedPlayer> {
            Box::new(NullPlayer)
        }
    }

    /// Bootstrap primed with one waiter, plus the readiness trigger and
    /// the begin_load call counter.
    fn bootstrap_with_trigger() -> (ScriptBootstrap, Sender<()>, Rc<Cell<usize>>) {
        let (side_tx, side_rx) = channel();
        let calls = Rc::new(Cell::new(0));
        let mut bootstrap = ScriptBootstrap::new(Box::new(TestLoader {
            begin_calls: Rc::clone(&calls),
            trigger_out: side_tx,
        }));
        assert!(!bootstrap.request(PlayerId::new()));
        let trigger = side_rx.try_recv().expect("begin_load should have run");
        (bootstrap, trigger, calls)
    }

    #[test]
    fn test_script_fetch_happens_once() {
        let (mut bootstrap, _trigger, calls) = bootstrap_with_trigger();
        assert!(!bootstrap.request(PlayerId::new()));
        assert!(!bootstrap.request(PlayerId::new()));
        assert_eq!(bootstrap.state(), ScriptState::Loading);
        // Three mounts, one fetch, nothing drained yet
        assert_eq!(calls.get(), 1);
        assert!(bootstrap.poll().is_empty());
    }

    #[test]
    fn test_waiters_drain_once_in_order() {
        let (mut bootstrap, trigger, _calls) = bootstrap_with_trigger();
        let b = PlayerId::new();
        let c = PlayerId::new();
        bootstrap.request(b);
        bootstrap.request(c);

        trigger.send(()).unwrap();
        let drained = bootstrap.poll();
        assert_eq!(drained.len(), 3);
        assert_eq!(drained[1], b);
        assert_eq!(drained[2], c);
        // Second poll yields nothing; the queue is cleared
        assert!(bootstrap.poll().is_empty());
        assert!(bootstrap.is_ready());
    }

    #[test]
    fn test_request_after_ready_is_immediate() {
        let (mut bootstrap, trigger, _calls) = bootstrap_with_trigger();
        trigger.send(()).unwrap();
        let _ = bootstrap.poll();
        assert!(bootstrap.request(PlayerId::new()));
        let params = EmbedParams::looping_preview("vid");
        assert!(bootstrap.create_player("vid", &params).is_some());
    }

    #[test]
    fn test_cancel_drops_waiter() {
        let (mut bootstrap, trigger, _calls) = bootstrap_with_trigger();
        let b = PlayerId::new();
        bootstrap.request(b);
        bootstrap.cancel(b);
        trigger.send(()).unwrap();
        let drained = bootstrap.poll();
        assert_eq!(drained.len(), 1);
        assert!(!drained.contains(&b));
    }

    #[test]
    fn test_create_player_refused_before_ready() {
        let (mut bootstrap, _trigger, _calls) = bootstrap_with_trigger();
        let params = EmbedParams::looping_preview("vid");
        assert!(bootstrap.create_player("vid", &params).is_none());
    }

    #[test]
    fn test_stalled_fetch_stays_loading() {
        let (mut bootstrap, trigger, _calls) = bootstrap_with_trigger();
        // Trigger never fires: state stays Loading forever, by design
        for _ in 0..10 {
            assert!(bootstrap.poll().is_empty());
        }
        assert_eq!(bootstrap.state(), ScriptState::Loading);
        drop(trigger);
    }
}
