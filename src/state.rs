// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Shared UI state.
//!
//! The application-level context passed by reference to the components
//! that need it: the custom-cursor variant, the showreel overlay flag,
//! and the session-scoped flags. Last write wins; there are no other
//! invariants. Nothing here is global and nothing is persisted to disk.

/// Visual state of the custom cursor, set by whichever widget the
/// pointer is over this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorVariant {
    #[default]
    Default,
    /// Enlarged ring over clickable surfaces.
    Link,
    /// Small dot over copy.
    Text,
}

/// Flags that live exactly as long as the process — the desktop analogue
/// of session storage. Deliberately not written to disk, so a restart
/// replays the gated experiences.
#[derive(Debug, Default)]
pub struct SessionFlags {
    portfolio_unlocked: bool,
}

impl SessionFlags {
    /// Whether the scroll-gated archive intro has been passed this
    /// session.
    pub fn portfolio_unlocked(&self) -> bool {
        self.portfolio_unlocked
    }

    pub fn unlock_portfolio(&mut self) {
        if !self.portfolio_unlocked {
            log::info!("portfolio archive unlocked for this session");
        }
        self.portfolio_unlocked = true;
    }
}

/// Context shared across pages and overlay widgets.
#[derive(Debug, Default)]
pub struct AppShared {
    pub cursor: CursorVariant,
    reel_playing: bool,
    pub session: SessionFlags,
}

impl AppShared {
    pub fn is_reel_playing(&self) -> bool {
        self.reel_playing
    }

    pub fn play_reel(&mut self) {
        self.reel_playing = true;
    }

    pub fn stop_reel(&mut self) {
        self.reel_playing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_flags_default_locked() {
        let shared = AppShared::default();
        assert!(!shared.session.portfolio_unlocked());
        assert!(!shared.is_reel_playing());
        assert_eq!(shared.cursor, CursorVariant::Default);
    }

    #[test]
    fn test_unlock_is_sticky() {
        let mut flags = SessionFlags::default();
        flags.unlock_portfolio();
        flags.unlock_portfolio();
        assert!(flags.portfolio_unlocked());
    }
}
