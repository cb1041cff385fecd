// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Project record data structures.
//!
//! This module defines the catalog's core types: project records, their
//! media references, and the optional breakdown/gallery blocks. All types
//! serialize with serde so a catalog can be exchanged as YAML or JSON.

use serde::{Deserialize, Serialize};

/// Which playback backend a media reference targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A directly playable local media file.
    Local,
    /// A provider-hosted video addressed by its embed id.
    Embedded,
}

/// A reference to a playable or displayable media source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRef {
    pub kind: MediaKind,
    /// File path for `Local`, provider video id for `Embedded`.
    pub src: String,
    /// Duration metadata for local sources. A media element learns this
    /// from the file; a static catalog carries it alongside the path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
}

impl MediaRef {
    pub fn local(src: impl Into<String>, duration_secs: f64) -> Self {
        Self {
            kind: MediaKind::Local,
            src: src.into(),
            duration_secs: Some(duration_secs),
        }
    }

    pub fn embedded(video_id: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Embedded,
            src: video_id.into(),
            duration_secs: None,
        }
    }
}

/// Credits and production metadata for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub role: String,
    /// Tool names in author-assigned order.
    pub tools: Vec<String>,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub techniques: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

/// One step of a process breakdown (plate, comp pass, grade, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownStep {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub media: MediaRef,
}

/// A single portfolio entry.
///
/// `id` is the unique slug used for detail-page lookup; every list keeps
/// its author-assigned order, which doubles as the default sort order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    /// Still image shown on the project card before any video plays.
    pub still_image: String,
    pub preview: MediaRef,
    pub hero: MediaRef,
    pub details: ProjectDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub breakdown: Vec<BreakdownStep>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<MediaRef>,
}

impl ProjectRecord {
    /// The text shown in the "how I edited" section: the solution when
    /// present, otherwise the challenge.
    pub fn edit_notes(&self) -> Option<&str> {
        self.solution.as_deref().or(self.challenge.as_deref())
    }
}
