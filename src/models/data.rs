// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Built-in site configuration and project catalog.
//!
//! The catalog ships in-memory; File -> Open Catalog can replace it from a
//! YAML/JSON file with the same record shape.

use super::project::{BreakdownStep, MediaRef, ProjectDetails, ProjectRecord};

/// Site owner identity shown on the home page.
pub struct SiteInfo {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    /// Embed id of the full showreel played by the fullscreen overlay.
    pub showreel_id: &'static str,
}

pub const SITE_INFO: SiteInfo = SiteInfo {
    name: "VIKAS",
    role: "Motion Director & Creative Technologist",
    tagline: "A motion-first developer crafting cinematic digital experiences.",
    showreel_id: "CPnMek8iU1U",
};

pub const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("LinkedIn", "https://www.linkedin.com/in/vikasbala19"),
    ("Behance", "https://www.behance.net/vikasbala"),
    ("Github", "https://github.com/viku99"),
    ("Instagram", "https://www.instagram.com/zorox.x_"),
];

/// Tool groups offered by the portfolio tech filter.
pub const TECH_CATEGORIES: [(&str, &[&str]); 2] = [
    (
        "Motion Engineering",
        &["After Effects", "Premiere Pro", "Time Remapping"],
    ),
    (
        "Advanced Techniques",
        &["AI Narrative Synthesis", "Sound Engineering", "Beat-Accuracy"],
    ),
];

/// The author-ordered project catalog. Order here is the default sort.
pub fn built_in_catalog() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord {
            id: "gaza-briefing".to_string(),
            title: "The Social Talks: Gaza Briefing".to_string(),
            category: "Editorial & News Media".to_string(),
            description: "A rapid-response digital newsroom workflow. High-end \
                motion design applied to breaking news, holding cinematic \
                quality under extreme deadlines."
                .to_string(),
            still_image: "assets/stills/gaza-briefing.jpg".to_string(),
            preview: MediaRef::embedded("oOVN2OKMAe4"),
            hero: MediaRef::embedded("oOVN2OKMAe4"),
            details: ProjectDetails {
                role: "Motion Director & Editor".to_string(),
                tools: vec![
                    "After Effects".to_string(),
                    "Premiere Pro".to_string(),
                    "Adobe Audition".to_string(),
                ],
                year: 2024,
                live_url: None,
                techniques: vec![
                    "Dynamic Lower Thirds".to_string(),
                    "Expression-based Animation".to_string(),
                    "Luma Matte Transitions".to_string(),
                    "Kinetic Typography".to_string(),
                ],
                analysis: Some(
                    "The primary challenge was the 2-hour window from raw \
                     footage to final export. A modular AE project feeds data \
                     into a main composition through a CSV controller, so the \
                     editorial team can update text without opening nested \
                     comps."
                        .to_string(),
                ),
            },
            challenge: Some(
                "The news cycle demands near-instant turnarounds: broadcast \
                 quality motion graphics and sound design inside a 2-hour \
                 window."
                    .to_string(),
            ),
            solution: Some(
                "Every scene was pre-composed with dynamic link workflows, \
                 with expressions automating text animation for rapid content \
                 replacement."
                    .to_string(),
            ),
            breakdown: Vec::new(),
            gallery: Vec::new(),
        },
        ProjectRecord {
            id: "precision-time-remap".to_string(),
            title: "Precision Time-Remap: Gameplay Study".to_string(),
            category: "Motion & Rhythm Edit".to_string(),
            description: "A study in absolute control over pacing and \
                frame-data: manual time-remapping and speed ramping marrying \
                gameplay visuals to audio transients."
                .to_string(),
            still_image: "assets/stills/time-remap.jpg".to_string(),
            preview: MediaRef::embedded("T8U9eM2M0tg"),
            hero: MediaRef::embedded("T8U9eM2M0tg"),
            details: ProjectDetails {
                role: "Lead Motion Designer".to_string(),
                tools: vec!["After Effects".to_string(), "Time Remapping".to_string()],
                year: 2024,
                live_url: None,
                techniques: vec![
                    "Manual Time Remapping".to_string(),
                    "Graph Editor Velocity Control".to_string(),
                    "Sub-frame Audio Alignment".to_string(),
                ],
                analysis: Some(
                    "Every hit is a manually keyed time-remap value: extreme \
                     S-curves accelerate into the impact and linger on the \
                     follow-through, with audio transients as keyframe \
                     references."
                        .to_string(),
                ),
            },
            challenge: Some(
                "Perfect synchronization without automated plugins — every \
                 hit had to land through visual physics, not filters."
                    .to_string(),
            ),
            solution: Some(
                "Edited entirely in the graph editor with manual \
                 time-remapping, aligning speed curves to audio waveform \
                 peaks frame by frame."
                    .to_string(),
            ),
            breakdown: vec![
                BreakdownStep {
                    title: "Plate".to_string(),
                    description: Some("Raw capture, untouched.".to_string()),
                    media: MediaRef::local("assets/breakdown/remap-plate.mp4", 12.0),
                },
                BreakdownStep {
                    title: "Remap Pass".to_string(),
                    description: Some(
                        "Velocity curves keyed against the audio transients.".to_string(),
                    ),
                    media: MediaRef::local("assets/breakdown/remap-pass.mp4", 12.0),
                },
                BreakdownStep {
                    title: "Final Grade".to_string(),
                    description: None,
                    media: MediaRef::local("assets/breakdown/remap-grade.mp4", 12.0),
                },
            ],
            gallery: vec![
                MediaRef::local("assets/gallery/remap-01.mp4", 8.0),
                MediaRef::embedded("T8U9eM2M0tg"),
            ],
        },
        ProjectRecord {
            id: "noir-title-sequence".to_string(),
            title: "Noir Title Sequence".to_string(),
            category: "Title Design".to_string(),
            description: "A self-initiated title sequence built around \
                high-contrast typography, film grain, and a slow parallax \
                camera."
                .to_string(),
            still_image: "assets/stills/noir-titles.jpg".to_string(),
            preview: MediaRef::local("assets/previews/noir-titles.mp4", 24.0),
            hero: MediaRef::local("assets/hero/noir-titles.mp4", 96.0),
            details: ProjectDetails {
                role: "Designer & Animator".to_string(),
                tools: vec![
                    "After Effects".to_string(),
                    "Sound Engineering".to_string(),
                ],
                year: 2023,
                live_url: Some("https://www.behance.net/vikasbala".to_string()),
                techniques: vec![
                    "Parallax Camera Rigs".to_string(),
                    "Procedural Grain".to_string(),
                ],
                analysis: None,
            },
            challenge: None,
            solution: Some(
                "Layered 2.5D camera rigs with procedural grain passes, cut \
                 to a custom sound bed."
                    .to_string(),
            ),
            breakdown: Vec::new(),
            gallery: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_unique() {
        let catalog = built_in_catalog();
        for (i, a) in catalog.iter().enumerate() {
            for b in catalog.iter().skip(i + 1) {
                assert_ne!(a.id, b.id, "duplicate slug in built-in catalog");
            }
        }
    }

    #[test]
    fn test_catalog_records_complete() {
        for p in built_in_catalog() {
            assert!(!p.title.is_empty());
            assert!(!p.details.tools.is_empty());
            assert!(p.details.year >= 2000);
        }
    }
}
