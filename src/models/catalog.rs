// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Catalog queries: filtering, sorting, and slug lookup.
//!
//! All operations are pure and composable — filter, then sort — and never
//! mutate the source catalog. Author-assigned catalog order is the
//! `Default` sort, and every sort mode is stable so ties keep that order.

use super::project::ProjectRecord;

/// Sort modes offered by the portfolio index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Default,
    TitleAz,
    TitleZa,
    YearNewest,
    YearOldest,
}

impl SortMode {
    pub const ALL: [SortMode; 5] = [
        SortMode::Default,
        SortMode::YearNewest,
        SortMode::YearOldest,
        SortMode::TitleAz,
        SortMode::TitleZa,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Default => "Default",
            SortMode::TitleAz => "Title: A-Z",
            SortMode::TitleZa => "Title: Z-A",
            SortMode::YearNewest => "Newest First",
            SortMode::YearOldest => "Oldest First",
        }
    }
}

/// Filter the catalog by a free-text query and an optional exact tool name.
///
/// An empty (or whitespace) query applies no text filtering. Matching is a
/// case-insensitive substring test against title, category, and tool names.
/// Output preserves the relative order of the input.
pub fn filter_projects<'a>(
    catalog: &'a [ProjectRecord],
    query: &str,
    tech: Option<&str>,
) -> Vec<&'a ProjectRecord> {
    let needle = query.trim().to_lowercase();

    catalog
        .iter()
        .filter(|p| {
            if !needle.is_empty() {
                let text_hit = p.title.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
                    || p.details
                        .tools
                        .iter()
                        .any(|t| t.to_lowercase().contains(&needle));
                if !text_hit {
                    return false;
                }
            }
            if let Some(tech) = tech {
                if !p.details.tools.iter().any(|t| t == tech) {
                    return false;
                }
            }
            true
        })
        .collect()
}

/// Sort a filtered result set. Stable: records that compare equal keep
/// their relative (catalog) order. Applying the same mode twice does not
/// reorder further.
pub fn sort_projects<'a>(
    mut records: Vec<&'a ProjectRecord>,
    mode: SortMode,
) -> Vec<&'a ProjectRecord> {
    match mode {
        SortMode::Default => {}
        SortMode::TitleAz => records.sort_by(|a, b| fold_title(a).cmp(&fold_title(b))),
        SortMode::TitleZa => records.sort_by(|a, b| fold_title(b).cmp(&fold_title(a))),
        SortMode::YearNewest => records.sort_by(|a, b| b.details.year.cmp(&a.details.year)),
        SortMode::YearOldest => records.sort_by(|a, b| a.details.year.cmp(&b.details.year)),
    }
    records
}

// Case-folded comparison key; good enough without pulling in ICU.
fn fold_title(p: &ProjectRecord) -> String {
    p.title.to_lowercase()
}

/// Filter then sort in one call. The shape every page actually uses.
pub fn query_catalog<'a>(
    catalog: &'a [ProjectRecord],
    query: &str,
    tech: Option<&str>,
    mode: SortMode,
) -> Vec<&'a ProjectRecord> {
    sort_projects(filter_projects(catalog, query, tech), mode)
}

/// Look up a project by slug, returning its catalog index as well so the
/// detail page can compute the wrap-around "next project" link.
pub fn find_project<'a>(
    catalog: &'a [ProjectRecord],
    id: &str,
) -> Option<(usize, &'a ProjectRecord)> {
    catalog.iter().enumerate().find(|(_, p)| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::{MediaRef, ProjectDetails};

    fn record(id: &str, title: &str, year: i32, tools: &[&str]) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            title: title.to_string(),
            category: "Test Category".to_string(),
            description: String::new(),
            still_image: String::new(),
            preview: MediaRef::embedded("vid"),
            hero: MediaRef::embedded("vid"),
            details: ProjectDetails {
                role: "Editor".to_string(),
                tools: tools.iter().map(|t| t.to_string()).collect(),
                year,
                live_url: None,
                techniques: Vec::new(),
                analysis: None,
            },
            challenge: None,
            solution: None,
            breakdown: Vec::new(),
            gallery: Vec::new(),
        }
    }

    fn sample() -> Vec<ProjectRecord> {
        vec![
            record("a", "Alpha", 2023, &["After Effects", "Premiere Pro"]),
            record("b", "Beta", 2024, &["After Effects"]),
            record("c", "Gamma", 2024, &["Blender"]),
        ]
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let catalog = sample();
        let out = filter_projects(&catalog, "", None);
        let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_filter_is_order_preserving_subset() {
        let catalog = sample();
        let out = filter_projects(&catalog, "after effects", None);
        let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_filter_matches_title_and_category() {
        let catalog = sample();
        assert_eq!(filter_projects(&catalog, "GAMMA", None).len(), 1);
        assert_eq!(filter_projects(&catalog, "test category", None).len(), 3);
        assert!(filter_projects(&catalog, "no such thing", None).is_empty());
    }

    #[test]
    fn test_tech_filter_is_exact_membership() {
        let catalog = sample();
        let out = filter_projects(&catalog, "", Some("After Effects"));
        assert_eq!(out.len(), 2);
        // Substring of a tool name must not match as a tech filter
        assert!(filter_projects(&catalog, "", Some("After")).is_empty());
    }

    #[test]
    fn test_sort_year_newest_and_title_az() {
        let catalog = vec![record("a", "Alpha", 2023, &[]), record("b", "Beta", 2024, &[])];
        let by_year = query_catalog(&catalog, "", None, SortMode::YearNewest);
        assert_eq!(by_year[0].id, "b");
        assert_eq!(by_year[1].id, "a");
        let by_title = query_catalog(&catalog, "", None, SortMode::TitleAz);
        assert_eq!(by_title[0].id, "a");
        assert_eq!(by_title[1].id, "b");
    }

    #[test]
    fn test_sort_stable_on_ties() {
        let catalog = sample();
        // b and c share a year; they must keep catalog order
        let out = sort_projects(filter_projects(&catalog, "", None), SortMode::YearNewest);
        let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn test_sort_idempotent() {
        let catalog = sample();
        for mode in SortMode::ALL {
            let once = sort_projects(filter_projects(&catalog, "", None), mode);
            let twice = sort_projects(once.clone(), mode);
            let a: Vec<&str> = once.iter().map(|p| p.id.as_str()).collect();
            let b: Vec<&str> = twice.iter().map(|p| p.id.as_str()).collect();
            assert_eq!(a, b, "mode {:?} reordered on second application", mode);
        }
    }

    #[test]
    fn test_source_catalog_untouched() {
        let catalog = sample();
        let before = catalog.clone();
        let _ = query_catalog(&catalog, "alpha", Some("After Effects"), SortMode::TitleZa);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_find_project_missing_slug() {
        let catalog = sample();
        assert!(find_project(&catalog, "missing").is_none());
        let (idx, p) = find_project(&catalog, "b").unwrap();
        assert_eq!(idx, 1);
        assert_eq!(p.title, "Beta");
    }
}
