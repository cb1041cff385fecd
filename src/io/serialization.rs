// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Catalog serialization and deserialization.
//!
//! The project catalog can be exchanged as YAML or JSON. Imports enforce
//! the catalog's one structural invariant: slugs are unique, since the
//! slug is the sole detail-page lookup key.

use crate::models::project::ProjectRecord;
use anyhow::{bail, Result};
use std::collections::HashSet;
use std::path::Path;

/// Export a catalog to YAML format.
pub fn export_yaml(catalog: &[ProjectRecord], path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(catalog)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export a catalog to JSON format.
pub fn export_json(catalog: &[ProjectRecord], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Import a catalog from YAML format.
pub fn import_yaml(path: &Path) -> Result<Vec<ProjectRecord>> {
    let yaml = std::fs::read_to_string(path)?;
    parse_yaml(&yaml)
}

/// Import a catalog from JSON format.
pub fn import_json(path: &Path) -> Result<Vec<ProjectRecord>> {
    let json = std::fs::read_to_string(path)?;
    parse_json(&json)
}

pub fn parse_yaml(yaml: &str) -> Result<Vec<ProjectRecord>> {
    let catalog: Vec<ProjectRecord> = serde_yaml::from_str(yaml)?;
    validate(&catalog)?;
    Ok(catalog)
}

pub fn parse_json(json: &str) -> Result<Vec<ProjectRecord>> {
    let catalog: Vec<ProjectRecord> = serde_json::from_str(json)?;
    validate(&catalog)?;
    Ok(catalog)
}

fn validate(catalog: &[ProjectRecord]) -> Result<()> {
    let mut seen = HashSet::new();
    for record in catalog {
        if !seen.insert(record.id.as_str()) {
            bail!("duplicate project slug: {}", record.id);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::data::built_in_catalog;

    #[test]
    fn test_yaml_roundtrip_preserves_order() {
        let catalog = built_in_catalog();
        let yaml = serde_yaml::to_string(&catalog).unwrap();
        let parsed = parse_yaml(&yaml).unwrap();
        let ids: Vec<&str> = parsed.iter().map(|p| p.id.as_str()).collect();
        let expected: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let mut catalog = built_in_catalog();
        let dupe = catalog[0].clone();
        catalog.push(dupe);
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(parse_json(&json).is_err());
    }

    #[test]
    fn test_optional_blocks_default_empty() {
        let json = r#"[{
            "id": "bare",
            "title": "Bare",
            "category": "Test",
            "description": "",
            "still_image": "",
            "preview": {"kind": "embedded", "src": "vid"},
            "hero": {"kind": "embedded", "src": "vid"},
            "details": {"role": "Editor", "tools": ["After Effects"], "year": 2024}
        }]"#;
        let parsed = parse_json(json).unwrap();
        assert!(parsed[0].breakdown.is_empty());
        assert!(parsed[0].gallery.is_empty());
        assert!(parsed[0].challenge.is_none());
        assert!(parsed[0].preview.duration_secs.is_none());
    }
}
