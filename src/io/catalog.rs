// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalog deserialization.
//!
//! Catalogs are read from YAML or JSON, picked by file extension.

use crate::models::Catalog;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Parse a catalog from YAML text.
pub fn parse_yaml(yaml: &str) -> Result<Catalog> {
    let catalog = serde_yaml::from_str(yaml)?;
    Ok(catalog)
}

/// Parse a catalog from JSON text.
pub fn parse_json(json: &str) -> Result<Catalog> {
    let catalog = serde_json::from_str(json)?;
    Ok(catalog)
}

/// Import a catalog file, choosing the format from its extension.
pub fn import(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let extension = path.extension().and_then(|s| s.to_str());
    let catalog = match extension {
        Some("yaml") | Some("yml") => parse_yaml(&text),
        Some("json") => parse_json(&text),
        _ => bail!("Unsupported catalog extension: {:?}", extension),
    }
    .with_context(|| format!("Invalid catalog {}", path.display()))?;

    log::info!(
        "Imported {} films and {} comments from {}",
        catalog.films.len(),
        catalog.comments.len(),
        path.display()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use crate::models::{CommentId, Emotion, FilmId};

    use super::*;

    const YAML: &str = r#"
films:
  - id: 0
    title: Made for Each Other
    production_date: 1939-02-10
    rating: 5.8
    poster: made-for-each-other.png
    comments: [0, 1]
    in_watchlist: true
  - id: 1
    title: The Great Flamarion
    production_date: 1945-03-30
    rating: 8.9
    poster: the-great-flamarion.jpg
    is_favorite: true
comments:
  - id: 0
    author: Tim Macoveev
    text: Interesting setting and a good cast
    emotion: smile
    date: 2019-12-31T23:59:00
  - id: 1
    author: John Doe
    text: Booooooooooring
    emotion: sleeping
    date: 2020-01-02T10:15:00
"#;

    #[test]
    fn test_parse_yaml_catalog() {
        let catalog = parse_yaml(YAML).unwrap();

        assert_eq!(catalog.films.len(), 2);
        let first = &catalog.films[0];
        assert_eq!(first.id, FilmId(0));
        assert_eq!(first.year(), 1939);
        assert_eq!(first.comments, vec![CommentId(0), CommentId(1)]);
        assert!(first.in_watchlist);
        assert!(!first.is_watched);
        assert_eq!(first.description, "");

        assert_eq!(catalog.comments[1].emotion, Emotion::Sleeping);
        assert_eq!(catalog.comments[1].display_date(), "02/01/2020 10:15");
    }

    #[test]
    fn test_parse_json_catalog() {
        let json = r#"{"films": [{"id": 4, "title": "Santa Claus Conquers the Martians",
            "production_date": "1964-11-14", "rating": 2.3, "poster": "santa.jpg"}]}"#;

        let catalog = parse_json(json).unwrap();

        assert_eq!(catalog.films[0].id, FilmId(4));
        assert!(catalog.comments.is_empty());
    }

    #[test]
    fn test_unknown_emotion_is_rejected() {
        let yaml = "comments:\n  - {id: 0, author: a, text: b, emotion: bored, date: 2020-01-01T00:00:00}\n";
        assert!(parse_yaml(yaml).is_err());
    }

    #[test]
    fn test_demo_catalog_parses() {
        let catalog = parse_yaml(include_str!("../../demos/catalog.yaml")).unwrap();
        assert_eq!(catalog.films.len(), 12);
        assert_eq!(catalog.comments.len(), 6);
    }

    #[test]
    fn test_unsupported_extension() {
        let path = std::env::temp_dir().join("filmboard-catalog-test.txt");
        std::fs::write(&path, "films: []").unwrap();

        let err = import(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported"));

        std::fs::remove_file(&path).unwrap();
    }
}
