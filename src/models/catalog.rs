// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalog file contents.
//!
//! A catalog seeds the film collection and the comment store on startup or
//! when the user opens another catalog file.

use super::{comment::Comment, film::Film};
use serde::{Deserialize, Serialize};

/// Complete catalog data for deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub films: Vec<Film>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Catalog {
    /// Create a catalog from films and their comments.
    #[cfg(test)]
    pub fn new(films: Vec<Film>, comments: Vec<Comment>) -> Self {
        Self { films, comments }
    }
}
