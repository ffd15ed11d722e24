// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Film data structures.
//!
//! A film record is replaced as a whole whenever one of its flags or its
//! comment list changes, so every mutator here returns a new record.

use super::comment::CommentId;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Identifier of a film in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilmId(pub u32);

impl std::fmt::Display for FilmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "film#{}", self.0)
    }
}

/// One of the three independent user flags on a film.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilmFlag {
    Watchlist,
    Watched,
    Favorite,
}

/// A film with its metadata, comment references and user flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub id: FilmId,
    pub title: String,
    pub production_date: NaiveDate,
    pub rating: f64,
    pub poster: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: Vec<CommentId>,
    #[serde(default)]
    pub in_watchlist: bool,
    #[serde(default)]
    pub is_watched: bool,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Film {
    /// Production year, the only part of the date the board sorts by.
    pub fn year(&self) -> i32 {
        self.production_date.year()
    }

    /// Read a flag.
    pub fn flag(&self, flag: FilmFlag) -> bool {
        match flag {
            FilmFlag::Watchlist => self.in_watchlist,
            FilmFlag::Watched => self.is_watched,
            FilmFlag::Favorite => self.is_favorite,
        }
    }

    /// Copy of this record with exactly one flag flipped.
    pub fn toggled(&self, flag: FilmFlag) -> Film {
        let mut film = self.clone();
        match flag {
            FilmFlag::Watchlist => film.in_watchlist = !film.in_watchlist,
            FilmFlag::Watched => film.is_watched = !film.is_watched,
            FilmFlag::Favorite => film.is_favorite = !film.is_favorite,
        }
        film
    }

    /// Copy of this record with the comment list replaced.
    pub fn with_comments(&self, comments: Vec<CommentId>) -> Film {
        Film {
            comments,
            ..self.clone()
        }
    }
}
