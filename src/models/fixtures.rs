// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Shared test data.

use super::{Comment, CommentId, Emotion, Film, FilmId};
use chrono::NaiveDate;

pub fn film(id: u32, title: &str, year: i32, rating: f64) -> Film {
    Film {
        id: FilmId(id),
        title: title.to_string(),
        production_date: NaiveDate::from_ymd_opt(year, 6, 1).unwrap(),
        rating,
        poster: format!("{}.jpg", title.to_lowercase().replace(' ', "-")),
        description: String::new(),
        comments: Vec::new(),
        in_watchlist: false,
        is_watched: false,
        is_favorite: false,
    }
}

pub fn comment(id: u32) -> Comment {
    Comment {
        id: CommentId(id),
        author: "John Doe".to_string(),
        text: format!("comment {id}"),
        emotion: Emotion::Smile,
        date: NaiveDate::from_ymd_opt(2021, 3, 5)
            .unwrap()
            .and_hms_opt(14, 7, 0)
            .unwrap(),
    }
}

/// `count` films with distinct years and ratings, ids starting at 0.
pub fn films(count: u32) -> Vec<Film> {
    (0..count)
        .map(|i| film(i, &format!("Film {i}"), 1950 + i as i32, 5.0 + i as f64 / 10.0))
        .collect()
}
