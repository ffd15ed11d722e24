// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! User gestures reported by the frontend.

use super::keys::KeyPress;
use crate::models::{CommentId, Emotion, FilmFlag, FilmId, FilterKind};
use crate::util::sort::SortKind;

/// Part of a film card that was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRegion {
    Poster,
    Title,
    Comments,
    Description,
}

impl CardRegion {
    pub fn opens_details(self) -> bool {
        matches!(self, CardRegion::Poster | CardRegion::Title | CardRegion::Comments)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardGesture {
    Click(CardRegion),
    Toggle(FilmFlag),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsGesture {
    Close,
    Toggle(FilmFlag),
    PickEmotion(Emotion),
    EditText(String),
    /// Key pressed while the composer has focus.
    Key(KeyPress),
    DeleteComment(CommentId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterGesture {
    Select(FilterKind),
    Statistics,
}

/// Everything the frontend can report to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Card(FilmId, CardGesture),
    Details(FilmId, DetailsGesture),
    Filter(FilterGesture),
    Sort(SortKind),
    LoadMore,
    /// Key pressed anywhere on the page.
    Key(KeyPress),
}
