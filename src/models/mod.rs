// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: films, comments, filters and their observers.

pub mod catalog;
pub mod comment;
pub mod film;
pub mod films;
pub mod filter;
pub mod observable;

#[cfg(test)]
pub mod fixtures;

pub use catalog::Catalog;
pub use comment::{Comment, CommentId, CommentsModel, Emotion};
pub use film::{Film, FilmFlag, FilmId};
pub use films::{FilmEvent, FilmsModel, UpdateKind, UserAction};
pub use filter::{FilterEvent, FilterKind, FilterModel};
pub use observable::{ListenerId, Mailbox};
