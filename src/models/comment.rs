// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Comments and the canonical comment store.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Sequential comment identifier. Never reused after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub u32);

/// Reaction icon attached to a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    #[default]
    Smile,
    Sleeping,
    Puke,
    Angry,
}

impl Emotion {
    pub const ALL: [Emotion; 4] = [Emotion::Smile, Emotion::Sleeping, Emotion::Puke, Emotion::Angry];

    pub fn label(self) -> &'static str {
        match self {
            Emotion::Smile => "smile",
            Emotion::Sleeping => "sleeping",
            Emotion::Puke => "puke",
            Emotion::Angry => "angry",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub text: String,
    #[serde(default)]
    pub emotion: Emotion,
    pub date: NaiveDateTime,
}

impl Comment {
    /// Timestamp as shown under a comment.
    pub fn display_date(&self) -> String {
        self.date.format("%d/%m/%Y %H:%M").to_string()
    }
}

/// Canonical comment collection. Passive: presenters drive additions and removals.
#[derive(Debug, Default)]
pub struct CommentsModel {
    comments: Vec<Comment>,
    /// Wider than [`CommentId`] so a store holding `u32::MAX` can't wrap.
    next_id: u64,
}

impl CommentsModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection.
    pub fn set_comments(&mut self, comments: Vec<Comment>) {
        let after_highest = comments.iter().map(|c| u64::from(c.id.0) + 1).max().unwrap_or(0);
        self.next_id = after_highest.max(comments.len() as u64);
        self.comments = comments;
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn get(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }

    /// Reserve the next identifier, or `None` once the id space is used up.
    pub fn next_id(&mut self) -> Option<CommentId> {
        let Ok(id) = u32::try_from(self.next_id) else {
            log::warn!("Comment ids exhausted, refusing to allocate");
            return None;
        };
        self.next_id += 1;
        Some(CommentId(id))
    }

    pub fn add(&mut self, comment: Comment) {
        self.next_id = self.next_id.max(u64::from(comment.id.0) + 1);
        self.comments.push(comment);
    }

    /// Remove a comment. Unknown identifiers are ignored.
    pub fn remove(&mut self, id: CommentId) -> Option<Comment> {
        match self.comments.iter().position(|c| c.id == id) {
            Some(index) => Some(self.comments.remove(index)),
            None => {
                log::debug!("Comment {} not in store, nothing to remove", id.0);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::fixtures::comment;

    use super::*;

    #[test]
    fn test_next_id_follows_store_size() {
        let mut store = CommentsModel::new();
        store.set_comments((0..5).map(comment).collect());

        assert_eq!(store.next_id(), Some(CommentId(5)));
        assert_eq!(store.next_id(), Some(CommentId(6)));
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut store = CommentsModel::new();
        store.set_comments((0..3).map(comment).collect());

        let id = store.next_id().unwrap();
        store.add(Comment { id, ..comment(id.0) });
        assert!(store.remove(id).is_some());

        assert_ne!(store.next_id(), Some(id));
    }

    #[test]
    fn test_next_id_skips_past_sparse_ids() {
        let mut store = CommentsModel::new();
        store.set_comments(vec![comment(0), comment(10)]);

        assert_eq!(store.next_id(), Some(CommentId(11)));
    }

    #[test]
    fn test_highest_possible_id_exhausts_the_counter() {
        let mut store = CommentsModel::new();
        store.set_comments(vec![comment(0), comment(u32::MAX)]);

        assert_eq!(store.next_id(), None);
        assert_eq!(store.next_id(), None);
        assert!(store.get(CommentId(u32::MAX)).is_some());
    }

    #[test]
    fn test_last_id_is_handed_out_once() {
        let mut store = CommentsModel::new();
        store.set_comments(vec![comment(u32::MAX - 1)]);

        assert_eq!(store.next_id(), Some(CommentId(u32::MAX)));
        assert_eq!(store.next_id(), None);
    }

    #[test]
    fn test_adding_highest_id_exhausts_the_counter() {
        let mut store = CommentsModel::new();
        store.add(comment(u32::MAX));

        assert_eq!(store.next_id(), None);
    }

    #[test]
    fn test_missing_lookups_are_noops() {
        let mut store = CommentsModel::new();
        store.set_comments(vec![comment(0)]);

        assert!(store.get(CommentId(42)).is_none());
        assert!(store.remove(CommentId(42)).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_display_date_format() {
        let c = comment(0);
        assert_eq!(c.display_date(), "05/03/2021 14:07");
    }
}
