// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Working copy of one film's comments while its details panel is open.
//!
//! Additions go straight to the store so they get stable identifiers;
//! removals are held back and applied to the store on [`CommentDraft::commit`],
//! which also yields the identifier list to write back to the film.

use crate::models::{Comment, CommentId, CommentsModel};
use std::collections::BTreeSet;

#[derive(Debug, Default)]
pub struct CommentDraft {
    items: Vec<Comment>,
    removed: Vec<CommentId>,
}

impl CommentDraft {
    /// Resolve a film's comment identifiers against the store.
    /// Identifiers missing from the store are skipped, repeats keep their first position.
    pub fn materialize(ids: &[CommentId], store: &CommentsModel) -> Self {
        let mut seen = BTreeSet::new();
        let items = ids
            .iter()
            .filter(|id| {
                let first = seen.insert(**id);
                if !first {
                    log::debug!("Skipping repeated comment {}", id.0);
                }
                first
            })
            .filter_map(|id| {
                let comment = store.get(*id);
                if comment.is_none() {
                    log::debug!("Skipping comment {}: not in store", id.0);
                }
                comment.cloned()
            })
            .collect();
        Self {
            items,
            removed: Vec::new(),
        }
    }

    pub fn items(&self) -> &[Comment] {
        &self.items
    }

    #[cfg(test)]
    pub fn ids(&self) -> Vec<CommentId> {
        self.items.iter().map(|c| c.id).collect()
    }

    /// Add a new comment to the draft and the store.
    pub fn add(&mut self, comment: Comment, store: &mut CommentsModel) {
        store.add(comment.clone());
        self.items.push(comment);
    }

    /// Drop every entry for a comment from the draft. Returns false if it wasn't there.
    pub fn remove(&mut self, id: CommentId) -> bool {
        let before = self.items.len();
        self.items.retain(|c| c.id != id);
        if self.items.len() == before {
            log::debug!("Comment {} not in working list", id.0);
            return false;
        }
        self.removed.push(id);
        true
    }

    /// Apply pending removals to the store and return the final identifiers.
    pub fn commit(self, store: &mut CommentsModel) -> Vec<CommentId> {
        for id in &self.removed {
            store.remove(*id);
        }
        self.items.into_iter().map(|c| c.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::models::fixtures::comment;

    use super::*;

    fn store(count: u32) -> CommentsModel {
        let mut store = CommentsModel::new();
        store.set_comments((0..count).map(comment).collect());
        store
    }

    #[test]
    fn test_materialize_skips_missing_ids() {
        let store = store(3);
        let draft = CommentDraft::materialize(&[CommentId(2), CommentId(7), CommentId(0)], &store);

        assert_eq!(draft.ids(), vec![CommentId(2), CommentId(0)]);
    }

    #[test]
    fn test_commit_applies_adds_and_removes() {
        let mut store = store(4);
        let mut draft = CommentDraft::materialize(&[CommentId(0), CommentId(1)], &store);

        let new_id = store.next_id().unwrap();
        draft.add(comment(new_id.0), &mut store);
        assert_eq!(store.len(), 5);

        assert!(draft.remove(CommentId(0)));
        assert!(!draft.remove(CommentId(0)));
        // Removal is held until commit
        assert!(store.get(CommentId(0)).is_some());

        let ids = draft.commit(&mut store);

        assert_eq!(ids, vec![CommentId(1), new_id]);
        assert!(store.get(CommentId(0)).is_none());
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_removing_a_fresh_comment_cleans_store() {
        let mut store = store(1);
        let mut draft = CommentDraft::materialize(&[CommentId(0)], &store);

        let id = store.next_id().unwrap();
        draft.add(comment(id.0), &mut store);
        draft.remove(id);

        assert_eq!(draft.commit(&mut store), vec![CommentId(0)]);
        assert!(store.get(id).is_none());
    }

    #[test]
    fn test_repeated_id_is_listed_once() {
        let store = store(3);
        let draft = CommentDraft::materialize(&[CommentId(1), CommentId(0), CommentId(1)], &store);

        assert_eq!(draft.ids(), vec![CommentId(1), CommentId(0)]);
    }

    #[test]
    fn test_deleting_a_repeated_id_leaves_no_dangling_reference() {
        let mut store = store(3);
        let mut draft = CommentDraft::materialize(&[CommentId(0), CommentId(2), CommentId(0)], &store);

        assert!(draft.remove(CommentId(0)));
        let ids = draft.commit(&mut store);

        assert_eq!(ids, vec![CommentId(2)]);
        assert!(store.get(CommentId(0)).is_none());
    }
}
