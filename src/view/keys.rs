// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Keyboard input and the page-wide cancel-key listeners.

use crate::models::FilmId;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Other,
}

/// A key press with the platform command modifier (Cmd on macOS, Ctrl elsewhere).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub command: bool,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self { key, command: false }
    }

    pub fn with_command(key: Key) -> Self {
        Self { key, command: true }
    }

    /// Closes an open details panel.
    pub fn is_cancel(&self) -> bool {
        self.key == Key::Escape
    }

    /// Submits the new-comment composer.
    pub fn is_submit(&self) -> bool {
        self.key == Key::Enter && self.command
    }
}

type Listeners = Rc<RefCell<Vec<(u64, FilmId)>>>;

/// Registry of owners listening for the cancel key.
#[derive(Clone, Default)]
pub struct CancelKeys {
    listeners: Listeners,
    next_token: Rc<Cell<u64>>,
}

impl CancelKeys {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start listening on behalf of `owner` until the guard is dropped.
    pub fn acquire(&self, owner: FilmId) -> CancelGuard {
        let token = self.next_token.get();
        self.next_token.set(token + 1);
        self.listeners.borrow_mut().push((token, owner));
        log::debug!("Cancel key listener acquired for {}", owner);
        CancelGuard {
            token,
            owner,
            listeners: Rc::clone(&self.listeners),
        }
    }

    /// Current listeners, oldest first.
    pub fn owners(&self) -> Vec<FilmId> {
        self.listeners.borrow().iter().map(|(_, owner)| *owner).collect()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }
}

/// Live cancel-key registration. Dropping it unregisters.
pub struct CancelGuard {
    token: u64,
    owner: FilmId,
    listeners: Listeners,
}

impl CancelGuard {
    #[cfg(test)]
    pub fn owner(&self) -> FilmId {
        self.owner
    }
}

impl Drop for CancelGuard {
    fn drop(&mut self) {
        self.listeners.borrow_mut().retain(|(token, _)| *token != self.token);
        log::debug!("Cancel key listener released for {}", self.owner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_drop() {
        let keys = CancelKeys::new();
        let first = keys.acquire(FilmId(1));
        let second = keys.acquire(FilmId(2));
        assert_eq!(keys.owners(), vec![FilmId(1), FilmId(2)]);

        drop(first);
        assert_eq!(keys.owners(), vec![FilmId(2)]);
        assert_eq!(second.owner(), FilmId(2));

        drop(second);
        assert!(keys.is_empty());
    }

    #[test]
    fn test_same_owner_twice_releases_independently() {
        let keys = CancelKeys::new();
        let a = keys.acquire(FilmId(3));
        let _b = keys.acquire(FilmId(3));

        drop(a);
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn test_key_classification() {
        assert!(KeyPress::plain(Key::Escape).is_cancel());
        assert!(KeyPress::with_command(Key::Enter).is_submit());
        assert!(!KeyPress::plain(Key::Enter).is_submit());
        assert!(!KeyPress::with_command(Key::Other).is_submit());
    }
}
