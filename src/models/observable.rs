// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Publish/subscribe plumbing between models and presenters.
//!
//! Models own an [`Observable`] and call [`Observable::notify`] after every
//! write. Presenters usually subscribe a [`Mailbox`] forwarder and drain it
//! from their own event handler, so a listener never re-enters the presenter
//! that caused the write.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

/// Token returned by [`Observable::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener<E> = Box<dyn FnMut(&E)>;

pub struct Observable<E> {
    next_id: u64,
    listeners: BTreeMap<ListenerId, Listener<E>>,
}

impl<E> Default for Observable<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            listeners: BTreeMap::new(),
        }
    }
}

impl<E> Observable<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&E) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, Box::new(listener));
        id
    }

    /// Returns false if the token was already gone.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    /// Call every listener, oldest subscription first.
    pub fn notify(&mut self, event: &E) {
        for listener in self.listeners.values_mut() {
            listener(event);
        }
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Queue of events delivered by an [`Observable`] and drained by its owner.
pub struct Mailbox<E> {
    queue: Rc<RefCell<VecDeque<E>>>,
}

impl<E> Default for Mailbox<E> {
    fn default() -> Self {
        Self {
            queue: Rc::new(RefCell::new(VecDeque::new())),
        }
    }
}

impl<E: Clone + 'static> Mailbox<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listener that copies each notification into this mailbox.
    pub fn forwarder(&self) -> impl FnMut(&E) + 'static {
        let queue = Rc::clone(&self.queue);
        move |event: &E| queue.borrow_mut().push_back(event.clone())
    }

    /// Pop the oldest pending event. The queue is not borrowed once this returns.
    pub fn take(&self) -> Option<E> {
        self.queue.borrow_mut().pop_front()
    }

    #[cfg(test)]
    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }

    /// Throw away everything pending; returns whether anything was queued.
    pub fn clear(&self) -> bool {
        let mut queue = self.queue.borrow_mut();
        let had_events = !queue.is_empty();
        queue.clear();
        had_events
    }
}
