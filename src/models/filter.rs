// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Filter kinds and the observable active-filter model.

use super::films::UpdateKind;
use super::observable::{ListenerId, Observable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterKind {
    #[default]
    All,
    Watchlist,
    /// Films marked as watched.
    History,
    Favorites,
}

impl FilterKind {
    pub const ALL: [FilterKind; 4] = [
        FilterKind::All,
        FilterKind::Watchlist,
        FilterKind::History,
        FilterKind::Favorites,
    ];

    /// Menu label.
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::All => "All Movies",
            FilterKind::Watchlist => "Watchlist",
            FilterKind::History => "History",
            FilterKind::Favorites => "Favorites",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterEvent {
    pub kind: UpdateKind,
    pub filter: FilterKind,
}

#[derive(Default)]
pub struct FilterModel {
    active: FilterKind,
    observers: Observable<FilterEvent>,
}

impl FilterModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> FilterKind {
        self.active
    }

    pub fn set_filter(&mut self, kind: UpdateKind, filter: FilterKind) {
        self.active = filter;
        log::info!("Active filter: {}", filter.name());
        self.observers.notify(&FilterEvent { kind, filter });
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&FilterEvent) + 'static) -> ListenerId {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.observers.unsubscribe(id)
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.observers.listener_count()
    }
}
