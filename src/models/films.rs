// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The observable film collection.

use super::film::{Film, FilmId};
use super::observable::{ListenerId, Observable};

/// How much of the board a change invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateKind {
    /// One film changed; only its presenter re-renders.
    Minor,
    /// The visible set changed; the whole board is rebuilt.
    Major,
}

/// What the user asked a model to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    UpdateFilm,
}

/// Notification sent after every write to [`FilmsModel`].
#[derive(Debug, Clone, PartialEq)]
pub struct FilmEvent {
    pub kind: UpdateKind,
    /// The replaced record for single-film writes.
    pub film: Option<Film>,
}

#[derive(Default)]
pub struct FilmsModel {
    films: Vec<Film>,
    observers: Observable<FilmEvent>,
}

impl FilmsModel {
    pub fn new(films: Vec<Film>) -> Self {
        Self {
            films,
            observers: Observable::new(),
        }
    }

    pub fn films(&self) -> &[Film] {
        &self.films
    }

    pub fn get(&self, id: FilmId) -> Option<&Film> {
        self.films.iter().find(|film| film.id == id)
    }

    /// Replace the whole collection.
    pub fn set_films(&mut self, kind: UpdateKind, films: Vec<Film>) {
        self.films = films;
        log::info!("Film collection replaced, total: {}", self.films.len());
        self.observers.notify(&FilmEvent { kind, film: None });
    }

    /// Replace one film by identifier. Unknown identifiers are ignored.
    pub fn update_film(&mut self, kind: UpdateKind, film: Film) {
        let Some(slot) = self.films.iter_mut().find(|f| f.id == film.id) else {
            log::warn!("Can't update unknown {}", film.id);
            return;
        };
        *slot = film.clone();
        self.observers.notify(&FilmEvent {
            kind,
            film: Some(film),
        });
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&FilmEvent) + 'static) -> ListenerId {
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
