// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Top-level board presenter.
//!
//! Owns the models, the page, the filter bar presenter and one
//! [`FilmPresenter`] per rendered film. Every [`PageEvent`] is handled to
//! completion, including the model notifications it causes, before
//! [`SitePresenter::dispatch`] returns.

use super::authors::AuthorPool;
use super::film::{FilmContext, FilmIntent, FilmPresenter, Mode, PresenterId};
use super::filter::FilterPresenter;
use crate::config::BoardConfig;
use crate::models::{
    Catalog, CommentsModel, Film, FilmEvent, FilmId, FilmsModel, FilterEvent, FilterKind, FilterModel, Mailbox,
    UpdateKind, UserAction,
};
use crate::util::{filter, sort, sort::SortKind};
use crate::view::{FilterGesture, MenuSection, Page, PageEvent};
use std::collections::{BTreeMap, VecDeque};

pub struct SitePresenter {
    config: BoardConfig,
    films: FilmsModel,
    filters: FilterModel,
    comments: CommentsModel,
    authors: AuthorPool,
    page: Page,
    film_events: Mailbox<FilmEvent>,
    filter_events: Mailbox<FilterEvent>,
    filter_presenter: FilterPresenter,
    /// Live presenters by film; at most one per film.
    presenters: BTreeMap<FilmId, FilmPresenter>,
    next_presenter: u64,
    sort: SortKind,
    section: MenuSection,
}

impl SitePresenter {
    pub fn new(config: BoardConfig, catalog: Catalog) -> Self {
        let authors = AuthorPool::new(config.authors.clone());
        Self::with_authors(config, catalog, authors)
    }

    pub fn with_authors(config: BoardConfig, catalog: Catalog, authors: AuthorPool) -> Self {
        let mut films = FilmsModel::new(catalog.films);
        let mut filters = FilterModel::new();
        let mut comments = CommentsModel::new();
        comments.set_comments(catalog.comments);

        let film_events = Mailbox::new();
        films.subscribe(film_events.forwarder());
        let filter_events = Mailbox::new();
        filters.subscribe(filter_events.forwarder());
        let filter_presenter = FilterPresenter::new(&mut films, &mut filters);

        Self {
            config,
            films,
            filters,
            comments,
            authors,
            page: Page::new(),
            film_events,
            filter_events,
            filter_presenter,
            presenters: BTreeMap::new(),
            next_presenter: 0,
            sort: SortKind::Default,
            section: MenuSection::Films,
        }
    }

    /// First render of the menu and the board.
    pub fn init(&mut self) {
        self.page.set_section(self.section);
        self.filter_presenter.init(&self.films, &self.filters, &mut self.page);
        self.render_board();
        log::info!("Board ready with {} films", self.films.films().len());
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    #[cfg(test)]
    pub fn films(&self) -> &FilmsModel {
        &self.films
    }

    #[cfg(test)]
    pub fn comments(&self) -> &CommentsModel {
        &self.comments
    }

    #[cfg(test)]
    pub fn sort(&self) -> SortKind {
        self.sort
    }

    #[cfg(test)]
    pub fn section(&self) -> MenuSection {
        self.section
    }

    #[cfg(test)]
    pub fn presenter(&self, id: FilmId) -> Option<&FilmPresenter> {
        self.presenters.get(&id)
    }

    #[cfg(test)]
    pub fn presenter_ids(&self) -> Vec<PresenterId> {
        self.presenters.values().map(FilmPresenter::id).collect()
    }

    /// Replace the catalog. Open panels are closed against the old catalog first.
    /// The board returns to the film list with a freshly subscribed filter bar.
    pub fn load_catalog(&mut self, catalog: Catalog) {
        let commits = self.reset_views(None);
        self.apply_intents(commits);
        let stale = std::mem::replace(
            &mut self.filter_presenter,
            FilterPresenter::new(&mut self.films, &mut self.filters),
        );
        stale.detach(&mut self.films, &mut self.filters);
        let commits = self.change_section(MenuSection::Films);
        self.apply_intents(commits);
        self.comments.set_comments(catalog.comments);
        self.films.set_films(UpdateKind::Major, catalog.films);
        let leftovers = self.flush();
        self.apply_intents(leftovers);
    }

    /// Handle one user gesture.
    pub fn dispatch(&mut self, event: PageEvent) {
        log::debug!("Dispatching {:?}", event);
        let intents: Vec<FilmIntent> = match event {
            PageEvent::Card(id, gesture) => self
                .with_presenter(id, |presenter, ctx| presenter.handle_card(gesture, ctx))
                .into_iter()
                .collect(),
            PageEvent::Details(id, gesture) => self
                .with_presenter(id, |presenter, ctx| presenter.handle_details(gesture, ctx))
                .into_iter()
                .collect(),
            PageEvent::Filter(gesture) => self.handle_filter(gesture),
            PageEvent::Sort(kind) => self.handle_sort_change(kind),
            PageEvent::LoadMore => {
                self.handle_load_more();
                Vec::new()
            }
            PageEvent::Key(key) if key.is_cancel() => {
                let owners = self.page.cancel_keys().owners();
                owners
                    .into_iter()
                    .filter_map(|owner| self.with_presenter(owner, |presenter, ctx| presenter.handle_cancel_key(key, ctx)))
                    .collect()
            }
            PageEvent::Key(_) => Vec::new(),
        };
        self.apply_intents(intents);
        let leftovers = self.flush();
        self.apply_intents(leftovers);
    }

    fn with_presenter(
        &mut self,
        id: FilmId,
        action: impl FnOnce(&mut FilmPresenter, &mut FilmContext<'_>) -> Option<FilmIntent>,
    ) -> Option<FilmIntent> {
        let Some(presenter) = self.presenters.get_mut(&id) else {
            log::debug!("No presenter for {}", id);
            return None;
        };
        let mut ctx = FilmContext {
            page: &mut self.page,
            comments: &mut self.comments,
            authors: &mut self.authors,
        };
        action(presenter, &mut ctx)
    }

    fn apply_intents(&mut self, intents: impl IntoIterator<Item = FilmIntent>) {
        let mut pending: VecDeque<FilmIntent> = intents.into_iter().collect();
        while let Some(intent) = pending.pop_front() {
            match intent {
                FilmIntent::ChangeData { action, kind, film } => {
                    self.handle_view_action(action, kind, film);
                    pending.extend(self.flush());
                }
                FilmIntent::ModeChanged(source) => pending.extend(self.reset_views(Some(source))),
            }
        }
    }

    fn handle_view_action(&mut self, action: UserAction, kind: UpdateKind, film: Film) {
        match action {
            UserAction::UpdateFilm => self.films.update_film(kind, film),
        }
    }

    /// Drain model notifications. Returns commits from presenters destroyed on the way.
    fn flush(&mut self) -> Vec<FilmIntent> {
        let mut commits = Vec::new();
        loop {
            if let Some(event) = self.film_events.take() {
                commits.extend(self.handle_film_event(event));
            } else if let Some(event) = self.filter_events.take() {
                commits.extend(self.handle_filter_event(event));
            } else {
                break;
            }
        }
        self.filter_presenter.process_events(&self.films, &self.filters, &mut self.page);
        if self.section == MenuSection::Statistics {
            self.render_statistics();
        }
        commits
    }

    fn handle_film_event(&mut self, event: FilmEvent) -> Vec<FilmIntent> {
        match (event.kind, event.film) {
            (UpdateKind::Minor, Some(film)) => {
                match self.presenters.get_mut(&film.id) {
                    Some(presenter) => presenter.init(film, &mut self.page),
                    None => log::debug!("{} changed but isn't rendered", film.id),
                }
                Vec::new()
            }
            (UpdateKind::Minor, None) => Vec::new(),
            (UpdateKind::Major, _) => self.rebuild_board(true),
        }
    }

    fn handle_filter_event(&mut self, event: FilterEvent) -> Vec<FilmIntent> {
        self.rebuild_board(event.kind == UpdateKind::Major)
    }

    /// Close every open details panel except the one owned by `keep`.
    fn reset_views(&mut self, keep: Option<FilmId>) -> Vec<FilmIntent> {
        let mut commits = Vec::new();
        for (id, presenter) in self.presenters.iter_mut() {
            if Some(*id) == keep || presenter.mode() == Mode::Default {
                continue;
            }
            let mut ctx = FilmContext {
                page: &mut self.page,
                comments: &mut self.comments,
                authors: &mut self.authors,
            };
            commits.extend(presenter.reset_view(&mut ctx));
        }
        commits
    }

    fn handle_filter(&mut self, gesture: FilterGesture) -> Vec<FilmIntent> {
        let section = self
            .filter_presenter
            .handle(gesture, &self.films, &mut self.filters, &mut self.page);
        match section {
            Some(section) => self.change_section(section),
            None => Vec::new(),
        }
    }

    fn change_section(&mut self, section: MenuSection) -> Vec<FilmIntent> {
        self.section = section;
        self.page.set_section(section);
        match section {
            MenuSection::Statistics => {
                self.render_statistics();
                self.reset_views(None)
            }
            MenuSection::Films => {
                self.page.remove_statistics();
                Vec::new()
            }
        }
    }

    fn render_statistics(&mut self) {
        let films = self.films.films();
        let watched = filter::apply(FilterKind::History, films);
        let average_rating = if watched.is_empty() {
            None
        } else {
            Some(watched.iter().map(|f| f.rating).sum::<f64>() / watched.len() as f64)
        };
        self.page.render_statistics(
            filter::count(FilterKind::Watchlist, films),
            watched.len(),
            filter::count(FilterKind::Favorites, films),
            average_rating,
        );
    }

    fn handle_sort_change(&mut self, kind: SortKind) -> Vec<FilmIntent> {
        if self.sort == kind {
            return Vec::new();
        }
        log::info!("Sorting: {}", kind.label());
        self.sort = kind;
        let commits = self.clear_board(false);
        self.render_board();
        commits
    }

    fn handle_load_more(&mut self) {
        if !self.page.has_load_more() {
            return;
        }
        let films = self.visible_films();
        let next: Vec<Film> = films
            .iter()
            .filter(|film| !self.presenters.contains_key(&film.id))
            .take(self.config.page_size)
            .cloned()
            .collect();
        for film in next {
            self.render_film(film);
        }
        if films.iter().all(|film| self.presenters.contains_key(&film.id)) {
            self.page.remove_load_more();
        }
    }

    /// Films for the current filter and sort.
    fn visible_films(&self) -> Vec<Film> {
        let mut films = filter::apply(self.filters.filter(), self.films.films());
        sort::apply(self.sort, &mut films);
        films.into_iter().cloned().collect()
    }

    fn rebuild_board(&mut self, reset_sort: bool) -> Vec<FilmIntent> {
        let commits = self.clear_board(reset_sort);
        self.render_board();
        commits
    }

    /// Destroy every film presenter and the board chrome.
    fn clear_board(&mut self, reset_sort: bool) -> Vec<FilmIntent> {
        let mut commits = Vec::new();
        for (_, mut presenter) in std::mem::take(&mut self.presenters) {
            let mut ctx = FilmContext {
                page: &mut self.page,
                comments: &mut self.comments,
                authors: &mut self.authors,
            };
            commits.extend(presenter.destroy(&mut ctx));
        }
        self.page.remove_sort_bar();
        self.page.remove_no_films();
        self.page.remove_footer_stats();
        self.page.remove_load_more();
        if reset_sort {
            self.sort = SortKind::Default;
        }
        commits
    }

    fn render_board(&mut self) {
        let films = self.visible_films();
        if films.is_empty() {
            self.page.show_no_films();
            return;
        }

        self.page.render_sort_bar(self.sort);
        let total = films.len();
        for film in films.into_iter().take(self.config.page_size) {
            self.render_film(film);
        }
        if total > self.config.page_size {
            self.page.show_load_more();
        }
        self.page.render_footer_stats(total);
    }

    fn render_film(&mut self, film: Film) {
        if self.presenters.contains_key(&film.id) {
            log::warn!("Duplicate {} in catalog, skipping", film.id);
            return;
        }
        let mut presenter = FilmPresenter::new(PresenterId(self.next_presenter), film.clone());
        self.next_presenter += 1;
        presenter.init(film, &mut self.page);
        self.presenters.insert(presenter.film().id, presenter);
    }
}
