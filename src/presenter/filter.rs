// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Filter/menu bar presenter.

use crate::models::{FilmEvent, FilmsModel, FilterEvent, FilterKind, FilterModel, ListenerId, Mailbox, UpdateKind};
use crate::util::filter;
use crate::view::page::FilterEntry;
use crate::view::{FilterGesture, MenuSection, Page};

pub struct FilterPresenter {
    current: Option<FilterKind>,
    section: MenuSection,
    film_events: Mailbox<FilmEvent>,
    filter_events: Mailbox<FilterEvent>,
    film_listener: ListenerId,
    filter_listener: ListenerId,
}

impl FilterPresenter {
    /// Create the presenter and subscribe it to both models.
    pub fn new(films: &mut FilmsModel, filters: &mut FilterModel) -> Self {
        let film_events = Mailbox::new();
        let filter_events = Mailbox::new();
        let film_listener = films.subscribe(film_events.forwarder());
        let filter_listener = filters.subscribe(filter_events.forwarder());
        Self {
            current: None,
            section: MenuSection::Films,
            film_events,
            filter_events,
            film_listener,
            filter_listener,
        }
    }

    /// Unsubscribe from both models. The rendered bar stays on the page.
    pub fn detach(self, films: &mut FilmsModel, filters: &mut FilterModel) {
        films.unsubscribe(self.film_listener);
        filters.unsubscribe(self.filter_listener);
    }

    #[cfg(test)]
    pub fn current_filter(&self) -> Option<FilterKind> {
        self.current
    }

    #[cfg(test)]
    pub fn section(&self) -> MenuSection {
        self.section
    }

    /// Render the bar from scratch with fresh counts.
    pub fn init(&mut self, films: &FilmsModel, filters: &FilterModel, page: &mut Page) {
        self.current = match self.section {
            MenuSection::Films => Some(filters.filter()),
            MenuSection::Statistics => None,
        };
        let entries = FilterKind::ALL
            .iter()
            .map(|&kind| FilterEntry {
                kind,
                name: kind.name(),
                count: filter::count(kind, films.films()),
            })
            .collect();
        page.render_filter_bar(entries, self.current, self.section);
    }

    /// Re-render if either model changed since the last call.
    pub fn process_events(&mut self, films: &FilmsModel, filters: &FilterModel, page: &mut Page) -> bool {
        let films_changed = self.film_events.clear();
        let filter_changed = self.filter_events.clear();
        if films_changed || filter_changed {
            self.init(films, filters, page);
        }
        films_changed || filter_changed
    }

    /// Handle a click in the bar. Returns the menu section to switch to, if any.
    pub fn handle(
        &mut self,
        gesture: FilterGesture,
        films: &FilmsModel,
        filters: &mut FilterModel,
        page: &mut Page,
    ) -> Option<MenuSection> {
        match gesture {
            FilterGesture::Select(kind) => {
                if self.current == Some(kind) {
                    return None;
                }
                filters.set_filter(UpdateKind::Major, kind);
                self.section = MenuSection::Films;
                self.init(films, filters, page);
                Some(MenuSection::Films)
            }
            FilterGesture::Statistics => {
                self.section = MenuSection::Statistics;
                self.init(films, filters, page);
                log::info!("Showing statistics");
                Some(MenuSection::Statistics)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{fixtures, FilmFlag, UpdateKind};
    use crate::view::ComponentId;

    use super::*;

    fn setup() -> (FilmsModel, FilterModel, Page, FilterPresenter) {
        let mut films = fixtures::films(4);
        films[0] = films[0].toggled(FilmFlag::Watchlist);
        films[1] = films[1].toggled(FilmFlag::Watched).toggled(FilmFlag::Favorite);
        let mut films = FilmsModel::new(films);
        let mut filters = FilterModel::new();
        let mut page = Page::new();
        let mut presenter = FilterPresenter::new(&mut films, &mut filters);
        presenter.init(&films, &filters, &mut page);
        (films, filters, page, presenter)
    }

    fn bar_id(page: &Page) -> Option<ComponentId> {
        page.filter_bar().map(|bar| bar.id)
    }

    fn counts(page: &Page) -> Vec<usize> {
        page.filter_bar().unwrap().entries.iter().map(|e| e.count).collect()
    }

    #[test]
    fn test_init_reports_counts_per_filter() {
        let (_, _, page, presenter) = setup();

        assert_eq!(counts(&page), vec![4, 1, 1, 1]);
        assert_eq!(presenter.current_filter(), Some(FilterKind::All));
        assert_eq!(page.filter_bar().unwrap().active, Some(FilterKind::All));
    }

    #[test]
    fn test_film_change_recomputes_counts() {
        let (mut films, filters, mut page, mut presenter) = setup();
        let before = bar_id(&page);

        let film = films.films()[2].toggled(FilmFlag::Watchlist);
        films.update_film(UpdateKind::Minor, film);

        assert!(presenter.process_events(&films, &filters, &mut page));
        assert_ne!(bar_id(&page), before);
        assert_eq!(counts(&page), vec![4, 2, 1, 1]);
        assert!(!presenter.process_events(&films, &filters, &mut page));
    }

    #[test]
    fn test_select_new_filter_commits_major_update() {
        let (films, mut filters, mut page, mut presenter) = setup();
        let events = Mailbox::new();
        filters.subscribe(events.forwarder());

        let section = presenter.handle(FilterGesture::Select(FilterKind::History), &films, &mut filters, &mut page);

        assert_eq!(section, Some(MenuSection::Films));
        assert_eq!(filters.filter(), FilterKind::History);
        assert_eq!(
            events.take(),
            Some(FilterEvent {
                kind: UpdateKind::Major,
                filter: FilterKind::History
            })
        );
        assert_eq!(page.filter_bar().unwrap().active, Some(FilterKind::History));
    }

    #[test]
    fn test_select_same_filter_is_noop() {
        let (films, mut filters, mut page, mut presenter) = setup();
        let events = Mailbox::new();
        filters.subscribe(events.forwarder());
        let bar = bar_id(&page);

        assert!(presenter
            .handle(FilterGesture::Select(FilterKind::All), &films, &mut filters, &mut page)
            .is_none());
        assert!(!events.has_pending());
        assert_eq!(bar_id(&page), bar);
    }

    #[test]
    fn test_statistics_clears_active_filter_only() {
        let (films, mut filters, mut page, mut presenter) = setup();
        presenter.handle(FilterGesture::Select(FilterKind::Favorites), &films, &mut filters, &mut page);

        let section = presenter.handle(FilterGesture::Statistics, &films, &mut filters, &mut page);

        assert_eq!(section, Some(MenuSection::Statistics));
        assert_eq!(presenter.current_filter(), None);
        assert_eq!(filters.filter(), FilterKind::Favorites);
        let bar = page.filter_bar().unwrap();
        assert_eq!(bar.active, None);
        assert_eq!(bar.section, MenuSection::Statistics);

        // Picking the stored filter again returns to the board
        let section = presenter.handle(FilterGesture::Select(FilterKind::Favorites), &films, &mut filters, &mut page);
        assert_eq!(section, Some(MenuSection::Films));
        assert_eq!(presenter.section(), MenuSection::Films);
    }

    #[test]
    fn test_filter_model_change_triggers_rerender() {
        let (films, mut filters, mut page, mut presenter) = setup();

        filters.set_filter(UpdateKind::Major, FilterKind::Watchlist);

        assert!(presenter.process_events(&films, &filters, &mut page));
        assert_eq!(presenter.current_filter(), Some(FilterKind::Watchlist));
    }

    #[test]
    fn test_detach_unsubscribes_from_both_models() {
        let (mut films, mut filters, _, presenter) = setup();
        assert_eq!(films.listener_count(), 1);
        assert_eq!(filters.listener_count(), 1);

        presenter.detach(&mut films, &mut filters);

        assert_eq!(films.listener_count(), 0);
        assert_eq!(filters.listener_count(), 0);
    }
}
