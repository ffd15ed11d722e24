// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Retained component tree drawn by the frontend.
//!
//! Presenters mount, replace and unmount components here; the egui layer
//! only reads the tree and reports gestures back. Every mounted component
//! carries a [`ComponentId`] so callers can tell an in-place data update
//! (same id) from a replacement (new id).

use super::keys::CancelKeys;
use crate::models::{Comment, Emotion, Film, FilterKind};
use crate::util::sort::SortKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

/// Which part of the main menu is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuSection {
    #[default]
    Films,
    Statistics,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterEntry {
    pub kind: FilterKind,
    pub name: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterBar {
    pub id: ComponentId,
    pub entries: Vec<FilterEntry>,
    pub active: Option<FilterKind>,
    pub section: MenuSection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortBar {
    pub id: ComponentId,
    pub active: SortKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilmCard {
    pub id: ComponentId,
    pub film: Film,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentList {
    pub id: ComponentId,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Composer {
    pub id: ComponentId,
    pub emotion: Option<Emotion>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailsPanel {
    pub id: ComponentId,
    pub film: Film,
    pub comments: CommentList,
    pub composer: Composer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterStats {
    pub id: ComponentId,
    pub film_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsPanel {
    pub id: ComponentId,
    pub watchlist: usize,
    pub watched: usize,
    pub favorites: usize,
    /// Average rating of watched films.
    pub average_rating: Option<f64>,
}

#[derive(Default)]
pub struct Page {
    next_id: u64,
    scroll_locks: usize,
    section: MenuSection,
    filter_bar: Option<FilterBar>,
    sort_bar: Option<SortBar>,
    cards: Vec<FilmCard>,
    load_more: Option<ComponentId>,
    no_films: Option<ComponentId>,
    footer_stats: Option<FooterStats>,
    details: Vec<DetailsPanel>,
    statistics: Option<StatisticsPanel>,
    cancel_keys: CancelKeys,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> ComponentId {
        let id = ComponentId(self.next_id);
        self.next_id += 1;
        id
    }

    // Scroll lock

    pub fn lock_scroll(&mut self) {
        self.scroll_locks += 1;
    }

    pub fn unlock_scroll(&mut self) {
        self.scroll_locks = self.scroll_locks.saturating_sub(1);
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locks > 0
    }

    pub fn cancel_keys(&self) -> &CancelKeys {
        &self.cancel_keys
    }

    // Menu

    pub fn section(&self) -> MenuSection {
        self.section
    }

    pub fn set_section(&mut self, section: MenuSection) {
        self.section = section;
    }

    /// Mount the filter bar, replacing any previous one.
    pub fn render_filter_bar(
        &mut self,
        entries: Vec<FilterEntry>,
        active: Option<FilterKind>,
        section: MenuSection,
    ) -> ComponentId {
        let id = self.allocate();
        self.filter_bar = Some(FilterBar {
            id,
            entries,
            active,
            section,
        });
        id
    }

    pub fn filter_bar(&self) -> Option<&FilterBar> {
        self.filter_bar.as_ref()
    }

    pub fn render_statistics(
        &mut self,
        watchlist: usize,
        watched: usize,
        favorites: usize,
        average_rating: Option<f64>,
    ) -> ComponentId {
        let id = self.allocate();
        self.statistics = Some(StatisticsPanel {
            id,
            watchlist,
            watched,
            favorites,
            average_rating,
        });
        id
    }

    pub fn remove_statistics(&mut self) {
        self.statistics = None;
    }

    pub fn statistics(&self) -> Option<&StatisticsPanel> {
        self.statistics.as_ref()
    }

    // Board chrome

    pub fn render_sort_bar(&mut self, active: SortKind) -> ComponentId {
        let id = self.allocate();
        self.sort_bar = Some(SortBar { id, active });
        id
    }

    pub fn remove_sort_bar(&mut self) {
        self.sort_bar = None;
    }

    pub fn sort_bar(&self) -> Option<&SortBar> {
        self.sort_bar.as_ref()
    }

    pub fn show_load_more(&mut self) -> ComponentId {
        let id = self.allocate();
        self.load_more = Some(id);
        id
    }

    pub fn remove_load_more(&mut self) {
        self.load_more = None;
    }

    pub fn has_load_more(&self) -> bool {
        self.load_more.is_some()
    }

    pub fn show_no_films(&mut self) -> ComponentId {
        let id = self.allocate();
        self.no_films = Some(id);
        id
    }

    pub fn remove_no_films(&mut self) {
        self.no_films = None;
    }

    pub fn shows_no_films(&self) -> bool {
        self.no_films.is_some()
    }

    pub fn render_footer_stats(&mut self, film_count: usize) -> ComponentId {
        let id = self.allocate();
        self.footer_stats = Some(FooterStats { id, film_count });
        id
    }

    pub fn remove_footer_stats(&mut self) {
        self.footer_stats = None;
    }

    pub fn footer_stats(&self) -> Option<&FooterStats> {
        self.footer_stats.as_ref()
    }

    // Film cards

    /// Append a card to the film list.
    pub fn mount_card(&mut self, film: Film) -> ComponentId {
        let id = self.allocate();
        self.cards.push(FilmCard { id, film });
        id
    }

    /// Swap the card `previous` for a new one in the same list slot.
    /// Appends if `previous` is no longer mounted.
    pub fn replace_card(&mut self, previous: ComponentId, film: Film) -> ComponentId {
        let id = self.allocate();
        let card = FilmCard { id, film };
        match self.cards.iter().position(|c| c.id == previous) {
            Some(index) => self.cards[index] = card,
            None => self.cards.push(card),
        }
        id
    }

    pub fn unmount_card(&mut self, id: ComponentId) -> bool {
        let before = self.cards.len();
        self.cards.retain(|c| c.id != id);
        self.cards.len() != before
    }

    pub fn cards(&self) -> &[FilmCard] {
        &self.cards
    }

    #[cfg(test)]
    pub fn card(&self, id: ComponentId) -> Option<&FilmCard> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Ids of the films currently shown as cards, in list order.
    #[cfg(test)]
    pub fn card_film_ids(&self) -> Vec<crate::models::FilmId> {
        self.cards.iter().map(|c| c.film.id).collect()
    }

    // Details panels

    /// Mount a details panel with its comment list and an empty composer.
    pub fn mount_details(&mut self, film: Film, comments: Vec<Comment>) -> ComponentId {
        let id = self.allocate();
        let comments = CommentList {
            id: self.allocate(),
            comments,
        };
        let composer = Composer {
            id: self.allocate(),
            emotion: None,
            text: String::new(),
        };
        self.details.push(DetailsPanel {
            id,
            film,
            comments,
            composer,
        });
        id
    }

    pub fn unmount_details(&mut self, id: ComponentId) -> bool {
        let before = self.details.len();
        self.details.retain(|d| d.id != id);
        self.details.len() != before
    }

    pub fn details(&self) -> &[DetailsPanel] {
        &self.details
    }

    #[cfg(test)]
    pub fn details_panel(&self, id: ComponentId) -> Option<&DetailsPanel> {
        self.details.iter().find(|d| d.id == id)
    }

    fn details_mut(&mut self, id: ComponentId) -> Option<&mut DetailsPanel> {
        self.details.iter_mut().find(|d| d.id == id)
    }

    /// Refresh the film shown in a details panel.
    pub fn update_details_film(&mut self, id: ComponentId, film: Film) {
        if let Some(panel) = self.details_mut(id) {
            panel.film = film;
        }
    }

    /// Re-render a panel's comment list from a new snapshot.
    pub fn update_comments(&mut self, id: ComponentId, comments: Vec<Comment>) {
        if let Some(panel) = self.details_mut(id) {
            panel.comments.comments = comments;
        }
    }

    pub fn update_composer(&mut self, id: ComponentId, emotion: Option<Emotion>, text: &str) {
        if let Some(panel) = self.details_mut(id) {
            panel.composer.emotion = emotion;
            panel.composer.text = text.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::fixtures::{comment, film};
    use crate::models::FilmId;

    use super::*;

    #[test]
    fn test_replace_card_keeps_slot() {
        let mut page = Page::new();
        page.mount_card(film(0, "A", 2000, 1.0));
        let middle = page.mount_card(film(1, "B", 2000, 1.0));
        page.mount_card(film(2, "C", 2000, 1.0));

        let replaced = page.replace_card(middle, film(1, "B2", 2000, 1.0));

        assert_ne!(replaced, middle);
        assert_eq!(page.cards().len(), 3);
        assert_eq!(page.cards()[1].film.title, "B2");
        assert!(page.card(middle).is_none());
    }

    #[test]
    fn test_replace_unknown_card_appends() {
        let mut page = Page::new();
        let gone = page.mount_card(film(0, "A", 2000, 1.0));
        assert!(page.unmount_card(gone));

        page.replace_card(gone, film(0, "A", 2000, 1.0));
        assert_eq!(page.card_film_ids(), vec![FilmId(0)]);
    }

    #[test]
    fn test_details_updates_keep_identity() {
        let mut page = Page::new();
        let id = page.mount_details(film(0, "A", 2000, 1.0), vec![comment(0)]);
        let list_id = page.details_panel(id).unwrap().comments.id;

        page.update_comments(id, vec![comment(0), comment(1)]);
        page.update_composer(id, Some(Emotion::Angry), "draft");

        let panel = page.details_panel(id).unwrap();
        assert_eq!(panel.comments.id, list_id);
        assert_eq!(panel.comments.comments.len(), 2);
        assert_eq!(panel.composer.emotion, Some(Emotion::Angry));
        assert_eq!(panel.composer.text, "draft");

        assert!(page.unmount_details(id));
        assert!(!page.unmount_details(id));
    }

    #[test]
    fn test_scroll_lock_is_counted() {
        let mut page = Page::new();
        page.lock_scroll();
        page.lock_scroll();
        page.unlock_scroll();
        assert!(page.is_scroll_locked());
        page.unlock_scroll();
        page.unlock_scroll();
        assert!(!page.is_scroll_locked());
    }
}
