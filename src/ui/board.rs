// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Film board: the card list, load-more control and footer.

use crate::models::{Film, FilmFlag};
use crate::view::page::FilmCard;
use crate::view::{CardGesture, CardRegion, Page, PageEvent};

/// Display the film cards and collect card gestures.
pub fn show(ui: &mut egui::Ui, page: &Page) -> Vec<PageEvent> {
    let mut events = Vec::new();

    if page.shows_no_films() {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("There are no movies in our database")
                    .size(18.0)
                    .color(egui::Color32::from_gray(180)),
            );
        });
        return events;
    }

    egui::ScrollArea::vertical()
        .enable_scrolling(!page.is_scroll_locked())
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for card in page.cards() {
                if let Some(gesture) = show_card(ui, card) {
                    events.push(PageEvent::Card(card.film.id, gesture));
                }
                ui.add_space(6.0);
            }

            if page.has_load_more() {
                ui.vertical_centered(|ui| {
                    if ui.button("Show more").clicked() {
                        events.push(PageEvent::LoadMore);
                    }
                });
            }
        });

    events
}

/// Display the footer statistics line.
pub fn footer(ui: &mut egui::Ui, page: &Page) {
    ui.horizontal(|ui| {
        match page.footer_stats() {
            Some(stats) => ui.label(format!("{} movies inside", stats.film_count)),
            None => ui.label(egui::RichText::new("No movies").weak()),
        };
    });
}

fn show_card(ui: &mut egui::Ui, card: &FilmCard) -> Option<CardGesture> {
    let film = &card.film;
    let mut gesture = None;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        if clickable(ui, egui::RichText::new(&film.title).heading()) {
            gesture = Some(CardGesture::Click(CardRegion::Title));
        }
        ui.label(format!("{}  ·  {:.1}", film.year(), film.rating));
        if clickable(ui, egui::RichText::new(format!("[{}]", film.poster)).monospace()) {
            gesture = Some(CardGesture::Click(CardRegion::Poster));
        }
        if !film.description.is_empty() && clickable(ui, egui::RichText::new(&film.description).weak()) {
            gesture = Some(CardGesture::Click(CardRegion::Description));
        }
        if clickable(ui, format!("{} comments", film.comments.len()).into()) {
            gesture = Some(CardGesture::Click(CardRegion::Comments));
        }

        if let Some(flag) = flag_buttons(ui, film) {
            gesture = Some(CardGesture::Toggle(flag));
        }
    });

    gesture
}

fn clickable(ui: &mut egui::Ui, text: egui::RichText) -> bool {
    ui.add(egui::Label::new(text).sense(egui::Sense::click())).clicked()
}

/// Watchlist/watched/favorite buttons shared by cards and details.
pub fn flag_buttons(ui: &mut egui::Ui, film: &Film) -> Option<FilmFlag> {
    let mut clicked = None;
    ui.horizontal(|ui| {
        let buttons = [
            (FilmFlag::Watchlist, "Add to watchlist"),
            (FilmFlag::Watched, "Already watched"),
            (FilmFlag::Favorite, "Add to favorites"),
        ];
        for (flag, label) in buttons {
            if ui.selectable_label(film.flag(flag), label).clicked() {
                clicked = Some(flag);
            }
        }
    });
    clicked
}
