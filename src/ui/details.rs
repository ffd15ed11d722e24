// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Film details window with comments and the new-comment composer.

use super::board::flag_buttons;
use crate::models::Emotion;
use crate::view::page::DetailsPanel;
use crate::view::{DetailsGesture, Key, KeyPress, Page, PageEvent};

/// Display every open details panel as a window.
pub fn show(ctx: &egui::Context, page: &Page) -> Vec<PageEvent> {
    let mut events = Vec::new();

    for panel in page.details() {
        let film_id = panel.film.id;
        let mut open = true;

        egui::Window::new(&panel.film.title)
            .id(egui::Id::new(("details", film_id)))
            .open(&mut open)
            .collapsible(false)
            .resizable(true)
            .default_width(520.0)
            .show(ctx, |ui| {
                for gesture in show_panel(ui, panel) {
                    events.push(PageEvent::Details(film_id, gesture));
                }
            });

        // Window close button
        if !open {
            events.push(PageEvent::Details(film_id, DetailsGesture::Close));
        }
    }

    events
}

fn show_panel(ui: &mut egui::Ui, panel: &DetailsPanel) -> Vec<DetailsGesture> {
    let mut gestures = Vec::new();
    let film = &panel.film;

    ui.label(format!(
        "{}  ·  rating {:.1}  ·  {}",
        film.production_date.format("%d %B %Y"),
        film.rating,
        film.poster
    ));
    if !film.description.is_empty() {
        ui.label(&film.description);
    }
    if let Some(flag) = flag_buttons(ui, film) {
        gestures.push(DetailsGesture::Toggle(flag));
    }

    ui.separator();
    ui.label(egui::RichText::new(format!("Comments {}", panel.comments.comments.len())).strong());

    egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
        for comment in &panel.comments.comments {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(format!("({})", comment.emotion.label())).monospace());
                ui.vertical(|ui| {
                    ui.label(&comment.text);
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&comment.author).weak());
                        ui.label(egui::RichText::new(comment.display_date()).weak());
                        if ui.small_button("Delete").clicked() {
                            gestures.push(DetailsGesture::DeleteComment(comment.id));
                        }
                    });
                });
            });
        }
    });

    ui.separator();

    let composer = &panel.composer;
    ui.horizontal(|ui| {
        for emotion in Emotion::ALL {
            if ui.selectable_label(composer.emotion == Some(emotion), emotion.label()).clicked() {
                gestures.push(DetailsGesture::PickEmotion(emotion));
            }
        }
    });

    let mut text = composer.text.clone();
    let response = ui.add(
        egui::TextEdit::multiline(&mut text)
            .hint_text("Select reaction below and write comment here")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        gestures.push(DetailsGesture::EditText(text));
    }
    if response.has_focus() && ui.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter)) {
        gestures.push(DetailsGesture::Key(KeyPress::with_command(Key::Enter)));
    }

    gestures
}
