// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Filter/menu bar, sort bar and statistics panel.

use crate::util::sort::SortKind;
use crate::view::{FilterGesture, MenuSection, Page, PageEvent};

/// Display the filter bar and, while on the films board, the sort bar.
pub fn show(ui: &mut egui::Ui, page: &Page) -> Vec<PageEvent> {
    let mut events = Vec::new();

    if let Some(bar) = page.filter_bar() {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 8.0;

            for entry in &bar.entries {
                let text = format!("{} {}", entry.name, entry.count);
                if ui.selectable_label(bar.active == Some(entry.kind), text).clicked() {
                    events.push(PageEvent::Filter(FilterGesture::Select(entry.kind)));
                }
            }

            ui.separator();

            let on_stats = bar.section == MenuSection::Statistics;
            if ui.selectable_label(on_stats, "Stats").clicked() {
                events.push(PageEvent::Filter(FilterGesture::Statistics));
            }
        });
    }

    if page.section() == MenuSection::Films {
        if let Some(sort) = page.sort_bar() {
            ui.separator();
            ui.horizontal(|ui| {
                for kind in SortKind::ALL {
                    if ui.selectable_label(sort.active == kind, kind.label()).clicked() {
                        events.push(PageEvent::Sort(kind));
                    }
                }
            });
        }
    }

    events
}

/// Display the statistics panel.
pub fn statistics(ui: &mut egui::Ui, page: &Page) {
    let Some(stats) = page.statistics() else {
        return;
    };

    ui.heading("Statistics");
    ui.add_space(10.0);
    egui::Grid::new("statistics").num_columns(2).show(ui, |ui| {
        ui.label("In watchlist");
        ui.label(stats.watchlist.to_string());
        ui.end_row();

        ui.label("Watched");
        ui.label(stats.watched.to_string());
        ui.end_row();

        ui.label("Favorites");
        ui.label(stats.favorites.to_string());
        ui.end_row();

        ui.label("Average rating of watched");
        match stats.average_rating {
            Some(rating) => ui.label(format!("{rating:.1}")),
            None => ui.label(egui::RichText::new("n/a").weak()),
        };
        ui.end_row();
    });
}
