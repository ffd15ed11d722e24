// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! The app draws the page owned by the site presenter, collects the
//! gestures reported by the UI components and dispatches them once per
//! frame, after drawing, so the page is never mutated mid-frame.

use crate::config::BoardConfig;
use crate::models::Catalog;
use crate::presenter::SitePresenter;
use crate::ui::{board, details, menu};
use crate::view::{Key, KeyPress, MenuSection, PageEvent};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

/// Main application state.
pub struct FilmBoardApp {
    site: SitePresenter,

    /// Receiver for background catalog loading
    catalog_loader: Option<Receiver<anyhow::Result<Catalog>>>,

    /// Loading state message
    loading_message: Option<String>,
}

impl FilmBoardApp {
    /// Create the application and render the initial board.
    pub fn new(config: BoardConfig, catalog: Catalog) -> Self {
        let mut site = SitePresenter::new(config, catalog);
        site.init();
        Self {
            site,
            catalog_loader: None,
            loading_message: None,
        }
    }

    /// Import a catalog file on a background thread.
    fn open_catalog(&mut self, path: PathBuf) {
        let (sender, receiver) = channel();
        self.catalog_loader = Some(receiver);
        self.loading_message = Some(format!("Loading {}...", path.display()));

        std::thread::spawn(move || {
            let _ = sender.send(crate::io::catalog::import(&path));
        });
    }

    fn poll_catalog_loader(&mut self) {
        let Some(receiver) = &self.catalog_loader else {
            return;
        };
        let Ok(result) = receiver.try_recv() else {
            return;
        };
        self.catalog_loader = None;
        self.loading_message = None;

        match result {
            Ok(catalog) => self.site.load_catalog(catalog),
            Err(e) => log::error!("Failed to load catalog: {:#}", e),
        }
    }
}

impl eframe::App for FilmBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_catalog_loader();

        // Keep polling while a catalog is loading
        if self.loading_message.is_some() {
            ctx.request_repaint();
        }

        let mut open_path = None;

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Catalog...").clicked() {
                        open_path = rfd::FileDialog::new()
                            .add_filter("Catalogs", &["json", "yaml", "yml"])
                            .pick_file();
                        ui.close_menu();
                    }

                    ui.separator();

                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        let page = self.site.page();
        let mut events = Vec::new();

        egui::TopBottomPanel::top("filters").show(ctx, |ui| {
            events.extend(menu::show(ui, page));
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            board::footer(ui, page);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(ref message) = self.loading_message {
                ui.centered_and_justified(|ui| {
                    ui.vertical_centered(|ui| {
                        ui.spinner();
                        ui.label(message);
                    });
                });
                return;
            }
            match page.section() {
                MenuSection::Films => events.extend(board::show(ui, page)),
                MenuSection::Statistics => menu::statistics(ui, page),
            }
        });

        events.extend(details::show(ctx, page));

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            events.push(PageEvent::Key(KeyPress::plain(Key::Escape)));
        }

        for event in events {
            self.site.dispatch(event);
        }

        if let Some(path) = open_path {
            self.open_catalog(path);
        }
    }
}
