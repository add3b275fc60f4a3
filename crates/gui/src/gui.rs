// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cardhand egui app implementation.
use eframe::egui::*;

use crate::hand_view::HandView;

/// App configuration parameters.
#[derive(Debug)]
pub struct Config {
    /// Number of cards to deal.
    pub cards: usize,
    /// Shuffle seed for a reproducible deal.
    pub seed: Option<u64>,
    /// Fan the cards with overlapping edges.
    pub overlap: bool,
}

/// The application state shared by all views.
pub struct App {
    /// The application configuration.
    pub config: Config,
}

/// Traits for UI views.
pub trait View {
    /// Process a view update.
    fn update(&mut self, ctx: &Context, frame: &mut eframe::Frame, app: &mut App);

    /// Returns the next view if any.
    fn next(
        &mut self,
        ctx: &Context,
        frame: &mut eframe::Frame,
        app: &mut App,
    ) -> Option<Box<dyn View>>;

    /// Persists the view options, called by the frame autosave.
    fn save(&mut self, _storage: &mut dyn eframe::Storage) {}
}

/// The UI main frame.
pub struct AppFrame {
    app: App,
    panel: Box<dyn View>,
}

impl AppFrame {
    /// Creates a new App instance.
    pub fn new(config: Config, cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_theme(Theme::Dark);

        log::info!("Creating new app with config: {config:?}");

        let app = App { config };
        let panel = Box::new(HandView::new(cc.storage, &app));

        AppFrame { app, panel }
    }
}

impl eframe::App for AppFrame {
    fn update(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
        self.panel.update(ctx, frame, &mut self.app);

        if let Some(panel) = self.panel.next(ctx, frame, &mut self.app) {
            self.panel = panel;
            self.panel.update(ctx, frame, &mut self.app);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.panel.save(storage);
    }
}
