// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct Cli {
        /// The number of cards to deal.
        #[arg(long, short, default_value_t = 5)]
        cards: usize,
        /// Shuffle seed for a reproducible deal.
        #[arg(long, short)]
        seed: Option<u64>,
        /// Fan the cards with overlapping edges.
        #[arg(long)]
        overlap: bool,
        /// The configuration storage key.
        #[arg(long)]
        storage: Option<String>,
    }

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    anyhow::ensure!(
        (1..=9).contains(&cli.cards),
        "cards must be between 1 and 9"
    );

    let init_size = [820.0, 420.0];
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(init_size)
            .with_min_inner_size(init_size)
            .with_title("Card Hand"),
        ..Default::default()
    };

    let config = cardhand_gui::Config {
        cards: cli.cards,
        seed: cli.seed,
        overlap: cli.overlap,
    };

    let app_name = cli
        .storage
        .map(|s| format!("cardhand-{s}"))
        .unwrap_or_else(|| "cardhand".to_string());

    eframe::run_native(
        &app_name,
        native_options,
        Box::new(|cc| Ok(Box::new(cardhand_gui::AppFrame::new(config, cc)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("canvas")
            .expect("Failed to find canvas element")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("canvas was not a HtmlCanvasElement");

        let config = cardhand_gui::Config {
            cards: 5,
            seed: None,
            overlap: false,
        };

        eframe::WebRunner::new()
            .start(
                canvas,
                Default::default(),
                Box::new(|cc| Ok(Box::new(cardhand_gui::AppFrame::new(config, cc)))),
            )
            .await
            .expect("failed to start eframe");
    });
}
