// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card hand view.
use eframe::egui::*;
use log::info;
use rand::prelude::*;

use cardhand_cards::{Card, Deck, egui as cards_egui};
use cardhand_core::hand::{
    CardControl, CardHost, CardId, ClickTarget, ControlMode, Hand, HandConfig, PointerEvent,
};

use crate::gui::{App, Config, View};

/// Storage key for the persisted hand options.
const STORAGE_KEY: &str = "hand-options";

const HELP: &str = indoc::indoc! {"
    Press a card to control the hand.

    The top mini card on the right selects single mode,
    presses target only the pressed card. The stacked
    minis below select all mode, presses target every
    card in the hand.

    Flippable turns cards face down, in all mode the
    whole hand follows the pressed card. Peekable
    reveals a card while the button is held.

    DEAL draws a new hand from a shuffled deck.
"};

/// One card child hosted by the view.
#[derive(Debug)]
struct CardState {
    id: CardId,
    card: Card,
    hidden: bool,
    peeking: bool,
    peekable: bool,
    flippable: bool,
}

impl CardState {
    fn new(id: CardId, card: Card) -> Self {
        Self {
            id,
            card,
            hidden: false,
            peeking: false,
            peekable: true,
            flippable: true,
        }
    }
}

impl CardControl for CardState {
    fn flip(&mut self) {
        self.hidden = !self.hidden;
    }

    fn peek(&mut self, event: &PointerEvent) {
        self.peeking = event.pressed;
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn set_peekable(&mut self, peekable: bool) {
        self.peekable = peekable;
    }

    fn set_flippable(&mut self, flippable: bool) {
        self.flippable = flippable;
    }
}

/// The card children the view hosts.
#[derive(Default)]
struct CardsHost {
    cards: Vec<CardState>,
    next_id: u64,
}

impl CardsHost {
    /// Deals a new hand of cards, high ranks first.
    fn deal(&mut self, config: &Config) {
        let mut cards = match config.seed {
            Some(seed) => deal_cards(config.cards, &mut StdRng::seed_from_u64(seed)),
            None => deal_cards(config.cards, &mut rand::rng()),
        };
        cards.sort_by(|a, b| b.cmp(a));

        let mut next_id = self.next_id;
        self.cards = cards
            .into_iter()
            .map(|card| {
                next_id += 1;
                CardState::new(CardId::new(next_id), card)
            })
            .collect();
        self.next_id = next_id;

        info!(
            "Dealt hand {:?}",
            self.cards.iter().map(|c| c.card.to_string()).collect::<Vec<_>>()
        );
    }
}

impl CardHost for CardsHost {
    type Card = CardState;

    fn scan(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id).collect()
    }

    fn card_mut(&mut self, id: CardId) -> Option<&mut CardState> {
        self.cards.iter_mut().find(|c| c.id == id)
    }
}

fn deal_cards<R: Rng>(n: usize, rng: &mut R) -> Vec<Card> {
    let mut deck = Deck::new_and_shuffled(rng);
    (0..n).map(|_| deck.deal()).collect()
}

/// Card hand view.
pub struct HandView {
    hand: Hand,
    host: CardsHost,
    show_help: bool,
}

impl View for HandView {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame, app: &mut App) {
        Window::new("Card Hand")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .title_bar(false)
            .frame(
                Frame::NONE
                    .fill(Self::FELT_COLOR)
                    .inner_margin(Margin::same(20))
                    .corner_radius(7.0),
            )
            .show(ctx, |ui| {
                self.paint_hand(ui, app);
                ui.add_space(14.0);
                self.paint_settings(ui, app);
            });

        if self.show_help {
            Window::new("Help")
                .collapsible(false)
                .resizable(false)
                .anchor(Align2::CENTER_TOP, vec2(0.0, 20.0))
                .show(ctx, |ui| {
                    ui.label(RichText::new(HELP).font(FontId::new(13.0, FontFamily::Monospace)));
                });
        }
    }

    fn next(
        &mut self,
        _ctx: &Context,
        _frame: &mut eframe::Frame,
        _app: &mut App,
    ) -> Option<Box<dyn View>> {
        None
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, STORAGE_KEY, self.hand.config());
    }
}

impl HandView {
    const CARD_SIZE: Vec2 = vec2(84.0, 126.0);
    const CARD_GAP: f32 = 8.0;
    const MINI_SIZE: Vec2 = vec2(20.0, 35.0);
    const SELECTOR_LX: f32 = 46.0;
    const SELECTOR_PAD: f32 = 24.0;
    const TEXT_FONT: FontId = FontId::new(14.0, FontFamily::Monospace);
    const TEXT_COLOR: Color32 = Color32::from_gray(210);
    const BG_COLOR: Color32 = Color32::from_gray(20);
    const FELT_COLOR: Color32 = Color32::from_rgb(15, 75, 35);
    const ACCENT: Color32 = Color32::from_rgb(255, 140, 0);

    /// Creates a new [HandView] dealing the configured hand.
    pub fn new(storage: Option<&dyn eframe::Storage>, app: &App) -> Self {
        let mut host = CardsHost::default();
        host.deal(&app.config);

        let mut hand = Hand::new();
        if let Some(options) = storage.and_then(|s| eframe::get_value::<HandConfig>(s, STORAGE_KEY))
        {
            apply_options(&mut hand, &options, &mut host);
        }

        hand.mount(&mut host);

        Self {
            hand,
            host,
            show_help: false,
        }
    }

    fn paint_hand(&mut self, ui: &mut Ui, app: &mut App) {
        let pressed = ui.input(|i| i.pointer.primary_pressed());
        let released = ui.input(|i| i.pointer.any_released());
        let pointer = ui.input(|i| i.pointer.interact_pos()).unwrap_or_default();

        // A peek lasts while the button is held.
        if released {
            for card in &mut self.host.cards {
                card.peeking = false;
            }
        }

        let n = self.host.cards.len().max(1) as f32;
        let step = if app.config.overlap {
            Self::CARD_SIZE.x * 0.55
        } else {
            Self::CARD_SIZE.x + Self::CARD_GAP
        };

        let lx = step * (n - 1.0) + Self::CARD_SIZE.x + Self::SELECTOR_PAD + Self::SELECTOR_LX;
        let (hand_rect, _) =
            ui.allocate_exact_size(vec2(lx, Self::CARD_SIZE.y + 10.0), Sense::hover());

        let mut origin = None;
        let mut card_rect =
            Rect::from_min_size(hand_rect.left_top() + vec2(0.0, 5.0), Self::CARD_SIZE);

        for (idx, card) in self.host.cards.iter().enumerate() {
            let resp = ui.interact(card_rect, ui.id().with(("card", card.id)), Sense::click());
            if pressed && resp.hovered() {
                origin = Some(idx);
            }

            if card.hidden && !card.peeking {
                cards_egui::paint_back(ui, &card_rect);
            } else {
                cards_egui::paint_face(ui, &card_rect, card.card);
            }

            card_rect = card_rect.translate(vec2(step, 0.0));
        }

        self.paint_mode_selectors(ui, &hand_rect);

        if pressed {
            let event = PointerEvent {
                pos: (pointer.x, pointer.y),
                pressed: true,
            };

            let target = match origin {
                Some(idx) => {
                    // A card that still owns a capability handles its own
                    // press, the hand strips these at render.
                    let card = &mut self.host.cards[idx];
                    if card.flippable {
                        card.flip();
                    }
                    if card.peekable {
                        card.peek(&event);
                    }

                    ClickTarget::Card(card.id)
                }
                None if hand_rect.contains(pointer) => ClickTarget::Other,
                None => return,
            };

            self.hand.handle_pointer(target, &event, &mut self.host);
        }
    }

    fn paint_mode_selectors(&mut self, ui: &mut Ui, hand_rect: &Rect) {
        let mode = self.hand.config().control_mode;

        let single_rect = Rect::from_min_size(
            hand_rect.right_top() + vec2(-Self::MINI_SIZE.x, 5.0),
            Self::MINI_SIZE,
        );

        let resp = ui
            .interact(single_rect, ui.id().with("single-selector"), Sense::click())
            .on_hover_text(self.hand.single_tooltip());
        paint_mini_card(ui, &single_rect, mode == ControlMode::Single);
        if resp.clicked() {
            self.hand.change_control_mode(ControlMode::Single, &mut self.host);
        }

        // The all selector is a stack of four minis.
        let anchor = Rect::from_min_size(
            single_rect.left_top() + vec2(-12.0, Self::MINI_SIZE.y + 12.0),
            Self::MINI_SIZE,
        );
        let region = Rect::from_min_size(anchor.min, Self::MINI_SIZE + vec2(12.0, 9.0));

        let resp = ui
            .interact(region, ui.id().with("all-selector"), Sense::click())
            .on_hover_text(self.hand.all_tooltip());
        for idx in 0..4 {
            let rect = anchor.translate(vec2(4.0 * idx as f32, 3.0 * idx as f32));
            paint_mini_card(ui, &rect, mode == ControlMode::All);
        }
        if resp.clicked() {
            self.hand.change_control_mode(ControlMode::All, &mut self.host);
        }
    }

    fn paint_settings(&mut self, ui: &mut Ui, app: &mut App) {
        ui.horizontal(|ui| {
            let mut peekable = self.hand.config().peekable;
            let label = RichText::new("Peekable").font(Self::TEXT_FONT);
            if ui.checkbox(&mut peekable, label).changed() {
                self.hand
                    .set_attribute("peekable", peekable.then_some(""), &mut self.host);
            }

            let mut flippable = self.hand.config().flippable;
            let label = RichText::new("Flippable").font(Self::TEXT_FONT);
            if ui.checkbox(&mut flippable, label).changed() {
                self.hand
                    .set_attribute("flippable", flippable.then_some(""), &mut self.host);
            }

            ui.add_space(20.0);

            let btn = Button::new(
                RichText::new("DEAL")
                    .font(Self::TEXT_FONT)
                    .color(Self::TEXT_COLOR),
            )
            .fill(Self::BG_COLOR);
            if ui.add(btn).clicked() {
                self.host.deal(&app.config);
                self.hand.render(&mut self.host);
            }

            let btn = Button::new(
                RichText::new("HELP")
                    .font(Self::TEXT_FONT)
                    .color(Self::TEXT_COLOR),
            )
            .fill(Self::BG_COLOR);
            if ui.add(btn).clicked() {
                self.show_help = !self.show_help;
            }

            ui.add_space(20.0);

            let mode = self.hand.config().control_mode;
            ui.label(
                RichText::new(format!("Mode: {mode}"))
                    .font(Self::TEXT_FONT)
                    .color(Self::TEXT_COLOR),
            );
        });

        if !self.hand.config().is_interactive() {
            ui.add_space(6.0);
            ui.label(
                RichText::new("Enable peekable or flippable to interact with the cards")
                    .font(Self::TEXT_FONT)
                    .color(Color32::RED),
            );
        }
    }
}

/// Replays stored options through the attribute mirror.
fn apply_options(hand: &mut Hand, options: &HandConfig, host: &mut CardsHost) {
    hand.set_attribute(
        "controlsingletooltip",
        Some(options.control_single_tooltip.as_str()),
        host,
    );
    hand.set_attribute(
        "controlalltooltip",
        Some(options.control_all_tooltip.as_str()),
        host,
    );
    hand.set_attribute("controlmode", Some(options.control_mode.as_attr()), host);

    if options.peekable {
        hand.set_attribute("peekable", Some(""), host);
    }
    if options.flippable {
        hand.set_attribute("flippable", Some(""), host);
    }
}

fn paint_mini_card(ui: &mut Ui, rect: &Rect, active: bool) {
    let stroke = if active {
        Stroke::new(2.0, HandView::ACCENT)
    } else {
        Stroke::new(2.0, HandView::ACCENT.gamma_multiply(0.4))
    };

    ui.painter().rect(
        *rect,
        4.0,
        Color32::from_black_alpha(200),
        stroke,
        StrokeKind::Inside,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardhand_cards::{Rank, Suit};

    fn config(cards: usize, seed: u64) -> Config {
        Config {
            cards,
            seed: Some(seed),
            overlap: false,
        }
    }

    #[test]
    fn deal_assigns_fresh_ids() {
        let mut host = CardsHost::default();
        host.deal(&config(5, 1));
        let first: Vec<_> = host.cards.iter().map(|c| c.id).collect();

        host.deal(&config(5, 1));
        let second: Vec<_> = host.cards.iter().map(|c| c.id).collect();

        assert_eq!(first.len(), 5);
        assert_eq!(second.len(), 5);
        assert!(first.iter().all(|id| !second.contains(id)));
    }

    #[test]
    fn deal_is_reproducible_with_a_seed() {
        let mut a = CardsHost::default();
        let mut b = CardsHost::default();
        a.deal(&config(7, 42));
        b.deal(&config(7, 42));

        let a: Vec<_> = a.cards.iter().map(|c| c.card).collect();
        let b: Vec<_> = b.cards.iter().map(|c| c.card).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn flip_toggles_hidden() {
        let mut card = CardState::new(CardId::new(1), Card::new(Rank::Ace, Suit::Spades));
        assert!(!card.is_hidden());

        card.flip();
        assert!(card.is_hidden());

        card.flip();
        assert!(!card.is_hidden());
    }

    #[test]
    fn peek_follows_the_pointer_press() {
        let mut card = CardState::new(CardId::new(1), Card::new(Rank::Ace, Suit::Spades));
        card.set_hidden(true);

        card.peek(&PointerEvent {
            pos: (0.0, 0.0),
            pressed: true,
        });
        assert!(card.peeking);

        card.peek(&PointerEvent {
            pos: (0.0, 0.0),
            pressed: false,
        });
        assert!(!card.peeking);
    }

    #[test]
    fn stored_options_replay_through_the_mirror() {
        let mut host = CardsHost::default();
        host.deal(&config(3, 7));

        let mut hand = Hand::new();
        let options = HandConfig {
            control_mode: ControlMode::Single,
            peekable: true,
            flippable: true,
            ..Default::default()
        };
        apply_options(&mut hand, &options, &mut host);

        assert_eq!(hand.config(), &options);

        // Replaying peekable hides the dealt cards.
        assert!(host.cards.iter().all(|c| c.hidden));
    }
}
