// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cardhand playing cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use cardhand_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards:
//!
//! ```
//! # use cardhand_cards::Deck;
//! # use rand::rng;
//! let mut deck = Deck::new_and_shuffled(&mut rng());
//! let hand = (0..5).map(|_| deck.deal()).collect::<Vec<_>>();
//! assert_eq!(hand.len(), 5);
//! ```
//!
//! The **`egui`** feature exports the [egui] module with procedural face
//! and back painting, see the gui crate.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};

#[cfg(feature = "egui")]
pub mod egui;
