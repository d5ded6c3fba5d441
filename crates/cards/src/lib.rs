// Copyright (C) 2025 The Pokerhands Developers.
// SPDX-License-Identifier: Apache-2.0

//! Pokerhands card and deck types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use pokerhands_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert_eq!(kd.to_string(), "king of diamonds");
//! ```
//!
//! cards parse from the conventional two character codes, case
//! insensitive:
//!
//! ```
//! # use pokerhands_cards::{Card, Rank, Suit};
//! let td: Card = "TD".parse().unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! assert!("TX".parse::<Card>().is_err());
//! ```
//!
//! and a [Deck] type for shuffling and picking hands:
//!
//! ```
//! # use pokerhands_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let cards = deck.pick(5).unwrap();
//! assert_eq!(cards.len(), 5);
//! assert_eq!(deck.count(), 47);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, CardError, Deck, Rank, Suit};
