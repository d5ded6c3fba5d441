// Copyright (C) 2025 The Pokerhands Developers.
// SPDX-License-Identifier: Apache-2.0

//! Pokerhands hand evaluator.
//!
//! Classifies five card hands into the ten standard poker categories,
//! compares hands of the same size, and picks the strongest five card
//! hand out of a larger pool.
//!
//! To rank a hand build it from cards, or parse it from card codes, and
//! ask for its description or value:
//!
//! ```
//! # use pokerhands_eval::{Hand, HandRank};
//! let hand = Hand::try_from("9C 9H 9D 9S TC").unwrap();
//! assert_eq!(hand.describe(), "Four of a kind of nines");
//! assert_eq!(hand.value().rank(), Some(HandRank::FourOfAKind));
//! ```
//!
//! hands of the same size compare by category first and within the
//! category by the ranks that matter there:
//!
//! ```
//! # use std::cmp::Ordering;
//! # use pokerhands_eval::Hand;
//! let flush = Hand::try_from("9C 3C QC JC TC").unwrap();
//! let straight = Hand::try_from("9C KH QD JC TC").unwrap();
//! assert_eq!(flush.compare(&straight), Ordering::Greater);
//! ```
//!
//! and a pool of more than five cards yields its best five card hand:
//!
//! ```
//! # use pokerhands_eval::Hand;
//! let pool = Hand::try_from("TH JH QH KH AH 5C 6C").unwrap();
//! let best = pool.best_hand().unwrap();
//! assert_eq!(best.describe(), "Royal flush of hearts");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub mod hand;

pub use eval::{HandRank, HandValue, for_each_five};
pub use hand::{EvalError, Hand};

// Reexport cards types.
pub use pokerhands_cards::{Card, CardError, Deck, Rank, Suit};
