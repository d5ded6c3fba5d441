// Copyright (C) 2025 The Pokerhands Developers.
// SPDX-License-Identifier: Apache-2.0

//! Hands of cards and the best hand search.
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

use pokerhands_cards::{Card, CardError};

use crate::eval::{HandValue, for_each_five};

/// Errors from hand operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// Best hand search needs a five card pool.
    #[error("best hand needs at least 5 cards, {available} available")]
    NotEnoughCards {
        /// Cards available in the pool.
        available: usize,
    },
    /// A card failed to parse.
    #[error(transparent)]
    Card(#[from] CardError),
}

/// An immutable hand of cards.
///
/// A hand copies the cards it is given and keeps them sorted by rank,
/// lowest first. Any size is allowed; only exact five card hands
/// classify into a category, every other size reports as unrankable.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand copying the given cards.
    pub fn new(cards: &[Card]) -> Hand {
        let mut cards = cards.to_vec();
        cards.sort_by_key(|c| c.rank());
        Hand { cards }
    }

    /// Number of cards in the hand.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The hand's cards, sorted by rank, lowest first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Classifies the hand.
    pub fn value(&self) -> HandValue {
        match <&[Card; 5]>::try_from(self.cards.as_slice()) {
            Ok(cards) => HandValue::eval(cards),
            Err(_) => HandValue::NotRankable(self.cards.len()),
        }
    }

    /// Describes the hand's rank.
    pub fn describe(&self) -> String {
        self.value().to_string()
    }

    /// Compares two hands by hand rank.
    ///
    /// Defined for exact five card hands; when either hand has any other
    /// size the hands compare equal.
    pub fn compare(&self, other: &Hand) -> Ordering {
        if self.count() != 5 || other.count() != 5 {
            return Ordering::Equal;
        }

        self.value().compare(&other.value())
    }

    /// Picks the strongest five card hand out of this hand's cards.
    ///
    /// Every five card subset is evaluated and between equally strong
    /// subsets the first one generated wins. Fails when the hand holds
    /// fewer than five cards.
    pub fn best_hand(&self) -> Result<Hand, EvalError> {
        if self.count() < 5 {
            return Err(EvalError::NotEnoughCards {
                available: self.count(),
            });
        }

        let mut best: Option<([Card; 5], HandValue)> = None;
        for_each_five(&self.cards, |cards| {
            let value = HandValue::eval(cards);
            let beats = match &best {
                Some((_, current)) => value.compare(current) == Ordering::Greater,
                None => true,
            };
            if beats {
                best = Some((*cards, value));
            }
        });

        let (cards, _) = best.expect("a five card pool has at least one subset");
        Ok(Hand::new(&cards))
    }
}

impl PartialEq for Hand {
    /// Hands are equal when they hold the same cards.
    ///
    /// The stored order only fixes ranks, so equal rank cards may sit in
    /// any suit order; equality sorts both sides with suits as well.
    fn eq(&self, other: &Self) -> bool {
        let key = |c: &Card| (c.rank(), c.suit());
        let mut a = self.cards.clone();
        let mut b = other.cards.clone();
        a.sort_by_key(key);
        b.sort_by_key(key);
        a == b
    }
}

impl Eq for Hand {}

impl TryFrom<&str> for Hand {
    type Error = EvalError;

    /// Parses a hand from whitespace separated card codes ("AS kd 9c").
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = s
            .split_whitespace()
            .map(|code| code.parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Hand::new(&cards))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for card in &self.cards {
            write!(f, "{sep}{card}")?;
            sep = ", ";
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokerhands_cards::Deck;

    #[test]
    fn hand_from_deck() {
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        let hand = Hand::new(&deck.pick(5).unwrap());
        assert_eq!(hand.count(), 5);
    }

    #[test]
    fn empty_hand() {
        let hand = Hand::new(&[]);
        assert_eq!(hand.count(), 0);
        assert_eq!(hand.describe(), "An unrankable hand with 0 card(s)");
    }

    #[test]
    fn unrankable_sizes() {
        let two = Hand::try_from("AC KC").unwrap();
        assert_eq!(two.describe(), "An unrankable hand with 2 card(s)");

        let six = Hand::try_from("AC KC 2C QC JC TC").unwrap();
        assert_eq!(six.describe(), "An unrankable hand with 6 card(s)");

        // Unrankable sizes compare equal, to each other and to ranked
        // five card hands.
        assert_eq!(two.compare(&six), Ordering::Equal);
        let five = Hand::try_from("AC KC QC JC TC").unwrap();
        assert_eq!(two.compare(&five), Ordering::Equal);
    }

    #[test]
    fn describe_categories() {
        let checks = [
            ("AC KC QC JC TC", "Royal flush of clubs"),
            ("9H KH QH JH TH", "Straight flush, king high"),
            ("9C 9H 9D 9S TC", "Four of a kind of nines"),
            ("9C 9H 9D TS TC", "Full house, nines over tens"),
            ("9C 3C QC JC TC", "Flush, queen high"),
            ("9C KH QD JC TC", "Straight, king high"),
            ("9C 9H 9D TS 2C", "Three of a kind of nines"),
            ("9C 9H TD TS 2C", "Two pair, tens and nines"),
            ("9C 9H TD 6S 2C", "One pair of nines"),
            ("3C 9H TD 6S 2C", "High card ten of diamonds"),
        ];

        for (codes, description) in checks {
            let hand = Hand::try_from(codes).unwrap();
            assert_eq!(hand.describe(), description, "cards {codes}");
            // Describing again yields the identical string.
            assert_eq!(hand.describe(), description);
        }
    }

    #[test]
    fn flush_beats_straight() {
        let flush = Hand::try_from("9C 3C QC JC TC").unwrap();
        let straight = Hand::try_from("9C KH QD JC TC").unwrap();
        assert_eq!(flush.describe(), "Flush, queen high");
        assert_eq!(straight.describe(), "Straight, king high");
        assert_eq!(flush.compare(&straight), Ordering::Greater);
        assert_eq!(straight.compare(&flush), Ordering::Less);
    }

    #[test]
    fn straight_against_straight() {
        let queen_high = Hand::try_from("9C 8H QD JC TC").unwrap();
        let king_high = Hand::try_from("9C KH QD JC TC").unwrap();
        assert_eq!(queen_high.describe(), "Straight, queen high");
        assert_eq!(queen_high.compare(&king_high), Ordering::Less);
    }

    #[test]
    fn compare_is_an_order() {
        let low = Hand::try_from("9C 9H TD 6S 2C").unwrap();
        let mid = Hand::try_from("9C 9H TD TS 2C").unwrap();
        let high = Hand::try_from("9C 9H 9D TS 2C").unwrap();

        assert_eq!(low.compare(&low), Ordering::Equal);
        assert_eq!(low.compare(&mid), Ordering::Less);
        assert_eq!(mid.compare(&low), Ordering::Greater);
        assert_eq!(low.compare(&high), Ordering::Less);
        assert_eq!(mid.compare(&high), Ordering::Less);
    }

    #[test]
    fn best_hand_royal_flush() {
        let pool = Hand::try_from("TH JH QH KH AH 5C 6C").unwrap();
        let best = pool.best_hand().unwrap();
        assert_eq!(best.describe(), "Royal flush of hearts");
        assert_eq!(best.count(), 5);
    }

    #[test]
    fn best_hand_full_house() {
        let pool = Hand::try_from("TH TD QH QC QS 5C 6C").unwrap();
        let best = pool.best_hand().unwrap();
        assert_eq!(best.describe(), "Full house, queens over tens");
    }

    #[test]
    fn best_hand_of_five_is_the_hand() {
        let hand = Hand::try_from("9C 3C QC JC TC").unwrap();
        let best = hand.best_hand().unwrap();
        assert_eq!(best, hand);
    }

    #[test]
    fn best_hand_needs_five_cards() {
        let hand = Hand::try_from("9C 3C QC").unwrap();
        assert_eq!(
            hand.best_hand(),
            Err(EvalError::NotEnoughCards { available: 3 })
        );
    }

    #[test]
    fn best_hand_prefers_kickers() {
        // The pair of nines must come with the ace and king kickers.
        let pool = Hand::try_from("9C 9H AD KS 7C 3D 2S").unwrap();
        let best = pool.best_hand().unwrap();
        assert_eq!(best, Hand::try_from("9C 9H AD KS 7C").unwrap());
        assert_eq!(best.describe(), "One pair of nines");
    }

    #[test]
    fn hand_parsing_errors() {
        assert!(matches!(
            Hand::try_from("9C XX"),
            Err(EvalError::Card(CardError::InvalidRank('X')))
        ));
    }

    #[test]
    fn hand_to_string() {
        let hand = Hand::try_from("KD 9C").unwrap();
        assert_eq!(hand.to_string(), "nine of clubs, king of diamonds");
    }
}
