// Copyright (C) 2025 The Pokerhands Developers.
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Errors from card parsing and deck operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    /// Not a rank code.
    #[error("invalid rank code {0:?}")]
    InvalidRank(char),
    /// Not a suit code.
    #[error("invalid suit code {0:?}")]
    InvalidSuit(char),
    /// Not a two character card code.
    #[error("invalid card code {0:?}")]
    InvalidCard(String),
    /// Asked a deck for more cards than it holds.
    #[error("cannot pick {requested} cards, {available} available")]
    NotEnoughCards {
        /// Cards requested from the deck.
        requested: usize,
        /// Cards left in the deck.
        available: usize,
    },
}

/// Card rank.
///
/// Ranks order by numeric strength with two lowest and ace highest; the
/// ace never plays low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Two
    Two = 2,
    /// Three
    Three,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks, lowest first.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The numeric strength, 2 through 14.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Parses a rank from its one character code.
    pub fn from_char(c: char) -> Result<Rank, CardError> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(CardError::InvalidRank(c)),
        };

        Ok(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rank::Two => "two",
            Rank::Three => "three",
            Rank::Four => "four",
            Rank::Five => "five",
            Rank::Six => "six",
            Rank::Seven => "seven",
            Rank::Eight => "eight",
            Rank::Nine => "nine",
            Rank::Ten => "ten",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
            Rank::Ace => "ace",
        };

        write!(f, "{name}")
    }
}

/// Card suit.
///
/// The tags give suits a fixed arbitrary order for display and
/// iteration; suits carry no weight in hand strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit.
    Spades = 1,
    /// Hearts suit.
    Hearts,
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds].into_iter()
    }

    /// Parses a suit from its one character code.
    pub fn from_char(c: char) -> Result<Suit, CardError> {
        let suit = match c.to_ascii_uppercase() {
            'S' => Suit::Spades,
            'H' => Suit::Hearts,
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            _ => return Err(CardError::InvalidSuit(c)),
        };

        Ok(suit)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
        };

        write!(f, "{name}")
    }
}

/// A playing card.
///
/// Cards are equal when both rank and suit match, while card against
/// card ordering goes by rank alone. `Card` therefore implements no
/// `Ord`; callers sort with a [Card::rank] key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a card from a rank and a suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => {
                Ok(Card::new(Rank::from_char(rank)?, Suit::from_char(suit)?))
            }
            _ => Err(CardError::InvalidCard(s.to_string())),
        }
    }
}

/// A cards deck.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Removes and returns the first `count` cards.
    pub fn pick(&mut self, count: usize) -> Result<Vec<Card>, CardError> {
        if count > self.cards.len() {
            return Err(CardError::NotEnoughCards {
                requested: count,
                available: self.cards.len(),
            });
        }

        Ok(self.cards.drain(..count).collect())
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn rank_order() {
        assert!(Rank::Two < Rank::Three);
        assert!(Rank::Ten < Rank::Jack);
        assert!(Rank::King < Rank::Ace);
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ace.value(), 14);
    }

    #[test]
    fn card_equality() {
        let nc = Card::new(Rank::Nine, Suit::Clubs);
        let nh = Card::new(Rank::Nine, Suit::Hearts);
        assert_eq!(nc, Card::new(Rank::Nine, Suit::Clubs));
        assert_ne!(nc, nh);
        assert_eq!(nc.rank(), nh.rank());
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "king of diamonds");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "five of spades");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "ten of hearts");

        let c = Card::new(Rank::Ace, Suit::Clubs);
        assert_eq!(c.to_string(), "ace of clubs");
    }

    #[test]
    fn card_parsing() {
        let c: Card = "KD".parse().unwrap();
        assert_eq!(c, Card::new(Rank::King, Suit::Diamonds));

        let c: Card = "9c".parse().unwrap();
        assert_eq!(c, Card::new(Rank::Nine, Suit::Clubs));

        let c: Card = " tS ".parse().unwrap();
        assert_eq!(c, Card::new(Rank::Ten, Suit::Spades));

        assert_eq!("XD".parse::<Card>(), Err(CardError::InvalidRank('X')));
        assert_eq!("9X".parse::<Card>(), Err(CardError::InvalidSuit('X')));
        assert_eq!(
            "9".parse::<Card>(),
            Err(CardError::InvalidCard("9".to_string()))
        );
        assert_eq!(
            "9CX".parse::<Card>(),
            Err(CardError::InvalidCard("9CX".to_string()))
        );
    }

    #[test]
    fn deck_unique_cards() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            cards.insert(card);
        }

        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn deck_pick() {
        let mut deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck.pick(5).unwrap();
        assert_eq!(cards.len(), 5);
        assert_eq!(deck.count(), 47);

        let cards = deck.pick(0).unwrap();
        assert!(cards.is_empty());
        assert_eq!(deck.count(), 47);

        assert_eq!(
            deck.pick(48),
            Err(CardError::NotEnoughCards {
                requested: 48,
                available: 47,
            })
        );

        let cards = deck.pick(47).unwrap();
        assert_eq!(cards.len(), 47);
        assert!(deck.is_empty());
    }

    #[test]
    fn deck_seeded_shuffle() {
        let d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
        let d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));

        let c1 = d1.into_iter().collect::<Vec<_>>();
        let c2 = d2.into_iter().collect::<Vec<_>>();
        assert_eq!(c1, c2);
    }
}
