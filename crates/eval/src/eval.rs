// Copyright (C) 2025 The Pokerhands Developers.
// SPDX-License-Identifier: Apache-2.0

//! Hand classification and ranking.
//!
//! [HandValue::eval] classifies an exact five card hand into one of the
//! ten categories, keeping just enough of the hand to break ties within
//! the category. The classifiers run strongest first and the first
//! match wins, so the suit and sequence based shapes are settled before
//! the rank count shapes get a say.
//!
//! Two rules differ from casual table rules and are kept on purpose:
//! the ace never plays low, so ace to five is no straight, and a five
//! card run in one suit is never classified as a plain flush or plain
//! straight but always as a straight flush or royal flush.
use ahash::AHashMap;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use pokerhands_cards::{Card, Rank, Suit};

/// Hand categories, weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HandRank {
    /// No pair, no run, mixed suits.
    HighCard = 1,
    /// Exactly one paired rank.
    OnePair,
    /// Two distinct paired ranks.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five sequential ranks in mixed suits.
    Straight,
    /// Five cards of one suit, not sequential.
    Flush,
    /// Three cards of one rank and two of another.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// Five sequential ranks in one suit, below ace high.
    StraightFlush,
    /// Ten to ace in one suit.
    RoyalFlush,
}

/// A classified hand value.
///
/// The variant is the hand category and the payload is the minimal data
/// needed to break ties between two hands of that category. Suits never
/// break ties: two royal flushes compare equal whatever their suits.
///
/// Comparison is exposed as the [HandValue::compare] method rather than
/// an `Ord` implementation because [HandValue::NotRankable] compares
/// equal to any other value, which no lawful `Ord` can express.
#[derive(Debug, Clone, Copy)]
pub enum HandValue {
    /// All five cards, highest rank first.
    HighCard([Card; 5]),
    /// The paired rank and the three kickers, highest first.
    OnePair(Rank, [Rank; 3]),
    /// High pair rank, low pair rank, kicker rank.
    TwoPair(Rank, Rank, Rank),
    /// The tripled rank.
    ThreeOfAKind(Rank),
    /// The highest rank of the run.
    Straight(Rank),
    /// All five cards, highest rank first.
    Flush([Card; 5]),
    /// The tripled rank and the paired rank.
    FullHouse(Rank, Rank),
    /// The quadrupled rank.
    FourOfAKind(Rank),
    /// The highest rank of the run.
    StraightFlush(Rank),
    /// The suit of the ten to ace run.
    RoyalFlush(Suit),
    /// A hand that is not five cards, with its card count.
    NotRankable(usize),
}

impl HandValue {
    /// Classifies an exact five card hand.
    pub fn eval(cards: &[Card; 5]) -> HandValue {
        let mut by_rank = *cards;
        by_rank.sort_by(|a, b| b.rank().cmp(&a.rank()));

        let suited = is_suited(cards);
        let sequential = is_sequential(&by_rank);
        let groups = rank_groups(cards);

        if suited && sequential {
            let high = by_rank[0];
            if high.rank() == Rank::Ace {
                return HandValue::RoyalFlush(high.suit());
            }
            return HandValue::StraightFlush(high.rank());
        }

        if shape_is(&groups, &[4, 1]) {
            return HandValue::FourOfAKind(groups[0].1);
        }

        if shape_is(&groups, &[3, 2]) {
            return HandValue::FullHouse(groups[0].1, groups[1].1);
        }

        if suited {
            return HandValue::Flush(by_rank);
        }

        if sequential {
            return HandValue::Straight(by_rank[0].rank());
        }

        if shape_is(&groups, &[3, 1, 1]) {
            return HandValue::ThreeOfAKind(groups[0].1);
        }

        if shape_is(&groups, &[2, 2, 1]) {
            return HandValue::TwoPair(groups[0].1, groups[1].1, groups[2].1);
        }

        if shape_is(&groups, &[2, 1, 1, 1]) {
            return HandValue::OnePair(groups[0].1, [groups[1].1, groups[2].1, groups[3].1]);
        }

        HandValue::HighCard(by_rank)
    }

    /// Returns this value's category, or `None` for an unrankable hand.
    pub fn rank(&self) -> Option<HandRank> {
        let rank = match self {
            HandValue::HighCard(_) => HandRank::HighCard,
            HandValue::OnePair(..) => HandRank::OnePair,
            HandValue::TwoPair(..) => HandRank::TwoPair,
            HandValue::ThreeOfAKind(_) => HandRank::ThreeOfAKind,
            HandValue::Straight(_) => HandRank::Straight,
            HandValue::Flush(_) => HandRank::Flush,
            HandValue::FullHouse(..) => HandRank::FullHouse,
            HandValue::FourOfAKind(_) => HandRank::FourOfAKind,
            HandValue::StraightFlush(_) => HandRank::StraightFlush,
            HandValue::RoyalFlush(_) => HandRank::RoyalFlush,
            HandValue::NotRankable(_) => return None,
        };

        Some(rank)
    }

    /// Compares two hand values, category first, then the category's own
    /// tie break.
    ///
    /// An unrankable value compares equal to anything, mirroring the
    /// degenerate comparison contract for hands that are not five cards.
    pub fn compare(&self, other: &HandValue) -> Ordering {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) if a == b => self.break_tie(other),
            (Some(a), Some(b)) => a.cmp(&b),
            _ => Ordering::Equal,
        }
    }

    fn break_tie(&self, other: &HandValue) -> Ordering {
        use HandValue::*;
        match (self, other) {
            (HighCard(a), HighCard(b)) | (Flush(a), Flush(b)) => cmp_by_rank(a, b),
            (OnePair(p1, k1), OnePair(p2, k2)) => p1.cmp(p2).then_with(|| k1.cmp(k2)),
            (TwoPair(h1, l1, k1), TwoPair(h2, l2, k2)) => {
                h1.cmp(h2).then_with(|| l1.cmp(l2)).then_with(|| k1.cmp(k2))
            }
            (ThreeOfAKind(a), ThreeOfAKind(b))
            | (Straight(a), Straight(b))
            | (FourOfAKind(a), FourOfAKind(b))
            | (StraightFlush(a), StraightFlush(b)) => a.cmp(b),
            (FullHouse(t1, p1), FullHouse(t2, p2)) => t1.cmp(t2).then_with(|| p1.cmp(p2)),
            (RoyalFlush(_), RoyalFlush(_)) => Ordering::Equal,
            _ => unreachable!("tie break on mismatched categories"),
        }
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandValue::HighCard(cards) => write!(f, "High card {}", cards[0]),
            HandValue::OnePair(pair, _) => write!(f, "One pair of {pair}s"),
            HandValue::TwoPair(high, low, _) => write!(f, "Two pair, {high}s and {low}s"),
            HandValue::ThreeOfAKind(trips) => write!(f, "Three of a kind of {trips}s"),
            HandValue::Straight(high) => write!(f, "Straight, {high} high"),
            HandValue::Flush(cards) => write!(f, "Flush, {} high", cards[0].rank()),
            HandValue::FullHouse(trips, pair) => write!(f, "Full house, {trips}s over {pair}s"),
            HandValue::FourOfAKind(quads) => write!(f, "Four of a kind of {quads}s"),
            HandValue::StraightFlush(high) => write!(f, "Straight flush, {high} high"),
            HandValue::RoyalFlush(suit) => write!(f, "Royal flush of {suit}"),
            HandValue::NotRankable(count) => {
                write!(f, "An unrankable hand with {count} card(s)")
            }
        }
    }
}

/// True when all five cards share one suit.
fn is_suited(cards: &[Card; 5]) -> bool {
    cards.iter().all(|c| c.suit() == cards[0].suit())
}

/// True when the five ranks form a strict one step run.
///
/// Takes the cards sorted by rank, highest first. The ace only plays
/// high, so ace to five is not a run.
fn is_sequential(by_rank: &[Card; 5]) -> bool {
    by_rank
        .windows(2)
        .all(|w| w[0].rank().value() == w[1].rank().value() + 1)
}

/// Rank groups ordered by count, then rank, both descending.
///
/// The head group names the dominant shape (the quads, the trips, the
/// high pair) and trailing single card groups are the kickers in order.
fn rank_groups(cards: &[Card; 5]) -> Vec<(usize, Rank)> {
    let mut counts = AHashMap::with_capacity(5);
    for card in cards {
        *counts.entry(card.rank()).or_insert(0usize) += 1;
    }

    let mut groups = counts
        .into_iter()
        .map(|(rank, count)| (count, rank))
        .collect::<Vec<_>>();
    groups.sort_by(|a, b| b.cmp(a));
    groups
}

fn shape_is(groups: &[(usize, Rank)], shape: &[usize]) -> bool {
    groups.len() == shape.len() && groups.iter().zip(shape).all(|((count, _), want)| count == want)
}

/// Position by position rank comparison of descending sorted cards.
fn cmp_by_rank(a: &[Card; 5], b: &[Card; 5]) -> Ordering {
    a.iter().map(|c| c.rank()).cmp(b.iter().map(|c| c.rank()))
}

/// Calls the `f` closure for every five card subset of `cards`.
///
/// Subsets are generated in index order, so for a given input the
/// sequence is deterministic. Does nothing for fewer than five cards.
pub fn for_each_five<F>(cards: &[Card], mut f: F)
where
    F: FnMut(&[Card; 5]),
{
    let n = cards.len();

    for c1 in 0..n {
        for c2 in (c1 + 1)..n {
            for c3 in (c2 + 1)..n {
                for c4 in (c3 + 1)..n {
                    for c5 in (c4 + 1)..n {
                        f(&[cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]]);
                    }
                }
            }
        }
    }
}
