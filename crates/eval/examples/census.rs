// Copyright (C) 2025 The Pokerhands Developers.
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example census
// Total hands      2598960
// Elapsed:         0.392s
//
// High card:       1303560
// One pair:        1098240
// Two pair:        123552
// Three of a kind: 54912
// Straight:        9180
// Flush:           5112
// Full house:      3744
// Four of a kind:  624
// Straight flush:  32
// Royal flush:     4
// ```
//
// Note the straight and flush counts: the ace never plays low here, so
// the wheel runs land in high card and flush instead.

use std::time::Instant;

use pokerhands_eval::{Deck, HandRank, HandValue, for_each_five};

fn main() {
    // Classify all C(52, 5) hands.
    let deck = Deck::default().into_iter().collect::<Vec<_>>();

    let now = Instant::now();
    let mut counts = [0usize; 11];

    for_each_five(&deck, |hand| {
        if let Some(rank) = HandValue::eval(hand).rank() {
            counts[rank as usize] += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {elapsed:.3}s\n");

    println!("High card:       {}", counts[HandRank::HighCard as usize]);
    println!("One pair:        {}", counts[HandRank::OnePair as usize]);
    println!("Two pair:        {}", counts[HandRank::TwoPair as usize]);
    println!("Three of a kind: {}", counts[HandRank::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[HandRank::Straight as usize]);
    println!("Flush:           {}", counts[HandRank::Flush as usize]);
    println!("Full house:      {}", counts[HandRank::FullHouse as usize]);
    println!("Four of a kind:  {}", counts[HandRank::FourOfAKind as usize]);
    println!("Straight flush:  {}", counts[HandRank::StraightFlush as usize]);
    println!("Royal flush:     {}", counts[HandRank::RoyalFlush as usize]);
}
