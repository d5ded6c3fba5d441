// Copyright (C) 2025 The Pokerhands Developers.
// SPDX-License-Identifier: Apache-2.0

//! Pokerhands demo CLI.
//!
//! Deals and ranks hands from the command line:
//!
//! ```bash
//! $ pokerhands-cli deal --players 3 --seed 42
//! $ pokerhands-cli eval 9C 9H 9D 9S TC
//! $ pokerhands-cli best TH JH QH KH AH 5C 6C --json
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use rand::prelude::*;
use std::cmp::Ordering;

use pokerhands_eval::{Card, Deck, Hand};

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deals a hand to each player and announces the winner.
    Deal {
        /// Number of players.
        #[clap(long, short, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=10))]
        players: u8,
        /// Cards dealt to each player, the best five play.
        #[clap(long, short, default_value_t = 5, value_parser = clap::value_parser!(u8).range(5..=7))]
        cards: u8,
        /// Seed for a reproducible deal.
        #[clap(long)]
        seed: Option<u64>,
    },
    /// Describes the rank of a hand of cards.
    Eval {
        /// Card codes such as AS, kd, 9c.
        cards: Vec<String>,
        /// Prints the result as JSON.
        #[clap(long)]
        json: bool,
    },
    /// Picks the best five card hand from a pool of cards.
    Best {
        /// Card codes such as AS, kd, 9c.
        cards: Vec<String>,
        /// Prints the result as JSON.
        #[clap(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Deal {
            players,
            cards,
            seed,
        } => deal(players as usize, cards as usize, seed),
        Command::Eval { cards, json } => eval(&cards, json),
        Command::Best { cards, json } => best(&cards, json),
    }
}

/// Deals `cards_each` cards to each player and compares the hands.
fn deal(players: usize, cards_each: usize, seed: Option<u64>) -> Result<()> {
    let mut deck = match seed {
        Some(seed) => {
            info!("dealing with seed {seed}");
            Deck::new_and_shuffled(&mut StdRng::seed_from_u64(seed))
        }
        None => Deck::new_and_shuffled(&mut rand::rng()),
    };

    let mut winners: Vec<usize> = Vec::new();
    let mut best: Option<Hand> = None;

    for player in 1..=players {
        let hand = Hand::new(&deck.pick(cards_each)?);
        let hand = if cards_each > 5 { hand.best_hand()? } else { hand };

        println!("Player {player}: {hand}");
        println!("  {}", hand.describe());

        match &best {
            None => {
                best = Some(hand);
                winners = vec![player];
            }
            Some(current) => match hand.compare(current) {
                Ordering::Greater => {
                    best = Some(hand);
                    winners = vec![player];
                }
                Ordering::Equal => winners.push(player),
                Ordering::Less => {}
            },
        }
    }

    match winners.as_slice() {
        [winner] => println!("Player {winner} wins"),
        split => {
            let players = split
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" and ");
            println!("Players {players} split the win");
        }
    }

    Ok(())
}

/// Describes the rank of the given cards.
fn eval(codes: &[String], json: bool) -> Result<()> {
    let hand = parse_hand(codes)?;

    if json {
        print_json(&hand);
    } else {
        println!("{}", hand.describe());
    }

    Ok(())
}

/// Finds the best five card hand in the given pool.
fn best(codes: &[String], json: bool) -> Result<()> {
    let pool = parse_hand(codes)?;
    let best = pool.best_hand()?;

    if json {
        print_json(&best);
    } else {
        println!("{best}");
        println!("{}", best.describe());
    }

    Ok(())
}

fn parse_hand(codes: &[String]) -> Result<Hand> {
    if codes.is_empty() {
        bail!("no cards given");
    }

    let cards = codes
        .iter()
        .map(|code| code.parse::<Card>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Hand::new(&cards))
}

fn print_json(hand: &Hand) {
    println!(
        "{}",
        serde_json::json!({
            "cards": hand.cards(),
            "category": hand.value().rank(),
            "description": hand.describe(),
        })
    );
}
