// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all -- --cards 7
// ...
// Total hands      133784560
//
// High Card:       23294460
// One Pair:        58627800
// Two Pairs:       31433400
// Three of a Kind: 6461620
// Straight:        6180020
// Flush:           4047644
// Full House:      3473184
// Four of a Kind:  224848
// Straight Flush:  41584
// ```
use clap::{Parser, value_parser};
use std::time::Instant;

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The number of cards in each hand.
    #[clap(long, short, default_value_t = 5, value_parser = value_parser!(u8).range(5..=7))]
    cards: u8,
}

fn main() {
    let cli = Cli::parse();

    let now = Instant::now();
    let mut counts = [0usize; 9];

    Deck::default().for_each(cli.cards as usize, |hand| {
        let category = HandRating::eval(hand).category();
        counts[category as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::ALL {
        println!("{:<17}{}", format!("{category}:"), counts[category as usize]);
    }
}
