// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::{Parser, Subcommand, value_parser};
use log::{error, info};
use rand::{prelude::*, rngs::StdRng};
use std::cmp::{Ordering, Reverse};

use showdown_eval::{Card, Deck, HandRating};
use showdown_sim::Config;

mod report;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deals hands to a table and reports the starting hands win rates.
    Equity {
        /// The number of hands to deal.
        #[clap(long, short, default_value_t = 100_000)]
        trials: u64,
        /// The number of players at the table.
        #[clap(long, short, default_value_t = 8, value_parser = value_parser!(u8).range(1..=23))]
        players: u8,
        /// The random generator seed, a random seed is used if not set.
        #[clap(long, short)]
        seed: Option<u64>,
        /// The number of parallel tasks.
        #[clap(long, default_value_t = 1, value_parser = value_parser!(u16).range(1..=256))]
        tasks: u16,
        /// Shows the win rates in a 13x13 chart.
        #[clap(long)]
        chart: bool,
        /// Shows only the best starting hands.
        #[clap(long)]
        top: Option<usize>,
    },
    /// Deals two seven cards hands from the same deck and compares them.
    Compare {
        /// The number of comparisons.
        #[clap(long, short, default_value_t = 10)]
        count: usize,
        /// The random generator seed, a random seed is used if not set.
        #[clap(long, short)]
        seed: Option<u64>,
    },
    /// Rates a 5, 6, or 7 cards hand, for example `rate AS KS QS JS TS`.
    Rate {
        /// The cards as rank and suit.
        #[clap(required = true, num_args = 5..=7)]
        cards: Vec<Card>,
    },
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Equity {
            trials,
            players,
            seed,
            tasks,
            chart,
            top,
        } => {
            let config = Config {
                trials,
                players: players as usize,
                seed: seed_or_random(seed),
            };

            let equity = if tasks > 1 {
                showdown_sim::par_run(&config, tasks as usize)?
            } else {
                showdown_sim::run(&config)?
            };

            if chart {
                report::print_chart(&equity);
            } else {
                report::print_table(&equity, top);
            }
        }
        Command::Compare { count, seed } => {
            let seed = seed_or_random(seed);
            info!("Compare seed {seed}");

            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..count {
                let mut deck = Deck::new_and_shuffled(&mut rng);
                let mut h1: [Card; 7] = std::array::from_fn(|_| deck.deal());
                let mut h2: [Card; 7] = std::array::from_fn(|_| deck.deal());

                h1.sort_by_key(|c| Reverse((c.rank(), c.suit())));
                h2.sort_by_key(|c| Reverse((c.rank(), c.suit())));

                let (r1, r2) = (HandRating::best_five(&h1), HandRating::best_five(&h2));
                let symbol = match showdown_eval::compare(&r1, &r2) {
                    Ordering::Less => '<',
                    Ordering::Equal => '=',
                    Ordering::Greater => '>',
                };

                println!(
                    "{} {symbol} {}    {r1} {symbol} {r2}",
                    report::hand_string(&h1),
                    report::hand_string(&h2)
                );
            }
        }
        Command::Rate { cards } => {
            for (idx, card) in cards.iter().enumerate() {
                if cards[..idx].contains(card) {
                    bail!("Duplicate card {card}");
                }
            }

            let rating = HandRating::eval(&cards);
            println!("{}: {rating}", report::hand_string(&cards));
        }
    }

    Ok(())
}

fn seed_or_random(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        let seed = rand::rng().random();
        info!("Using random seed {seed}");
        seed
    })
}
