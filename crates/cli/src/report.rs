// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity reports.
use showdown_eval::{Card, StartingPair};
use showdown_sim::{Equity, Stats};

/// Formats cards separated by spaces.
pub fn hand_string(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prints the starting hands sorted by win rate.
pub fn print_table(equity: &Equity, top: Option<usize>) {
    let report = equity.report();

    println!(
        "{:<5} {:>10} {:>10} {:>8}",
        "Hand", "Wins", "Losses", "Win %"
    );

    for row in report.iter().take(top.unwrap_or(report.len())) {
        println!(
            "{:<5} {:>10} {:>10} {:>7.2}%",
            row.pair.to_string(),
            row.stats.wins,
            row.stats.losses,
            row.win_rate * 100.0
        );
    }

    println!("\nShowdowns: {}", equity.total_games());
}

fn separator() {
    print!("|");
    for _ in 0..13 {
        print!("-----|");
    }
    println!();
}

/// Formats a chart cell for a win rate.
fn rate_cell(win_rate: Option<f64>) -> String {
    match win_rate {
        Some(rate) => format!("{:>4}", format!("{:.0}%", rate * 100.0)),
        None => format!("{:>4}", "-"),
    }
}

/// Prints the win rates in a chart with the suited hands above the pairs
/// diagonal and the offsuit hands below.
pub fn print_chart(equity: &Equity) {
    let pairs = StartingPair::all().collect::<Vec<_>>();

    separator();

    for row in pairs.chunks(13) {
        print!("|");
        for pair in row {
            print!(" {:<3} |", pair.to_string());
        }
        println!();

        print!("|");
        for pair in row {
            print!(" {}|", rate_cell(equity.get(pair).and_then(Stats::win_rate)));
        }
        println!();

        separator();
    }
}
