// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Starting hands statistics.
use ahash::HashMap;
use serde::{Deserialize, Serialize};

use showdown_cards::StartingPair;

use crate::{Deal, Outcome};

/// Wins and losses counters for a starting hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of showdowns won or tied.
    pub wins: u64,
    /// Number of showdowns lost.
    pub losses: u64,
}

impl Stats {
    /// Adds an outcome to the counters.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
        }
    }

    /// Adds the other counters to these counters.
    pub fn merge(&mut self, other: &Stats) {
        self.wins += other.wins;
        self.losses += other.losses;
    }

    /// The number of showdowns.
    pub fn games(&self) -> u64 {
        self.wins + self.losses
    }

    /// The fraction of showdowns won, `None` if there are no showdowns.
    pub fn win_rate(&self) -> Option<f64> {
        match self.games() {
            0 => None,
            games => Some(self.wins as f64 / games as f64),
        }
    }
}

/// A row of the equity report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityRow {
    /// The starting hand.
    pub pair: StartingPair,
    /// The starting hand counters.
    pub stats: Stats,
    /// The fraction of showdowns won.
    pub win_rate: f64,
}

/// Showdown statistics for each starting hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Equity {
    stats: HashMap<StartingPair, Stats>,
}

impl Equity {
    /// Rates the deal and credits each player outcome to its starting hand.
    pub fn record(&mut self, deal: &mut Deal) {
        for (pair, outcome) in deal.showdown() {
            self.credit(pair, outcome);
        }
    }

    /// Credits an outcome to a starting hand.
    pub fn credit(&mut self, pair: StartingPair, outcome: Outcome) {
        self.stats.entry(pair).or_default().record(outcome);
    }

    /// Adds the statistics from another simulation.
    pub fn merge(&mut self, other: &Equity) {
        for (pair, stats) in &other.stats {
            self.stats.entry(*pair).or_default().merge(stats);
        }
    }

    /// Returns the statistics for a starting hand.
    pub fn get(&self, pair: &StartingPair) -> Option<&Stats> {
        self.stats.get(pair)
    }

    /// Iterates through the starting hands in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&StartingPair, &Stats)> {
        self.stats.iter()
    }

    /// The number of starting hands seen.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Checks if no starting hand has been seen.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// The number of showdowns across all starting hands.
    pub fn total_games(&self) -> u64 {
        self.stats.values().map(Stats::games).sum()
    }

    /// Returns the starting hands sorted by win rate from the best one.
    pub fn report(&self) -> Vec<EquityRow> {
        let mut rows = self
            .stats
            .iter()
            .filter_map(|(pair, stats)| {
                stats.win_rate().map(|win_rate| EquityRow {
                    pair: *pair,
                    stats: *stats,
                    win_rate,
                })
            })
            .collect::<Vec<_>>();

        rows.sort_by(|a, b| {
            b.win_rate
                .total_cmp(&a.win_rate)
                .then_with(|| b.pair.cmp(&a.pair))
        });

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::Card;

    fn pair(a: &str, b: &str) -> StartingPair {
        StartingPair::new(a.parse::<Card>().unwrap(), b.parse::<Card>().unwrap())
    }

    #[test]
    fn stats_counters() {
        let mut stats = Stats::default();
        assert_eq!(stats.win_rate(), None);

        stats.record(Outcome::Win);
        stats.record(Outcome::Loss);
        stats.record(Outcome::Loss);
        stats.record(Outcome::Win);
        assert_eq!(stats.games(), 4);
        assert_eq!(stats.win_rate(), Some(0.5));

        stats.merge(&Stats { wins: 0, losses: 4 });
        assert_eq!(stats, Stats { wins: 2, losses: 6 });
        assert_eq!(stats.win_rate(), Some(0.25));
    }

    #[test]
    fn equity_merge() {
        let aa = pair("AS", "AH");
        let kq = pair("KS", "QD");

        let mut e1 = Equity::default();
        e1.credit(aa, Outcome::Win);
        e1.credit(kq, Outcome::Loss);

        let mut e2 = Equity::default();
        e2.credit(aa, Outcome::Loss);
        e2.credit(aa, Outcome::Win);

        let mut merged = e1.clone();
        merged.merge(&e2);
        assert_eq!(merged.get(&aa), Some(&Stats { wins: 2, losses: 1 }));
        assert_eq!(merged.get(&kq), Some(&Stats { wins: 0, losses: 1 }));
        assert_eq!(merged.total_games(), 4);
        assert_eq!(merged.len(), 2);

        // Merge order doesn't matter.
        let mut other = e2.clone();
        other.merge(&e1);
        assert_eq!(merged, other);
    }

    #[test]
    fn report_sorted_by_win_rate() {
        let aa = pair("AS", "AH");
        let kq = pair("KS", "QS");
        let t2 = pair("TS", "2D");

        let mut equity = Equity::default();
        equity.credit(t2, Outcome::Loss);
        equity.credit(kq, Outcome::Win);
        equity.credit(kq, Outcome::Loss);
        equity.credit(aa, Outcome::Win);

        let report = equity.report();
        let pairs = report.iter().map(|r| r.pair.to_string()).collect::<Vec<_>>();
        assert_eq!(pairs, ["AA", "KQs", "T2o"]);
        assert_eq!(report[1].win_rate, 0.5);
        assert_eq!(report[2].stats, Stats { wins: 0, losses: 1 });
    }

    #[test]
    fn record_tied_deal() {
        let card = |c: &str| c.parse::<Card>().unwrap();
        let board = ["AS", "KD", "9H", "7C", "4S"].map(card);
        let mut deal = Deal::new(board, vec![["2H", "3D"].map(card), ["2C", "3C"].map(card)]);

        let mut equity = Equity::default();
        equity.record(&mut deal);

        assert_eq!(equity.get(&pair("2H", "3D")), Some(&Stats { wins: 1, losses: 0 }));
        assert_eq!(equity.get(&pair("2C", "3C")), Some(&Stats { wins: 1, losses: 0 }));
        assert_eq!(equity.total_games(), 2);
    }
}
