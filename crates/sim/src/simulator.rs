// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo simulation loop.
use log::info;
use rand::{prelude::*, rngs::StdRng};
use std::time::Instant;

use showdown_cards::Deck;

use crate::{Config, Deal, Equity, Result};

/// Runs the simulation with a generator seeded from the config seed.
pub fn run(config: &Config) -> Result<Equity> {
    info!("Simulation seed {}", config.seed);
    let mut rng = StdRng::seed_from_u64(config.seed);
    run_trials(config, &mut rng)
}

/// Runs the simulation using the given random generator.
///
/// Each trial shuffles a new deck, deals the board and the players hole cards,
/// and credits each player starting hand with a win or a loss. Returns an
/// error if the config is not valid, in which case no trial is run.
pub fn run_trials<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Result<Equity> {
    config.validate()?;

    info!(
        "Running {} trials with {} players",
        config.trials, config.players
    );

    let now = Instant::now();
    let equity = simulate(config.trials, config.players, rng);

    let elapsed = now.elapsed().as_secs_f64();
    info!(
        "Completed {} trials in {elapsed:.3}s ({:.0} trials/sec)",
        config.trials,
        config.trials as f64 / elapsed.max(f64::EPSILON)
    );

    Ok(equity)
}

/// The simulation loop, the players count must have been validated.
pub(crate) fn simulate<R: Rng + ?Sized>(trials: u64, players: usize, rng: &mut R) -> Equity {
    let mut equity = Equity::default();

    // Allocates the deal buffers once, each trial deals into them.
    let mut deck = Deck::default();
    let mut deal = Deal::from_deck(&mut deck, players);

    for _ in 0..trials {
        deck = Deck::new_and_shuffled(rng);
        deal.redeal(&mut deck, players);
        equity.record(&mut deal);
    }

    equity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Stats};
    use ahash::{HashMap, HashMapExt};
    use showdown_cards::{Card, StartingPair};

    fn pair(a: &str, b: &str) -> StartingPair {
        StartingPair::new(a.parse::<Card>().unwrap(), b.parse::<Card>().unwrap())
    }

    #[test]
    fn invalid_config_runs_no_trial() {
        let mut rng = StdRng::seed_from_u64(0);
        let config = Config {
            trials: 10,
            players: 24,
            seed: 0,
        };

        assert!(matches!(
            run_trials(&config, &mut rng),
            Err(Error::TooManyPlayers { players: 24, .. })
        ));

        // The generator has not been used.
        let mut fresh = StdRng::seed_from_u64(0);
        assert_eq!(rng.next_u64(), fresh.next_u64());

        let config = Config {
            players: 0,
            ..config
        };
        assert_eq!(run(&config), Err(Error::NoPlayers));
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let config = Config {
            trials: 2_000,
            players: 6,
            seed: 1234,
        };

        let e1 = run(&config).unwrap();
        let e2 = run(&config).unwrap();
        assert_eq!(e1, e2);

        let e3 = run(&Config { seed: 4321, ..config }).unwrap();
        assert_ne!(e1, e3);
    }

    #[test]
    fn games_match_dealt_holdings() {
        const TRIALS: u64 = 100_000;
        const PLAYERS: usize = 8;

        let config = Config {
            trials: TRIALS,
            players: PLAYERS,
            seed: 99,
        };

        let equity = run(&config).unwrap();
        assert_eq!(equity.total_games(), TRIALS * PLAYERS as u64);

        // Replay the same deals and count how many times each holding was dealt.
        let mut dealt = HashMap::new();
        let mut rng = StdRng::seed_from_u64(config.seed);
        for _ in 0..TRIALS {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            for _ in 0..Config::BOARD_SIZE {
                deck.deal();
            }

            for _ in 0..PLAYERS {
                let [a, b] = deck.deal_pair();
                *dealt.entry(StartingPair::new(a, b)).or_insert(0u64) += 1;
            }
        }

        assert_eq!(equity.len(), dealt.len());
        for (pair, stats) in equity.iter() {
            assert_eq!(stats.games(), dealt[pair], "{pair}");
        }

        // There is at least one winner in each trial.
        let wins = equity.iter().map(|(_, s)| s.wins).sum::<u64>();
        assert!(wins >= TRIALS);
    }

    #[test]
    fn strong_hands_win_more() {
        let config = Config {
            trials: 20_000,
            players: 8,
            seed: 5,
        };

        let equity = run(&config).unwrap();
        let aces = equity.get(&pair("AS", "AH")).copied().unwrap_or_default();
        let seven_deuce = equity.get(&pair("7S", "2H")).copied().unwrap_or_default();

        let aces_rate = aces.win_rate().unwrap();
        let seven_deuce_rate = seven_deuce.win_rate().unwrap();
        assert!(aces_rate > 0.25, "AA win rate {aces_rate}");
        assert!(seven_deuce_rate < 0.15, "72o win rate {seven_deuce_rate}");

        let report = equity.report();
        assert_eq!(report.len(), StartingPair::COUNT);
        assert!(report.windows(2).all(|w| w[0].win_rate >= w[1].win_rate));
    }

    #[test]
    fn single_player_always_wins() {
        let config = Config {
            trials: 500,
            players: 1,
            seed: 8,
        };

        let equity = run(&config).unwrap();
        assert!(equity.iter().all(|(_, s)| s.losses == 0));
        assert_eq!(equity.total_games(), 500);

        let mut stats = Stats::default();
        equity.iter().for_each(|(_, s)| stats.merge(s));
        assert_eq!(stats.wins, 500);
    }
}
