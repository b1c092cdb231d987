// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel simulation.
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use std::{panic, thread, time::Instant};

use crate::{Config, Equity, Error, Result, simulator::simulate};

/// Creates the generator for a task, task 0 uses the config seed.
fn task_rng(seed: u64, task_id: usize) -> StdRng {
    let offset = (task_id as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
    StdRng::seed_from_u64(seed ^ offset)
}

/// Runs the simulation splitting the trials across `num_tasks` parallel tasks.
///
/// Each task has its own generator and statistics that are merged when all
/// tasks are done, for a given seed and number of tasks the result is always
/// the same.
pub fn par_run(config: &Config, num_tasks: usize) -> Result<Equity> {
    config.validate()?;

    if num_tasks == 0 {
        return Err(Error::NoTasks);
    }

    info!(
        "Running {} trials with {} players on {num_tasks} tasks, seed {}",
        config.trials, config.players, config.seed
    );

    let now = Instant::now();
    let trials_per_task = config.trials / num_tasks as u64;
    let remainder = config.trials % num_tasks as u64;

    let partials = thread::scope(|s| {
        let handles = (0..num_tasks)
            .map(|task_id| {
                let trials = trials_per_task + u64::from((task_id as u64) < remainder);
                s.spawn(move || {
                    debug!("Task {task_id} running {trials} trials");
                    let mut rng = task_rng(config.seed, task_id);
                    simulate(trials, config.players, &mut rng)
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect::<Vec<_>>()
    });

    let mut equity = Equity::default();
    for partial in &partials {
        equity.merge(partial);
    }

    info!(
        "Completed {} trials in {:.3}s",
        config.trials,
        now.elapsed().as_secs_f64()
    );

    Ok(equity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_task_matches_sequential() {
        let config = Config {
            trials: 3_000,
            players: 8,
            seed: 77,
        };

        assert_eq!(par_run(&config, 1).unwrap(), crate::run(&config).unwrap());
    }

    #[test]
    fn tasks_split_trials() {
        let config = Config {
            trials: 10_001,
            players: 4,
            seed: 3,
        };

        let e1 = par_run(&config, 4).unwrap();
        assert_eq!(e1.total_games(), 10_001 * 4);

        let e2 = par_run(&config, 4).unwrap();
        assert_eq!(e1, e2);

        // More tasks than trials.
        let config = Config {
            trials: 3,
            ..config
        };
        assert_eq!(par_run(&config, 8).unwrap().total_games(), 12);
    }

    #[test]
    fn invalid_config() {
        let config = Config::default();
        assert_eq!(par_run(&config, 0), Err(Error::NoTasks));

        let config = Config {
            players: 30,
            ..config
        };
        assert!(matches!(
            par_run(&config, 2),
            Err(Error::TooManyPlayers { players: 30, .. })
        ));
    }
}
