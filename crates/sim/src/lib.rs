// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown starting hands equity simulator.
//!
//! The simulator deals many hands to a table of players, at the end of each
//! hand the players best five cards are compared and each player starting
//! hand is credited with a win or a loss. Players tied for the best hand are
//! all credited with a win, this counts a split pot as a win for each tied
//! player rather than splitting the equity.
//!
//! ```
//! # use showdown_sim::*;
//! let config = Config {
//!     trials: 1_000,
//!     players: 4,
//!     seed: 7,
//! };
//!
//! let equity = run(&config).unwrap();
//! assert_eq!(equity.total_games(), 4_000);
//!
//! for row in equity.report().iter().take(3) {
//!     println!("{} {:.1}%", row.pair, row.win_rate * 100.0);
//! }
//! ```
//!
//! Configurations that need more cards than a deck has are rejected before
//! running any trial:
//!
//! ```
//! # use showdown_sim::*;
//! let config = Config {
//!     players: 24,
//!     ..Config::default()
//! };
//!
//! assert!(matches!(run(&config), Err(Error::TooManyPlayers { .. })));
//! ```
//!
//! The **`parallel`** feature enables `par_run` that splits the trials across
//! a number of parallel tasks.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod config;
pub use config::Config;

mod deal;
pub use deal::{Deal, Outcome};

mod equity;
pub use equity::{Equity, EquityRow, Stats};

mod error;
pub use error::{Error, Result};

mod simulator;
pub use simulator::{run, run_trials};

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::par_run;
