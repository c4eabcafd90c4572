//! Exhaustive showdown enumeration.
//!
//! The enumeration has two layers:
//!
//! - **Outer**: an [`Odometer`] over the players' distributions. Each index
//!   tuple fixes one (possibly partial) hand per player and carries the
//!   product of the chosen entries' weights.
//! - **Inner**: a [`PartitionEnumerator`] over the cards left in the deck,
//!   completing every partial hand and the board in every possible way.
//!
//! Every complete deal is handed to a [`ShowdownEvaluator`] with the outer
//! weight. The number of inner completions is never folded into the weight,
//! so a tuple with more unknown cards contributes proportionally more mass.

use super::config::EnumeratorConfig;
use super::error::EquityError;
use super::summary::EnumerationStats;
use crate::cards::{CardSet, Deck};
use crate::enumerate::{Odometer, PartitionEnumerator};
use crate::eval::{EquityResult, ShowdownEvaluator};
use crate::range::HandDistribution;
use indicatif::ProgressBar;
use log::{debug, info, trace};
use rayon::prelude::*;
use std::time::Instant;

/// Exact range-vs-range equity calculator.
///
/// # Example
/// ```
/// use showdown_equity::cards::CardSet;
/// use showdown_equity::equity::ShowdownEnumerator;
/// use showdown_equity::eval::HoldemEvaluator;
/// use showdown_equity::range::HandDistribution;
///
/// let hero = HandDistribution::parse("AhAs").unwrap();
/// let villain = HandDistribution::parse("KhKs").unwrap();
/// let board = CardSet::from_str("2c7d9sTcJd").unwrap();
///
/// let enumerator = ShowdownEnumerator::new();
/// let results = enumerator
///     .calculate_equity(&[hero, villain], &board, Some(&HoldemEvaluator::new()))
///     .unwrap();
/// assert_eq!(results[0].win_shares, 1.0);
/// assert_eq!(results[1].equity, 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowdownEnumerator {
    config: EnumeratorConfig,
}

/// Everything a shard needs to enumerate its slice of the outer tuples.
struct Job<'a> {
    dists: &'a [HandDistribution],
    board: &'a CardSet,
    evaluator: &'a dyn ShowdownEvaluator,
    /// Distribution sizes, one per player.
    sizes: Vec<usize>,
    /// Complete size of each slot: players first, then the board if the
    /// game has one.
    targets: Vec<usize>,
}

/// Shards run per parallel batch. Bounds the shard results held at once.
const BATCH_SHARDS: u64 = 4096;

/// Accumulators owned by one shard.
struct Shard {
    results: Vec<EquityResult>,
    stats: EnumerationStats,
}

impl Shard {
    fn new(players: usize) -> Self {
        Self {
            results: vec![EquityResult::new(); players],
            stats: EnumerationStats::new(),
        }
    }

    /// Add another shard's totals onto this one.
    fn absorb(&mut self, other: &Shard) {
        for (total, partial) in self.results.iter_mut().zip(&other.results) {
            *total += *partial;
        }
        self.stats.merge(&other.stats);
    }
}

impl ShowdownEnumerator {
    /// Create an enumerator with default (serial) settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an enumerator with the given configuration.
    pub fn with_config(config: EnumeratorConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &EnumeratorConfig {
        &self.config
    }

    /// Compute weighted win/tie totals for every player.
    ///
    /// `dists[i]` is player `i`'s distribution; `board` holds the known
    /// community cards (possibly none). Returns one accumulator per player.
    pub fn calculate_equity(
        &self,
        dists: &[HandDistribution],
        board: &CardSet,
        evaluator: Option<&dyn ShowdownEvaluator>,
    ) -> Result<Vec<EquityResult>, EquityError> {
        self.calculate_equity_with_stats(dists, board, evaluator)
            .map(|(results, _)| results)
    }

    /// Like [`ShowdownEnumerator::calculate_equity`], also returning run
    /// statistics.
    pub fn calculate_equity_with_stats(
        &self,
        dists: &[HandDistribution],
        board: &CardSet,
        evaluator: Option<&dyn ShowdownEvaluator>,
    ) -> Result<(Vec<EquityResult>, EnumerationStats), EquityError> {
        let evaluator = evaluator.ok_or(EquityError::NullEvaluator)?;
        self.config.validate()?;
        let job = Job::new(dists, board, evaluator)?;

        let start_time = Instant::now();
        let total = Odometer::new(&job.sizes).total();
        let chunk = self.config.chunk_size as u64;
        let shard_count = total.div_ceil(chunk);

        info!(
            "Enumerating {} players: {} outer tuples in {} shards{}",
            dists.len(),
            total,
            shard_count,
            if self.config.parallel { " (parallel)" } else { "" }
        );

        let pool = match (self.config.parallel, self.config.num_threads) {
            (true, Some(threads)) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| EquityError::ThreadPool(e.to_string()))?,
            ),
            _ => None,
        };

        let progress = if self.config.show_progress {
            ProgressBar::new(shard_count)
        } else {
            ProgressBar::hidden()
        };

        let run = |index: u64| {
            let begin = index * chunk;
            let end = (begin + chunk).min(total);
            trace!("Shard {}..{}", begin, end);
            let shard = job.run_span(begin, end);
            progress.inc(1);
            shard
        };

        // Shards are folded into the totals strictly in index order, so the
        // sum does not depend on scheduling. At most one batch of shards is
        // held at a time.
        let mut totals = Shard::new(dists.len());
        let mut first = 0;
        while first < shard_count {
            let last = (first + BATCH_SHARDS).min(shard_count);
            if self.config.parallel {
                let len = (last - first) as usize;
                let batch = || -> Vec<Shard> {
                    (0..len)
                        .into_par_iter()
                        .map(|k| run(first + k as u64))
                        .collect()
                };
                let shards = match &pool {
                    Some(pool) => pool.install(batch),
                    None => batch(),
                };
                for shard in &shards {
                    totals.absorb(shard);
                }
            } else {
                for index in first..last {
                    totals.absorb(&run(index));
                }
            }
            first = last;
        }
        progress.finish_and_clear();

        let Shard {
            results,
            mut stats,
        } = totals;
        stats.elapsed_seconds = start_time.elapsed().as_secs_f64();
        stats.update_rate();

        info!(
            "Enumeration done: {} tuples ({} skipped), {} deals in {:.3}s",
            stats.outer_visited, stats.skipped, stats.deals, stats.elapsed_seconds
        );
        Ok((results, stats))
    }

    /// Expand each range string and compute equity over the results.
    ///
    /// A range that expands to no hands is reported as
    /// [`EquityError::EmptyDistribution`] for that player.
    pub fn calculate_equity_fuzz<S: AsRef<str>>(
        &self,
        ranges: &[S],
        board: &CardSet,
        evaluator: Option<&dyn ShowdownEvaluator>,
    ) -> Result<Vec<EquityResult>, EquityError> {
        let dists = ranges
            .iter()
            .map(|r| HandDistribution::from_range(r.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        for (i, dist) in dists.iter().enumerate() {
            debug!("Player {}: {} hands", i, dist.len());
        }
        self.calculate_equity(&dists, board, evaluator)
    }
}

impl<'a> Job<'a> {
    /// Check the inputs against the evaluator and lay out the slots.
    fn new(
        dists: &'a [HandDistribution],
        board: &'a CardSet,
        evaluator: &'a dyn ShowdownEvaluator,
    ) -> Result<Self, EquityError> {
        if dists.is_empty() {
            return Err(EquityError::NoPlayers);
        }
        let hand_size = evaluator.hand_size();
        for (player, dist) in dists.iter().enumerate() {
            if dist.is_empty() {
                return Err(EquityError::EmptyDistribution(player));
            }
            let size = dist.max_hand_size();
            if size > hand_size {
                return Err(EquityError::OversizedHand {
                    player,
                    size,
                    hand_size,
                });
            }
        }
        let board_size = evaluator.board_size();
        if board.len() > board_size {
            return Err(EquityError::OversizedBoard {
                size: board.len(),
                board_size,
            });
        }

        let mut targets = vec![hand_size; dists.len()];
        if board_size > 0 {
            targets.push(board_size);
        }
        Ok(Self {
            dists,
            board,
            evaluator,
            sizes: dists.iter().map(HandDistribution::len).collect(),
            targets,
        })
    }

    /// Enumerate outer tuples `begin..end` (linear indices).
    fn run_span(&self, begin: u64, end: u64) -> Shard {
        let players = self.dists.len();
        let slots = self.targets.len();
        let has_board = slots > players;

        let mut shard = Shard::new(players);

        // Scratch state, reused for every tuple and deal in the span.
        let mut partial = vec![CardSet::new(); slots];
        let mut hands = vec![CardSet::new(); slots];
        let mut parts = vec![0usize; slots];
        let mut deck = Deck::new();
        let mut partitions = PartitionEnumerator::new(0, &[]);

        let mut odometer = Odometer::new(&self.sizes);
        odometer.seek(begin);
        let mut linear = begin;

        while linear < end && !odometer.is_done() {
            shard.stats.outer_visited += 1;

            let mut weight = 1.0;
            for (player, dist) in self.dists.iter().enumerate() {
                let entry = odometer[player];
                partial[player] = dist.hand(entry);
                weight *= dist.weight(entry);
            }
            if has_board {
                partial[players] = *self.board;
            }

            let mut dead = CardSet::new();
            let mut disjoint = true;
            for ((cards, &target), part) in partial.iter().zip(&self.targets).zip(&mut parts) {
                if !dead.is_disjoint(cards) {
                    disjoint = false;
                    break;
                }
                dead |= *cards;
                *part = target - cards.len();
            }

            if disjoint {
                deck.reset();
                deck.remove(dead);
                partitions.reset(deck.len(), &parts);
                if !partitions.is_done() {
                    loop {
                        hands.copy_from_slice(&partial);
                        for (slot, hand) in hands.iter_mut().enumerate() {
                            *hand |= deck.peek(partitions.mask(slot));
                        }
                        let board = if has_board { &hands[players] } else { self.board };
                        self.evaluator.evaluate_showdown(
                            &hands[..players],
                            board,
                            &mut shard.results,
                            weight,
                        );
                        shard.stats.deals += 1;
                        if !partitions.next() {
                            break;
                        }
                    }
                }
            } else {
                shard.stats.skipped += 1;
            }

            linear += 1;
            odometer.next();
        }
        shard
    }
}
