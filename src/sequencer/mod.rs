// SPDX-License-Identifier: MPL-2.0
//! Timed state machine behind the sequential-vs-parallel demo.
//!
//! The sequencer owns the block states, progress percentages, and elapsed-time
//! readouts for both demo lanes. It is deliberately free of widget code: the
//! caller schedules the 500 ms step timers and feeds wall-clock instants in,
//! which keeps every transition unit-testable with a controlled clock.
//!
//! Restart safety relies on a run generation counter instead of timer
//! cancellation: `start` bumps the generation, and step callbacks scheduled
//! under an older generation are dropped by the caller via [`Sequencer::is_current`].

use std::time::{Duration, Instant};

/// Fixed period between steps, shared by both lanes.
pub const STEP: Duration = Duration::from_millis(500);

/// Number of blocks (and steps) in the sequential lane.
pub const SEQUENTIAL_BLOCKS: usize = 8;

/// Number of concurrent cores illustrated by the parallel lane.
pub const PARALLEL_CORES: usize = 4;

/// Blocks per core in the parallel lane.
pub const PARALLEL_COLUMNS: usize = 2;

/// Elapsed readout shown before the first step of a run lands.
pub const ELAPSED_RESET: &str = "0s";

/// One of the two demo lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneId {
    Sequential,
    Parallel,
}

/// Visual state of a single block. Transitions are one-directional within a
/// run; only a restart returns a block to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockState {
    #[default]
    Idle,
    Processing,
    Completed,
}

/// Per-lane bookkeeping for one run.
#[derive(Debug, Clone)]
struct LaneRun {
    started_at: Instant,
    next_step: usize,
    running: bool,
    progress_percent: f32,
    elapsed_display: String,
}

impl LaneRun {
    fn idle(now: Instant) -> Self {
        Self {
            started_at: now,
            next_step: 0,
            running: false,
            progress_percent: 0.0,
            elapsed_display: ELAPSED_RESET.to_string(),
        }
    }

    fn started(now: Instant) -> Self {
        Self {
            running: true,
            ..Self::idle(now)
        }
    }
}

/// Formats a duration since run start as seconds with one decimal.
fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.1}s", elapsed.as_secs_f64())
}

/// State machine for both demo lanes.
#[derive(Debug, Clone)]
pub struct Sequencer {
    generation: u64,
    step: Duration,
    sequential: [BlockState; SEQUENTIAL_BLOCKS],
    parallel: [[BlockState; PARALLEL_COLUMNS]; PARALLEL_CORES],
    sequential_run: LaneRun,
    parallel_run: LaneRun,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_step(STEP)
    }

    /// Creates a sequencer with a custom step period (configurable via
    /// `step_ms` in the `[demo]` section of the settings file).
    #[must_use]
    pub fn with_step(step: Duration) -> Self {
        let now = Instant::now();
        Self {
            generation: 0,
            step,
            sequential: [BlockState::Idle; SEQUENTIAL_BLOCKS],
            parallel: [[BlockState::Idle; PARALLEL_COLUMNS]; PARALLEL_CORES],
            sequential_run: LaneRun::idle(now),
            parallel_run: LaneRun::idle(now),
        }
    }

    /// Period between steps, used by the caller to schedule timers.
    #[must_use]
    pub fn step_period(&self) -> Duration {
        self.step
    }

    /// Current run generation. Step callbacks must carry the generation they
    /// were scheduled under.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a step callback scheduled under `generation` is still current.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Starts a new run for both lanes, cancelling any in-flight one.
    ///
    /// All blocks return to `Idle`, both progress bars to 0 and both elapsed
    /// readouts to [`ELAPSED_RESET`]. Returns the new generation; steps
    /// scheduled under earlier generations become stale.
    pub fn start(&mut self, now: Instant) -> u64 {
        self.generation += 1;
        self.sequential = [BlockState::Idle; SEQUENTIAL_BLOCKS];
        self.parallel = [[BlockState::Idle; PARALLEL_COLUMNS]; PARALLEL_CORES];
        self.sequential_run = LaneRun::started(now);
        self.parallel_run = LaneRun::started(now);
        self.generation
    }

    fn run(&self, lane: LaneId) -> &LaneRun {
        match lane {
            LaneId::Sequential => &self.sequential_run,
            LaneId::Parallel => &self.parallel_run,
        }
    }

    /// Whether the given lane still has steps pending.
    #[must_use]
    pub fn lane_running(&self, lane: LaneId) -> bool {
        self.run(lane).running
    }

    /// Whether any lane is mid-run.
    #[must_use]
    pub fn any_running(&self) -> bool {
        self.sequential_run.running || self.parallel_run.running
    }

    /// Progress for the lane, 0–100. Reaches exactly 100 only once every
    /// block in the lane is `Completed`.
    #[must_use]
    pub fn progress(&self, lane: LaneId) -> f32 {
        self.run(lane).progress_percent
    }

    /// Elapsed readout for the lane, e.g. `"1.5s"` (or `"0s"` after a reset).
    #[must_use]
    pub fn elapsed(&self, lane: LaneId) -> &str {
        &self.run(lane).elapsed_display
    }

    #[must_use]
    pub fn sequential_block(&self, index: usize) -> BlockState {
        self.sequential.get(index).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn parallel_block(&self, core: usize, column: usize) -> BlockState {
        self.parallel
            .get(core)
            .and_then(|blocks| blocks.get(column))
            .copied()
            .unwrap_or_default()
    }

    /// Executes one timed step for the lane. Returns `true` when another step
    /// should be scheduled, `false` once the lane has finished (or was not
    /// running, in which case the call is a no-op).
    pub fn advance(&mut self, lane: LaneId, now: Instant) -> bool {
        match lane {
            LaneId::Sequential => self.advance_sequential(now),
            LaneId::Parallel => self.advance_parallel(now),
        }
    }

    fn advance_sequential(&mut self, now: Instant) -> bool {
        if !self.sequential_run.running {
            return false;
        }
        let i = self.sequential_run.next_step;

        self.sequential[i] = BlockState::Processing;
        if i > 0 {
            self.sequential[i - 1] = BlockState::Completed;
        }

        self.sequential_run.progress_percent =
            (i + 1) as f32 / SEQUENTIAL_BLOCKS as f32 * 100.0;
        self.sequential_run.elapsed_display =
            format_elapsed(now.saturating_duration_since(self.sequential_run.started_at));

        if i + 1 == SEQUENTIAL_BLOCKS {
            // Final step: the last block passes through Processing and
            // completes within the same tick.
            self.sequential[i] = BlockState::Completed;
            self.sequential_run.running = false;
            return false;
        }
        self.sequential_run.next_step = i + 1;
        true
    }

    fn advance_parallel(&mut self, now: Instant) -> bool {
        if !self.parallel_run.running {
            return false;
        }
        let column = self.parallel_run.next_step;

        for core in 0..PARALLEL_CORES {
            self.parallel[core][column] = BlockState::Processing;
            if column > 0 {
                self.parallel[core][column - 1] = BlockState::Completed;
            }
        }

        let done = ((column + 1) * PARALLEL_CORES).min(SEQUENTIAL_BLOCKS);
        self.parallel_run.progress_percent =
            done as f32 / SEQUENTIAL_BLOCKS as f32 * 100.0;
        self.parallel_run.elapsed_display =
            format_elapsed(now.saturating_duration_since(self.parallel_run.started_at));

        if column + 1 == PARALLEL_COLUMNS {
            for core in 0..PARALLEL_CORES {
                self.parallel[core][column] = BlockState::Completed;
            }
            self.parallel_run.running = false;
            return false;
        }
        self.parallel_run.next_step = column + 1;
        true
    }
}
