// SPDX-License-Identifier: MPL-2.0
//! Looping "morphing chart" visualization.
//!
//! Once its section first scrolls into view, the chart alternates every three
//! seconds between a sequential layout (one tall column of blocks, "today")
//! and a parallel layout (four short columns, "tomorrow"), forever.

use crate::ui::design_tokens::{palette, sizing, spacing};
use iced::widget::canvas::{self, Cache, Geometry, Path};
use iced::{mouse, Point, Rectangle, Renderer, Size, Theme};
use std::time::Duration;

/// Time spent in each phase before morphing to the other.
pub const PHASE_PERIOD: Duration = Duration::from_secs(3);

/// Blocks shown in the sequential column.
const SEQUENTIAL_ROWS: usize = 8;

/// Columns (and rows per column) of the parallel layout.
const PARALLEL_COLUMNS: usize = 4;
const PARALLEL_ROWS: usize = 2;

/// The two layouts the chart alternates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphPhase {
    Sequential,
    Parallel,
}

impl MorphPhase {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            MorphPhase::Sequential => MorphPhase::Parallel,
            MorphPhase::Parallel => MorphPhase::Sequential,
        }
    }

    /// i18n key of the time-period label shown next to the chart.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            MorphPhase::Sequential => "morph-label-today",
            MorphPhase::Parallel => "morph-label-tomorrow",
        }
    }

    /// Accent color of the phase label and blocks.
    #[must_use]
    pub fn accent(self) -> iced::Color {
        match self {
            MorphPhase::Sequential => palette::BRAND_400,
            MorphPhase::Parallel => palette::ACCENT_TEAL,
        }
    }
}

pub struct MorphChart {
    phase: MorphPhase,
    started: bool,
    cache: Cache,
}

impl Default for MorphChart {
    fn default() -> Self {
        Self::new()
    }
}

impl MorphChart {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: MorphPhase::Sequential,
            started: false,
            cache: Cache::default(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> MorphPhase {
        self.phase
    }

    /// Whether the loop has been kicked off by the section entering view.
    #[must_use]
    pub fn started(&self) -> bool {
        self.started
    }

    /// Kicks off the loop; further calls are no-ops.
    pub fn start(&mut self) {
        self.started = true;
    }

    /// Morphs to the other layout. Driven by the 3-second phase timer.
    pub fn toggle(&mut self) {
        self.phase = self.phase.flipped();
        self.cache.clear();
    }
}

impl<Message> canvas::Program<Message> for MorphChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let block = sizing::MORPH_BLOCK;
            let gap = spacing::XXS;
            let color = self.phase.accent();

            match self.phase {
                MorphPhase::Sequential => {
                    // One tall centered column.
                    let column_height =
                        SEQUENTIAL_ROWS as f32 * block + (SEQUENTIAL_ROWS - 1) as f32 * gap;
                    let x = (frame.width() - block) / 2.0;
                    let top = (frame.height() - column_height) / 2.0;
                    for row in 0..SEQUENTIAL_ROWS {
                        let y = top + row as f32 * (block + gap);
                        frame.fill(
                            &Path::rectangle(Point::new(x, y), Size::new(block, block)),
                            color,
                        );
                    }
                }
                MorphPhase::Parallel => {
                    // Four short columns side by side.
                    let grid_width =
                        PARALLEL_COLUMNS as f32 * block + (PARALLEL_COLUMNS - 1) as f32 * gap;
                    let grid_height =
                        PARALLEL_ROWS as f32 * block + (PARALLEL_ROWS - 1) as f32 * gap;
                    let left = (frame.width() - grid_width) / 2.0;
                    let top = (frame.height() - grid_height) / 2.0;
                    for column in 0..PARALLEL_COLUMNS {
                        for row in 0..PARALLEL_ROWS {
                            let x = left + column as f32 * (block + gap);
                            let y = top + row as f32 * (block + gap);
                            frame.fill(
                                &Path::rectangle(Point::new(x, y), Size::new(block, block)),
                                color,
                            );
                        }
                    }
                }
            }
        });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_starts_sequential_and_stopped() {
        let chart = MorphChart::new();
        assert_eq!(chart.phase(), MorphPhase::Sequential);
        assert!(!chart.started());
    }

    #[test]
    fn toggle_alternates_phases() {
        let mut chart = MorphChart::new();
        chart.toggle();
        assert_eq!(chart.phase(), MorphPhase::Parallel);
        chart.toggle();
        assert_eq!(chart.phase(), MorphPhase::Sequential);
    }

    #[test]
    fn start_is_idempotent() {
        let mut chart = MorphChart::new();
        chart.start();
        chart.start();
        assert!(chart.started());
    }

    #[test]
    fn phase_labels_differ() {
        assert_ne!(
            MorphPhase::Sequential.label_key(),
            MorphPhase::Parallel.label_key()
        );
        assert_ne!(
            MorphPhase::Sequential.accent(),
            MorphPhase::Parallel.accent()
        );
    }
}
