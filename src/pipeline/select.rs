use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{PaletteError, Result};
use crate::pipeline::histogram::Histogram;
use crate::pipeline::metric::ColorMetric;
use crate::pipeline::resample::PixelSet;

pub const DEFAULT_PALETTE_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Number of colors in a finished palette.
    pub palette_size: usize,
    /// Score histogram candidates on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            palette_size: DEFAULT_PALETTE_SIZE,
            parallel: true,
        }
    }
}

impl SelectionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.palette_size == 0 {
            return Err(PaletteError::InvalidConfig(
                "palette_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// A finished palette: colors in selection order, pairwise distinct under
/// the metric that built it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    /// Next round runs on the low tier with an empty palette.
    AwaitingFirstColor,
    /// Next round runs on the high tier against the colors chosen so far.
    SelectingRemaining,
    Complete,
}

/// Builds a palette one round at a time.
///
/// The first round scans the low tier; the dominant color of an image barely
/// moves with sampling density. Every later round scans the high tier.
#[derive(Debug, Clone)]
pub struct DominantColorSelector {
    metric: ColorMetric,
    config: SelectionConfig,
    selected: Vec<Color>,
    state: SelectorState,
}

impl DominantColorSelector {
    pub fn new(metric: ColorMetric, config: SelectionConfig) -> Result<Self> {
        metric.validate()?;
        config.validate()?;
        Ok(Self {
            metric,
            config,
            selected: Vec::new(),
            state: SelectorState::AwaitingFirstColor,
        })
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    /// Colors chosen so far, in selection order.
    pub fn selected(&self) -> &[Color] {
        &self.selected
    }

    /// Run one round and return its winner, or `None` once complete.
    pub fn step(&mut self, low: &PixelSet, high: &PixelSet) -> Result<Option<Color>> {
        let (tier, name) = match self.state {
            SelectorState::AwaitingFirstColor => (low, "low"),
            SelectorState::SelectingRemaining => (high, "high"),
            SelectorState::Complete => return Ok(None),
        };

        let round = self.selected.len() + 1;
        let started = Instant::now();
        let histogram =
            Histogram::build(tier, &self.selected, &self.metric, self.config.parallel)?;
        let winner = histogram.winner();
        log::debug!(
            "round {round}: {} candidates over {} {name}-tier pixels in {:.3}s",
            histogram.candidate_count(),
            tier.len(),
            started.elapsed().as_secs_f64()
        );
        log::info!(
            "color #{round}: {winner} ({} similar pixels)",
            histogram.winner_count()
        );

        debug_assert!(self.metric.distinct_from_all(winner, &self.selected));
        self.selected.push(winner);
        self.state = if self.selected.len() >= self.config.palette_size {
            SelectorState::Complete
        } else {
            SelectorState::SelectingRemaining
        };
        Ok(Some(winner))
    }

    /// Run rounds until the palette is complete.
    pub fn run(self, low: &PixelSet, high: &PixelSet) -> Result<Palette> {
        self.run_until(low, high, || false)
    }

    /// Like [`run`](Self::run), but checks `cancel` before every round.
    pub fn run_with_cancel(
        self,
        low: &PixelSet,
        high: &PixelSet,
        cancel: &AtomicBool,
    ) -> Result<Palette> {
        self.run_until(low, high, || cancel.load(Ordering::Relaxed))
    }

    fn run_until(
        mut self,
        low: &PixelSet,
        high: &PixelSet,
        cancelled: impl Fn() -> bool,
    ) -> Result<Palette> {
        while self.state != SelectorState::Complete {
            if cancelled() {
                return Err(PaletteError::Cancelled {
                    completed: self.selected.len(),
                });
            }
            self.step(low, high)?;
        }
        Ok(Palette {
            colors: self.selected,
        })
    }
}

/// Select a palette with the given metric and settings.
pub fn select_palette(
    low: &PixelSet,
    high: &PixelSet,
    metric: ColorMetric,
    config: SelectionConfig,
) -> Result<Palette> {
    DominantColorSelector::new(metric, config)?.run(low, high)
}
