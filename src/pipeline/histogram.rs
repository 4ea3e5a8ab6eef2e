use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use crate::color::Color;
use crate::error::{PaletteError, Result};
use crate::pipeline::metric::ColorMetric;
use crate::pipeline::resample::PixelSet;

/// Similarity counts for one selection round.
///
/// Keys are the unique pixel colors that are distinct from every color
/// selected so far, kept in first-occurrence order. Each count is the number
/// of OTHER pixels in the set that are similar to the key.
#[derive(Debug, Clone)]
pub struct Histogram {
    order: Vec<Color>,
    counts: HashMap<Color, usize>,
    winner: Color,
}

impl Histogram {
    /// Score every surviving candidate of `pixels` against the whole set.
    ///
    /// Fails with `EmptyInput` on an empty set and with `InputExhausted` when
    /// every pixel is too close to a color in `selected`. With `parallel` the
    /// candidates are scored on the rayon pool; the winner is the same either
    /// way.
    pub fn build(
        pixels: &PixelSet,
        selected: &[Color],
        metric: &ColorMetric,
        parallel: bool,
    ) -> Result<Self> {
        if pixels.is_empty() {
            return Err(PaletteError::EmptyInput);
        }
        let all = pixels.as_slice();

        let mut seen = HashSet::new();
        let candidates: Vec<Color> = all
            .iter()
            .copied()
            .filter(|&p| seen.insert(p))
            .filter(|&p| metric.distinct_from_all(p, selected))
            .collect();

        if candidates.is_empty() {
            return Err(PaletteError::InputExhausted {
                round: selected.len() + 1,
                selected: selected.len(),
            });
        }

        // The candidate itself is always among its similar pixels.
        let score = |p: Color| {
            all.iter()
                .filter(|&&q| metric.similar(p, q))
                .count()
                .saturating_sub(1)
        };
        let scores: Vec<usize> = if parallel {
            candidates.par_iter().map(|&p| score(p)).collect()
        } else {
            candidates.iter().map(|&p| score(p)).collect()
        };

        let mut best = 0;
        for (i, &s) in scores.iter().enumerate() {
            if s > scores[best] {
                best = i;
            }
        }

        Ok(Self {
            winner: candidates[best],
            counts: candidates.iter().copied().zip(scores).collect(),
            order: candidates,
        })
    }

    /// The first-encountered candidate with the highest count.
    pub fn winner(&self) -> Color {
        self.winner
    }

    pub fn winner_count(&self) -> usize {
        self.counts[&self.winner]
    }

    /// Count for `color`, or `None` if it was excluded or absent.
    pub fn count(&self, color: Color) -> Option<usize> {
        self.counts.get(&color).copied()
    }

    /// Number of candidate colors that survived exclusion.
    pub fn candidate_count(&self) -> usize {
        self.order.len()
    }

    /// Candidates and their counts in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, usize)> + '_ {
        self.order.iter().map(|c| (*c, self.counts[c]))
    }
}
