use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{PaletteError, Result};

pub const DEFAULT_SIMILAR_BELOW: u8 = 6;
pub const DEFAULT_DISTINCT_ABOVE: u8 = 50;

/// Channel-wise thresholds defining when two colors count as "similar"
/// (histogram neighbors) and when they count as "distinct" (far enough apart
/// to both sit in one palette).
///
/// Pairs whose largest channel delta falls between the two thresholds are
/// neither similar nor distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorMetric {
    /// Every channel delta must be strictly below this for `similar`.
    pub similar_below: u8,
    /// Any channel delta strictly above this makes a pair `distinct`.
    pub distinct_above: u8,
}

impl Default for ColorMetric {
    fn default() -> Self {
        Self {
            similar_below: DEFAULT_SIMILAR_BELOW,
            distinct_above: DEFAULT_DISTINCT_ABOVE,
        }
    }
}

impl ColorMetric {
    pub fn new(similar_below: u8, distinct_above: u8) -> Result<Self> {
        let metric = Self {
            similar_below,
            distinct_above,
        };
        metric.validate()?;
        Ok(metric)
    }

    /// A zero `similar_below` would make no color similar to itself, and a
    /// `distinct_above` below `similar_below` would let a pair be both.
    pub fn validate(&self) -> Result<()> {
        if self.similar_below == 0 {
            return Err(PaletteError::InvalidConfig(
                "similar_below must be at least 1".into(),
            ));
        }
        if self.distinct_above < self.similar_below {
            return Err(PaletteError::InvalidConfig(format!(
                "distinct_above ({}) must not be below similar_below ({})",
                self.distinct_above, self.similar_below
            )));
        }
        Ok(())
    }

    /// True when every channel differs by less than `similar_below`.
    pub fn similar(&self, a: Color, b: Color) -> bool {
        a.channel_deltas(b)
            .iter()
            .all(|&delta| delta < self.similar_below)
    }

    /// True when at least one channel differs by more than `distinct_above`.
    pub fn distinct(&self, a: Color, b: Color) -> bool {
        a.channel_deltas(b)
            .iter()
            .any(|&delta| delta > self.distinct_above)
    }

    /// True when `candidate` is distinct from every color in `selected`.
    /// Vacuously true for an empty selection.
    pub fn distinct_from_all(&self, candidate: Color, selected: &[Color]) -> bool {
        selected.iter().all(|&chosen| self.distinct(candidate, chosen))
    }
}
