use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::RgbImage;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::PaletteError;

pub const DEFAULT_LOW_BUDGET: usize = 1_000;
pub const DEFAULT_HIGH_BUDGET: usize = 20_000;
pub const DEFAULT_SHRINK_RATIO: f32 = 0.95;

/// Pixel budgets for the two resolution tiers and the per-step shrink ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Budget for the tier the first round runs on.
    pub low_budget: usize,
    /// Budget for the tier every later round runs on.
    pub high_budget: usize,
    /// Factor applied to both dimensions on each shrink step.
    pub shrink_ratio: f32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            low_budget: DEFAULT_LOW_BUDGET,
            high_budget: DEFAULT_HIGH_BUDGET,
            shrink_ratio: DEFAULT_SHRINK_RATIO,
        }
    }
}

impl SamplingConfig {
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.low_budget == 0 {
            return Err(PaletteError::InvalidBudget(self.low_budget));
        }
        if self.high_budget == 0 {
            return Err(PaletteError::InvalidBudget(self.high_budget));
        }
        if !(self.shrink_ratio > 0.0 && self.shrink_ratio < 1.0) {
            return Err(PaletteError::InvalidConfig(format!(
                "shrink_ratio must be between 0 and 1 exclusive, got {}",
                self.shrink_ratio
            )));
        }
        Ok(())
    }
}

/// The sampled colors of one resolution tier, in row-major pixel order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelSet {
    colors: Vec<Color>,
}

impl PixelSet {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    pub fn from_image(img: &RgbImage) -> Self {
        Self::new(img.pixels().map(|&p| Color::from(p)).collect())
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl From<Vec<Color>> for PixelSet {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}

impl FromIterator<Color> for PixelSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Both tiers produced from one source image.
#[derive(Debug, Clone)]
pub struct Tiers {
    pub low: RgbImage,
    pub high: RgbImage,
}

impl Tiers {
    pub fn low_pixels(&self) -> PixelSet {
        PixelSet::from_image(&self.low)
    }

    pub fn high_pixels(&self) -> PixelSet {
        PixelSet::from_image(&self.high)
    }
}

/// Load an image from disk and convert it to 8-bit RGB, dropping any alpha.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).with_context(|| {
        if !path.exists() {
            format!("file not found: {}", path.display())
        } else {
            format!(
                "unsupported or corrupt image: {}. Supported formats: PNG, JPEG",
                path.display()
            )
        }
    })?;
    Ok(img.to_rgb8())
}

/// Next dimension after one shrink step: scaled by `ratio`, strictly smaller
/// than `dim` while `dim > 1`, never below 1.
fn shrink_dimension(dim: u32, ratio: f32) -> u32 {
    let scaled = (dim as f64 * ratio as f64).floor() as u32;
    scaled.min(dim.saturating_sub(1)).max(1)
}

/// Shrink `img` step by step by `ratio` until `width * height <= budget`.
///
/// Every step resizes the previous step's output with a Lanczos3 filter, so
/// the colors of the result stay representative of the source.
pub fn resample(img: &RgbImage, budget: usize, ratio: f32) -> crate::error::Result<RgbImage> {
    if budget == 0 {
        return Err(PaletteError::InvalidBudget(budget));
    }
    if !(ratio > 0.0 && ratio < 1.0) {
        return Err(PaletteError::InvalidConfig(format!(
            "shrink_ratio must be between 0 and 1 exclusive, got {ratio}"
        )));
    }

    let pixel_count = |img: &RgbImage| img.width() as usize * img.height() as usize;
    if pixel_count(img) <= budget {
        log::debug!(
            "{}x{} already within budget {budget}",
            img.width(),
            img.height()
        );
        return Ok(img.clone());
    }

    let mut current = img.clone();
    let mut steps = 0usize;
    while pixel_count(&current) > budget {
        let width = shrink_dimension(current.width(), ratio);
        let height = shrink_dimension(current.height(), ratio);
        current = image::imageops::resize(&current, width, height, FilterType::Lanczos3);
        steps += 1;
    }

    log::debug!(
        "resampled {}x{} to {}x{} in {steps} steps (budget {budget})",
        img.width(),
        img.height(),
        current.width(),
        current.height()
    );
    Ok(current)
}

/// Produce the low and high tiers described by `config` from one image.
pub fn sample_tiers(img: &RgbImage, config: &SamplingConfig) -> crate::error::Result<Tiers> {
    config.validate()?;
    if config.low_budget > config.high_budget {
        log::warn!(
            "low budget {} exceeds high budget {}; first round samples more pixels than the rest",
            config.low_budget,
            config.high_budget
        );
    }
    let high = resample(img, config.high_budget, config.shrink_ratio)?;
    let low = resample(img, config.low_budget, config.shrink_ratio)?;
    log::info!(
        "sampled tiers: low {}x{} ({} px), high {}x{} ({} px)",
        low.width(),
        low.height(),
        low.width() * low.height(),
        high.width(),
        high.height(),
        high.width() * high.height()
    );
    Ok(Tiers { low, high })
}
