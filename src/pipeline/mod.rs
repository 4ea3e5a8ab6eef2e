pub mod composite;
pub mod histogram;
pub mod metric;
pub mod resample;
pub mod select;

use image::RgbImage;

use crate::config::Config;
use crate::error::Result;
use resample::{sample_tiers, Tiers};
use select::{select_palette, Palette};

/// Sample both tiers from `img` and select its palette.
pub fn extract_palette(img: &RgbImage, config: &Config) -> Result<(Palette, Tiers)> {
    config.validate()?;
    let tiers = sample_tiers(img, &config.sampling)?;
    let palette = select_palette(
        &tiers.low_pixels(),
        &tiers.high_pixels(),
        config.metric,
        config.selection,
    )?;
    Ok((palette, tiers))
}
