//! Dominant color palette extraction.
//!
//! An image is sampled at two pixel budgets. The first color comes from the
//! small sample, the rest from the larger one; each round picks the color
//! with the most similar pixels among those far enough from every color
//! already chosen.

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;

pub use color::Color;
pub use config::Config;
pub use error::{PaletteError, Result};
pub use pipeline::extract_palette;
pub use pipeline::histogram::Histogram;
pub use pipeline::metric::ColorMetric;
pub use pipeline::resample::{PixelSet, SamplingConfig};
pub use pipeline::select::{
    select_palette, DominantColorSelector, Palette, SelectionConfig, SelectorState,
};
