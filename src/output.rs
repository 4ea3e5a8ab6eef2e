use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use crossterm::style::{Color as TermColor, Stylize};
use image::RgbImage;

use crate::color::Color;
use crate::error::PaletteError;
use crate::pipeline::select::Palette;

const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Check that `path` names a JPEG or PNG file with a single `.` in its name.
///
/// Returns the extension as written so output files keep the input's format.
pub fn validate_input_name(path: &Path) -> crate::error::Result<String> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| PaletteError::UnsupportedInput {
            name: path.display().to_string(),
            reason: "path has no file name".into(),
        })?;

    let unsupported = |reason: &str| PaletteError::UnsupportedInput {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.matches('.').count() != 1 {
        return Err(unsupported("file name must contain exactly one '.'"));
    }
    let (stem, ext) = name
        .split_once('.')
        .ok_or_else(|| unsupported("missing extension"))?;
    if stem.is_empty() {
        return Err(unsupported("empty file stem"));
    }
    if !SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
        return Err(unsupported("expected a .jpg, .jpeg or .png file"));
    }
    Ok(ext.to_string())
}

/// `<dir>/<stem>_<suffix>.<ext>` beside `input`.
pub fn sibling_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let file = match input.extension() {
        Some(ext) => format!("{stem}_{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{suffix}"),
    };
    input.with_file_name(file)
}

/// Default composite destination: `<stem>_with_palette.<ext>`.
pub fn default_output_path(input: &Path) -> PathBuf {
    sibling_path(input, "with_palette")
}

/// Save an image, picking the encoder from the path's extension.
pub fn write_image(img: &RgbImage, path: &Path) -> Result<()> {
    img.save(path)
        .with_context(|| format!("failed to write image to {}", path.display()))?;
    log::info!("wrote {}x{} image to {}", img.width(), img.height(), path.display());
    Ok(())
}

/// One `#rrggbb` line per color, in selection order.
pub fn format_hex_list(palette: &Palette) -> String {
    palette.iter().map(|c| format!("{}\n", c.to_hex())).collect()
}

/// Choose black or white text for readable labels on `c`.
fn label_color(c: Color) -> TermColor {
    if c.relative_luminance() > 0.4 {
        TermColor::Black
    } else {
        TermColor::White
    }
}

/// Colored terminal swatches, one line per palette entry.
pub fn format_preview(palette: &Palette) -> String {
    palette
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let bg = TermColor::Rgb {
                r: c.r,
                g: c.g,
                b: c.b,
            };
            let swatch = format!("  {:^9}  ", c.to_hex())
                .with(label_color(c))
                .on(bg);
            format!("{:>2} {swatch}\n", i + 1)
        })
        .collect()
}
