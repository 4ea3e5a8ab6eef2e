use image::{imageops, RgbImage};

use crate::pipeline::select::Palette;

/// Width of the palette strip placed beside an image `image_width` wide.
pub fn strip_width(image_width: u32) -> u32 {
    (image_width / 5).max(1)
}

/// Row range `[top, bottom)` of band `index` when `count` bands share
/// `height` rows. The last band absorbs the division remainder; with no
/// bands the range is empty.
pub fn band_rows(index: usize, count: usize, height: u32) -> (u32, u32) {
    if count == 0 {
        return (0, 0);
    }
    let band = height / count as u32;
    let top = band * index as u32;
    let bottom = if index + 1 == count { height } else { top + band };
    (top, bottom)
}

/// Render the palette as horizontal bands, top to bottom in selection order.
pub fn render_strip(palette: &Palette, width: u32, height: u32) -> RgbImage {
    let mut strip = RgbImage::new(width, height);
    let count = palette.colors().len();
    for (i, &color) in palette.iter().enumerate() {
        let (top, bottom) = band_rows(i, count, height);
        for y in top..bottom {
            for x in 0..width {
                strip.put_pixel(x, y, color.into());
            }
        }
    }
    strip
}

/// Place the palette strip on the left of `source` on a widened canvas.
pub fn composite(palette: &Palette, source: &RgbImage) -> RgbImage {
    let (width, height) = source.dimensions();
    let strip_w = strip_width(width);
    let strip = render_strip(palette, strip_w, height);

    let mut canvas = RgbImage::new(width + strip_w, height);
    imageops::replace(&mut canvas, &strip, 0, 0);
    imageops::replace(&mut canvas, source, i64::from(strip_w), 0);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::pipeline::metric::ColorMetric;
    use crate::pipeline::resample::PixelSet;
    use crate::pipeline::select::{select_palette, SelectionConfig};

    fn palette_of(colors: &[(u8, u8, u8)]) -> Palette {
        // Weight earlier colors more so selection keeps the listed order.
        let pixels: PixelSet = colors
            .iter()
            .enumerate()
            .flat_map(|(i, &(r, g, b))| {
                std::iter::repeat(Color::new(r, g, b)).take(colors.len() - i + 1)
            })
            .collect();
        let config = SelectionConfig {
            palette_size: colors.len(),
            parallel: false,
        };
        select_palette(&pixels, &pixels, ColorMetric::default(), config).unwrap()
    }

    #[test]
    fn strip_width_is_a_fifth_with_floor_of_one() {
        assert_eq!(strip_width(500), 100);
        assert_eq!(strip_width(9), 1);
        assert_eq!(strip_width(3), 1);
    }

    #[test]
    fn last_band_absorbs_remainder() {
        assert_eq!(band_rows(0, 8, 100), (0, 12));
        assert_eq!(band_rows(6, 8, 100), (72, 84));
        assert_eq!(band_rows(7, 8, 100), (84, 100));
    }

    #[test]
    fn short_images_give_everything_to_last_band() {
        assert_eq!(band_rows(0, 8, 5), (0, 0));
        assert_eq!(band_rows(7, 8, 5), (0, 5));
    }

    #[test]
    fn zero_bands_cover_no_rows() {
        assert_eq!(band_rows(0, 0, 10), (0, 0));
        assert_eq!(band_rows(0, 0, 0), (0, 0));
    }

    #[test]
    fn strip_bands_follow_selection_order() {
        let palette = palette_of(&[(255, 0, 0), (0, 255, 0), (0, 0, 255)]);
        let strip = render_strip(&palette, 4, 10);
        assert_eq!(strip.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(strip.get_pixel(3, 2).0, [255, 0, 0]);
        assert_eq!(strip.get_pixel(0, 3).0, [0, 255, 0]);
        assert_eq!(strip.get_pixel(0, 5).0, [0, 255, 0]);
        assert_eq!(strip.get_pixel(0, 6).0, [0, 0, 255]);
        assert_eq!(strip.get_pixel(0, 9).0, [0, 0, 255]);
    }

    #[test]
    fn composite_places_strip_left_of_source() {
        let palette = palette_of(&[(255, 0, 0), (0, 0, 255)]);
        let source = RgbImage::from_fn(20, 8, |_, _| image::Rgb([9, 9, 9]));
        let out = composite(&palette, &source);

        assert_eq!(out.dimensions(), (24, 8));
        assert_eq!(out.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(out.get_pixel(3, 7).0, [0, 0, 255]);
        assert_eq!(out.get_pixel(4, 0).0, [9, 9, 9]);
        assert_eq!(out.get_pixel(23, 7).0, [9, 9, 9]);
    }
}
