use palette::{LinSrgb, Srgb};

/// An 8-bit sRGB pixel color. Equality and hashing use the exact channel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Absolute per-channel differences, in `[r, g, b]` order.
    pub fn channel_deltas(self, other: Color) -> [u8; 3] {
        [
            self.r.abs_diff(other.r),
            self.g.abs_diff(other.g),
            self.b.abs_diff(other.b),
        ]
    }

    /// WCAG 2.0 relative luminance, weighted over linear sRGB.
    pub fn relative_luminance(self) -> f32 {
        let linear: LinSrgb = Srgb::from(self).into_format::<f32>().into_linear();
        0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
    }
}

impl From<Color> for Srgb<u8> {
    fn from(color: Color) -> Self {
        Srgb::new(color.r, color.g, color.b)
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(pixel: image::Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Self::new(r, g, b)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb([color.r, color.g, color.b])
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Color = Color::new(0, 0, 0);
    const WHITE: Color = Color::new(255, 255, 255);

    #[test]
    fn to_hex_is_lowercase_and_padded() {
        assert_eq!(Color::new(255, 136, 0).to_hex(), "#ff8800");
        assert_eq!(Color::new(1, 2, 3).to_hex(), "#010203");
    }

    #[test]
    fn display_matches_to_hex() {
        let color = Color::new(171, 205, 239);
        assert_eq!(format!("{color}"), color.to_hex());
    }

    #[test]
    fn channel_deltas_are_symmetric() {
        let a = Color::new(10, 200, 30);
        let b = Color::new(250, 20, 30);
        assert_eq!(a.channel_deltas(b), [240, 180, 0]);
        assert_eq!(b.channel_deltas(a), [240, 180, 0]);
    }

    #[test]
    fn image_pixel_conversion_keeps_channels() {
        let color = Color::from(image::Rgb([12, 34, 56]));
        assert_eq!(color, Color::new(12, 34, 56));
        let back: image::Rgb<u8> = color.into();
        assert_eq!(back.0, [12, 34, 56]);
    }

    #[test]
    fn srgb_conversion_keeps_channels() {
        let srgb: Srgb<u8> = Color::new(200, 100, 50).into();
        assert_eq!((srgb.red, srgb.green, srgb.blue), (200, 100, 50));
    }

    #[test]
    fn relative_luminance_extremes() {
        assert!(BLACK.relative_luminance() < 0.001);
        assert!((WHITE.relative_luminance() - 1.0).abs() < 0.001);
    }

    #[test]
    fn relative_luminance_linearizes_channels() {
        // sRGB 128 is about 0.2159 in linear light, not 0.5.
        let gray = Color::new(128, 128, 128).relative_luminance();
        assert!((gray - 0.2159).abs() < 0.001, "{gray}");
        // Green carries most of the weight.
        let green = Color::new(0, 255, 0).relative_luminance();
        assert!((green - 0.7152).abs() < 0.001, "{green}");
        assert!(Color::new(0, 0, 255).relative_luminance() < 0.08);
    }
}
