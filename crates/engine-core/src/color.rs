use palette::{FromColor, LinSrgba, Srgba};

use crate::scene::ColorLinPremul;

// sRGB → Linear premultiplied conversions, kept out of scene.rs for separation of concerns.
impl ColorLinPremul {
    /// Create from sRGB u8 channels.
    #[inline]
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_srgba_u8([r, g, b, a])
    }

    /// Create from a packed `0xAARRGGBB` sRGB value, the layout style attributes use.
    #[inline]
    pub fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_srgba_u8([r, g, b, a])
    }

    /// Create from sRGB u8 RGBA array (premultiplied in linear space).
    #[inline]
    pub fn from_srgba_u8(c: [u8; 4]) -> Self {
        let s = Srgba::new(
            c[0] as f32 / 255.0,
            c[1] as f32 / 255.0,
            c[2] as f32 / 255.0,
            c[3] as f32 / 255.0,
        );
        let lin: LinSrgba = LinSrgba::from_color(s);
        Self {
            r: lin.red * lin.alpha,
            g: lin.green * lin.alpha,
            b: lin.blue * lin.alpha,
            a: lin.alpha,
        }
    }

    /// Convert back to sRGB u8 RGBA array (unpremultiplied).
    #[inline]
    pub fn to_srgba_u8(&self) -> [u8; 4] {
        let (r, g, b) = if self.a > 0.0001 {
            (self.r / self.a, self.g / self.a, self.b / self.a)
        } else {
            (0.0, 0.0, 0.0)
        };

        let lin = LinSrgba::new(r, g, b, self.a);
        let srgb: Srgba = Srgba::from_color(lin);

        [
            (srgb.red * 255.0).round().clamp(0.0, 255.0) as u8,
            (srgb.green * 255.0).round().clamp(0.0, 255.0) as u8,
            (srgb.blue * 255.0).round().clamp(0.0, 255.0) as u8,
            (srgb.alpha * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Pack back into `0xAARRGGBB`.
    #[inline]
    pub fn to_argb(&self) -> u32 {
        let [r, g, b, a] = self.to_srgba_u8();
        u32::from_be_bytes([a, r, g, b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_channels_land_in_the_right_place() {
        let red = ColorLinPremul::from_argb(0xFFFF_0000);
        assert_eq!(red.to_srgba_u8(), [255, 0, 0, 255]);
        assert_eq!(red.a, 1.0);
        assert_eq!(red.g, 0.0);
    }

    #[test]
    fn gray_survives_linear_round_trip() {
        let gray = ColorLinPremul::from_argb(0xFF88_8888);
        assert_eq!(gray.to_argb(), 0xFF88_8888);
        // Linear value of sRGB 0x88 is well below the midpoint.
        assert!(gray.r < 0.5);
    }

    #[test]
    fn transparent_unpremultiplies_to_black() {
        let c = ColorLinPremul::from_argb(0x0012_3456);
        assert_eq!(c.to_srgba_u8(), [0, 0, 0, 0]);
    }
}
