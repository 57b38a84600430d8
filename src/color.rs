// Packed 0xAARRGGBB colors.
// Alpha rides along in the top byte but nothing downstream reads it.

use image::Rgb;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color(pub u32);

pub const BLACK: Color = Color::pack(0xff, 0x18, 0x18, 0x18);
pub const RED: Color = Color::pack(0xff, 0xff, 0x00, 0x00);
pub const GREEN: Color = Color::pack(0xff, 0x00, 0xff, 0x00);
pub const BLUE: Color = Color::pack(0xff, 0x00, 0x00, 0xff);

impl Color {
    /// Combine four channels into one value, alpha in the highest byte.
    /// Each channel is masked to its low 8 bits, so `0x1ff` packs as `0xff`.
    pub const fn pack(alpha: u32, red: u32, green: u32, blue: u32) -> Self {
        Color(((alpha & 0xff) << 24) | ((red & 0xff) << 16) | ((green & 0xff) << 8) | (blue & 0xff))
    }

    /// Split back into (alpha, red, green, blue).
    pub fn unpack(self) -> (u8, u8, u8, u8) {
        let c = self.0;
        (
            ((c >> 24) & 0xff) as u8,
            ((c >> 16) & 0xff) as u8,
            ((c >> 8) & 0xff) as u8,
            (c & 0xff) as u8,
        )
    }

    /// The three channels that end up in the image file.
    #[inline]
    pub fn to_rgb(self) -> Rgb<u8> {
        let (_, r, g, b) = self.unpack();
        Rgb([r, g, b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn pack_then_unpack_gives_channels_back() {
        let cases: [(u8, u8, u8, u8); 4] =
            [(0, 0, 0, 0), (255, 255, 255, 255), (0xff, 0x10, 0x20, 0x30), (1, 2, 254, 128)];
        for (a, r, g, b) in cases {
            let c = Color::pack(a as u32, r as u32, g as u32, b as u32);
            assert_eq!(c.unpack(), (a, r, g, b));
        }
    }

    #[test]
    fn alpha_is_the_top_byte() {
        assert_eq!(Color::pack(0xff, 0x10, 0x20, 0x30), Color(0xff10_2030));
        assert_eq!(BLACK, Color(0xff18_1818));
        assert_eq!(BLUE, Color(0xff00_00ff));
    }

    #[test]
    fn out_of_range_channels_are_masked() {
        // 0x1ab keeps only 0xab; the overflow never bleeds into a neighbour channel.
        let c = Color::pack(0x100, 0x1ab, 0, 0x2ff);
        assert_eq!(c.unpack(), (0x00, 0xab, 0x00, 0xff));
    }

    #[test]
    fn to_rgb_drops_alpha() {
        assert_eq!(Color(0x7f10_2030).to_rgb(), Rgb([16, 32, 48]));
        assert_eq!(RED.to_rgb(), Rgb([255, 0, 0]));
    }
}
