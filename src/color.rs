//! Packed 32-bit color values.
//!
//! Script hosts hand color data over as signed 32-bit elements; each element
//! is a packed ARGB color whose bits are carried through unchanged.

/// A packed 32-bit ARGB color.
///
/// Layout is `0xAARRGGBB`, matching the packed integers produced by the
/// script-side color type.
#[repr(transparent)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, bytemuck::Pod, bytemuck::Zeroable,
)]
pub struct PackedColor(pub u32);

impl PackedColor {
    /// Opaque black.
    pub const BLACK: Self = Self(0xFF00_0000);

    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    /// Build a color from individual channels.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Reinterpret a script-side signed element as a packed color.
    ///
    /// The bit pattern is copied verbatim; no channel conversion happens.
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits as u32)
    }

    /// Alpha channel.
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_argb_channels() {
        let c = PackedColor::from_argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.0, 0x1234_5678);
        assert_eq!(c.alpha(), 0x12);
        assert_eq!(c.red(), 0x34);
        assert_eq!(c.green(), 0x56);
        assert_eq!(c.blue(), 0x78);
    }

    #[test]
    fn test_from_bits_is_verbatim() {
        // -1 as i32 is all ones: opaque white.
        assert_eq!(PackedColor::from_bits(-1), PackedColor::WHITE);
        // Sign bit carries into the alpha channel unchanged.
        let c = PackedColor::from_bits(i32::MIN);
        assert_eq!(c.0, 0x8000_0000);
        assert_eq!(c.alpha(), 0x80);
    }

    #[test]
    fn test_constants() {
        assert_eq!(PackedColor::BLACK.alpha(), 0xFF);
        assert_eq!(PackedColor::BLACK.red(), 0);
        assert_eq!(PackedColor::WHITE.blue(), 0xFF);
    }
}
