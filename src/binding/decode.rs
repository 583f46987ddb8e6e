//! Decoding of flat script-side buffers into builder regions.
//!
//! These routines trust their inputs: narrowing is silent and a trailing
//! odd element is dropped. The opt-in `validate` feature rejects such
//! inputs before decode ever runs.

use crate::color::PackedColor;
use crate::math::Point2;

/// Decode consecutive `(x, y)` float pairs into points.
///
/// Element pair `2i, 2i+1` becomes `out[i]`. A trailing element without a
/// partner is dropped. Writes at most `out.len()` points.
pub(super) fn decode_points(src: &[f32], out: &mut [Point2]) {
    for (point, pair) in out.iter_mut().zip(src.chunks_exact(2)) {
        *point = Point2::new(pair[0], pair[1]);
    }
}

/// Decode packed color elements, copying each bit pattern verbatim.
pub(super) fn decode_colors(src: &[i32], out: &mut [PackedColor]) {
    for (color, &bits) in out.iter_mut().zip(src) {
        *color = PackedColor::from_bits(bits);
    }
}

/// Decode index elements, narrowing each to 16 bits.
///
/// Values outside the 16-bit range wrap: 65536 becomes 0 and -1 becomes
/// 65535.
pub(super) fn decode_indices(src: &[i32], out: &mut [u16]) {
    for (index, &value) in out.iter_mut().zip(src) {
        *index = value as u16;
    }
}
