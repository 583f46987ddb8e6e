//! Strict request checking, enabled by the `validate` feature.
//!
//! The default decode narrows and floor-divides silently. With this module
//! compiled in, [`build`](super::build) rejects malformed requests up front
//! instead.

use super::error::BuildError;
use super::natives::BuildRequest;

/// Reject requests the trusting decode would silently mangle.
pub(super) fn check_request(req: &BuildRequest<'_>) -> Result<(), BuildError> {
    if req.positions.len() % 2 != 0 {
        return Err(BuildError::OddPositionCount(req.positions.len()));
    }
    let vertex_count = req.positions.len() / 2;

    if !req.tex_coords.is_empty() && req.tex_coords.len() != req.positions.len() {
        return Err(BuildError::TexCoordCountMismatch {
            expected: req.positions.len(),
            actual: req.tex_coords.len(),
        });
    }

    if !req.colors.is_empty() && req.colors.len() != vertex_count {
        return Err(BuildError::ColorCountMismatch {
            expected: vertex_count,
            actual: req.colors.len(),
        });
    }

    for (element, &value) in req.indices.iter().enumerate() {
        if value < 0 || value > u16::MAX as i32 || value as usize >= vertex_count {
            return Err(BuildError::IndexOutOfRange {
                element,
                value,
                vertex_count,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request<'a>(
        positions: &'a [f32],
        tex_coords: &'a [f32],
        colors: &'a [i32],
        indices: &'a [i32],
    ) -> BuildRequest<'a> {
        BuildRequest {
            mode: 0,
            positions,
            tex_coords,
            colors,
            indices,
        }
    }

    #[test]
    fn test_accepts_well_formed_request() {
        let req = request(
            &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
            &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
            &[-1, -1, -1],
            &[0, 1, 2],
        );
        assert!(check_request(&req).is_ok());
    }

    #[test]
    fn test_rejects_odd_position_count() {
        let req = request(&[0.0, 0.0, 1.0], &[], &[], &[]);
        assert_eq!(
            check_request(&req).unwrap_err(),
            BuildError::OddPositionCount(3)
        );
    }

    #[test]
    fn test_rejects_tex_coord_mismatch() {
        let req = request(&[0.0, 0.0, 1.0, 0.0], &[0.0, 0.0], &[], &[]);
        assert_eq!(
            check_request(&req).unwrap_err(),
            BuildError::TexCoordCountMismatch {
                expected: 4,
                actual: 2,
            }
        );
    }

    #[test]
    fn test_rejects_color_mismatch() {
        let req = request(&[0.0, 0.0, 1.0, 0.0], &[], &[-1], &[]);
        assert_eq!(
            check_request(&req).unwrap_err(),
            BuildError::ColorCountMismatch {
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn test_rejects_out_of_range_indices() {
        // Negative, past the last vertex, and wider than 16 bits.
        for bad in [-1, 2, 65536] {
            let indices = [0, bad];
            let req = request(&[0.0, 0.0, 1.0, 0.0], &[], &[], &indices);
            match check_request(&req).unwrap_err() {
                BuildError::IndexOutOfRange { element, value, .. } => {
                    assert_eq!(element, 1);
                    assert_eq!(value, bad);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }
}
