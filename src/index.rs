//! Checked linear-index helpers
//!
//! Map logical 2D/3D/4D coordinates onto a flat buffer offset, rejecting
//! coordinates outside the given extents. The 3D formula matches the
//! layout used by the rotation functions in [`crate::rotate`] when all
//! extents equal the side length.

use std::fmt;

/// Error type for coordinate-to-index conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// A coordinate was at or past the extent of its axis
    OutOfRange {
        /// Axis name ("x", "y", "z" or "w")
        axis: &'static str,
        /// The offending coordinate value
        value: usize,
        /// The extent of the axis
        extent: usize,
    },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::OutOfRange { axis, value, extent } => {
                write!(f, "{} coordinate {} out of range (extent {})", axis, value, extent)
            }
        }
    }
}

impl std::error::Error for IndexError {}

fn check(axis: &'static str, value: usize, extent: usize) -> Result<(), IndexError> {
    if value >= extent {
        Err(IndexError::OutOfRange { axis, value, extent })
    } else {
        Ok(())
    }
}

/// Linear index of `(x, y)` in a row-major `px` by `py` buffer.
pub fn index_from_2d(x: usize, y: usize, px: usize, py: usize) -> Result<usize, IndexError> {
    check("x", x, px)?;
    check("y", y, py)?;
    Ok(y * px + x)
}

/// Linear index of `(x, y, z)` in a `px` by `py` by `pz` buffer laid
/// out as `y*pz*px + z*px + x` (z varies faster than y).
pub fn index_from_3d(
    x: usize,
    y: usize,
    z: usize,
    px: usize,
    py: usize,
    pz: usize,
) -> Result<usize, IndexError> {
    check("x", x, px)?;
    check("y", y, py)?;
    check("z", z, pz)?;
    Ok(y * pz * px + z * px + x)
}

/// Linear index of `(x, y, z, w)` in a 4D buffer, extending the 3D
/// layout with w as the slowest-varying axis.
pub fn index_from_4d(
    x: usize,
    y: usize,
    z: usize,
    w: usize,
    px: usize,
    py: usize,
    pz: usize,
    pw: usize,
) -> Result<usize, IndexError> {
    check("x", x, px)?;
    check("y", y, py)?;
    check("z", z, pz)?;
    check("w", w, pw)?;
    Ok(w * py * pz * px + y * pz * px + z * px + x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_from_2d() {
        assert_eq!(index_from_2d(0, 0, 4, 4), Ok(0));
        assert_eq!(index_from_2d(3, 0, 4, 4), Ok(3));
        assert_eq!(index_from_2d(1, 2, 4, 4), Ok(9));
        assert_eq!(index_from_2d(3, 3, 4, 4), Ok(15));
    }

    #[test]
    fn test_index_from_3d_matches_rotation_layout() {
        // (x, y, z) → y*s*s + z*s + x for a cube of side s
        let s = 3;
        assert_eq!(index_from_3d(2, 0, 0, s, s, s), Ok(2));
        assert_eq!(index_from_3d(0, 0, 1, s, s, s), Ok(3));
        assert_eq!(index_from_3d(0, 1, 0, s, s, s), Ok(9));
        assert_eq!(index_from_3d(2, 2, 2, s, s, s), Ok(26));
    }

    #[test]
    fn test_index_from_4d() {
        assert_eq!(index_from_4d(1, 1, 1, 1, 2, 2, 2, 2), Ok(15));
        assert_eq!(index_from_4d(0, 0, 0, 1, 2, 2, 2, 2), Ok(8));
    }

    #[test]
    fn test_out_of_range_is_rejected_per_axis() {
        assert_eq!(
            index_from_2d(4, 0, 4, 4),
            Err(IndexError::OutOfRange { axis: "x", value: 4, extent: 4 })
        );
        assert_eq!(
            index_from_3d(0, 5, 0, 4, 4, 4),
            Err(IndexError::OutOfRange { axis: "y", value: 5, extent: 4 })
        );
        assert_eq!(
            index_from_4d(0, 0, 0, 9, 4, 4, 4, 4),
            Err(IndexError::OutOfRange { axis: "w", value: 9, extent: 4 })
        );
    }

    #[test]
    fn test_error_display() {
        let err = index_from_2d(7, 0, 4, 4).unwrap_err();
        assert_eq!(err.to_string(), "x coordinate 7 out of range (extent 4)");
    }
}
