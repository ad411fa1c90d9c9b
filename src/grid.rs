//! Owned, length-checked square and cube containers
//!
//! The free functions in [`crate::rotate`] trust the caller to pass a
//! buffer of the right length. `Square` and `Cube` are the checked
//! layer on top: they validate the length once at construction and
//! then expose the same rotations as methods.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::index::{index_from_2d, index_from_3d, IndexError};
use crate::rotate;

/// Error type for grid construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The element count does not match the side length
    SizeMismatch {
        /// Requested side length
        side: usize,
        /// Number of elements supplied
        len: usize,
        /// Number of elements required (`side^2` or `side^3`)
        expected: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::SizeMismatch { side, len, expected } => write!(
                f,
                "buffer of {} elements does not fit side length {} ({} required)",
                len, side, expected
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// A square matrix of side `s`, stored row-major in a flat `Vec`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Square<T> {
    side: usize,
    data: Vec<T>,
}

impl<T> Square<T> {
    /// Wrap a row-major buffer of exactly `side * side` elements.
    pub fn new(side: usize, data: Vec<T>) -> Result<Self, GridError> {
        let expected = side * side;
        if data.len() != expected {
            return Err(GridError::SizeMismatch { side, len: data.len(), expected });
        }
        Ok(Self { side, data })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the square, returning the flat buffer.
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }

    /// Element at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<&T, IndexError> {
        let i = index_from_2d(x, y, self.side, self.side)?;
        Ok(&self.data[i])
    }

    /// Rotate 90 degrees clockwise, in place.
    pub fn rotate_cw(&mut self) {
        rotate::rotate_2d_cw(&mut self.data, self.side);
    }

    /// Rotate 90 degrees counter-clockwise, in place.
    pub fn rotate_ccw(&mut self) {
        rotate::rotate_2d_ccw(&mut self.data, self.side);
    }
}

/// A cubic volume of side `s`, stored in a flat `Vec` with linear
/// layout `(x, y, z) → y*s*s + z*s + x`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cube<T> {
    side: usize,
    data: Vec<T>,
}

impl<T> Cube<T> {
    /// Wrap a buffer of exactly `side * side * side` elements.
    pub fn new(side: usize, data: Vec<T>) -> Result<Self, GridError> {
        let expected = side * side * side;
        if data.len() != expected {
            return Err(GridError::SizeMismatch { side, len: data.len(), expected });
        }
        Ok(Self { side, data })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the cube, returning the flat buffer.
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }

    /// Element at `(x, y, z)`.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Result<&T, IndexError> {
        let i = index_from_3d(x, y, z, self.side, self.side, self.side)?;
        Ok(&self.data[i])
    }

    /// Rotate every XZ slab 90 degrees clockwise, in place.
    pub fn rotate_xz_cw(&mut self) {
        rotate::rotate_3d_xz_cw(&mut self.data, self.side);
    }

    /// Rotate every XZ slab 90 degrees counter-clockwise, in place.
    pub fn rotate_xz_ccw(&mut self) {
        rotate::rotate_3d_xz_ccw(&mut self.data, self.side);
    }
}

impl<T: Clone> Cube<T> {
    /// Rotate 90 degrees clockwise in the YZ planes.
    pub fn rotate_yz_cw(&mut self) {
        rotate::rotate_3d_yz_cw(&mut self.data, self.side);
    }

    /// Rotate 90 degrees counter-clockwise in the YZ planes.
    pub fn rotate_yz_ccw(&mut self) {
        rotate::rotate_3d_yz_ccw(&mut self.data, self.side);
    }

    /// Rotate 90 degrees clockwise in the XY planes.
    pub fn rotate_xy_cw(&mut self) {
        rotate::rotate_3d_xy_cw(&mut self.data, self.side);
    }

    /// Rotate 90 degrees counter-clockwise in the XY planes.
    pub fn rotate_xy_ccw(&mut self) {
        rotate::rotate_3d_xy_ccw(&mut self.data, self.side);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_rejects_wrong_length() {
        let err = Square::new(3, vec![0; 8]).unwrap_err();
        assert_eq!(err, GridError::SizeMismatch { side: 3, len: 8, expected: 9 });
        assert!(Square::new(0, Vec::<i32>::new()).is_ok());
    }

    #[test]
    fn test_cube_rejects_wrong_length() {
        let err = Cube::new(2, vec![0; 9]).unwrap_err();
        assert_eq!(err, GridError::SizeMismatch { side: 2, len: 9, expected: 8 });
    }

    #[test]
    fn test_square_get() {
        let sq = Square::new(2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(sq.get(0, 0), Ok(&1));
        assert_eq!(sq.get(1, 1), Ok(&4));
        assert!(sq.get(2, 0).is_err());
    }

    #[test]
    fn test_square_rotation_matches_free_function() {
        let mut sq = Square::new(3, (1..=9).collect()).unwrap();
        sq.rotate_cw();
        assert_eq!(sq.as_slice(), &[7, 4, 1, 8, 5, 2, 9, 6, 3]);
        sq.rotate_ccw();
        assert_eq!(sq.into_inner(), (1..=9).collect::<Vec<i32>>());
    }

    #[test]
    fn test_cube_get_uses_volume_layout() {
        let cube = Cube::new(2, (0..8).collect::<Vec<i32>>()).unwrap();
        // (x, y, z) → y*4 + z*2 + x
        assert_eq!(cube.get(1, 0, 0), Ok(&1));
        assert_eq!(cube.get(0, 0, 1), Ok(&2));
        assert_eq!(cube.get(0, 1, 0), Ok(&4));
        assert_eq!(cube.get(1, 1, 1), Ok(&7));
    }

    #[test]
    fn test_cube_rotations_round_trip() {
        let original: Vec<i32> = (0..27).collect();
        let mut cube = Cube::new(3, original.clone()).unwrap();
        cube.rotate_yz_cw();
        cube.rotate_xy_cw();
        cube.rotate_xy_ccw();
        cube.rotate_yz_ccw();
        assert_eq!(cube.into_inner(), original);
    }

    #[test]
    fn test_square_serde_round_trip() {
        let sq = Square::new(2, vec![1, 2, 3, 4]).unwrap();
        let json = serde_json::to_string(&sq).unwrap();
        let back: Square<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sq);
    }

    #[test]
    fn test_cube_serde_round_trip() {
        let cube = Cube::new(2, (0..8).collect::<Vec<i32>>()).unwrap();
        let json = serde_json::to_string(&cube).unwrap();
        let back: Cube<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cube);
    }
}
