//! 90-degree Grid Rotation Library
//!
//! This crate provides in-place quarter-turn rotations over flat square
//! matrices and cubic volumes, plus the index and point helpers that go
//! with them.
//!
//! ## Rotation functions
//!
//! - [`rotate_2d_cw`] / [`rotate_2d_ccw`] - square matrix quarter turns
//! - [`rotate_3d_xz_cw`] / [`rotate_3d_xz_ccw`] - per-slab XZ rotation
//! - [`rotate_3d_yz_cw`] / [`rotate_3d_yz_ccw`] - YZ rotation via relinearization
//! - [`rotate_3d_xy_cw`] / [`rotate_3d_xy_ccw`] - XY rotation via relinearization
//!
//! All of them operate on a caller-supplied `&mut [T]` whose length must
//! match the declared side length (`s*s` or `s*s*s`).
//!
//! ## Checked containers
//!
//! - [`Square`] / [`Cube`] - owned buffers that validate their length at
//!   construction and expose the rotations as methods
//!
//! ## Helpers
//!
//! - [`index_from_2d`] / [`index_from_3d`] / [`index_from_4d`] - checked
//!   coordinate-to-offset conversion
//! - [`Point2`] / [`Point3`] - plain-old-data points with orbit and
//!   normalization helpers

pub mod index;
pub mod point;
pub mod rotate;

mod grid;

pub use grid::{Cube, GridError, Square};
pub use index::{index_from_2d, index_from_3d, index_from_4d, IndexError};
pub use point::{Point2, Point3};
pub use rotate::{
    rotate_2d_ccw, rotate_2d_cw, rotate_3d_xy_ccw, rotate_3d_xy_cw, rotate_3d_xz_ccw,
    rotate_3d_xz_cw, rotate_3d_yz_ccw, rotate_3d_yz_cw,
};
