//! Small 2D/3D point types
//!
//! Plain-old-data points with the handful of operations the rotation
//! and camera code around this crate actually needs: orbiting a point
//! around a center at a given radius, magnitude, and normalization.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 2D point
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point on the circle of radius `r` around the origin at angle
    /// `a` (radians, measured from the positive y axis).
    pub fn orbit(a: f32, r: f32) -> Self {
        Self {
            x: r * a.sin(),
            y: r * a.cos(),
        }
    }
}

/// 3D point
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Eye position orbiting `center` at radius `r`, with horizontal
    /// angle `a` and vertical angle `b` (radians).
    pub fn orbit(center: Point3, a: f32, b: f32, r: f32) -> Self {
        Self {
            x: center.x + r * -a.sin() * b.cos(),
            y: center.y + r * -b.sin(),
            z: center.z + -r * a.cos() * b.cos(),
        }
    }

    /// Euclidean length of the vector from the origin to this point.
    #[inline]
    pub fn magnitude(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit-length copy of this point. The zero point is returned
    /// unchanged.
    pub fn normalized(self) -> Self {
        let m = self.magnitude();
        if m != 0.0 {
            Self {
                x: self.x / m,
                y: self.y / m,
                z: self.z / m,
            }
        } else {
            self
        }
    }
}
