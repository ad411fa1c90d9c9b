//! 90-degree rotations of flat square matrices and cubic volumes
//!
//! All functions operate on a caller-supplied flat buffer plus a side
//! length `s`. The linear layout is fixed:
//!
//! - 2D: `(x, y) → y*s + x`, buffer length `s*s`
//! - 3D: `(x, y, z) → y*s*s + z*s + x`, buffer length `s*s*s`
//!
//! Note the 3D layout: z varies faster than y, so a cubic volume is a
//! stack of `s` XZ slabs along the y axis. That makes the XZ rotation a
//! per-slab 2D rotation, while the YZ and XY rotations have to reorder
//! the volume through a scratch buffer first.
//!
//! Rotation is a permutation of the buffer: no element values are read
//! as numbers, only relocated, so any `T` works (the scratch-buffer
//! paths additionally need `T: Clone`).

/// Rotate a square matrix of side `s` 90 degrees clockwise, in place.
///
/// The element at row `r`, column `c` moves to row `c`, column
/// `s - 1 - r`. Two swap passes are used: an anti-diagonal transpose
/// followed by a top-to-bottom reversal of every column. No scratch
/// storage is allocated.
///
/// # Panics
///
/// Panics if `m.len() < s*s`. Callers guarantee `m.len() == s*s`;
/// the extra elements of a longer buffer are left untouched but the
/// result is meaningless.
pub fn rotate_2d_cw<T>(m: &mut [T], s: usize) {
    if s < 2 {
        // nothing to do
    } else if s == 2 {
        // The general path degenerates for s == 2; three swaps do it.
        m.swap(0, 3);
        m.swap(1, 3);
        m.swap(0, 2);
    } else {
        let size = s * s;
        for y in 0..s {
            for x in 0..(s - y) {
                m.swap(y * s + x, size - (x * s + y) - 1);
            }
        }
        // Every column is now reversed from top to bottom and must be
        // reversed again to form the desired result.
        for x in 0..s {
            for y in 0..(s / 2) {
                m.swap(s * y + x, size - (s * y + (s - x - 1)) - 1);
            }
        }
    }
}

/// Rotate a square matrix of side `s` 90 degrees counter-clockwise,
/// in place, as three clockwise quarter turns.
pub fn rotate_2d_ccw<T>(m: &mut [T], s: usize) {
    for _ in 0..3 {
        rotate_2d_cw(m, s);
    }
}

/// Rotate every XZ slab of a cubic volume of side `s` 90 degrees
/// clockwise, in place.
///
/// Each of the `s` contiguous `s*s` slabs along the y axis is rotated
/// independently; the y axis itself is untouched.
///
/// # Panics
///
/// Panics if `m.len() < s*s*s`.
pub fn rotate_3d_xz_cw<T>(m: &mut [T], s: usize) {
    for y in 0..s {
        rotate_2d_cw(&mut m[y * s * s..(y + 1) * s * s], s);
    }
}

/// Counter-clockwise XZ rotation, as three clockwise quarter turns.
pub fn rotate_3d_xz_ccw<T>(m: &mut [T], s: usize) {
    for _ in 0..3 {
        rotate_3d_xz_cw(m, s);
    }
}

/// Rotate a cubic volume of side `s` 90 degrees clockwise in the YZ
/// planes (x held fixed per rotated slice).
///
/// The y axis is not contiguous in the linear layout, so the volume is
/// relinearized into a scratch buffer (enumerating x, then y, then z),
/// rotated there via [`rotate_3d_xz_cw`], and copied back in the same
/// enumeration order.
///
/// # Panics
///
/// Panics if `m.len() < s*s*s`.
pub fn rotate_3d_yz_cw<T: Clone>(m: &mut [T], s: usize) {
    let mut n = Vec::with_capacity(s * s * s);
    for x in 0..s {
        for y in 0..s {
            for z in 0..s {
                n.push(m[s * s * y + s * z + x].clone());
            }
        }
    }
    rotate_3d_xz_cw(&mut n, s);
    let mut i = 0;
    for x in 0..s {
        for y in 0..s {
            for z in 0..s {
                m[s * s * y + s * z + x] = n[i].clone();
                i += 1;
            }
        }
    }
}

/// Counter-clockwise YZ rotation, as three clockwise quarter turns.
pub fn rotate_3d_yz_ccw<T: Clone>(m: &mut [T], s: usize) {
    for _ in 0..3 {
        rotate_3d_yz_cw(m, s);
    }
}

/// Rotate a cubic volume of side `s` 90 degrees clockwise in the XY
/// planes (z held fixed per rotated slice).
///
/// Structured like [`rotate_3d_yz_cw`] but with the relinearization
/// passes enumerating z, then y, then x. The two enumeration orders are
/// deliberately different; each is tied to which axis pair must land
/// contiguously for the inner XZ rotation to do the right thing.
///
/// # Panics
///
/// Panics if `m.len() < s*s*s`.
pub fn rotate_3d_xy_cw<T: Clone>(m: &mut [T], s: usize) {
    let mut n = Vec::with_capacity(s * s * s);
    for z in 0..s {
        for y in 0..s {
            for x in 0..s {
                n.push(m[s * s * y + s * z + x].clone());
            }
        }
    }
    rotate_3d_xz_cw(&mut n, s);
    let mut i = 0;
    for z in 0..s {
        for y in 0..s {
            for x in 0..s {
                m[s * s * y + s * z + x] = n[i].clone();
                i += 1;
            }
        }
    }
}

/// Counter-clockwise XY rotation, as three clockwise quarter turns.
pub fn rotate_3d_xy_ccw<T: Clone>(m: &mut [T], s: usize) {
    for _ in 0..3 {
        rotate_3d_xy_cw(m, s);
    }
}
