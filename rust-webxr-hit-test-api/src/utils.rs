use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering::SeqCst;

static REQUEST_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

// Generates a unique identifier for a hit-test request, used to tie log lines together
pub fn new_id() -> u32 {
    REQUEST_ID_COUNTER.fetch_add(1, SeqCst) as u32
}

// Returns the current time in milliseconds
pub fn timestamp() -> f64 {
    let timespec = time::get_time();
    timespec.sec as f64 * 1000.0 + (timespec.nsec as f64 * 1e-6)
}

// Multiply two column-major 4x4 matrices, returning a · b.
// `out` may alias neither input: the result is built in a local and written once.
pub fn multiply_matrix(a: &[f32; 16], b: &[f32; 16], out: &mut [f32; 16]) {
    let mut tmp = [0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            tmp[col * 4 + row] = a[row] * b[col * 4]
                + a[4 + row] * b[col * 4 + 1]
                + a[8 + row] * b[col * 4 + 2]
                + a[12 + row] * b[col * 4 + 3];
        }
    }
    *out = tmp;
}

// Inverts a column-major 4x4 matrix through its 2x2 sub-determinants.
// Returns false, leaving `out` untouched, when the matrix is singular.
pub fn inverse_matrix(m: &[f32; 16], out: &mut [f32; 16]) -> bool {
    let (a00, a01, a02, a03) = (m[0], m[1], m[2], m[3]);
    let (a10, a11, a12, a13) = (m[4], m[5], m[6], m[7]);
    let (a20, a21, a22, a23) = (m[8], m[9], m[10], m[11]);
    let (a30, a31, a32, a33) = (m[12], m[13], m[14], m[15]);

    let b00 = determinant2x2(a00, a01, a10, a11);
    let b01 = determinant2x2(a00, a02, a10, a12);
    let b02 = determinant2x2(a00, a03, a10, a13);
    let b03 = determinant2x2(a01, a02, a11, a12);
    let b04 = determinant2x2(a01, a03, a11, a13);
    let b05 = determinant2x2(a02, a03, a12, a13);
    let b06 = determinant2x2(a20, a21, a30, a31);
    let b07 = determinant2x2(a20, a22, a30, a32);
    let b08 = determinant2x2(a20, a23, a30, a33);
    let b09 = determinant2x2(a21, a22, a31, a32);
    let b10 = determinant2x2(a21, a23, a31, a33);
    let b11 = determinant2x2(a22, a23, a32, a33);

    let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
    if det == 0f32 || !det.is_finite() {
        return false;
    }
    let inv_det = 1.0 / det;

    let tmp = [
        (a11 * b11 - a12 * b10 + a13 * b09) * inv_det,
        (a02 * b10 - a01 * b11 - a03 * b09) * inv_det,
        (a31 * b05 - a32 * b04 + a33 * b03) * inv_det,
        (a22 * b04 - a21 * b05 - a23 * b03) * inv_det,
        (a12 * b08 - a10 * b11 - a13 * b07) * inv_det,
        (a00 * b11 - a02 * b08 + a03 * b07) * inv_det,
        (a32 * b02 - a30 * b05 - a33 * b01) * inv_det,
        (a20 * b05 - a22 * b02 + a23 * b01) * inv_det,
        (a10 * b10 - a11 * b08 + a13 * b06) * inv_det,
        (a01 * b08 - a00 * b10 - a03 * b06) * inv_det,
        (a30 * b04 - a31 * b02 + a33 * b00) * inv_det,
        (a21 * b02 - a20 * b04 - a23 * b00) * inv_det,
        (a11 * b07 - a10 * b09 - a12 * b06) * inv_det,
        (a00 * b09 - a01 * b07 + a02 * b06) * inv_det,
        (a31 * b01 - a30 * b03 - a32 * b00) * inv_det,
        (a20 * b03 - a21 * b01 + a22 * b00) * inv_det,
    ];
    *out = tmp;
    true
}

// Inverse of a rotation + translation matrix: [Rᵀ | -Rᵀt].
// Exact for rigid transforms, meaningless for anything with scale or shear.
pub fn rigid_inverse_matrix(m: &[f32; 16], out: &mut [f32; 16]) {
    let mut tmp: [f32; 16] = identity_matrix!();
    for col in 0..3 {
        for row in 0..3 {
            tmp[col * 4 + row] = m[row * 4 + col];
        }
    }
    for row in 0..3 {
        tmp[12 + row] = -(tmp[row] * m[12] + tmp[4 + row] * m[13] + tmp[8 + row] * m[14]);
    }
    *out = tmp;
}

#[inline]
fn determinant2x2(a: f32, b: f32, c: f32, d: f32) -> f32 {
    a * d - b * c
}

// Adapted from http://www.euclideanspace.com/maths/geometry/rotations/conversions/matrixToQuaternion/index.htm
// Returns [x, y, z, w] for the rotation part of a column-major matrix.
// Branches on the largest diagonal term so half turns keep a non-zero component.
pub fn matrix_to_quat(matrix: &[f32; 16]) -> [f32; 4] {
    // m(row, col)
    let m = |row: usize, col: usize| matrix[col * 4 + row];
    let trace = m(0, 0) + m(1, 1) + m(2, 2);

    if trace > 0.0 {
        let s = (trace + 1.0).sqrt() * 2.0;
        [(m(2, 1) - m(1, 2)) / s, (m(0, 2) - m(2, 0)) / s, (m(1, 0) - m(0, 1)) / s, 0.25 * s]
    } else if m(0, 0) > m(1, 1) && m(0, 0) > m(2, 2) {
        let s = (1.0 + m(0, 0) - m(1, 1) - m(2, 2)).sqrt() * 2.0;
        [0.25 * s, (m(0, 1) + m(1, 0)) / s, (m(0, 2) + m(2, 0)) / s, (m(2, 1) - m(1, 2)) / s]
    } else if m(1, 1) > m(2, 2) {
        let s = (1.0 + m(1, 1) - m(0, 0) - m(2, 2)).sqrt() * 2.0;
        [(m(0, 1) + m(1, 0)) / s, 0.25 * s, (m(1, 2) + m(2, 1)) / s, (m(0, 2) - m(2, 0)) / s]
    } else {
        let s = (1.0 + m(2, 2) - m(0, 0) - m(1, 1)).sqrt() * 2.0;
        [(m(0, 2) + m(2, 0)) / s, (m(1, 2) + m(2, 1)) / s, 0.25 * s, (m(1, 0) - m(0, 1)) / s]
    }
}
