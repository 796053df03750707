use euclid::{RigidTransform3D, Rotation3D, Vector3D};
use crate::utils;

/// A rigid (rotation + translation) homogeneous transform, stored as a
/// column-major 4x4 matrix the way WebGL and WebXR lay them out.
///
/// Values are immutable: every operation returns a fresh transform, so a
/// transform handed to a caller is never aliased by later computation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct XRTransform {
    matrix: [f32; 16],
}

impl Default for XRTransform {
    fn default() -> XRTransform {
        XRTransform::identity()
    }
}

impl XRTransform {
    pub fn identity() -> XRTransform {
        XRTransform { matrix: identity_matrix!() }
    }

    /// Wraps a column-major matrix. The matrix is expected to be rigid;
    /// nothing here checks for scale or shear.
    pub fn from_matrix(matrix: [f32; 16]) -> XRTransform {
        XRTransform { matrix }
    }

    pub fn from_translation(x: f32, y: f32, z: f32) -> XRTransform {
        let mut matrix: [f32; 16] = identity_matrix!();
        matrix[12] = x;
        matrix[13] = y;
        matrix[14] = z;
        XRTransform { matrix }
    }

    /// Builds a transform from a position and an `[x, y, z, w]` orientation quaternion.
    pub fn from_pose(position: [f32; 3], orientation: [f32; 4]) -> XRTransform {
        let rotation = Rotation3D::quaternion(orientation[0], orientation[1], orientation[2], orientation[3]);
        let translation = Vector3D::new(position[0], position[1], position[2]);
        XRTransform::from_rigid(&RigidTransform3D::<f32, (), ()>::new(rotation, translation))
    }

    pub fn from_rigid<Src, Dst>(rigid: &RigidTransform3D<f32, Src, Dst>) -> XRTransform {
        // euclid transforms row vectors, so its row-major layout is our column-major one.
        XRTransform { matrix: rigid.to_transform().to_row_major_array() }
    }

    pub fn to_rigid<Src, Dst>(&self) -> RigidTransform3D<f32, Src, Dst> {
        let [x, y, z, w] = self.orientation();
        let [px, py, pz] = self.position();
        RigidTransform3D::new(Rotation3D::quaternion(x, y, z, w), Vector3D::new(px, py, pz))
    }

    pub fn matrix(&self) -> &[f32; 16] {
        &self.matrix
    }

    pub fn position(&self) -> [f32; 3] {
        [self.matrix[12], self.matrix[13], self.matrix[14]]
    }

    /// Orientation as an `[x, y, z, w]` quaternion.
    pub fn orientation(&self) -> [f32; 4] {
        utils::matrix_to_quat(&self.matrix)
    }

    /// Returns `self · other`.
    pub fn multiply(&self, other: &XRTransform) -> XRTransform {
        let mut matrix = [0f32; 16];
        utils::multiply_matrix(&self.matrix, &other.matrix, &mut matrix);
        XRTransform { matrix }
    }

    /// General inverse; `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<XRTransform> {
        let mut matrix = [0f32; 16];
        if utils::inverse_matrix(&self.matrix, &mut matrix) {
            Some(XRTransform { matrix })
        } else {
            None
        }
    }

    /// Inverse that relies on the rotation block being orthonormal.
    pub fn rigid_inverse(&self) -> XRTransform {
        let mut matrix = [0f32; 16];
        utils::rigid_inverse_matrix(&self.matrix, &mut matrix);
        XRTransform { matrix }
    }

    pub fn is_finite(&self) -> bool {
        self.matrix.iter().all(|v| v.is_finite())
    }

    pub fn approx_eq(&self, other: &XRTransform, epsilon: f32) -> bool {
        self.matrix
            .iter()
            .zip(other.matrix.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    pub fn is_identity(&self, epsilon: f32) -> bool {
        self.approx_eq(&XRTransform::identity(), epsilon)
    }
}

/// Maps a pose expressed in `source` into the `destination` frame:
/// `destination⁻¹ · source`, both given relative to a shared root.
///
/// The operand order matters. Swapping them yields the inverse of what
/// callers expect, which still looks like a plausible transform.
pub fn get_transform_to(source: &XRTransform, destination: &XRTransform) -> XRTransform {
    let inverse = match destination.inverse() {
        Some(inverse) => inverse,
        None => {
            warn!("Singular destination transform, falling back to the rigid inverse");
            destination.rigid_inverse()
        }
    };
    inverse.multiply(source)
}
