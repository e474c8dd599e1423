use super::Vector2;

/// A 3x3 affine transformation matrix stored in row-major order.
///
/// Used for 2D transformations (translate, rotate, scale) that compose
/// parent→child while projecting items into view coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix3 {
    /// Matrix data in row-major order: [row0, row1, row2]
    pub data: [f64; 9],
}

impl Matrix3 {
    /// Identity matrix (no transformation)
    pub const IDENTITY: Self = Self {
        data: [
            1.0, 0.0, 0.0, // row 0
            0.0, 1.0, 0.0, // row 1
            0.0, 0.0, 1.0, // row 2
        ],
    };

    /// Create an identity matrix
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Create a translation matrix
    pub fn translate(x: f64, y: f64) -> Self {
        Self {
            data: [
                1.0, 0.0, x, // row 0
                0.0, 1.0, y, // row 1
                0.0, 0.0, 1.0, // row 2
            ],
        }
    }

    /// Create a rotation matrix (counterclockwise, radians)
    pub fn rotate(angle_radians: f64) -> Self {
        let cos = angle_radians.cos();
        let sin = angle_radians.sin();
        Self {
            data: [
                cos, -sin, 0.0, // row 0
                sin, cos, 0.0, // row 1
                0.0, 0.0, 1.0, // row 2
            ],
        }
    }

    /// Create a rotation matrix from degrees
    pub fn rotate_degrees(angle_degrees: f64) -> Self {
        Self::rotate(angle_degrees.to_radians())
    }

    /// Create a uniform scale matrix
    pub fn scale(s: f64) -> Self {
        Self::scale_xy(s, s)
    }

    /// Create a non-uniform scale matrix
    pub fn scale_xy(sx: f64, sy: f64) -> Self {
        Self {
            data: [
                sx, 0.0, 0.0, // row 0
                0.0, sy, 0.0, // row 1
                0.0, 0.0, 1.0, // row 2
            ],
        }
    }

    /// Compose this matrix with another: self * other.
    /// Applies `other` first, then `self`.
    pub fn then(&self, other: &Matrix3) -> Matrix3 {
        let a = &self.data;
        let b = &other.data;

        let mut result = [0.0f64; 9];
        for i in 0..3 {
            for j in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += a[i * 3 + k] * b[k * 3 + j];
                }
                result[i * 3 + j] = sum;
            }
        }

        Matrix3 { data: result }
    }

    /// Compute the inverse of this matrix.
    /// Assumes an affine 2D matrix; a degenerate matrix inverts to identity.
    pub fn inverse(&self) -> Matrix3 {
        // | a  b  tx |        | d/det   -b/det  (-d*tx + b*ty)/det |
        // | c  d  ty |   →    | -c/det   a/det  (c*tx - a*ty)/det  |
        // | 0  0  1  |        | 0        0      1                  |
        let a = self.data[0];
        let b = self.data[1];
        let tx = self.data[2];
        let c = self.data[3];
        let d = self.data[4];
        let ty = self.data[5];

        let det = a * d - b * c;
        if det.abs() < 1e-12 {
            return Self::IDENTITY;
        }

        let inv_det = 1.0 / det;
        Matrix3 {
            data: [
                d * inv_det,
                -b * inv_det,
                (-d * tx + b * ty) * inv_det,
                -c * inv_det,
                a * inv_det,
                (c * tx - a * ty) * inv_det,
                0.0,
                0.0,
                1.0,
            ],
        }
    }

    /// Transform a point by this matrix.
    pub fn apply(&self, point: Vector2) -> Vector2 {
        Vector2::new(
            self.data[0] * point.x + self.data[1] * point.y + self.data[2],
            self.data[3] * point.x + self.data[4] * point.y + self.data[5],
        )
    }

    /// Uniform scaling factor of the linear part, √|det|.
    ///
    /// Used to project scalar lengths (radii, font sizes) that have no
    /// orientation of their own.
    pub fn scaling_factor(&self) -> f64 {
        let det = self.data[0] * self.data[4] - self.data[1] * self.data[3];
        det.abs().sqrt()
    }

    /// Check if this is the identity matrix
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Serialize as an SVG transform attribute value: `matrix(a,b,c,d,e,f)`.
    ///
    /// SVG orders the six values column-major: x' = a*x + c*y + e.
    pub fn to_svg_transform(&self) -> String {
        format!(
            "matrix({},{},{},{},{},{})",
            self.data[0], self.data[3], self.data[1], self.data[4], self.data[2], self.data[5]
        )
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_identity() {
        let m = Matrix3::identity();
        assert_eq!(m, Matrix3::IDENTITY);
        assert!(m.is_identity());
    }

    #[test]
    fn test_translate() {
        let m = Matrix3::translate(10.0, 20.0);
        let p = m.apply(Vector2::new(0.0, 0.0));
        assert!(approx_eq(p.x, 10.0));
        assert!(approx_eq(p.y, 20.0));

        let p2 = m.apply(Vector2::new(5.0, 5.0));
        assert!(approx_eq(p2.x, 15.0));
        assert!(approx_eq(p2.y, 25.0));
    }

    #[test]
    fn test_rotate() {
        let m = Matrix3::rotate_degrees(90.0);
        let p = m.apply(Vector2::new(1.0, 0.0));
        assert!(approx_eq(p.x, 0.0));
        assert!(approx_eq(p.y, 1.0));
    }

    #[test]
    fn test_scale() {
        let m = Matrix3::scale(2.0);
        let p = m.apply(Vector2::new(3.0, 4.0));
        assert!(approx_eq(p.x, 6.0));
        assert!(approx_eq(p.y, 8.0));
    }

    #[test]
    fn test_scale_xy() {
        let m = Matrix3::scale_xy(2.0, 3.0);
        let p = m.apply(Vector2::new(1.0, 1.0));
        assert!(approx_eq(p.x, 2.0));
        assert!(approx_eq(p.y, 3.0));
    }

    #[test]
    fn test_compose() {
        // scale.then(translate): first translate, then scale
        // Point (0,0) -> translate -> (10,0) -> scale -> (20,0)
        let translate = Matrix3::translate(10.0, 0.0);
        let scale = Matrix3::scale(2.0);

        let composed = scale.then(&translate);
        let p = composed.apply(Vector2::new(0.0, 0.0));
        assert!(approx_eq(p.x, 20.0));
        assert!(approx_eq(p.y, 0.0));
    }

    #[test]
    fn test_inverse_translate() {
        let m = Matrix3::translate(10.0, 20.0);
        let composed = m.then(&m.inverse());

        let p = composed.apply(Vector2::new(5.0, 7.0));
        assert!(approx_eq(p.x, 5.0));
        assert!(approx_eq(p.y, 7.0));
    }

    #[test]
    fn test_inverse_rotate() {
        let m = Matrix3::rotate_degrees(45.0);
        let composed = m.then(&m.inverse());

        let p = composed.apply(Vector2::new(3.0, 4.0));
        assert!(approx_eq(p.x, 3.0));
        assert!(approx_eq(p.y, 4.0));
    }

    #[test]
    fn test_scaling_factor() {
        assert!(approx_eq(Matrix3::scale(3.0).scaling_factor(), 3.0));
        assert!(approx_eq(Matrix3::translate(5.0, 6.0).scaling_factor(), 1.0));
        // Rotation does not change lengths.
        assert!(approx_eq(Matrix3::rotate_degrees(30.0).scaling_factor(), 1.0));
    }

    #[test]
    fn test_to_svg_transform() {
        let m = Matrix3::translate(1.0, 2.0);
        assert_eq!(m.to_svg_transform(), "matrix(1,0,0,1,1,2)");
    }
}
