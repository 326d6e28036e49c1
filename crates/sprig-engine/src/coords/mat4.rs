use core::ops::Mul;

use super::Vec2;

/// Column-major 4×4 matrix, laid out the way GL expects uniform uploads.
///
/// Element `m[c * 4 + r]` is row `r` of column `c`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    m: [f32; 16],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Orthographic projection for the box `(left, bottom, near)`–`(right, top, far)`.
    ///
    /// Maps the box onto the unit cube, so 2D world positions expressed in
    /// window width/height land in clip space directly.
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
        let mut m = [0.0; 16];
        m[0] = 2.0 / (right - left);
        m[5] = 2.0 / (top - bottom);
        m[10] = -2.0 / (far - near);
        m[12] = -(right + left) / (right - left);
        m[13] = -(top + bottom) / (top - bottom);
        m[14] = -(far + near) / (far - near);
        m[15] = 1.0;
        Mat4 { m }
    }

    pub fn from_translation(v: Vec2) -> Mat4 {
        let mut out = Mat4::IDENTITY;
        out.m[12] = v.x;
        out.m[13] = v.y;
        out
    }

    /// Rotation by `angle` radians about +Z (counter-clockwise in a Y-up plane).
    pub fn from_rotation_z(angle: f32) -> Mat4 {
        let (s, c) = angle.sin_cos();
        let mut out = Mat4::IDENTITY;
        out.m[0] = c;
        out.m[1] = s;
        out.m[4] = -s;
        out.m[5] = c;
        out
    }

    pub fn from_scale(v: Vec2) -> Mat4 {
        let mut out = Mat4::IDENTITY;
        out.m[0] = v.x;
        out.m[5] = v.y;
        out
    }

    /// Transforms a point in the Z=0 plane (w assumed 1).
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.m[0] * p.x + self.m[4] * p.y + self.m[12],
            self.m[1] * p.x + self.m[5] * p.y + self.m[13],
        )
    }

    /// Column-major element slice for GL uniform upload.
    #[inline]
    pub fn as_slice(&self) -> &[f32; 16] {
        &self.m
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut m = [0.0; 16];
        for c in 0..4 {
            for r in 0..4 {
                let mut acc = 0.0;
                for k in 0..4 {
                    acc += self.m[k * 4 + r] * rhs.m[c * 4 + k];
                }
                m[c * 4 + r] = acc;
            }
        }
        Mat4 { m }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    fn assert_vec2_eq(actual: Vec2, expected: Vec2) {
        assert!(
            (actual.x - expected.x).abs() < EPS && (actual.y - expected.y).abs() < EPS,
            "expected {expected:?}, got {actual:?}"
        );
    }

    // ── basic transforms ──────────────────────────────────────────────────

    #[test]
    fn identity_leaves_points_unchanged() {
        assert_vec2_eq(
            Mat4::IDENTITY.transform_point(Vec2::new(3.0, -7.5)),
            Vec2::new(3.0, -7.5),
        );
    }

    #[test]
    fn translation_offsets_points() {
        let t = Mat4::from_translation(Vec2::new(10.0, 5.0));
        assert_vec2_eq(t.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(11.0, 6.0));
    }

    #[test]
    fn rotation_quarter_turn_ccw() {
        let r = Mat4::from_rotation_z(FRAC_PI_2);
        assert_vec2_eq(r.transform_point(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn scale_stretches_axes_independently() {
        let s = Mat4::from_scale(Vec2::new(2.0, 3.0));
        assert_vec2_eq(s.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(2.0, 3.0));
    }

    // ── composition ───────────────────────────────────────────────────────

    #[test]
    fn product_applies_right_factor_first() {
        let t = Mat4::from_translation(Vec2::new(10.0, 0.0));
        let s = Mat4::from_scale(Vec2::splat(2.0));
        let p = Vec2::new(1.0, 1.0);

        // (t * s) p  ==  t (s p)
        assert_vec2_eq(
            (t * s).transform_point(p),
            t.transform_point(s.transform_point(p)),
        );
        assert_vec2_eq((t * s).transform_point(p), Vec2::new(12.0, 2.0));
    }

    // ── ortho ─────────────────────────────────────────────────────────────

    #[test]
    fn ortho_maps_window_corners_to_ndc() {
        let proj = Mat4::ortho(0.0, 800.0, 0.0, 600.0, -1.0, 1.0);
        assert_vec2_eq(proj.transform_point(Vec2::zero()), Vec2::new(-1.0, -1.0));
        assert_vec2_eq(
            proj.transform_point(Vec2::new(800.0, 600.0)),
            Vec2::new(1.0, 1.0),
        );
        assert_vec2_eq(
            proj.transform_point(Vec2::new(400.0, 300.0)),
            Vec2::zero(),
        );
    }
}
