use glam::Quat;
use crate::Scalar;

pub type Vec3 = glam::Vec3;

#[inline] pub fn vec3(x: Scalar, y: Scalar, z: Scalar) -> Vec3 { Vec3::new(x, y, z) }
#[inline] pub fn quat_identity() -> Quat { Quat::IDENTITY }

/// Rotation state of one rig body. Identity at scene construction; the rig
/// composes one increment onto it per frame and the renderer only reads it.
#[derive(Copy, Clone, Debug)]
pub struct Orientation { pub rot: Quat }

impl Default for Orientation {
    fn default() -> Self { Self { rot: Quat::IDENTITY } }
}

impl Orientation {
    /// Compose `dq` in the body's local frame (post-multiply) and renormalize.
    /// Local-frame composition keeps the spin well-defined when the selected
    /// axis changes mid-run; per-axis Euler increments would not. An identity
    /// delta leaves the stored bits untouched, so a locked body cannot drift
    /// through repeated renormalization.
    #[inline]
    pub fn compose_local(&mut self, dq: Quat) {
        if dq == Quat::IDENTITY { return; }
        self.rot = (self.rot * dq).normalize();
    }

    /// World-frame direction of a body-local vector.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 { self.rot * v }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test] fn starts_at_identity() {
        let o = Orientation::default();
        assert_eq!(o.rot, quat_identity());
        assert_eq!(o.transform(vec3(1.0, 0.0, 0.0)), Vec3::X);
    }

    #[test] fn identity_delta_does_not_touch_the_bits() {
        let mut o = Orientation::default();
        o.compose_local(Quat::from_axis_angle(Vec3::Y, 0.37));
        let before = o.rot;
        for _ in 0..1000 { o.compose_local(Quat::IDENTITY); }
        assert_eq!(o.rot, before);
    }

    #[test] fn quarter_turns_compose_in_the_local_frame() {
        let mut o = Orientation::default();
        o.compose_local(Quat::from_axis_angle(Vec3::Y, FRAC_PI_2));
        o.compose_local(Quat::from_axis_angle(Vec3::Y, FRAC_PI_2));
        // half a turn about Y sends +X to -X
        let p = o.transform(Vec3::X);
        assert!((p - (-Vec3::X)).length() < 1e-6);
    }
}
