use glam::Quat;
use gyrorig_core::{Scalar, StepHasher, Vec3};

/// Decorative free-rotation wobble for the two gimbal rings. Not precession
/// physics: a bounded oscillation keyed to absolute elapsed time so the rig
/// never looks frozen while unlocked. Evaluating at the same elapsed time
/// from any frame-rate history yields the same instantaneous offsets.
#[derive(Copy, Clone, Debug)]
pub struct GimbalWobble {
    /// Phase rate of the outer ring oscillation (rad/s of elapsed time).
    pub outer_rate: Scalar,
    /// Phase rate of the inner ring oscillation.
    pub inner_rate: Scalar,
    /// Per-call offset amplitude in radians. Fixed per call, NOT scaled by
    /// dt; bounded regardless of frame rate.
    pub amplitude: Scalar,
    /// Hinge axis of the outer ring in its local frame.
    pub outer_axis: Vec3,
    /// Hinge axis of the inner ring in its local frame.
    pub inner_axis: Vec3,
}

impl Default for GimbalWobble {
    fn default() -> Self {
        Self {
            outer_rate: 0.5,
            inner_rate: 0.3,
            amplitude: 0.001,
            outer_axis: Vec3::Z,
            inner_axis: Vec3::X,
        }
    }
}

/// Instantaneous offset angles for one call, radians.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GimbalOffsets {
    pub outer: Scalar,
    pub inner: Scalar,
}

impl GimbalOffsets {
    pub const IDENTITY: GimbalOffsets = GimbalOffsets { outer: 0.0, inner: 0.0 };
}

impl GimbalWobble {
    /// Offset angles at `elapsed`. Locked rings freeze where they are: the
    /// result is exactly identity, idempotent over any call sequence, never
    /// a drift while frozen. A non-finite elapsed degrades to identity too.
    pub fn angles(&self, elapsed: Scalar, locked: bool) -> GimbalOffsets {
        if locked || !elapsed.is_finite() {
            return GimbalOffsets::IDENTITY;
        }
        GimbalOffsets {
            outer: (elapsed * self.outer_rate).sin() * self.amplitude,
            inner: (elapsed * self.inner_rate).cos() * self.amplitude,
        }
    }

    /// Same as `angles`, as ready-to-compose rotations about the fixed
    /// local hinge axes.
    pub fn deltas(&self, elapsed: Scalar, locked: bool) -> (Quat, Quat) {
        let off = self.angles(elapsed, locked);
        (
            Quat::from_axis_angle(self.outer_axis, off.outer),
            Quat::from_axis_angle(self.inner_axis, off.inner),
        )
    }

    /// Deterministic 64-bit id of the wobble parameters, for trace headers.
    pub fn params_id(&self) -> u64 {
        let mut h = StepHasher::new();
        for f in [self.outer_rate, self.inner_rate, self.amplitude] {
            h.update_bytes(&f.to_le_bytes());
        }
        for v in [self.outer_axis, self.inner_axis] {
            for c in [v.x, v.y, v.z] { h.update_bytes(&c.to_le_bytes()); }
        }
        let b = h.finalize();
        u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]])
    }
}
