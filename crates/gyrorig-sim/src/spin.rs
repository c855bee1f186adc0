use glam::Quat;
use gyrorig_core::{Scalar, Vec3};

use crate::config::SpinDirection;

/// RPM -> rad/s: 2π rad per revolution over 60 s.
pub const RPM_TO_RAD_PER_SEC: Scalar = std::f32::consts::PI / 30.0;

/// One frame's rotation of the wheel: a single axis-angle increment to
/// compose onto the body's current orientation. The caller applies it; this
/// module only computes it.
#[derive(Copy, Clone, Debug)]
pub struct SpinIncrement {
    pub axis: Vec3,
    pub angle: Scalar,
}

impl SpinIncrement {
    pub const IDENTITY: SpinIncrement = SpinIncrement { axis: Vec3::Y, angle: 0.0 };

    #[inline]
    pub fn to_quat(self) -> Quat {
        if self.angle == 0.0 { return Quat::IDENTITY; }
        Quat::from_axis_angle(self.axis, self.angle)
    }
}

/// Frame-rate-independent spin increment: `angle = rpm * dir * dt * π/30`.
///
/// One rotation about the single selected axis, not independent per-axis
/// Euler increments: those don't commute and drift when the selection
/// changes mid-run. A degenerate (zero) axis yields the identity increment
/// instead of a NaN from normalizing a zero vector.
pub fn spin_increment(
    rpm: Scalar,
    dir: SpinDirection,
    axis: Vec3,
    dt: Scalar,
) -> SpinIncrement {
    let axis = axis.normalize_or_zero();
    if axis == Vec3::ZERO {
        return SpinIncrement::IDENTITY;
    }
    let angle = rpm * dir.signum() * dt * RPM_TO_RAD_PER_SEC;
    SpinIncrement { axis, angle }
}
