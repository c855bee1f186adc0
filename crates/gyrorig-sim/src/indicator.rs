use gyrorig_core::{Scalar, Vec3};

/// Minimum arrow length so the indicator stays visible at 0 RPM.
const BASE_LENGTH: Scalar = 0.5;
/// Extra length per RPM; 60 RPM draws a 1.5-unit arrow.
const LENGTH_PER_RPM: Scalar = 1.0 / 60.0;

/// Derived, ephemeral display vector for the angular-momentum arrow.
/// Recomputed on demand from configuration; never fed back into the
/// integrator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AngularVector {
    pub dir: Vec3,
    pub magnitude: Scalar,
}

/// Direction = normalized axis, magnitude = monotone function of the spin
/// rate. A zero axis degenerates to a zero vector with zero magnitude.
pub fn angular_vector(axis: Vec3, rpm: Scalar) -> AngularVector {
    let dir = axis.normalize_or_zero();
    if dir == Vec3::ZERO {
        return AngularVector { dir: Vec3::ZERO, magnitude: 0.0 };
    }
    AngularVector { dir, magnitude: BASE_LENGTH + rpm * LENGTH_PER_RPM }
}
