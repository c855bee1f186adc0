use crate::Scalar;

/// Hard cap on a single frame's delta time. A process that was suspended and
/// resumed hands the loop a huge dt; clamping bounds the worst single-frame
/// rotation to a 15 Hz step.
pub const MAX_DT: Scalar = 1.0 / 15.0;

/// Per-frame clock handed in by the render loop: seconds since simulation
/// start plus seconds since the previous frame. Sanitized at construction so
/// the integrators never see a negative, NaN or runaway value.
#[derive(Copy, Clone, Debug, Default)]
pub struct FrameClock {
    elapsed: Scalar,
    dt: Scalar,
    noop: bool,
}

impl FrameClock {
    pub fn new(elapsed: Scalar, dt: Scalar) -> Self {
        if !elapsed.is_finite() || !dt.is_finite() || elapsed < 0.0 || dt < 0.0 {
            return Self { elapsed: 0.0, dt: 0.0, noop: true };
        }
        Self { elapsed, dt: dt.min(MAX_DT), noop: false }
    }

    #[inline] pub fn elapsed(&self) -> Scalar { self.elapsed }
    #[inline] pub fn dt(&self) -> Scalar { self.dt }

    /// True when the inputs were unusable; the whole frame must apply zero
    /// rotation and zero perturbation rather than poison orientation state.
    #[inline] pub fn is_noop(&self) -> bool { self.noop }
}
