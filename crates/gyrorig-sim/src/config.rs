use gyrorig_core::{Scalar, Vec3};

pub const RPM_MAX: Scalar = 300.0;

/// Sense of rotation about the selected axis. Only the two legal values are
/// representable.
#[repr(i8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SpinDirection { Forward = 1, Reverse = -1 }

impl SpinDirection {
    #[inline] pub fn signum(self) -> Scalar { self as i8 as Scalar }
    #[inline] pub fn flipped(self) -> Self {
        match self {
            SpinDirection::Forward => SpinDirection::Reverse,
            SpinDirection::Reverse => SpinDirection::Forward,
        }
    }
}

/// The wheel spins about exactly one basis axis, never an arbitrary
/// direction. Selecting an axis replaces the prior selection atomically; the
/// one-hot invariant holds by construction.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SpinAxis { X = 0, Y = 1, Z = 2 }

impl SpinAxis {
    /// One-hot basis vector for the selection.
    #[inline]
    pub fn unit(self) -> Vec3 {
        match self {
            SpinAxis::X => Vec3::X,
            SpinAxis::Y => Vec3::Y,
            SpinAxis::Z => Vec3::Z,
        }
    }
}

/// User-controlled simulation parameters. Written only through the setters
/// below (UI events land here between frames); read by the integration step
/// at the start of each frame. Out-of-range values are clamped at this
/// boundary and never reach the integrator.
#[derive(Copy, Clone, Debug)]
pub struct ConfigurationState {
    spin_rate_rpm: Scalar,
    spin_direction: SpinDirection,
    spin_axis: SpinAxis,
    gimbal_locked: bool,
}

impl Default for ConfigurationState {
    fn default() -> Self {
        Self {
            spin_rate_rpm: 60.0,
            spin_direction: SpinDirection::Forward,
            spin_axis: SpinAxis::Y,
            gimbal_locked: false,
        }
    }
}

impl ConfigurationState {
    pub fn new() -> Self { Self::default() }

    #[inline] pub fn spin_rate_rpm(&self) -> Scalar { self.spin_rate_rpm }
    #[inline] pub fn spin_direction(&self) -> SpinDirection { self.spin_direction }
    #[inline] pub fn spin_axis(&self) -> SpinAxis { self.spin_axis }
    #[inline] pub fn gimbal_locked(&self) -> bool { self.gimbal_locked }

    /// Clamp to [0, RPM_MAX]. A non-finite rate is dropped outright; NaN
    /// would survive `clamp` and poison every later frame.
    pub fn set_spin_rate(&mut self, rpm: Scalar) {
        if !rpm.is_finite() { return; }
        self.spin_rate_rpm = rpm.clamp(0.0, RPM_MAX);
    }

    pub fn set_spin_direction(&mut self, dir: SpinDirection) {
        self.spin_direction = dir;
    }

    pub fn select_axis(&mut self, axis: SpinAxis) {
        self.spin_axis = axis;
    }

    pub fn set_gimbal_lock(&mut self, locked: bool) {
        self.gimbal_locked = locked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn defaults() {
        let c = ConfigurationState::new();
        assert_eq!(c.spin_rate_rpm(), 60.0);
        assert_eq!(c.spin_direction(), SpinDirection::Forward);
        assert_eq!(c.spin_axis(), SpinAxis::Y);
        assert!(!c.gimbal_locked());
    }

    #[test] fn rate_clamps_at_boundary() {
        let mut c = ConfigurationState::new();
        c.set_spin_rate(500.0);
        assert_eq!(c.spin_rate_rpm(), RPM_MAX);
        c.set_spin_rate(-20.0);
        assert_eq!(c.spin_rate_rpm(), 0.0);
        c.set_spin_rate(f32::NAN);
        assert_eq!(c.spin_rate_rpm(), 0.0); // last good value kept
    }

    #[test] fn axis_selection_stays_one_hot() {
        let mut c = ConfigurationState::new();
        for axis in [SpinAxis::X, SpinAxis::Y, SpinAxis::Z] {
            c.select_axis(axis);
            let v = c.spin_axis().unit();
            let sum = v.x + v.y + v.z;
            assert_eq!(sum, 1.0);
            assert_eq!(v.max_element(), 1.0);
            assert_eq!(v.min_element(), 0.0);
        }
    }

    #[test] fn direction_flip_round_trips() {
        assert_eq!(SpinDirection::Forward.signum(), 1.0);
        assert_eq!(SpinDirection::Reverse.signum(), -1.0);
        assert_eq!(SpinDirection::Forward.flipped().flipped(), SpinDirection::Forward);
    }
}
