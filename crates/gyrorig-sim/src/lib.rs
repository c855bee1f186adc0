pub mod config;
pub mod spin;
pub mod gimbal;
pub mod indicator;

pub use config::{ConfigurationState, SpinAxis, SpinDirection, RPM_MAX};
pub use spin::{SpinIncrement, spin_increment, RPM_TO_RAD_PER_SEC};
pub use gimbal::{GimbalWobble, GimbalOffsets};
pub use indicator::{AngularVector, angular_vector};
