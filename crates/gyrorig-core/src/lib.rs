pub mod scalar;
pub mod bodies;
pub mod types;
pub mod hash;
pub mod clock;
pub mod determinism;
pub mod schedule;

pub use scalar::Scalar;
pub use bodies::RigBody;
pub use types::{Vec3, Orientation, vec3, quat_identity};
pub use hash::{StepHasher, hash_vec3, hash_quat, hex32};
pub use clock::{FrameClock, MAX_DT};
pub use determinism::DeterminismContract;
pub use schedule::{StepStage, stage_digest};
pub use glam::Quat;
