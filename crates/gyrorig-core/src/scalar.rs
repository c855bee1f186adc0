/// Simulation scalar. f32 everywhere; the determinism contract depends on it.
pub type Scalar = f32;
