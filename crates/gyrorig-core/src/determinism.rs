#[derive(Copy, Clone, Debug)]
pub struct DeterminismContract {
    pub fixed_dt: f32,
    pub max_dt: f32,
    pub float: &'static str,
    /// Gimbal wobble amplitude is a fixed per-call delta, not dt-scaled.
    pub per_call_wobble: bool,
}

impl DeterminismContract {
    pub fn default_contract() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_dt: crate::MAX_DT,
            float: "f32",
            per_call_wobble: true,
        }
    }
}
