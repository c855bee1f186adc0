use gyrorig_core::{FrameClock, Scalar};
use gyrorig_sim::{SpinAxis, SpinDirection};

/// What a driver harness expects from any steppable rig.
pub trait SimRig {
    fn step_clock(&mut self, clock: FrameClock) -> StepReport;
    fn step_hash(&self) -> [u8; 32];
    fn apply_inputs(&mut self, inputs: &Inputs);
}

/// Minimal per-step report used for provenance and checks.
#[derive(Clone, Copy, Default)]
pub struct StepReport {
    pub dt: Scalar,
    pub tick: u64,
    pub hash: [u8; 32],
    pub spin_angle: Scalar,
    pub outer_angle: Scalar,
    pub inner_angle: Scalar,
}

/// UI commands, one tag per configuration setter. Queued by the event
/// handlers and drained strictly between frames, so a step never reads a
/// half-applied configuration.
#[derive(Clone, Copy, Debug)]
pub enum InputEvent {
    SetSpinRate { rpm: Scalar },
    SetSpinDirection { dir: SpinDirection },
    SelectAxis { axis: SpinAxis },
    SetGimbalLock { locked: bool },
}

#[derive(Clone, Default)]
pub struct Inputs {
    pub tick_index: u32,
    pub events: Vec<InputEvent>,
}

impl Inputs {
    pub fn push(&mut self, ev: InputEvent) { self.events.push(ev); }
    pub fn clear(&mut self) { self.events.clear(); }
    pub fn is_empty(&self) -> bool { self.events.is_empty() }
}
