mod harness;
pub use harness::{InputEvent, Inputs, SimRig, StepReport};

use gyrorig_core::{
    hash_quat, FrameClock, Orientation, RigBody, Scalar, StepHasher, StepStage,
};
use gyrorig_sim::{
    angular_vector, spin_increment, AngularVector, ConfigurationState, GimbalWobble,
};
use gyrorig_viz::{DebugSettings, Ledger, LedgerEvent, StageRecorder};

/// The gyroscope rig: a spinning wheel inside two nested gimbal rings.
///
/// Owns the three body orientations and the live configuration. The render
/// loop feeds it one `FrameClock` per displayed frame; UI events arrive as
/// queued `Inputs` applied strictly before the next step reads the
/// configuration. Orientations are published read-only to the renderer and
/// never read back; integration is open-loop.
pub struct GyroRig {
    config: ConfigurationState,
    wobble: GimbalWobble,
    bodies: [Orientation; 3],
    tick: u64,
    stages: StageRecorder,
    ledger: Ledger,
    debug: DebugSettings,
    inputs_seen: bool,
}

impl Default for GyroRig {
    fn default() -> Self { Self::new() }
}

impl GyroRig {
    pub fn new() -> Self {
        Self {
            config: ConfigurationState::default(),
            wobble: GimbalWobble::default(),
            bodies: [Orientation::default(); 3],
            tick: 0,
            stages: StageRecorder::new(),
            ledger: Ledger::new(64),
            debug: DebugSettings::default(),
            inputs_seen: false,
        }
    }

    pub fn with_wobble(wobble: GimbalWobble) -> Self {
        Self { wobble, ..Self::new() }
    }

    /* ---------- read-only surface for viewers ---------- */
    #[inline] pub fn tick_index(&self) -> u64 { self.tick }
    #[inline] pub fn config(&self) -> &ConfigurationState { &self.config }
    #[inline] pub fn wobble(&self) -> &GimbalWobble { &self.wobble }
    #[inline] pub fn body_orientation(&self, body: RigBody) -> Orientation {
        self.bodies[body.index()]
    }
    pub fn ledger(&self) -> &Ledger { &self.ledger }
    pub fn set_debug(&mut self, cfg: DebugSettings) { self.debug = cfg; }

    /// Mutable configuration access for direct (non-queued) UI wiring.
    pub fn config_mut(&mut self) -> &mut ConfigurationState { &mut self.config }

    /// Display vector for the angular-momentum arrow, derived on demand.
    pub fn angular_vector(&self) -> AngularVector {
        angular_vector(self.config.spin_axis().unit(), self.config.spin_rate_rpm())
    }

    /* ---------- step ---------- */
    pub fn step(&mut self, clock: FrameClock) -> StepReport {
        self.stages.clear();
        self.ledger.clear();
        self.tick = self.tick.wrapping_add(1);

        // Input events that landed since the last step show up in the stage
        // digest, so traces with different input timing hash differently.
        if self.inputs_seen {
            self.stages.push(StepStage::ApplyInputs);
            self.inputs_seen = false;
        }

        if clock.is_noop() {
            // Bad time input: zero rotation, zero perturbation, state intact.
            self.ledger.push(LedgerEvent::NoopFrame { tick: self.tick });
            return self.report(0.0, 0.0, 0.0, 0.0);
        }

        // Wheel spin: one axis-angle increment composed in the local frame.
        self.stages.push(StepStage::IntegrateSpin);
        let inc = spin_increment(
            self.config.spin_rate_rpm(),
            self.config.spin_direction(),
            self.config.spin_axis().unit(),
            clock.dt(),
        );
        self.bodies[RigBody::Wheel.index()].compose_local(inc.to_quat());
        self.ledger.push(LedgerEvent::SpinIncrement {
            axis: inc.axis.to_array(),
            angle: inc.angle,
        });

        // Gimbal wobble: time-based offsets about the fixed hinge axes.
        self.stages.push(StepStage::PerturbGimbals);
        let off = self.wobble.angles(clock.elapsed(), self.config.gimbal_locked());
        let dq_outer = glam::Quat::from_axis_angle(self.wobble.outer_axis, off.outer);
        let dq_inner = glam::Quat::from_axis_angle(self.wobble.inner_axis, off.inner);
        self.bodies[RigBody::OuterRing.index()].compose_local(dq_outer);
        self.bodies[RigBody::InnerRing.index()].compose_local(dq_inner);
        self.ledger.push(LedgerEvent::GimbalOffset {
            body: RigBody::OuterRing.to_string(),
            angle: off.outer,
        });
        self.ledger.push(LedgerEvent::GimbalOffset {
            body: RigBody::InnerRing.to_string(),
            angle: off.inner,
        });

        if self.debug.print_every != 0 && (self.tick as u32) % self.debug.print_every == 0 {
            self.print_debug_block();
        }
        if self.debug.json_every != 0 && (self.tick as u32) % self.debug.json_every == 0 {
            let _ = self.ledger.write_jsonl("out", self.tick);
        }

        self.report(clock.dt(), inc.angle, off.outer, off.inner)
    }

    fn report(&self, dt: Scalar, spin: Scalar, outer: Scalar, inner: Scalar) -> StepReport {
        StepReport {
            dt,
            tick: self.tick,
            hash: self.step_hash(),
            spin_angle: spin,
            outer_angle: outer,
            inner_angle: inner,
        }
    }

    /// Deterministic digest of tick, configuration, stage order and the
    /// three orientations. Equal traces hash equal.
    pub fn step_hash(&self) -> [u8; 32] {
        let mut h = StepHasher::new();
        h.update_bytes(&self.tick.to_le_bytes());
        h.update_bytes(&self.config.spin_rate_rpm().to_le_bytes());
        h.update_bytes(&[
            (self.config.spin_direction() as i8) as u8,
            self.config.spin_axis() as u8,
            self.config.gimbal_locked() as u8,
        ]);
        h.update_bytes(&self.wobble.params_id().to_le_bytes());
        h.update_bytes(&self.stages.digest());
        for body in RigBody::ALL {
            h.update_bytes(&[body as u8]);
            hash_quat(&mut h, &self.bodies[body.index()].rot);
        }
        h.finalize()
    }

    /* ---------- debug printer ---------- */
    fn print_debug_block(&self) {
        println!("--- debug @ tick {} ---", self.tick);
        if self.debug.show_config {
            println!(
                "config: rpm={:.1} dir={:+} axis={:?} locked={}",
                self.config.spin_rate_rpm(),
                self.config.spin_direction() as i8,
                self.config.spin_axis(),
                self.config.gimbal_locked(),
            );
        }
        if self.debug.show_bodies {
            let mut lines = 0usize;
            for body in RigBody::ALL {
                let q = self.bodies[body.index()].rot;
                println!(
                    "{:<10}  q=({:+.4},{:+.4},{:+.4},{:+.4})",
                    body.to_string(), q.x, q.y, q.z, q.w
                );
                lines += 1;
                if lines >= self.debug.max_lines { break; }
            }
        }
    }
}

/* ---------- glue: adapt GyroRig to the harness surface ---------- */
impl SimRig for GyroRig {
    fn step_clock(&mut self, clock: FrameClock) -> StepReport {
        self.step(clock)
    }

    fn step_hash(&self) -> [u8; 32] { self.step_hash() }

    fn apply_inputs(&mut self, inputs: &Inputs) {
        if !inputs.events.is_empty() {
            self.inputs_seen = true;
        }
        for ev in &inputs.events {
            match *ev {
                InputEvent::SetSpinRate { rpm } => self.config.set_spin_rate(rpm),
                InputEvent::SetSpinDirection { dir } => self.config.set_spin_direction(dir),
                InputEvent::SelectAxis { axis } => self.config.select_axis(axis),
                InputEvent::SetGimbalLock { locked } => self.config.set_gimbal_lock(locked),
            }
            self.ledger.push(LedgerEvent::InputApplied {
                tick: self.tick,
                what: format!("{ev:?}"),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gyrorig_core::Vec3;
    use gyrorig_sim::{SpinAxis, SpinDirection};
    use std::f32::consts::PI;

    const DT: Scalar = 1.0 / 60.0;

    fn run(rig: &mut GyroRig, frames: u32, dt: Scalar) -> StepReport {
        let mut t = 0.0;
        let mut last = StepReport::default();
        for _ in 0..frames {
            t += dt;
            last = rig.step(FrameClock::new(t, dt));
        }
        last
    }

    #[test] fn default_step_advances_wheel_by_pi_over_30() {
        let mut rig = GyroRig::new();
        let r = rig.step(FrameClock::new(DT, DT));
        assert!((r.spin_angle - PI / 30.0).abs() < 1e-6);
    }

    #[test] fn one_second_at_sixty_rpm_is_one_revolution() {
        let mut rig = GyroRig::new();
        run(&mut rig, 60, DT);
        let probe = rig.body_orientation(RigBody::Wheel).transform(Vec3::X);
        assert!((probe - Vec3::X).length() < 2e-3);
    }

    #[test] fn reversed_direction_mirrors_the_wheel() {
        let mut fwd = GyroRig::new();
        let mut rev = GyroRig::new();
        rev.config_mut().set_spin_direction(SpinDirection::Reverse);
        let rf = run(&mut fwd, 10, DT);
        let rr = run(&mut rev, 10, DT);
        assert!((rf.spin_angle + rr.spin_angle).abs() < 1e-6);
        // z components of the probes mirror across the spin plane
        let pf = fwd.body_orientation(RigBody::Wheel).transform(Vec3::X);
        let pr = rev.body_orientation(RigBody::Wheel).transform(Vec3::X);
        assert!((pf.x - pr.x).abs() < 1e-5);
        assert!((pf.z + pr.z).abs() < 1e-5);
    }

    #[test] fn locked_gimbals_never_move() {
        let mut rig = GyroRig::new();
        rig.config_mut().set_gimbal_lock(true);
        let before_outer = rig.body_orientation(RigBody::OuterRing).rot;
        let before_inner = rig.body_orientation(RigBody::InnerRing).rot;
        run(&mut rig, 240, DT);
        assert_eq!(rig.body_orientation(RigBody::OuterRing).rot, before_outer);
        assert_eq!(rig.body_orientation(RigBody::InnerRing).rot, before_inner);
    }

    #[test] fn lock_freezes_rings_where_they_are() {
        // run unlocked for a while, lock, keep stepping: the rings hold the
        // orientation they had at the locking moment.
        let mut rig = GyroRig::new();
        run(&mut rig, 90, DT);
        rig.config_mut().set_gimbal_lock(true);
        let frozen = rig.body_orientation(RigBody::OuterRing).rot;
        run(&mut rig, 90, DT);
        assert_eq!(rig.body_orientation(RigBody::OuterRing).rot, frozen);
    }

    #[test] fn noop_clock_leaves_state_untouched() {
        let mut rig = GyroRig::new();
        run(&mut rig, 5, DT);
        let wheel = rig.body_orientation(RigBody::Wheel).rot;
        let outer = rig.body_orientation(RigBody::OuterRing).rot;
        let r = rig.step(FrameClock::new(f32::NAN, DT));
        assert_eq!(r.spin_angle, 0.0);
        assert_eq!(rig.body_orientation(RigBody::Wheel).rot, wheel);
        assert_eq!(rig.body_orientation(RigBody::OuterRing).rot, outer);
    }

    #[test] fn queued_inputs_land_before_the_next_step() {
        let mut rig = GyroRig::new();
        let mut inputs = Inputs::default();
        inputs.push(InputEvent::SetSpinRate { rpm: 120.0 });
        inputs.push(InputEvent::SelectAxis { axis: SpinAxis::Z });
        rig.apply_inputs(&inputs);
        assert_eq!(rig.config().spin_rate_rpm(), 120.0);
        assert_eq!(rig.config().spin_axis(), SpinAxis::Z);
        let r = rig.step(FrameClock::new(DT, DT));
        assert!((r.spin_angle - 120.0 * DT * PI / 30.0).abs() < 1e-6);
    }

    #[test] fn out_of_range_input_is_clamped_at_the_boundary() {
        let mut rig = GyroRig::new();
        let mut inputs = Inputs::default();
        inputs.push(InputEvent::SetSpinRate { rpm: 9000.0 });
        rig.apply_inputs(&inputs);
        assert_eq!(rig.config().spin_rate_rpm(), 300.0);
    }

    #[test] fn identical_traces_hash_identically() {
        let mut a = GyroRig::new();
        let mut b = GyroRig::new();
        let ra = run(&mut a, 30, DT);
        let rb = run(&mut b, 30, DT);
        assert_eq!(ra.hash, rb.hash);

        let mut c = GyroRig::new();
        c.config_mut().set_spin_rate(90.0);
        let rc = run(&mut c, 30, DT);
        assert_ne!(ra.hash, rc.hash);
    }

    #[test] fn indicator_tracks_configuration() {
        let mut rig = GyroRig::new();
        let v = rig.angular_vector();
        assert_eq!(v.dir, Vec3::Y);
        rig.config_mut().select_axis(SpinAxis::X);
        rig.config_mut().set_spin_rate(0.0);
        let v0 = rig.angular_vector();
        assert_eq!(v0.dir, Vec3::X);
        rig.config_mut().set_spin_rate(300.0);
        assert!(rig.angular_vector().magnitude > v0.magnitude);
    }

    #[test] fn ledger_records_the_frame() {
        let mut rig = GyroRig::new();
        rig.step(FrameClock::new(DT, DT));
        assert_eq!(rig.ledger().len(), 3); // spin + two gimbal offsets
    }

    #[test] fn zero_amplitude_wobble_keeps_rings_still() {
        let mut rig = GyroRig::with_wobble(GimbalWobble {
            amplitude: 0.0,
            ..GimbalWobble::default()
        });
        assert_eq!(rig.wobble().amplitude, 0.0);
        run(&mut rig, 120, DT);
        assert_eq!(rig.body_orientation(RigBody::OuterRing).rot, glam::Quat::IDENTITY);
        assert_eq!(rig.body_orientation(RigBody::InnerRing).rot, glam::Quat::IDENTITY);
    }

    #[test] fn axis_switch_mid_run_does_not_poison_orientation() {
        let mut rig = GyroRig::new();
        run(&mut rig, 20, DT);
        rig.config_mut().select_axis(SpinAxis::X);
        run(&mut rig, 20, DT);
        rig.config_mut().select_axis(SpinAxis::Z);
        let r = run(&mut rig, 20, DT);
        let q = rig.body_orientation(RigBody::Wheel).rot;
        assert!(q.is_finite());
        assert!((q.length() - 1.0).abs() < 1e-4);
        assert!(r.spin_angle.is_finite());
    }
}
