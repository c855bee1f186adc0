use gyrorig_core::{hex32, FrameClock, RigBody};
use gyrorig_rig::GyroRig;
use gyrorig_sim::SpinAxis;

fn main() {
    let mut rig = GyroRig::new();
    rig.config_mut().set_spin_rate(120.0);
    rig.config_mut().select_axis(SpinAxis::Z);

    let dt = 1.0 / 60.0;
    let mut t = 0.0;
    for step in 0..60 {
        t += dt;
        let report = rig.step(FrameClock::new(t, dt));
        if step % 15 == 0 {
            println!(
                "step {step:02}  spin={:+.5} rad  hash={}",
                report.spin_angle,
                hex32(report.hash)
            );
        }
    }

    let wheel = rig.body_orientation(RigBody::Wheel).rot;
    println!("wheel after 1 s: ({:+.4}, {:+.4}, {:+.4}, {:+.4})", wheel.x, wheel.y, wheel.z, wheel.w);
    let v = rig.angular_vector();
    println!("indicator: dir=({}, {}, {}) len={:.2}", v.dir.x, v.dir.y, v.dir.z, v.magnitude);
}
