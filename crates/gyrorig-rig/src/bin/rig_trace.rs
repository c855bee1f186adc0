use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;

use gyrorig_core::{hex32, DeterminismContract, FrameClock};
use gyrorig_rig::{GyroRig, InputEvent, Inputs, SimRig};
use gyrorig_sim::{SpinAxis, SpinDirection};

#[derive(Parser, Debug)]
#[command(name = "rig_trace", version, about = "Step a gyro rig headless at a fixed rate and print the final state hash")]
struct Opts {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Fixed step rate in Hz
    #[arg(long, default_value_t = 60)]
    hz: u32,

    /// Spin rate override, RPM (clamped to [0, 300])
    #[arg(long)]
    rpm: Option<f32>,

    /// Spin axis override: x, y or z
    #[arg(long)]
    axis: Option<String>,

    /// Reverse the spin direction
    #[arg(long)]
    reverse: bool,

    /// Lock the gimbal rings
    #[arg(long)]
    locked: bool,

    /// Write per-frame ledger JSONL into this directory
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print a per-frame report line every N frames (0 = never)
    #[arg(long, default_value_t = 0)]
    print_every: u32,
}

fn parse_axis(s: &str) -> Result<SpinAxis> {
    match s.to_ascii_lowercase().as_str() {
        "x" => Ok(SpinAxis::X),
        "y" => Ok(SpinAxis::Y),
        "z" => Ok(SpinAxis::Z),
        other => Err(anyhow!("unknown axis {other:?}; expected x, y or z")),
    }
}

fn main() -> Result<()> {
    let opt = Opts::parse();
    let hz = opt.hz.max(1);
    let dt = 1.0 / hz as f32;

    let contract = DeterminismContract::default_contract();
    if dt > contract.max_dt {
        return Err(anyhow!(
            "step rate {hz} Hz exceeds the {:.4} s frame-dt cap",
            contract.max_dt
        ));
    }
    println!(
        "contract: float={} max_dt={:.4} per_call_wobble={}",
        contract.float, contract.max_dt, contract.per_call_wobble
    );

    let mut rig = GyroRig::new();

    // Overrides go through the same input path the UI uses.
    let mut inputs = Inputs::default();
    if let Some(rpm) = opt.rpm {
        inputs.push(InputEvent::SetSpinRate { rpm });
    }
    if let Some(axis) = &opt.axis {
        inputs.push(InputEvent::SelectAxis { axis: parse_axis(axis)? });
    }
    if opt.reverse {
        inputs.push(InputEvent::SetSpinDirection { dir: SpinDirection::Reverse });
    }
    if opt.locked {
        inputs.push(InputEvent::SetGimbalLock { locked: true });
    }
    rig.apply_inputs(&inputs);

    let mut elapsed = 0.0f32;
    let mut last_hash = rig.step_hash();
    for frame in 0..opt.frames {
        elapsed += dt;
        let report = rig.step(FrameClock::new(elapsed, dt));
        last_hash = report.hash;

        if let Some(dir) = &opt.out {
            rig.ledger().write_jsonl(dir, report.tick)?;
        }
        if opt.print_every != 0 && frame % opt.print_every == 0 {
            println!(
                "frame {frame:06}  spin={:+.6}  outer={:+.6e}  inner={:+.6e}",
                report.spin_angle, report.outer_angle, report.inner_angle
            );
        }
    }

    println!(
        "{} frames @ {hz} Hz  rpm={:.1} axis={:?} locked={}",
        opt.frames,
        rig.config().spin_rate_rpm(),
        rig.config().spin_axis(),
        rig.config().gimbal_locked(),
    );
    println!("final hash: {}", hex32(last_hash));
    Ok(())
}
