use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use gyrorig_core::{stage_digest, StepStage};

#[derive(Default)]
pub struct StageRecorder { stages: Vec<StepStage> }

impl StageRecorder {
    pub fn new() -> Self { Self { stages: Vec::new() } }
    pub fn push(&mut self, s: StepStage) { self.stages.push(s); }
    pub fn clear(&mut self) { self.stages.clear(); }
    pub fn digest(&self) -> [u8; 32] { stage_digest(&self.stages) }
}

/// Periodic debug output knobs for the rig. `print_every`/`json_every` are
/// tick intervals; 0 disables.
#[derive(Copy, Clone, Debug)]
pub struct DebugSettings {
    pub print_every: u32,
    pub json_every: u32,
    pub show_bodies: bool,
    pub show_config: bool,
    pub max_lines: usize,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self { print_every: 0, json_every: 0, show_bodies: true, show_config: true, max_lines: 10 }
    }
}

/// Per-step provenance events. Payloads are plain arrays so the JSONL dump
/// stays stable across math-crate versions.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "ev")]
pub enum LedgerEvent {
    SpinIncrement { axis: [f32; 3], angle: f32 },
    GimbalOffset { body: String, angle: f32 },
    InputApplied { tick: u64, what: String },
    NoopFrame { tick: u64 },
}

/// Bounded per-step event buffer. Cleared at the top of each step; events
/// past the cap are dropped, not reallocated.
pub struct Ledger {
    events: Vec<LedgerEvent>,
    cap: usize,
}

impl Ledger {
    pub fn new(cap: usize) -> Self {
        Self { events: Vec::with_capacity(cap.min(64)), cap }
    }

    pub fn push(&mut self, ev: LedgerEvent) {
        if self.events.len() < self.cap { self.events.push(ev); }
    }

    pub fn clear(&mut self) { self.events.clear(); }
    pub fn iter(&self) -> impl Iterator<Item = &LedgerEvent> { self.events.iter() }
    pub fn len(&self) -> usize { self.events.len() }
    pub fn is_empty(&self) -> bool { self.events.is_empty() }

    /// One JSON object per line, `<dir>/ledger_<tick>.jsonl`.
    pub fn write_jsonl(&self, dir: impl AsRef<Path>, tick: u64) -> std::io::Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let mut f = fs::File::create(dir.join(format!("ledger_{tick:08}.jsonl")))?;
        for ev in &self.events {
            let line = serde_json::to_string(ev)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn cap_bounds_the_buffer() {
        let mut l = Ledger::new(2);
        for i in 0..5 {
            l.push(LedgerEvent::NoopFrame { tick: i });
        }
        assert_eq!(l.len(), 2);
    }

    #[test] fn jsonl_round_trips_through_disk() {
        let mut l = Ledger::new(16);
        l.push(LedgerEvent::SpinIncrement { axis: [0.0, 1.0, 0.0], angle: 0.1047 });
        l.push(LedgerEvent::GimbalOffset { body: "outer_ring".into(), angle: 4.2e-4 });
        let dir = std::env::temp_dir().join("gyrorig_ledger_test");
        l.write_jsonl(&dir, 7).unwrap();
        let text = std::fs::read_to_string(dir.join("ledger_00000007.jsonl")).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("SpinIncrement"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
