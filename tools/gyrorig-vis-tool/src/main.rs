//! gyrorig-vis-tool — minimal wireframe viewer (winit 0.28 + pixels 0.13)

use std::time::Instant;

use glam::{Quat, Vec3};
use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use gyrorig_core::{FrameClock, RigBody};
use gyrorig_rig::{GyroRig, InputEvent, Inputs, SimRig};
use gyrorig_sim::{SpinAxis, SpinDirection};
use gyrorig_viz::DebugSettings;

/* ---------------- env helpers ---------------- */
fn env_u32(key: &str, default: u32) -> u32 {
    std::env::var(key).ok().and_then(|s| s.parse().ok()).unwrap_or(default)
}
fn env_f32(key: &str, default: f32) -> f32 {
    std::env::var(key).ok().and_then(|s| s.parse().ok()).unwrap_or(default)
}

/* ---------------- camera ---------------- */
#[derive(Clone, Copy)]
struct Cam {
    /// Fixed isometric-ish view rotation applied before projection.
    view: Quat,
    ppm: f32, // pixels per world unit
}
impl Cam {
    fn new(ppm: f32) -> Self {
        let view = Quat::from_rotation_x(-0.45) * Quat::from_rotation_y(0.6);
        Self { view, ppm }
    }
    /// Orthographic: rotate into view space, keep (x, y), y up on screen.
    fn world_to_screen(&self, p: Vec3, w: u32, h: u32) -> (i32, i32) {
        let v = self.view * p;
        let sx = (w as f32 * 0.5) + v.x * self.ppm;
        let sy = (h as f32 * 0.5) - v.y * self.ppm;
        (sx.round() as i32, sy.round() as i32)
    }
}

/* ---------------- tiny raster helpers ---------------- */
fn put(px: &mut [u8], w: u32, h: u32, x: i32, y: i32, rgba: [u8; 4]) {
    if x < 0 || y < 0 { return; }
    let (x, y) = (x as u32, y as u32);
    if x >= w || y >= h { return; }
    let i = ((y * w + x) * 4) as usize;
    px[i..i + 4].copy_from_slice(&rgba);
}
fn line(px: &mut [u8], w: u32, h: u32, mut x0: i32, mut y0: i32, x1: i32, y1: i32, rgba: [u8; 4]) {
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put(px, w, h, x0, y0, rgba);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}
fn line3(px: &mut [u8], w: u32, h: u32, cam: Cam, a: Vec3, b: Vec3, rgba: [u8; 4]) {
    let (x0, y0) = cam.world_to_screen(a, w, h);
    let (x1, y1) = cam.world_to_screen(b, w, h);
    line(px, w, h, x0, y0, x1, y1, rgba);
}
fn draw_grid(px: &mut [u8], w: u32, h: u32, cam: Cam) {
    let rgba = [40, 40, 40, 255];
    for i in -4..=4 {
        let k = i as f32 * 0.5;
        line3(px, w, h, cam, Vec3::new(k, 0.0, -2.0), Vec3::new(k, 0.0, 2.0), rgba);
        line3(px, w, h, cam, Vec3::new(-2.0, 0.0, k), Vec3::new(2.0, 0.0, k), rgba);
    }
}

/* ---------------- rig wireframe ---------------- */
const SEGMENTS: usize = 48;

/// Unit circle in the plane perpendicular to `normal`, scaled by `radius`.
fn ring_point(normal: Vec3, radius: f32, i: usize) -> Vec3 {
    let theta = (i as f32 / SEGMENTS as f32) * std::f32::consts::TAU;
    // pick two unit vectors spanning the ring plane
    let (u, v) = if normal == Vec3::Y {
        (Vec3::X, Vec3::Z)
    } else if normal == Vec3::X {
        (Vec3::Y, Vec3::Z)
    } else {
        (Vec3::X, Vec3::Y)
    };
    (u * theta.cos() + v * theta.sin()) * radius
}

fn draw_ring(
    px: &mut [u8], w: u32, h: u32, cam: Cam,
    rot: Quat, normal: Vec3, radius: f32, rgba: [u8; 4],
) {
    for i in 0..SEGMENTS {
        let a = rot * ring_point(normal, radius, i);
        let b = rot * ring_point(normal, radius, i + 1);
        line3(px, w, h, cam, a, b, rgba);
    }
}

fn draw_wheel(px: &mut [u8], w: u32, h: u32, cam: Cam, rot: Quat, rgba: [u8; 4]) {
    draw_ring(px, w, h, cam, rot, Vec3::Y, 1.0, rgba);
    // spokes make the spin visible
    for s in 0..6 {
        let rim = rot * ring_point(Vec3::Y, 1.0, s * (SEGMENTS / 6));
        line3(px, w, h, cam, Vec3::ZERO, rim, rgba);
    }
}

fn draw_arrow(px: &mut [u8], w: u32, h: u32, cam: Cam, dir: Vec3, len: f32, rgba: [u8; 4]) {
    if dir == Vec3::ZERO { return; }
    let tip = dir * len;
    line3(px, w, h, cam, Vec3::ZERO, tip, rgba);
    let (tx, ty) = cam.world_to_screen(tip, w, h);
    line(px, w, h, tx - 3, ty, tx + 3, ty, rgba);
    line(px, w, h, tx, ty - 3, tx, ty + 3, rgba);
}

/* ---------------- main ---------------- */
fn main() {
    // determinism clock (30..240 Hz)
    let hz = env_u32("GYRO_HZ", 60).clamp(30, 240);
    let mut dt = std::env::var("GYRO_DT").ok().and_then(|s| s.parse::<f32>().ok()).unwrap_or(1.0 / hz as f32);
    if dt <= 0.0 { dt = 1.0 / 60.0; }

    let scale = env_f32("VIS_SCALE", 160.0);
    let mut cam = Cam::new(scale);
    let mut show_grid = true;

    let el = EventLoop::new();
    let size = LogicalSize::new(900.0, 900.0);
    let window = WindowBuilder::new()
        .with_title("gyrorig-vis-tool")
        .with_inner_size(size)
        .build(&el)
        .expect("failed to create window");

    let size_px = window.inner_size();
    let width = size_px.width.max(1);
    let height = size_px.height.max(1);
    let surface = SurfaceTexture::new(width, height, &window);
    let mut pixels = Pixels::new(width, height, surface).expect("pixels init failed");

    let mut rig = GyroRig::new();
    rig.set_debug(DebugSettings { print_every: (hz * 5).max(1), ..DebugSettings::default() });

    // UI events queue here and land strictly between frames.
    let mut pending = Inputs::default();

    let mut last = Instant::now();
    let mut elapsed = 0.0f32;
    let mut acc = 0.0f32;
    let mut paused = false;

    el.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state, virtual_keycode: Some(key), .. }, ..
                } => {
                    let down = state == ElementState::Pressed;
                    if !down { return; }
                    match key {
                        VirtualKeyCode::Escape => *control_flow = ControlFlow::Exit,
                        VirtualKeyCode::Space => paused = !paused,
                        VirtualKeyCode::G => show_grid = !show_grid,
                        VirtualKeyCode::Q => cam.ppm = (cam.ppm * 0.9).max(40.0),
                        VirtualKeyCode::E => cam.ppm = (cam.ppm * 1.1).min(800.0),
                        VirtualKeyCode::Up => pending.push(InputEvent::SetSpinRate {
                            rpm: rig.config().spin_rate_rpm() + 10.0,
                        }),
                        VirtualKeyCode::Down => pending.push(InputEvent::SetSpinRate {
                            rpm: rig.config().spin_rate_rpm() - 10.0,
                        }),
                        VirtualKeyCode::R => pending.push(InputEvent::SetSpinDirection {
                            dir: rig.config().spin_direction().flipped(),
                        }),
                        VirtualKeyCode::X => pending.push(InputEvent::SelectAxis { axis: SpinAxis::X }),
                        VirtualKeyCode::Y => pending.push(InputEvent::SelectAxis { axis: SpinAxis::Y }),
                        VirtualKeyCode::Z => pending.push(InputEvent::SelectAxis { axis: SpinAxis::Z }),
                        VirtualKeyCode::L => pending.push(InputEvent::SetGimbalLock {
                            locked: !rig.config().gimbal_locked(),
                        }),
                        VirtualKeyCode::Left | VirtualKeyCode::Right => {
                            if paused {
                                elapsed += dt;
                                rig.apply_inputs(&pending);
                                pending.clear();
                                rig.step(FrameClock::new(elapsed, dt));
                            }
                        }
                        _ => {}
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                // fixed-step update
                let now = Instant::now();
                let dt_real = (now - last).as_secs_f32();
                last = now;

                if !paused {
                    acc += dt_real;
                    if acc > 0.25 { acc = 0.25; } // cap hiccups
                    while acc >= dt {
                        // queued UI events are applied-before the step reads config
                        if !pending.is_empty() {
                            rig.apply_inputs(&pending);
                            pending.clear();
                        }
                        elapsed += dt;
                        rig.step(FrameClock::new(elapsed, dt));
                        acc -= dt;
                    }
                }
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                let frame = pixels.frame_mut();
                for px in frame.chunks_exact_mut(4) { px.copy_from_slice(&[12, 12, 16, 255]); }

                if show_grid { draw_grid(frame, width, height, cam); }

                let wheel = rig.body_orientation(RigBody::Wheel).rot;
                let outer = rig.body_orientation(RigBody::OuterRing).rot;
                let inner = rig.body_orientation(RigBody::InnerRing).rot;

                draw_ring(frame, width, height, cam, outer, Vec3::Z, 1.6, [100, 200, 255, 255]);
                draw_ring(frame, width, height, cam, inner, Vec3::X, 1.3, [170, 120, 240, 255]);
                draw_wheel(frame, width, height, cam, wheel, [220, 160, 80, 255]);

                let v = rig.angular_vector();
                let rgba = match rig.config().spin_direction() {
                    SpinDirection::Forward => [255, 80, 80, 255],
                    SpinDirection::Reverse => [80, 255, 120, 255],
                };
                draw_arrow(frame, width, height, cam, v.dir, v.magnitude, rgba);

                let _ = pixels.render();
            }
            _ => {}
        }
    });
}
