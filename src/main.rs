//! Ball Pit entry point
//!
//! Runs a scripted headless session: synthetic 60 fps frames, a few pointer
//! gestures, periodic statistics in the log, and a text rendering of the
//! final frame on stdout.
//!
//! Usage: `ball-pit [settings.json]`

use std::process::ExitCode;

use glam::Vec2;

use ball_pit::{ConfigError, Settings};
use ball_pit::platform::{FrameTimer, PointerAction, PointerController};
use ball_pit::renderer::{TextCanvas, draw_scene};
use ball_pit::sim::Simulation;

/// Frame interval of the synthetic host (ms)
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Session length in frames
const SESSION_FRAMES: u32 = 600;

/// A scripted pointer event, in text-canvas cells
enum Gesture {
    Press(Vec2),
    Move(Vec2),
    Release,
}

/// Frame index at which each gesture happens
fn script() -> Vec<(u32, Gesture)> {
    vec![
        (10, Gesture::Press(Vec2::new(20.0, 5.0))),
        (40, Gesture::Move(Vec2::new(50.0, 5.0))),
        (70, Gesture::Release),
        (120, Gesture::Press(Vec2::new(60.0, 8.0))),
        (150, Gesture::Release),
        // Whatever landed near the floor's center gets blown up
        (300, Gesture::Press(Vec2::new(40.0, 38.0))),
        (301, Gesture::Release),
    ]
}

fn load_settings() -> Result<Settings, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => {
            log::info!("No settings file given, using defaults");
            Ok(Settings::default())
        }
    }
}

fn setup() -> Result<(Settings, Simulation), ConfigError> {
    let settings = load_settings()?;
    let sim = Simulation::demo(&settings)?;
    Ok((settings, sim))
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Ball Pit (headless) starting...");

    let (settings, mut sim) = match setup() {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match settings.to_json() {
        Ok(json) => log::debug!("Effective settings: {}", json),
        Err(e) => log::warn!("{}", e),
    }

    let mut input = PointerController::new(&settings);
    let mut timer = FrameTimer::new();
    let mut canvas = TextCanvas::new(80, 40);
    let mut gestures = script().into_iter().peekable();

    for frame in 0..SESSION_FRAMES {
        while let Some((_, gesture)) = gestures.next_if(|(at, _)| *at == frame) {
            match gesture {
                Gesture::Press(px) => match input.press(&mut sim, &canvas, px) {
                    PointerAction::Exploded(body) => {
                        log::info!("frame {}: exploded body at {:?}", frame, body.pos)
                    }
                    PointerAction::Spawned(index) => {
                        log::info!("frame {}: spawned body #{}", frame, index)
                    }
                    PointerAction::Rejected => log::warn!("frame {}: spawn rejected", frame),
                },
                Gesture::Move(px) => input.move_to(&canvas, px),
                Gesture::Release => {
                    if input.is_holding() {
                        log::info!("frame {}: hold released", frame);
                    }
                    input.release();
                }
            }
        }

        let elapsed = timer.elapsed(f64::from(frame) * FRAME_MS);
        input.update(&mut sim, elapsed);
        sim.tick(elapsed);

        if frame % 60 == 0 {
            log::info!(
                "t={:.1}s bodies={} kinetic={:.1} steps={}",
                f64::from(frame) * FRAME_MS / 1000.0,
                sim.bodies.len(),
                sim.bodies.kinetic_energy(),
                sim.steps()
            );
        }
    }

    draw_scene(&mut canvas, input.mapper(), &sim.bodies);
    print!("{canvas}");
    println!(
        "{} bodies after {} steps ({:.1}s simulated)",
        sim.bodies.len(),
        sim.steps(),
        sim.steps() as f32 * sim.params.dt
    );

    ExitCode::SUCCESS
}
