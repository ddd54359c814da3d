//! Space Shooter entry point
//!
//! Headless demo: plays one session with the autopilot at a simulated 60 fps
//! and prints the final state. An optional first argument names a tuning
//! JSON file.

use space_shooter::sim::{GameEvent, GamePhase, SimulationEngine, pilot_input};
use space_shooter::{Arena, Tuning};

/// Simulated frame length
const FRAME_MS: u64 = 16;
/// Stop after ten simulated minutes even if the pilot survives
const MAX_FRAMES: u64 = 60 * 60 * 10;

fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    }
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn main() {
    init_logging();

    let tuning = match std::env::args().nth(1) {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Failed to load tuning from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    let seed = 0x5eed;
    let arena = Arena::default();
    let mut engine = SimulationEngine::new(seed, tuning, arena);
    engine.start_game();

    let mut now = 0;
    let mut kills = 0u32;
    let mut frames = 0;
    while engine.game_state() == GamePhase::Playing && frames < MAX_FRAMES {
        let input = pilot_input(engine.state());
        if input.fire() {
            engine.shoot(now);
        }
        engine.tick(now, &input, arena);

        for event in engine.drain_events() {
            match event {
                GameEvent::ScoreChanged(score) if score > 0 => kills += 1,
                GameEvent::LivesChanged(lives) => log::info!("Lives: {lives}"),
                GameEvent::GameOver { final_score } => {
                    log::info!("Game over at {:.1}s, score {final_score}", now as f64 / 1000.0)
                }
                _ => {}
            }
        }

        now += FRAME_MS;
        frames += 1;
    }

    log::info!(
        "Session finished after {frames} frames: score {}, kills {kills}, lives {}, spawn interval {}ms",
        engine.score(),
        engine.lives(),
        engine.spawn_interval_ms()
    );

    match engine.snapshot_json() {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize final state: {e}"),
    }
}
