//! Cheese Toss entry point
//!
//! Headless demo driver: runs one scripted round at a simulated 60 Hz,
//! logging phase transitions and throws, then dumps the final state as
//! JSON. Wire a real renderer and input source to `GameLoop` for the
//! playable version; the simulation neither knows nor cares.

use std::time::{SystemTime, UNIX_EPOCH};

use cheese_toss::consts::{FLIGHT_DURATION, START_DELAY};
use cheese_toss::{GameLoop, GamePhase};

const DT: f32 = 1.0 / 60.0;

/// Fast-forward the loop by `seconds` of frame time
fn run(game: &mut GameLoop, seconds: f32) {
    for _ in 0..(seconds / DT).round() as u32 {
        game.frame(DT);
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    log::info!("cheese toss, seed {seed}");

    let mut game = GameLoop::new(seed);
    game.request_start();
    run(&mut game, START_DELAY + 0.1);

    // Scripted player: a few throws at different charge levels
    for hold in [0.4, 1.2, 2.5] {
        if game.state().phase != GamePhase::Playing {
            break;
        }
        game.charge_start();
        run(&mut game, hold);
        game.charge_end();
        log::info!(
            "threw after holding {:.2}s, score now {:.2}g",
            game.state().last_charge(),
            game.state().score,
        );
        run(&mut game, FLIGHT_DURATION + 0.1);
    }

    // Let the round run out
    while game.state().phase == GamePhase::Playing {
        run(&mut game, 1.0);
    }

    println!("final score: {:.2}g", game.state().score);
    match serde_json::to_string_pretty(game.state()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("state dump failed: {err}"),
    }
}
